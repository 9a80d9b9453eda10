//! A searchable language dropdown for egui.
//!
//! The toggle opens a panel holding an optional search box and the filtered
//! catalogue. Picking a row reports it through the `on_select` callback and
//! closes the panel. Open/close decisions live in [`visibility`], filtering
//! and labels in [`filter`], persistence of the last pick in [`store`].

use eframe::egui::{
    self, os::OperatingSystem, Button, Frame, Order, Pos2, Rect, Response, RichText, ScrollArea,
    TextEdit, Ui,
};

pub mod catalogue;
pub mod config;
pub mod error;
pub mod filter;
pub mod languages;
pub mod store;
pub mod style;
pub mod visibility;

use catalogue::{Catalogue, LanguageEntry};
use config::{ActivationMode, SelectorConfig};
use error::SelectorError;
use filter::{Candidates, Row};
use store::KeyValueStore;
use style::{ButtonExt, FrameExt, Palette, TextEditExt};
use visibility::{
    Boundary, Element, EventKind, InputCapabilities, PointerEvent, Visibility,
    VisibilityController,
};

pub use visibility::Trigger;

const LIST_MAX_HEIGHT: f32 = 240.0;

/// What the callback receives: the whole entry when `include_details` is set,
/// otherwise just the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Details(LanguageEntry),
    Code(&'static str),
}

impl Selection {
    pub fn code(&self) -> &'static str {
        match self {
            Selection::Details(entry) => entry.code,
            Selection::Code(code) => *code,
        }
    }
}

/// Why the callback fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The user picked a row.
    User,
    /// Replayed from the durable store while the selector was being built.
    Restored,
}

type OnSelect = Box<dyn FnMut(Selection, Origin)>;

pub struct SelectorBuilder {
    config: SelectorConfig,
    on_select: Option<OnSelect>,
    store: Option<Box<dyn KeyValueStore>>,
    external_trigger: Option<egui::Id>,
}

impl SelectorBuilder {
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            config,
            on_select: None,
            store: None,
            external_trigger: None,
        }
    }

    /// Required. Called once per pick with [`Origin::User`].
    ///
    /// With `remember_selection` on, it is also called once during
    /// [`build`](Self::build), with [`Origin::Restored`], when the store holds a
    /// previous pick. That call is not a user action.
    pub fn on_select(mut self, on_select: impl FnMut(Selection, Origin) + 'static) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    pub fn store(mut self, store: impl KeyValueStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// A host widget that opens the panel instead of the built-in toggle.
    /// Only used when `default_toggle` is off.
    pub fn external_trigger(mut self, id: egui::Id) -> Self {
        self.external_trigger = Some(id);
        self
    }

    pub fn build(self) -> Result<LanguageSelector, SelectorError> {
        let on_select = self.on_select.ok_or(SelectorError::MissingOnSelect)?;
        self.config.validate()?;

        let catalogue = Catalogue::load(&self.config.options, self.config.sort_options);
        let inline = !self.config.default_toggle && self.external_trigger.is_none();
        let visibility = VisibilityController::new(
            self.config.initially_open() || inline,
            self.config.activation,
        );

        let mut selector = LanguageSelector {
            config: self.config,
            on_select,
            store: self.store,
            catalogue,
            search_text: String::new(),
            last_selected: None,
            visibility,
            external_trigger: self.external_trigger,
            panel_rect: None,
            trigger_hovered: false,
            root_hovered: false,
        };
        selector.restore();

        Ok(selector)
    }
}

pub struct LanguageSelector {
    config: SelectorConfig,
    on_select: OnSelect,
    store: Option<Box<dyn KeyValueStore>>,
    catalogue: Catalogue,
    search_text: String,
    last_selected: Option<&'static LanguageEntry>,
    visibility: VisibilityController,
    external_trigger: Option<egui::Id>,

    // Pointer tracking between frames
    panel_rect: Option<Rect>,
    trigger_hovered: bool,
    root_hovered: bool,
}

impl LanguageSelector {
    pub fn builder(config: SelectorConfig) -> SelectorBuilder {
        SelectorBuilder::new(config)
    }

    fn restore(&mut self) {
        let restored = if self.config.remember_selection {
            self.store
                .as_deref()
                .and_then(|store| store::load_selection(store))
        } else {
            None
        };

        // Only languages this selector offers can be restored or preselected
        let restored = restored.and_then(|entry| {
            let offered = self.catalogue.find(entry.code);
            if offered.is_none() {
                tracing::warn!("Ignoring remembered language '{}', not offered here", entry.code);
            }
            offered
        });

        match restored {
            Some(entry) => {
                tracing::info!("Restoring remembered language '{}'", entry.code);
                self.last_selected = Some(entry);
                let selection = self.selection_for(entry);
                (self.on_select)(selection, Origin::Restored);
            }
            None => {
                self.last_selected = self
                    .config
                    .default_language_code
                    .as_deref()
                    .and_then(|code| self.catalogue.find(code));
            }
        }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn clear_search(&mut self) {
        self.search_text.clear();
    }

    pub fn last_selected(&self) -> Option<&'static LanguageEntry> {
        self.last_selected
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    pub fn visibility(&self) -> &VisibilityController {
        &self.visibility
    }

    pub fn trigger(&self) -> Trigger {
        if self.config.default_toggle {
            Trigger::Default
        } else if let Some(id) = self.external_trigger {
            Trigger::External(id.value())
        } else {
            Trigger::Detached
        }
    }

    /// Swapping the external trigger rebinds on the next frame.
    pub fn set_external_trigger(&mut self, id: Option<egui::Id>) {
        let previous = self.trigger();
        self.external_trigger = id;
        self.reset_for_trigger(previous);
    }

    // A new kind of trigger starts from its initial state; inline lists are
    // always open.
    fn reset_for_trigger(&mut self, previous: Trigger) {
        let trigger = self.trigger();
        if std::mem::discriminant(&trigger) == std::mem::discriminant(&previous) {
            return;
        }

        let open = self.config.initially_open() || trigger == Trigger::Detached;
        let transition = if open {
            self.visibility.open()
        } else {
            self.visibility.close()
        };
        self.after_transition(transition);
    }

    pub fn candidates(&self) -> Candidates {
        Candidates::search(&self.catalogue, &self.search_text)
    }

    pub fn rows(&self) -> Vec<Row> {
        filter::rows(
            self.candidates(),
            self.config.geo_coverage,
            self.config.reverse_names,
            &self.config.not_found_label,
        )
    }

    pub fn toggle_label(&self) -> String {
        let show_pick =
            self.config.remember_selection || self.config.default_language_code.is_some();
        match self.last_selected {
            Some(entry) if show_pick => {
                filter::format_label(entry, self.config.geo_coverage, self.config.reverse_names)
            }
            _ => self.config.button_label.clone(),
        }
    }

    fn selection_for(&self, entry: &LanguageEntry) -> Selection {
        if self.config.include_details {
            Selection::Details(*entry)
        } else {
            Selection::Code(entry.code)
        }
    }

    pub fn select(&mut self, entry: &'static LanguageEntry) {
        tracing::info!("Language selected: {}", entry.code);
        let selection = self.selection_for(entry);
        self.last_selected = Some(entry);

        if self.config.remember_selection {
            if let Some(store) = self.store.as_deref_mut() {
                store::save_selection(store, entry);
            }
        }

        (self.on_select)(selection, Origin::User);

        if self.trigger() != Trigger::Detached {
            let transition = self.visibility.close();
            self.after_transition(transition);
        }
    }

    /// Selects by code within this selector's catalogue.
    pub fn select_code(&mut self, code: &str) -> bool {
        match self.catalogue.find(code) {
            Some(entry) => {
                self.select(entry);
                true
            }
            None => false,
        }
    }

    /// Binds listeners for the current trigger. Safe to call every frame; only
    /// a new trigger causes a rebind.
    pub fn mount(&mut self, capabilities: InputCapabilities) {
        let trigger = self.trigger();
        self.visibility.ensure_bound(trigger, capabilities);
    }

    pub fn unmount(&mut self) {
        self.visibility.unbind();
        self.trigger_hovered = false;
        self.root_hovered = false;
        self.panel_rect = None;
    }

    pub fn set_activation_mode(&mut self, mode: ActivationMode) {
        self.config.activation = mode;
        self.visibility.set_activation_mode(mode);
    }

    /// Applies a changed configuration to a live selector, keeping its search
    /// text and last pick. The open state is kept unless the trigger changes.
    pub fn apply_config(&mut self, config: SelectorConfig) -> Result<(), SelectorError> {
        config.validate()?;

        if config.options != self.config.options || config.sort_options != self.config.sort_options
        {
            self.catalogue = Catalogue::load(&config.options, config.sort_options);
        }
        self.visibility.set_activation_mode(config.activation);

        let previous = self.trigger();
        self.config = config;
        self.reset_for_trigger(previous);

        Ok(())
    }

    pub fn handle_event<B: Boundary>(
        &mut self,
        event: &PointerEvent<B::Target>,
        boundary: &B,
    ) -> Option<Visibility> {
        let transition = self.visibility.dispatch(event, boundary);
        self.after_transition(transition);
        transition
    }

    fn after_transition(&mut self, transition: Option<Visibility>) {
        if transition == Some(Visibility::Closed) {
            self.search_text.clear();
            self.panel_rect = None;
        }
    }

    pub fn show(&mut self, ui: &mut Ui) -> Response {
        let id = ui.make_persistent_id(&self.config.id_salt);

        if self.visibility.binding().map(|binding| binding.trigger()) != Some(self.trigger()) {
            let capabilities = detect_capabilities(ui.ctx());
            self.mount(capabilities);
        }

        let palette = Palette::for_theme(self.config.theme);
        let width = self.config.panel_width();

        ui.scope(|ui| {
            let trigger_response = match self.trigger() {
                Trigger::Default => {
                    let label = format!("{} {}", self.config.icons.toggle, self.toggle_label());
                    Some(ui.add(Button::new(label).toggle_style()))
                }
                Trigger::External(_) => self
                    .external_trigger
                    .and_then(|trigger_id| ui.ctx().read_response(trigger_id)),
                Trigger::Detached => None,
            };

            if self.trigger() == Trigger::Detached {
                if self.is_open() {
                    let inner = self.show_panel(ui, id, &palette, width);
                    self.panel_rect = Some(inner.rect);
                }
                return;
            }

            let trigger_rect = trigger_response.as_ref().map(|response| response.rect);
            self.pump_events(ui.ctx(), trigger_response.as_ref(), trigger_rect);

            if self.is_open() {
                let anchor = trigger_rect.map_or(ui.cursor().min, |rect| rect.left_bottom());
                let area = egui::Area::new(id.with("panel"))
                    .order(Order::Foreground)
                    .fixed_pos(anchor)
                    .show(ui.ctx(), |ui| self.show_panel(ui, id, &palette, width));
                if self.is_open() {
                    self.panel_rect = Some(area.response.rect);
                }
            }
        })
        .response
    }

    fn pump_events(
        &mut self,
        ctx: &egui::Context,
        trigger_response: Option<&Response>,
        trigger_rect: Option<Rect>,
    ) {
        let (pointer, pressed, press_pos) = ctx.input(|i| {
            (
                i.pointer.hover_pos(),
                i.pointer.any_pressed(),
                i.pointer.interact_pos(),
            )
        });

        let bounds = ScreenBounds {
            rects: trigger_rect.into_iter().chain(self.panel_rect).collect(),
        };

        if pressed {
            let event = PointerEvent::new(Element::Document, EventKind::PointerDown)
                .with_target(press_pos);
            self.handle_event(&event, &bounds);
        }

        if trigger_response.is_some_and(|response| response.clicked()) {
            self.handle_event(&PointerEvent::new(Element::Trigger, EventKind::Click), &bounds);
        }

        let trigger_hovered = trigger_rect
            .zip(pointer)
            .is_some_and(|(rect, pos)| rect.contains(pos));
        let root_hovered = pointer.is_some_and(|pos| bounds.contains_target(&pos));

        if trigger_hovered && !self.trigger_hovered {
            self.handle_event(&PointerEvent::new(Element::Trigger, EventKind::MouseEnter), &bounds);
        }
        if !trigger_hovered && self.trigger_hovered {
            let event =
                PointerEvent::new(Element::Trigger, EventKind::MouseLeave).with_target(pointer);
            self.handle_event(&event, &bounds);
        }
        if !root_hovered && self.root_hovered {
            let event = PointerEvent::new(Element::Root, EventKind::MouseLeave).with_target(pointer);
            self.handle_event(&event, &bounds);
        }

        self.trigger_hovered = trigger_hovered;
        self.root_hovered = root_hovered;
    }

    fn show_panel(&mut self, ui: &mut Ui, id: egui::Id, palette: &Palette, width: f32) -> Response {
        Frame::popup(ui.style())
            .panel_style(palette)
            .show(ui, |ui| {
                ui.set_width(width);

                if self.config.enable_search {
                    ui.horizontal(|ui| {
                        let search = TextEdit::singleline(&mut self.search_text)
                            .hint_text(self.config.placeholder.as_str())
                            .search_style(palette, width - 32.0);
                        ui.add(search);
                        ui.label(RichText::new(self.config.icons.search.as_str()).color(palette.muted));
                    });
                }

                palette.apply(ui);

                let mut picked = None;
                ScrollArea::vertical()
                    .id_salt(id.with("list"))
                    .max_height(LIST_MAX_HEIGHT)
                    .show(ui, |ui| {
                        for row in self.rows() {
                            match row {
                                Row::Entry { entry, label } => {
                                    let text = if self.last_selected == Some(entry) {
                                        RichText::new(label).strong()
                                    } else {
                                        RichText::new(label)
                                    };
                                    if ui.add(Button::new(text).row_style(width)).clicked() {
                                        picked = Some(entry);
                                    }
                                }
                                Row::NotFound(label) => {
                                    ui.vertical_centered(|ui| {
                                        ui.label(RichText::new(label).color(palette.muted));
                                    });
                                }
                            }
                        }
                    });

                if let Some(entry) = picked {
                    self.select(entry);
                }
            })
            .response
    }
}

impl Drop for LanguageSelector {
    fn drop(&mut self) {
        self.visibility.unbind();
    }
}

/// Touch-first platforms, or a touch in progress, count as unable to hover.
fn detect_capabilities(ctx: &egui::Context) -> InputCapabilities {
    let touch_os = matches!(ctx.os(), OperatingSystem::Android | OperatingSystem::IOS);
    let touching = ctx.input(|i| i.any_touches());

    if touch_os || touching {
        InputCapabilities::TOUCH_ONLY
    } else {
        InputCapabilities::MOUSE
    }
}

/// Screen rectangles covered by the widget this frame.
struct ScreenBounds {
    rects: Vec<Rect>,
}

impl Boundary for ScreenBounds {
    type Target = Pos2;

    fn contains_target(&self, target: &Pos2) -> bool {
        self.rects.iter().any(|rect| rect.contains(*target))
    }
}
