use std::collections::BTreeSet;

use super::config::ActivationMode;

/// The parts of the widget an event can be observed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    /// The control that opens the panel, built-in or external.
    Trigger,
    /// The widget's outer bounds: toggle plus panel.
    Root,
    /// Anywhere in the window.
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Click,
    MouseEnter,
    MouseLeave,
    PointerDown,
}

pub type Listener = (Element, EventKind);

/// Which control activates the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// The selector's own toggle button.
    Default,
    /// A host widget, identified by its egui id value.
    External(u64),
    /// No trigger at all: the list is shown inline and never dismissed.
    Detached,
}

/// A pointer event. `target` is where the pointer is (for presses) or where it
/// went (for leaves); `None` means it left the window.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent<T> {
    pub element: Element,
    pub kind: EventKind,
    pub target: Option<T>,
}

impl<T> PointerEvent<T> {
    pub fn new(element: Element, kind: EventKind) -> Self {
        Self {
            element,
            kind,
            target: None,
        }
    }

    pub fn with_target(mut self, target: Option<T>) -> Self {
        self.target = target;
        self
    }
}

/// Answers whether an event target lies inside the widget.
pub trait Boundary {
    type Target;

    fn contains_target(&self, target: &Self::Target) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputCapabilities {
    pub touch_primary: bool,
    pub can_hover: bool,
}

impl InputCapabilities {
    pub const MOUSE: Self = Self {
        touch_primary: false,
        can_hover: true,
    };

    pub const TOUCH_ONLY: Self = Self {
        touch_primary: true,
        can_hover: false,
    };

    pub fn supports_hover(&self) -> bool {
        self.can_hover && !self.touch_primary
    }

    /// Hover degrades to click on devices that can't hover.
    pub fn resolve(&self, requested: ActivationMode) -> ActivationMode {
        match requested {
            ActivationMode::Hover if !self.supports_hover() => ActivationMode::Click,
            mode => mode,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Open,
    Closed,
}

/// The listeners registered for one trigger and one effective mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    trigger: Trigger,
    mode: ActivationMode,
    capabilities: InputCapabilities,
    listeners: BTreeSet<Listener>,
}

impl Binding {
    fn new(trigger: Trigger, requested: ActivationMode, capabilities: InputCapabilities) -> Self {
        let mode = capabilities.resolve(requested);
        let mut listeners = BTreeSet::new();

        if trigger != Trigger::Detached {
            match mode {
                ActivationMode::Hover => {
                    listeners.insert((Element::Trigger, EventKind::MouseEnter));
                    listeners.insert((Element::Trigger, EventKind::MouseLeave));
                    listeners.insert((Element::Root, EventKind::MouseLeave));
                }
                ActivationMode::Click => {
                    listeners.insert((Element::Trigger, EventKind::Click));
                }
            }
            listeners.insert((Element::Document, EventKind::PointerDown));
        }

        Self {
            trigger,
            mode,
            capabilities,
            listeners,
        }
    }

    pub fn trigger(&self) -> Trigger {
        self.trigger
    }

    /// The mode actually bound, after the hover fallback.
    pub fn mode(&self) -> ActivationMode {
        self.mode
    }

    pub fn listeners(&self) -> impl Iterator<Item = Listener> + '_ {
        self.listeners.iter().copied()
    }

    pub fn listens(&self, element: Element, kind: EventKind) -> bool {
        self.listeners.contains(&(element, kind))
    }
}

/// Owns the open/closed state and the listener binding that drives it.
#[derive(Debug)]
pub struct VisibilityController {
    visibility: Visibility,
    requested: ActivationMode,
    binding: Option<Binding>,
}

impl VisibilityController {
    pub fn new(open: bool, requested: ActivationMode) -> Self {
        Self {
            visibility: if open {
                Visibility::Open
            } else {
                Visibility::Closed
            },
            requested,
            binding: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn requested_mode(&self) -> ActivationMode {
        self.requested
    }

    pub fn binding(&self) -> Option<&Binding> {
        self.binding.as_ref()
    }

    /// Replaces any existing binding. Input capabilities are read here and
    /// nowhere else, so the effective mode stays fixed until the next bind.
    pub fn bind(&mut self, trigger: Trigger, capabilities: InputCapabilities) {
        self.unbind();

        let binding = Binding::new(trigger, self.requested, capabilities);
        tracing::info!(
            "Binding selector trigger {:?} in {} mode ({} listeners)",
            trigger,
            binding.mode.name(),
            binding.listeners.len()
        );
        self.binding = Some(binding);
    }

    /// Binds only when unbound or when the trigger changed. Returns whether a
    /// new binding was made.
    pub fn ensure_bound(&mut self, trigger: Trigger, capabilities: InputCapabilities) -> bool {
        match &self.binding {
            Some(binding) if binding.trigger == trigger => false,
            _ => {
                self.bind(trigger, capabilities);
                true
            }
        }
    }

    pub fn unbind(&mut self) -> Option<Binding> {
        let binding = self.binding.take();
        if let Some(binding) = &binding {
            tracing::info!(
                "Unbinding selector trigger {:?} ({} listeners)",
                binding.trigger,
                binding.listeners.len()
            );
        }
        binding
    }

    /// Switching modes tears the current binding down and binds again with the
    /// capabilities it was made with.
    pub fn set_activation_mode(&mut self, mode: ActivationMode) {
        if mode == self.requested {
            return;
        }
        self.requested = mode;

        if let Some(previous) = self.unbind() {
            self.bind(previous.trigger, previous.capabilities);
        }
    }

    pub fn dispatch<B: Boundary>(
        &mut self,
        event: &PointerEvent<B::Target>,
        boundary: &B,
    ) -> Option<Visibility> {
        let listening = self
            .binding
            .as_ref()
            .is_some_and(|binding| binding.listens(event.element, event.kind));
        if !listening {
            return None;
        }

        let inside = event
            .target
            .as_ref()
            .is_some_and(|target| boundary.contains_target(target));

        match event.kind {
            EventKind::Click => self.toggle(),
            EventKind::MouseEnter => self.open(),
            EventKind::MouseLeave if !inside => self.close(),
            EventKind::PointerDown if self.is_open() && !inside => self.close(),
            _ => None,
        }
    }

    pub fn open(&mut self) -> Option<Visibility> {
        self.set(Visibility::Open)
    }

    pub fn close(&mut self) -> Option<Visibility> {
        self.set(Visibility::Closed)
    }

    pub fn toggle(&mut self) -> Option<Visibility> {
        match self.visibility {
            Visibility::Open => self.close(),
            Visibility::Closed => self.open(),
        }
    }

    fn set(&mut self, visibility: Visibility) -> Option<Visibility> {
        if self.visibility == visibility {
            return None;
        }
        tracing::debug!("Selector {:?} -> {:?}", self.visibility, visibility);
        self.visibility = visibility;
        Some(visibility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Nodes inside the widget are named with a "widget/" prefix.
    struct Subtree;

    impl Boundary for Subtree {
        type Target = &'static str;

        fn contains_target(&self, target: &&'static str) -> bool {
            target.starts_with("widget/")
        }
    }

    fn listeners(controller: &VisibilityController) -> Vec<Listener> {
        controller
            .binding()
            .map(|binding| binding.listeners().collect())
            .unwrap_or_default()
    }

    fn click() -> PointerEvent<&'static str> {
        PointerEvent::new(Element::Trigger, EventKind::Click)
    }

    fn press(target: &'static str) -> PointerEvent<&'static str> {
        PointerEvent::new(Element::Document, EventKind::PointerDown).with_target(Some(target))
    }

    #[test]
    fn click_mode_listens_for_clicks_only() {
        let mut controller = VisibilityController::new(false, ActivationMode::Click);
        controller.bind(Trigger::Default, InputCapabilities::MOUSE);

        assert_eq!(
            listeners(&controller),
            vec![
                (Element::Trigger, EventKind::Click),
                (Element::Document, EventKind::PointerDown),
            ]
        );
    }

    #[test]
    fn hover_mode_listens_for_enter_and_leave() {
        let mut controller = VisibilityController::new(false, ActivationMode::Hover);
        controller.bind(Trigger::Default, InputCapabilities::MOUSE);

        let bound = listeners(&controller);
        assert!(bound.contains(&(Element::Trigger, EventKind::MouseEnter)));
        assert!(bound.contains(&(Element::Trigger, EventKind::MouseLeave)));
        assert!(bound.contains(&(Element::Root, EventKind::MouseLeave)));
        assert!(!bound.contains(&(Element::Trigger, EventKind::Click)));
    }

    #[test]
    fn hover_on_touch_only_device_binds_click() {
        let mut controller = VisibilityController::new(false, ActivationMode::Hover);
        controller.bind(Trigger::Default, InputCapabilities::TOUCH_ONLY);

        let binding = controller.binding().unwrap();
        assert_eq!(binding.mode(), ActivationMode::Click);
        assert!(binding.listens(Element::Trigger, EventKind::Click));
        assert!(!binding.listens(Element::Trigger, EventKind::MouseEnter));
        assert!(!binding.listens(Element::Root, EventKind::MouseLeave));
    }

    #[test]
    fn click_toggles() {
        let mut controller = VisibilityController::new(false, ActivationMode::Click);
        controller.bind(Trigger::Default, InputCapabilities::MOUSE);

        assert_eq!(controller.dispatch(&click(), &Subtree), Some(Visibility::Open));
        assert_eq!(controller.dispatch(&click(), &Subtree), Some(Visibility::Closed));
    }

    #[test]
    fn unbound_controller_ignores_events() {
        let mut controller = VisibilityController::new(false, ActivationMode::Click);

        assert_eq!(controller.dispatch(&click(), &Subtree), None);
        assert!(!controller.is_open());
    }

    #[test]
    fn press_outside_closes_press_inside_does_not() {
        let mut controller = VisibilityController::new(true, ActivationMode::Click);
        controller.bind(Trigger::Default, InputCapabilities::MOUSE);

        assert_eq!(controller.dispatch(&press("widget/row/3"), &Subtree), None);
        assert!(controller.is_open());

        assert_eq!(
            controller.dispatch(&press("page/header"), &Subtree),
            Some(Visibility::Closed)
        );
    }

    #[test]
    fn hover_leave_into_panel_keeps_open() {
        let mut controller = VisibilityController::new(false, ActivationMode::Hover);
        controller.bind(Trigger::Default, InputCapabilities::MOUSE);

        let enter = PointerEvent::new(Element::Trigger, EventKind::MouseEnter);
        assert_eq!(controller.dispatch(&enter, &Subtree), Some(Visibility::Open));

        let into_panel = PointerEvent::new(Element::Trigger, EventKind::MouseLeave)
            .with_target(Some("widget/panel"));
        assert_eq!(controller.dispatch(&into_panel, &Subtree), None);
        assert!(controller.is_open());

        let out_of_root = PointerEvent::new(Element::Root, EventKind::MouseLeave)
            .with_target(Some("page/body"));
        assert_eq!(
            controller.dispatch(&out_of_root, &Subtree),
            Some(Visibility::Closed)
        );
    }

    #[test]
    fn leaving_the_window_closes() {
        let mut controller = VisibilityController::new(true, ActivationMode::Hover);
        controller.bind(Trigger::Default, InputCapabilities::MOUSE);

        let gone = PointerEvent::new(Element::Root, EventKind::MouseLeave);
        assert_eq!(controller.dispatch(&gone, &Subtree), Some(Visibility::Closed));
    }

    #[test]
    fn mode_switch_replaces_listeners() {
        let mut controller = VisibilityController::new(false, ActivationMode::Click);
        controller.bind(Trigger::Default, InputCapabilities::MOUSE);

        controller.set_activation_mode(ActivationMode::Hover);

        let bound = listeners(&controller);
        assert!(!bound.contains(&(Element::Trigger, EventKind::Click)));
        assert!(bound.contains(&(Element::Trigger, EventKind::MouseEnter)));
        assert_eq!(
            bound
                .iter()
                .filter(|listener| **listener == (Element::Document, EventKind::PointerDown))
                .count(),
            1
        );
    }

    #[test]
    fn mode_switch_before_bind_does_not_bind() {
        let mut controller = VisibilityController::new(false, ActivationMode::Click);
        controller.set_activation_mode(ActivationMode::Hover);

        assert!(controller.binding().is_none());
        assert_eq!(controller.requested_mode(), ActivationMode::Hover);
    }

    #[test]
    fn ensure_bound_rebinds_on_trigger_change_only() {
        let mut controller = VisibilityController::new(false, ActivationMode::Click);

        assert!(controller.ensure_bound(Trigger::External(7), InputCapabilities::MOUSE));
        assert!(!controller.ensure_bound(Trigger::External(7), InputCapabilities::TOUCH_ONLY));
        assert!(controller.ensure_bound(Trigger::External(8), InputCapabilities::MOUSE));
        assert_eq!(controller.binding().unwrap().trigger(), Trigger::External(8));
    }

    #[test]
    fn capabilities_are_fixed_at_bind_time() {
        let mut controller = VisibilityController::new(false, ActivationMode::Hover);
        controller.ensure_bound(Trigger::Default, InputCapabilities::MOUSE);
        controller.ensure_bound(Trigger::Default, InputCapabilities::TOUCH_ONLY);

        assert_eq!(controller.binding().unwrap().mode(), ActivationMode::Hover);
    }

    #[test]
    fn detached_trigger_binds_nothing() {
        let mut controller = VisibilityController::new(true, ActivationMode::Click);
        controller.bind(Trigger::Detached, InputCapabilities::MOUSE);

        assert!(listeners(&controller).is_empty());
        assert_eq!(controller.dispatch(&press("page/body"), &Subtree), None);
        assert!(controller.is_open());
    }

    #[test]
    fn unbind_removes_everything() {
        let mut controller = VisibilityController::new(false, ActivationMode::Hover);
        controller.bind(Trigger::Default, InputCapabilities::MOUSE);

        let removed = controller.unbind().unwrap();
        assert_eq!(removed.listeners().count(), 4);
        assert!(controller.binding().is_none());
        assert!(controller.unbind().is_none());
    }
}
