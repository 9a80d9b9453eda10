use language_selector::{
    ConfyStore, LanguageSelector, Origin, Selection, SelectorConfig, SelectorError,
};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

// Window size constants
pub const DEFAULT_WINDOW_WIDTH: f32 = 720.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 480.0;

pub const APP_NAME: &str = "language-selector";

// Oldest entries are dropped past this
const MAX_SELECTION_LOG: usize = 50;

mod app_impl;
mod components;
pub mod i18n;

pub use i18n::{t, tf, Language};

// Struct for storing settings in confy
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub current_language: Language,
    pub selector: SelectorConfig,
    pub use_external_trigger: bool,
    pub show_settings: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            current_language: Language::English,
            selector: SelectorConfig::default(),
            use_external_trigger: false,
            show_settings: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionRecord {
    pub selection: Selection,
    pub origin: Origin,
}

pub struct App {
    pub settings: AppSettings,
    pub store: ConfyStore,
    pub selector: Option<LanguageSelector>,
    pub selections: Rc<RefCell<Vec<SelectionRecord>>>,
    pub selector_error: Option<String>,
    pub quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            settings: AppSettings::default(),
            store: ConfyStore::new(APP_NAME),
            selector: None,
            selections: Rc::default(),
            selector_error: None,
            quit: false,
        }
    }
}

impl App {
    pub fn load() -> Self {
        i18n::init();

        let mut app = App::default();
        match confy::load::<AppSettings>(APP_NAME, None) {
            Ok(settings) => app.settings = settings,
            Err(err) => tracing::error!("Failed to load app settings, using defaults: {}", err),
        }

        i18n::set_language(app.settings.current_language);
        app.rebuild_selector();
        app
    }

    /// Drops the current selector and builds a fresh one from the settings.
    /// Building replays a remembered pick, which shows up in the selection log.
    pub fn rebuild_selector(&mut self) {
        // Unbind the old instance before the new one binds
        self.selector = None;

        let sink = self.selections.clone();
        let builder = LanguageSelector::builder(self.settings.selector.clone())
            .store(self.store.clone())
            .on_select(move |selection, origin| {
                let mut log = sink.borrow_mut();
                log.push(SelectionRecord { selection, origin });
                if log.len() > MAX_SELECTION_LOG {
                    log.remove(0);
                }
            });

        match builder.build() {
            Ok(selector) => {
                tracing::info!("Selector built");
                self.selector = Some(selector);
                self.selector_error = None;
            }
            Err(err) => self.report_selector_error(err),
        }
    }

    /// Pushes edited settings into the live selector. Persistence and
    /// default-language changes only take effect on rebuild, so those rebuild.
    pub fn apply_selector_settings(&mut self) {
        let needs_rebuild = match &self.selector {
            Some(selector) => {
                let live = selector.config();
                live.remember_selection != self.settings.selector.remember_selection
                    || live.default_language_code != self.settings.selector.default_language_code
            }
            None => true,
        };

        if needs_rebuild {
            self.rebuild_selector();
        } else if let Some(selector) = &mut self.selector {
            if let Err(err) = selector.apply_config(self.settings.selector.clone()) {
                self.report_selector_error(err);
                return;
            }
            self.selector_error = None;
        }

        self.save_state();
    }

    fn report_selector_error(&mut self, err: SelectorError) {
        tracing::error!("Invalid selector settings: {}", err);
        self.selector_error = Some(err.to_string());
    }

    pub fn save_state(&self) {
        match confy::store(APP_NAME, None, &self.settings) {
            Ok(_) => tracing::info!("Settings stored successfully"),
            Err(err) => tracing::error!("Failed to store app settings: {}", err),
        }
    }

    pub fn set_language(&mut self, lang: Language) {
        self.settings.current_language = lang;
        i18n::set_language(lang);

        let selector = &mut self.settings.selector;
        selector.button_label = t("select_language");
        selector.placeholder = t("search_language");
        selector.not_found_label = t("language_not_found");

        self.apply_selector_settings();
    }

    pub fn get_language(&self) -> Language {
        self.settings.current_language
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }
}

// Include the version info module generated at build time
pub mod version_info {
    include!(concat!(env!("OUT_DIR"), "/version_info.rs"));

    pub fn formatted_version() -> String {
        format!("Version {} ({})", VERSION, GIT_HASH)
    }
}
