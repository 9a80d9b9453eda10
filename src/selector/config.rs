use serde::{Deserialize, Serialize};

use super::error::SelectorError;
use super::languages;

// Panel width bounds in points, by coverage
const BOTH_MIN_WIDTH: f32 = 176.0;
const BOTH_MAX_WIDTH: f32 = 512.0;
const SINGLE_MIN_WIDTH: f32 = 96.0;
const SINGLE_MAX_WIDTH: f32 = 409.6;

/// Which names a row (and the remembered label) shows.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoCoverage {
    Local,
    International,
    #[default]
    Both,
}

impl GeoCoverage {
    pub fn all() -> Vec<GeoCoverage> {
        vec![
            GeoCoverage::Local,
            GeoCoverage::International,
            GeoCoverage::Both,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            GeoCoverage::Local => "local",
            GeoCoverage::International => "international",
            GeoCoverage::Both => "both",
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// The interaction that opens the panel.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationMode {
    #[default]
    Click,
    Hover,
}

impl ActivationMode {
    pub fn name(&self) -> &'static str {
        match self {
            ActivationMode::Click => "click",
            ActivationMode::Hover => "hover",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Icons {
    pub toggle: String,
    pub search: String,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            toggle: "🌐".to_string(),
            search: "🔍".to_string(),
        }
    }
}

/// Every option of a selector except the callback and the store, which are
/// handed to the builder. Serializable so hosts can keep it in their own
/// settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Emit the whole entry instead of just its code.
    pub include_details: bool,
    pub geo_coverage: GeoCoverage,
    /// Put the international name first when both names are shown.
    pub reverse_names: bool,
    pub enable_search: bool,
    /// Restrict the catalogue to these codes. Empty means every language.
    pub options: Vec<String>,
    pub sort_options: bool,
    pub button_label: String,
    pub placeholder: String,
    pub not_found_label: String,
    pub default_language_code: Option<String>,
    pub width: Option<f32>,
    /// Salt for the widget's egui ids, needed when several selectors share a ui.
    pub id_salt: String,
    pub theme: Theme,
    /// Render the built-in toggle button.
    pub default_toggle: bool,
    /// Initial visibility. Defaults to closed with the built-in toggle and
    /// open without it.
    pub open_on_mount: Option<bool>,
    pub activation: ActivationMode,
    /// Remember the last pick in the durable store and replay it on start.
    pub remember_selection: bool,
    pub icons: Icons,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            include_details: false,
            geo_coverage: GeoCoverage::Both,
            reverse_names: false,
            enable_search: true,
            options: vec![],
            sort_options: true,
            button_label: "Select language".to_string(),
            placeholder: "Search language...".to_string(),
            not_found_label: "Language not found".to_string(),
            default_language_code: None,
            width: None,
            id_salt: "language_selector".to_string(),
            theme: Theme::Light,
            default_toggle: true,
            open_on_mount: None,
            activation: ActivationMode::Click,
            remember_selection: false,
            icons: Icons::default(),
        }
    }
}

impl SelectorConfig {
    pub fn validate(&self) -> Result<(), SelectorError> {
        if let Some(width) = self.width {
            if !width.is_finite() || width <= 0.0 {
                return Err(SelectorError::InvalidWidth(width));
            }
        }

        if let Some(code) = &self.default_language_code {
            let lowered = code.to_lowercase();
            let offered = self.options.is_empty()
                || self
                    .options
                    .iter()
                    .any(|option| option.to_lowercase() == lowered);
            if !offered || languages::find(&lowered).is_none() {
                return Err(SelectorError::UnknownDefaultLanguage(code.clone()));
            }
        }

        Ok(())
    }

    pub fn initially_open(&self) -> bool {
        self.open_on_mount.unwrap_or(!self.default_toggle)
    }

    pub fn width_bounds(&self) -> (f32, f32) {
        match self.geo_coverage {
            GeoCoverage::Both => (BOTH_MIN_WIDTH, BOTH_MAX_WIDTH),
            _ => (SINGLE_MIN_WIDTH, SINGLE_MAX_WIDTH),
        }
    }

    /// The configured width clamped into the coverage's bounds, or the
    /// minimum when no width was given.
    pub fn panel_width(&self) -> f32 {
        let (min, max) = self.width_bounds();
        self.width.map_or(min, |width| width.clamp(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = SelectorConfig::default();

        assert_eq!(config.geo_coverage, GeoCoverage::Both);
        assert_eq!(config.activation, ActivationMode::Click);
        assert!(config.enable_search);
        assert!(config.sort_options);
        assert!(!config.initially_open());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn without_default_toggle_starts_open() {
        let config = SelectorConfig {
            default_toggle: false,
            ..Default::default()
        };
        assert!(config.initially_open());

        let config = SelectorConfig {
            default_toggle: false,
            open_on_mount: Some(false),
            ..Default::default()
        };
        assert!(!config.initially_open());
    }

    #[test]
    fn rejects_bad_width_and_unknown_default() {
        let config = SelectorConfig {
            width: Some(0.0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(SelectorError::InvalidWidth(0.0)));

        let config = SelectorConfig {
            default_language_code: Some("xx".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(SelectorError::UnknownDefaultLanguage("xx".to_string()))
        );
    }

    #[test]
    fn default_language_must_be_offered() {
        let mut config = SelectorConfig {
            options: vec!["en".to_string(), "fr".to_string()],
            default_language_code: Some("de".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(SelectorError::UnknownDefaultLanguage("de".to_string()))
        );

        config.default_language_code = Some("FR".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn width_is_clamped_by_coverage() {
        let mut config = SelectorConfig {
            width: Some(1000.0),
            ..Default::default()
        };
        assert_eq!(config.panel_width(), 512.0);

        config.geo_coverage = GeoCoverage::Local;
        assert_eq!(config.panel_width(), 409.6);

        config.width = None;
        assert_eq!(config.panel_width(), 96.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: SelectorConfig =
            serde_json::from_str(r#"{"geo_coverage":"local","activation":"hover"}"#).unwrap();

        assert_eq!(config.geo_coverage, GeoCoverage::Local);
        assert_eq!(config.activation, ActivationMode::Hover);
        assert_eq!(config.button_label, "Select language");
    }
}
