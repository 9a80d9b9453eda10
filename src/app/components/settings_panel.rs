use super::AppComponent;
use crate::app::{t, tf, App};
use eframe::egui::{self, RichText};
use itertools::Itertools;
use language_selector::{ActivationMode, GeoCoverage, Theme};

pub struct SettingsPanel;

impl AppComponent for SettingsPanel {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        let mut changed = false;

        ui.heading(t("settings"));
        ui.add_space(6.0);

        let config = &mut ctx.settings.selector;

        ui.horizontal(|ui| {
            ui.label(t("coverage"));
            egui::ComboBox::from_id_salt("geo_coverage")
                .selected_text(config.geo_coverage.name())
                .show_ui(ui, |ui| {
                    for coverage in GeoCoverage::all() {
                        changed |= ui
                            .selectable_value(&mut config.geo_coverage, coverage, coverage.name())
                            .changed();
                    }
                });
        });

        changed |= ui
            .checkbox(&mut config.reverse_names, t("reverse_names"))
            .changed();
        changed |= ui
            .checkbox(&mut config.include_details, t("include_details"))
            .changed();
        changed |= ui
            .checkbox(&mut config.enable_search, t("enable_search"))
            .changed();
        changed |= ui
            .checkbox(&mut config.remember_selection, t("remember"))
            .changed();
        changed |= ui
            .checkbox(&mut config.default_toggle, t("default_toggle"))
            .changed();

        ui.add_enabled_ui(!config.default_toggle, |ui| {
            changed |= ui
                .checkbox(&mut ctx.settings.use_external_trigger, t("external_trigger"))
                .changed();
        });

        ui.horizontal(|ui| {
            ui.label(t("activation"));
            for mode in [ActivationMode::Click, ActivationMode::Hover] {
                changed |= ui
                    .radio_value(&mut config.activation, mode, mode.name())
                    .changed();
            }
        });

        ui.horizontal(|ui| {
            ui.label(t("theme"));
            changed |= ui.radio_value(&mut config.theme, Theme::Light, "☀").changed();
            changed |= ui.radio_value(&mut config.theme, Theme::Dark, "🌙").changed();
        });

        ui.horizontal(|ui| {
            ui.label(t("width"));
            let mut width = config.panel_width();
            let (min, max) = config.width_bounds();
            if ui
                .add(egui::Slider::new(&mut width, min..=max).step_by(1.0))
                .changed()
            {
                config.width = Some(width);
                changed = true;
            }
        });

        ui.separator();

        ui.label(t("options"));
        let options_id = ui.id().with("options_text");
        let mut options_text = ui
            .memory_mut(|mem| mem.data.get_temp::<String>(options_id))
            .unwrap_or_else(|| config.options.join(", "));
        let response = ui.text_edit_singleline(&mut options_text);
        ui.memory_mut(|mem| mem.data.insert_temp(options_id, options_text.clone()));
        if response.lost_focus() {
            let options = parse_codes(&options_text);
            if options != config.options {
                config.options = options;
                changed = true;
            }
        }

        changed |= ui
            .checkbox(&mut config.sort_options, t("sort_options"))
            .changed();

        ui.horizontal(|ui| {
            ui.label(t("default_language"));
            let default_id = ui.id().with("default_language_text");
            let mut code = ui
                .memory_mut(|mem| mem.data.get_temp::<String>(default_id))
                .unwrap_or_else(|| config.default_language_code.clone().unwrap_or_default());
            let response = ui.add(egui::TextEdit::singleline(&mut code).desired_width(48.0));
            ui.memory_mut(|mem| mem.data.insert_temp(default_id, code.clone()));
            if response.lost_focus() {
                let trimmed = code.trim();
                let code = (!trimmed.is_empty()).then(|| trimmed.to_string());
                if code != config.default_language_code {
                    config.default_language_code = code;
                    changed = true;
                }
            }
        });

        if let Some(selector) = &ctx.selector {
            let unresolved = selector.catalogue().unresolved();
            if !unresolved.is_empty() {
                ui.label(
                    RichText::new(tf("unresolved", &[unresolved.join(", ").as_str()]))
                        .color(egui::Color32::from_rgb(0xc0, 0x80, 0x00)),
                );
            }
        }

        if let Some(error) = &ctx.selector_error {
            ui.label(RichText::new(error).color(egui::Color32::RED));
        }

        if changed {
            ctx.apply_selector_settings();
        }
    }
}

fn parse_codes(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .dedup()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_and_space_separated_codes() {
        assert_eq!(parse_codes("fr, en,de  es"), vec!["fr", "en", "de", "es"]);
        assert_eq!(parse_codes(" , "), Vec::<String>::new());
        assert_eq!(parse_codes("fr,,fr"), vec!["fr"]);
    }
}
