use super::AppComponent;
use crate::app::{t, App, Language};
use eframe::egui::{self, RichText};

pub struct Header;

impl AppComponent for Header {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        ui.horizontal(|ui| {
            ui.menu_button(t("app_name"), |ui| {
                let settings_text = if ctx.settings.show_settings {
                    RichText::new(format!("- {}", t("settings"))).strong()
                } else {
                    RichText::new(t("settings"))
                };
                if ui.button(settings_text).clicked() {
                    ctx.settings.show_settings = !ctx.settings.show_settings;
                    ctx.save_state();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button(t("exit")).clicked() {
                    ctx.quit();
                    ui.close_menu();
                }
            });

            // Language of the demo's own labels
            ui.menu_button("🗨", |ui| {
                for lang in Language::all() {
                    let is_selected = ctx.get_language() == lang;
                    let lang_text = if is_selected {
                        RichText::new(format!("- {}", lang.name())).strong()
                    } else {
                        RichText::new(lang.name())
                    };

                    if ui.button(lang_text).clicked() {
                        ctx.set_language(lang);
                        ui.close_menu();
                    }
                }
            });

            ui.separator();

            // A host-owned button the selector can bind to instead of its own
            let external = if ctx.settings.use_external_trigger && !ctx.settings.selector.default_toggle
            {
                let response = ui
                    .push_id("external_language_trigger", |ui| {
                        ui.button(format!("☰ {}", t("open_from_host")))
                    })
                    .inner;
                Some(response.id)
            } else {
                None
            };

            if let Some(selector) = &mut ctx.selector {
                selector.set_external_trigger(external);
                selector.show(ui);
            } else if let Some(error) = &ctx.selector_error {
                ui.label(RichText::new(error).color(egui::Color32::RED));
            }
        });
    }
}
