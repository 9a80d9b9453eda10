use eframe::egui;

use super::{version_info, App};
use crate::app::components::{
    header::Header, selection_log::SelectionLog, settings_panel::SettingsPanel, AppComponent,
};

impl eframe::App for App {
    fn on_exit(&mut self, _ctx: Option<&eframe::glow::Context>) {
        tracing::info!("exiting and saving");
        if let Some(selector) = &mut self.selector {
            selector.unmount();
        }
        self.save_state();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!(
            "{} - {}",
            super::t("app_name"),
            version_info::formatted_version()
        )));

        egui::TopBottomPanel::top("Header")
            .show_separator_line(true)
            .show(ctx, |ui| {
                Header::add(self, ui);
                ui.add_space(4.0);
            });

        egui::TopBottomPanel::bottom("Selection Log")
            .resizable(true)
            .default_height(140.0)
            .show(ctx, |ui| {
                SelectionLog::add(self, ui);
            });

        if self.settings.show_settings {
            egui::SidePanel::left("Settings")
                .default_width(260.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        SettingsPanel::add(self, ui);
                    });
                });
        }

        egui::CentralPanel::default().show(ctx, |_ui| {});
    }
}
