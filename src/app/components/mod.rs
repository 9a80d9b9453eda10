pub mod header;
pub mod selection_log;
pub mod settings_panel;

pub trait AppComponent {
    type Context;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui);
}
