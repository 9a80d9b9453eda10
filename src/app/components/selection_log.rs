use super::AppComponent;
use crate::app::{t, App, SelectionRecord};
use eframe::egui::{self, RichText};
use language_selector::{Origin, Selection};

pub struct SelectionLog;

impl AppComponent for SelectionLog {
    type Context = App;

    fn add(ctx: &mut Self::Context, ui: &mut eframe::egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong(t("selections"));
            if ui.small_button(t("clear")).clicked() {
                ctx.selections.borrow_mut().clear();
            }
        });

        let records = ctx.selections.borrow();
        if records.is_empty() {
            ui.label(RichText::new(t("no_selections")).weak());
            return;
        }

        egui::ScrollArea::vertical()
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for record in records.iter() {
                    ui.monospace(describe(record));
                }
            });
    }
}

fn describe(record: &SelectionRecord) -> String {
    let origin = match record.origin {
        Origin::User => t("origin_user"),
        Origin::Restored => t("origin_restored"),
    };
    let payload = match record.selection {
        Selection::Details(entry) => format!(
            "{{ code: {}, local: {}, international: {} }}",
            entry.code, entry.local_name, entry.international_name
        ),
        Selection::Code(code) => code.to_string(),
    };
    format!("[{}] {}", origin, payload)
}
