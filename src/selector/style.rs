use eframe::egui::{vec2, Button, Color32, Frame, Stroke, TextEdit, Ui};

use super::config::Theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub panel: Color32,
    pub search: Color32,
    pub row_hover: Color32,
    pub muted: Color32,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        let muted = Color32::from_rgb(0x80, 0x80, 0x80);
        match theme {
            Theme::Light => Self {
                panel: Color32::from_rgb(0xf7, 0xf7, 0xf7),
                search: Color32::WHITE,
                row_hover: Color32::from_rgb(0xe4, 0xe5, 0xe5),
                muted,
            },
            Theme::Dark => Self {
                panel: Color32::from_rgb(0x1c, 0x1e, 0x1d),
                search: Color32::from_rgb(0x27, 0x27, 0x2a),
                row_hover: Color32::from_rgb(0x0f, 0x10, 0x10),
                muted,
            },
        }
    }

    /// Row hover highlight for everything drawn in `ui` afterwards.
    pub fn apply(&self, ui: &mut Ui) {
        let widgets = &mut ui.visuals_mut().widgets;
        widgets.hovered.weak_bg_fill = self.row_hover;
        widgets.hovered.bg_stroke = Stroke::NONE;
        widgets.active.weak_bg_fill = self.row_hover;
    }
}

pub trait ButtonExt {
    fn toggle_style(self) -> Self;
    fn row_style(self, width: f32) -> Self;
}

impl ButtonExt for Button<'_> {
    fn toggle_style(self) -> Self {
        self.min_size(vec2(0.0, 28.0))
            .fill(Color32::TRANSPARENT)
            .stroke(Stroke::NONE)
    }

    fn row_style(self, width: f32) -> Self {
        self.min_size(vec2(width, 24.0))
            .fill(Color32::TRANSPARENT)
            .stroke(Stroke::NONE)
            .wrap_mode(eframe::egui::TextWrapMode::Truncate)
    }
}

pub trait FrameExt {
    fn panel_style(self, palette: &Palette) -> Self;
}

impl FrameExt for Frame {
    fn panel_style(self, palette: &Palette) -> Self {
        self.fill(palette.panel).corner_radius(4.0)
    }
}

pub trait TextEditExt {
    fn search_style(self, palette: &Palette, width: f32) -> Self;
}

impl TextEditExt for TextEdit<'_> {
    fn search_style(self, palette: &Palette, width: f32) -> Self {
        self.desired_width(width)
            .background_color(palette.search)
            .margin(vec2(8.0, 8.0))
    }
}
