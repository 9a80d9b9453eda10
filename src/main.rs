use crate::app::App;

use eframe::egui;

mod app;

// Fonts tried in order; local names span Latin, Cyrillic, CJK, Indic and more
fn preferred_font_names() -> Vec<&'static str> {
    match std::env::consts::OS {
        "macos" => vec!["PingFang SC", "Hiragino Sans GB", "Arial Unicode MS"],
        "windows" => vec!["Microsoft YaHei", "Nirmala UI", "Segoe UI"],
        _ => vec!["Noto Sans CJK SC", "Noto Sans", "DejaVu Sans"],
    }
}

fn load_font_bytes(handle: &font_kit::handle::Handle) -> Option<Vec<u8>> {
    match handle {
        font_kit::handle::Handle::Memory { bytes, .. } => Some(bytes.to_vec()),
        font_kit::handle::Handle::Path { path, .. } => std::fs::read(path).ok(),
    }
}

// Registers a system font ahead of egui's defaults so non-Latin names render
fn install_system_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    let source = font_kit::source::SystemSource::new();

    let mut found = preferred_font_names().into_iter().find_map(|font_name| {
        let family = source.select_family_by_name(font_name).ok()?;
        let font_data = family.fonts().first().and_then(load_font_bytes)?;
        tracing::info!("Using system font '{}'", font_name);
        Some(font_data)
    });

    if found.is_none() {
        found = source
            .select_best_match(
                &[font_kit::family_name::FamilyName::SansSerif],
                &font_kit::properties::Properties::new(),
            )
            .ok()
            .and_then(|handle| load_font_bytes(&handle));
    }

    let Some(font_data) = found else {
        tracing::warn!("No system font found, non-Latin names may not render");
        return;
    };

    const SYSTEM_FONT_NAME: &str = "SystemFont";
    fonts.font_data.insert(
        SYSTEM_FONT_NAME.to_owned(),
        egui::FontData::from_owned(font_data).into(),
    );
    if let Some(family) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
        family.insert(0, SYSTEM_FONT_NAME.to_owned());
    }
    if let Some(family) = fonts.families.get_mut(&egui::FontFamily::Monospace) {
        family.push(SYSTEM_FONT_NAME.to_owned());
    }

    ctx.set_fonts(fonts);
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("App booting...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([app::DEFAULT_WINDOW_WIDTH, app::DEFAULT_WINDOW_HEIGHT])
            .with_min_inner_size([360.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Language Selector",
        native_options,
        Box::new(|cc| {
            install_system_fonts(&cc.egui_ctx);
            Ok(Box::new(App::load()))
        }),
    )
    .map_err(|err| anyhow::anyhow!("Failed to start the window: {}", err))
}
