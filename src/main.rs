//zpad/src/main.rs
use eframe::egui;

use zpad::app::gui::ZpadApp;
use zpad::kernel::services::adapters::{load_settings, KeybindingService};
use zpad::kernel::services::ports::EditorConfig;
use zpad::kernel::{window_title, APP_NAME};

mod logging;

fn main() -> eframe::Result<()> {
    let logging = logging::init();
    if let Some(guard) = logging.as_ref() {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging to file");
    }

    let mut config = EditorConfig::default();
    let mut keybindings = KeybindingService::with_defaults();
    if let Some(settings) = load_settings() {
        config.apply(&settings.editor);
        let applied = keybindings.apply_rules(&settings.keybindings);
        tracing::info!(rules = applied, "keybinding rules applied");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title(window_title(None)),
        ..Default::default()
    };

    let result = eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            Ok(Box::new(ZpadApp::new(cc, config, keybindings)) as Box<dyn eframe::App>)
        }),
    );
    if let Err(e) = &result {
        tracing::error!(error = %e, "event loop failed");
    }
    result
}
