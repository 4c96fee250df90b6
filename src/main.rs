// Clinic Schedule Application
// Main entry point

use clinic_schedule::models::settings::Settings;
use clinic_schedule::services::settings::SettingsService;
use clinic_schedule::ui_egui::ScheduleApp;

fn load_settings() -> (Settings, Option<SettingsService>) {
    match SettingsService::from_default_location() {
        Ok(service) => {
            let settings = service.load_or_default();
            (settings, Some(service))
        }
        Err(err) => {
            log::warn!("Settings will not be persisted: {:#}", err);
            (Settings::default(), None)
        }
    }
}

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Clinic Schedule");

    let (settings, settings_service) = load_settings();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Clinic Schedule")
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size(ScheduleApp::min_window_size()),
        ..Default::default()
    };

    eframe::run_native(
        "Clinic Schedule",
        options,
        Box::new(|cc| Ok(Box::new(ScheduleApp::new(cc, settings, settings_service)))),
    )
}
