//! Application State
//!
//! Main application state and the eframe update loop.
//!
//! # Update Loop
//!
//! Each `eframe::App::update()` call:
//! 1. Ticks the live feed when the Live screen is active and a tick is due
//! 2. Renders the current page and collects a UI command
//! 3. Handles the command (screen switches)
//! 4. Renders the toast notification, if any
//!
//! Ticks run on the UI thread; the next repaint is scheduled for when the
//! following tick falls due.

use super::screens::{Navigator, ScreenController};
use super::tick_errors::{ErrorReport, TickErrors};
use crate::components::Toast;
use crate::config::AppConfig;
use crate::display::TextureSink;
use crate::events::UiCommand;
use crate::pages::{LiveScreen, LiveView, MenuScreen, MenuView, Page};
use logging::Logger;
use std::time::Instant;
use vision::{CameraConfig, CameraOpener, FeedState, LiveFeed, SsdLoader, TickOutcome};

/// Live screen wired to the real camera and SSD model
pub(super) type CameraLiveScreen = LiveScreen<CameraOpener, SsdLoader>;

pub struct App {
    pub(super) logger: Logger,
    pub(super) screens: ScreenController<MenuScreen, CameraLiveScreen>,
    pub(super) display: TextureSink,
    pub(super) current_toast: Option<Toast>,
    pub(super) tick_errors: TickErrors,
}

impl App {
    /// Builds the application from configuration
    pub fn new(ctx: &egui::Context) -> Self {
        let config = AppConfig::load();

        let logger = match Logger::with_component(
            config.log_path.clone(),
            config.log_level,
            "Frontend",
            false,
        ) {
            Ok(logger) => logger,
            Err(e) => {
                eprintln!("Failed to initialize logger: {}", e);
                std::process::exit(1);
            }
        };

        logger.info("[APP] Initializing application...");
        logger.info(&format!(
            "[APP] Logging to {} at level {}",
            logger.log_path().display(),
            logger.level()
        ));
        logger.info(&format!(
            "[APP] Configuration loaded - camera: {}, model: {}",
            config.camera_device,
            config.model.config.display()
        ));

        let camera_config = config.camera_config().unwrap_or_else(|e| {
            logger.warn(&format!("[APP] {}, using default camera", e));
            CameraConfig::default()
        });

        let vision_logger = logger.for_component("Vision");
        let feed = LiveFeed::new(
            CameraOpener::new(camera_config, vision_logger.clone()),
            SsdLoader::new(config.model.clone(), vision_logger.clone()),
            vision_logger,
        );

        let screens = ScreenController::new(MenuScreen, LiveScreen::new(feed), logger.clone());

        logger.info("[APP] Application initialized successfully");

        Self {
            logger,
            screens,
            display: TextureSink::new(ctx.clone()),
            current_toast: None,
            tick_errors: TickErrors::default(),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. Drive the live feed
        if self.screens.current() == Page::Live {
            self.tick_live_feed(ctx);
        }

        // 2. Render the view and collect UI commands
        let ui_command = self.render_view(ctx);

        // 3. Process UI command (if any)
        if let Some(command) = ui_command {
            self.handle_ui_command(command);
        }

        // 4. Render toast notification (if any)
        self.render_toast(ctx);
    }

    /// Called when the app is about to close
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.logger.info("[APP] Application shutting down...");

        if self.screens.live().feed_state() == FeedState::Running {
            self.logger.info("[APP] Stopping live feed");
            let _ = self.screens.switch_to(Page::Menu, Instant::now());
        }

        self.logger.info("[APP] Cleanup complete, goodbye!");
    }
}

impl App {
    fn tick_live_feed(&mut self, ctx: &egui::Context) {
        let now = Instant::now();

        match self.screens.live_mut().update(now, &mut self.display) {
            Ok(TickOutcome::Rendered(report)) => {
                self.logger.debug(&format!(
                    "[LIVE] Frame {} - {} detections, {} drawn",
                    report.frame_number,
                    report.detections,
                    report.overlays.len()
                ));
            }
            Ok(TickOutcome::Skipped | TickOutcome::NotDue) => {}
            Err(e) => {
                let message = e.to_string();
                match self.tick_errors.record(&message) {
                    ErrorReport::First => {
                        self.logger.error(&format!("[LIVE] Tick failed: {}", message));
                        self.show_error(format!("Frame error: {}", message));
                    }
                    ErrorReport::Repeated(count) => {
                        self.logger.warn(&format!(
                            "[LIVE] Tick failed {} times this session: {}",
                            count, message
                        ));
                    }
                    ErrorReport::Suppressed => {}
                }
            }
        }

        let feed = self.screens.live().feed();
        if let Some(wait) = feed.ticker().time_until_next(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }

    /// Renders the current page view and returns any UI command
    fn render_view(&mut self, ctx: &egui::Context) -> Option<UiCommand> {
        let mut ui_command = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui_command = match self.screens.current() {
                Page::Menu => MenuView::show(ui),
                Page::Live => LiveView::show(
                    ui,
                    self.display.texture(),
                    self.screens.live().last_report(),
                ),
            };
        });

        ui_command
    }

    fn render_toast(&mut self, ctx: &egui::Context) {
        if let Some(toast) = &self.current_toast
            && toast.show(ctx)
        {
            self.current_toast = None;
        }
    }

    /// Shows an error toast notification to the user
    pub(super) fn show_error(&mut self, message: String) {
        self.current_toast = Some(Toast::error(message));
    }

    /// Shows an info toast notification to the user
    pub(super) fn show_info(&mut self, message: String) {
        self.current_toast = Some(Toast::info(message));
    }
}
