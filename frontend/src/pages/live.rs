//! Live Page
//!
//! Camera view with detection overlays and a button back to the menu.
//! `LiveScreen` owns the feed lifecycle; `LiveView` only draws.

use crate::app::Screen;
use crate::components::{Button, ButtonVariant, render_placeholder};
use crate::events::UiCommand;
use crate::pages::Page;
use egui::{Color32, RichText, TextureHandle, Vec2};
use std::time::Instant;
use vision::{
    DetectorLoader, FeedState, FrameReport, FrameSink, LiveFeed, SourceOpener, TickOutcome,
};

/// Live screen lifecycle: starts the feed on enter, stops it on leave
pub struct LiveScreen<O: SourceOpener, L: DetectorLoader> {
    feed: LiveFeed<O, L>,
    last_report: Option<FrameReport>,
}

impl<O: SourceOpener, L: DetectorLoader> LiveScreen<O, L> {
    pub fn new(feed: LiveFeed<O, L>) -> Self {
        Self {
            feed,
            last_report: None,
        }
    }

    pub fn feed_state(&self) -> FeedState {
        self.feed.state()
    }

    pub fn feed(&self) -> &LiveFeed<O, L> {
        &self.feed
    }

    pub fn last_report(&self) -> Option<&FrameReport> {
        self.last_report.as_ref()
    }

    /// Runs the feed if a tick is due, remembering the last rendered frame
    pub fn update(&mut self, now: Instant, sink: &mut impl FrameSink) -> vision::Result<TickOutcome> {
        let outcome = self.feed.poll(now, sink)?;
        if let TickOutcome::Rendered(report) = &outcome {
            self.last_report = Some(report.clone());
        }
        Ok(outcome)
    }
}

impl<O: SourceOpener, L: DetectorLoader> Screen for LiveScreen<O, L> {
    fn enter(&mut self, now: Instant) -> vision::Result<()> {
        self.last_report = None;
        self.feed.start(now)
    }

    fn leave(&mut self) {
        self.feed.stop();
        self.last_report = None;
    }
}

pub struct LiveView;

impl LiveView {
    pub fn show(
        ui: &mut egui::Ui,
        texture: Option<&TextureHandle>,
        report: Option<&FrameReport>,
    ) -> Option<UiCommand> {
        let mut command = None;

        ui.horizontal(|ui| {
            if Button::new("Back to Menu")
                .variant(ButtonVariant::Danger)
                .show(ui)
                .clicked()
            {
                command = Some(UiCommand::SwitchTo(Page::Menu));
            }

            ui.add_space(16.0);
            Self::render_stats(ui, report);
        });

        ui.add_space(8.0);

        let available = ui.available_size();
        match texture {
            Some(texture) => {
                let size = fit_within(texture.size_vec2(), available);
                ui.vertical_centered(|ui| {
                    ui.image((texture.id(), size));
                });
            }
            None => render_placeholder(ui, available, "Waiting for camera..."),
        }

        command
    }

    fn render_stats(ui: &mut egui::Ui, report: Option<&FrameReport>) {
        let text = match report {
            Some(r) => format!(
                "Frame {} · {} detections · {} shown",
                r.frame_number,
                r.detections,
                r.overlays.len()
            ),
            None => "No frames yet".to_string(),
        };
        ui.label(RichText::new(text).size(14.0).color(Color32::LIGHT_GRAY));
    }
}

/// Largest size with the image's aspect ratio that fits in `bounds`
fn fit_within(image: Vec2, bounds: Vec2) -> Vec2 {
    if image.x <= 0.0 || image.y <= 0.0 {
        return Vec2::ZERO;
    }
    let scale = (bounds.x / image.x).min(bounds.y / image.y).max(0.0);
    image * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_within_keeps_aspect() {
        let size = fit_within(Vec2::new(640.0, 480.0), Vec2::new(800.0, 400.0));
        assert!((size.y - 400.0).abs() < 0.01);
        assert!((size.x - 533.33).abs() < 0.01);
    }

    #[test]
    fn test_fit_within_empty_image() {
        assert_eq!(fit_within(Vec2::ZERO, Vec2::new(100.0, 100.0)), Vec2::ZERO);
    }
}
