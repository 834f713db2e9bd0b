//! Menu Page
//!
//! Start screen with a single button that opens the live camera view.

use crate::app::Screen;
use crate::components::{Button, ButtonVariant};
use crate::events::UiCommand;
use crate::pages::Page;
use std::time::Instant;

/// Menu screen lifecycle; holds no resources
#[derive(Debug, Default)]
pub struct MenuScreen;

impl Screen for MenuScreen {
    fn enter(&mut self, _now: Instant) -> vision::Result<()> {
        Ok(())
    }

    fn leave(&mut self) {}
}

pub struct MenuView;

impl MenuView {
    pub fn show(ui: &mut egui::Ui) -> Option<UiCommand> {
        let mut command = None;

        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);

            ui.heading(egui::RichText::new("Object Detector").size(32.0).strong());
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("MobileNet-SSD on your camera feed")
                    .size(16.0)
                    .color(egui::Color32::GRAY),
            );
            ui.add_space(40.0);

            if Button::new("Open Camera")
                .variant(ButtonVariant::Primary)
                .text_size(18.0)
                .min_size(egui::vec2(240.0, 48.0))
                .show(ui)
                .clicked()
            {
                command = Some(UiCommand::SwitchTo(Page::Live));
            }
        });

        command
    }
}
