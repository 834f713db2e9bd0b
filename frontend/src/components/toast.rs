//! Toast notifications for camera/model failures and feed status.

use std::time::{Duration, Instant};

const DEFAULT_DURATION: Duration = Duration::from_secs(5);

/// Toast notification type
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Error,
    Info,
}

impl ToastKind {
    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Error => "❌",
            ToastKind::Info => "ℹ",
        }
    }

    fn icon_color(&self) -> egui::Color32 {
        match self {
            ToastKind::Error => egui::Color32::from_rgb(255, 100, 100),
            ToastKind::Info => egui::Color32::from_rgb(100, 150, 255),
        }
    }

    fn background_color(&self) -> egui::Color32 {
        match self {
            ToastKind::Error => egui::Color32::from_rgba_premultiplied(80, 30, 30, 230),
            ToastKind::Info => egui::Color32::from_rgba_premultiplied(30, 50, 80, 230),
        }
    }
}

/// Transient message anchored to the bottom-right corner
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn error(message: String) -> Self {
        Self::new(message, ToastKind::Error)
    }

    pub fn info(message: String) -> Self {
        Self::new(message, ToastKind::Info)
    }

    fn new(message: String, kind: ToastKind) -> Self {
        Self {
            message,
            kind,
            created_at: Instant::now(),
            duration: DEFAULT_DURATION,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) > self.duration
    }

    /// Renders the toast; returns true once it should be dismissed
    pub fn show(&self, ctx: &egui::Context) -> bool {
        if self.is_expired_at(Instant::now()) {
            return true;
        }

        let mut should_dismiss = false;

        egui::Window::new("notification")
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-20.0, -20.0))
            .fixed_size(egui::vec2(350.0, 80.0))
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(self.kind.background_color())
                    .stroke(egui::Stroke::new(
                        1.5,
                        self.kind.icon_color().linear_multiply(0.7),
                    ))
                    .corner_radius(8.0),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(self.kind.icon())
                            .size(28.0)
                            .color(self.kind.icon_color()),
                    );
                    ui.add_space(10.0);

                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(&self.message)
                                .size(14.0)
                                .color(egui::Color32::WHITE),
                        );
                        ui.add_space(5.0);

                        let dismiss = egui::Button::new(
                            egui::RichText::new("Dismiss").color(egui::Color32::WHITE),
                        )
                        .fill(self.kind.icon_color().linear_multiply(0.8))
                        .stroke(egui::Stroke::NONE)
                        .corner_radius(4.0);
                        if ui.add(dismiss).clicked() {
                            should_dismiss = true;
                        }
                    });
                });
            });

        // Keep repainting so expiry is noticed without input
        ctx.request_repaint_after(Duration::from_millis(250));

        should_dismiss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(Toast::error("x".to_string()).kind, ToastKind::Error);
        assert_eq!(Toast::info("y".to_string()).kind, ToastKind::Info);
    }

    #[test]
    fn test_expiry() {
        let toast = Toast::error("Camera 0 is not available".to_string());
        assert!(!toast.is_expired_at(toast.created_at));
        assert!(toast.is_expired_at(toast.created_at + Duration::from_secs(6)));
    }
}
