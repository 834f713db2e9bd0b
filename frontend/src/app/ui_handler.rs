//! UI Command Handler
//!
//! Turns commands returned by the views into navigation requests.

use super::screens::Navigator;
use super::state::App;
use crate::events::UiCommand;
use crate::pages::Page;
use std::time::Instant;

/// Applies `command` through the navigation capability
pub(super) fn dispatch(
    command: UiCommand,
    navigator: &mut impl Navigator,
    now: Instant,
) -> vision::Result<()> {
    match command {
        UiCommand::SwitchTo(page) => navigator.switch_to(page, now),
    }
}

impl App {
    /// Dispatches UI commands and reports failures to the user
    pub(super) fn handle_ui_command(&mut self, command: UiCommand) {
        self.logger
            .debug(&format!("[UI] Handling command: {:?}", command));

        match dispatch(command, &mut self.screens, Instant::now()) {
            Ok(()) => {
                if command == UiCommand::SwitchTo(Page::Live) {
                    self.tick_errors.reset();
                    self.show_info("Camera started".to_string());
                } else {
                    self.display.clear();
                }
            }
            Err(e) => self.show_error(format!("Could not open the live view: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeNavigator {
        requested: Vec<Page>,
    }

    impl Navigator for FakeNavigator {
        fn switch_to(&mut self, page: Page, _now: Instant) -> vision::Result<()> {
            self.requested.push(page);
            Ok(())
        }
    }

    #[test]
    fn test_dispatch_forwards_switch() {
        let mut navigator = FakeNavigator::default();
        dispatch(UiCommand::SwitchTo(Page::Live), &mut navigator, Instant::now()).unwrap();
        dispatch(UiCommand::SwitchTo(Page::Menu), &mut navigator, Instant::now()).unwrap();
        assert_eq!(navigator.requested, vec![Page::Live, Page::Menu]);
    }
}
