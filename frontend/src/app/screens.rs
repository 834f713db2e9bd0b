//! Screen Controller
//!
//! Owns both screens and the current-page pointer. Switching always tears
//! down the outgoing screen before setting up the incoming one. If setup
//! fails, the previous screen is restored and the error is returned.

use crate::pages::Page;
use logging::Logger;
use std::time::Instant;

/// Setup/teardown hooks run by the controller
pub trait Screen {
    /// Acquires whatever the screen needs while active
    fn enter(&mut self, now: Instant) -> vision::Result<()>;

    /// Releases everything acquired in `enter`
    fn leave(&mut self);
}

/// The only capability views and handlers get over navigation
pub trait Navigator {
    fn switch_to(&mut self, page: Page, now: Instant) -> vision::Result<()>;
}

pub struct ScreenController<M: Screen, L: Screen> {
    current: Page,
    menu: M,
    live: L,
    logger: Logger,
}

impl<M: Screen, L: Screen> ScreenController<M, L> {
    /// Starts on the menu, which needs no setup
    pub fn new(menu: M, live: L, logger: Logger) -> Self {
        Self {
            current: Page::Menu,
            menu,
            live,
            logger,
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn live(&self) -> &L {
        &self.live
    }

    pub fn live_mut(&mut self) -> &mut L {
        &mut self.live
    }

    fn screen_mut(&mut self, page: Page) -> &mut dyn Screen {
        match page {
            Page::Menu => &mut self.menu,
            Page::Live => &mut self.live,
        }
    }
}

impl<M: Screen, L: Screen> Navigator for ScreenController<M, L> {
    fn switch_to(&mut self, page: Page, now: Instant) -> vision::Result<()> {
        if page == self.current {
            return Ok(());
        }

        let previous = self.current;
        self.logger.info(&format!(
            "[SCREEN] Switching {} -> {}",
            previous.name(),
            page.name()
        ));

        self.screen_mut(previous).leave();

        match self.screen_mut(page).enter(now) {
            Ok(()) => {
                self.current = page;
                Ok(())
            }
            Err(e) => {
                self.logger.error(&format!(
                    "[SCREEN] Could not enter {}: {}",
                    page.name(),
                    e
                ));
                if let Err(restore) = self.screen_mut(previous).enter(now) {
                    self.logger.error(&format!(
                        "[SCREEN] Could not restore {}: {}",
                        previous.name(),
                        restore
                    ));
                }
                Err(e)
            }
        }
    }
}
