pub mod live;
pub mod menu;

pub use live::{LiveScreen, LiveView};
pub use menu::{MenuScreen, MenuView};

/// The two screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Menu,
    Live,
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Page::Menu => "menu",
            Page::Live => "live",
        }
    }
}
