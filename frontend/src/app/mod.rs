//! Application Module - Controller
//!
//! Coordinates the views (pages), the screen controller and the live feed.
//!
//! # Structure
//!
//! - `state.rs`: Application state and the eframe update loop
//! - `screens.rs`: Screen lifecycle and navigation
//! - `tick_errors.rs`: Throttling of repeated live feed errors
//! - `ui_handler.rs`: Command dispatcher for UI actions
//!
//! # Communication Flow
//!
//! ```text
//! View (pages) --> UiCommand --> ui_handler --> Navigator::switch_to --> Screen enter/leave
//!
//! update() --> LiveScreen::update --> LiveFeed tick --> TextureSink (display texture)
//! ```

mod screens;
mod state;
mod tick_errors;
mod ui_handler;

pub use screens::Screen;
pub use state::App;
