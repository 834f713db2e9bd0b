//! Reusable UI widgets.

mod button;
mod placeholder;
mod toast;

pub use button::{Button, ButtonVariant};
pub use placeholder::render_placeholder;
pub use toast::Toast;
