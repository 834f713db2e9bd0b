use crate::pages::Page;

/// Commands initiated by the UI (View -> Controller)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Make `Page` the active screen
    SwitchTo(Page),
}
