//! Local UI state: the selected mode, one-shot command counters, and the
//! save status line.
//!
//! DESIGN
//! ======
//! One-shot commands (zoom, undo, save) travel from the toolbar to the
//! canvas host as monotonically increasing sequence numbers, so the host can
//! tell a fresh press from a re-render of unchanged state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which editor mode the toolbar has selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeChoice {
    /// Clicking the canvas places annotation points.
    #[default]
    AddPoints,
    /// Dragging the canvas pans the image.
    Pan,
}

/// State shared between the toolbar and the canvas host.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub mode: ModeChoice,
    pub zoom_in_seq: u64,
    pub zoom_out_seq: u64,
    pub undo_seq: u64,
    pub save_seq: u64,
}

/// Progress of the save exchange, rendered in the status line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SaveFeedback {
    /// Nothing to report yet.
    #[default]
    Idle,
    /// A request is outstanding; the save trigger is disabled.
    Saving,
    /// The last save succeeded.
    Success(String),
    /// The last save failed — configuration, transport, or endpoint error.
    Error(String),
}

impl SaveFeedback {
    /// Whether a save request is outstanding.
    #[must_use]
    pub fn in_flight(&self) -> bool {
        matches!(self, Self::Saving)
    }

    /// Status-line text; empty while idle.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Saving => "saving...".to_owned(),
            Self::Success(message) | Self::Error(message) => message.clone(),
        }
    }

    /// CSS class for the status line.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Idle => "status",
            Self::Saving => "status status--saving",
            Self::Success(_) => "status status--success",
            Self::Error(_) => "status status--error",
        }
    }
}
