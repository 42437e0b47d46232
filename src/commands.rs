//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The core never performs them itself.

use std::time::Duration;

/// How long a notification stays visible unless the host overrides it
pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Warning,
}

/// A transient message for the user ("toast")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub level: NotificationLevel,
    pub duration: Duration,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level: NotificationLevel::Success,
            duration: NOTIFICATION_DURATION,
        }
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            ..Self::success(title, description)
        }
    }
}

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Re-render the grid
    Redraw,
    /// Show a notification
    Notify(Notification),
    /// Offer `contents` to the user as a file named `file_name`
    Download { file_name: String, contents: String },
    /// Run several commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // Notifications are overlays; downloads leave the grid unchanged
            Cmd::Notify(_) => false,
            Cmd::Download { .. } => false,
        }
    }
}
