//! Fire-and-forget notification sink.
//!
//! The engine reports outcomes of mutating operations (payroll runs,
//! clock-ins, leave decisions) through a [`NotificationSink`]; the UI or API
//! layer decides how to surface them. The core never consumes a return value
//! from the sink.

use tracing::{error, info, warn};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The operation completed as requested.
    Success,
    /// The operation completed but the caller should take note.
    Warning,
    /// The operation failed.
    Error,
}

/// Receives outcome notifications from engine components.
pub trait NotificationSink: Send + Sync {
    /// Delivers one notification. Fire-and-forget; implementations must not
    /// fail the calling operation.
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// A sink that writes notifications to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Success => info!(target: "talentflow::notify", "{}", message),
            NotificationKind::Warning => warn!(target: "talentflow::notify", "{}", message),
            NotificationKind::Error => error!(target: "talentflow::notify", "{}", message),
        }
    }
}

/// A sink that discards everything, for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _kind: NotificationKind, _message: &str) {}
}
