//! Error types for container operations
//!
//! `DuplicateName` and `NotFound` are recoverable: the registry is left
//! untouched and the caller gets the error back. `ProtocolViolation` means an
//! event referenced state that no longer exists (a stale index or a name that
//! was already reattached), which is an ordering bug upstream.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DockError {
    #[error("a panel named '{0}' already exists")]
    DuplicateName(String),

    #[error("no panel named '{0}'")]
    NotFound(String),

    #[error("protocol violation: {0}")]
    ProtocolViolation(String),

    #[error("failed to decode icon: {0}")]
    IconDecode(#[from] image::ImageError),
}

impl DockError {
    /// Whether the caller can recover by reporting a status and moving on
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, DockError::ProtocolViolation(_))
    }
}

/// Surface a protocol violation loudly in debug builds, log it in release.
///
/// Used by the drop coordinator, where every registry failure means an
/// upstream component sent an event built from stale state.
#[track_caller]
pub fn report_violation(context: &str, err: &DockError) {
    tracing::error!(context, error = %err, "dock protocol violation");
    debug_assert!(false, "{context}: {err}");
}
