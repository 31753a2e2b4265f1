//! Error taxonomy shared across the workspace.
//!
//! Two kinds live here because both the db crate and the reconciler need
//! them. The reconciler's own enum (which adds the conflict case) wraps
//! these in `rolewarden-provisioner`.

/// A malformed or incomplete event.
///
/// Carries the deterministic first-failed-check message. Validation
/// failures are terminal for the event; the orchestrator must fix the
/// template, not retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The human-readable message, naming the offending field or value.
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// A failure from the target PostgreSQL server.
///
/// The two variants matter to the response contract: a connection failure
/// on delete is treated as best-effort success, while a rejected statement
/// is always surfaced as a failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The target server could not be reached or refused the session.
    #[error("Failed to connect, {0}")]
    Connection(String),

    /// The server accepted the session but rejected a statement, including
    /// check-then-act races (duplicate role on CREATE, missing role on DROP).
    #[error("{0}")]
    Query(String),
}
