//! Reconciler error taxonomy.

use rolewarden_core::error::{StoreError, ValidationError};

/// Everything a lifecycle operation can fail with.
///
/// The response builder matches this exhaustively; nothing propagates past
/// it to the orchestrator transport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProvisionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Create was asked to take over a role it did not make. Pre-existing
    /// roles are never adopted; this needs an operator, not a retry.
    #[error("User {user} already exists")]
    Conflict { user: String },
}
