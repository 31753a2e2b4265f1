//! Lifecycle engine for a single PostgreSQL login role.
//!
//! Orchestrator events arrive as JSON documents (Create, Update, Delete);
//! each is validated, reconciled against the target server's catalog, and
//! answered with exactly one response envelope. The binary in `main.rs`
//! adapts stdin and stdout; everything in this library is transport-free
//! and generic over the store seam so tests run without a server.

pub mod error;
pub mod handler;
pub mod reconciler;

pub use error::ProvisionError;
pub use handler::{handle_event, handle_json};
pub use reconciler::{Outcome, Reconciler};
