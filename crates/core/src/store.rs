//! Store seam between the lifecycle engine and the target server.
//!
//! [`RoleStore`] opens a connection, [`RoleHandle`] performs the catalog
//! lookup and the DDL. The engine only ever sees these traits, so tests
//! substitute fakes and the live implementation lives in `rolewarden-db`.

use std::future::Future;

use crate::descriptor::TargetConnection;
use crate::error::StoreError;

/// Factory for connections to the server hosting the role.
pub trait RoleStore: Send + Sync {
    /// Handle type produced by [`acquire`](Self::acquire).
    type Handle: RoleHandle;

    /// Open a connection using the administrative credentials in `target`.
    /// No retries at this layer.
    fn acquire(
        &self,
        target: &TargetConnection,
    ) -> impl Future<Output = Result<Self::Handle, StoreError>> + Send;
}

/// A live connection scoped to one lifecycle operation.
///
/// Once acquired, [`release`](Self::release) must run on every exit path;
/// the reconciler owns that discipline.
pub trait RoleHandle: Send {
    /// Whether a role named `user` exists in the server's catalog.
    fn role_exists(&mut self, user: &str)
        -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Create `user` as a login role carrying `password`.
    fn create_role(
        &mut self,
        user: &str,
        password: &str,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Drop the role named `user`.
    fn drop_role(&mut self, user: &str) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Close the underlying connection. Release failures are the
    /// implementation's to log; they must not mask an earlier error.
    fn release(self) -> impl Future<Output = ()> + Send;
}
