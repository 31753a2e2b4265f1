//! Per-event connection acquisition.

use rolewarden_core::descriptor::TargetConnection;
use rolewarden_core::error::StoreError;
use rolewarden_core::store::RoleStore;
use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};

use crate::store::PgRoleHandle;

/// Store backed by a live PostgreSQL server.
///
/// Stateless: every acquire dials the server named in the event's payload,
/// so one value serves any number of events.
pub struct PgRoleStore;

impl RoleStore for PgRoleStore {
    type Handle = PgRoleHandle;

    async fn acquire(&self, target: &TargetConnection) -> Result<PgRoleHandle, StoreError> {
        tracing::debug!(
            host = %target.host,
            port = target.port,
            dbname = %target.dbname,
            "Connecting to target server"
        );
        let conn = PgConnection::connect_with(&connect_options(target))
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(PgRoleHandle::new(conn))
    }
}

fn connect_options(target: &TargetConnection) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&target.host)
        .port(target.port)
        .username(&target.user)
        .password(&target.password)
        .database(&target.dbname)
}
