//! Catalog lookup and role DDL over a live connection.

use rolewarden_core::error::StoreError;
use rolewarden_core::store::RoleHandle;
use sqlx::{Connection, PgConnection};

use crate::sql::{quote_ident, quote_literal};

/// A live connection scoped to one lifecycle event.
pub struct PgRoleHandle {
    conn: PgConnection,
}

impl PgRoleHandle {
    pub(crate) fn new(conn: PgConnection) -> Self {
        Self { conn }
    }
}

impl RoleHandle for PgRoleHandle {
    async fn role_exists(&mut self, user: &str) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT 1 FROM pg_catalog.pg_user WHERE usename = $1")
            .bind(user)
            .fetch_optional(&mut self.conn)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        let exists = row.is_some();
        tracing::debug!(user = %user, exists, "Checked role existence");
        Ok(exists)
    }

    async fn create_role(&mut self, user: &str, password: &str) -> Result<(), StoreError> {
        let stmt = format!(
            "CREATE ROLE {} LOGIN ENCRYPTED PASSWORD {}",
            quote_ident(user),
            quote_literal(password)
        );
        tracing::debug!(user = %user, "Executing CREATE ROLE");
        sqlx::query(&stmt)
            .execute(&mut self.conn)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(())
    }

    async fn drop_role(&mut self, user: &str) -> Result<(), StoreError> {
        let stmt = format!("DROP ROLE {}", quote_ident(user));
        tracing::debug!(user = %user, "Executing DROP ROLE");
        sqlx::query(&stmt)
            .execute(&mut self.conn)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(())
    }

    async fn release(self) {
        if let Err(e) = self.conn.close().await {
            tracing::warn!(error = %e, "Failed to close connection cleanly");
        }
    }
}
