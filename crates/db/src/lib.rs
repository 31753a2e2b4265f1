//! PostgreSQL implementation of the role store.
//!
//! One short-lived connection per lifecycle event, no pool: each event
//! targets whichever server its payload names, so there is nothing worth
//! pooling. [`PgRoleStore`] opens the connection, [`PgRoleHandle`] runs the
//! catalog lookup and the DDL.

pub mod connection;
pub mod sql;
pub mod store;

pub use connection::PgRoleStore;
pub use store::PgRoleHandle;
