//! Core domain types for the rolewarden provisioner.
//!
//! Everything in this crate is pure logic: the inbound lifecycle event
//! envelope, the validated [`descriptor::ResourceDescriptor`], the derived
//! physical identity token, the outbound response envelope, the error
//! taxonomy, and the [`store`] traits the reconciler is generic over.
//! Database access lives in `rolewarden-db`; this crate has no sqlx
//! dependency so the lifecycle logic is testable with scripted stores.

pub mod descriptor;
pub mod error;
pub mod event;
pub mod identity;
pub mod response;
pub mod store;
