//! Lifecycle state machine: compare desired state with the catalog and
//! apply the minimal action.

use rolewarden_core::descriptor::ResourceDescriptor;
use rolewarden_core::identity;
use rolewarden_core::store::{RoleHandle, RoleStore};

use crate::error::ProvisionError;

/// What a reconcile pass did, when it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Role was absent and has been created; carries the minted identity.
    Created { physical_id: String },
    /// Role existed and has been dropped.
    Dropped,
    /// Role was already absent; delete had nothing to do.
    NoOp,
    /// Update pass-through; the target was not touched.
    Unchanged,
}

/// Drives the lifecycle verbs against an injected store.
pub struct Reconciler;

impl Reconciler {
    /// Create the role described by `desc`.
    ///
    /// A role is owned by this resource only if it did not exist
    /// beforehand; a pre-existing role is a [`ProvisionError::Conflict`],
    /// never adopted.
    pub async fn create<S: RoleStore>(
        store: &S,
        desc: &ResourceDescriptor,
    ) -> Result<Outcome, ProvisionError> {
        let mut handle = store.acquire(&desc.connect).await?;
        let result = Self::create_with_handle(&mut handle, desc).await;
        handle.release().await;
        result
    }

    /// Drop the role if it exists. An already-absent role is success with
    /// no DDL issued, so redelivered deletes converge.
    pub async fn delete<S: RoleStore>(
        store: &S,
        desc: &ResourceDescriptor,
    ) -> Result<Outcome, ProvisionError> {
        let mut handle = store.acquire(&desc.connect).await?;
        let result = Self::delete_with_handle(&mut handle, desc).await;
        handle.release().await;
        result
    }

    /// Update leaves the target alone. In-place credential changes are not
    /// supported; the orchestrator keeps the identity it already holds.
    pub fn update() -> Outcome {
        Outcome::Unchanged
    }

    // The *_with_handle split keeps release on every path: acquire, run,
    // release, then surface the inner result.

    async fn create_with_handle<H: RoleHandle>(
        handle: &mut H,
        desc: &ResourceDescriptor,
    ) -> Result<Outcome, ProvisionError> {
        if handle.role_exists(&desc.user).await? {
            return Err(ProvisionError::Conflict {
                user: desc.user.clone(),
            });
        }
        handle.create_role(&desc.user, &desc.password).await?;
        let physical_id = identity::physical_id(desc);
        tracing::info!(user = %desc.user, physical_id = %physical_id, "Created login role");
        Ok(Outcome::Created { physical_id })
    }

    async fn delete_with_handle<H: RoleHandle>(
        handle: &mut H,
        desc: &ResourceDescriptor,
    ) -> Result<Outcome, ProvisionError> {
        if !handle.role_exists(&desc.user).await? {
            tracing::info!(user = %desc.user, "Role already absent, nothing to drop");
            return Ok(Outcome::NoOp);
        }
        handle.drop_role(&desc.user).await?;
        tracing::info!(user = %desc.user, "Dropped role");
        Ok(Outcome::Dropped)
    }
}
