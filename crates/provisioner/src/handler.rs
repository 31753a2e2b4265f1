//! Outermost event boundary: every event in, exactly one response out.
//!
//! Nothing propagates past this module. Each verb handler converts the
//! whole error taxonomy into the response contract, so the adapter around
//! it only ever serializes a [`Response`].

use rolewarden_core::descriptor::ResourceDescriptor;
use rolewarden_core::error::StoreError;
use rolewarden_core::event::{RequestType, ResourceEvent};
use rolewarden_core::identity::MISSING_PHYSICAL_ID;
use rolewarden_core::response::{Response, Status};
use rolewarden_core::store::RoleStore;

use crate::error::ProvisionError;
use crate::reconciler::{Outcome, Reconciler};

/// Handle one parsed lifecycle event.
pub async fn handle_event<S: RoleStore>(store: &S, event: &ResourceEvent) -> Response {
    tracing::info!(
        request_type = %event.request_type,
        logical_id = %event.logical_resource_id,
        "Handling lifecycle event"
    );

    let response = match event.request_type {
        RequestType::Create => handle_create(store, event).await,
        RequestType::Update => handle_update(event),
        RequestType::Delete => handle_delete(store, event).await,
    };

    match response.status {
        Status::Success => {
            tracing::info!(physical_id = %response.physical_resource_id, "Event handled")
        }
        Status::Failed => {
            tracing::error!(reason = %response.reason, "Event failed")
        }
    }
    response
}

/// Handle one raw event document. Parse failures become FAILED responses
/// with the sentinel id, like any other validation problem.
pub async fn handle_json<S: RoleStore>(store: &S, input: &str) -> Response {
    match serde_json::from_str::<ResourceEvent>(input) {
        Ok(event) => handle_event(store, &event).await,
        Err(e) => {
            tracing::error!(error = %e, "Malformed event document");
            Response::failed(format!("Malformed event, {e}"), MISSING_PHYSICAL_ID)
        }
    }
}

async fn handle_create<S: RoleStore>(store: &S, event: &ResourceEvent) -> Response {
    let desc = match ResourceDescriptor::from_event(event) {
        Ok(desc) => desc,
        Err(e) => {
            return Response::failed(format!("Failed to create user, {e}"), MISSING_PHYSICAL_ID)
        }
    };
    tracing::debug!(user = %desc.user, host = %desc.connect.host, "Creating login role");
    match Reconciler::create(store, &desc).await {
        Ok(outcome) => success_for(outcome, event),
        Err(e @ ProvisionError::Conflict { .. }) => {
            Response::failed(e.to_string(), MISSING_PHYSICAL_ID)
        }
        Err(e) => Response::failed(format!("Failed to create user, {e}"), MISSING_PHYSICAL_ID),
    }
}

fn handle_update(event: &ResourceEvent) -> Response {
    match &event.physical_resource_id {
        Some(_) => success_for(Reconciler::update(), event),
        None => Response::failed(
            "PhysicalResourceId is required on Update",
            MISSING_PHYSICAL_ID,
        ),
    }
}

async fn handle_delete<S: RoleStore>(store: &S, event: &ResourceEvent) -> Response {
    let desc = match ResourceDescriptor::from_event(event) {
        Ok(desc) => desc,
        Err(e) => return Response::failed(e.to_string(), prior_physical_id(event)),
    };
    tracing::debug!(user = %desc.user, host = %desc.connect.host, "Deleting login role");
    match Reconciler::delete(store, &desc).await {
        Ok(outcome) => success_for(outcome, event),
        // An unreachable target must not wedge deletion; the role is
        // reported gone with the skip on record.
        Err(ProvisionError::Store(e @ StoreError::Connection(_))) => {
            tracing::warn!(error = %e, "Target unreachable, treating delete as best effort");
            Response::success_with_reason(format!("Skipped drop, {e}"), prior_physical_id(event))
        }
        Err(e) => Response::failed(e.to_string(), prior_physical_id(event)),
    }
}

/// Map a successful outcome to its response. Only a fresh create mints an
/// identity; every other outcome echoes the one the orchestrator sent.
fn success_for(outcome: Outcome, event: &ResourceEvent) -> Response {
    match outcome {
        Outcome::Created { physical_id } => Response::success(physical_id),
        Outcome::Dropped | Outcome::NoOp | Outcome::Unchanged => {
            Response::success(prior_physical_id(event))
        }
    }
}

fn prior_physical_id(event: &ResourceEvent) -> String {
    event
        .physical_resource_id
        .clone()
        .unwrap_or_else(|| MISSING_PHYSICAL_ID.to_string())
}
