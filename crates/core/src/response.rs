//! Orchestrator response envelope.
//!
//! Every handled event produces exactly one [`Response`], success or not.
//! The orchestrator treats `PhysicalResourceId` as the handle it will send
//! back on later update and delete events, so constructors take it
//! explicitly on every path.

use serde::Serialize;
use serde_json::{Map, Value};

/// Outcome status understood by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Success,
    Failed,
}

/// The envelope written back after handling an event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Response {
    pub status: Status,
    pub reason: String,
    pub physical_resource_id: String,
    pub data: Map<String, Value>,
}

impl Response {
    /// Success with an empty reason and no attributes.
    pub fn success(physical_resource_id: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            reason: String::new(),
            physical_resource_id: physical_resource_id.into(),
            data: Map::new(),
        }
    }

    /// Success that still explains itself, used when a delete was skipped.
    pub fn success_with_reason(
        reason: impl Into<String>,
        physical_resource_id: impl Into<String>,
    ) -> Self {
        Self {
            status: Status::Success,
            reason: reason.into(),
            physical_resource_id: physical_resource_id.into(),
            data: Map::new(),
        }
    }

    /// Failure with a human-readable cause.
    pub fn failed(reason: impl Into<String>, physical_resource_id: impl Into<String>) -> Self {
        Self {
            status: Status::Failed,
            reason: reason.into(),
            physical_resource_id: physical_resource_id.into(),
            data: Map::new(),
        }
    }
}
