//! Inbound lifecycle event envelope.
//!
//! The orchestrator delivers exactly one event per lifecycle operation.
//! Envelope fields are PascalCase on the wire; unknown fields are ignored.
//! `ResourceProperties` stays untyped here: it is validated and defaulted
//! by [`ResourceDescriptor::from_event`](crate::descriptor::ResourceDescriptor::from_event),
//! not during deserialization, so malformed property shapes produce the
//! deterministic validation messages rather than serde's.

use std::fmt;

use serde::Deserialize;

/// Lifecycle verb carried by the envelope.
///
/// Any string other than the three exact verbs fails envelope
/// deserialization, which the handler surfaces as a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RequestType {
    Create,
    Update,
    Delete,
}

impl RequestType {
    /// The verb as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            RequestType::Create => "Create",
            RequestType::Update => "Update",
            RequestType::Delete => "Delete",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lifecycle event as delivered by the orchestrator.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceEvent {
    /// Which lifecycle transition is requested.
    pub request_type: RequestType,

    /// The orchestrator's logical name for the resource, carried through
    /// unmodified.
    #[serde(default)]
    pub logical_resource_id: String,

    /// The identity minted by an earlier successful create. Present on
    /// Update and Delete; never present on Create.
    #[serde(default)]
    pub physical_resource_id: Option<String>,

    /// Raw desired-state properties, validated by the descriptor layer.
    #[serde(default)]
    pub resource_properties: serde_json::Value,
}
