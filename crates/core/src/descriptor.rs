//! Typed, validated description of the desired role.
//!
//! [`ResourceDescriptor::from_event`] is the single entry point: it reads the
//! untyped `ResourceProperties` block, applies defaults, and runs the
//! required-field checks in a fixed order so the same malformed event always
//! fails with the same message. Nothing downstream touches raw JSON.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::event::ResourceEvent;

/// Port assumed when the event's `Database` block does not name one.
pub const DEFAULT_PORT: u16 = 5432;

/// Where to perform the work: the server hosting the role, reached with the
/// administrative credentials from the event. Distinct from the role being
/// managed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetConnection {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
}

/// A validated event, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Name of the login role to manage.
    pub user: String,
    /// Password assigned when the role is created.
    pub password: String,
    /// Whether the derived identity is scoped to a database.
    pub with_database: bool,
    /// Connection coordinates for the target server.
    pub connect: TargetConnection,
    /// `LogicalResourceId` from the envelope, empty when absent.
    pub logical_id: String,
    /// Identity minted by a previous create, if the orchestrator sent one.
    pub prior_physical_id: Option<String>,
}

impl ResourceDescriptor {
    /// Validate `event` into a descriptor.
    ///
    /// Checks run in a fixed order (user, password, `WithDatabase` shape,
    /// `Database` presence, host, port, admin user, admin password, dbname)
    /// and stop at the first failure.
    pub fn from_event(event: &ResourceEvent) -> Result<Self, ValidationError> {
        let empty = Map::new();
        let props = event.resource_properties.as_object().unwrap_or(&empty);

        let user = match props.get("User") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            _ => return Err(ValidationError::new("User property is required")),
        };
        let password = require_string(props, "Password", "Password property is required")?;
        let with_database = parse_with_database(props.get("WithDatabase"))?;

        let db = match props.get("Database") {
            Some(Value::Object(db)) => db,
            _ => {
                return Err(ValidationError::new(
                    "Database property is required and must be an object",
                ))
            }
        };

        let host = require_string(db, "Host", "Host is required in Database")?;
        let port = parse_port(db.get("Port"))?;
        let admin_user = require_string(db, "User", "User is required in Database")?;
        let admin_password = require_string(db, "Password", "Password is required in Database")?;
        let dbname = require_string(db, "DBName", "DBName is required in Database")?;

        Ok(Self {
            user,
            password,
            with_database,
            connect: TargetConnection {
                host,
                port,
                user: admin_user,
                password: admin_password,
                dbname,
            },
            logical_id: event.logical_resource_id.clone(),
            prior_physical_id: event.physical_resource_id.clone(),
        })
    }
}

fn require_string(
    map: &Map<String, Value>,
    key: &str,
    message: &str,
) -> Result<String, ValidationError> {
    match map.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(ValidationError::new(message)),
    }
}

/// Templates written by hand send `WithDatabase` as a JSON bool or as a
/// string; both shapes are accepted. The value is rendered to text and
/// lowered, and must then read exactly `true` or `false`. Absent means
/// `true`.
fn parse_with_database(value: Option<&Value>) -> Result<bool, ValidationError> {
    let Some(value) = value else {
        return Ok(true);
    };
    let text = match value {
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let lowered = text.to_lowercase();
    match lowered.as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ValidationError::new(format!(
            "WithDatabase property \"{lowered}\" is not a boolean"
        ))),
    }
}

/// A port must be a JSON integer or a string of decimal digits, and must
/// fall within the valid TCP range. Anything else is rejected here rather
/// than handed to the connection layer.
fn parse_port(value: Option<&Value>) -> Result<u16, ValidationError> {
    const MESSAGE: &str = "Port is required to be an integer in Database";

    let Some(value) = value else {
        return Ok(DEFAULT_PORT);
    };
    let number = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            s.parse::<u64>().ok()
        }
        _ => None,
    };
    match number {
        Some(n) if (1..=u64::from(u16::MAX)).contains(&n) => Ok(n as u16),
        _ => Err(ValidationError::new(MESSAGE)),
    }
}
