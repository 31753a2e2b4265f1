//! Physical identity token convention.
//!
//! The orchestrator persists the token returned from a successful create and
//! replays it on later update and delete events; it is the idempotency key
//! for the role. Two descriptors produce the same token exactly when they
//! describe the same role-creation intent, so the password never
//! participates.

use crate::descriptor::ResourceDescriptor;

/// Identity reported when a create failed before one could be minted.
/// Stable across retries so repeated failed attempts do not accumulate
/// distinct orchestrator-tracked ids.
pub const MISSING_PHYSICAL_ID: &str = "could-not-create";

/// Render the identity token for a role.
///
/// Two forms exist: database-scoped roles carry the role name in the path
/// portion, server-scoped roles use an authority-style form.
///
/// # Examples
///
/// ```
/// use rolewarden_core::identity::role_identity;
///
/// assert_eq!(
///     role_identity(true, "db1", 5432, "app"),
///     "postgresql:db1:5432:app?user=app"
/// );
/// assert_eq!(
///     role_identity(false, "db1", 5432, "app"),
///     "postgresql://db1:5432?user=app"
/// );
/// ```
pub fn role_identity(with_database: bool, host: &str, port: u16, user: &str) -> String {
    if with_database {
        format!("postgresql:{host}:{port}:{user}?user={user}")
    } else {
        format!("postgresql://{host}:{port}?user={user}")
    }
}

/// The identity a successful create of `desc` would mint.
pub fn physical_id(desc: &ResourceDescriptor) -> String {
    role_identity(
        desc.with_database,
        &desc.connect.host,
        desc.connect.port,
        &desc.user,
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::event::ResourceEvent;

    fn descriptor(with_database: bool) -> ResourceDescriptor {
        let event: ResourceEvent = serde_json::from_value(json!({
            "RequestType": "Create",
            "ResourceProperties": {
                "User": "app",
                "Password": "secret",
                "WithDatabase": with_database,
                "Database": {
                    "Host": "db1",
                    "User": "admin",
                    "Password": "adminpw",
                    "DBName": "appdb",
                },
            },
        }))
        .unwrap();
        ResourceDescriptor::from_event(&event).unwrap()
    }

    #[test]
    fn database_scoped_form() {
        assert_eq!(
            physical_id(&descriptor(true)),
            "postgresql:db1:5432:app?user=app"
        );
    }

    #[test]
    fn server_scoped_form() {
        assert_eq!(
            physical_id(&descriptor(false)),
            "postgresql://db1:5432?user=app"
        );
    }

    #[test]
    fn deterministic_for_equal_descriptors() {
        assert_eq!(physical_id(&descriptor(true)), physical_id(&descriptor(true)));
    }

    #[test]
    fn password_not_encoded() {
        let id = physical_id(&descriptor(true));
        assert!(!id.contains("secret"));
        assert!(!id.contains("adminpw"));
    }
}
