//! Scripted store fakes and event builders shared by the lifecycle tests.

use std::sync::{Arc, Mutex};

use rolewarden_core::descriptor::{ResourceDescriptor, TargetConnection};
use rolewarden_core::error::StoreError;
use rolewarden_core::event::ResourceEvent;
use rolewarden_core::store::{RoleHandle, RoleStore};
use serde_json::{json, Value};

/// In-memory store that records every operation it is asked to perform and
/// serves a fixed catalog. Failures are injected per operation; each
/// attempt is recorded before its injected failure fires.
#[derive(Default)]
pub struct MockStore {
    log: Arc<Mutex<Vec<String>>>,
    existing: Vec<String>,
    fail_acquire: Option<StoreError>,
    fail_exists: Option<StoreError>,
    fail_create: Option<StoreError>,
    fail_drop: Option<StoreError>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the fake catalog with a role that already exists.
    pub fn with_existing(mut self, user: &str) -> Self {
        self.existing.push(user.to_string());
        self
    }

    pub fn with_acquire_failure(mut self, cause: &str) -> Self {
        self.fail_acquire = Some(StoreError::Connection(cause.to_string()));
        self
    }

    pub fn with_exists_failure(mut self, message: &str) -> Self {
        self.fail_exists = Some(StoreError::Query(message.to_string()));
        self
    }

    pub fn with_create_failure(mut self, message: &str) -> Self {
        self.fail_create = Some(StoreError::Query(message.to_string()));
        self
    }

    pub fn with_drop_failure(mut self, message: &str) -> Self {
        self.fail_drop = Some(StoreError::Query(message.to_string()));
        self
    }

    /// Everything the store was asked to do, in order.
    pub fn ops(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

pub struct MockHandle {
    log: Arc<Mutex<Vec<String>>>,
    existing: Vec<String>,
    fail_exists: Option<StoreError>,
    fail_create: Option<StoreError>,
    fail_drop: Option<StoreError>,
}

impl MockHandle {
    fn record(&self, op: String) {
        self.log.lock().unwrap().push(op);
    }
}

impl RoleStore for MockStore {
    type Handle = MockHandle;

    async fn acquire(&self, target: &TargetConnection) -> Result<MockHandle, StoreError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("connect:{}", target.host));
        if let Some(err) = &self.fail_acquire {
            return Err(err.clone());
        }
        Ok(MockHandle {
            log: Arc::clone(&self.log),
            existing: self.existing.clone(),
            fail_exists: self.fail_exists.clone(),
            fail_create: self.fail_create.clone(),
            fail_drop: self.fail_drop.clone(),
        })
    }
}

impl RoleHandle for MockHandle {
    async fn role_exists(&mut self, user: &str) -> Result<bool, StoreError> {
        self.record(format!("exists:{user}"));
        if let Some(err) = &self.fail_exists {
            return Err(err.clone());
        }
        Ok(self.existing.iter().any(|u| u == user))
    }

    async fn create_role(&mut self, user: &str, password: &str) -> Result<(), StoreError> {
        self.record(format!("create:{user}:{password}"));
        if let Some(err) = &self.fail_create {
            return Err(err.clone());
        }
        Ok(())
    }

    async fn drop_role(&mut self, user: &str) -> Result<(), StoreError> {
        self.record(format!("drop:{user}"));
        if let Some(err) = &self.fail_drop {
            return Err(err.clone());
        }
        Ok(())
    }

    async fn release(self) {
        self.record("release".to_string());
    }
}

/// The properties block used across the suite: role `app` on host `db1`
/// with the port left to its default.
pub fn base_properties() -> Value {
    json!({
        "User": "app",
        "Password": "x",
        "Database": {
            "Host": "db1",
            "User": "admin",
            "Password": "y",
            "DBName": "appdb",
        },
    })
}

/// Build a parsed lifecycle event.
pub fn event(request_type: &str, physical_id: Option<&str>, properties: Value) -> ResourceEvent {
    let mut doc = json!({
        "RequestType": request_type,
        "LogicalResourceId": "DbUser",
        "ResourceProperties": properties,
    });
    if let Some(id) = physical_id {
        doc["PhysicalResourceId"] = json!(id);
    }
    serde_json::from_value(doc).unwrap()
}

/// Build a validated descriptor straight from a properties block.
pub fn descriptor(properties: Value) -> ResourceDescriptor {
    ResourceDescriptor::from_event(&event("Create", None, properties)).unwrap()
}
