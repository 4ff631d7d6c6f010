//! Parsing of actuator health responses into core DTOs.
//!
//! Spring Boot 1.x puts each indicator directly under the root object:
//!
//! ```json
//! {"status": "DOWN", "db": {"status": "UP"}, "redis": {"status": "DOWN"}}
//! ```
//!
//! Later versions nest them under `components` (or `details`):
//!
//! ```json
//! {"status": "DOWN", "components": {"db": {"status": "UP"}}}
//! ```
//!
//! Both layouts produce the same flat list of services. Every object-valued
//! entry is a service; one without a string `status` counts as not `UP`.

use serde_json::{Map, Value};
use springcheck_core::{HealthReport, ServiceHealth};

use crate::error::{ActuatorError, ActuatorResult};

/// Keys that hold nested indicators when they carry no status of their own.
const CONTAINER_KEYS: &[&str] = &["components", "details"];

/// Parse a raw response body.
pub fn parse_health_body(body: &str) -> ActuatorResult<HealthReport> {
    let value: Value = serde_json::from_str(body)?;
    parse_health(&value)
}

/// Convert a parsed JSON tree into a health report.
pub fn parse_health(value: &Value) -> ActuatorResult<HealthReport> {
    let root = value
        .as_object()
        .ok_or_else(|| ActuatorError::InvalidResponse {
            message: format!("expected a JSON object, got {}", json_kind(value)),
        })?;

    let status = root.get("status").and_then(Value::as_str).map(str::to_string);

    let mut services: Vec<ServiceHealth> = Vec::new();
    let mut containers: Vec<&Map<String, Value>> = Vec::new();

    // Flat entries first so they win over nested ones of the same name.
    for (name, child) in root {
        let Some(object) = child.as_object() else {
            continue;
        };
        if is_container(name, object) {
            containers.push(object);
        } else {
            push_service(&mut services, name, object);
        }
    }

    for container in containers {
        for (name, nested) in container {
            if let Some(nested) = nested.as_object() {
                push_service(&mut services, name, nested);
            }
        }
    }

    Ok(HealthReport::new(status, services))
}

fn is_container(name: &str, object: &Map<String, Value>) -> bool {
    CONTAINER_KEYS.contains(&name) && !object.contains_key("status")
}

fn push_service(services: &mut Vec<ServiceHealth>, name: &str, object: &Map<String, Value>) {
    if services.iter().any(|s| s.name == name) {
        return;
    }
    services.push(ServiceHealth {
        name: name.to_string(),
        status: object.get("status").and_then(Value::as_str).map(str::to_string),
    });
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
