//! Schema validation of log instances against their log type.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::field::FieldKind;
use crate::log_type::LogTypeRegistry;

/// An in-memory log of a given type with some field values set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogInstance {
    pub log_type: String,
    pub values: BTreeMap<String, JsonValue>,
}

impl LogInstance {
    /// A log with nothing but its type set.
    pub fn minimal(log_type: impl Into<String>) -> Self {
        Self {
            log_type: log_type.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, field: impl Into<String>, value: JsonValue) -> Self {
        self.values.insert(field.into(), value);
        self
    }

    pub fn value(&self, field: &str) -> Option<&JsonValue> {
        self.values.get(field)
    }

    /// A field counts as set when it holds something other than null, "" or [].
    pub fn is_set(&self, field: &str) -> bool {
        match self.values.get(field) {
            None | Some(JsonValue::Null) => false,
            Some(JsonValue::String(s)) => !s.is_empty(),
            Some(JsonValue::Array(items)) => !items.is_empty(),
            Some(_) => true,
        }
    }
}

/// A single constraint a log instance fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Offending field; `None` for violations of the log as a whole.
    pub field: Option<String>,
    pub message: String,
}

impl Violation {
    pub fn on_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    pub fn on_log(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

/// Validates log instances against their type's field constraints.
pub trait SchemaValidator: Send + Sync {
    fn validate(&self, instance: &LogInstance) -> Vec<Violation>;
}

impl<S> SchemaValidator for Arc<S>
where
    S: SchemaValidator + ?Sized,
{
    fn validate(&self, instance: &LogInstance) -> Vec<Violation> {
        (**self).validate(instance)
    }
}

/// Validator backed by a [`LogTypeRegistry`].
///
/// Reports unknown log types, required fields nothing will fill in, and list
/// values outside the allowed set.
#[derive(Debug, Clone)]
pub struct RegistrySchemaValidator {
    registry: LogTypeRegistry,
}

impl RegistrySchemaValidator {
    pub fn new(registry: LogTypeRegistry) -> Self {
        Self { registry }
    }
}

impl SchemaValidator for RegistrySchemaValidator {
    fn validate(&self, instance: &LogInstance) -> Vec<Violation> {
        let log_type = match self.registry.require(&instance.log_type) {
            Ok(log_type) => log_type,
            Err(err) => return vec![Violation::on_log(err.to_string())],
        };

        let mut violations = Vec::new();
        for field in log_type.fields() {
            if field.needs_input() && !instance.is_set(&field.name) {
                violations.push(Violation::on_field(
                    &field.name,
                    format!("{} field is required.", field.label),
                ));
                continue;
            }

            if let (FieldKind::ListString { allowed_values }, Some(JsonValue::String(value))) =
                (&field.kind, instance.value(&field.name))
            {
                if !value.is_empty() && !allowed_values.iter().any(|a| &a.value == value) {
                    violations.push(Violation::on_field(
                        &field.name,
                        format!("'{value}' is not an allowed value for {}.", field.label),
                    ));
                }
            }
        }

        for name in instance.values.keys() {
            if log_type.field(name).is_none() {
                violations.push(Violation::on_field(
                    name,
                    format!("'{name}' is not a field of {} logs.", log_type.id),
                ));
            }
        }

        if !violations.is_empty() {
            tracing::debug!(
                log_type = %instance.log_type,
                count = violations.len(),
                "log instance failed schema validation"
            );
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldDefinition;
    use crate::log_type::LogType;
    use serde_json::json;

    fn validator() -> RegistrySchemaValidator {
        let mut registry = LogTypeRegistry::standard();
        registry
            .register(
                LogType::new("seeding", "Seeding")
                    .with_field(FieldDefinition::new("plant", "Plant", FieldKind::String).required()),
            )
            .unwrap();
        RegistrySchemaValidator::new(registry)
    }

    #[test]
    fn minimal_standard_logs_validate() {
        let validator = validator();
        for id in ["activity", "harvest", "input", "lab_test", "observation"] {
            assert!(validator.validate(&LogInstance::minimal(id)).is_empty(), "{id}");
        }
    }

    #[test]
    fn unknown_type_is_a_violation() {
        let violations = validator().validate(&LogInstance::minimal("nope"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations, vec![Violation::on_log("not found: log type 'nope'")]);
    }

    #[test]
    fn required_field_without_default_is_a_violation() {
        let validator = validator();
        let violations = validator.validate(&LogInstance::minimal("seeding"));
        assert_eq!(violations, vec![Violation::on_field("plant", "Plant field is required.")]);

        let filled = LogInstance::minimal("seeding").with_value("plant", json!("Kale"));
        assert!(validator.validate(&filled).is_empty());

        let blank = LogInstance::minimal("seeding").with_value("plant", json!(""));
        assert_eq!(validator.validate(&blank).len(), 1);
    }

    #[test]
    fn list_values_must_be_allowed() {
        let validator = validator();
        let ok = LogInstance::minimal("lab_test").with_value("lab_test_type", json!("soil"));
        assert!(validator.validate(&ok).is_empty());

        let bad = LogInstance::minimal("lab_test").with_value("lab_test_type", json!("blood"));
        let violations = validator.validate(&bad);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field.as_deref(), Some("lab_test_type"));
    }

    #[test]
    fn unknown_fields_are_violations() {
        let instance = LogInstance::minimal("observation").with_value("soil_texture", json!("loam"));
        let violations = validator().validate(&instance);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field.as_deref(), Some("soil_texture"));
    }
}
