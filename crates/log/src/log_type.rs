//! Log types (bundles) and their registry.

use serde::{Deserialize, Serialize};

use farmlog_core::{DomainError, DomainResult};

use crate::field::{AllowedValue, FieldDefinition, FieldKind, FieldWeight};

/// A log bundle: id, label and the fields its logs carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogType {
    pub id: String,
    pub label: String,
    fields: Vec<FieldDefinition>,
}

impl LogType {
    /// A log type carrying only the base fields.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            fields: base_field_definitions(),
        }
    }

    /// Adds a bundle field. A field with the same name replaces the old one.
    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields added on top of the base fields, in declaration order.
    pub fn bundle_fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter().filter(|f| !is_base_field(&f.name))
    }
}

const BASE_FIELDS: [&str; 6] = ["name", "timestamp", "status", "notes", "asset", "quantity"];

fn is_base_field(name: &str) -> bool {
    BASE_FIELDS.contains(&name)
}

/// Fields every log carries regardless of its type.
pub fn base_field_definitions() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::new("name", "Name", FieldKind::String).weight(FieldWeight::both(-100)),
        FieldDefinition::new("timestamp", "Timestamp", FieldKind::Timestamp)
            .description("Timestamp of the event being logged.")
            .required()
            .defaulted()
            .weight(FieldWeight::both(-90)),
        FieldDefinition::new(
            "status",
            "Status",
            FieldKind::ListString {
                allowed_values: vec![
                    AllowedValue::new("pending", "Pending"),
                    AllowedValue::new("done", "Done"),
                ],
            },
        )
        .required()
        .defaulted()
        .weight(FieldWeight::both(-80)),
        FieldDefinition::new(
            "asset",
            "Assets",
            FieldKind::EntityReference {
                target_type: "asset".to_string(),
                target_bundle: None,
                auto_create: false,
            },
        )
        .multiple()
        .weight(FieldWeight::both(-20)),
        FieldDefinition::new("quantity", "Quantity", FieldKind::Quantity)
            .multiple()
            .weight(FieldWeight::both(0)),
        FieldDefinition::new("notes", "Notes", FieldKind::TextLong).weight(FieldWeight::both(10)),
    ]
}

/// Registry of available log types, in registration order.
#[derive(Debug, Clone, Default)]
pub struct LogTypeRegistry {
    types: Vec<LogType>,
}

impl LogTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the standard log types plus the lab test type.
    pub fn standard() -> Self {
        Self {
            types: vec![
                LogType::new("activity", "Activity"),
                LogType::new("harvest", "Harvest"),
                LogType::new("input", "Input"),
                crate::lab_test::lab_test(),
                LogType::new("observation", "Observation"),
            ],
        }
    }

    pub fn register(&mut self, log_type: LogType) -> DomainResult<()> {
        if self.get(&log_type.id).is_some() {
            return Err(DomainError::conflict(format!(
                "log type '{}' is already registered",
                log_type.id
            )));
        }
        tracing::debug!(log_type = %log_type.id, "registered log type");
        self.types.push(log_type);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&LogType> {
        self.types.iter().find(|t| t.id == id)
    }

    pub fn require(&self, id: &str) -> DomainResult<&LogType> {
        self.get(id)
            .ok_or_else(|| DomainError::not_found(format!("log type '{id}'")))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogType> {
        self.types.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_type_carries_base_fields_only() {
        let log_type = LogType::new("observation", "Observation");
        assert_eq!(log_type.fields().len(), BASE_FIELDS.len());
        assert_eq!(log_type.bundle_fields().count(), 0);
        assert!(log_type.field("timestamp").is_some_and(|f| f.required && f.has_default));
    }

    #[test]
    fn with_field_replaces_same_name() {
        let log_type = LogType::new("input", "Input")
            .with_field(FieldDefinition::new("method", "Method", FieldKind::String))
            .with_field(FieldDefinition::new("method", "Application method", FieldKind::String));
        let methods: Vec<_> = log_type.fields().iter().filter(|f| f.name == "method").collect();
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].label, "Application method");
    }

    #[test]
    fn registry_rejects_duplicates() {
        let mut registry = LogTypeRegistry::new();
        registry.register(LogType::new("activity", "Activity")).unwrap();
        let err = registry.register(LogType::new("activity", "Other")).unwrap_err();
        match err {
            DomainError::Conflict(_) => {}
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[test]
    fn standard_registry_keeps_order_and_includes_lab_test() {
        let registry = LogTypeRegistry::standard();
        let ids: Vec<_> = registry.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["activity", "harvest", "input", "lab_test", "observation"]);
        assert!(registry.require("lab_test").is_ok());
        assert_eq!(
            registry.require("seeding").unwrap_err(),
            DomainError::not_found("log type 'seeding'")
        );
    }

    #[test]
    fn standard_ids_are_distinct() {
        let mut registry = LogTypeRegistry::standard();
        for id in ["activity", "harvest", "input", "lab_test", "observation"] {
            assert!(registry.register(LogType::new(id, "Again")).is_err(), "{id}");
        }
        assert!(registry.register(LogType::new("seeding", "Seeding")).is_ok());
    }
}
