//! Typed field definitions for log types.

use serde::{Deserialize, Serialize};

/// One allowed value of a list field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedValue {
    pub value: String,
    pub label: String,
}

impl AllowedValue {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Storage/widget kind of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Boolean,
    Quantity,
    String,
    TextLong,
    Timestamp,
    ListString {
        allowed_values: Vec<AllowedValue>,
    },
    EntityReference {
        target_type: String,
        target_bundle: Option<String>,
        /// Unknown labels typed into the widget create new targets.
        auto_create: bool,
    },
}

/// Ordering of a field on the edit form and on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldWeight {
    pub form: i32,
    pub view: i32,
}

impl FieldWeight {
    pub const fn both(weight: i32) -> Self {
        Self {
            form: weight,
            view: weight,
        }
    }
}

/// A single field a log type carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    pub kind: FieldKind,
    pub required: bool,
    /// The platform fills a value in when none is given.
    pub has_default: bool,
    pub multiple: bool,
    pub weight: FieldWeight,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            description: None,
            kind,
            required: false,
            has_default: false,
            multiple: false,
            weight: FieldWeight::default(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn defaulted(mut self) -> Self {
        self.has_default = true;
        self
    }

    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    pub fn weight(mut self, weight: FieldWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Required, and nothing will fill it in automatically.
    pub fn needs_input(&self) -> bool {
        self.required && !self.has_default
    }
}

/// Reference field pointing at a taxonomy vocabulary.
pub fn term_reference(
    name: impl Into<String>,
    label: impl Into<String>,
    vocabulary: impl Into<String>,
    auto_create: bool,
) -> FieldDefinition {
    FieldDefinition::new(
        name,
        label,
        FieldKind::EntityReference {
            target_type: "taxonomy_term".to_string(),
            target_bundle: Some(vocabulary.into()),
            auto_create,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_flags() {
        let field = FieldDefinition::new("timestamp", "Timestamp", FieldKind::Timestamp)
            .required()
            .defaulted()
            .weight(FieldWeight::both(-90));
        assert!(field.required);
        assert!(!field.needs_input());
        assert_eq!(field.weight, FieldWeight { form: -90, view: -90 });
    }

    #[test]
    fn required_without_default_needs_input() {
        let field = FieldDefinition::new("plant", "Plant", FieldKind::String).required();
        assert!(field.needs_input());
    }

    #[test]
    fn term_reference_targets_vocabulary() {
        let field = term_reference("lab", "Laboratory", "lab", true);
        assert_eq!(
            field.kind,
            FieldKind::EntityReference {
                target_type: "taxonomy_term".to_string(),
                target_bundle: Some("lab".to_string()),
                auto_create: true,
            }
        );
    }
}
