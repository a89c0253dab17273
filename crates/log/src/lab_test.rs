//! The lab test log type: records a sample sent to a laboratory.

use crate::field::{AllowedValue, FieldDefinition, FieldKind, FieldWeight, term_reference};
use crate::log_type::LogType;
use crate::reference::LAB_VOCABULARY;

pub const LAB_TEST: &str = "lab_test";

/// Allowed values of the `lab_test_type` field.
pub fn lab_test_type_allowed_values() -> Vec<AllowedValue> {
    vec![
        AllowedValue::new("soil", "Soil test"),
        AllowedValue::new("water", "Water test"),
        AllowedValue::new("tissue", "Plant tissue test"),
    ]
}

pub fn lab_test() -> LogType {
    LogType::new(LAB_TEST, "LabTest")
        .with_field(
            FieldDefinition::new("lab_received_date", "Date received", FieldKind::Timestamp)
                .description("The date when the sample was received by the lab.")
                .weight(FieldWeight::both(-70)),
        )
        .with_field(
            FieldDefinition::new("lab_processed_date", "Date processed", FieldKind::Timestamp)
                .description("The date when the sample was processed by the lab.")
                .weight(FieldWeight::both(-60)),
        )
        .with_field(
            FieldDefinition::new(
                "lab_test_type",
                "Test type",
                FieldKind::ListString {
                    allowed_values: lab_test_type_allowed_values(),
                },
            )
            .weight(FieldWeight::both(-50)),
        )
        .with_field(
            FieldDefinition::new("soil_texture", "Soil texture", FieldKind::String)
                .weight(FieldWeight::both(-45)),
        )
        .with_field(
            term_reference("lab", "Laboratory", LAB_VOCABULARY, true)
                .description("What laboratory performed this test?")
                .weight(FieldWeight::both(-40)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lab_test_adds_bundle_fields_in_order() {
        let log_type = lab_test();
        let fields: Vec<_> = log_type
            .bundle_fields()
            .map(|f| (f.name.as_str(), f.weight.form))
            .collect();
        assert_eq!(
            fields,
            vec![
                ("lab_received_date", -70),
                ("lab_processed_date", -60),
                ("lab_test_type", -50),
                ("soil_texture", -45),
                ("lab", -40),
            ]
        );
    }

    #[test]
    fn lab_test_fields_are_optional() {
        assert!(lab_test().bundle_fields().all(|f| !f.required));
    }

    #[test]
    fn lab_reference_auto_creates_lab_terms() {
        let log_type = lab_test();
        let lab = log_type.field("lab").unwrap();
        assert_eq!(lab.label, "Laboratory");
        match &lab.kind {
            FieldKind::EntityReference {
                target_type,
                target_bundle,
                auto_create,
            } => {
                assert_eq!(target_type, "taxonomy_term");
                assert_eq!(target_bundle.as_deref(), Some("lab"));
                assert!(auto_create);
            }
            other => panic!("expected entity reference, got {other:?}"),
        }
    }

    #[test]
    fn test_type_offers_allowed_values() {
        let log_type = lab_test();
        let FieldKind::ListString { allowed_values } = &log_type.field("lab_test_type").unwrap().kind
        else {
            panic!("expected list_string");
        };
        let values: Vec<_> = allowed_values.iter().map(|v| v.value.as_str()).collect();
        assert_eq!(values, vec!["soil", "water", "tissue"]);
    }
}
