//! Turning submitted inventory values into a draft log.
//!
//! Lookups that find nothing degrade the output (empty name, missing unit
//! segment) instead of failing. Only [`validate_log_type_selectable`]
//! produces an error.

use farmlog_core::{AssetId, Entity, TermId};
use farmlog_log::{
    AdjustmentKind, Asset, DraftLog, LogInstance, LogStatus, Quantity, SchemaValidator, Term,
};

use crate::error::FieldError;
use crate::inventory::submission::{AssetRef, InventorySubmission};
use crate::services::{AssetLookup, TermLookup};

pub const LOG_TYPE_NOT_CREATABLE: &str = "The selected log type cannot be created. It may have required fields that this form is unable to populate.";

/// Resolve the submitted asset reference to an asset.
///
/// Numeric text is looked up by id; anything else resolves to nothing.
pub fn resolve_asset(raw: Option<&AssetRef>, assets: &dyn AssetLookup) -> Option<Asset> {
    match raw? {
        AssetRef::Asset(asset) => Some(asset.clone()),
        AssetRef::Id(id) => assets.by_id(*id),
        AssetRef::Raw(text) => {
            let id = text.trim().parse::<AssetId>().ok()?;
            assets.by_id(id)
        }
    }
}

fn resolve_units(units: Option<TermId>, terms: &dyn TermLookup) -> Option<Term> {
    let term = terms.by_id(units?);
    if term.is_none() {
        tracing::debug!(units = ?units, "unit term not found; omitting from summary");
    }
    term
}

/// `value`, then ` <unit>` when the unit resolves, then ` (<measure>)` when
/// a measure was chosen.
pub fn compose_quantity_summary(
    value: &str,
    units: Option<TermId>,
    measure: &str,
    terms: &dyn TermLookup,
) -> String {
    summarize(value, resolve_units(units, terms).as_ref(), measure)
}

fn summarize(value: &str, unit: Option<&Term>, measure: &str) -> String {
    let mut summary = value.to_string();
    if let Some(unit) = unit {
        summary.push(' ');
        summary.push_str(unit.label());
    }
    if !measure.is_empty() {
        summary.push_str(" (");
        summary.push_str(measure);
        summary.push(')');
    }
    summary
}

/// Human-readable log name for an adjustment.
///
/// Empty when the asset is unresolved or the kind is not one of the three
/// known adjustments.
pub fn generate_name(kind: &AdjustmentKind, asset: Option<&Asset>, quantity_summary: &str) -> String {
    let Some(asset) = asset else {
        return String::new();
    };
    let asset = asset.label();

    match kind {
        AdjustmentKind::Increment => format!("Increment inventory of {asset} by {quantity_summary}"),
        AdjustmentKind::Decrement => format!("Decrement inventory of {asset} by {quantity_summary}"),
        AdjustmentKind::Reset => format!("Reset inventory of {asset} to {quantity_summary}"),
        AdjustmentKind::Unrecognized(raw) => {
            tracing::debug!(adjustment_kind = %raw, "no name template for adjustment kind");
            String::new()
        }
    }
}

/// The generated name for a submission, ignoring any override.
pub fn preview_name(
    submission: &InventorySubmission,
    assets: &dyn AssetLookup,
    terms: &dyn TermLookup,
) -> String {
    let asset = resolve_asset(submission.asset.as_ref(), assets);
    let summary = compose_quantity_summary(
        &submission.quantity.value,
        submission.quantity.units,
        &submission.quantity.measure,
        terms,
    );
    generate_name(&submission.adjustment_kind, asset.as_ref(), &summary)
}

/// Assemble the draft log for a submission. Nothing is persisted.
pub fn compose_draft_log(
    submission: &InventorySubmission,
    assets: &dyn AssetLookup,
    terms: &dyn TermLookup,
) -> DraftLog {
    let asset = resolve_asset(submission.asset.as_ref(), assets);
    let unit = resolve_units(submission.quantity.units, terms);

    let quantity = Quantity {
        measure: submission.quantity.measure.clone(),
        value: submission.quantity.value.clone(),
        units: unit.as_ref().map(|t| t.id),
        adjustment_kind: submission.adjustment_kind.clone(),
        asset: asset.as_ref().map(|a| a.id),
    };

    let name = match submission.name_override() {
        Some(name) => name.to_string(),
        None => {
            let summary = summarize(
                &submission.quantity.value,
                unit.as_ref(),
                &submission.quantity.measure,
            );
            generate_name(&submission.adjustment_kind, asset.as_ref(), &summary)
        }
    };

    DraftLog {
        log_type: submission.log_type.clone(),
        timestamp: submission.date.timestamp(),
        quantities: vec![quantity],
        notes: submission.notes.clone(),
        status: LogStatus::from_done(submission.done),
        name,
    }
}

/// Check a minimal log of `log_type` passes schema validation.
///
/// Guards against log types with required fields this form cannot fill in.
/// Individual violations are not reported, only the fixed message.
pub fn validate_log_type_selectable(
    log_type: &str,
    validator: &dyn SchemaValidator,
) -> Result<(), FieldError> {
    let violations = validator.validate(&LogInstance::minimal(log_type));
    if violations.is_empty() {
        Ok(())
    } else {
        tracing::debug!(log_type, violations = violations.len(), "log type is not creatable");
        Err(FieldError::new("log_type", LOG_TYPE_NOT_CREATABLE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use chrono::DateTime;
    use farmlog_log::{Notes, Violation};
    use proptest::prelude::*;

    use crate::inventory::submission::QuantityInput;

    #[derive(Default)]
    struct Assets(HashMap<AssetId, Asset>);

    impl Assets {
        fn with(mut self, id: u64, name: &str) -> Self {
            self.0.insert(AssetId::new(id), Asset::new(AssetId::new(id), name, "equipment"));
            self
        }
    }

    impl AssetLookup for Assets {
        fn by_id(&self, id: AssetId) -> Option<Asset> {
            self.0.get(&id).cloned()
        }
    }

    #[derive(Default)]
    struct Terms(HashMap<TermId, Term>);

    impl Terms {
        fn with(mut self, id: u64, name: &str) -> Self {
            self.0.insert(TermId::new(id), Term::unit(TermId::new(id), name));
            self
        }
    }

    impl TermLookup for Terms {
        fn by_id(&self, id: TermId) -> Option<Term> {
            self.0.get(&id).cloned()
        }
    }

    struct RejectAll;

    impl SchemaValidator for RejectAll {
        fn validate(&self, _instance: &LogInstance) -> Vec<Violation> {
            vec![
                Violation::on_field("plant", "Plant field is required."),
                Violation::on_field("location", "Location field is required."),
            ]
        }
    }

    struct AcceptAll;

    impl SchemaValidator for AcceptAll {
        fn validate(&self, _instance: &LogInstance) -> Vec<Violation> {
            Vec::new()
        }
    }

    fn cow() -> Asset {
        Asset::new(AssetId::new(42), "Cow 42", "animal")
    }

    fn submission(kind: &str) -> InventorySubmission {
        InventorySubmission {
            date: DateTime::parse_from_rfc3339("2024-03-01T00:00:00Z").unwrap(),
            asset: Some(AssetRef::Raw("7".to_string())),
            quantity: QuantityInput {
                value: "10".to_string(),
                units: None,
                measure: String::new(),
            },
            adjustment_kind: AdjustmentKind::parse(kind),
            log_type: "observation".to_string(),
            notes: Notes::new("Counted at dawn", "default"),
            done: true,
            custom_name: false,
            name: None,
        }
    }

    #[test]
    fn generate_name_uses_kind_templates() {
        let asset = cow();
        assert_eq!(
            generate_name(&AdjustmentKind::Increment, Some(&asset), "5 kg"),
            "Increment inventory of Cow 42 by 5 kg"
        );
        assert_eq!(
            generate_name(&AdjustmentKind::Decrement, Some(&asset), "5 kg"),
            "Decrement inventory of Cow 42 by 5 kg"
        );
        assert_eq!(
            generate_name(&AdjustmentKind::Reset, Some(&asset), "5 kg"),
            "Reset inventory of Cow 42 to 5 kg"
        );
    }

    #[test]
    fn generate_name_is_empty_without_asset() {
        for kind in AdjustmentKind::KNOWN {
            assert_eq!(generate_name(&kind, None, "5 kg"), "");
        }
    }

    #[test]
    fn generate_name_is_empty_for_unknown_kind() {
        let kind = AdjustmentKind::parse("transfer");
        assert_eq!(generate_name(&kind, Some(&cow()), "5 kg"), "");
    }

    #[test]
    fn quantity_summary_segments() {
        let terms = Terms::default().with(3, "kg");
        assert_eq!(
            compose_quantity_summary("5", Some(TermId::new(3)), "weight", &terms),
            "5 kg (weight)"
        );
        assert_eq!(
            compose_quantity_summary("5", Some(TermId::new(99)), "weight", &terms),
            "5 (weight)"
        );
        assert_eq!(compose_quantity_summary("5", None, "", &terms), "5");
        assert_eq!(compose_quantity_summary("", Some(TermId::new(3)), "", &terms), " kg");
    }

    #[test]
    fn resolve_asset_handles_each_reference_shape() {
        let assets = Assets::default().with(7, "Tractor");
        assert_eq!(
            resolve_asset(Some(&AssetRef::Raw("7".to_string())), &assets).map(|a| a.name),
            Some("Tractor".to_string())
        );
        assert!(resolve_asset(Some(&AssetRef::Id(AssetId::new(7))), &assets).is_some());
        assert_eq!(
            resolve_asset(Some(&AssetRef::Asset(cow())), &assets),
            Some(cow())
        );
        assert!(resolve_asset(Some(&AssetRef::Raw("8".to_string())), &assets).is_none());
        assert!(resolve_asset(Some(&AssetRef::Raw("Tractor".to_string())), &assets).is_none());
        assert!(resolve_asset(None, &assets).is_none());
    }

    #[test]
    fn draft_log_for_increment_submission() {
        let assets = Assets::default().with(7, "Tractor");
        let draft = compose_draft_log(&submission("increment"), &assets, &Terms::default());

        assert_eq!(draft.name, "Increment inventory of Tractor by 10");
        assert_eq!(draft.status, LogStatus::Done);
        assert_eq!(draft.timestamp, 1_709_251_200);
        assert_eq!(draft.notes, Notes::new("Counted at dawn", "default"));
        assert_eq!(
            draft.quantities,
            vec![Quantity {
                measure: String::new(),
                value: "10".to_string(),
                units: None,
                adjustment_kind: AdjustmentKind::Increment,
                asset: Some(AssetId::new(7)),
            }]
        );
    }

    #[test]
    fn custom_name_overrides_generated_name() {
        let assets = Assets::default().with(7, "Tractor");
        let mut input = submission("increment");
        input.custom_name = true;
        input.name = Some("Morning count".to_string());
        assert_eq!(compose_draft_log(&input, &assets, &Terms::default()).name, "Morning count");

        input.name = Some(String::new());
        assert_eq!(
            compose_draft_log(&input, &assets, &Terms::default()).name,
            "Increment inventory of Tractor by 10"
        );
    }

    #[test]
    fn unresolved_units_are_dropped_from_quantity() {
        let assets = Assets::default().with(7, "Tractor");
        let terms = Terms::default().with(3, "hours");
        let mut input = submission("reset");
        input.quantity.units = Some(TermId::new(3));
        input.quantity.measure = "time".to_string();
        let draft = compose_draft_log(&input, &assets, &terms);
        assert_eq!(draft.quantities[0].units, Some(TermId::new(3)));
        assert_eq!(draft.name, "Reset inventory of Tractor to 10 hours (time)");

        input.quantity.units = Some(TermId::new(4));
        let draft = compose_draft_log(&input, &assets, &terms);
        assert_eq!(draft.quantities[0].units, None);
        assert_eq!(draft.name, "Reset inventory of Tractor to 10 (time)");
    }

    #[test]
    fn unresolved_asset_still_yields_one_quantity() {
        let draft = compose_draft_log(&submission("decrement"), &Assets::default(), &Terms::default());
        assert_eq!(draft.name, "");
        assert_eq!(draft.quantities.len(), 1);
        assert_eq!(draft.quantities[0].asset, None);
    }

    #[test]
    fn preview_matches_generated_name() {
        let assets = Assets::default().with(7, "Tractor");
        let mut input = submission("decrement");
        input.custom_name = true;
        input.name = Some("ignored".to_string());
        assert_eq!(
            preview_name(&input, &assets, &Terms::default()),
            "Decrement inventory of Tractor by 10"
        );
    }

    #[test]
    fn selectable_gate_reports_fixed_message_once() {
        let err = validate_log_type_selectable("seeding", &RejectAll).unwrap_err();
        assert_eq!(err, FieldError::new("log_type", LOG_TYPE_NOT_CREATABLE));
        assert!(validate_log_type_selectable("observation", &AcceptAll).is_ok());
    }

    proptest! {
        /// Property: identical submissions compose identical drafts.
        #[test]
        fn compose_is_deterministic(
            value in "[0-9]{0,6}",
            measure in "(count|weight|volume)?",
            kind in "(increment|decrement|reset|transfer)",
            done in any::<bool>(),
        ) {
            let assets = Assets::default().with(7, "Tractor");
            let terms = Terms::default().with(3, "kg");
            let mut input = submission(&kind);
            input.quantity.value = value;
            input.quantity.measure = measure;
            input.quantity.units = Some(TermId::new(3));
            input.done = done;

            let first = compose_draft_log(&input, &assets, &terms);
            let second = compose_draft_log(&input, &assets, &terms);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.status == LogStatus::Done, done);
            prop_assert_eq!(first.quantities.len(), 1);
        }
    }
}
