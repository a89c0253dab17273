//! Inventory quick form: record an increment, decrement or reset of an
//! asset's inventory as a log.
//!
//! ```text
//! submission
//!   ↓ access check (form permissions)
//!   ↓ validate (required values, select choices, creatable log type)
//!   ↓ compose draft log (pure)
//!   ↓ LogPersister::create
//! LogId
//! ```

pub mod compose;
pub mod form;
pub mod submission;

use chrono::{DateTime, Utc};

use farmlog_auth::{Account, Permission};
use farmlog_core::LogId;
use farmlog_log::{AdjustmentKind, DraftLog, UNIT_VOCABULARY};

use crate::config::InventoryFormConfig;
use crate::error::{FieldError, QuickFormError};
use crate::quick_form::{QuickForm, QuickFormInfo};
use crate::services::InventoryServices;

pub use compose::{
    LOG_TYPE_NOT_CREATABLE, compose_draft_log, compose_quantity_summary, generate_name,
    preview_name, resolve_asset, validate_log_type_selectable,
};
pub use form::{
    AutocompleteElement, CheckboxElement, DateElement, InventoryForm, NotesElement,
    QuantityElements, SelectElement, SelectOption, SortDirection, TextElement, local_midnight,
};
pub use submission::{AssetRef, InventorySubmission, QuantityInput};

pub const INVENTORY: &str = "inventory";

pub const ILLEGAL_CHOICE: &str =
    "An illegal choice has been detected. Please contact the site administrator.";

pub struct InventoryQuickForm {
    info: QuickFormInfo,
    config: InventoryFormConfig,
    services: InventoryServices,
}

impl InventoryQuickForm {
    pub fn new(config: InventoryFormConfig, services: InventoryServices) -> Result<Self, QuickFormError> {
        config.validate()?;
        Ok(Self {
            info: QuickFormInfo {
                id: INVENTORY,
                label: "Inventory",
                description: "Record asset inventory adjustments.",
                help_text: "Use this form to increment, decrement, or reset the inventory of an asset. A new log will be created to record the adjustment.",
                permissions: vec![Permission::create_log("observation")],
            },
            config,
            services,
        })
    }

    pub fn config(&self) -> &InventoryFormConfig {
        &self.config
    }

    /// Describe the form for `account`.
    ///
    /// `current` is the submission so far (if any); it decides whether the
    /// custom name element is shown and seeds it with the generated name.
    pub fn build_form(
        &self,
        account: &Account,
        current: Option<&InventorySubmission>,
        now: DateTime<Utc>,
    ) -> InventoryForm {
        let mut measure_options = vec![SelectOption::new("", "")];
        measure_options.extend(
            self.services
                .measures
                .options()
                .into_iter()
                .map(|m| SelectOption::new(m.code, m.label)),
        );

        let log_type_options = self
            .services
            .log_types
            .allowed_types_for(account)
            .into_iter()
            .map(|t| SelectOption::new(t.id, t.label))
            .collect();

        let name = current.filter(|s| s.custom_name).map(|s| TextElement {
            title: "Log name",
            size: None,
            max_length: Some(self.config.name_max_length),
            default_value: Some(self.name_preview(s)),
            required: true,
        });

        InventoryForm {
            date: DateElement {
                title: "Date",
                default_value: local_midnight(now, account.timezone()),
                required: true,
            },
            asset: AutocompleteElement {
                title: "Asset",
                description: Some("Which asset's inventory is being adjusted?"),
                target_type: "asset",
                target_bundle: None,
                sort: Some(("status", SortDirection::Asc)),
                auto_create: false,
                size: None,
                max_length: Some(self.config.asset_max_length),
                required: true,
            },
            quantity: QuantityElements {
                value: TextElement {
                    title: "Quantity",
                    size: Some(self.config.quantity_field_size),
                    max_length: None,
                    default_value: None,
                    required: true,
                },
                units: AutocompleteElement {
                    title: "Units",
                    description: None,
                    target_type: "taxonomy_term",
                    target_bundle: Some(UNIT_VOCABULARY),
                    sort: None,
                    auto_create: true,
                    size: Some(self.config.quantity_field_size),
                    max_length: None,
                    required: false,
                },
                measure: SelectElement {
                    title: "Measure",
                    description: None,
                    options: measure_options,
                    default_value: None,
                    required: false,
                },
            },
            inventory_adjustment: SelectElement {
                title: "Adjustment type",
                description: Some("What type of inventory adjustment is this?"),
                options: AdjustmentKind::KNOWN
                    .iter()
                    .filter_map(|k| k.label().map(|label| SelectOption::new(k.as_str(), label)))
                    .collect(),
                default_value: Some(self.config.default_adjustment.to_string()),
                required: true,
            },
            log_type: SelectElement {
                title: "Log type",
                description: Some("Select the type of log to create."),
                options: log_type_options,
                default_value: Some(self.config.default_log_type.clone()),
                required: true,
            },
            notes: NotesElement {
                title: "Notes",
                default_format: self.config.notes_format.clone(),
            },
            done: CheckboxElement {
                title: "Completed",
                description: None,
                default_value: self.config.default_done,
            },
            custom_name: CheckboxElement {
                title: "Customize log name",
                description: Some(
                    "This allows the log name to be customized. Otherwise, a default name will be generated.",
                ),
                default_value: false,
            },
            name,
        }
    }

    /// The name that would be generated for `submission`.
    pub fn name_preview(&self, submission: &InventorySubmission) -> String {
        preview_name(submission, &*self.services.assets, &*self.services.terms)
    }

    /// Compose the draft log without validating or persisting it.
    pub fn compose(&self, submission: &InventorySubmission) -> DraftLog {
        compose_draft_log(submission, &*self.services.assets, &*self.services.terms)
    }

    /// Every field error in `submission`, in form order.
    pub fn validate(&self, account: &Account, submission: &InventorySubmission) -> Vec<FieldError> {
        let mut errors = Vec::new();

        match &submission.asset {
            None => errors.push(required("asset", "Asset")),
            Some(raw) if raw.is_blank() => errors.push(required("asset", "Asset")),
            Some(raw) => {
                if resolve_asset(Some(raw), &*self.services.assets).is_none() {
                    errors.push(FieldError::new("asset", "There are no assets matching the entered value."));
                }
            }
        }

        if submission.quantity.value.trim().is_empty() {
            errors.push(required("quantity.value", "Quantity"));
        }

        let measure = submission.quantity.measure.as_str();
        if !measure.is_empty() && !self.services.measures.options().iter().any(|m| m.code == measure) {
            errors.push(illegal_choice("quantity.measure"));
        }

        if submission.adjustment_kind.as_str().is_empty() {
            errors.push(required("inventory_adjustment", "Adjustment type"));
        } else if !submission.adjustment_kind.is_known() {
            errors.push(illegal_choice("inventory_adjustment"));
        }

        let log_type = submission.log_type.as_str();
        if log_type.is_empty() {
            errors.push(required("log_type", "Log type"));
        } else if !self
            .services
            .log_types
            .allowed_types_for(account)
            .iter()
            .any(|t| t.id == log_type)
        {
            errors.push(illegal_choice("log_type"));
        } else if let Err(err) = validate_log_type_selectable(log_type, &*self.services.schema) {
            errors.push(err);
        }

        if submission.custom_name {
            let name = submission.name.as_deref().unwrap_or_default();
            let length = name.chars().count();
            if name.trim().is_empty() {
                errors.push(required("name", "Log name"));
            } else if length > self.config.name_max_length {
                errors.push(FieldError::new(
                    "name",
                    format!(
                        "Log name cannot be longer than {} characters but is currently {} characters long.",
                        self.config.name_max_length, length
                    ),
                ));
            }
        }

        errors
    }

    /// Validate, compose and create the log. Returns the new log's id.
    ///
    /// Nothing is written when any step before the write fails.
    pub fn submit(
        &self,
        account: &Account,
        submission: &InventorySubmission,
    ) -> Result<LogId, QuickFormError> {
        self.access(account)?;

        let errors = self.validate(account, submission);
        if !errors.is_empty() {
            tracing::warn!(
                form = INVENTORY,
                account = %account.id,
                errors = errors.len(),
                "inventory submission rejected"
            );
            return Err(QuickFormError::Validation(errors));
        }

        let draft = self.compose(submission);
        let log_type = draft.log_type.clone();
        let log_id = self.services.logs.create(draft)?;
        tracing::info!(
            form = INVENTORY,
            account = %account.id,
            log_id = %log_id,
            log_type = %log_type,
            "inventory adjustment log created"
        );
        Ok(log_id)
    }
}

impl QuickForm for InventoryQuickForm {
    fn info(&self) -> &QuickFormInfo {
        &self.info
    }
}

fn required(field: &str, title: &str) -> FieldError {
    FieldError::new(field, format!("{title} field is required."))
}

/// A select value that is not among the element's options.
fn illegal_choice(field: &str) -> FieldError {
    FieldError::new(field, ILLEGAL_CHOICE)
}
