//! `farmlog-quick`: guided data entry forms that produce logs.
//!
//! Forms depend only on the collaborator traits in [`services`]; storage and
//! access policy are supplied by the host (or by `farmlog-infra` in tests).

pub mod config;
pub mod error;
pub mod inventory;
pub mod quick_form;
pub mod services;

pub use config::InventoryFormConfig;
pub use error::{FieldError, PersistError, QuickFormError};
pub use inventory::{InventoryQuickForm, InventorySubmission};
pub use quick_form::{QuickForm, QuickFormInfo};
pub use services::{
    AssetLookup, InventoryServices, LogPersister, LogTypeAccessFilter, LogTypeOption,
    MeasureOptionSource, TermLookup,
};
