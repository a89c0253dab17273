//! Log schema module.
//!
//! Log types and their typed field definitions, the lab test log type, the
//! records logs reference (assets, terms, quantities) and schema validation.
//! Pure domain logic: no IO, no storage.

pub mod draft;
pub mod field;
pub mod lab_test;
pub mod log_type;
pub mod quantity;
pub mod reference;
pub mod schema;

pub use draft::{DraftLog, LogStatus, Notes};
pub use field::{AllowedValue, FieldDefinition, FieldKind, FieldWeight};
pub use lab_test::{LAB_TEST, lab_test, lab_test_type_allowed_values};
pub use log_type::{LogType, LogTypeRegistry, base_field_definitions};
pub use quantity::{AdjustmentKind, MeasureOption, Quantity, quantity_measure_options};
pub use reference::{Asset, AssetStatus, LAB_VOCABULARY, Term, UNIT_VOCABULARY};
pub use schema::{LogInstance, RegistrySchemaValidator, SchemaValidator, Violation};
