//! Typed description of the inventory form's elements and defaults.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::Serialize;

/// One `<option>` of a select element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectElement {
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub options: Vec<SelectOption>,
    pub default_value: Option<String>,
    pub required: bool,
}

impl SelectElement {
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextElement {
    pub title: &'static str,
    pub size: Option<u32>,
    pub max_length: Option<usize>,
    pub default_value: Option<String>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckboxElement {
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub default_value: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Autocomplete over entities of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutocompleteElement {
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub target_type: &'static str,
    pub target_bundle: Option<&'static str>,
    /// Field and direction matches are ordered by.
    pub sort: Option<(&'static str, SortDirection)>,
    /// Unknown labels create new entities in `target_bundle`.
    pub auto_create: bool,
    pub size: Option<u32>,
    pub max_length: Option<usize>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateElement {
    pub title: &'static str,
    pub default_value: DateTime<FixedOffset>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotesElement {
    pub title: &'static str,
    pub default_format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuantityElements {
    pub value: TextElement,
    pub units: AutocompleteElement,
    pub measure: SelectElement,
}

/// The inventory form as presented to one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryForm {
    pub date: DateElement,
    pub asset: AutocompleteElement,
    pub quantity: QuantityElements,
    pub inventory_adjustment: SelectElement,
    pub log_type: SelectElement,
    pub notes: NotesElement,
    pub done: CheckboxElement,
    pub custom_name: CheckboxElement,
    /// Present only while custom naming is switched on.
    pub name: Option<TextElement>,
}

/// Midnight of `now`'s calendar day in `tz`.
pub fn local_midnight(now: DateTime<Utc>, tz: FixedOffset) -> DateTime<FixedOffset> {
    let local = now.with_timezone(&tz);
    local
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| tz.from_local_datetime(&midnight).single())
        .unwrap_or(local)
}
