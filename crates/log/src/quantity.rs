//! Quantities attached to logs, and inventory adjustment semantics.

use serde::{Deserialize, Serialize};

use farmlog_core::{AssetId, TermId, ValueObject};

/// How a quantity changes an asset's inventory.
///
/// Anything other than the three known kinds is kept verbatim as
/// `Unrecognized`, so callers can still see what was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AdjustmentKind {
    Increment,
    Decrement,
    Reset,
    Unrecognized(String),
}

impl AdjustmentKind {
    /// The three kinds a form can offer.
    pub const KNOWN: [AdjustmentKind; 3] = [
        AdjustmentKind::Increment,
        AdjustmentKind::Decrement,
        AdjustmentKind::Reset,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw {
            "increment" => Self::Increment,
            "decrement" => Self::Decrement,
            "reset" => Self::Reset,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
            Self::Reset => "reset",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Label shown in the adjustment type select.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Increment => Some("Increment"),
            Self::Decrement => Some("Decrement"),
            Self::Reset => Some("Reset"),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for AdjustmentKind {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<AdjustmentKind> for String {
    fn from(value: AdjustmentKind) -> Self {
        value.as_str().to_string()
    }
}

impl core::fmt::Display for AdjustmentKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A measured value recorded on a log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity {
    /// Measure code (see [`quantity_measure_options`]); empty when not given.
    pub measure: String,
    /// Value as typed; not checked for numeric-ness here.
    pub value: String,
    pub units: Option<TermId>,
    pub adjustment_kind: AdjustmentKind,
    pub asset: Option<AssetId>,
}

impl ValueObject for Quantity {}

/// One entry of the measure select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureOption {
    pub code: String,
    pub label: String,
}

impl MeasureOption {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Standard measures a quantity can be recorded in.
pub fn quantity_measure_options() -> Vec<MeasureOption> {
    [
        ("count", "Count"),
        ("length", "Length/depth"),
        ("weight", "Weight"),
        ("area", "Area"),
        ("volume", "Volume"),
        ("time", "Time"),
        ("temperature", "Temperature"),
        ("pressure", "Pressure"),
        ("water_content", "Water content"),
        ("value", "Value"),
        ("rate", "Rate"),
        ("rating", "Rating"),
        ("ratio", "Ratio"),
        ("probability", "Probability"),
        ("speed", "Speed"),
    ]
    .into_iter()
    .map(|(code, label)| MeasureOption::new(code, label))
    .collect()
}
