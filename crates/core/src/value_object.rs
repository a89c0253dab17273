//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own: two quantities with the same
/// value, units, measure and asset are the same quantity. They are built once
/// and replaced rather than mutated.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Notes {
///     value: String,
///     format: String,
/// }
///
/// impl ValueObject for Notes {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
