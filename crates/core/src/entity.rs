//! Entity trait: identity + a human-facing label.

/// Entity marker + minimal interface.
///
/// Everything a log can point at (assets, taxonomy terms) is identified by
/// id and shown to people by its label.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Returns the display label.
    fn label(&self) -> &str;
}
