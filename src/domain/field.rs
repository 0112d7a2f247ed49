//! The `Field` trait shared by contact value objects.

/// A single labeled value stored on a contact record.
///
/// Implemented by [`Name`](super::Name) and [`Phone`](super::Phone). The label
/// is what a user would call the field ("name", "phone").
pub trait Field {
    /// Human-readable label for this kind of field.
    const LABEL: &'static str;

    /// The stored value.
    fn value(&self) -> &str;

    /// Render as `label: value`.
    fn labeled(&self) -> String {
        format!("{}: {}", Self::LABEL, self.value())
    }
}
