//! Error types for layout validation.

use thiserror::Error;

/// Errors produced when validating a [crate::layout::Layout] in
/// [crate::layout::Layout::init].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A non-reserved field name appears more than once in the layout tree.
    #[error("duplicate field name {0:?}")]
    DuplicateFieldName(String),
    /// A field's declared width does not match the sum of its child fields'
    /// widths.
    #[error(
        "field {field:?} declares {declared_bits} bits, but its child fields sum to {child_bits}"
    )]
    ChildSizeMismatch {
        /// Name of the offending field.
        field: String,
        /// Width the field itself declares.
        declared_bits: usize,
        /// Sum of the widths of the field's direct children.
        child_bits: usize,
    },
}
