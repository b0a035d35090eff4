//! Definition of the named fields that make up a [crate::layout::Layout].

/// Field name to use for reserved or otherwise unused bits.
///
/// Reserved fields still occupy space, but may appear any number of times in
/// a layout without tripping the duplicate-name check. Callers are not
/// expected to look them up in the offset table.
pub const RESERVED: &str = "__reserved";

/// A single named field in a layout.
#[derive(Debug, Clone, Default)]
pub struct Field {
    /// Name used as the key in the offset table; must be unique across the
    /// whole layout tree unless it is [RESERVED].
    pub name: String,
    /// Free-form description; not used in any computation.
    pub desc: String,
    /// Width of the field, in bits. Zero-width fields are legal.
    pub bits: usize,
    /// Internal structure of this field's bits; empty means the field is a
    /// leaf.
    pub layout: crate::layout::Layout,
}

impl Field {
    pub fn new(name: impl Into<String>, bits: usize) -> Self {
        Field {
            name: name.into(),
            bits,
            ..Default::default()
        }
    }

    pub fn new_with_layout(
        name: impl Into<String>,
        bits: usize,
        layout: crate::layout::Layout,
    ) -> Self {
        Field {
            name: name.into(),
            bits,
            layout,
            ..Default::default()
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::FieldDef> for Field {
    fn from(value: crate::serde::FieldDef) -> Self {
        Field {
            name: value.name,
            desc: value.desc,
            bits: value.bits,
            layout: value.layout.map(Into::into).unwrap_or_default(),
        }
    }
}
