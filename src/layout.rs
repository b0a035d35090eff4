//! Layout: an ordered tree of bit fields and, once initialized, the flat
//! table of absolute bit offsets.

use std::collections::{BTreeMap, HashSet};

use crate::{
    errors::LayoutError,
    field::{Field, RESERVED},
};

/// An ordered sequence of [Field]s occupying contiguous bit positions,
/// together with the name-to-offset table built by [Layout::init].
///
/// Construct the tree declaratively, call [Layout::init] once, then look up
/// offsets with [Layout::offset_of]. Every offset is the bit distance from
/// the start of the record, at every nesting depth.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    /// Fields in declaration order.
    pub fields: Vec<Field>,
    offsetof: Option<BTreeMap<String, usize>>,
}

impl Layout {
    /// Creates an uninitialized layout from fields in declaration order.
    pub fn new(fields: Vec<Field>) -> Self {
        Layout {
            fields,
            offsetof: None,
        }
    }

    /// Validates the layout and builds the offset table.
    ///
    /// Fails with [LayoutError::DuplicateFieldName] if a non-reserved name
    /// appears more than once anywhere in the tree, or with
    /// [LayoutError::ChildSizeMismatch] if a field's declared width differs
    /// from the sum of its children's widths. Validation stops at the first
    /// violation, and on failure the layout stays uninitialized.
    ///
    /// Once `init` has succeeded, subsequent calls are no-ops that return
    /// `Ok(())`; the table is final.
    pub fn init(&mut self) -> Result<(), LayoutError> {
        if self.offsetof.is_some() {
            return Ok(());
        }

        let mut seen = HashSet::new();
        let mut offsetof = BTreeMap::new();
        let mut offset = 0;

        for field in &self.fields {
            walk(field, &mut offset, &mut seen, &mut offsetof)?;
        }

        self.offsetof = Some(offsetof);
        Ok(())
    }

    /// Returns the absolute bit offset of `name`, or `None` if the layout is
    /// uninitialized or has no such field.
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.offsetof.as_ref()?.get(name).copied()
    }

    /// Returns the whole offset table, or `None` until [Layout::init] has
    /// succeeded.
    pub fn offsets(&self) -> Option<&BTreeMap<String, usize>> {
        self.offsetof.as_ref()
    }

    /// True once [Layout::init] has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.offsetof.is_some()
    }

    /// Sum of the declared widths of the top-level fields, in bits.
    pub fn total_bits(&self) -> usize {
        self.fields.iter().map(|field| field.bits).sum()
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::LayoutDef> for Layout {
    fn from(value: crate::serde::LayoutDef) -> Self {
        Layout::new(value.fields.into_iter().map(Into::into).collect())
    }
}

/// One pre-order step of the traversal. `offset` is the running cursor for
/// the current nesting level; children get their own cursor seeded with the
/// parent's absolute offset, so sibling widths accumulate per level while
/// each level's base is the parent's already-computed absolute position.
fn walk(
    field: &Field,
    offset: &mut usize,
    seen: &mut HashSet<String>,
    offsetof: &mut BTreeMap<String, usize>,
) -> Result<(), LayoutError> {
    if field.name != RESERVED && !seen.insert(field.name.clone()) {
        return Err(LayoutError::DuplicateFieldName(field.name.clone()));
    }

    offsetof.insert(field.name.clone(), *offset);

    if !field.layout.fields.is_empty() {
        let child_bits: usize = field.layout.fields.iter().map(|child| child.bits).sum();
        if child_bits != field.bits {
            return Err(LayoutError::ChildSizeMismatch {
                field: field.name.clone(),
                declared_bits: field.bits,
                child_bits,
            });
        }

        let mut child_offset = *offset;
        for child in &field.layout.fields {
            walk(child, &mut child_offset, seen, offsetof)?;
        }
    }

    *offset += field.bits;
    Ok(())
}
