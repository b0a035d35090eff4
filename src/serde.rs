//! JSON-deserializable layout description.
//!
//! These types describe the *shape* of a record's bit layout. They are
//! intended to be constructed from JSON (for example a layout file shipped
//! with your application) and then converted into core `bitlayout` types,
//! which are validated by [crate::layout::Layout::init].

use serde::{Deserialize, Serialize};

/// Top-level layout definition consisting of a list of fields.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LayoutDef {
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
}

/// Description of a single field.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FieldDef {
    /// Field name; becomes the key in the offset table.
    pub name: String,
    /// Optional human-readable description.
    #[serde(default)]
    pub desc: String,
    /// Width of the field, in bits.
    pub bits: usize,
    /// Optional internal structure of the field's bits; omitted for leaf
    /// fields.
    #[serde(default)]
    pub layout: Option<LayoutDef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_def_from_json() {
        let json = r#"{
            "fields": [
                { "name": "version", "bits": 4 },
                { "name": "ihl", "bits": 4 },
                {
                    "name": "frag_off",
                    "desc": "flags and fragment offset",
                    "bits": 16,
                    "layout": {
                        "fields": [
                            { "name": "flags", "bits": 3 },
                            { "name": "offset", "bits": 13 }
                        ]
                    }
                }
            ]
        }"#;

        let def: LayoutDef = serde_json::from_str(json).unwrap();
        let mut layout: crate::layout::Layout = def.into();
        layout.init().unwrap();

        assert_eq!(layout.offset_of("version"), Some(0));
        assert_eq!(layout.offset_of("frag_off"), Some(8));
        assert_eq!(layout.offset_of("flags"), Some(8));
        assert_eq!(layout.offset_of("offset"), Some(11));
    }

    #[test]
    fn test_invalid_def_fails_validation() {
        let json = r#"{
            "fields": [
                {
                    "name": "word",
                    "bits": 8,
                    "layout": {
                        "fields": [
                            { "name": "hi", "bits": 4 },
                            { "name": "lo", "bits": 3 }
                        ]
                    }
                }
            ]
        }"#;

        let def: LayoutDef = serde_json::from_str(json).unwrap();
        let mut layout: crate::layout::Layout = def.into();
        assert_eq!(
            layout.init().unwrap_err(),
            crate::errors::LayoutError::ChildSizeMismatch {
                field: "word".to_string(),
                declared_bits: 8,
                child_bits: 7,
            }
        );
    }
}
