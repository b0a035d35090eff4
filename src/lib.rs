//! # bitlayout
//!
//! Declare the bit-level layout of a structured binary record (such as a
//! network packet header) as a tree of named, fixed-width fields, then
//! compute the absolute bit offset of every field at every nesting depth.
//!
//! A [layout::Layout] is validated once by [layout::Layout::init]: duplicate
//! field names anywhere in the tree are rejected, as is any parent field
//! whose declared width disagrees with the sum of its children's widths. On
//! success, every field name maps to its bit distance from the start of the
//! record, regardless of nesting.
//!
//! ## Example
//!
//! ```
//! use bitlayout::field::{Field, RESERVED};
//! use bitlayout::layout::Layout;
//!
//! let mut header = Layout::new(vec![
//!     Field::new("version", 4),
//!     Field::new("ihl", 4),
//!     Field::new_with_layout(
//!         "tos",
//!         8,
//!         Layout::new(vec![
//!             Field::new("precedence", 3),
//!             Field::new("delay", 1),
//!             Field::new("throughput", 1),
//!             Field::new("reliability", 1),
//!             Field::new(RESERVED, 2),
//!         ]),
//!     ),
//! ]);
//! header.init().unwrap();
//!
//! assert_eq!(header.offset_of("tos"), Some(8));
//! assert_eq!(header.offset_of("delay"), Some(11));
//! ```

pub mod errors;
pub mod field;
pub mod layout;
#[cfg(feature = "serde")]
pub mod serde;
