//! Shape-only comparison of JSON values.
//!
//! Two values have the same shape when their type structure lines up: the same
//! broad JSON kind at every visited node, the same key set for record-shaped
//! objects, a matching sampled value shape for lookup-table-shaped objects,
//! and equal lengths for arrays. Leaf values are never compared.
//!
//! The comparator is deliberately sampling rather than exhaustive. Its inputs
//! are live, high-cardinality API responses, and the question it answers is
//! "is this response shape plausible", not "are these equal". Arrays are
//! checked through their first elements only and lookup tables through a
//! handful of entries; both widths are configurable via
//! [`CompareOptions`].

pub mod classify;
pub mod compare;
pub mod kind;

pub use classify::{classify_keys, ObjectShape};
pub use compare::{compare_shapes, CompareOptions, Mismatch, MismatchKind, ShapeReport};
pub use kind::ValueKind;
