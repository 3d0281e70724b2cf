//! Duplicate-key merging.
//!
//! When a document names the same key twice in one object, the two values
//! are combined instead of one silently shadowing the other:
//!
//! - both values are objects: the later object's entries are merged into the
//!   earlier one, recursively, with this same rule;
//! - anything else: the later value replaces the earlier one, and the key
//!   keeps the position where it was first seen.
//!
//! ```rust
//! use serde_kv::{kv, merge};
//!
//! let base = kv!({ "A": 1, "B": false, "C": { "X": [1, 2, 3] } });
//! let overlay = kv!({ "B": true, "D": 5, "C": { "Y": false } });
//!
//! assert_eq!(
//!     merge(base, overlay),
//!     kv!({ "A": 1, "B": true, "D": 5, "C": { "X": [1, 2, 3], "Y": false } })
//! );
//! ```

use crate::Value;

/// Merges `incoming` on top of `existing` and returns the combined value.
#[must_use]
pub fn merge(mut existing: Value, incoming: Value) -> Value {
    merge_into(&mut existing, incoming);
    existing
}

/// In-place form of [`merge`] used while building parsed objects.
pub(crate) fn merge_into(slot: &mut Value, incoming: Value) {
    match (slot, incoming) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                base.merge_insert(key, value);
            }
        }
        (slot, incoming) => *slot = incoming,
    }
}
