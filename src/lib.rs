//! # Overview
//!
//! This crate finds the minimal edit script between two sequences of arbitrary elements, that
//! is the shortest sequence of insertions and removals, interleaved with elements kept as they
//! are, that transforms one sequence into the other. This is the [longest common
//! subsequence][lcs] variant of the [Levenshtein distance][levenshtein], without substitutions.
//!
//! On top of it, [diff_mapping] compares keyed mappings and [diff_tree] recursively compares
//! [Value]s made of sequences, mappings and scalars, rendering differences through a
//! user-defined [Differ].
//!
//! Finding the edit script between sequences of lengths `m` and `n` takes `O(m * n)` time and
//! memory. Use [try_diff_by] with a [Budget] to bound the memory up front.
//!
//! [lcs]: https://en.wikipedia.org/wiki/Longest_common_subsequence
//! [levenshtein]: https://en.wikipedia.org/wiki/Levenshtein_distance
//!
//! # Features
//!
//! * `json`: conversions between [Value] and `serde_json::Value`.
//! * `tracing`: emit [tracing](https://docs.rs/tracing) events.
//!
//! # Example
//!
//! ```rust
//! use difft::*;
//! use std::collections::HashMap;
//! #
//! # fn tree(json: serde_json::Value) -> Value<serde_json::Value> {
//! #     use serde_json::Value::*;
//! #     match json {
//! #         Array(a) => Value::Sequence(a.into_iter().map(tree).collect()),
//! #         Object(m) => Value::Mapping(m.into_iter().map(|(k, v)| (k, tree(v))).collect()),
//! #         scalar => Value::Scalar(scalar),
//! #     }
//! # }
//!
//! macro_rules! json {
//!     ($( $tokens:tt )*) => {
//!         // ...
//! #         tree(::serde_json::json!({$($tokens)*}))
//!     };
//! }
//!
//! type Json = Value<serde_json::Value>;
//!
//! struct Patch;
//!
//! impl Differ<Json, Json> for Patch {
//!     fn added(&self, x: &Json) -> Json {
//!         Value::Mapping(HashMap::from([("+".into(), x.clone())]))
//!     }
//!
//!     fn removed(&self, x: &Json) -> Json {
//!         Value::Mapping(HashMap::from([("-".into(), x.clone())]))
//!     }
//!
//!     fn diff(&self, x: &Json, y: &Json) -> (Json, bool) {
//!         let d = HashMap::from([("-".into(), x.clone()), ("+".into(), y.clone())]);
//!         (Value::Mapping(d), x != y)
//!     }
//! }
//!
//! let john = json! {
//!     "name": "John Doe",
//!     "age": 43,
//!     "phones": [
//!         "+44 1234567",
//!         "+44 2345678"
//!     ]
//! };
//!
//! let jane = json! {
//!     "name": "Jane Doe",
//!     "maiden name": "Smith",
//!     "age": 40,
//!     "phones": [
//!         "+44 7654321",
//!     ]
//! };
//!
//! let (delta, changed) = diff_tree(&Patch, PartialEq::eq, &john, &jane);
//!
//! assert!(changed);
//!
//! assert_eq!(delta, json! {
//!     "name": { "-": "John Doe", "+": "Jane Doe" },
//!     "maiden name": { "+": "Smith" },
//!     "age": { "-": 43, "+": 40 },
//!     "phones": [
//!         { "-": "+44 1234567" },
//!         { "-": "+44 2345678" },
//!         { "+": "+44 7654321" },
//!     ]
//! });
//! ```

#[macro_use]
mod tracing_macros;

mod diff;
mod differ;
mod edit;
mod error;
mod mapping;
mod table;
mod tree;

pub use diff::*;
pub use differ::*;
pub use edit::*;
pub use error::*;
pub use mapping::*;
pub use table::*;
pub use tree::*;

#[cfg(feature = "json")]
mod json;
