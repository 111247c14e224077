//! Predicate evaluation against recorded request bodies.
//!
//! A predicate names a dotted attribute path and the value expected there.
//! Evaluation is total: malformed bodies and unresolvable paths simply do not
//! match.
//!
//! # Module Structure
//!
//! - `json_path` - dotted path resolution over the raw body text
//! - `evaluator` - normalized, case-insensitive value comparison

mod evaluator;
mod json_path;

pub use evaluator::{matches, predicates_match};
pub use json_path::{lookup_raw, parse_body, resolve, Resolved};
