//! The filtering pipeline: catalog + criteria in, visible subset out.
//!
//! [`FilterEngine`] is the only entry point. It is a pure function of its
//! inputs: deterministic, idempotent, and side-effect free, so the same
//! catalog and criteria always produce the same visible set.
//!
//! ## Matching rules
//!
//! An item is visible when all three predicates hold:
//!
//! 1. **Search**: the trimmed, lowercased term is a substring of the item's
//!    search text (title + description + tags, lowercased). Empty matches all.
//! 2. **Category**: no category selected, or exact string equality.
//! 3. **Difficulty**: no difficulty selected, or text equality after
//!    stringification (numeric `3` equals text `"3"`).
//!
//! Output preserves catalog order; there is no relevance ranking.

pub mod engine;

pub use engine::FilterEngine;
