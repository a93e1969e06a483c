//! Lexcite Selector
//!
//! Builds the final citation bank from ranked, quality-clean candidates:
//! first one citation per critical proposition (coverage guarantee), then
//! the best remaining candidates up to the tier's target count. Each
//! selection is classified as binding or persuasive authority.
//!
//! The coverage-first ordering deliberately trades strict global score
//! optimality for guaranteed topical coverage: an uncovered critical
//! proposition is worse than a slightly lower average score.

#![warn(missing_docs)]

mod selector;

pub use selector::{SelectionConfig, Selector};
