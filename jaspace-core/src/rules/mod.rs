// Main rules module - delegates to semantic sub-modules
// This file coordinates the rule system but actual implementations are in:
// - engine.rs: SpacingEngine and the shared substitution rule type
// - boundary.rs: script boundary insertion (Japanese <-> Latin alnum)
// - punctuation.rs: parenthesis and percent adjacency
// - particles.rs: bracketed span / particle gap collapse

pub mod boundary;
pub mod engine;
pub mod particles;
pub mod punctuation;

pub use engine::*;
