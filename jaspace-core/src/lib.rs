// Jaspace Core Library
//
// Inserts an ASCII space between adjacent Japanese script and Latin
// alphanumeric characters, applies a small set of punctuation adjacency
// rules, then restores configured exclusion phrases. Main interface for
// formatting a single text file in place.

pub mod config;
pub mod exclusions;
pub mod processor;
pub mod repair;
pub mod rules;
pub mod script;
pub mod storage;

// Re-export main types and functions for easy use
pub use config::ExclusionConfig;
pub use exclusions::ExclusionNormalizer;
pub use processor::{DocumentFormatter, EnvironmentError, FormatOutcome, SkipReason};
pub use repair::{repair_file, RepairOutcome};
pub use rules::{SpacingEngine, SpacingRule};
pub use script::ScriptClass;
