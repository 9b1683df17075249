// All core functionality is in jaspace-core
// This CLI acts as a thin wrapper around the core library

// CLI-specific modules
pub mod hook;

// Re-export core types for convenience
pub use jaspace_core::*;

// Re-export CLI utilities
pub use hook::HookPayload;
