//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

// =============================================================================
// Parser Defaults
// =============================================================================

pub fn default_fallback_encoding() -> String {
    "windows-1252".to_string()
}

// =============================================================================
// Log Defaults
// =============================================================================

pub fn default_log_level() -> String {
    "info".to_string()
}
