//! Discord interaction handlers
//!
//! Handlers for non-command interactions such as autocomplete.

/// Autocomplete handlers for trip ids
pub mod autocomplete;
