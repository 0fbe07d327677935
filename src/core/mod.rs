//! Core business logic - framework-agnostic trip log and financial summary.

/// pt-BR display helpers (currency, ratio bar, trip lines)
pub mod format;
/// Lenient text-to-number and date coercion for submissions
pub mod input;
/// Key-value document persistence
pub mod key_value;
/// Example trips for an empty log
pub mod seed;
/// The trip record store
pub mod store;
/// Dashboard statistics and per-trip profit
pub mod summary;
/// Trip, expense and draft types
pub mod trip;
