//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// AI freight analysis command
pub mod analysis;

/// Dashboard command
pub mod dashboard;

/// General utility commands
pub mod general;

/// Trip log commands
pub mod trip;

pub use analysis::*;
pub use dashboard::*;
pub use general::*;
pub use trip::*;
