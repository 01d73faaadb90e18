//! Pure helper functions
//!
//! Slug derivation and date formatting used by the content model and the
//! page generator.

mod date;
mod slug;

pub use date::*;
pub use slug::*;
