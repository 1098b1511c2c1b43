//! Application service layer.
//!
//! The [`Model`] trait is the single entry point for reading and mutating the
//! address book and the active filter. [`ModelManager`] is the in-memory
//! implementation.

mod filtered;
mod model;

pub use filtered::FilteredPersonList;
pub use model::{Model, ModelManager};
