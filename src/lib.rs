//! Address Book - the model layer of a single-user contact manager.
//!
//! Persons are keyed by a validated national identification number (IC). All
//! state lives behind the [`Model`] trait: an [`AddressBook`] holding persons
//! unique by IC, user preferences, and a replaceable filter predicate that
//! drives the displayed person list. State changes go through [`Command`]s.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (IC, name, phone, email, address, tag)
//! - **models**: Person, AddressBook, UserPrefs, sample data
//! - **matching**: Predicates for the filtered person list
//! - **services**: The `Model` façade and its filtered view
//! - **commands**: Command objects executed against a `Model`
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use commands::{Command, CommandResult, DeleteCommand};
pub use config::Config;
pub use domain::{Ic, ValidationError};
pub use error::{AddressBookError, CommandError, ConfigError};
pub use matching::{PersonPredicate, PREDICATE_SHOW_ALL_PERSONS};
pub use models::{AddressBook, Person, UserPrefs};
pub use services::{FilteredPersonList, Model, ModelManager};
