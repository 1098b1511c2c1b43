//! Data models for the address book.
//!
//! This module contains the person record, the address book that holds
//! persons unique by IC, and the user preferences stored next to it.

pub mod address_book;
pub mod person;
pub mod sample_data;
pub mod user_prefs;

pub use address_book::AddressBook;
pub use person::Person;
pub use user_prefs::{GuiSettings, UserPrefs};
