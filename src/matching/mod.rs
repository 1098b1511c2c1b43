//! Person predicates for the filtered list.
//!
//! The model holds exactly one active predicate at a time; these are the
//! predicates commands and front ends use to set it.

pub mod predicates;

pub use predicates::{
    IcMatchesPredicate, NameContainsKeywordsPredicate, PersonPredicate,
    PREDICATE_SHOW_ALL_PERSONS,
};
