//! Predicates used to filter the displayed person list.

use crate::domain::Ic;
use crate::models::Person;
use std::fmt;

/// A test applied to each person when building the filtered list.
///
/// Implemented for every `Fn(&Person) -> bool`, so closures and plain
/// functions can be used directly alongside the named predicates below.
pub trait PersonPredicate {
    /// Returns true if `person` should be shown.
    fn test(&self, person: &Person) -> bool;
}

impl<F> PersonPredicate for F
where
    F: Fn(&Person) -> bool,
{
    fn test(&self, person: &Person) -> bool {
        self(person)
    }
}

fn show_all_persons(_: &Person) -> bool {
    true
}

/// Predicate that accepts every person; used to reset filtering.
pub const PREDICATE_SHOW_ALL_PERSONS: fn(&Person) -> bool = show_all_persons;

/// Accepts the person whose IC equals the given one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcMatchesPredicate {
    ic: Ic,
}

impl IcMatchesPredicate {
    pub fn new(ic: Ic) -> Self {
        Self { ic }
    }
}

impl PersonPredicate for IcMatchesPredicate {
    fn test(&self, person: &Person) -> bool {
        person.ic() == &self.ic
    }
}

impl fmt::Display for IcMatchesPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{ic={}}}", std::any::type_name::<Self>(), self.ic)
    }
}

/// Accepts persons with a name word equal to any keyword, ignoring case.
///
/// Matching is on whole words: `"Ali"` does not match `"Alice"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywordsPredicate {
    keywords: Vec<String>,
}

impl NameContainsKeywordsPredicate {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl PersonPredicate for NameContainsKeywordsPredicate {
    fn test(&self, person: &Person) -> bool {
        self.keywords.iter().any(|keyword| {
            person
                .name()
                .words()
                .any(|word| word.to_lowercase() == keyword.to_lowercase())
        })
    }
}

impl fmt::Display for NameContainsKeywordsPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{{keywords={:?}}}",
            std::any::type_name::<Self>(),
            self.keywords
        )
    }
}
