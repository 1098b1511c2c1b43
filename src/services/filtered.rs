//! Read-only, predicate-filtered projection over an address book.

use crate::matching::PersonPredicate;
use crate::models::Person;
use std::fmt;

/// The persons of an address book for which the active predicate holds.
///
/// Holds no persons of its own: every call to [`FilteredPersonList::iter`]
/// (and every method built on it) re-applies the predicate to the backing
/// slice, so the view can be walked any number of times. A fresh view must be
/// requested from the model after a mutation; the borrow checker enforces
/// this.
#[derive(Clone, Copy)]
pub struct FilteredPersonList<'a> {
    persons: &'a [Person],
    predicate: &'a dyn PersonPredicate,
}

impl<'a> FilteredPersonList<'a> {
    pub fn new(persons: &'a [Person], predicate: &'a dyn PersonPredicate) -> Self {
        Self { persons, predicate }
    }

    /// Iterate over matching persons in address book order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Person> + Clone + 'a {
        let predicate = self.predicate;
        self.persons.iter().filter(move |p| predicate.test(p))
    }

    /// Number of matching persons.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// The `index`-th matching person (zero-based).
    pub fn get(&self, index: usize) -> Option<&'a Person> {
        self.iter().nth(index)
    }

    /// Copy the matching persons out, e.g. to hand to a renderer.
    pub fn to_vec(&self) -> Vec<Person> {
        self.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for FilteredPersonList<'a> {
    type Item = &'a Person;
    type IntoIter = Box<dyn Iterator<Item = &'a Person> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl PartialEq for FilteredPersonList<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl fmt::Debug for FilteredPersonList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, EmailAddress, Ic, Name, PhoneNumber};
    use crate::matching::{NameContainsKeywordsPredicate, PREDICATE_SHOW_ALL_PERSONS};

    fn person(name: &str, ic: &str) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            PhoneNumber::new("12345").unwrap(),
            EmailAddress::new("x@example.com").unwrap(),
            Address::new("Main Street").unwrap(),
            Ic::new(ic).unwrap(),
            [],
        )
    }

    #[test]
    fn test_show_all_yields_everything_in_order() {
        let persons = vec![person("Alice", "S1111111A"), person("Bob", "S2222222B")];
        let list = FilteredPersonList::new(&persons, &PREDICATE_SHOW_ALL_PERSONS);
        assert_eq!(list.len(), 2);
        assert_eq!(list.to_vec(), persons);
    }

    #[test]
    fn test_filter_is_restartable() {
        let persons = vec![
            person("Alice", "S1111111A"),
            person("Bob", "S2222222B"),
            person("Alice Tan", "S3333333C"),
        ];
        let predicate = NameContainsKeywordsPredicate::new(["alice"]);
        let list = FilteredPersonList::new(&persons, &predicate);

        let first: Vec<_> = list.iter().collect();
        let second: Vec<_> = list.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![&persons[0], &persons[2]]);
        assert_eq!(list.get(1), Some(&persons[2]));
        assert_eq!(list.get(2), None);
    }

    #[test]
    fn test_empty_filter() {
        let persons = vec![person("Alice", "S1111111A")];
        let none = |_: &Person| false;
        let list = FilteredPersonList::new(&persons, &none);
        assert!(list.is_empty());
        assert_eq!(list.into_iter().count(), 0);
    }
}
