//! Seed data for a fresh address book.

use super::{AddressBook, Person};
use crate::domain::{Address, EmailAddress, Ic, Name, PhoneNumber, Tag, ValidationError};

const SAMPLE_PERSONS: &[(&str, &str, &str, &str, &str, &[&str])] = &[
    (
        "Alex Yeoh",
        "87438807",
        "alexyeoh@example.com",
        "Blk 30 Geylang Street 29, #06-40",
        "S8734985A",
        &["friends"],
    ),
    (
        "Bernice Yu",
        "99272758",
        "berniceyu@example.com",
        "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        "S9912345B",
        &["colleagues", "friends"],
    ),
    (
        "Charlotte Oliveiro",
        "93210283",
        "charlotte@example.com",
        "Blk 11 Ang Mo Kio Street 74, #11-04",
        "T0123456C",
        &["neighbours"],
    ),
    (
        "David Li",
        "91031282",
        "lidavid@example.com",
        "Blk 436 Serangoon Gardens Street 26, #16-43",
        "S7654321D",
        &["family"],
    ),
    (
        "Irfan Ibrahim",
        "92492021",
        "irfan@example.com",
        "Blk 47 Tampines Street 20, #17-35",
        "F1234567E",
        &["classmates"],
    ),
    (
        "Roy Balakrishnan",
        "92624417",
        "royb@example.com",
        "Blk 45 Aljunied Street 85, #11-31",
        "G7654321F",
        &["colleagues"],
    ),
];

/// The sample persons, in display order.
pub fn sample_persons() -> Result<Vec<Person>, ValidationError> {
    SAMPLE_PERSONS
        .iter()
        .map(|&(name, phone, email, address, ic, tags)| -> Result<Person, ValidationError> {
            let tags = tags
                .iter()
                .map(|t| Tag::new(*t))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Person::new(
                Name::new(name)?,
                PhoneNumber::new(phone)?,
                EmailAddress::new(email)?,
                Address::new(address)?,
                Ic::new(ic)?,
                tags,
            ))
        })
        .collect()
}

/// An address book holding the sample persons.
pub fn sample_address_book() -> anyhow::Result<AddressBook> {
    Ok(AddressBook::from_persons(sample_persons()?)?)
}
