//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a person record:
//! the IC that identifies a person, plus name, phone, email, address and tags.
//! These value objects validate at construction time and prevent invalid data
//! from being represented in the system.

// Shared plumbing for a string-backed value object:
// accessors, serde as a plain validated string, and `Display`.
macro_rules! string_value_object {
    ($ty:ident) => {
        impl $ty {
            /// Get the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the underlying String.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        // Serde support - serialize as string
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }

        // Serde support - deserialize from string with validation
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                $ty::new(s).map_err(serde::de::Error::custom)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub mod address;
pub mod email;
pub mod errors;
pub mod ic;
pub mod name;
pub mod phone;
pub mod tag;

pub use address::Address;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use ic::Ic;
pub use name::Name;
pub use phone::PhoneNumber;
pub use tag::Tag;
