//! Sample contacts rendered below the stuff table on the list page.
//!
//! The set is fixed: it does not depend on the session or on stored stuff.

#[cfg(test)]
#[path = "contacts_test.rs"]
mod contacts_test;

/// A display-only contact card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub address: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

impl Contact {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Stable key for keyed list rendering.
    pub fn key(&self) -> String {
        format!("{}-{}-{}", self.first_name, self.last_name, self.address)
    }
}

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/200x200";

pub const SAMPLE_CONTACTS: [Contact; 3] = [
    Contact {
        first_name: "John",
        last_name: "Doe",
        address: "123 Aloha St, Honolulu, HI",
        image: PLACEHOLDER_IMAGE,
        description: "Enjoys surfing and coding.",
    },
    Contact {
        first_name: "Jane",
        last_name: "Smith",
        address: "456 Kapiolani Blvd, Honolulu, HI",
        image: PLACEHOLDER_IMAGE,
        description: "Loves hiking and photography.",
    },
    Contact {
        first_name: "Kai",
        last_name: "Lee",
        address: "789 University Ave, Honolulu, HI",
        image: PLACEHOLDER_IMAGE,
        description: "ICS 314 student interested in web development.",
    },
];

pub fn sample_contacts() -> &'static [Contact] {
    &SAMPLE_CONTACTS
}
