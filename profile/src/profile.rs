//! The profile aggregate and its pure update operations.
//!
//! Updates are copy-on-write: only the path from the root to the modified
//! facet is rebuilt, untouched subtrees are cloned structurally unchanged.
//! All operations are total — duplicate ids are accepted as given (the
//! registry is the sole id authority and never issues one twice), and
//! removing an absent id is a silent no-op.

use crate::apps::ClientApp;
use serde::{Deserialize, Serialize};
use veridian_types::{AttributeId, PhoneNumber, Verifiable};

/// A user's verifiable-identity profile.
///
/// Created empty at session start, replaced wholesale on each attribute
/// mutation, discarded at logout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub identity: Identity,
    /// Linked relying-party applications (read-only membership list).
    pub apps: Vec<ClientApp>,
}

/// The contact facets of a profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: EmailFacet,
    pub phone: PhoneFacet,
}

/// Email addresses, most recently added first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailFacet {
    pub addresses: Vec<Verifiable<String>>,
}

/// Phone numbers, most recently added first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneFacet {
    pub numbers: Vec<Verifiable<PhoneNumber>>,
}

impl Profile {
    /// The empty profile a session starts from.
    pub fn empty() -> Self {
        Self::default()
    }

    /// New profile with `address` prepended to the email facet.
    ///
    /// The attribute arrives fully formed (id, status, added, value) from
    /// the verification registry; no validation happens here.
    pub fn add_email_address(&self, address: Verifiable<String>) -> Profile {
        let mut addresses = Vec::with_capacity(self.identity.email.addresses.len() + 1);
        addresses.push(address);
        addresses.extend(self.identity.email.addresses.iter().cloned());

        Profile {
            identity: Identity {
                email: EmailFacet { addresses },
                phone: self.identity.phone.clone(),
            },
            apps: self.apps.clone(),
        }
    }

    /// New profile with the email whose id matches removed.
    ///
    /// Idempotent: an absent id yields an equivalent profile.
    pub fn remove_email_address(&self, id: AttributeId) -> Profile {
        Profile {
            identity: Identity {
                email: EmailFacet {
                    addresses: self
                        .identity
                        .email
                        .addresses
                        .iter()
                        .filter(|a| a.id != id)
                        .cloned()
                        .collect(),
                },
                phone: self.identity.phone.clone(),
            },
            apps: self.apps.clone(),
        }
    }

    /// New profile with `number` prepended to the phone facet.
    pub fn add_phone_number(&self, number: Verifiable<PhoneNumber>) -> Profile {
        let mut numbers = Vec::with_capacity(self.identity.phone.numbers.len() + 1);
        numbers.push(number);
        numbers.extend(self.identity.phone.numbers.iter().cloned());

        Profile {
            identity: Identity {
                email: self.identity.email.clone(),
                phone: PhoneFacet { numbers },
            },
            apps: self.apps.clone(),
        }
    }

    /// New profile with the phone number whose id matches removed.
    pub fn remove_phone_number(&self, id: AttributeId) -> Profile {
        Profile {
            identity: Identity {
                email: self.identity.email.clone(),
                phone: PhoneFacet {
                    numbers: self
                        .identity
                        .phone
                        .numbers
                        .iter()
                        .filter(|n| n.id != id)
                        .cloned()
                        .collect(),
                },
            },
            apps: self.apps.clone(),
        }
    }

    /// Look up an email attribute by id.
    pub fn email_address(&self, id: AttributeId) -> Option<&Verifiable<String>> {
        self.identity.email.addresses.iter().find(|a| a.id == id)
    }

    /// Look up a phone attribute by id.
    pub fn phone_number(&self, id: AttributeId) -> Option<&Verifiable<PhoneNumber>> {
        self.identity.phone.numbers.iter().find(|n| n.id == id)
    }
}
