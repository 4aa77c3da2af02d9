//! Identifiers of backing record slots.
//!
//! Identifiers are dot-addressable in their string form, e.g.
//! `"homeAddress.city"`, matching how the native store names them in
//! filter expressions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A component slot inside a native address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressPart {
    Address1,
    Address2,
    City,
    StateProvince,
    ZipPostal,
    Country,
}

impl AddressPart {
    pub const ALL: [AddressPart; 6] = [
        Self::Address1,
        Self::Address2,
        Self::City,
        Self::StateProvince,
        Self::ZipPostal,
        Self::Country,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Address1 => "address1",
            Self::Address2 => "address2",
            Self::City => "city",
            Self::StateProvince => "stateProvince",
            Self::ZipPostal => "zipPostal",
            Self::Country => "country",
        }
    }
}

/// A single addressable slot of a [`crate::BoundedContactRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NativeField {
    Uid,
    /// The display-name slot (`user1` in the native schema).
    DisplayName,
    Title,
    FirstName,
    LastName,
    Note,
    Birthday,
    Email1,
    Email2,
    Email3,
    HomePhone,
    HomePhone2,
    WorkPhone,
    WorkPhone2,
    MobilePhone,
    FaxPhone,
    PagerPhone,
    OtherPhone,
    HomeAddress(AddressPart),
    WorkAddress(AddressPart),
    Webpage,
    Company,
    JobTitle,
    Categories,
    Picture,
}

impl NativeField {
    /// Dot-addressed identifier used by the native store.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uid => "uid",
            Self::DisplayName => "user1",
            Self::Title => "title",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Note => "note",
            Self::Birthday => "birthday",
            Self::Email1 => "email1",
            Self::Email2 => "email2",
            Self::Email3 => "email3",
            Self::HomePhone => "homePhone",
            Self::HomePhone2 => "homePhone2",
            Self::WorkPhone => "workPhone",
            Self::WorkPhone2 => "workPhone2",
            Self::MobilePhone => "mobilePhone",
            Self::FaxPhone => "faxPhone",
            Self::PagerPhone => "pagerPhone",
            Self::OtherPhone => "otherPhone",
            Self::HomeAddress(part) => match part {
                AddressPart::Address1 => "homeAddress.address1",
                AddressPart::Address2 => "homeAddress.address2",
                AddressPart::City => "homeAddress.city",
                AddressPart::StateProvince => "homeAddress.stateProvince",
                AddressPart::ZipPostal => "homeAddress.zipPostal",
                AddressPart::Country => "homeAddress.country",
            },
            Self::WorkAddress(part) => match part {
                AddressPart::Address1 => "workAddress.address1",
                AddressPart::Address2 => "workAddress.address2",
                AddressPart::City => "workAddress.city",
                AddressPart::StateProvince => "workAddress.stateProvince",
                AddressPart::ZipPostal => "workAddress.zipPostal",
                AddressPart::Country => "workAddress.country",
            },
            Self::Webpage => "webpage",
            Self::Company => "company",
            Self::JobTitle => "jobTitle",
            Self::Categories => "categories",
            Self::Picture => "picture",
        }
    }
}

impl fmt::Display for NativeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
