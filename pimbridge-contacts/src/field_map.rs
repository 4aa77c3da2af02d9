//! Mapping from open-model field paths to backing record slots.
//!
//! The table is a compile-time constant: every recognised path is a
//! [`FieldPath`] variant, and each variant maps to an ordered list of
//! [`NativeField`]s. Paths outside the table map to nothing; callers skip
//! them silently.
//!
//! Example: a search on `name` becomes a search over the native `title`,
//! `firstName` and `lastName` slots, because the native record has no
//! single name field.

use pimbridge_store::NativeField::{HomeAddress, WorkAddress};
use pimbridge_store::{AddressPart, NativeField};

/// Path that selects every field in the table.
pub const WILDCARD: &str = "*";

const NAME: &[NativeField] = &[NativeField::Title, NativeField::FirstName, NativeField::LastName];

const PHONES: &[NativeField] = &[
    NativeField::FaxPhone,
    NativeField::HomePhone,
    NativeField::HomePhone2,
    NativeField::MobilePhone,
    NativeField::PagerPhone,
    NativeField::OtherPhone,
    NativeField::WorkPhone,
    NativeField::WorkPhone2,
];

const EMAILS: &[NativeField] = &[NativeField::Email1, NativeField::Email2, NativeField::Email3];

const ADDRESSES: &[NativeField] = &[
    HomeAddress(AddressPart::Address1),
    HomeAddress(AddressPart::Address2),
    HomeAddress(AddressPart::City),
    HomeAddress(AddressPart::StateProvince),
    HomeAddress(AddressPart::ZipPostal),
    HomeAddress(AddressPart::Country),
    WorkAddress(AddressPart::Address1),
    WorkAddress(AddressPart::Address2),
    WorkAddress(AddressPart::City),
    WorkAddress(AddressPart::StateProvince),
    WorkAddress(AddressPart::ZipPostal),
    WorkAddress(AddressPart::Country),
];

const STREET: &[NativeField] = &[
    HomeAddress(AddressPart::Address1),
    HomeAddress(AddressPart::Address2),
    WorkAddress(AddressPart::Address1),
    WorkAddress(AddressPart::Address2),
];

const LOCALITY: &[NativeField] = &[HomeAddress(AddressPart::City), WorkAddress(AddressPart::City)];

const REGION: &[NativeField] = &[
    HomeAddress(AddressPart::StateProvince),
    WorkAddress(AddressPart::StateProvince),
];

const POSTAL_CODE: &[NativeField] = &[
    HomeAddress(AddressPart::ZipPostal),
    WorkAddress(AddressPart::ZipPostal),
];

const COUNTRY: &[NativeField] = &[
    HomeAddress(AddressPart::Country),
    WorkAddress(AddressPart::Country),
];

const ORGANIZATIONS: &[NativeField] = &[NativeField::Company, NativeField::JobTitle];

/// A field path recognised by the mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Id,
    DisplayName,
    Name,
    NameFormatted,
    NameGivenName,
    NameFamilyName,
    NameHonorificPrefix,
    PhoneNumbers,
    PhoneNumbersValue,
    Emails,
    Addresses,
    AddressesFormatted,
    AddressesStreetAddress,
    AddressesLocality,
    AddressesRegion,
    AddressesPostalCode,
    AddressesCountry,
    Organizations,
    OrganizationsName,
    OrganizationsTitle,
    Birthday,
    Note,
    Categories,
    Urls,
    UrlsValue,
    Photos,
}

impl FieldPath {
    /// Every recognised path, in table order.
    pub const ALL: [FieldPath; 26] = [
        Self::Id,
        Self::DisplayName,
        Self::Name,
        Self::NameFormatted,
        Self::NameGivenName,
        Self::NameFamilyName,
        Self::NameHonorificPrefix,
        Self::PhoneNumbers,
        Self::PhoneNumbersValue,
        Self::Emails,
        Self::Addresses,
        Self::AddressesFormatted,
        Self::AddressesStreetAddress,
        Self::AddressesLocality,
        Self::AddressesRegion,
        Self::AddressesPostalCode,
        Self::AddressesCountry,
        Self::Organizations,
        Self::OrganizationsName,
        Self::OrganizationsTitle,
        Self::Birthday,
        Self::Note,
        Self::Categories,
        Self::Urls,
        Self::UrlsValue,
        Self::Photos,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::DisplayName => "displayName",
            Self::Name => "name",
            Self::NameFormatted => "name.formatted",
            Self::NameGivenName => "name.givenName",
            Self::NameFamilyName => "name.familyName",
            Self::NameHonorificPrefix => "name.honorificPrefix",
            Self::PhoneNumbers => "phoneNumbers",
            Self::PhoneNumbersValue => "phoneNumbers.value",
            Self::Emails => "emails",
            Self::Addresses => "addresses",
            Self::AddressesFormatted => "addresses.formatted",
            Self::AddressesStreetAddress => "addresses.streetAddress",
            Self::AddressesLocality => "addresses.locality",
            Self::AddressesRegion => "addresses.region",
            Self::AddressesPostalCode => "addresses.postalCode",
            Self::AddressesCountry => "addresses.country",
            Self::Organizations => "organizations",
            Self::OrganizationsName => "organizations.name",
            Self::OrganizationsTitle => "organizations.title",
            Self::Birthday => "birthday",
            Self::Note => "note",
            Self::Categories => "categories",
            Self::Urls => "urls",
            Self::UrlsValue => "urls.value",
            Self::Photos => "photos",
        }
    }

    /// Resolves a path string; `None` for anything outside the table.
    pub fn parse(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == path)
    }

    /// Backing slots this path maps to, in table order.
    pub const fn native_fields(self) -> &'static [NativeField] {
        match self {
            Self::Id => &[NativeField::Uid],
            Self::DisplayName => &[NativeField::DisplayName],
            Self::Name | Self::NameFormatted => NAME,
            Self::NameGivenName => &[NativeField::FirstName],
            Self::NameFamilyName => &[NativeField::LastName],
            Self::NameHonorificPrefix => &[NativeField::Title],
            Self::PhoneNumbers | Self::PhoneNumbersValue => PHONES,
            Self::Emails => EMAILS,
            Self::Addresses | Self::AddressesFormatted => ADDRESSES,
            Self::AddressesStreetAddress => STREET,
            Self::AddressesLocality => LOCALITY,
            Self::AddressesRegion => REGION,
            Self::AddressesPostalCode => POSTAL_CODE,
            Self::AddressesCountry => COUNTRY,
            Self::Organizations => ORGANIZATIONS,
            Self::OrganizationsName => &[NativeField::Company],
            Self::OrganizationsTitle => &[NativeField::JobTitle],
            Self::Birthday => &[NativeField::Birthday],
            Self::Note => &[NativeField::Note],
            Self::Categories => &[NativeField::Categories],
            Self::Urls | Self::UrlsValue => &[NativeField::Webpage],
            // Picture data is read back but never searched.
            Self::Photos => &[],
        }
    }
}

/// Backing slots for `path`; empty when the path is not in the table.
pub fn lookup(path: &str) -> &'static [NativeField] {
    match FieldPath::parse(path) {
        Some(known) => known.native_fields(),
        None => &[],
    }
}

/// Every path in the table, in table order. Used to expand [`WILDCARD`].
pub fn all_paths() -> impl Iterator<Item = &'static str> {
    FieldPath::ALL.into_iter().map(FieldPath::as_str)
}

/// The set of fields a caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSelection {
    /// Every path in the table.
    All,
    /// An explicit list, in caller order. May contain unmapped paths.
    Paths(Vec<String>),
}

impl FieldSelection {
    /// Builds a selection from caller paths. A list consisting of exactly
    /// [`WILDCARD`] selects everything.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let paths: Vec<String> = paths.into_iter().map(Into::into).collect();
        if paths.len() == 1 && paths[0] == WILDCARD {
            Self::All
        } else {
            Self::Paths(paths)
        }
    }

    /// The selected paths with the wildcard expanded.
    pub fn paths(&self) -> Vec<&str> {
        match self {
            Self::All => all_paths().collect(),
            Self::Paths(paths) => paths.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Paths(paths) if paths.is_empty())
    }
}
