use pimbridge_model::{
    Birthday, Contact, ContactAddress, ContactField, ContactName, ContactOrganization,
};
use pimbridge_store::{AddressSlot, BoundedContactRecord, NativeAddress, PhoneSlot};

use crate::field_map::FieldSelection;

/// Part of a contact populated as a unit when any path under it is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldGroup {
    Name,
    PhoneNumbers,
    Emails,
    Addresses,
    Birthday,
    Note,
    Organizations,
    Categories,
    Urls,
    Photos,
}

impl FieldGroup {
    const PREFIXES: [(&'static str, FieldGroup); 10] = [
        ("name", Self::Name),
        ("phoneNumbers", Self::PhoneNumbers),
        ("emails", Self::Emails),
        ("addresses", Self::Addresses),
        ("birthday", Self::Birthday),
        ("note", Self::Note),
        ("organizations", Self::Organizations),
        ("categories", Self::Categories),
        ("urls", Self::Urls),
        ("photos", Self::Photos),
    ];

    /// Group a requested path belongs to, matched by bare prefix: `notebook`
    /// selects the note group. Callers rely on this loose match.
    fn for_path(path: &str) -> Option<Self> {
        Self::PREFIXES
            .into_iter()
            .find(|(prefix, _)| path.starts_with(prefix))
            .map(|(_, group)| group)
    }
}

/// Projects `record` onto an open contact. Returns `None` only when there
/// is no record to read.
pub fn read_from_backing(
    record: Option<&BoundedContactRecord>,
    fields: &FieldSelection,
) -> Option<Contact> {
    record.map(|r| read_contact(r, fields))
}

/// Projects `record` onto an open contact carrying the requested fields.
///
/// Identity and display name are always copied. Every other field is
/// populated only when a requested path falls under its group; the rest
/// stay `None`.
pub fn read_contact(record: &BoundedContactRecord, fields: &FieldSelection) -> Contact {
    let mut contact = Contact::with_identity(record.uid.clone(), non_empty(&record.display_name));

    let mut groups: Vec<FieldGroup> = Vec::new();
    for group in fields.paths().into_iter().filter_map(FieldGroup::for_path) {
        if !groups.contains(&group) {
            groups.push(group);
        }
    }

    for group in groups {
        match group {
            FieldGroup::Name => contact.name = Some(read_name(record)),
            FieldGroup::PhoneNumbers => contact.phone_numbers = read_phones(record),
            FieldGroup::Emails => {
                contact.emails = some_if_any(
                    record
                        .emails()
                        .into_iter()
                        .filter(|e| !e.is_empty())
                        .map(ContactField::untyped)
                        .collect(),
                );
            }
            FieldGroup::Addresses => {
                contact.addresses = some_if_any(
                    AddressSlot::ALL
                        .into_iter()
                        .filter_map(|slot| {
                            record.address(slot).map(|a| contact_address(slot, a))
                        })
                        .collect(),
                );
            }
            FieldGroup::Birthday => contact.birthday = record.birthday.map(Birthday::Date),
            FieldGroup::Note => contact.note = non_empty(&record.note),
            FieldGroup::Organizations => contact.organizations = read_organizations(record),
            FieldGroup::Categories => {
                contact.categories =
                    Some(record.categories.clone()).filter(|c| !c.is_empty());
            }
            FieldGroup::Urls => {
                contact.urls = non_empty(&record.webpage).map(|url| vec![ContactField::untyped(url)]);
            }
            FieldGroup::Photos => {
                contact.photos = non_empty(&record.picture)
                    .map(|picture| vec![ContactField::typed("base64", picture)]);
            }
        }
    }

    contact
}

fn read_name(record: &BoundedContactRecord) -> ContactName {
    // Empty components still contribute their separating space.
    let formatted = format!("{} {} {}", record.title, record.first_name, record.last_name);
    ContactName {
        formatted: Some(formatted),
        family_name: non_empty(&record.last_name),
        given_name: non_empty(&record.first_name),
        middle_name: None,
        honorific_prefix: non_empty(&record.title),
        honorific_suffix: None,
    }
}

fn read_phones(record: &BoundedContactRecord) -> Option<Vec<ContactField>> {
    some_if_any(
        PhoneSlot::ALL
            .into_iter()
            .filter(|&slot| !record.phone(slot).is_empty())
            .map(|slot| ContactField::typed(slot.category(), record.phone(slot)))
            .collect(),
    )
}

fn contact_address(slot: AddressSlot, address: &NativeAddress) -> ContactAddress {
    let street = format!("{}, {}", address.address1, address.address2);
    let formatted = format!(
        "{}, {}, {}, {}, {}",
        street, address.city, address.state_province, address.zip_postal, address.country
    );
    ContactAddress {
        pref: false,
        kind: Some(slot.category().to_string()),
        formatted: Some(formatted),
        street_address: Some(street),
        locality: non_empty(&address.city),
        region: non_empty(&address.state_province),
        postal_code: non_empty(&address.zip_postal),
        country: non_empty(&address.country),
    }
}

fn read_organizations(record: &BoundedContactRecord) -> Option<Vec<ContactOrganization>> {
    if record.company.is_empty() && record.job_title.is_empty() {
        return None;
    }
    Some(vec![ContactOrganization {
        name: non_empty(&record.company),
        title: non_empty(&record.job_title),
        ..ContactOrganization::default()
    }])
}

fn non_empty(value: &str) -> Option<String> {
    Some(value).filter(|v| !v.is_empty()).map(str::to_string)
}

fn some_if_any<T>(items: Vec<T>) -> Option<Vec<T>> {
    Some(items).filter(|items| !items.is_empty())
}
