use chrono::{DateTime, NaiveDate, NaiveDateTime};
use pimbridge_model::{
    Birthday, Contact, ContactAddress, ContactField, ContactName, ContactOrganization,
};
use pimbridge_store::{AddressSlot, BoundedContactRecord, NativeAddress, PhoneSlot};
use tracing::{debug, warn};

/// Phone type tags with dedicated backing slots. Anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneTag {
    Home,
    Work,
    Mobile,
    Fax,
    Pager,
    Other,
}

impl PhoneTag {
    /// Classifies a caller type tag. Matching is exact and case-sensitive.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("home") => Self::Home,
            Some("work") => Self::Work,
            Some("mobile") => Self::Mobile,
            Some("fax") => Self::Fax,
            Some("pager") => Self::Pager,
            _ => Self::Other,
        }
    }

    /// Slots a number with this tag may occupy, in fill order.
    pub const fn slots(self) -> &'static [PhoneSlot] {
        match self {
            Self::Home => &[PhoneSlot::Home, PhoneSlot::Home2],
            Self::Work => &[PhoneSlot::Work, PhoneSlot::Work2],
            Self::Mobile => &[PhoneSlot::Mobile],
            Self::Fax => &[PhoneSlot::Fax],
            Self::Pager => &[PhoneSlot::Pager],
            Self::Other => &[PhoneSlot::Other],
        }
    }
}

/// Applies `contact` to a backing record.
///
/// With `existing` set this is an update: only fields present on `contact`
/// touch the record, and a present sequence replaces the slots it maps to.
/// Without it a fresh record is created. Photos are not handled here; they
/// go through the photo store once the record has an identity.
pub fn write_to_backing(
    existing: Option<BoundedContactRecord>,
    contact: &Contact,
) -> BoundedContactRecord {
    let update = existing.is_some();
    let mut record = existing.unwrap_or_default();

    if let Some(name) = &contact.name {
        write_name(&mut record, name);
    }
    if let Some(display_name) = &contact.display_name {
        record.display_name = display_name.clone();
    }
    if let Some(note) = &contact.note {
        record.note = note.clone();
    }
    if let Some(birthday) = &contact.birthday {
        write_birthday(&mut record, birthday);
    }
    if let Some(emails) = &contact.emails {
        write_emails(&mut record, emails, update);
    }
    if let Some(phones) = &contact.phone_numbers {
        write_phones(&mut record, phones, update);
    }
    if let Some(addresses) = &contact.addresses {
        write_addresses(&mut record, addresses, update);
    }
    if let Some(urls) = &contact.urls {
        write_urls(&mut record, urls, update);
    }
    if let Some(organizations) = &contact.organizations {
        write_organizations(&mut record, organizations, update);
    }
    if let Some(categories) = contact.categories.as_ref().filter(|c| !c.is_empty()) {
        record.categories = categories.clone();
    }

    record
}

fn write_name(record: &mut BoundedContactRecord, name: &ContactName) {
    // Middle name and suffix have no slot.
    if let Some(given) = name.given_name.as_deref().filter(|s| !s.is_empty()) {
        record.first_name = given.to_string();
    }
    if let Some(family) = name.family_name.as_deref().filter(|s| !s.is_empty()) {
        record.last_name = family.to_string();
    }
    if let Some(prefix) = name.honorific_prefix.as_deref().filter(|s| !s.is_empty()) {
        record.title = prefix.to_string();
    }
}

fn write_birthday(record: &mut BoundedContactRecord, birthday: &Birthday) {
    match birthday {
        Birthday::Date(date) => record.birthday = Some(*date),
        Birthday::Text(text) if text.is_empty() => record.birthday = None,
        Birthday::Text(text) => match parse_birthday(text) {
            Some(date) => record.birthday = Some(date),
            None => warn!(birthday = %text, "Unparseable birthday, slot left unchanged"),
        },
    }
}

/// Parses the date formats callers commonly send for birthdays.
pub fn parse_birthday(text: &str) -> Option<NaiveDate> {
    const DATE_FORMATS: &[&str] = &[
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%B %d, %Y",
        "%b %d, %Y",
        "%d %B %Y",
        "%a %b %d %Y",
    ];
    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ];

    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.date_naive());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
}

fn write_emails(record: &mut BoundedContactRecord, emails: &[ContactField], update: bool) {
    let mut slots = record.emails_mut();
    if update {
        for slot in slots.iter_mut() {
            slot.clear();
        }
    }

    let mut dropped = 0usize;
    for value in emails.iter().filter_map(ContactField::non_empty_value) {
        match slots.iter_mut().find(|slot| slot.is_empty()) {
            Some(slot) => **slot = value.to_string(),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!(dropped, "Email slots full, extra addresses dropped");
    }
}

fn write_phones(record: &mut BoundedContactRecord, phones: &[ContactField], update: bool) {
    if update {
        for slot in PhoneSlot::ALL {
            record.phone_mut(slot).clear();
        }
    }

    let mut dropped = 0usize;
    for phone in phones {
        let Some(number) = phone.non_empty_value() else {
            continue;
        };
        let tag = PhoneTag::from_tag(phone.kind.as_deref());
        match tag.slots().iter().find(|&&slot| record.phone(slot).is_empty()) {
            Some(&slot) => *record.phone_mut(slot) = number.to_string(),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!(dropped, "Phone slots full, extra numbers dropped");
    }
}

fn write_addresses(record: &mut BoundedContactRecord, addresses: &[ContactAddress], update: bool) {
    if update {
        for slot in AddressSlot::ALL {
            *record.address_mut(slot) = None;
        }
    }

    let mut home_taken = false;
    let mut work_taken = false;
    for address in addresses {
        let tag = address.kind.as_deref().filter(|t| !t.is_empty());
        if !home_taken && matches!(tag, None | Some("home")) {
            record.home_address = Some(native_address(address));
            home_taken = true;
        } else if !work_taken && matches!(tag, None | Some("work")) {
            record.work_address = Some(native_address(address));
            work_taken = true;
        } else {
            debug!(kind = ?tag, "No address slot for entry, dropped");
        }
    }
}

fn native_address(address: &ContactAddress) -> NativeAddress {
    let part = |value: &Option<String>| value.clone().unwrap_or_default();
    NativeAddress {
        address1: part(&address.street_address),
        address2: String::new(),
        city: part(&address.locality),
        state_province: part(&address.region),
        zip_postal: part(&address.postal_code),
        country: part(&address.country),
    }
}

fn write_urls(record: &mut BoundedContactRecord, urls: &[ContactField], update: bool) {
    if update {
        record.webpage.clear();
    }
    if record.webpage.is_empty() {
        if let Some(url) = urls.iter().find_map(ContactField::non_empty_value) {
            record.webpage = url.to_string();
        }
    }
}

fn write_organizations(
    record: &mut BoundedContactRecord,
    organizations: &[ContactOrganization],
    update: bool,
) {
    if update {
        record.company.clear();
        record.job_title.clear();
    }
    if let Some(org) = organizations.first() {
        record.company = org.name.clone().unwrap_or_default();
        record.job_title = org.title.clone().unwrap_or_default();
    }
}
