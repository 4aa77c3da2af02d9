use chrono::NaiveDate;
use pimbridge_model::ContactId;
use serde::{Deserialize, Serialize};

use crate::{AddressPart, NativeField};

/// Number of email slots on a native record.
pub const EMAIL_SLOTS: usize = 3;

/// A contact as the native store keeps it: one value per named slot.
///
/// String slots hold either a value or the empty string (cleared). The
/// category list is the only unbounded field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoundedContactRecord {
    /// Assigned by the store on first persist.
    pub uid: Option<ContactId>,
    pub display_name: String,
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub note: String,
    pub birthday: Option<NaiveDate>,
    pub email1: String,
    pub email2: String,
    pub email3: String,
    pub home_phone: String,
    pub home_phone2: String,
    pub work_phone: String,
    pub work_phone2: String,
    pub mobile_phone: String,
    pub fax_phone: String,
    pub pager_phone: String,
    pub other_phone: String,
    pub home_address: Option<NativeAddress>,
    pub work_address: Option<NativeAddress>,
    pub webpage: String,
    pub company: String,
    pub job_title: String,
    pub categories: Vec<String>,
    /// Base64-encoded picture, written only through a [`crate::PhotoStore`].
    pub picture: String,
}

/// A native postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NativeAddress {
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state_province: String,
    pub zip_postal: String,
    pub country: String,
}

impl NativeAddress {
    pub fn part(&self, part: AddressPart) -> &str {
        match part {
            AddressPart::Address1 => &self.address1,
            AddressPart::Address2 => &self.address2,
            AddressPart::City => &self.city,
            AddressPart::StateProvince => &self.state_province,
            AddressPart::ZipPostal => &self.zip_postal,
            AddressPart::Country => &self.country,
        }
    }
}

/// Phone slots, in the order they are reported back to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneSlot {
    Home,
    Home2,
    Work,
    Work2,
    Mobile,
    Fax,
    Pager,
    Other,
}

impl PhoneSlot {
    pub const ALL: [PhoneSlot; 8] = [
        Self::Home,
        Self::Home2,
        Self::Work,
        Self::Work2,
        Self::Mobile,
        Self::Fax,
        Self::Pager,
        Self::Other,
    ];

    /// Type tag reported for a number held in this slot.
    pub const fn category(self) -> &'static str {
        match self {
            Self::Home | Self::Home2 => "home",
            Self::Work | Self::Work2 => "work",
            Self::Mobile => "mobile",
            Self::Fax => "fax",
            Self::Pager => "pager",
            Self::Other => "other",
        }
    }

    pub const fn field(self) -> NativeField {
        match self {
            Self::Home => NativeField::HomePhone,
            Self::Home2 => NativeField::HomePhone2,
            Self::Work => NativeField::WorkPhone,
            Self::Work2 => NativeField::WorkPhone2,
            Self::Mobile => NativeField::MobilePhone,
            Self::Fax => NativeField::FaxPhone,
            Self::Pager => NativeField::PagerPhone,
            Self::Other => NativeField::OtherPhone,
        }
    }
}

/// The two address slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressSlot {
    Home,
    Work,
}

impl AddressSlot {
    pub const ALL: [AddressSlot; 2] = [Self::Home, Self::Work];

    pub const fn category(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
        }
    }
}

impl BoundedContactRecord {
    /// Creates an empty, never-persisted record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phone(&self, slot: PhoneSlot) -> &str {
        match slot {
            PhoneSlot::Home => &self.home_phone,
            PhoneSlot::Home2 => &self.home_phone2,
            PhoneSlot::Work => &self.work_phone,
            PhoneSlot::Work2 => &self.work_phone2,
            PhoneSlot::Mobile => &self.mobile_phone,
            PhoneSlot::Fax => &self.fax_phone,
            PhoneSlot::Pager => &self.pager_phone,
            PhoneSlot::Other => &self.other_phone,
        }
    }

    pub fn phone_mut(&mut self, slot: PhoneSlot) -> &mut String {
        match slot {
            PhoneSlot::Home => &mut self.home_phone,
            PhoneSlot::Home2 => &mut self.home_phone2,
            PhoneSlot::Work => &mut self.work_phone,
            PhoneSlot::Work2 => &mut self.work_phone2,
            PhoneSlot::Mobile => &mut self.mobile_phone,
            PhoneSlot::Fax => &mut self.fax_phone,
            PhoneSlot::Pager => &mut self.pager_phone,
            PhoneSlot::Other => &mut self.other_phone,
        }
    }

    /// Email slots in fill order.
    pub fn emails(&self) -> [&str; EMAIL_SLOTS] {
        [&self.email1, &self.email2, &self.email3]
    }

    pub fn emails_mut(&mut self) -> [&mut String; EMAIL_SLOTS] {
        [&mut self.email1, &mut self.email2, &mut self.email3]
    }

    pub fn address(&self, slot: AddressSlot) -> Option<&NativeAddress> {
        match slot {
            AddressSlot::Home => self.home_address.as_ref(),
            AddressSlot::Work => self.work_address.as_ref(),
        }
    }

    pub fn address_mut(&mut self, slot: AddressSlot) -> &mut Option<NativeAddress> {
        match slot {
            AddressSlot::Home => &mut self.home_address,
            AddressSlot::Work => &mut self.work_address,
        }
    }

    /// Values a filter on `field` is matched against.
    ///
    /// Single-valued slots yield one entry (possibly empty), unset optional
    /// slots yield none, and categories yield one entry per label.
    pub fn field_values(&self, field: NativeField) -> Vec<String> {
        let single = |s: &str| vec![s.to_string()];
        match field {
            NativeField::Uid => self
                .uid
                .as_ref()
                .map(|id| vec![id.to_string()])
                .unwrap_or_default(),
            NativeField::DisplayName => single(&self.display_name),
            NativeField::Title => single(&self.title),
            NativeField::FirstName => single(&self.first_name),
            NativeField::LastName => single(&self.last_name),
            NativeField::Note => single(&self.note),
            NativeField::Birthday => self
                .birthday
                .map(|d| vec![d.format("%Y-%m-%d").to_string()])
                .unwrap_or_default(),
            NativeField::Email1 => single(&self.email1),
            NativeField::Email2 => single(&self.email2),
            NativeField::Email3 => single(&self.email3),
            NativeField::HomePhone => single(&self.home_phone),
            NativeField::HomePhone2 => single(&self.home_phone2),
            NativeField::WorkPhone => single(&self.work_phone),
            NativeField::WorkPhone2 => single(&self.work_phone2),
            NativeField::MobilePhone => single(&self.mobile_phone),
            NativeField::FaxPhone => single(&self.fax_phone),
            NativeField::PagerPhone => single(&self.pager_phone),
            NativeField::OtherPhone => single(&self.other_phone),
            NativeField::HomeAddress(part) => self
                .home_address
                .as_ref()
                .map(|a| single(a.part(part)))
                .unwrap_or_default(),
            NativeField::WorkAddress(part) => self
                .work_address
                .as_ref()
                .map(|a| single(a.part(part)))
                .unwrap_or_default(),
            NativeField::Webpage => single(&self.webpage),
            NativeField::Company => single(&self.company),
            NativeField::JobTitle => single(&self.job_title),
            NativeField::Categories => self.categories.clone(),
            NativeField::Picture => single(&self.picture),
        }
    }
}
