use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ContactId;
use crate::lenient;

/// A contact in the open model.
///
/// Sequences are unbounded and keep caller insertion order. A `None` field
/// was not specified by the caller; `Some` with an empty value was.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub id: Option<ContactId>,
    pub display_name: Option<String>,
    pub name: Option<ContactName>,
    pub nickname: Option<String>,
    #[serde(deserialize_with = "lenient::sequence")]
    pub phone_numbers: Option<Vec<ContactField>>,
    #[serde(deserialize_with = "lenient::sequence")]
    pub emails: Option<Vec<ContactField>>,
    #[serde(deserialize_with = "lenient::sequence")]
    pub addresses: Option<Vec<ContactAddress>>,
    #[serde(deserialize_with = "lenient::sequence")]
    pub ims: Option<Vec<ContactField>>,
    #[serde(deserialize_with = "lenient::sequence")]
    pub organizations: Option<Vec<ContactOrganization>>,
    pub birthday: Option<Birthday>,
    pub note: Option<String>,
    #[serde(deserialize_with = "lenient::sequence")]
    pub photos: Option<Vec<ContactField>>,
    /// Category labels. Non-string entries are discarded on decode.
    #[serde(deserialize_with = "lenient::sequence")]
    pub categories: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::sequence")]
    pub urls: Option<Vec<ContactField>>,
}

impl Contact {
    /// Creates an empty, unsaved contact.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a contact carrying only identity and display name.
    #[must_use]
    pub fn with_identity(id: Option<ContactId>, display_name: Option<String>) -> Self {
        Self {
            id,
            display_name,
            ..Self::default()
        }
    }

    /// Builds an unsaved contact from a caller-supplied property object.
    ///
    /// Unknown keys are ignored. Sequence entries that do not decode are
    /// dropped; the call only fails when `properties` is not an object or a
    /// scalar field carries the wrong JSON type.
    pub fn from_properties(properties: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(properties)
    }

    /// Deep copy with the identity cleared, so saving it creates a new record.
    #[must_use]
    pub fn cloned_without_id(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }

    /// Returns the identity if one has been assigned and is non-empty.
    #[must_use]
    pub fn identity(&self) -> Option<&ContactId> {
        self.id.as_ref().filter(|id| !id.is_empty())
    }
}

/// Structured contact name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactName {
    /// Full name formatted for display.
    pub formatted: Option<String>,
    pub family_name: Option<String>,
    pub given_name: Option<String>,
    pub middle_name: Option<String>,
    /// Honorific prefix or title, e.g. "Dr.".
    pub honorific_prefix: Option<String>,
    pub honorific_suffix: Option<String>,
}

/// A typed value: phone number, email, IM handle, URL or photo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactField {
    /// Open type tag such as "home", "work", "mobile" or "base64".
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub value: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub pref: bool,
}

impl ContactField {
    /// Creates a non-preferred field.
    #[must_use]
    pub fn new(kind: Option<&str>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.map(str::to_string),
            value: Some(value.into()),
            pref: false,
        }
    }

    /// Creates a field with the given type tag.
    #[must_use]
    pub fn typed(kind: &str, value: impl Into<String>) -> Self {
        Self::new(Some(kind), value)
    }

    /// Creates a field without a type tag.
    #[must_use]
    pub fn untyped(value: impl Into<String>) -> Self {
        Self::new(None, value)
    }

    /// The value, if present and non-empty.
    #[must_use]
    pub fn non_empty_value(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty())
    }
}

/// Physical address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactAddress {
    #[serde(deserialize_with = "lenient::flag")]
    pub pref: bool,
    /// "home", "work" or absent.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub formatted: Option<String>,
    pub street_address: Option<String>,
    /// City or locality.
    pub locality: Option<String>,
    /// State, province or region.
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Organization membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactOrganization {
    #[serde(deserialize_with = "lenient::flag")]
    pub pref: bool,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    /// Job title.
    pub title: Option<String>,
}

/// A birthday as supplied by the caller.
///
/// Strings that decode as ISO dates become [`Birthday::Date`]; anything else
/// is kept verbatim and parsed when written to the backing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Birthday {
    Date(NaiveDate),
    Text(String),
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<&str> for Birthday {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
