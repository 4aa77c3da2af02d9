//! Caller-facing contact operations over a bounded native store.
//!
//! Ties the slot synchronizer and filter compiler to the external store and
//! photo ports, and reduces every store failure to
//! [`ContactError::Unknown`] at this boundary.

use std::sync::Arc;

use pimbridge_model::{Contact, ContactError, ContactId, ContactResult, FindOptions};
use pimbridge_store::{
    BoundedContactRecord, ContactStore, PhotoStore, ResultLimit, StoreError, StoreResult,
};
use tracing::{debug, info, warn};

use crate::config::ContactsConfig;
use crate::field_map::FieldSelection;
use crate::filter::build_filter;
use crate::sync::{read_contact, write_to_backing};

/// Outcome of a save.
///
/// The caller's contact may have been a partial view; `contact` is always
/// the full read-back of the persisted `record`.
#[derive(Debug, Clone, PartialEq)]
pub struct Saved {
    /// The backing record as persisted, with its identity assigned.
    pub record: BoundedContactRecord,
    /// Every mapped field of `record`.
    pub contact: Contact,
}

impl Saved {
    pub fn id(&self) -> Option<&ContactId> {
        self.record.uid.as_ref()
    }
}

/// Contact operations backed by a native store.
pub struct Contacts {
    store: Arc<dyn ContactStore>,
    photos: Arc<dyn PhotoStore>,
    config: ContactsConfig,
}

impl Contacts {
    pub fn new(
        store: Arc<dyn ContactStore>,
        photos: Arc<dyn PhotoStore>,
        config: ContactsConfig,
    ) -> Self {
        Self {
            store,
            photos,
            config,
        }
    }

    pub fn config(&self) -> &ContactsConfig {
        &self.config
    }

    /// Builds an unsaved contact from caller properties.
    pub fn create(&self, properties: serde_json::Value) -> ContactResult<Contact> {
        Contact::from_properties(properties)
            .map_err(|e| ContactError::InvalidArgument(format!("contact properties: {e}")))
    }

    /// Saves `contact`, creating a backing record or updating the one that
    /// carries its identity.
    ///
    /// Fields absent from `contact` leave the stored record untouched.
    pub fn save(&self, contact: &Contact) -> ContactResult<Saved> {
        self.try_save(contact).map_err(|e| {
            warn!("Error saving contact: {}", e);
            ContactError::Unknown(e.to_string())
        })
    }

    fn try_save(&self, contact: &Contact) -> StoreResult<Saved> {
        let existing = match contact.identity() {
            Some(id) => self.store.find_by_uid(id)?,
            None => None,
        };
        debug!(update = existing.is_some(), "Saving contact");

        let record = write_to_backing(existing, contact);
        let mut persisted = self.store.persist(record)?;

        if self.config.persist_photos {
            if let Some(uid) = persisted.uid.clone() {
                if self.attach_photo(&uid, contact) {
                    if let Some(reloaded) = self.store.find_by_uid(&uid)? {
                        persisted = reloaded;
                    }
                }
            }
        }

        let full = read_contact(&persisted, &FieldSelection::All);
        debug!(contact_id = ?persisted.uid, "Contact saved");
        Ok(Saved {
            record: persisted,
            contact: full,
        })
    }

    /// Forwards the first photo with a value. Failures are logged only.
    fn attach_photo(&self, uid: &ContactId, contact: &Contact) -> bool {
        let Some(photo) = contact
            .photos
            .iter()
            .flatten()
            .find(|p| p.non_empty_value().is_some())
        else {
            return false;
        };
        let value = photo.value.as_deref().unwrap_or_default();
        match self.photos.set_picture(uid, photo.kind.as_deref(), value) {
            Ok(()) => true,
            Err(e) => {
                warn!(contact_id = %uid, "Failed to store contact picture: {}", e);
                false
            }
        }
    }

    /// Removes the stored record for `contact`.
    ///
    /// A contact that was never saved, or whose record no longer exists, is
    /// reported as [`ContactError::Unknown`].
    pub fn remove(&self, contact: &Contact) -> ContactResult<Contact> {
        let Some(id) = contact.identity() else {
            return Err(ContactError::Unknown("contact has not been saved".into()));
        };

        let result = self.store.find_by_uid(id).and_then(|found| match found {
            Some(_) => {
                info!(contact_id = %id, "Removing contact");
                self.store.remove(id)
            }
            None => Err(StoreError::NotFound(id.to_string())),
        });

        result.map(|()| contact.clone()).map_err(|e| {
            warn!(contact_id = %id, "Error removing contact: {}", e);
            ContactError::Unknown(e.to_string())
        })
    }

    /// Reads one contact by identity with the requested fields.
    ///
    /// A missing record is reported as [`ContactError::Unknown`], not as a
    /// distinct "not found" condition.
    pub fn get(&self, id: &ContactId, fields: &FieldSelection) -> ContactResult<Contact> {
        match self.store.find_by_uid(id) {
            Ok(Some(record)) => Ok(read_contact(&record, fields)),
            Ok(None) => Err(ContactError::Unknown(format!("no contact with id {id}"))),
            Err(e) => {
                warn!(contact_id = %id, "Error reading contact: {}", e);
                Err(ContactError::Unknown(e.to_string()))
            }
        }
    }

    /// Finds contacts whose `fields` contain `options.filter`, ignoring case.
    ///
    /// `fields` must be non-empty; `["*"]` searches and returns every mapped
    /// field. Without `options.multiple` at most
    /// [`ContactsConfig::single_result_limit`] contacts are returned.
    pub fn find<S: AsRef<str>>(
        &self,
        fields: &[S],
        options: &FindOptions,
    ) -> ContactResult<Vec<Contact>> {
        if fields.is_empty() {
            return Err(ContactError::InvalidArgument(
                "at least one contact field is required".into(),
            ));
        }
        let selection = FieldSelection::from_paths(fields.iter().map(|f| f.as_ref()));
        let filter = build_filter(&selection.paths(), options.filter());
        let limit = if options.multiple {
            ResultLimit::Unbounded
        } else {
            ResultLimit::AtMost(self.config.single_result_limit)
        };

        let records = self.store.find(filter.as_ref(), None, limit).map_err(|e| {
            warn!("Error finding contacts: {}", e);
            ContactError::Unknown(e.to_string())
        })?;
        debug!(matches = records.len(), "Contact find complete");

        Ok(records
            .iter()
            .map(|record| read_contact(record, &selection))
            .collect())
    }
}
