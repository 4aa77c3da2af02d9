//! Contact adapter between the open contact model and a bounded native store.
//!
//! Three cooperating parts, leaves first:
//! - [`field_map`]: static table from open field paths to backing slots
//! - [`sync`]: writes open contacts into bounded records and reads them back
//! - [`filter`]: compiles a field search into a native filter expression
//!
//! [`Contacts`] combines them with the store ports into the operations
//! callers use: create, save, remove, get, and find.
//!
//! # Partial updates
//!
//! Callers usually hold contacts produced by a find restricted to a few
//! fields. Saving such a contact must not erase the fields that were not
//! requested, so only fields present on the incoming contact are written.
//! A save always returns the complete read-back of the stored record.

pub mod config;
mod error;
pub mod field_map;
pub mod filter;
mod service;
pub mod sync;

pub use config::ContactsConfig;
pub use error::ConfigError;
pub use field_map::{FieldPath, FieldSelection, WILDCARD};
pub use filter::{build_filter, case_insensitive_pattern};
pub use service::{Contacts, Saved};
pub use sync::{read_contact, read_from_backing, write_to_backing};
