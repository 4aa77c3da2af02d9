//! Conversion between open contacts and bounded backing records.
//!
//! - [`write_to_backing`] applies the fields present on a [`Contact`] to a
//!   backing record, assigning unbounded sequences to bounded slots.
//! - [`read_from_backing`] projects a backing record onto a [`Contact`],
//!   populating only the requested field groups.
//!
//! Neither direction fails. Data that does not fit the backing record
//! (overflowing entries, fields without a slot) is dropped.
//!
//! [`Contact`]: pimbridge_model::Contact

mod read;
mod write;

pub use read::{read_contact, read_from_backing};
pub use write::{PhoneTag, parse_birthday, write_to_backing};
