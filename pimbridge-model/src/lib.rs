//! Open contact model for pimbridge.
//!
//! Defines the caller-facing, capacity-unbounded contact representation:
//! - [`Contact`]: the open record (identity, names, sequences of fields)
//! - [`ContactField`], [`ContactAddress`], [`ContactOrganization`], [`ContactName`]
//! - [`Birthday`]: a date or a free-form string awaiting parsing
//! - [`ContactId`]: identity assigned by the backing store on first save
//! - [`ContactError`]: the error surface reported back to callers
//! - [`FindOptions`]: search string and result cardinality for queries
//!
//! Every field of [`Contact`] is optional: `None` means "not specified",
//! which is distinct from `Some(vec![])` ("specified as empty"). The slot
//! synchronizer relies on that distinction to implement partial updates.

mod contact;
mod error;
mod ids;
mod lenient;
mod options;

pub use contact::{
    Birthday, Contact, ContactAddress, ContactField, ContactName, ContactOrganization,
};
pub use error::{ContactError, ContactErrorCode, ContactResult, ErrorPayload};
pub use ids::ContactId;
pub use options::FindOptions;
