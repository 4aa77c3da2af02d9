//! Bounded, slot-based contact storage for pimbridge.
//!
//! The native contact store exposes a fixed set of named slots per record
//! rather than open sequences. This crate describes that shape and the
//! contract of the store that owns it.
//!
//! # Architecture
//!
//! - [`BoundedContactRecord`] holds exactly one value per named slot
//! - [`NativeField`] is the closed catalogue of addressable slot identifiers
//! - [`FilterExpression`] is the predicate tree the store evaluates on find
//! - [`ContactStore`] and [`PhotoStore`] are the external collaborator ports
//! - [`MemoryContactStore`] is an in-process implementation of both ports

mod error;
mod field;
mod filter;
mod memory;
mod ports;
mod record;

pub use error::{StoreError, StoreResult};
pub use field::{AddressPart, NativeField};
pub use filter::{FilterExpression, MatchOperator, ResultLimit, SortOrder, SortSpec};
pub use memory::MemoryContactStore;
pub use ports::{ContactStore, PhotoStore};
pub use record::{
    AddressSlot, BoundedContactRecord, EMAIL_SLOTS, NativeAddress, PhoneSlot,
};
