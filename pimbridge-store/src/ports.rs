use pimbridge_model::ContactId;

use crate::{
    BoundedContactRecord, FilterExpression, NativeField, ResultLimit, SortSpec, StoreResult,
};

/// The native contact database.
///
/// Implementations own every [`BoundedContactRecord`]; callers only borrow
/// copies for the duration of a conversion.
pub trait ContactStore: Send + Sync {
    /// Returns records matching `filter` (all records when `None`), ordered
    /// by `sort` when given, up to `limit`.
    fn find(
        &self,
        filter: Option<&FilterExpression>,
        sort: Option<&SortSpec>,
        limit: ResultLimit,
    ) -> StoreResult<Vec<BoundedContactRecord>>;

    /// Writes `record`, assigning an identity if it has none, and returns the
    /// stored copy.
    fn persist(&self, record: BoundedContactRecord) -> StoreResult<BoundedContactRecord>;

    /// Deletes the record with identity `uid`.
    fn remove(&self, uid: &ContactId) -> StoreResult<()>;

    /// Looks up a record by identity.
    ///
    /// The default implementation issues an equality find on the identity
    /// slot; stores with direct key access should override it.
    fn find_by_uid(&self, uid: &ContactId) -> StoreResult<Option<BoundedContactRecord>> {
        if uid.is_empty() {
            return Ok(None);
        }
        let filter = FilterExpression::equals(NativeField::Uid, uid.as_str());
        Ok(self
            .find(Some(&filter), None, ResultLimit::AtMost(1))?
            .into_iter()
            .next())
    }
}

/// Binary picture storage attached to native records.
pub trait PhotoStore: Send + Sync {
    /// Attaches a picture to the record `uid`. `encoding` is the caller's
    /// type tag for the photo (e.g. `"base64"`, `"url"`).
    fn set_picture(&self, uid: &ContactId, encoding: Option<&str>, value: &str)
    -> StoreResult<()>;
}
