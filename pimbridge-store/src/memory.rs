//! In-process contact store.
//!
//! Keeps records in identity order and evaluates filter expressions with
//! whole-value regular expression matching, mirroring the native store's
//! case-sensitive semantics.

use pimbridge_model::ContactId;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::{
    BoundedContactRecord, ContactStore, FilterExpression, MatchOperator, NativeField,
    PhotoStore, ResultLimit, SortOrder, SortSpec, StoreError, StoreResult,
};

/// Contact store backed by an in-memory map.
#[derive(Debug, Default)]
pub struct MemoryContactStore {
    records: Mutex<BTreeMap<ContactId, BoundedContactRecord>>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, BTreeMap<ContactId, BoundedContactRecord>>> {
        self.records.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl ContactStore for MemoryContactStore {
    fn find(
        &self,
        filter: Option<&FilterExpression>,
        sort: Option<&SortSpec>,
        limit: ResultLimit,
    ) -> StoreResult<Vec<BoundedContactRecord>> {
        let compiled = filter.map(CompiledFilter::compile).transpose()?;
        let records = self.lock()?;

        let mut matches: Vec<BoundedContactRecord> = records
            .values()
            .filter(|record| compiled.as_ref().is_none_or(|f| f.matches(record)))
            .cloned()
            .collect();

        if let Some(order_by) = sort {
            matches.sort_by_cached_key(|record| {
                record.field_values(order_by.field).into_iter().next().unwrap_or_default()
            });
            if order_by.order == SortOrder::Descending {
                matches.reverse();
            }
        }

        if let ResultLimit::AtMost(n) = limit {
            matches.truncate(n);
        }
        debug!("find matched {} record(s)", matches.len());
        Ok(matches)
    }

    fn persist(&self, mut record: BoundedContactRecord) -> StoreResult<BoundedContactRecord> {
        let uid = match record.uid.as_ref().filter(|id| !id.is_empty()) {
            Some(id) => id.clone(),
            None => {
                let id = ContactId::generate();
                record.uid = Some(id.clone());
                id
            }
        };
        let mut records = self.lock()?;
        records.insert(uid, record.clone());
        Ok(record)
    }

    fn remove(&self, uid: &ContactId) -> StoreResult<()> {
        self.lock()?
            .remove(uid)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(uid.to_string()))
    }

    fn find_by_uid(&self, uid: &ContactId) -> StoreResult<Option<BoundedContactRecord>> {
        Ok(self.lock()?.get(uid).cloned())
    }
}

impl PhotoStore for MemoryContactStore {
    fn set_picture(
        &self,
        uid: &ContactId,
        encoding: Option<&str>,
        value: &str,
    ) -> StoreResult<()> {
        match encoding {
            None => {}
            Some(kind) if kind.eq_ignore_ascii_case("base64") => {}
            Some(kind) => {
                return Err(StoreError::Photo(format!(
                    "unsupported picture encoding: {kind}"
                )));
            }
        }
        if value.is_empty() {
            return Err(StoreError::Photo("empty picture".into()));
        }

        let mut records = self.lock()?;
        let record = records
            .get_mut(uid)
            .ok_or_else(|| StoreError::NotFound(uid.to_string()))?;
        record.picture = value.to_string();
        Ok(())
    }
}

/// A filter expression with its patterns compiled.
enum CompiledFilter {
    Equal(NativeField, String),
    Regex(NativeField, Regex),
    Or(Box<CompiledFilter>, Box<CompiledFilter>),
}

impl CompiledFilter {
    fn compile(expr: &FilterExpression) -> StoreResult<Self> {
        Ok(match expr {
            FilterExpression::Field {
                field,
                operator: MatchOperator::Equal,
                value,
            } => Self::Equal(*field, value.clone()),
            FilterExpression::Field {
                field,
                operator: MatchOperator::Regex,
                value,
            } => {
                let anchored = format!("^(?s:{value})$");
                let regex = Regex::new(&anchored)
                    .map_err(|e| StoreError::InvalidFilter(format!("{field}: {e}")))?;
                Self::Regex(*field, regex)
            }
            FilterExpression::Or(left, right) => Self::Or(
                Box::new(Self::compile(left)?),
                Box::new(Self::compile(right)?),
            ),
        })
    }

    fn matches(&self, record: &BoundedContactRecord) -> bool {
        match self {
            Self::Equal(field, value) => record.field_values(*field).iter().any(|v| v == value),
            Self::Regex(field, regex) => record
                .field_values(*field)
                .iter()
                .any(|v| regex.is_match(v)),
            Self::Or(left, right) => left.matches(record) || right.matches(record),
        }
    }
}
