//! Generic in-memory resource store with soft delete support.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use domain::{Clock, DomainError, DomainResult, Patch, Record, RecordId};

/// Ordered, process-lifetime collection of records.
///
/// Query methods named `*_visible*` exclude soft-deleted records,
/// `*_any*` variants include them. Records are never removed.
///
/// One reader/writer lock guards the whole collection: every compound
/// write (`create_with`, `modify_any_by`) runs in a single write scope, so
/// concurrent creates never observe the same maximum identifier and a
/// find-then-mutate sequence cannot interleave with another writer.
pub struct ResourceStore<T> {
    records: RwLock<Vec<T>>,
    clock: Arc<dyn Clock>,
}

impl<T: Record> ResourceStore<T> {
    /// Create an empty store
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Create a store pre-populated with `records`, keeping their order.
    ///
    /// Fails with `Conflict` when two records share an identifier.
    pub fn with_records(records: Vec<T>, clock: Arc<dyn Clock>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(DomainError::conflict(format!("Record {}", record.id())));
            }
        }

        Ok(Self {
            records: RwLock::new(records),
            clock,
        })
    }

    /// Identifier strictly greater than every identifier present,
    /// soft-deleted records included, or `1` for an empty store.
    pub async fn next_identifier(&self) -> DomainResult<RecordId> {
        let records = self.records.read().await;
        next_identifier_in(&records)
    }

    /// Number of records, soft-deleted ones included
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records at all
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Number of visible records
    pub async fn count_visible(&self) -> usize {
        self.records
            .read()
            .await
            .iter()
            .filter(|record| record.is_visible())
            .count()
    }

    /// Visible records matching `predicate`, in insertion order
    pub async fn list_visible<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records
            .read()
            .await
            .iter()
            .filter(|record| record.is_visible() && predicate(*record))
            .cloned()
            .collect()
    }

    /// First visible record matching `predicate`
    pub async fn find_visible_by<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.is_visible() && predicate(*record))
            .cloned()
    }

    /// First record matching `predicate`, soft-deleted or not
    pub async fn find_any_by<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records
            .read()
            .await
            .iter()
            .find(|record| predicate(*record))
            .cloned()
    }

    /// Append `record` and return the stored value.
    ///
    /// Fails with `Conflict` if the identifier is already taken.
    pub async fn insert(&self, record: T) -> DomainResult<T> {
        let mut records = self.records.write().await;
        if records.iter().any(|existing| existing.id() == record.id()) {
            return Err(DomainError::conflict(format!("Record {}", record.id())));
        }

        records.push(record.clone());
        Ok(record)
    }

    /// Build and append a record with the next identifier, atomically.
    ///
    /// `build` receives the assigned identifier and the creation time.
    pub async fn create_with<F>(&self, build: F) -> DomainResult<T>
    where
        F: FnOnce(RecordId, DateTime<Utc>) -> T,
    {
        let mut records = self.records.write().await;
        let id = next_identifier_in(&records)?;
        let record = build(id, self.clock.now());
        if record.id() != id {
            return Err(DomainError::internal(format!(
                "record built with id {} instead of assigned id {}",
                record.id(),
                id
            )));
        }

        records.push(record.clone());
        Ok(record)
    }

    /// Find the first record matching `predicate`, soft-deleted or not, and
    /// mutate it in place within one write scope.
    ///
    /// `mutate` receives the record and the mutation time. Returns the
    /// record as stored after the mutation, or `None` when nothing matched.
    pub async fn modify_any_by<P, F>(&self, predicate: P, mutate: F) -> Option<T>
    where
        P: Fn(&T) -> bool,
        F: FnOnce(&mut T, DateTime<Utc>),
    {
        let mut records = self.records.write().await;
        let record = records.iter_mut().find(|record| predicate(&**record))?;
        mutate(record, self.clock.now());
        Some(record.clone())
    }
}

fn next_identifier_in<T: Record>(records: &[T]) -> DomainResult<RecordId> {
    match records.iter().map(Record::id).max() {
        None => Ok(RecordId::FIRST),
        Some(max) => max
            .successor()
            .ok_or_else(|| DomainError::internal("identifier space exhausted")),
    }
}

/// Merge `patch` into `record` and refresh `updatedAt`.
///
/// Immutable fields cannot appear in a patch type, so `id` and `creationAt`
/// are left alone by construction.
pub fn apply_partial_update<T, P>(record: &mut T, patch: P, now: DateTime<Utc>)
where
    T: Record,
    P: Patch<T>,
{
    patch.merge_into(record);
    record.touch(now);
}

/// Flip the soft-delete flag and refresh `updatedAt`.
///
/// Calling it on an already deleted record is allowed and only refreshes
/// the timestamp.
pub fn mark_deleted<T: Record>(record: &mut T, now: DateTime<Utc>) {
    record.flag_deleted();
    record.touch(now);
}
