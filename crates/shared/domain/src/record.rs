//! Record identity and the capabilities every stored resource shares.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::FIRST_RECORD_ID;
use crate::error::DomainError;

/// Identifier of a record within one collection.
///
/// Serialized as a plain JSON number. Text from the outside world (path
/// parameters, query strings) is parsed into this type before any lookup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RecordId(u64);

impl RecordId {
    /// Identifier of the first record in an empty collection
    pub const FIRST: RecordId = RecordId(FIRST_RECORD_ID);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// The identifier right after this one, `None` once the id space is spent.
    pub fn successor(self) -> Option<RecordId> {
        self.0.checked_add(1).map(RecordId)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(RecordId)
            .map_err(|_| DomainError::validation(format!("'{}' is not a valid identifier", s)))
    }
}

/// Capabilities the resource store relies on.
///
/// Implementors own an immutable identifier, a soft-delete flag and an
/// `updatedAt` timestamp. The store never removes records; it only flips the
/// flag and refreshes the timestamp.
pub trait Record: Clone + Send + Sync + 'static {
    /// Identifier assigned at creation
    fn id(&self) -> RecordId;

    /// Whether the record has been soft deleted
    fn is_deleted(&self) -> bool;

    /// Set `updatedAt`
    fn touch(&mut self, at: DateTime<Utc>);

    /// Set the soft-delete flag. There is no way back to visible.
    fn flag_deleted(&mut self);

    /// Visible records are the ones every read path returns
    fn is_visible(&self) -> bool {
        !self.is_deleted()
    }
}

/// A set of caller-supplied field changes for a record of type `T`.
///
/// Patch types only carry the mutable fields of their record, so `id`,
/// `creationAt`, `updatedAt` and `isDeleted` can never be merged.
pub trait Patch<T> {
    /// Merge every present field into `record`
    fn merge_into(self, record: &mut T);
}
