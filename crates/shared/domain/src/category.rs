//! Category domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Patch, Record, RecordId};

/// Category domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Category {
    /// Unique category identifier
    pub id: RecordId,
    /// Display name
    pub name: String,
    /// URL-friendly form of `name`
    pub slug: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    /// Creation timestamp, never changes
    pub creation_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
    /// Soft delete flag (false = visible)
    #[serde(default)]
    pub is_deleted: bool,
}

impl Category {
    /// Create a new visible category with both timestamps set to `now`
    pub fn new(id: RecordId, name: String, slug: String, image: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            slug,
            image,
            creation_at: now,
            updated_at: now,
            is_deleted: false,
        }
    }

    /// Case-insensitive substring match against the name.
    /// An empty filter matches every category.
    pub fn name_contains(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}

impl Record for Category {
    fn id(&self) -> RecordId {
        self.id
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }

    fn flag_deleted(&mut self) {
        self.is_deleted = true;
    }
}

/// Category creation data transfer object
#[derive(Debug, Clone, Deserialize)]
pub struct NewCategory {
    /// Display name, the slug is derived from it
    pub name: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
}

/// Partial category update.
///
/// Only the mutable fields exist here. A `slug` is merged like any other
/// field, but the service recomputes the slug right after the merge whenever
/// `name` is present, so a caller slug only survives when `name` is absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryPatch {
    /// New display name
    pub name: Option<String>,
    /// New slug (overridden when `name` is also present)
    pub slug: Option<String>,
    /// New image URL
    pub image: Option<String>,
}

impl Patch<Category> for CategoryPatch {
    fn merge_into(self, record: &mut Category) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(slug) = self.slug {
            record.slug = slug;
        }
        if let Some(image) = self.image {
            record.image = image;
        }
    }
}
