//! Product domain entity.
//!
//! Products are owned by their own store; the category side only reads them
//! and matches on the embedded category reference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordId};

/// Category reference embedded in a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CategoryRef {
    /// Identifier of the referenced category
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Product domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Product {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    /// Owning category, absent for uncategorized products
    #[serde(default)]
    pub category: Option<CategoryRef>,
    pub creation_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_deleted: bool,
}

impl Product {
    /// Whether the embedded category reference points at `category_id`
    pub fn belongs_to(&self, category_id: RecordId) -> bool {
        self.category
            .as_ref()
            .is_some_and(|category| category.id == category_id)
    }
}

impl Record for Product {
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
