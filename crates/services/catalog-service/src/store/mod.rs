//! Storage layer - in-memory collections.

mod resource_store;

pub use resource_store::{apply_partial_update, mark_deleted, ResourceStore};
