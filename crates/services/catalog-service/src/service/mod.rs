//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic over the in-memory stores. They are
//! exposed through traits so the HTTP layer depends on abstractions.

mod category_service;

pub use category_service::{CategoryManager, CategoryService};

#[cfg(any(test, feature = "test-utils"))]
pub use category_service::MockCategoryService;
