//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Entity types here are shared by the catalog service and the gateway.

pub mod category;
pub mod clock;
pub mod constants;
pub mod error;
pub mod product;
pub mod record;

pub use category::{Category, CategoryPatch, NewCategory};
pub use clock::{Clock, SteppingClock, SystemClock};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use product::{CategoryRef, Product};
pub use record::{Patch, Record, RecordId};
