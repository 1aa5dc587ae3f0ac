//! Domain-level constants.
//!
//! These constants define business rules and lookup subjects shared by the
//! catalog service and the HTTP layer.

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier handed out when a collection holds no records yet
pub const FIRST_RECORD_ID: u64 = 1;

// =============================================================================
// Validation
// =============================================================================

/// Minimum category name length (after trimming)
pub const MIN_NAME_LENGTH: usize = 1;

// =============================================================================
// Lookup subjects
// =============================================================================

/// Subject reported when an identifier lookup misses
pub const SUBJECT_ID: &str = "ID";

/// Subject reported when a slug lookup misses
pub const SUBJECT_SLUG: &str = "Slug";
