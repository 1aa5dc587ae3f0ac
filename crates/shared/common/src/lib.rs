//! Common utilities shared across the workspace.
//!
//! This crate provides the unified application error type and its HTTP
//! response conversion.

pub mod error;

pub use error::{AppError, AppResult, OptionExt};
