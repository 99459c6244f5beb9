//! # PageKit Core
//!
//! Shared foundation types for the PageKit page-builder:
//! - Error taxonomy for all layers (validation, persistence, unified `Error`)
//! - Pixel geometry primitives (`Position`, `Size`)
//! - Shared constants (history depth)
//!
//! All error types use `thiserror` for ergonomic error handling.

pub mod constants;
pub mod error;
pub mod geometry;

pub use error::{Error, LayoutError, Result, StorageError};
pub use geometry::{Position, Size};
