//! # Signet Shared
//!
//! Cross-cutting types used by every layer of the Signet backend:
//! configuration structs, common response shapes, and validation utilities.

pub mod config;
pub mod types;
pub mod utils;
