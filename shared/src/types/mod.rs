//! Shared response types used across layers

pub mod response;

pub use response::{ErrorResponse, MessageResponse};
