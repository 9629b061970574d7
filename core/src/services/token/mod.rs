//! JWT signing and verification with per-kind RS256 key pairs.

mod keys;
mod service;

pub use keys::TokenKeys;
pub use service::{KeyKind, TokenCodec};
