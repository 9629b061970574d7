//! Value objects returned by the auth workflow

pub mod token_pair;

pub use token_pair::TokenPair;
