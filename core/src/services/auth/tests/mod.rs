//! Tests for the authentication workflow

#[cfg(test)]
mod service_tests;
