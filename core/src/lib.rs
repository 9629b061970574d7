//! # Signet Core
//!
//! Core business logic and domain layer for the Signet backend.
//! This crate contains domain entities, the authentication workflow,
//! repository interfaces, and error types. It has no HTTP or database
//! dependencies; those live in the `signet_api` and `signet_infra` crates.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
