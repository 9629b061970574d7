//! Business services

pub mod auth;
pub mod email;
pub mod password;
pub mod token;
