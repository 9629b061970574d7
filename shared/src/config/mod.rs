//! Configuration modules, each constructed once at process start from the
//! environment and passed explicitly into the components that need them.

pub mod database;
pub mod email;
pub mod environment;
pub mod jwt;
pub mod server;

pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use environment::Environment;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
