//! Session repository interface and mock implementation.

mod mock;
#[path = "trait.rs"]
mod trait_;

pub use mock::MockSessionRepository;
pub use trait_::SessionRepository;
