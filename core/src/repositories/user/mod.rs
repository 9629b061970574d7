//! User repository interface, mock implementation, and the store wrapper
//! that applies the password pre-persist hook.

mod mock;
mod store;
#[path = "trait.rs"]
mod trait_;

pub use mock::MockUserRepository;
pub use store::UserStore;
pub use trait_::UserRepository;
