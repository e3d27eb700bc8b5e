mod attendance;
mod auth;
pub mod client;
mod directory;
mod leave;
mod messages;
mod reports;
mod tasks;
pub mod types;

pub use auth::cached_user;
pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
