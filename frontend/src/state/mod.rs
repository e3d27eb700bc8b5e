pub mod auth;
pub mod flash;
pub mod request_guard;
