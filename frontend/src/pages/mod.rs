pub mod attendance;
pub mod dashboard;
pub mod home;
pub mod leave;
pub mod login;
pub mod messages;
pub mod reports;
pub mod tasks;
