use crate::{api::LoginRequest, utils::validation::FieldErrors};
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoginField {
    Username,
    Password,
}

pub type LoginFieldErrors = FieldErrors<LoginField>;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, LoginFieldErrors> {
        let username = self.username.get_untracked();
        let password = self.password.get_untracked();
        validate_credentials(&username, &password)?;
        Ok(LoginRequest {
            username: username.trim().to_string(),
            password,
        })
    }
}

/// The password is checked as typed; only the username is trimmed.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), LoginFieldErrors> {
    let mut errors = LoginFieldErrors::default();
    if username.trim().is_empty() {
        errors.insert(LoginField::Username, "Enter your username.");
    }
    if password.is_empty() {
        errors.insert(LoginField::Password, "Enter your password.");
    }
    errors.into_result(())
}
