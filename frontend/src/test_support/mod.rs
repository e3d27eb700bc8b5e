#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::UserResponse;
    use crate::state::auth::AuthState;
    use leptos::*;

    fn user(id: &str, username: &str, full_name: &str, role: &str) -> UserResponse {
        UserResponse {
            id: id.into(),
            username: username.into(),
            full_name: full_name.into(),
            role: role.into(),
            department_id: Some("d1".into()),
            active: true,
        }
    }

    pub fn admin_user() -> UserResponse {
        user("u-admin", "admin", "Admin User", "admin")
    }

    pub fn manager_user() -> UserResponse {
        user("u-manager", "manager", "Morgan Manager", "manager")
    }

    pub fn employee_user() -> UserResponse {
        user("u-employee", "employee", "Erin Employee", "employee")
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
