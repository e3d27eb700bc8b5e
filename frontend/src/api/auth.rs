use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, UserResponse},
};
use crate::utils::storage as storage_utils;

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/auth/login").await;
        let response = self
            .send(self.http_client().post(url).json(&request))
            .await?;
        let login: LoginResponse = self.map_json_response(response).await?;
        persist_session(&login)?;
        log::info!("signed in as {}", login.user.username);
        Ok(login)
    }

    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        let user: UserResponse = self.get_json("/auth/me", &[]).await?;
        cache_user(&user);
        Ok(user)
    }

    /// Server-side logout is best effort; the local session is cleared either way.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.endpoint("/auth/logout").await;
        let result = match self.send(self.http_client().post(url)).await {
            Ok(response) => self.map_empty_response(response).await,
            Err(err) => Err(err),
        };
        storage_utils::clear_session();
        if let Err(err) = &result {
            log::warn!("logout request failed: {}", err);
        }
        result
    }
}

fn persist_session(login: &LoginResponse) -> Result<(), ApiError> {
    storage_utils::set(storage_utils::ACCESS_TOKEN_KEY, &login.access_token)
        .map_err(ApiError::unknown)?;
    cache_user(&login.user);
    Ok(())
}

fn cache_user(user: &UserResponse) {
    if let Ok(raw) = serde_json::to_string(user) {
        let _ = storage_utils::set(storage_utils::CURRENT_USER_KEY, &raw);
    }
}

/// Profile cached by the last login or `/auth/me`, used to render before the
/// session check completes.
pub fn cached_user() -> Option<UserResponse> {
    storage_utils::get(storage_utils::CURRENT_USER_KEY)
        .ok()
        .flatten()
        .and_then(|raw| serde_json::from_str(&raw).ok())
}
