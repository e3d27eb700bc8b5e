use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::{
    api::types::{ApiError, ExportFile},
    config,
    utils::{download, storage as storage_utils},
};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    /// Attaches the bearer token and a request id, then dispatches. Transport
    /// failures become `REQUEST_FAILED`; HTTP error statuses are left to the
    /// `map_*` helpers.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request_id = Uuid::new_v4().to_string();
        let mut builder = builder.header(REQUEST_ID_HEADER, request_id.as_str());
        if let Some(token) = storage_utils::access_token() {
            builder = builder.bearer_auth(token);
        }
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;
        log::debug!(
            "{} {} [{}]",
            request.method(),
            request.url().path(),
            request_id
        );

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(response) = mock_response_for(&request)? {
            return Ok(response);
        }

        self.client.execute(request).await.map_err(|e| {
            log::error!("request {} failed: {}", request_id, e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path).await;
        let mut request = self.http_client().get(url);
        if !params.is_empty() {
            request = request.query(params);
        }
        let response = self.send(request).await?;
        self.map_json_response(response).await
    }

    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(map_error_response(response).await)
        }
    }

    pub(crate) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            Ok(())
        } else {
            Err(map_error_response(response).await)
        }
    }

    pub(crate) async fn map_file_response(&self, response: Response) -> Result<ExportFile, ApiError> {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        if !status.is_success() {
            return Err(map_error_response(response).await);
        }
        let headers = response.headers();
        let filename = download::filename_from_disposition(
            headers
                .get(reqwest::header::CONTENT_DISPOSITION)
                .and_then(|value| value.to_str().ok()),
        );
        let content_type = headers
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to read file: {}", e)))?;
        Ok(ExportFile {
            filename,
            content_type,
            bytes: bytes.to_vec(),
        })
    }

    fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::info!("session rejected by server, signing out");
            storage_utils::clear_session();
            Self::redirect_to_login_if_needed();
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn redirect_to_login_if_needed() {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if let Ok(pathname) = location.pathname() {
                if pathname == "/login" {
                    return;
                }
            }
            let _ = location.set_href("/login");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn redirect_to_login_if_needed() {}
}

async fn map_error_response(response: Response) -> ApiError {
    let status = response.status().as_u16();
    match response.text().await {
        Ok(body) => map_error_payload(status, &body),
        Err(_) => ApiError::http_status(status),
    }
}

pub(crate) fn map_error_payload(status: u16, body: &str) -> ApiError {
    serde_json::from_str::<ApiError>(body)
        .ok()
        .filter(|err| !err.error.trim().is_empty())
        .unwrap_or_else(|| ApiError::http_status(status))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_registry::mock_response_for;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod mock_registry {
    use std::sync::{Arc, Mutex, OnceLock};

    use reqwest::{Request, Response};
    use serde_json::Value;

    use crate::api::types::ApiError;

    pub trait TestResponder: Send + Sync {
        fn respond(&self, request: &Request) -> Result<MockResponse, ApiError>;
    }

    #[derive(Clone, Debug)]
    pub struct MockResponse {
        pub status: u16,
        pub headers: Vec<(String, String)>,
        pub body: Vec<u8>,
    }

    impl MockResponse {
        pub fn json(status: u16, body: Value) -> Self {
            Self {
                status,
                headers: vec![("content-type".into(), "application/json".into())],
                body: body.to_string().into_bytes(),
            }
        }

        pub fn bytes(status: u16, content_type: &str, body: Vec<u8>) -> Self {
            Self {
                status,
                headers: vec![("content-type".into(), content_type.to_string())],
                body,
            }
        }

        pub fn with_header(mut self, name: &str, value: &str) -> Self {
            self.headers.push((name.to_string(), value.to_string()));
            self
        }

        fn into_response(self) -> Result<Response, ApiError> {
            let mut builder = http::Response::builder().status(self.status);
            for (name, value) in &self.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            let response = builder
                .body(self.body)
                .map_err(|e| ApiError::unknown(format!("mock response: {}", e)))?;
            Ok(Response::from(response))
        }
    }

    type Registry = Mutex<Vec<(String, Arc<dyn TestResponder>)>>;

    fn registry() -> &'static Registry {
        static MOCKS: OnceLock<Registry> = OnceLock::new();
        MOCKS.get_or_init(|| Mutex::new(Vec::new()))
    }

    pub fn register_mock(base_url: String, responder: Arc<dyn TestResponder>) {
        if let Ok(mut mocks) = registry().lock() {
            mocks.retain(|(base, _)| base != &base_url);
            mocks.push((base_url, responder));
        }
    }

    pub(super) fn mock_response_for(request: &Request) -> Result<Option<Response>, ApiError> {
        let url = request.url().as_str().to_string();
        let responder = registry().lock().ok().and_then(|mocks| {
            mocks
                .iter()
                .find(|(base, _)| url.starts_with(base.as_str()))
                .map(|(_, responder)| responder.clone())
        });
        match responder {
            Some(responder) => responder.respond(request)?.into_response().map(Some),
            None => Ok(None),
        }
    }
}
