use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl RuntimeConfig {
    /// Fills unset fields from `other`; values already present win.
    pub fn or(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(other.api_base_url),
            log_level: self.log_level.or(other.log_level),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.log_level.is_some()
    }
}

static RESOLVED: OnceLock<RuntimeConfig> = OnceLock::new();

pub fn log_level_from(raw: Option<&str>) -> log::Level {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("error") => log::Level::Error,
        Some("warn") | Some("warning") => log::Level::Warn,
        Some("debug") => log::Level::Debug,
        Some("trace") => log::Level::Trace,
        _ => log::Level::Info,
    }
}

pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;

    fn read_key(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    fn read_global(name: &str) -> Option<RuntimeConfig> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        Some(RuntimeConfig {
            api_base_url: read_key(&obj, &["API_BASE_URL", "api_base_url"]),
            log_level: read_key(&obj, &["LOG_LEVEL", "log_level"]),
        })
    }

    // window.__WORKDESK_ENV (env.js) takes precedence over window.__WORKDESK_CONFIG.
    pub fn snapshot() -> RuntimeConfig {
        read_global("__WORKDESK_ENV")
            .unwrap_or_default()
            .or(read_global("__WORKDESK_CONFIG").unwrap_or_default())
    }

    pub fn config_json_url() -> Option<String> {
        let origin = web_sys::window()?.location().origin().ok()?;
        Some(format!("{}/config.json", origin))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod globals {
    use super::RuntimeConfig;

    pub fn snapshot() -> RuntimeConfig {
        RuntimeConfig::default()
    }

    pub fn config_json_url() -> Option<String> {
        None
    }
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    use anyhow::Context;

    let url = globals::config_json_url().context("page origin unavailable")?;
    let resp = reqwest::get(&url)
        .await
        .with_context(|| format!("fetching {}", url))?;
    if !resp.status().is_success() {
        anyhow::bail!("{} returned {}", url, resp.status());
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("parsing config.json")
}

pub async fn resolve() -> RuntimeConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached.clone();
    }
    let mut cfg = globals::snapshot();
    if !cfg.is_complete() {
        match fetch_runtime_config().await {
            Ok(from_file) => cfg = cfg.or(from_file),
            Err(err) => log::debug!("config.json not used: {:#}", err),
        }
    }
    let cfg = RuntimeConfig {
        api_base_url: Some(normalize_base_url(
            cfg.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL),
        )),
        log_level: cfg.log_level,
    };
    RESOLVED.get_or_init(|| cfg).clone()
}

pub async fn await_api_base_url() -> String {
    resolve()
        .await
        .api_base_url
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Level configured through the page globals; `config.json` is not consulted
/// because logging must be up before the first fetch.
pub fn startup_log_level() -> log::Level {
    log_level_from(globals::snapshot().log_level.as_deref())
}

pub async fn init() {
    let cfg = resolve().await;
    log::info!(
        "runtime config resolved: api_base_url={}",
        cfg.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    );
}
