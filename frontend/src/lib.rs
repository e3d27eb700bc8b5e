pub mod api;
pub mod components;
pub mod config;
pub mod domain;
pub mod pages;
pub mod reporting;
pub mod router;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Browser entry point: panic hook and logger first, then runtime config in
/// the background, then the app.
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(config::startup_log_level()) {
        web_sys::console::warn_1(&format!("logger already set: {}", err).into());
    }
    log::info!("starting Workdesk frontend");

    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
