//! Page-level notifications shown above the content and cleared after a
//! short delay.

use leptos::*;

pub const FLASH_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub id: u64,
    pub kind: FlashKind,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct FlashState {
    current: RwSignal<Option<FlashMessage>>,
    next_id: StoredValue<u64>,
}

impl Default for FlashState {
    fn default() -> Self {
        Self::new()
    }
}

impl FlashState {
    pub fn new() -> Self {
        Self {
            current: create_rw_signal(None),
            next_id: store_value(0),
        }
    }

    pub fn current(&self) -> Signal<Option<FlashMessage>> {
        self.current.into()
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(FlashKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        let text = text.into();
        log::error!("{}", text);
        self.push(FlashKind::Error, text);
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    /// Clears the message only if it is still the one identified by `id`, so
    /// a timer never removes a newer message.
    pub fn dismiss_if(&self, id: u64) {
        if self
            .current
            .get_untracked()
            .map(|message| message.id == id)
            .unwrap_or(false)
        {
            self.current.set(None);
        }
    }

    fn push(&self, kind: FlashKind, text: String) {
        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();
        self.current.set(Some(FlashMessage { id, kind, text }));
        self.schedule_dismiss(id);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let state = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(FLASH_TIMEOUT_MS).await;
            state.dismiss_if(id);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

#[component]
pub fn FlashProvider(children: Children) -> impl IntoView {
    provide_context(FlashState::new());
    view! { <>{children()}</> }
}

pub fn use_flash() -> FlashState {
    use_context::<FlashState>().unwrap_or_else(FlashState::new)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn newer_message_survives_older_timer() {
        with_runtime(|| {
            let flash = FlashState::new();
            flash.success("Saved");
            let first = flash.current().get_untracked().unwrap();
            flash.error("Failed to save");
            flash.dismiss_if(first.id);
            let current = flash.current().get_untracked().unwrap();
            assert_eq!(current.kind, FlashKind::Error);
            assert_eq!(current.text, "Failed to save");
            flash.dismiss_if(current.id);
            assert!(flash.current().get_untracked().is_none());
        });
    }
}
