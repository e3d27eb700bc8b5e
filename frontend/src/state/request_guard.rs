use leptos::*;
use std::future::Future;

/// Issues increasing request ids so a page applies only the response to its
/// latest request. Responses carrying an older id are dropped.
#[derive(Clone, Copy)]
pub struct RequestGeneration {
    latest: StoredValue<u64>,
}

impl Default for RequestGeneration {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self {
            latest: store_value(0),
        }
    }

    pub fn begin(&self) -> u64 {
        self.latest.update_value(|id| *id += 1);
        self.latest.get_value()
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.latest.get_value() == id
    }

    /// Runs `apply` only while `id` is still the latest request.
    pub fn apply_if_current(&self, id: u64, apply: impl FnOnce()) -> bool {
        if self.is_current(id) {
            apply();
            true
        } else {
            log::debug!("dropping stale response for request {}", id);
            false
        }
    }

    /// Starts a new request and returns a future that awaits `fetch` and
    /// hands its output to `apply` unless a newer request began in the
    /// meantime. Resolves to whether `apply` ran.
    pub fn track_latest<T, Fut, F>(&self, fetch: Fut, apply: F) -> impl Future<Output = bool> + 'static
    where
        T: 'static,
        Fut: Future<Output = T> + 'static,
        F: FnOnce(T) + 'static,
    {
        let id = self.begin();
        let guard = *self;
        async move {
            let output = fetch.await;
            guard.apply_if_current(id, move || apply(output))
        }
    }

    /// [`Self::track_latest`], driven in the background.
    pub fn spawn_latest<T, Fut, F>(&self, fetch: Fut, apply: F)
    where
        T: 'static,
        Fut: Future<Output = T> + 'static,
        F: FnOnce(T) + 'static,
    {
        let task = self.track_latest(fetch, apply);
        spawn_local(async move {
            task.await;
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn only_latest_request_applies() {
        with_runtime(|| {
            let guard = RequestGeneration::new();
            let first = guard.begin();
            let second = guard.begin();
            assert!(second > first);
            assert!(!guard.is_current(first));

            let applied = create_rw_signal(Vec::<u64>::new());
            // Second resolves first, then the stale first response arrives.
            guard.apply_if_current(second, || applied.update(|v| v.push(second)));
            guard.apply_if_current(first, || applied.update(|v| v.push(first)));
            assert_eq!(applied.get_untracked(), vec![second]);
        });
    }

    #[test]
    fn fetches_finishing_out_of_order_apply_only_the_latest() {
        with_runtime(|| {
            let rt = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            let guard = RequestGeneration::new();
            let shown = create_rw_signal(String::new());

            let first = guard.track_latest(async { "first".to_string() }, move |v| shown.set(v));
            let second = guard.track_latest(async { "second".to_string() }, move |v| shown.set(v));

            assert!(rt.block_on(second));
            assert!(!rt.block_on(first));
            assert_eq!(shown.get_untracked(), "second");
        });
    }

    #[test]
    fn copies_share_the_counter() {
        with_runtime(|| {
            let guard = RequestGeneration::new();
            let copy = guard;
            let id = guard.begin();
            assert!(copy.is_current(id));
            copy.begin();
            assert!(!guard.is_current(id));
        });
    }
}
