use crate::api::{ApiClient, ApiError};
use crate::pages::dashboard::{
    repository::{DashboardData, DashboardRepository},
    utils::{self, DashboardSummary},
};
use crate::reporting::ChartRow;
use crate::state::auth::use_current_role;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub data: Resource<u32, Result<DashboardData, ApiError>>,
    pub reload: RwSignal<u32>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repo = DashboardRepository::new_with_client(Rc::new(api));
        let role = use_current_role();
        let reload = create_rw_signal(0u32);

        let data = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repo.clone();
                let role = role.get_untracked();
                async move {
                    let result = repo.fetch(role).await;
                    if let Err(err) = &result {
                        log::error!("dashboard load failed: {}", err);
                    }
                    result
                }
            },
        );

        Self { data, reload }
    }

    pub fn loading(&self) -> Signal<bool> {
        let data = self.data;
        Signal::derive(move || data.loading().get())
    }

    pub fn error(&self) -> Signal<Option<ApiError>> {
        let data = self.data;
        Signal::derive(move || data.get().and_then(Result::err))
    }

    pub fn summary(&self) -> Signal<Option<DashboardSummary>> {
        let data = self.data;
        Signal::derive(move || {
            data.get()
                .and_then(Result::ok)
                .map(|loaded| utils::summarize(&loaded))
        })
    }

    /// Chart rows built from the loaded data; empty until it arrives.
    pub fn rows(&self, build: fn(&DashboardData) -> Vec<ChartRow>) -> Signal<Vec<ChartRow>> {
        let data = self.data;
        Signal::derive(move || {
            data.get()
                .and_then(Result::ok)
                .map(|loaded| build(&loaded))
                .unwrap_or_default()
        })
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
