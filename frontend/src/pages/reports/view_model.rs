use crate::{
    api::{ApiClient, ApiError, Department, ReportQuery},
    pages::reports::{
        repository::{ReportData, ReportsRepository},
        utils::ReportFilterState,
    },
    reporting::ChartRow,
    state::{flash::use_flash, request_guard::RequestGeneration},
    utils::download,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ReportsViewModel {
    pub filter: ReportFilterState,
    pub departments: Resource<(), Result<Vec<Department>, ApiError>>,
    pub data: RwSignal<Option<ReportData>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    pub export_action: Action<ReportQuery, Result<String, ApiError>>,
    repo: StoredValue<ReportsRepository>,
    generation: RequestGeneration,
}

impl ReportsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repo = ReportsRepository::new_with_client(Rc::new(api));
        let flash = use_flash();

        let departments_repo = repo.clone();
        let departments = create_resource(
            || (),
            move |_| {
                let repo = departments_repo.clone();
                async move { repo.list_departments().await }
            },
        );

        let export_repo = repo.clone();
        let export_action = create_action(move |query: &ReportQuery| {
            let repo = export_repo.clone();
            let query = query.clone();
            async move {
                let file = repo.export(&query).await?;
                download::trigger_blob_download(&file.filename, &file.content_type, &file.bytes)
                    .map_err(ApiError::unknown)?;
                Ok::<String, ApiError>(file.filename)
            }
        });

        create_effect(move |_| {
            if let Some(result) = export_action.value().get() {
                match result {
                    Ok(filename) => flash.success(format!("Downloaded {}", filename)),
                    Err(err) => flash.error(err.error),
                }
            }
        });

        let vm = Self {
            filter: ReportFilterState::default(),
            departments,
            data: create_rw_signal(None),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            export_action,
            repo: store_value(repo),
            generation: RequestGeneration::new(),
        };

        create_effect(move |_| vm.load());

        vm
    }

    /// Validates the filters and fetches report data. A response is applied
    /// only if no newer load started while it was in flight.
    pub fn load(&self) {
        let query = match self.filter.to_query() {
            Ok(query) => query,
            Err(err) => {
                self.error.set(Some(err));
                return;
            }
        };
        let repo = self.repo.get_value();
        let (data, loading, error) = (self.data, self.loading, self.error);
        loading.set(true);
        error.set(None);
        self.generation.spawn_latest(
            async move { repo.load(&query).await },
            move |result| {
                loading.set(false);
                match result {
                    Ok(loaded) => data.set(Some(loaded)),
                    Err(err) => {
                        log::error!("report load failed: {}", err);
                        error.set(Some(err));
                    }
                }
            },
        );
    }

    pub fn export(&self) {
        if self.export_action.pending().get_untracked() {
            return;
        }
        match self.filter.to_query() {
            Ok(query) => self.export_action.dispatch(query),
            Err(err) => self.error.set(Some(err)),
        }
    }

    pub fn rows(&self, build: fn(&ReportData) -> Vec<ChartRow>) -> Signal<Vec<ChartRow>> {
        let data = self.data;
        Signal::derive(move || data.with(|d| d.as_ref().map(build).unwrap_or_default()))
    }

    pub fn department_rows(&self) -> Signal<Vec<ChartRow>> {
        let (data, departments) = (self.data, self.departments);
        Signal::derive(move || {
            let departments = departments.get().and_then(Result::ok).unwrap_or_default();
            data.with(|d| {
                d.as_ref()
                    .map(|d| super::utils::department_rows(d, &departments))
                    .unwrap_or_default()
            })
        })
    }
}

impl Default for ReportsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_reports_view_model() -> ReportsViewModel {
    match use_context::<ReportsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = ReportsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn inverted_range_sets_error_without_loading() {
        with_runtime(|| {
            let vm = ReportsViewModel::new();
            vm.filter.from.set("2025-03-01".into());
            vm.filter.to.set("2025-02-01".into());
            vm.load();
            assert!(!vm.loading.get_untracked());
            let err = vm.error.get_untracked().unwrap();
            assert_eq!(err.code, "VALIDATION_ERROR");
        });
    }

    #[test]
    fn export_with_inverted_range_is_not_dispatched() {
        with_runtime(|| {
            let vm = ReportsViewModel::new();
            vm.filter.from.set("2025-03-01".into());
            vm.filter.to.set("2025-02-01".into());
            vm.export();
            assert_eq!(vm.error.get_untracked().unwrap().code, "VALIDATION_ERROR");
            assert_eq!(vm.export_action.version().get_untracked(), 0);
            assert!(vm.export_action.value().get_untracked().is_none());
        });
    }

    #[test]
    fn rows_are_empty_before_data_arrives() {
        with_runtime(|| {
            let vm = ReportsViewModel::new();
            assert!(vm.rows(crate::pages::reports::utils::priority_rows).get_untracked().is_empty());
        });
    }
}
