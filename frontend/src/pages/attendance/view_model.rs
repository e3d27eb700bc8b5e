use crate::{
    api::{ApiClient, ApiError, AttendanceRecord},
    pages::attendance::{repository::AttendanceRepository, utils},
    reporting::{adapter, aggregate, ChartRow},
    state::request_guard::RequestGeneration,
    utils::time,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub month: RwSignal<String>,
    pub records: RwSignal<Vec<AttendanceRecord>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    repo: StoredValue<AttendanceRepository>,
    generation: RequestGeneration,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let vm = Self {
            month: create_rw_signal(utils::month_value(time::today())),
            records: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            repo: store_value(AttendanceRepository::new_with_client(Rc::new(api))),
            generation: RequestGeneration::new(),
        };

        create_effect(move |_| {
            let month = vm.month.get();
            vm.load(&month);
        });

        vm
    }

    pub fn load(&self, month: &str) {
        let Some((from, to)) = utils::parse_month(month) else {
            self.error
                .set(Some(ApiError::validation("Choose a month as YYYY-MM.")));
            return;
        };
        let repo = self.repo.get_value();
        let (records, loading, error) = (self.records, self.loading, self.error);
        loading.set(true);
        error.set(None);
        self.generation.spawn_latest(
            async move { repo.fetch_range(from, to).await },
            move |result| {
                loading.set(false);
                match result {
                    Ok(list) => records.set(list),
                    Err(err) => {
                        log::error!("attendance load failed: {}", err);
                        records.set(Vec::new());
                        error.set(Some(err));
                    }
                }
            },
        );
    }

    pub fn status_rows(&self) -> Signal<Vec<ChartRow>> {
        let records = self.records;
        Signal::derive(move || records.with(|r| adapter::pie_rows(&aggregate::attendance_by_status(r))))
    }

    pub fn history(&self) -> Signal<Vec<utils::HistoryRow>> {
        let records = self.records;
        Signal::derive(move || records.with(|r| utils::history_rows(r)))
    }
}

impl Default for AttendanceViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AttendanceViewModel::new();
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
    fn invalid_month_reports_validation_error() {
        with_runtime(|| {
            let vm = AttendanceViewModel::new();
            vm.load("next month");
            assert_eq!(vm.error.get_untracked().unwrap().code, "VALIDATION_ERROR");
            assert!(!vm.loading.get_untracked());
        });
    }

    #[test]
    fn status_rows_are_seeded_before_load() {
        with_runtime(|| {
            let vm = AttendanceViewModel::new();
            let rows = vm.status_rows().get_untracked();
            assert_eq!(rows.len(), 4);
            assert!(vm.history().get_untracked().is_empty());
        });
    }
}
