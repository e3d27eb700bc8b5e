use crate::{
    components::{
        chart::{Chart, ChartKind},
        common::{Button, ButtonVariant, StatCard},
        error::InlineErrorMessage,
        layout::Layout,
    },
    pages::dashboard::{utils, view_model::use_dashboard_view_model},
    reporting::{SeriesSpec, DEFAULT_SERIES_KEY},
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let summary = vm.summary();
    let stat = move |pick: fn(&utils::DashboardSummary) -> String| {
        Signal::derive(move || summary.get().map(|s| pick(&s)).unwrap_or_else(|| "-".into()))
    };
    let loading = vm.loading();

    view! {
        <Layout>
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Dashboard"</h1>
                    <p class="mt-1 text-sm text-fg-muted">"This month at a glance"</p>
                </div>
                <Button variant=ButtonVariant::Secondary on:click=move |_| vm.refresh()>
                    "Refresh"
                </Button>
            </div>
            <InlineErrorMessage error=vm.error() />
            <dl class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
                <StatCard label="Employees" value=stat(|s| s.employees.to_string()) />
                <StatCard label="Open tasks" value=stat(|s| s.open_tasks.to_string()) />
                <StatCard label="Pending leave" value=stat(|s| s.pending_leave.to_string()) />
                <StatCard label="Unread messages" value=stat(|s| s.unread_messages.to_string()) />
            </dl>
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
                <Chart
                    kind=ChartKind::Pie
                    title="My attendance this month"
                    data=vm.rows(utils::attendance_rows)
                    colors=utils::attendance_colors()
                    loading=loading
                    width=320
                />
                <Chart
                    kind=ChartKind::Bar
                    title="Tasks by status"
                    data=vm.rows(utils::task_status_rows)
                    series=vec![SeriesSpec::new(DEFAULT_SERIES_KEY, "Tasks")]
                    loading=loading
                    width=320
                />
                <Chart
                    kind=ChartKind::Pie
                    title="Leave requests by status"
                    data=vm.rows(utils::leave_status_rows)
                    colors=utils::leave_status_colors()
                    loading=loading
                    width=320
                />
            </div>
        </Layout>
    }
}
