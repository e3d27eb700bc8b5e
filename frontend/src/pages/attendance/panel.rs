use super::{components::HistoryTable, view_model::use_attendance_view_model};
use crate::{
    components::{
        chart::{Chart, ChartKind},
        error::InlineErrorMessage,
        layout::Layout,
    },
    domain::AttendanceStatus,
    reporting::adapter,
};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    let month = vm.month;

    view! {
        <Layout>
            <div class="flex flex-wrap items-end justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"My attendance"</h1>
                    <p class="mt-1 text-sm text-fg-muted">"Daily status and check-in times"</p>
                </div>
                <label class="text-sm font-medium text-fg">
                    "Month"
                    <input
                        type="month"
                        class="ml-2 rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                        prop:value=move || month.get()
                        on:change=move |ev| month.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <InlineErrorMessage error=vm.error />
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
                <Chart
                    kind=ChartKind::Pie
                    title="Status breakdown"
                    data=vm.status_rows()
                    colors={adapter::category_colors::<AttendanceStatus>()}
                    loading=vm.loading
                    width=320
                />
                <div class="lg:col-span-2">
                    <HistoryTable rows=vm.history() />
                </div>
            </div>
        </Layout>
    }
}
