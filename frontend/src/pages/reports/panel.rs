use crate::{
    components::{
        chart::{Chart, ChartKind},
        common::ButtonVariant,
        error::InlineErrorMessage,
        layout::Layout,
    },
    pages::reports::{utils, view_model::use_reports_view_model},
    reporting::{SeriesSpec, DEFAULT_SERIES_KEY},
};
use leptos::{ev::SubmitEvent, *};

const BUTTON_CLASS: &str =
    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50";
const INPUT_CLASS: &str =
    "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg";

#[component]
pub fn ReportsPage() -> impl IntoView {
    let vm = use_reports_view_model();
    let filter = vm.filter;
    let loading = vm.loading;
    let exporting = vm.export_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.load();
    };

    let department_options = move || {
        vm.departments
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
            .into_iter()
            .map(|dept| view! { <option value=dept.id.clone()>{dept.name}</option> })
            .collect_view()
    };

    view! {
        <Layout>
            <div>
                <h1 class="text-2xl font-bold text-fg">"Reports"</h1>
                <p class="mt-1 text-sm text-fg-muted">"Attendance, task and staffing breakdowns"</p>
            </div>
            <form class="bg-surface-elevated shadow rounded-lg p-4 grid grid-cols-1 gap-4 md:grid-cols-4 items-end" on:submit=on_submit>
                <label class="block text-sm font-medium text-fg">
                    "Department"
                    <select
                        class=INPUT_CLASS
                        on:change=move |ev| filter.department_id.set(event_target_value(&ev))
                        prop:value=move || filter.department_id.get()
                    >
                        <option value="">"All departments"</option>
                        {department_options}
                    </select>
                </label>
                <label class="block text-sm font-medium text-fg">
                    "From"
                    <input
                        type="date"
                        class=INPUT_CLASS
                        prop:value=move || filter.from.get()
                        on:input=move |ev| filter.from.set(event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm font-medium text-fg">
                    "To"
                    <input
                        type="date"
                        class=INPUT_CLASS
                        prop:value=move || filter.to.get()
                        on:input=move |ev| filter.to.set(event_target_value(&ev))
                    />
                </label>
                <div class="flex gap-2">
                    <button
                        type="submit"
                        class=format!("{} {}", BUTTON_CLASS, ButtonVariant::Primary.classes())
                        disabled=move || loading.get()
                    >
                        "Apply"
                    </button>
                    <button
                        type="button"
                        class=format!("{} {}", BUTTON_CLASS, ButtonVariant::Secondary.classes())
                        disabled=move || exporting.get()
                        on:click=move |_| vm.export()
                    >
                        {move || if exporting.get() { "Exporting..." } else { "Export" }}
                    </button>
                </div>
            </form>
            <InlineErrorMessage error=vm.error />
            <Chart
                kind=ChartKind::Line
                title="Daily attendance"
                data=vm.rows(utils::daily_attendance_rows)
                series=utils::attendance_series()
                loading=loading
                width=720
                height=280
            />
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
                <Chart
                    kind=ChartKind::Bar
                    title="Tasks by priority"
                    data=vm.rows(utils::priority_rows)
                    series=vec![SeriesSpec::new(DEFAULT_SERIES_KEY, "Tasks")]
                    loading=loading
                    width=320
                />
                <Chart
                    kind=ChartKind::Pie
                    title="Employees by role"
                    data=vm.rows(utils::role_rows)
                    colors=utils::role_colors()
                    loading=loading
                    width=320
                />
                <Chart
                    kind=ChartKind::Bar
                    title="Tasks per department"
                    data=vm.department_rows()
                    series=vec![SeriesSpec::new(DEFAULT_SERIES_KEY, "Tasks")]
                    loading=loading
                    width=320
                />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn reports_page_renders_filters_and_empty_charts() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <ReportsPage /> }
        });
        assert!(html.contains("All departments"));
        assert!(html.contains("Daily attendance"));
        assert!(html.contains("Employees by role"));
        assert!(html.contains("No data to display"));
    }
    #[test]
    fn each_chart_renders_a_single_card_shell() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <ReportsPage /> }
        });
        let shells = html
            .matches(r#"class="bg-surface-elevated shadow rounded-lg p-4""#)
            .count();
        assert_eq!(shells, 4);
    }
}
