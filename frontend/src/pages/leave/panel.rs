use crate::{
    components::{
        chart::{Chart, ChartKind},
        layout::Layout,
    },
    pages::leave::{
        components::{ApprovalsQueue, DecisionDialog, LeaveRequestForm, MyRequestsList},
        utils,
        view_model::use_leave_view_model,
    },
};
use leptos::*;

#[component]
pub fn LeavePage() -> impl IntoView {
    let vm = use_leave_view_model();
    let is_approver = move || utils::queue_status(vm.role.get()).is_some();
    let type_rows = Signal::derive(move || {
        vm.my_requests
            .get()
            .and_then(Result::ok)
            .map(|requests| utils::type_rows(&requests))
            .unwrap_or_default()
    });
    let loading = Signal::derive(move || vm.my_requests.get().is_none());

    view! {
        <Layout>
            <div>
                <h1 class="text-2xl font-bold text-fg">"Leave"</h1>
                <p class="mt-1 text-sm text-fg-muted">"Request time off and follow its approval"</p>
            </div>
            <LeaveRequestForm vm=vm />
            <Show when=is_approver>
                <ApprovalsQueue vm=vm />
            </Show>
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
                <div class="lg:col-span-2">
                    <MyRequestsList vm=vm />
                </div>
                <Chart
                    kind=ChartKind::Pie
                    title="My leave by type"
                    data=type_rows
                    colors=utils::type_colors()
                    loading=loading
                    width=320
                />
            </div>
            <DecisionDialog vm=vm />
        </Layout>
    }
}
