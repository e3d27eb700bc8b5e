use super::{period_label, status_badge_parts, type_label};
use crate::{
    components::{
        common::StatusBadge,
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::leave::{utils, view_model::LeaveViewModel},
};
use leptos::*;

#[component]
pub fn MyRequestsList(vm: LeaveViewModel) -> impl IntoView {
    let cancelling = vm.cancel_action.pending();

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">"My requests"</h2>
            {move || match vm.my_requests.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                Some(Ok(requests)) if requests.is_empty() => view! {
                    <EmptyState title="No leave requests yet" />
                }.into_view(),
                Some(Ok(requests)) => {
                    let user_id = vm.user_id.get();
                    view! {
                        <ul class="divide-y divide-border">
                            {requests.into_iter().map(|request| {
                                let (label, color) = status_badge_parts(&request);
                                let cancellable = utils::can_cancel(user_id.as_deref(), &request);
                                let id = request.id.clone();
                                view! {
                                    <li class="py-3 flex items-center justify-between gap-4">
                                        <div>
                                            <p class="text-sm font-medium text-fg">{type_label(&request)}</p>
                                            <p class="text-xs text-fg-muted">{period_label(&request)}</p>
                                        </div>
                                        <div class="flex items-center gap-3">
                                            <StatusBadge label=label color=color />
                                            {cancellable.then(|| view! {
                                                <button
                                                    type="button"
                                                    class="text-sm text-action-danger-bg hover:underline disabled:opacity-50"
                                                    disabled=move || cancelling.get()
                                                    on:click=move |_| vm.cancel_request(id.clone())
                                                >
                                                    "Cancel"
                                                </button>
                                            })}
                                        </div>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }.into_view()
                }
            }}
        </section>
    }
}
