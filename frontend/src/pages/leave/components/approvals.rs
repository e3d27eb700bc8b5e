use super::{period_label, status_badge_parts, type_label};
use crate::{
    components::{
        common::{ButtonVariant, StatusBadge},
        confirm_dialog::{ConfirmDialog, ConfirmTone},
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    domain::LeaveStatus,
    pages::leave::{utils, view_model::LeaveViewModel},
};
use leptos::*;

const ROW_BUTTON_CLASS: &str = "rounded-md px-3 py-1 text-sm font-semibold disabled:opacity-50";

#[component]
pub fn ApprovalsQueue(vm: LeaveViewModel) -> impl IntoView {
    let deciding = vm.decide_action.pending();

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Awaiting your decision"</h2>
            {move || match vm.queue.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                Some(Ok(requests)) if requests.is_empty() => view! {
                    <EmptyState title="Nothing to review" />
                }.into_view(),
                Some(Ok(requests)) => {
                    let role = vm.role.get();
                    view! {
                        <ul class="divide-y divide-border">
                            {requests.into_iter().map(|request| {
                                let (label, color) = status_badge_parts(&request);
                                let buttons = utils::decision_targets(role, &request)
                                    .into_iter()
                                    .map(|target| {
                                        let request = request.clone();
                                        let variant = if target == LeaveStatus::Rejected {
                                            ButtonVariant::Danger
                                        } else {
                                            ButtonVariant::Primary
                                        };
                                        view! {
                                            <button
                                                type="button"
                                                class=format!("{} {}", ROW_BUTTON_CLASS, variant.classes())
                                                disabled=move || deciding.get()
                                                on:click=move |_| vm.ask_decision(request.clone(), target)
                                            >
                                                {utils::decision_label(target)}
                                            </button>
                                        }
                                    })
                                    .collect_view();
                                let requester = request
                                    .requester_name
                                    .clone()
                                    .unwrap_or_else(|| request.requester_id.clone());
                                view! {
                                    <li class="py-3 flex flex-wrap items-center justify-between gap-4">
                                        <div>
                                            <p class="text-sm font-medium text-fg">{requester}</p>
                                            <p class="text-xs text-fg-muted">
                                                {type_label(&request)}" · "{period_label(&request)}
                                            </p>
                                            {request.comment.clone().map(|c| view! {
                                                <p class="text-xs text-fg-muted italic">{c}</p>
                                            })}
                                        </div>
                                        <div class="flex items-center gap-2">
                                            <StatusBadge label=label color=color />
                                            {buttons}
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

/// Confirmation for the decision picked in the queue, with an optional
/// comment. Rejections use the destructive style.
#[component]
pub fn DecisionDialog(vm: LeaveViewModel) -> impl IntoView {
    let deciding = vm.decide_action.pending();
    let target = create_memo(move |_| vm.pending_decision.with(|d| d.as_ref().map(|d| d.target)));
    let is_open = Signal::derive(move || target.get().is_some());
    let title = Signal::derive(move || {
        target
            .get()
            .map(|t| format!("{} request", utils::decision_label(t)))
            .unwrap_or_default()
    });
    let message = Signal::derive(move || {
        vm.pending_decision
            .with(|d| {
                d.as_ref().map(|d| {
                    let who = d
                        .request
                        .requester_name
                        .clone()
                        .unwrap_or_else(|| d.request.requester_id.clone());
                    format!("{} {}'s {}?", utils::decision_label(d.target), who, period_label(&d.request))
                })
            })
            .unwrap_or_default()
    });
    let comment = Signal::derive(move || {
        vm.pending_decision
            .with(|d| d.as_ref().map(|d| d.comment.clone()))
            .unwrap_or_default()
    });
    let confirm_label = Signal::derive(move || {
        target
            .get()
            .map(|t| utils::decision_label(t).to_string())
            .unwrap_or_default()
    });

    move || {
        let destructive = target.get() == Some(LeaveStatus::Rejected);
        view! {
            <ConfirmDialog
                is_open=is_open
                title=title
                message=message
                confirm_label=confirm_label
                busy=Signal::derive(move || deciding.get())
                tone={ConfirmTone::destructive_if(destructive)}
                on_confirm=Callback::new(move |_| vm.confirm_decision())
                on_cancel=Callback::new(move |_| vm.dismiss_decision())
            >
                <label class="block text-sm font-medium text-fg">
                    {if destructive { "Reason (optional)" } else { "Comment (optional)" }}
                    <textarea
                        name="decision-comment"
                        rows="3"
                        class="mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                        prop:value=move || comment.get()
                        on:input=move |ev| vm.set_decision_comment(event_target_value(&ev))
                    ></textarea>
                </label>
            </ConfirmDialog>
        }
    }
}
