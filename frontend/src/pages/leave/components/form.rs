use crate::{
    components::error::{FieldError, InlineErrorMessage},
    domain::{Category, LeaveType},
    pages::leave::{utils::LeaveField, view_model::LeaveViewModel},
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str =
    "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg";

#[component]
pub fn LeaveRequestForm(vm: LeaveViewModel) -> impl IntoView {
    let form = vm.form;
    let pending = vm.submit_action.pending();
    let error_for = move |field: LeaveField| {
        Signal::derive(move || vm.field_errors.with(|errors| errors.get(field).map(str::to_string)))
    };
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Request leave"</h2>
            <form class="grid grid-cols-1 gap-4 md:grid-cols-2" on:submit=on_submit>
                <label class="block text-sm font-medium text-fg">
                    "Type"
                    <select
                        name="leave_type"
                        class=INPUT_CLASS
                        prop:value=move || form.leave_type.get()
                        on:change=move |ev| form.leave_type.set(event_target_value(&ev))
                    >
                        {LeaveType::ALL
                            .iter()
                            .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                            .collect_view()}
                    </select>
                    <FieldError message=error_for(LeaveField::Type) />
                </label>
                <div></div>
                <label class="block text-sm font-medium text-fg">
                    "Start date"
                    <input
                        type="date"
                        name="start_date"
                        class=INPUT_CLASS
                        prop:value=move || form.start_date.get()
                        on:input=move |ev| form.start_date.set(event_target_value(&ev))
                    />
                    <FieldError message=error_for(LeaveField::StartDate) />
                </label>
                <label class="block text-sm font-medium text-fg">
                    "End date"
                    <input
                        type="date"
                        name="end_date"
                        class=INPUT_CLASS
                        prop:value=move || form.end_date.get()
                        on:input=move |ev| form.end_date.set(event_target_value(&ev))
                    />
                    <FieldError message=error_for(LeaveField::EndDate) />
                </label>
                <label class="block text-sm font-medium text-fg md:col-span-2">
                    "Comment"
                    <textarea
                        name="comment"
                        rows="2"
                        class=INPUT_CLASS
                        prop:value=move || form.comment.get()
                        on:input=move |ev| form.comment.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="md:col-span-2">
                    <InlineErrorMessage error=vm.form_error />
                    <button
                        type="submit"
                        class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Submitting..." } else { "Submit request" }}
                    </button>
                </div>
            </form>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{employee_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn each_missing_date_gets_its_own_message() {
        let html = render_to_string(move || {
            provide_auth(Some(employee_user()));
            let vm = LeaveViewModel::new();
            vm.submit();
            view! { <LeaveRequestForm vm=vm /> }
        });
        assert!(html.contains("Start date is required."));
        assert!(html.contains("End date is required."));
    }
}
