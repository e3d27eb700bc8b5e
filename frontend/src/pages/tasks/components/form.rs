use super::SELECT_CLASS;
use crate::{
    components::{common::ButtonVariant, error::FieldError},
    domain::{Category, TaskPriority, TaskStatus},
    pages::tasks::{
        utils::{TaskField, TITLE_MAX_CHARS},
        view_model::TasksViewModel,
    },
};
use leptos::{ev::SubmitEvent, *};

/// An extra option showing a loaded value the select does not list, so the
/// form displays it instead of silently picking another.
fn unknown_option<C: Category>(raw: String) -> Option<impl IntoView> {
    C::parse(&raw).is_err().then(|| {
        let label = format!("Unknown ({})", raw);
        view! { <option value=raw>{label}</option> }
    })
}

#[component]
pub fn TaskForm(vm: TasksViewModel) -> impl IntoView {
    let form = vm.form;
    let saving = vm.save_action.pending();
    let error_for = move |field: TaskField| {
        Signal::derive(move || vm.field_errors.with(|errors| errors.get(field).map(str::to_string)))
    };
    let is_editing = move || vm.editing.with(Option::is_some);
    let assignees = move || {
        vm.assignees
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    };
    let departments = move || {
        vm.departments
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    };
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">
                {move || if is_editing() { "Edit task" } else { "New task" }}
            </h2>
            <form class="grid grid-cols-1 gap-4 md:grid-cols-2" on:submit=on_submit>
                <label class="block text-sm font-medium text-fg md:col-span-2">
                    "Title"
                    <input
                        type="text"
                        name="title"
                        maxlength=TITLE_MAX_CHARS.to_string()
                        class=SELECT_CLASS
                        prop:value=move || form.title.get()
                        on:input=move |ev| form.title.set(event_target_value(&ev))
                    />
                    <FieldError message=error_for(TaskField::Title) />
                </label>
                <label class="block text-sm font-medium text-fg md:col-span-2">
                    "Description"
                    <textarea
                        name="description"
                        rows="3"
                        class=SELECT_CLASS
                        prop:value=move || form.description.get()
                        on:input=move |ev| form.description.set(event_target_value(&ev))
                    ></textarea>
                    <FieldError message=error_for(TaskField::Description) />
                </label>
                <label class="block text-sm font-medium text-fg">
                    "Assignee"
                    <select
                        name="assignee"
                        class=SELECT_CLASS
                        prop:value=move || form.assignee_id.get()
                        on:change=move |ev| form.assignee_id.set(event_target_value(&ev))
                    >
                        <option value="">"Unassigned"</option>
                        {move || assignees()
                            .into_iter()
                            .map(|user| view! { <option value=user.id.clone()>{user.full_name}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="block text-sm font-medium text-fg">
                    "Department"
                    <select
                        name="department"
                        class=SELECT_CLASS
                        prop:value=move || form.department_id.get()
                        on:change=move |ev| form.department_id.set(event_target_value(&ev))
                    >
                        <option value="">"None"</option>
                        {move || departments()
                            .into_iter()
                            .map(|dept| view! { <option value=dept.id.clone()>{dept.name}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="block text-sm font-medium text-fg">
                    "Due date"
                    <input
                        type="date"
                        name="due_date"
                        class=SELECT_CLASS
                        prop:value=move || form.due_date.get()
                        on:input=move |ev| form.due_date.set(event_target_value(&ev))
                    />
                    <FieldError message=error_for(TaskField::DueDate) />
                </label>
                <label class="block text-sm font-medium text-fg">
                    "Priority"
                    <select
                        name="priority"
                        class=SELECT_CLASS
                        prop:value=move || form.priority.get()
                        on:change=move |ev| form.priority.set(event_target_value(&ev))
                    >
                        {TaskPriority::ALL
                            .iter()
                            .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                            .collect_view()}
                        {move || unknown_option::<TaskPriority>(form.priority.get())}
                    </select>
                    <FieldError message=error_for(TaskField::Priority) />
                </label>
                <label class="block text-sm font-medium text-fg">
                    "Status"
                    <select
                        name="status"
                        class=SELECT_CLASS
                        prop:value=move || form.status.get()
                        on:change=move |ev| form.status.set(event_target_value(&ev))
                    >
                        {TaskStatus::ALL
                            .iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                        {move || unknown_option::<TaskStatus>(form.status.get())}
                    </select>
                    <FieldError message=error_for(TaskField::Status) />
                </label>
                <div class="md:col-span-2 flex gap-2">
                    <button
                        type="submit"
                        class=format!("inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}", ButtonVariant::Primary.classes())
                        disabled=move || saving.get()
                    >
                        {move || match (saving.get(), is_editing()) {
                            (true, _) => "Saving...",
                            (false, true) => "Save changes",
                            (false, false) => "Create task",
                        }}
                    </button>
                    <Show when=is_editing>
                        <button
                            type="button"
                            class=format!("inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold {}", ButtonVariant::Secondary.classes())
                            on:click=move |_| vm.cancel_edit()
                        >
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn unknown_status_is_shown_with_its_field_error() {
        let html = render_to_string(move || {
            let vm = TasksViewModel::new();
            vm.form.title.set("Ship release".into());
            vm.form.description.set("Tag and publish".into());
            vm.form.status.set("blocked".into());
            vm.submit();
            view! { <TaskForm vm=vm /> }
        });
        assert!(html.contains("Unknown (blocked)"));
        assert!(html.contains("Unknown task status"));
        assert!(html.contains("Department"));
    }
}
