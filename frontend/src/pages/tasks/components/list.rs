use crate::{
    api::TaskResponse,
    components::{
        common::StatusBadge,
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    domain::Category,
    pages::tasks::{utils, view_model::TasksViewModel},
};
use leptos::*;

fn badge<C: Category>(parsed: Option<C>, raw: &Option<String>) -> impl IntoView {
    let (label, color) = match parsed {
        Some(c) => (c.label().to_string(), c.color().to_string()),
        None => (raw.clone().unwrap_or_else(|| "-".into()), "#9E9E9E".to_string()),
    };
    view! { <StatusBadge label=label color=color /> }
}

#[component]
pub fn TaskList(vm: TasksViewModel) -> impl IntoView {
    let deleting = vm.delete_action.pending();
    let row = move |task: TaskResponse| {
        let for_edit = task.clone();
        let for_delete = task.clone();
        view! {
            <tr>
                <td class="px-4 py-3 text-sm text-fg">
                    <p class="font-medium">{task.title.clone()}</p>
                    <p class="text-xs text-fg-muted truncate max-w-xs">{task.description.clone()}</p>
                </td>
                <td class="px-4 py-3 text-sm text-fg-muted">{utils::assignee_label(&task)}</td>
                <td class="px-4 py-3">{badge(task.priority(), &task.priority)}</td>
                <td class="px-4 py-3">{badge(task.status(), &task.status)}</td>
                <td class="px-4 py-3 text-sm text-fg-muted">{utils::due_label(&task)}</td>
                <td class="px-4 py-3 text-right text-sm space-x-3">
                    <button
                        type="button"
                        class="text-action-primary-bg hover:underline"
                        on:click=move |_| vm.edit(&for_edit)
                    >
                        "Edit"
                    </button>
                    <button
                        type="button"
                        class="text-action-danger-bg hover:underline disabled:opacity-50"
                        disabled=move || deleting.get()
                        on:click=move |_| vm.ask_delete(for_delete.clone())
                    >
                        "Delete"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <section class="bg-surface-elevated shadow rounded-lg overflow-hidden">
            {move || {
                if let Some(err) = vm.error.get() {
                    return view! { <div class="p-4"><ErrorMessage message=err.error /></div> }.into_view();
                }
                if vm.loading.get() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                let tasks = vm.tasks.get();
                if tasks.is_empty() {
                    return view! {
                        <div class="p-4">
                            <EmptyState title="No tasks" description="Tasks matching the filters appear here." />
                        </div>
                    }.into_view();
                }
                view! {
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Task"</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Assignee"</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Priority"</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Due"</th>
                                <th class="px-4 py-2"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {tasks.into_iter().map(row).collect_view()}
                        </tbody>
                    </table>
                }.into_view()
            }}
        </section>
    }
}
