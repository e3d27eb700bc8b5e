use crate::{
    components::{
        confirm_dialog::{ConfirmDialog, ConfirmTone},
        layout::Layout,
    },
    pages::tasks::{
        components::{TaskFilters, TaskForm, TaskList},
        view_model::use_tasks_view_model,
    },
};
use leptos::*;

#[component]
pub fn TasksPage() -> impl IntoView {
    let vm = use_tasks_view_model();
    let deleting = vm.delete_action.pending();
    let delete_open = Signal::derive(move || vm.pending_delete.with(Option::is_some));
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .with(|task| task.as_ref().map(|t| format!("Delete \"{}\"? This cannot be undone.", t.title)))
            .unwrap_or_default()
    });

    view! {
        <Layout>
            <div>
                <h1 class="text-2xl font-bold text-fg">"Tasks"</h1>
                <p class="mt-1 text-sm text-fg-muted">"Plan, assign and track work"</p>
            </div>
            <TaskForm vm=vm />
            <TaskFilters filter=vm.filter />
            <TaskList vm=vm />
            <ConfirmDialog
                is_open=delete_open
                title="Delete task"
                message=delete_message
                confirm_label="Delete"
                busy=Signal::derive(move || deleting.get())
                tone=ConfirmTone::Destructive
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.dismiss_delete())
            />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{employee_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn tasks_page_renders_form_filters_and_empty_list() {
        let html = render_to_string(move || {
            provide_auth(Some(employee_user()));
            view! { <TasksPage /> }
        });
        assert!(html.contains("New task"));
        assert!(html.contains("Any priority"));
        assert!(html.contains("No tasks"));
        assert!(!html.contains("Delete task"));
    }
}
