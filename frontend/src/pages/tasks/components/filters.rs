use super::SELECT_CLASS;
use crate::{
    domain::{Category, TaskPriority, TaskStatus},
    pages::tasks::utils::TaskFilterState,
};
use leptos::*;

fn options<C: Category>() -> impl IntoView {
    C::ALL
        .iter()
        .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
        .collect_view()
}

#[component]
pub fn TaskFilters(filter: TaskFilterState) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
            <label class="block text-sm font-medium text-fg">
                "Status"
                <select
                    name="status-filter"
                    class=SELECT_CLASS
                    prop:value=move || filter.status.get()
                    on:change=move |ev| filter.status.set(event_target_value(&ev))
                >
                    <option value="">"Any status"</option>
                    {options::<TaskStatus>()}
                </select>
            </label>
            <label class="block text-sm font-medium text-fg">
                "Priority"
                <select
                    name="priority-filter"
                    class=SELECT_CLASS
                    prop:value=move || filter.priority.get()
                    on:change=move |ev| filter.priority.set(event_target_value(&ev))
                >
                    <option value="">"Any priority"</option>
                    {options::<TaskPriority>()}
                </select>
            </label>
        </div>
    }
}
