use crate::{
    components::{common::StatusBadge, empty_state::EmptyState},
    pages::attendance::utils::HistoryRow,
};
use leptos::*;

#[component]
pub fn HistoryTable(#[prop(into)] rows: Signal<Vec<HistoryRow>>) -> impl IntoView {
    view! {
        <Show
            when=move || !rows.with(Vec::is_empty)
            fallback=|| view! { <EmptyState title="No attendance recorded" description="Nothing was recorded for this month." /> }
        >
            <div class="bg-surface-elevated shadow overflow-hidden sm:rounded-lg overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Date"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Check in"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Check out"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For each=move || rows.get() key=|row| row.id.clone() let:row>
                            <tr>
                                <td class="px-4 py-2 text-sm text-fg">{row.date}</td>
                                <td class="px-4 py-2 text-sm">
                                    <StatusBadge label=row.status_label color=row.status_color />
                                </td>
                                <td class="px-4 py-2 text-sm text-fg-muted">{row.check_in}</td>
                                <td class="px-4 py-2 text-sm text-fg-muted">{row.check_out}</td>
                            </tr>
                        </For>
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_rows_with_badges() {
        let html = render_to_string(move || {
            let rows = vec![HistoryRow {
                id: "a1".into(),
                date: "2025-01-02".into(),
                status_label: "Late".into(),
                status_color: "#FF9800".into(),
                check_in: "09:40".into(),
                check_out: "18:00".into(),
            }];
            view! { <HistoryTable rows=Signal::derive(move || rows.clone()) /> }
        });
        assert!(html.contains("2025-01-02"));
        assert!(html.contains("background-color: #FF9800"));
        assert!(html.contains("09:40"));
    }

    #[test]
    fn empty_history_shows_empty_state() {
        let html = render_to_string(move || {
            view! { <HistoryTable rows={Signal::derive(Vec::<HistoryRow>::new)} /> }
        });
        assert!(html.contains("No attendance recorded"));
    }
}
