use crate::{
    api::ConversationSummary,
    components::{
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    pages::messages::{utils, view_model::use_messages_view_model},
};
use leptos::*;

#[component]
pub fn ConversationList(conversations: Vec<ConversationSummary>) -> impl IntoView {
    if conversations.is_empty() {
        return view! {
            <EmptyState title="No conversations" description="Messages you receive appear here." />
        }
        .into_view();
    }
    view! {
        <ul class="divide-y divide-border bg-surface-elevated shadow rounded-lg">
            {conversations.into_iter().map(|c| {
                let unread = c.unread_count;
                let preview = utils::preview(&c);
                let name_class = if unread > 0 {
                    "text-sm font-semibold text-fg"
                } else {
                    "text-sm text-fg"
                };
                view! {
                    <li class="flex items-center gap-4 px-4 py-3">
                        <span class="flex h-10 w-10 items-center justify-center rounded-full bg-surface-muted text-sm font-semibold text-fg">
                            {utils::initials(&c.participant)}
                        </span>
                        <div class="min-w-0 flex-1">
                            <p class=name_class>
                                {c.participant}
                            </p>
                            <p class="text-xs text-fg-muted truncate">{preview}</p>
                        </div>
                        <Show when=move || { unread > 0 }>
                            <span class="rounded-full bg-action-primary-bg px-2 py-0.5 text-xs font-semibold text-action-primary-text">
                                {format!("{} new", unread)}
                            </span>
                        </Show>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
    .into_view()
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    let vm = use_messages_view_model();
    let total_unread = vm.total_unread();

    view! {
        <Layout>
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <h1 class="text-2xl font-bold text-fg">"Messages"</h1>
                    <Show when=move || { total_unread.get() > 0 }>
                        <span class="rounded-full bg-action-primary-bg px-2 py-0.5 text-xs font-semibold text-action-primary-text">
                            {move || format!("{} unread", total_unread.get())}
                        </span>
                    </Show>
                </div>
                <Button variant=ButtonVariant::Secondary on:click=move |_| vm.refresh()>
                    "Refresh"
                </Button>
            </div>
            {move || match vm.conversations.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                Some(Ok(list)) => view! { <ConversationList conversations=list /> }.into_view(),
            }}
        </Layout>
    }
}
