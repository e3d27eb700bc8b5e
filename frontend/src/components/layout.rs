use crate::{
    domain::Category,
    state::{
        auth::{self, use_auth},
        flash::{use_flash, FlashKind},
    },
};
use leptos::*;

const NAV_LINK_CLASS: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

/// Navigation entries; the `bool` marks links shown only to approvers.
pub const NAV_LINKS: &[(&str, &str, bool)] = &[
    ("/dashboard", "Dashboard", false),
    ("/attendance", "Attendance", false),
    ("/leave", "Leave", false),
    ("/tasks", "Tasks", false),
    ("/messages", "Messages", false),
    ("/reports", "Reports", true),
];

fn visible_links(can_view_reports: bool) -> Vec<(&'static str, &'static str)> {
    NAV_LINKS
        .iter()
        .filter(|(_, _, approver_only)| !approver_only || can_view_reports)
        .map(|(href, label, _)| (*href, *label))
        .collect()
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let can_view_reports = move || {
        auth.get()
            .role()
            .map(|role| role.can_view_reports())
            .unwrap_or(false)
    };
    let user_caption = move || {
        auth.get().user.map(|user| {
            let role = user
                .role()
                .map(|role| role.label().to_string())
                .unwrap_or(user.role.clone());
            format!("{} ({})", user.full_name, role)
        })
    };
    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href("/login");
            }
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        set_menu_open.set(false);
        logout_action.dispatch(());
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-4">
                        <h1 class="text-xl font-semibold text-fg">"Workdesk"</h1>
                        <span class="hidden md:inline text-sm text-fg-muted">{user_caption}</span>
                    </div>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex space-x-4">
                            {move || visible_links(can_view_reports())
                                .into_iter()
                                .map(|(href, label)| view! { <a href=href class=NAV_LINK_CLASS>{label}</a> })
                                .collect_view()}
                            <button
                                on:click=on_logout
                                class=format!("{} disabled:opacity-50", NAV_LINK_CLASS)
                                disabled=move || logout_pending.get()
                            >
                                "Sign out"
                            </button>
                        </nav>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get().to_string()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <i class="fas fa-bars"></i>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {move || visible_links(can_view_reports())
                                .into_iter()
                                .map(|(href, label)| view! {
                                    <a
                                        href=href
                                        class=format!("block {}", NAV_LINK_CLASS)
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {label}
                                    </a>
                                })
                                .collect_view()}
                            <button
                                on:click=on_logout
                                class=format!("w-full text-left {} disabled:opacity-50", NAV_LINK_CLASS)
                                disabled=move || logout_pending.get()
                            >
                                "Sign out"
                            </button>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8 space-y-6">
                <FlashBanner/>
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn FlashBanner() -> impl IntoView {
    let flash = use_flash();
    let current = flash.current();
    view! {
        {move || current.get().map(|message| match message.kind {
            FlashKind::Success => view! { <SuccessMessage message=message.text /> },
            FlashKind::Error => view! { <ErrorMessage message=message.text /> },
        })}
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" role="alert">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4" role="status">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::flash::FlashState;
    use crate::test_support::helpers::{admin_user, employee_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_shows_reports_for_admin() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <Header /> }
        });
        assert!(html.contains("href=\"/reports\""));
        assert!(html.contains("Administrator"));
    }

    #[test]
    fn header_hides_reports_for_employee() {
        let html = render_to_string(move || {
            provide_auth(Some(employee_user()));
            view! { <Header /> }
        });
        assert!(!html.contains("href=\"/reports\""));
        assert!(html.contains("href=\"/tasks\""));
    }

    #[test]
    fn layout_renders_children_and_flash() {
        let html = render_to_string(move || {
            provide_auth(Some(employee_user()));
            let flash = FlashState::new();
            provide_context(flash);
            flash.success("Task saved");
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
        assert!(html.contains("Task saved"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error" />
                    <SuccessMessage message="ok" />
                </div>
            }
        });
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }
}
