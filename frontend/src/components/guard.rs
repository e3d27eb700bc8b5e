use crate::{components::layout::LoadingSpinner, domain::Role, state::auth::use_auth};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading || state.is_authenticated {
            return;
        }
        redirect("/login");
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Renders children only for signed-in users holding one of `roles`; others
/// are sent to the dashboard.
#[component]
pub fn RequireRole(roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    let has_role = create_memo(move |_| role_allowed(auth.get().role(), roles));
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        if !state.is_authenticated {
            redirect("/login");
        } else if !role_allowed(state.role(), roles) {
            redirect("/dashboard");
        }
    });
    view! {
        <Show
            when=move || should_render_role_children(is_authenticated.get(), is_loading.get(), has_role.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn redirect(target: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(target);
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

fn role_allowed(role: Option<Role>, roles: &[Role]) -> bool {
    role.map(|role| roles.contains(&role)).unwrap_or(false)
}

fn should_render_role_children(is_authenticated: bool, is_loading: bool, has_role: bool) -> bool {
    is_authenticated && has_role && !is_loading
}

#[cfg(test)]
mod tests {
    use super::{role_allowed, should_render_children, should_render_role_children};
    use crate::domain::Role;

    #[test]
    fn guard_blocks_until_authenticated() {
        assert!(!should_render_children(false, true));
        assert!(!should_render_children(false, false));
        assert!(!should_render_children(true, true));
        assert!(should_render_children(true, false));
    }

    #[test]
    fn role_guard_requires_listed_role() {
        let approvers = &[Role::Manager, Role::Admin];
        assert!(role_allowed(Some(Role::Manager), approvers));
        assert!(!role_allowed(Some(Role::Employee), approvers));
        assert!(!role_allowed(None, approvers));
    }

    #[test]
    fn role_guard_blocks_while_loading() {
        assert!(!should_render_role_children(true, true, true));
        assert!(!should_render_role_children(false, false, true));
        assert!(!should_render_role_children(true, false, false));
        assert!(should_render_role_children(true, false, true));
    }
}
