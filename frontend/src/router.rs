use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::guard::{RequireAuth, RequireRole},
    domain::Role,
    pages::{
        attendance::AttendancePage, dashboard::DashboardPage, home::HomePage, leave::LeavePage,
        login::LoginPage, messages::MessagesPage, reports::ReportsPage, tasks::TasksPage,
    },
    state::{auth::AuthProvider, flash::FlashProvider},
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/dashboard",
    "/reports",
    "/attendance",
    "/leave",
    "/tasks",
    "/messages",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/reports",
    "/attendance",
    "/leave",
    "/tasks",
    "/messages",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

/// Roles allowed past the reports guard.
pub const REPORT_ROLES: &[Role] = &[Role::Manager, Role::Admin];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_meta_context();
    view! {
        <Title text="Workdesk"/>
        <FlashProvider>
            <AuthProvider>
                <Router>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/login" view=LoginPage/>
                        <Route path="/dashboard" view=ProtectedDashboard/>
                        <Route path="/reports" view=ProtectedReports/>
                        <Route path="/attendance" view=ProtectedAttendance/>
                        <Route path="/leave" view=ProtectedLeave/>
                        <Route path="/tasks" view=ProtectedTasks/>
                        <Route path="/messages" view=ProtectedMessages/>
                    </Routes>
                </Router>
            </AuthProvider>
        </FlashProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedReports() -> impl IntoView {
    view! { <RequireRole roles=REPORT_ROLES><ReportsPage/></RequireRole> }
}

#[component]
fn ProtectedAttendance() -> impl IntoView {
    view! { <RequireAuth><AttendancePage/></RequireAuth> }
}

#[component]
fn ProtectedLeave() -> impl IntoView {
    view! { <RequireAuth><LeavePage/></RequireAuth> }
}

#[component]
fn ProtectedTasks() -> impl IntoView {
    view! { <RequireAuth><TasksPage/></RequireAuth> }
}

#[component]
fn ProtectedMessages() -> impl IntoView {
    view! { <RequireAuth><MessagesPage/></RequireAuth> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::NAV_LINKS;
    use std::collections::HashSet;

    #[test]
    fn every_path_is_either_public_or_protected() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        let split: HashSet<&str> = PROTECTED_ROUTE_PATHS
            .iter()
            .chain(PUBLIC_ROUTE_PATHS)
            .copied()
            .collect();
        assert_eq!(all, split);
        for path in PROTECTED_ROUTE_PATHS {
            assert!(!PUBLIC_ROUTE_PATHS.contains(path), "{} is both", path);
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn nav_links_point_at_protected_routes() {
        for (href, _, _) in NAV_LINKS {
            assert!(PROTECTED_ROUTE_PATHS.contains(href), "{} not routed", href);
        }
    }

    #[test]
    fn reports_are_for_approvers_only() {
        assert!(REPORT_ROLES.iter().all(Role::can_view_reports));
        assert!(!REPORT_ROLES.contains(&Role::Employee));
    }
}
