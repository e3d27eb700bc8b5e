use crate::{
    api::{
        ApiClient, ApiError, AttendanceRecord, ConversationSummary, LeaveRequestResponse,
        TaskQuery, TaskResponse, UserResponse,
    },
    domain::Role,
    utils::time,
};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Everything the dashboard aggregates, fetched in one pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub attendance: Vec<AttendanceRecord>,
    pub tasks: Vec<TaskResponse>,
    pub leave_requests: Vec<LeaveRequestResponse>,
    pub users: Vec<UserResponse>,
    pub conversations: Vec<ConversationSummary>,
}

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Approvers see every leave request, everyone else only their own.
    pub async fn fetch(&self, role: Option<Role>) -> Result<DashboardData, ApiError> {
        let (from, to) = time::month_bounds(time::today())
            .ok_or_else(|| ApiError::unknown("Could not determine the current month"))?;
        let attendance = self.client.get_my_attendance(from, to).await?;
        let tasks = self.client.list_tasks(&TaskQuery::default()).await?;
        let leave_requests = if role.map(|r| r.is_approver()).unwrap_or(false) {
            self.client.list_leave_requests(None).await?
        } else {
            self.client.list_my_leave_requests().await?
        };
        let users = self.client.list_users(None).await?;
        let conversations = self.client.list_conversations().await?;
        Ok(DashboardData {
            attendance,
            tasks,
            leave_requests,
            users,
            conversations,
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn mock_common(server: &MockServer) {
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/me");
            then.status(200).json_body(json!([
                {"id": "a1", "user_id": "u1", "date": "2025-01-02", "status": "present"}
            ]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/tasks");
            then.status(200).json_body(json!([]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/users");
            then.status(200).json_body(json!([]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/messages/conversations");
            then.status(200).json_body(json!([]));
        });
    }

    #[tokio::test]
    async fn employees_load_only_their_leave_requests() {
        let server = MockServer::start_async().await;
        mock_common(&server);
        server.mock(|when, then| {
            when.method(GET).path("/api/leave-requests/me");
            then.status(200).json_body(json!([]));
        });
        let repo = DashboardRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        let data = repo.fetch(Some(Role::Employee)).await.unwrap();
        assert_eq!(data.attendance.len(), 1);
        assert!(server
            .received()
            .iter()
            .any(|req| req.path == "/api/leave-requests/me"));
    }

    #[tokio::test]
    async fn approvers_load_all_leave_requests() {
        let server = MockServer::start_async().await;
        mock_common(&server);
        server.mock(|when, then| {
            when.method(GET).path("/api/leave-requests");
            then.status(200).json_body(json!([]));
        });
        let repo = DashboardRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        repo.fetch(Some(Role::Manager)).await.unwrap();
        assert!(server
            .received()
            .iter()
            .any(|req| req.path == "/api/leave-requests"));
    }
}
