use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{
    AttendanceStatus, Category, LeaveStatus, LeaveType, Role, TaskPriority, TaskStatus,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserResponse,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub role: String,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl UserResponse {
    /// `None` for roles this client does not know, which grants nothing.
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub department_id: Option<String>,
    pub date: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
}

impl AttendanceRecord {
    pub fn status(&self) -> Option<AttendanceStatus> {
        self.status
            .as_deref()
            .and_then(|s| AttendanceStatus::parse(s).ok())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceReportResponse {
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequestResponse {
    pub id: String,
    #[serde(default)]
    pub leave_type: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: Option<String>,
    pub requester_id: String,
    #[serde(default)]
    pub requester_name: Option<String>,
    #[serde(default)]
    pub approver_id: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl LeaveRequestResponse {
    pub fn status(&self) -> Option<LeaveStatus> {
        self.status.as_deref().and_then(|s| LeaveStatus::parse(s).ok())
    }

    pub fn leave_type(&self) -> Option<LeaveType> {
        self.leave_type
            .as_deref()
            .and_then(|s| LeaveType::parse(s).ok())
    }

    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLeaveRequest {
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateLeaveStatusRequest {
    pub status: LeaveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResponse {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub assignee_name: Option<String>,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl TaskResponse {
    pub fn status(&self) -> Option<TaskStatus> {
        self.status.as_deref().and_then(|s| TaskStatus::parse(s).ok())
    }

    pub fn priority(&self) -> Option<TaskPriority> {
        self.priority
            .as_deref()
            .and_then(|s| TaskPriority::parse(s).ok())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPayload {
    pub title: String,
    pub description: String,
    pub assignee_id: Option<String>,
    pub department_id: Option<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee_id: Option<String>,
}

impl TaskQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(priority) = self.priority {
            params.push(("priority", priority.as_str().to_string()));
        }
        if let Some(assignee) = self.assignee_id.as_deref().filter(|s| !s.is_empty()) {
            params.push(("assignee_id", assignee.to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: String,
    pub participant: String,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub unread_count: u32,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportQuery {
    pub department_id: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ReportQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(dept) = self.department_id.as_deref().filter(|s| !s.is_empty()) {
            params.push(("department_id", dept.to_string()));
        }
        if let Some(from) = self.from {
            params.push(("from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to {
            params.push(("to", to.format("%Y-%m-%d").to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    /// Used when the server answered with an error status but no readable body.
    pub fn http_status(status: u16) -> Self {
        Self {
            error: format!("Server responded with status {}", status),
            code: format!("HTTP_{}", status),
            details: None,
        }
    }

    pub fn is_network(&self) -> bool {
        self.code == "REQUEST_FAILED"
    }
}

impl From<crate::domain::TransitionError> for ApiError {
    fn from(err: crate::domain::TransitionError) -> Self {
        Self {
            error: err.to_string(),
            code: "FORBIDDEN_TRANSITION".to_string(),
            details: None,
        }
    }
}

impl From<crate::domain::UnknownVariant> for ApiError {
    fn from(err: crate::domain::UnknownVariant) -> Self {
        Self::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn serialize_create_leave_request_snake_case_fields() {
        let req = CreateLeaveRequest {
            leave_type: LeaveType::Sick,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            comment: None,
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["leave_type"], serde_json::json!("sick"));
        assert_eq!(v["start_date"], serde_json::json!("2025-01-02"));
        assert_eq!(v["end_date"], serde_json::json!("2025-01-03"));
        assert!(v["comment"].is_null());
    }

    #[wasm_bindgen_test]
    fn status_update_omits_missing_comment() {
        let body = UpdateLeaveStatusRequest {
            status: LeaveStatus::ManagerApproved,
            comment: None,
        };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["status"], serde_json::json!("manager-approved"));
        assert!(v.get("comment").is_none());
    }

    #[wasm_bindgen_test]
    fn leave_request_tolerates_unknown_status() {
        let raw = r#"{
            "id": "l1",
            "leave_type": "sabbatical",
            "start_date": "2025-03-03",
            "end_date": "2025-03-05",
            "status": "escalated",
            "requester_id": "u1"
        }"#;
        let leave: LeaveRequestResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(leave.status(), None);
        assert_eq!(leave.leave_type(), None);
        assert_eq!(leave.days(), 3);
    }
}
