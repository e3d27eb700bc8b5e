use crate::api::{
    ApiClient, ApiError, AttendanceRecord, Department, ExportFile, ReportQuery, TaskQuery,
    TaskResponse, UserResponse,
};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub attendance: Vec<AttendanceRecord>,
    pub tasks: Vec<TaskResponse>,
    pub users: Vec<UserResponse>,
}

#[derive(Clone)]
pub struct ReportsRepository {
    client: Rc<ApiClient>,
}

impl ReportsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.client.list_departments().await
    }

    /// Tasks carry no server-side department filter, so they are narrowed
    /// here when a department is selected.
    pub async fn load(&self, query: &ReportQuery) -> Result<ReportData, ApiError> {
        let department = query.department_id.as_deref().filter(|id| !id.is_empty());
        let report = self.client.get_attendance_report(query).await?;
        let tasks = self
            .client
            .list_tasks(&TaskQuery::default())
            .await?
            .into_iter()
            .filter(|task| department.is_none() || task.department_id.as_deref() == department)
            .collect();
        let users = self.client.list_users(department).await?;
        Ok(ReportData {
            attendance: report.records,
            tasks,
            users,
        })
    }

    pub async fn export(&self, query: &ReportQuery) -> Result<ExportFile, ApiError> {
        self.client.export_attendance_report(query).await
    }
}
