use super::{
    client::ApiClient,
    types::{ApiError, Department, UserResponse},
};

impl ApiClient {
    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.get_json("/departments", &[]).await
    }

    pub async fn list_users(&self, department_id: Option<&str>) -> Result<Vec<UserResponse>, ApiError> {
        let mut params = Vec::new();
        if let Some(id) = department_id.filter(|id| !id.is_empty()) {
            params.push(("department_id", id.to_string()));
        }
        self.get_json("/users", &params).await
    }
}
