use crate::api::{ApiClient, ApiError, Department, TaskPayload, TaskQuery, TaskResponse, UserResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct TasksRepository {
    client: Rc<ApiClient>,
}

impl TasksRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &TaskQuery) -> Result<Vec<TaskResponse>, ApiError> {
        self.client.list_tasks(query).await
    }

    pub async fn assignees(&self) -> Result<Vec<UserResponse>, ApiError> {
        let users = self.client.list_users(None).await?;
        Ok(users.into_iter().filter(|user| user.active).collect())
    }

    pub async fn departments(&self) -> Result<Vec<Department>, ApiError> {
        self.client.list_departments().await
    }

    /// Creates when `id` is `None`, updates otherwise.
    pub async fn save(&self, id: Option<&str>, payload: &TaskPayload) -> Result<TaskResponse, ApiError> {
        match id {
            Some(id) => self.client.update_task(id, payload).await,
            None => self.client.create_task(payload).await,
        }
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_task(id).await
    }
}
