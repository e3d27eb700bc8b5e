use super::{
    client::ApiClient,
    types::{ApiError, TaskPayload, TaskQuery, TaskResponse},
};

impl ApiClient {
    pub async fn list_tasks(&self, query: &TaskQuery) -> Result<Vec<TaskResponse>, ApiError> {
        self.get_json("/tasks", &query.to_params()).await
    }

    pub async fn create_task(&self, payload: &TaskPayload) -> Result<TaskResponse, ApiError> {
        let url = self.endpoint("/tasks").await;
        let response = self.send(self.http_client().post(url).json(payload)).await?;
        self.map_json_response(response).await
    }

    pub async fn update_task(&self, id: &str, payload: &TaskPayload) -> Result<TaskResponse, ApiError> {
        let url = self.endpoint(&format!("/tasks/{}", id)).await;
        let response = self.send(self.http_client().put(url).json(payload)).await?;
        self.map_json_response(response).await
    }

    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/tasks/{}", id)).await;
        let response = self.send(self.http_client().delete(url)).await?;
        self.map_empty_response(response).await
    }
}
