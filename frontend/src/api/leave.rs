use super::{
    client::ApiClient,
    types::{ApiError, CreateLeaveRequest, LeaveRequestResponse, UpdateLeaveStatusRequest},
};
use crate::domain::{Category, LeaveStatus};

impl ApiClient {
    pub async fn list_my_leave_requests(&self) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        self.get_json("/leave-requests/me", &[]).await
    }

    pub async fn list_leave_requests(
        &self,
        status: Option<LeaveStatus>,
    ) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        let mut params = Vec::new();
        if let Some(status) = status {
            params.push(("status", status.as_str().to_string()));
        }
        self.get_json("/leave-requests", &params).await
    }

    pub async fn create_leave_request(
        &self,
        request: &CreateLeaveRequest,
    ) -> Result<LeaveRequestResponse, ApiError> {
        if request.end_date < request.start_date {
            return Err(ApiError::validation("End date must be on or after start date"));
        }
        let url = self.endpoint("/leave-requests").await;
        let response = self.send(self.http_client().post(url).json(request)).await?;
        self.map_json_response(response).await
    }

    pub async fn update_leave_status(
        &self,
        id: &str,
        body: &UpdateLeaveStatusRequest,
    ) -> Result<LeaveRequestResponse, ApiError> {
        let url = self.endpoint(&format!("/leave-requests/{}/status", id)).await;
        let response = self.send(self.http_client().put(url).json(body)).await?;
        self.map_json_response(response).await
    }

    pub async fn cancel_leave_request(&self, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/leave-requests/{}", id)).await;
        let response = self.send(self.http_client().delete(url)).await?;
        self.map_empty_response(response).await
    }
}
