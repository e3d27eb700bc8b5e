use crate::api::{
    ApiClient, ApiError, CreateLeaveRequest, LeaveRequestResponse, UpdateLeaveStatusRequest,
};
use crate::domain::LeaveStatus;
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveRepository {
    client: Rc<ApiClient>,
}

impl LeaveRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_mine(&self) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        self.client.list_my_leave_requests().await
    }

    pub async fn list_queue(
        &self,
        status: LeaveStatus,
    ) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        self.client.list_leave_requests(Some(status)).await
    }

    pub async fn submit(
        &self,
        request: &CreateLeaveRequest,
    ) -> Result<LeaveRequestResponse, ApiError> {
        self.client.create_leave_request(request).await
    }

    pub async fn decide(
        &self,
        id: &str,
        body: &UpdateLeaveStatusRequest,
    ) -> Result<LeaveRequestResponse, ApiError> {
        self.client.update_leave_status(id, body).await
    }

    pub async fn cancel(&self, id: &str) -> Result<(), ApiError> {
        self.client.cancel_leave_request(id).await
    }
}
