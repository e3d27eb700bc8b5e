use crate::api::{ApiClient, ApiError, AttendanceRecord};
use chrono::NaiveDate;
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.get_my_attendance(from, to).await
    }
}
