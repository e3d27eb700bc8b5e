use chrono::NaiveDate;

use super::{
    client::ApiClient,
    types::{ApiError, AttendanceRecord},
};

impl ApiClient {
    pub async fn get_my_attendance(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        if from > to {
            return Err(ApiError::validation("Start date must be on or before end date"));
        }
        let params = [
            ("from", from.format("%Y-%m-%d").to_string()),
            ("to", to.format("%Y-%m-%d").to_string()),
        ];
        self.get_json("/attendance/me", &params).await
    }
}
