use super::{
    client::ApiClient,
    types::{ApiError, AttendanceReportResponse, ExportFile, ReportQuery},
};

fn validate(query: &ReportQuery) -> Result<(), ApiError> {
    match (query.from, query.to) {
        (Some(from), Some(to)) if from > to => Err(ApiError::validation(
            "Start date must be on or before end date",
        )),
        _ => Ok(()),
    }
}

impl ApiClient {
    pub async fn get_attendance_report(
        &self,
        query: &ReportQuery,
    ) -> Result<AttendanceReportResponse, ApiError> {
        validate(query)?;
        self.get_json("/reports/attendance", &query.to_params())
            .await
    }

    pub async fn export_attendance_report(&self, query: &ReportQuery) -> Result<ExportFile, ApiError> {
        validate(query)?;
        let url = self.endpoint("/reports/attendance/export").await;
        let params = query.to_params();
        let mut request = self.http_client().get(url);
        if !params.is_empty() {
            request = request.query(&params);
        }
        let response = self.send(request).await?;
        self.map_file_response(response).await
    }
}
