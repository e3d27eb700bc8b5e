pub mod approvals;
pub mod form;
pub mod my_requests;

pub use approvals::{ApprovalsQueue, DecisionDialog};
pub use form::LeaveRequestForm;
pub use my_requests::MyRequestsList;

use crate::{api::LeaveRequestResponse, domain::Category};

pub(crate) fn type_label(request: &LeaveRequestResponse) -> String {
    request
        .leave_type()
        .map(|kind| kind.label().to_string())
        .or_else(|| request.leave_type.clone())
        .unwrap_or_else(|| "-".into())
}

pub(crate) fn status_badge_parts(request: &LeaveRequestResponse) -> (String, String) {
    match request.status() {
        Some(status) => (status.label().to_string(), status.color().to_string()),
        None => (
            request.status.clone().unwrap_or_else(|| "-".into()),
            "#9E9E9E".to_string(),
        ),
    }
}

pub(crate) fn period_label(request: &LeaveRequestResponse) -> String {
    let days = request.days();
    format!(
        "{} to {} ({} day{})",
        request.start_date.format("%Y-%m-%d"),
        request.end_date.format("%Y-%m-%d"),
        days,
        if days == 1 { "" } else { "s" }
    )
}
