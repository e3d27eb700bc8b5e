use crate::{
    api::{ApiError, CreateLeaveRequest, LeaveRequestResponse, UpdateLeaveStatusRequest},
    domain::{leave, Category, LeaveStatus, LeaveType, Role},
    reporting::{adapter, aggregate, ChartRow},
    utils::{time, validation::FieldErrors},
};
use chrono::NaiveDate;
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LeaveField {
    Type,
    StartDate,
    EndDate,
}

pub type LeaveFieldErrors = FieldErrors<LeaveField>;

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    pub leave_type: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub comment: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            leave_type: create_rw_signal(LeaveType::default().as_str().to_string()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            comment: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn to_request(&self) -> Result<CreateLeaveRequest, LeaveFieldErrors> {
        build_leave_request(
            &self.leave_type.get_untracked(),
            &self.start_date.get_untracked(),
            &self.end_date.get_untracked(),
            &self.comment.get_untracked(),
        )
    }

    pub fn reset(&self) {
        self.leave_type
            .set(LeaveType::default().as_str().to_string());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.comment.set(String::new());
    }
}

fn required_date(
    raw: &str,
    field: LeaveField,
    missing: &str,
    malformed: &str,
    errors: &mut LeaveFieldErrors,
) -> Option<NaiveDate> {
    match time::parse_date_input(raw, malformed) {
        Ok(Some(date)) => Some(date),
        Ok(None) => {
            errors.insert(field, missing);
            None
        }
        Err(message) => {
            errors.insert(field, message);
            None
        }
    }
}

/// Checks every field and reports each failing one.
pub fn build_leave_request(
    leave_type: &str,
    start: &str,
    end: &str,
    comment: &str,
) -> Result<CreateLeaveRequest, LeaveFieldErrors> {
    let mut errors = LeaveFieldErrors::default();
    let leave_type = match LeaveType::parse(leave_type) {
        Ok(kind) => Some(kind),
        Err(err) => {
            errors.insert(LeaveField::Type, format!("Unknown {} \"{}\".", err.kind, err.value));
            None
        }
    };
    let start_date = required_date(
        start,
        LeaveField::StartDate,
        "Start date is required.",
        "Start date must be YYYY-MM-DD.",
        &mut errors,
    );
    let end_date = required_date(
        end,
        LeaveField::EndDate,
        "End date is required.",
        "End date must be YYYY-MM-DD.",
        &mut errors,
    );
    let (Some(leave_type), Some(start_date), Some(end_date)) = (leave_type, start_date, end_date) else {
        return Err(errors);
    };
    if end_date < start_date {
        errors.insert(LeaveField::EndDate, "End date must be on or after start date.");
    }
    let comment = comment.trim();
    errors.into_result(CreateLeaveRequest {
        leave_type,
        start_date,
        end_date,
        comment: (!comment.is_empty()).then(|| comment.to_string()),
    })
}

/// The queue each approver works from: managers see pending requests,
/// admins see the ones a manager already approved.
pub fn queue_status(role: Option<Role>) -> Option<LeaveStatus> {
    match role? {
        Role::Manager => Some(LeaveStatus::Pending),
        Role::Admin => Some(LeaveStatus::ManagerApproved),
        Role::Employee => None,
    }
}

pub fn decision_label(target: LeaveStatus) -> &'static str {
    match target {
        LeaveStatus::ManagerApproved => "Approve",
        LeaveStatus::Approved => "Final approve",
        LeaveStatus::Rejected => "Reject",
        LeaveStatus::Pending => "Reopen",
    }
}

/// Buttons for one queue row; empty for roles or statuses with no moves.
pub fn decision_targets(role: Option<Role>, request: &LeaveRequestResponse) -> Vec<LeaveStatus> {
    match (role, request.status()) {
        (Some(role), Some(current)) => leave::available_transitions(role, current),
        _ => Vec::new(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Decision {
    pub request: LeaveRequestResponse,
    pub target: LeaveStatus,
    pub comment: String,
}

/// Checks the workflow before anything is sent and builds the status update.
pub fn build_decision(role: Option<Role>, decision: &Decision) -> Result<UpdateLeaveStatusRequest, ApiError> {
    let role = role.ok_or_else(|| ApiError::validation("Sign in again to review requests."))?;
    let raw = decision.request.status.clone().unwrap_or_default();
    let current = LeaveStatus::parse(&raw)?;
    let status = leave::check_transition(role, current, decision.target)?;
    let comment = decision.comment.trim();
    Ok(UpdateLeaveStatusRequest {
        status,
        comment: (!comment.is_empty()).then(|| comment.to_string()),
    })
}

pub fn can_cancel(user_id: Option<&str>, request: &LeaveRequestResponse) -> bool {
    let is_requester = user_id == Some(request.requester_id.as_str());
    request
        .status()
        .map(|status| leave::can_cancel(is_requester, status))
        .unwrap_or(false)
}

pub fn type_rows(requests: &[LeaveRequestResponse]) -> Vec<ChartRow> {
    adapter::pie_rows(&aggregate::leave_by_type(requests))
}

pub fn type_colors() -> Vec<String> {
    adapter::category_colors::<LeaveType>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request(status: &str) -> LeaveRequestResponse {
        LeaveRequestResponse {
            id: "l1".into(),
            leave_type: Some("sick".into()),
            start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
            status: Some(status.into()),
            requester_id: "u-employee".into(),
            requester_name: Some("Erin Employee".into()),
            approver_id: None,
            comment: None,
            created_at: None,
        }
    }

    fn decision(status: &str, target: LeaveStatus) -> Decision {
        Decision {
            request: request(status),
            target,
            comment: String::new(),
        }
    }

    #[test]
    fn form_requires_ordered_dates() {
        let reversed = build_leave_request("annual", "2025-04-03", "2025-04-01", "").unwrap_err();
        assert_eq!(reversed.fields(), vec![LeaveField::EndDate]);
        assert_eq!(
            reversed.get(LeaveField::EndDate),
            Some("End date must be on or after start date.")
        );

        let unknown = build_leave_request("sabbatical", "2025-04-01", "2025-04-01", "").unwrap_err();
        assert_eq!(unknown.get(LeaveField::Type), Some("Unknown leave type \"sabbatical\"."));

        let ok = build_leave_request("personal", "2025-04-01", "2025-04-01", "  moving  ").unwrap();
        assert_eq!(ok.leave_type, LeaveType::Personal);
        assert_eq!(ok.comment.as_deref(), Some("moving"));
    }

    #[test]
    fn both_missing_dates_are_reported_together() {
        let errors = build_leave_request("annual", "", "", "").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(LeaveField::StartDate), Some("Start date is required."));
        assert_eq!(errors.get(LeaveField::EndDate), Some("End date is required."));
        assert_eq!(errors.get(LeaveField::Type), None);

        let mixed = build_leave_request("nap", "04/01/2025", "", "").unwrap_err();
        assert_eq!(
            mixed.fields(),
            vec![LeaveField::Type, LeaveField::StartDate, LeaveField::EndDate]
        );
        assert_eq!(mixed.get(LeaveField::StartDate), Some("Start date must be YYYY-MM-DD."));
    }

    #[test]
    fn manager_then_admin_approval_flow() {
        let first = build_decision(Some(Role::Manager), &decision("pending", LeaveStatus::ManagerApproved))
            .unwrap();
        assert_eq!(first.status, LeaveStatus::ManagerApproved);

        let second = build_decision(
            Some(Role::Admin),
            &decision("manager-approved", LeaveStatus::Approved),
        )
        .unwrap();
        assert_eq!(second.status, LeaveStatus::Approved);

        let skipped = build_decision(Some(Role::Admin), &decision("pending", LeaveStatus::Approved))
            .unwrap_err();
        assert_eq!(skipped.code, "FORBIDDEN_TRANSITION");
        assert!(skipped.error.contains("manager"));
    }

    #[test]
    fn unknown_current_status_is_a_validation_error() {
        let err = build_decision(Some(Role::Manager), &decision("escalated", LeaveStatus::Rejected))
            .unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
    }

    #[test]
    fn queue_rows_offer_role_specific_buttons() {
        assert_eq!(
            decision_targets(Some(Role::Manager), &request("pending")),
            vec![LeaveStatus::ManagerApproved, LeaveStatus::Rejected]
        );
        assert_eq!(
            decision_targets(Some(Role::Admin), &request("manager-approved")),
            vec![LeaveStatus::Approved, LeaveStatus::Rejected]
        );
        assert!(decision_targets(Some(Role::Admin), &request("pending")).is_empty());
        assert!(decision_targets(None, &request("pending")).is_empty());
        assert_eq!(queue_status(Some(Role::Employee)), None);
        assert_eq!(queue_status(Some(Role::Admin)), Some(LeaveStatus::ManagerApproved));
    }

    #[test]
    fn only_requester_cancels_open_requests() {
        assert!(can_cancel(Some("u-employee"), &request("pending")));
        assert!(can_cancel(Some("u-employee"), &request("manager-approved")));
        assert!(!can_cancel(Some("u-employee"), &request("approved")));
        assert!(!can_cancel(Some("u-manager"), &request("pending")));
        assert!(!can_cancel(None, &request("pending")));
    }

    #[test]
    fn comments_are_trimmed_and_optional() {
        let mut d = decision("pending", LeaveStatus::Rejected);
        d.comment = "  overlaps release  ".into();
        let body = build_decision(Some(Role::Manager), &d).unwrap();
        assert_eq!(body.comment.as_deref(), Some("overlaps release"));
        assert_eq!(decision_label(LeaveStatus::Rejected), "Reject");
    }

    #[test]
    fn type_rows_cover_every_leave_type() {
        let rows = type_rows(&[request("pending"), request("approved")]);
        assert_eq!(rows.len(), LeaveType::ALL.len());
        let sick = rows
            .iter()
            .find(|row| row.key == LeaveType::Sick.label())
            .unwrap();
        assert_eq!(sick.value(crate::reporting::DEFAULT_SERIES_KEY), 2.0);
        assert_eq!(type_colors().len(), rows.len());
    }
}
