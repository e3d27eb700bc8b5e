use super::repository::DashboardData;
use crate::{
    domain::{AttendanceStatus, LeaveStatus},
    reporting::{adapter, aggregate, ChartRow},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub employees: usize,
    pub open_tasks: u32,
    pub pending_leave: u32,
    pub unread_messages: u32,
}

pub fn summarize(data: &DashboardData) -> DashboardSummary {
    let tasks = aggregate::tasks_by_status(&data.tasks);
    let leave = aggregate::leave_by_status(&data.leave_requests);
    DashboardSummary {
        employees: data.users.iter().filter(|user| user.active).count(),
        open_tasks: tasks
            .iter()
            .filter(|(status, _)| status.is_open())
            .map(|(_, count)| count)
            .sum(),
        pending_leave: leave
            .iter()
            .filter(|(status, _)| !status.is_terminal())
            .map(|(_, count)| count)
            .sum(),
        unread_messages: data.conversations.iter().map(|c| c.unread_count).sum(),
    }
}

pub fn attendance_rows(data: &DashboardData) -> Vec<ChartRow> {
    adapter::pie_rows(&aggregate::attendance_by_status(&data.attendance))
}

pub fn task_status_rows(data: &DashboardData) -> Vec<ChartRow> {
    adapter::to_rows(&aggregate::tasks_by_status(&data.tasks))
}

pub fn leave_status_rows(data: &DashboardData) -> Vec<ChartRow> {
    adapter::pie_rows(&aggregate::leave_by_status(&data.leave_requests))
}

pub fn attendance_colors() -> Vec<String> {
    adapter::category_colors::<AttendanceStatus>()
}

pub fn leave_status_colors() -> Vec<String> {
    adapter::category_colors::<LeaveStatus>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ConversationSummary, LeaveRequestResponse, TaskResponse, UserResponse};
    use crate::domain::{Category, TaskStatus};
    use crate::reporting::DEFAULT_SERIES_KEY;
    use chrono::NaiveDate;

    fn task(status: &str) -> TaskResponse {
        TaskResponse {
            id: status.into(),
            title: "t".into(),
            description: "d".into(),
            assignee_id: None,
            assignee_name: None,
            department_id: None,
            priority: None,
            status: Some(status.into()),
            due_date: None,
        }
    }

    fn leave(status: &str) -> LeaveRequestResponse {
        let day = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        LeaveRequestResponse {
            id: status.into(),
            leave_type: Some("annual".into()),
            start_date: day,
            end_date: day,
            status: Some(status.into()),
            requester_id: "u1".into(),
            requester_name: None,
            approver_id: None,
            comment: None,
            created_at: None,
        }
    }

    fn user(active: bool) -> UserResponse {
        UserResponse {
            id: "u".into(),
            username: "u".into(),
            full_name: "U".into(),
            role: "employee".into(),
            department_id: None,
            active,
        }
    }

    #[test]
    fn summary_counts_open_work() {
        let data = DashboardData {
            tasks: vec![task("todo"), task("in-review"), task("done"), task("archived")],
            leave_requests: vec![
                leave("pending"),
                leave("manager-approved"),
                leave("approved"),
                leave("rejected"),
            ],
            users: vec![user(true), user(true), user(false)],
            conversations: vec![ConversationSummary {
                id: "c1".into(),
                participant: "Bob".into(),
                last_message: None,
                unread_count: 3,
                updated_at: None,
            }],
            ..DashboardData::default()
        };
        assert_eq!(
            summarize(&data),
            DashboardSummary {
                employees: 2,
                open_tasks: 2,
                pending_leave: 2,
                unread_messages: 3,
            }
        );
    }

    #[test]
    fn empty_data_yields_seeded_chart_rows() {
        let data = DashboardData::default();
        let rows = task_status_rows(&data);
        assert_eq!(rows.len(), TaskStatus::ALL.len());
        assert!(rows.iter().all(|row| row.value(DEFAULT_SERIES_KEY) == 0.0));
        assert_eq!(attendance_colors().len(), attendance_rows(&data).len());
        assert_eq!(leave_status_colors().len(), leave_status_rows(&data).len());
    }
}
