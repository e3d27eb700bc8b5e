use super::repository::ReportData;
use crate::{
    api::{ApiError, Department, ReportQuery},
    domain::{AttendanceStatus, Role},
    reporting::{adapter, aggregate, ChartRow, SeriesSpec},
    utils::time,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ReportFilterState {
    pub department_id: RwSignal<String>,
    pub from: RwSignal<String>,
    pub to: RwSignal<String>,
}

impl Default for ReportFilterState {
    fn default() -> Self {
        let (from, to) = time::month_bounds(time::today())
            .map(|(from, to)| (time::format_date(from), time::format_date(to)))
            .unwrap_or_default();
        Self {
            department_id: create_rw_signal(String::new()),
            from: create_rw_signal(from),
            to: create_rw_signal(to),
        }
    }
}

impl ReportFilterState {
    pub fn to_query(&self) -> Result<ReportQuery, ApiError> {
        build_report_query(
            &self.department_id.get_untracked(),
            &self.from.get_untracked(),
            &self.to.get_untracked(),
        )
        .map_err(ApiError::validation)
    }
}

pub fn build_report_query(department_id: &str, from: &str, to: &str) -> Result<ReportQuery, String> {
    let from = time::parse_date_input(from, "Start date must be YYYY-MM-DD.")?;
    let to = time::parse_date_input(to, "End date must be YYYY-MM-DD.")?;
    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            return Err("Start date must be on or before end date.".into());
        }
    }
    let department_id = department_id.trim();
    Ok(ReportQuery {
        department_id: (!department_id.is_empty()).then(|| department_id.to_string()),
        from,
        to,
    })
}

pub fn daily_attendance_rows(data: &ReportData) -> Vec<ChartRow> {
    adapter::daily_rows(&aggregate::attendance_by_day(&data.attendance))
}

/// Present, absent, late, leave; fixed regardless of which statuses occur.
pub fn attendance_series() -> Vec<SeriesSpec> {
    adapter::series_for::<AttendanceStatus>()
}

pub fn priority_rows(data: &ReportData) -> Vec<ChartRow> {
    adapter::to_rows(&aggregate::tasks_by_priority(&data.tasks))
}

pub fn role_rows(data: &ReportData) -> Vec<ChartRow> {
    adapter::pie_rows(&aggregate::employees_by_role(&data.users))
}

pub fn role_colors() -> Vec<String> {
    adapter::category_colors::<Role>()
}

/// Task counts per department, in directory order.
pub fn department_rows(data: &ReportData, departments: &[Department]) -> Vec<ChartRow> {
    let ids: Vec<String> = departments.iter().map(|d| d.id.clone()).collect();
    let counts = aggregate::tasks_per_department(&data.tasks, &ids);
    adapter::keyed_rows(&counts, |id| {
        departments
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| id.to_string())
    })
}
