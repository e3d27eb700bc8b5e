use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{
    api::{AttendanceRecord, LeaveRequestResponse, TaskResponse, UserResponse},
    domain::{AttendanceStatus, Category, LeaveStatus, LeaveType, Role, TaskPriority, TaskStatus},
    utils::time::parse_day,
};

/// Counts per category, always holding every member of `C::ALL` in
/// declaration order. Only known categories can be incremented, so the key
/// set never grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCounts<C: Category> {
    counts: Vec<(C, u32)>,
}

impl<C: Category> Default for CategoryCounts<C> {
    fn default() -> Self {
        Self {
            counts: C::ALL.iter().map(|category| (*category, 0)).collect(),
        }
    }
}

impl<C: Category> CategoryCounts<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: C) -> u32 {
        self.counts
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    pub fn increment(&mut self, category: C) {
        if let Some((_, n)) = self.counts.iter_mut().find(|(c, _)| *c == category) {
            *n += 1;
        }
    }

    /// Increments the category named by `raw`; unknown or missing values are
    /// ignored.
    pub fn record(&mut self, raw: Option<&str>) -> bool {
        match raw.and_then(|value| C::parse(value).ok()) {
            Some(category) => {
                self.increment(category);
                true
            }
            None => false,
        }
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|(_, n)| *n).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (C, u32)> + '_ {
        self.counts.iter().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyCounts<C: Category> {
    pub date: NaiveDate,
    pub counts: CategoryCounts<C>,
}

pub fn count_by_category<C, R, F>(records: &[R], key: F) -> CategoryCounts<C>
where
    C: Category,
    F: Fn(&R) -> Option<&str>,
{
    let mut counts = CategoryCounts::new();
    for record in records {
        counts.record(key(record));
    }
    counts
}

/// Buckets records by calendar day, ascending. Records whose date does not
/// parse or whose category is unknown are skipped entirely.
pub fn count_by_day<C, R, D, F>(records: &[R], date: D, key: F) -> Vec<DailyCounts<C>>
where
    C: Category,
    D: Fn(&R) -> &str,
    F: Fn(&R) -> Option<&str>,
{
    let mut days: BTreeMap<NaiveDate, CategoryCounts<C>> = BTreeMap::new();
    for record in records {
        let Some(day) = parse_day(date(record)) else {
            continue;
        };
        let Some(category) = key(record).and_then(|raw| C::parse(raw).ok()) else {
            continue;
        };
        days.entry(day).or_default().increment(category);
    }
    days.into_iter()
        .map(|(date, counts)| DailyCounts { date, counts })
        .collect()
}

pub fn attendance_by_status(records: &[AttendanceRecord]) -> CategoryCounts<AttendanceStatus> {
    count_by_category(records, |record| record.status.as_deref())
}

pub fn attendance_by_day(records: &[AttendanceRecord]) -> Vec<DailyCounts<AttendanceStatus>> {
    count_by_day(
        records,
        |record| record.date.as_str(),
        |record| record.status.as_deref(),
    )
}

pub fn leave_by_status(requests: &[LeaveRequestResponse]) -> CategoryCounts<LeaveStatus> {
    count_by_category(requests, |request| request.status.as_deref())
}

pub fn leave_by_type(requests: &[LeaveRequestResponse]) -> CategoryCounts<LeaveType> {
    count_by_category(requests, |request| request.leave_type.as_deref())
}

pub fn tasks_by_status(tasks: &[TaskResponse]) -> CategoryCounts<TaskStatus> {
    count_by_category(tasks, |task| task.status.as_deref())
}

pub fn tasks_by_priority(tasks: &[TaskResponse]) -> CategoryCounts<TaskPriority> {
    count_by_category(tasks, |task| task.priority.as_deref())
}

pub fn employees_by_role(users: &[UserResponse]) -> CategoryCounts<Role> {
    count_by_category(users, |user| Some(user.role.as_str()))
}

/// Task counts for the given departments, in the order supplied. Tasks in
/// other departments, or none, are not counted.
pub fn tasks_per_department(tasks: &[TaskResponse], department_ids: &[String]) -> Vec<(String, u32)> {
    department_ids
        .iter()
        .map(|id| {
            let n = tasks
                .iter()
                .filter(|task| task.department_id.as_deref() == Some(id.as_str()))
                .count() as u32;
            (id.clone(), n)
        })
        .collect()
}
