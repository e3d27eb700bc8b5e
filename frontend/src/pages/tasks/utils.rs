use crate::{
    api::{TaskPayload, TaskQuery, TaskResponse},
    domain::{Category, TaskPriority, TaskStatus},
    utils::{time, validation::FieldErrors},
};
use chrono::NaiveDate;
use leptos::*;

pub const TITLE_MAX_CHARS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TaskField {
    Title,
    Description,
    DueDate,
    Priority,
    Status,
}

pub type TaskFieldErrors = FieldErrors<TaskField>;

/// Returns the parsed due date when every field passes.
pub fn validate_task_form(
    title: &str,
    description: &str,
    due_date: &str,
) -> Result<Option<NaiveDate>, TaskFieldErrors> {
    let mut errors = TaskFieldErrors::default();
    let title = title.trim();
    if title.is_empty() {
        errors.insert(TaskField::Title, "Title is required.");
    } else if title.chars().count() > TITLE_MAX_CHARS {
        errors.insert(
            TaskField::Title,
            format!("Title must be {} characters or fewer.", TITLE_MAX_CHARS),
        );
    }
    if description.trim().is_empty() {
        errors.insert(TaskField::Description, "Description is required.");
    }
    let due = match time::parse_date_input(due_date, "Due date must be YYYY-MM-DD.") {
        Ok(due) => due,
        Err(message) => {
            errors.insert(TaskField::DueDate, message);
            None
        }
    };
    errors.into_result(due)
}

/// Parses a select value, recording a field error instead of falling back
/// to a default when the value is not one the form knows.
fn parse_choice<C: Category>(raw: &str, field: TaskField, errors: &mut TaskFieldErrors) -> Option<C> {
    match C::parse(raw) {
        Ok(choice) => Some(choice),
        Err(err) => {
            errors.insert(field, format!("Unknown {} \"{}\".", err.kind, err.value));
            None
        }
    }
}

#[derive(Clone, Copy)]
pub struct TaskFormState {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub assignee_id: RwSignal<String>,
    pub department_id: RwSignal<String>,
    /// Raw wire values; an unknown one is kept so submitting reports it.
    pub priority: RwSignal<String>,
    pub status: RwSignal<String>,
    pub due_date: RwSignal<String>,
}

impl Default for TaskFormState {
    fn default() -> Self {
        Self {
            title: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            assignee_id: create_rw_signal(String::new()),
            department_id: create_rw_signal(String::new()),
            priority: create_rw_signal(TaskPriority::default().as_str().to_string()),
            status: create_rw_signal(TaskStatus::default().as_str().to_string()),
            due_date: create_rw_signal(String::new()),
        }
    }
}

impl TaskFormState {
    pub fn load(&self, task: &TaskResponse) {
        self.title.set(task.title.clone());
        self.description.set(task.description.clone());
        self.assignee_id
            .set(task.assignee_id.clone().unwrap_or_default());
        self.department_id
            .set(task.department_id.clone().unwrap_or_default());
        self.priority.set(
            task.priority
                .clone()
                .unwrap_or_else(|| TaskPriority::default().as_str().to_string()),
        );
        self.status.set(
            task.status
                .clone()
                .unwrap_or_else(|| TaskStatus::default().as_str().to_string()),
        );
        self.due_date
            .set(task.due_date.map(time::format_date).unwrap_or_default());
    }

    pub fn reset(&self) {
        self.title.set(String::new());
        self.description.set(String::new());
        self.assignee_id.set(String::new());
        self.department_id.set(String::new());
        self.priority
            .set(TaskPriority::default().as_str().to_string());
        self.status.set(TaskStatus::default().as_str().to_string());
        self.due_date.set(String::new());
    }

    pub fn to_payload(&self) -> Result<TaskPayload, TaskFieldErrors> {
        let title = self.title.get_untracked();
        let description = self.description.get_untracked();
        let mut errors = TaskFieldErrors::default();
        let due_date = validate_task_form(&title, &description, &self.due_date.get_untracked())
            .unwrap_or_else(|field_errors| {
                errors.extend(field_errors);
                None
            });
        let priority =
            parse_choice::<TaskPriority>(&self.priority.get_untracked(), TaskField::Priority, &mut errors);
        let status = parse_choice::<TaskStatus>(&self.status.get_untracked(), TaskField::Status, &mut errors);
        let (Some(priority), Some(status)) = (priority, status) else {
            return Err(errors);
        };
        let assignee = self.assignee_id.get_untracked();
        let department = self.department_id.get_untracked();
        errors.into_result(TaskPayload {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            assignee_id: (!assignee.is_empty()).then_some(assignee),
            department_id: (!department.is_empty()).then_some(department),
            priority,
            status,
            due_date,
        })
    }
}

/// Select values for the list filters; an empty string means "any".
#[derive(Clone, Copy)]
pub struct TaskFilterState {
    pub status: RwSignal<String>,
    pub priority: RwSignal<String>,
}

impl Default for TaskFilterState {
    fn default() -> Self {
        Self {
            status: create_rw_signal(String::new()),
            priority: create_rw_signal(String::new()),
        }
    }
}

impl TaskFilterState {
    /// Tracked read, so an effect calling this reloads on filter changes.
    pub fn to_query(&self) -> TaskQuery {
        build_task_query(&self.status.get(), &self.priority.get())
    }
}

pub fn build_task_query(status: &str, priority: &str) -> TaskQuery {
    TaskQuery {
        status: TaskStatus::parse(status).ok(),
        priority: TaskPriority::parse(priority).ok(),
        assignee_id: None,
    }
}

pub fn due_label(task: &TaskResponse) -> String {
    task.due_date
        .map(time::format_date)
        .unwrap_or_else(|| "-".into())
}

pub fn assignee_label(task: &TaskResponse) -> String {
    task.assignee_name
        .clone()
        .or_else(|| task.assignee_id.clone())
        .unwrap_or_else(|| "Unassigned".into())
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn form_round_trips_an_existing_task() {
        with_runtime(|| {
            let form = TaskFormState::default();
            let task = TaskResponse {
                id: "t1".into(),
                title: "Renew lease".into(),
                description: "Office on 3rd floor".into(),
                assignee_id: Some("u2".into()),
                assignee_name: Some("Bob".into()),
                department_id: None,
                priority: Some("high".into()),
                status: Some("in-review".into()),
                due_date: NaiveDate::from_ymd_opt(2025, 7, 1),
            };
            form.load(&task);
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.title, "Renew lease");
            assert_eq!(payload.assignee_id.as_deref(), Some("u2"));
            assert_eq!(payload.priority, TaskPriority::High);
            assert_eq!(payload.status, TaskStatus::InReview);
            assert_eq!(payload.due_date, task.due_date);

            form.reset();
            assert!(form.to_payload().is_err());
        });
    }

    #[test]
    fn unknown_status_is_refused_and_department_is_kept() {
        with_runtime(|| {
            let form = TaskFormState::default();
            let task = TaskResponse {
                id: "t9".into(),
                title: "Ship release".into(),
                description: "Tag and publish".into(),
                assignee_id: None,
                assignee_name: None,
                department_id: Some("d1".into()),
                priority: Some("low".into()),
                status: Some("blocked".into()),
                due_date: None,
            };
            form.load(&task);
            assert_eq!(form.status.get_untracked(), "blocked");

            let errors = form.to_payload().unwrap_err();
            assert_eq!(errors.fields(), vec![TaskField::Status]);
            assert_eq!(
                errors.get(TaskField::Status),
                Some("Unknown task status \"blocked\".")
            );

            form.status.set("done".into());
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.department_id.as_deref(), Some("d1"));
            assert_eq!(payload.status, TaskStatus::Done);
            assert_eq!(payload.priority, TaskPriority::Low);

            form.reset();
            assert_eq!(form.department_id.get_untracked(), "");
        });
    }

    #[test]
    fn unknown_priority_is_reported_with_text_errors() {
        with_runtime(|| {
            let form = TaskFormState::default();
            form.priority.set("critical".into());
            let errors = form.to_payload().unwrap_err();
            assert_eq!(
                errors.fields(),
                vec![TaskField::Title, TaskField::Description, TaskField::Priority]
            );
        });
    }
}
