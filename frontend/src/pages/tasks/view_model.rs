use crate::{
    api::{ApiClient, ApiError, Department, TaskPayload, TaskQuery, TaskResponse, UserResponse},
    pages::tasks::{
        repository::TasksRepository,
        utils::{TaskFieldErrors, TaskFilterState, TaskFormState},
    },
    state::{flash::use_flash, request_guard::RequestGeneration},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct TasksViewModel {
    pub filter: TaskFilterState,
    pub tasks: RwSignal<Vec<TaskResponse>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    pub assignees: Resource<(), Result<Vec<UserResponse>, ApiError>>,
    pub departments: Resource<(), Result<Vec<Department>, ApiError>>,
    pub form: TaskFormState,
    pub field_errors: RwSignal<TaskFieldErrors>,
    /// Id of the task being edited; `None` while creating.
    pub editing: RwSignal<Option<String>>,
    pub save_action: Action<(Option<String>, TaskPayload), Result<TaskResponse, ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
    pub pending_delete: RwSignal<Option<TaskResponse>>,
    repo: StoredValue<TasksRepository>,
    generation: RequestGeneration,
}

impl TasksViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repo = TasksRepository::new_with_client(Rc::new(api));
        let flash = use_flash();

        let assignees_repo = repo.clone();
        let assignees = create_resource(
            || (),
            move |_| {
                let repo = assignees_repo.clone();
                async move { repo.assignees().await }
            },
        );

        let departments_repo = repo.clone();
        let departments = create_resource(
            || (),
            move |_| {
                let repo = departments_repo.clone();
                async move { repo.departments().await }
            },
        );

        let save_repo = repo.clone();
        let save_action = create_action(move |input: &(Option<String>, TaskPayload)| {
            let repo = save_repo.clone();
            let (id, payload) = input.clone();
            async move { repo.save(id.as_deref(), &payload).await }
        });

        let delete_repo = repo.clone();
        let delete_action = create_action(move |id: &String| {
            let repo = delete_repo.clone();
            let id = id.clone();
            async move { repo.delete(&id).await }
        });

        let vm = Self {
            filter: TaskFilterState::default(),
            tasks: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            assignees,
            departments,
            form: TaskFormState::default(),
            field_errors: create_rw_signal(TaskFieldErrors::default()),
            editing: create_rw_signal(None),
            save_action,
            delete_action,
            pending_delete: create_rw_signal(None),
            repo: store_value(repo),
            generation: RequestGeneration::new(),
        };

        create_effect(move |_| {
            let query = vm.filter.to_query();
            vm.load(query);
        });

        create_effect(move |_| {
            if let Some(result) = save_action.value().get() {
                match result {
                    Ok(task) => {
                        let verb = if vm.editing.get_untracked().is_some() {
                            "updated"
                        } else {
                            "created"
                        };
                        flash.success(format!("Task \"{}\" {}.", task.title, verb));
                        vm.cancel_edit();
                        vm.refresh();
                    }
                    Err(err) => flash.error(err.error),
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = delete_action.value().get() {
                match result {
                    Ok(()) => {
                        flash.success("Task deleted.");
                        vm.refresh();
                    }
                    Err(err) => flash.error(err.error),
                }
            }
        });

        vm
    }

    /// Fetches the list for `query`; only the latest request's response is
    /// applied.
    pub fn load(&self, query: TaskQuery) {
        let repo = self.repo.get_value();
        let (tasks, loading, error) = (self.tasks, self.loading, self.error);
        loading.set(true);
        error.set(None);
        self.generation.spawn_latest(
            async move { repo.list(&query).await },
            move |result| {
                loading.set(false);
                match result {
                    Ok(list) => tasks.set(list),
                    Err(err) => {
                        log::error!("task list failed: {}", err);
                        error.set(Some(err));
                    }
                }
            },
        );
    }

    pub fn refresh(&self) {
        let filter = self.filter;
        self.load(untrack(move || filter.to_query()));
    }

    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        match self.form.to_payload() {
            Ok(payload) => {
                self.field_errors.set(TaskFieldErrors::default());
                self.save_action
                    .dispatch((self.editing.get_untracked(), payload));
            }
            Err(errors) => self.field_errors.set(errors),
        }
    }

    pub fn edit(&self, task: &TaskResponse) {
        self.form.load(task);
        self.field_errors.set(TaskFieldErrors::default());
        self.editing.set(Some(task.id.clone()));
    }

    pub fn cancel_edit(&self) {
        self.form.reset();
        self.field_errors.set(TaskFieldErrors::default());
        self.editing.set(None);
    }

    pub fn ask_delete(&self, task: TaskResponse) {
        self.pending_delete.set(Some(task));
    }

    pub fn confirm_delete(&self) {
        if let Some(task) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(task.id);
        }
    }

    pub fn dismiss_delete(&self) {
        self.pending_delete.set(None);
    }
}

impl Default for TasksViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_tasks_view_model() -> TasksViewModel {
    match use_context::<TasksViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = TasksViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::tasks::utils::TaskField;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn blank_form_reports_both_fields_and_does_not_submit() {
        with_runtime(|| {
            let vm = TasksViewModel::new();
            vm.submit();
            let errors = vm.field_errors.get_untracked();
            assert!(errors.get(TaskField::Title).is_some());
            assert!(errors.get(TaskField::Description).is_some());
            assert_eq!(vm.save_action.version().get_untracked(), 0);
        });
    }

    #[test]
    fn editing_loads_the_task_and_cancel_clears_it() {
        with_runtime(|| {
            let vm = TasksViewModel::new();
            let task = TaskResponse {
                id: "t4".into(),
                title: "Audit badges".into(),
                description: "Check expired ones".into(),
                assignee_id: None,
                assignee_name: None,
                department_id: None,
                priority: Some("low".into()),
                status: Some("todo".into()),
                due_date: None,
            };
            vm.edit(&task);
            assert_eq!(vm.editing.get_untracked().as_deref(), Some("t4"));
            assert_eq!(vm.form.title.get_untracked(), "Audit badges");
            vm.cancel_edit();
            assert!(vm.editing.get_untracked().is_none());
            assert!(vm.form.title.get_untracked().is_empty());
        });
    }

    #[test]
    fn delete_waits_for_confirmation() {
        with_runtime(|| {
            let vm = TasksViewModel::new();
            let task = TaskResponse {
                id: "t5".into(),
                title: "Old task".into(),
                description: String::new(),
                assignee_id: None,
                assignee_name: None,
                department_id: None,
                priority: None,
                status: None,
                due_date: None,
            };
            vm.ask_delete(task);
            assert!(vm.pending_delete.get_untracked().is_some());
            vm.dismiss_delete();
            assert!(vm.pending_delete.get_untracked().is_none());
            assert_eq!(vm.delete_action.version().get_untracked(), 0);
        });
    }
}
