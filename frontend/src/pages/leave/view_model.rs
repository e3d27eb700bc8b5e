use crate::{
    api::{ApiClient, ApiError, CreateLeaveRequest, LeaveRequestResponse},
    domain::{Category, LeaveStatus, Role},
    pages::leave::{
        repository::LeaveRepository,
        utils::{self, Decision, LeaveFieldErrors, LeaveFormState},
    },
    state::{
        auth::{use_auth, use_current_role},
        flash::use_flash,
    },
};
use leptos::*;
use std::rc::Rc;

type LeaveList = Result<Vec<LeaveRequestResponse>, ApiError>;

#[derive(Clone, Copy)]
pub struct LeaveViewModel {
    pub form: LeaveFormState,
    pub field_errors: RwSignal<LeaveFieldErrors>,
    /// Server-side rejection of the last submit.
    pub form_error: RwSignal<Option<ApiError>>,
    pub role: Memo<Option<Role>>,
    pub user_id: Signal<Option<String>>,
    pub reload: RwSignal<u32>,
    pub my_requests: Resource<u32, LeaveList>,
    pub queue: Resource<(u32, Option<LeaveStatus>), LeaveList>,
    pub submit_action: Action<CreateLeaveRequest, Result<LeaveRequestResponse, ApiError>>,
    pub decide_action: Action<Decision, Result<LeaveRequestResponse, ApiError>>,
    pub cancel_action: Action<String, Result<(), ApiError>>,
    pub pending_decision: RwSignal<Option<Decision>>,
}

impl LeaveViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repo = LeaveRepository::new_with_client(Rc::new(api));
        let flash = use_flash();
        let (auth, _) = use_auth();
        let role = use_current_role();
        let user_id = Signal::derive(move || auth.with(|state| state.user_id().map(str::to_string)));
        let reload = create_rw_signal(0u32);

        let mine_repo = repo.clone();
        let my_requests = create_resource(
            move || reload.get(),
            move |_| {
                let repo = mine_repo.clone();
                async move { repo.list_mine().await }
            },
        );

        let queue_repo = repo.clone();
        let queue = create_resource(
            move || (reload.get(), utils::queue_status(role.get())),
            move |(_, status)| {
                let repo = queue_repo.clone();
                async move {
                    match status {
                        Some(status) => repo.list_queue(status).await,
                        None => Ok(Vec::new()),
                    }
                }
            },
        );

        let submit_repo = repo.clone();
        let submit_action = create_action(move |request: &CreateLeaveRequest| {
            let repo = submit_repo.clone();
            let request = request.clone();
            async move { repo.submit(&request).await }
        });

        let decide_repo = repo.clone();
        let decide_action = create_action(move |decision: &Decision| {
            let repo = decide_repo.clone();
            let decision = decision.clone();
            let role = role.get_untracked();
            async move {
                let body = utils::build_decision(role, &decision)?;
                repo.decide(&decision.request.id, &body).await
            }
        });

        let cancel_repo = repo;
        let cancel_action = create_action(move |id: &String| {
            let repo = cancel_repo.clone();
            let id = id.clone();
            async move { repo.cancel(&id).await }
        });

        let form = LeaveFormState::default();
        let field_errors = create_rw_signal(LeaveFieldErrors::default());
        let form_error = create_rw_signal(None::<ApiError>);
        let pending_decision = create_rw_signal(None::<Decision>);
        let bump = move || reload.update(|value| *value = value.wrapping_add(1));

        create_effect(move |_| {
            if let Some(result) = submit_action.value().get() {
                match result {
                    Ok(_) => {
                        form.reset();
                        form_error.set(None);
                        flash.success("Leave request submitted.");
                        bump();
                    }
                    Err(err) => form_error.set(Some(err)),
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = decide_action.value().get() {
                match result {
                    Ok(updated) => {
                        let label = updated
                            .status()
                            .map(|status| status.label().to_lowercase())
                            .unwrap_or_else(|| "updated".into());
                        flash.success(format!("Request marked {}.", label));
                        bump();
                    }
                    Err(err) => flash.error(err.error),
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = cancel_action.value().get() {
                match result {
                    Ok(_) => {
                        flash.success("Leave request cancelled.");
                        bump();
                    }
                    Err(err) => flash.error(err.error),
                }
            }
        });

        Self {
            form,
            field_errors,
            form_error,
            role,
            user_id,
            reload,
            my_requests,
            queue,
            submit_action,
            decide_action,
            cancel_action,
            pending_decision,
        }
    }

    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.field_errors.set(LeaveFieldErrors::default());
                self.form_error.set(None);
                self.submit_action.dispatch(request);
            }
            Err(errors) => self.field_errors.set(errors),
        }
    }

    /// Opens the confirmation dialog for a decision.
    pub fn ask_decision(&self, request: LeaveRequestResponse, target: LeaveStatus) {
        self.pending_decision.set(Some(Decision {
            request,
            target,
            comment: String::new(),
        }));
    }

    pub fn set_decision_comment(&self, comment: String) {
        self.pending_decision.update(|pending| {
            if let Some(decision) = pending {
                decision.comment = comment;
            }
        });
    }

    pub fn confirm_decision(&self) {
        if let Some(decision) = self.pending_decision.get_untracked() {
            self.pending_decision.set(None);
            self.decide_action.dispatch(decision);
        }
    }

    pub fn dismiss_decision(&self) {
        self.pending_decision.set(None);
    }

    pub fn cancel_request(&self, id: String) {
        if !self.cancel_action.pending().get_untracked() {
            self.cancel_action.dispatch(id);
        }
    }
}

impl Default for LeaveViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_leave_view_model() -> LeaveViewModel {
    match use_context::<LeaveViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = LeaveViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
