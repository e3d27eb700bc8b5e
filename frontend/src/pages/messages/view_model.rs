use crate::{
    api::{ApiClient, ApiError, ConversationSummary},
    pages::messages::{repository::MessagesRepository, utils},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct MessagesViewModel {
    pub reload: RwSignal<u32>,
    pub conversations: Resource<u32, Result<Vec<ConversationSummary>, ApiError>>,
}

impl MessagesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repo = MessagesRepository::new_with_client(Rc::new(api));
        let reload = create_rw_signal(0u32);
        let conversations = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repo.clone();
                async move {
                    let mut list = repo.conversations().await.map_err(|err| {
                        log::error!("conversation list failed: {}", err);
                        err
                    })?;
                    utils::sort_conversations(&mut list);
                    Ok(list)
                }
            },
        );
        Self {
            reload,
            conversations,
        }
    }

    pub fn total_unread(&self) -> Signal<u32> {
        let conversations = self.conversations;
        Signal::derive(move || {
            conversations
                .get()
                .and_then(Result::ok)
                .map(|list| utils::total_unread(&list))
                .unwrap_or(0)
        })
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

impl Default for MessagesViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_messages_view_model() -> MessagesViewModel {
    match use_context::<MessagesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = MessagesViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
