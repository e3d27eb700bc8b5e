use crate::api::{ApiClient, ApiError, ConversationSummary};
use std::rc::Rc;

#[derive(Clone)]
pub struct MessagesRepository {
    client: Rc<ApiClient>,
}

impl MessagesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn conversations(&self) -> Result<Vec<ConversationSummary>, ApiError> {
        self.client.list_conversations().await
    }
}
