use super::{
    client::ApiClient,
    types::{ApiError, ConversationSummary},
};

impl ApiClient {
    pub async fn list_conversations(&self) -> Result<Vec<ConversationSummary>, ApiError> {
        self.get_json("/messages/conversations", &[]).await
    }
}
