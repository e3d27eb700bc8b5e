use crate::api::ConversationSummary;

/// Unread conversations first, then by participant name ignoring case.
pub fn sort_conversations(conversations: &mut [ConversationSummary]) {
    conversations.sort_by_cached_key(|c| (c.unread_count == 0, c.participant.to_lowercase()));
}

pub fn total_unread(conversations: &[ConversationSummary]) -> u32 {
    conversations.iter().map(|c| c.unread_count).sum()
}

pub fn preview(conversation: &ConversationSummary) -> String {
    conversation
        .last_message
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or("No messages yet")
        .to_string()
}

pub fn initials(participant: &str) -> String {
    participant
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
