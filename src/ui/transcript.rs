// src/ui/transcript.rs — Conversation transcript view-model
//
// The transcript is the only message store: an ordered in-memory list,
// never persisted, cleared only by an explicit confirmed user action.
// It is pure data so rendering logic can be tested without a terminal.

pub const WELCOME_TEXT: &str =
    "Hi! I'm your learning companion. Ask me anything, or type /help for commands.";
pub const CLEARED_TEXT: &str = "Chat cleared. What shall we work on next?";
pub const SEND_FALLBACK_TEXT: &str =
    "Sorry, something went wrong while handling your message. Please try again.";
pub const PROBLEM_FALLBACK_TEXT: &str =
    "Could not generate a problem right now. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// Secondary annotation on assistant replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyMeta {
    pub learning_mode: String,
    pub current_topic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub meta: Option<ReplyMeta>,
    /// Welcome/cleared entries; dropped when a real message arrives.
    pub placeholder: bool,
}

#[derive(Debug)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: vec![placeholder_entry(WELCOME_TEXT)],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(Message {
            role: Role::User,
            content: content.into(),
            meta: None,
            placeholder: false,
        });
    }

    pub fn push_assistant(&mut self, content: impl Into<String>, meta: Option<ReplyMeta>) {
        self.push(Message {
            role: Role::Assistant,
            content: content.into(),
            meta,
            placeholder: false,
        });
    }

    /// Generic assistant-style entry shown in place of a reply when a send
    /// fails.
    pub fn push_fallback(&mut self) {
        self.push_assistant(SEND_FALLBACK_TEXT, None);
    }

    /// Reset to a single placeholder entry. Callers must have confirmed
    /// with the user first.
    pub fn clear(&mut self) {
        self.messages = vec![placeholder_entry(CLEARED_TEXT)];
    }

    fn push(&mut self, message: Message) {
        // The welcome entry goes away on the first real message.
        self.messages.retain(|m| !m.placeholder);
        self.messages.push(message);
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

fn placeholder_entry(text: &str) -> Message {
    Message {
        role: Role::Assistant,
        content: text.to_string(),
        meta: None,
        placeholder: true,
    }
}
