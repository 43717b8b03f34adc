//! TUI application state: the transcript, the input line, reveal pacing.

use std::time::{Duration, Instant};

use crate::core::chat::{ChatReply, Turn};
use crate::core::history::{StoredTurn, unix_timestamp_secs};
use crate::tui::constants::MAX_CONTEXT_TURNS;
use crate::tui::reveal::RevealState;

/// One entry in the transcript.
pub(crate) enum ChatMessage {
    User(String),
    Assistant {
        reply: ChatReply,
        reveal: RevealState,
    },
    /// Status line (cancellations, hints).
    Notice(String),
    Thinking,
}

pub(crate) struct App {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    /// Lines scrolled up from the bottom of the transcript.
    pub scroll: usize,
    pub spinner_frame: usize,
    pub model_name: String,
    pub reveal_delay: Duration,
    pub conversation_id: String,
    pub title: Option<String>,
    /// Set when the transcript changed since the last save.
    pub dirty: bool,
}

impl App {
    pub(crate) fn new(model_name: String, reveal_delay: Duration) -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            scroll: 0,
            spinner_frame: 0,
            model_name,
            reveal_delay,
            conversation_id: uuid::Uuid::new_v4().to_string(),
            title: None,
            dirty: false,
        }
    }

    pub(crate) fn push_user(&mut self, text: &str) {
        self.messages.push(ChatMessage::User(text.to_string()));
        self.dirty = true;
    }

    /// Append a reply; pacing follows its formatting.
    pub(crate) fn push_reply(&mut self, reply: ChatReply, now: Instant) {
        let reveal = RevealState::new(
            reply.formatted.chunks.len(),
            reply.formatted.has_formatting,
            self.reveal_delay,
            now,
        );
        self.messages.push(ChatMessage::Assistant { reply, reveal });
        self.dirty = true;
    }

    pub(crate) fn push_notice(&mut self, text: &str) {
        self.messages.push(ChatMessage::Notice(text.to_string()));
    }

    pub(crate) fn set_thinking(&mut self, thinking: bool) {
        if thinking {
            self.messages.push(ChatMessage::Thinking);
        } else {
            self.messages
                .retain(|m| !matches!(m, ChatMessage::Thinking));
        }
    }

    pub(crate) fn is_thinking(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m, ChatMessage::Thinking))
    }

    /// Advance the newest assistant message's reveal. True when a redraw is
    /// needed.
    pub(crate) fn tick_reveal(&mut self, now: Instant) -> bool {
        for message in self.messages.iter_mut().rev() {
            if let ChatMessage::Assistant { reveal, .. } = message {
                return reveal.tick(now);
            }
        }
        false
    }

    /// Suggestions of the newest fully revealed reply, for quick replies.
    pub(crate) fn current_suggestions(&self) -> &[String] {
        for message in self.messages.iter().rev() {
            if let ChatMessage::Assistant { reply, reveal } = message {
                if reveal.done() {
                    return &reply.formatted.suggestions;
                }
                return &[];
            }
        }
        &[]
    }

    /// Recent turns for the API context, oldest first, capped.
    pub(crate) fn api_turns(&self) -> Vec<Turn> {
        let mut turns: Vec<Turn> = self
            .messages
            .iter()
            .rev()
            .filter_map(|m| match m {
                ChatMessage::User(text) => Some(Turn {
                    from_user: true,
                    text: text.clone(),
                }),
                ChatMessage::Assistant { reply, .. } => Some(Turn {
                    from_user: false,
                    text: reply.raw.clone(),
                }),
                _ => None,
            })
            .take(MAX_CONTEXT_TURNS)
            .collect();
        turns.reverse();
        turns
    }

    /// The transcript in persistence form.
    pub(crate) fn stored_turns(&self) -> Vec<StoredTurn> {
        let now = unix_timestamp_secs();
        self.messages
            .iter()
            .filter_map(|m| match m {
                ChatMessage::User(text) => Some(StoredTurn {
                    role: "user".to_string(),
                    content: text.clone(),
                    timestamp: Some(now),
                }),
                ChatMessage::Assistant { reply, .. } => Some(StoredTurn {
                    role: "assistant".to_string(),
                    content: reply.raw.clone(),
                    timestamp: Some(now),
                }),
                _ => None,
            })
            .collect()
    }

    /// First user message, the fallback source for a conversation title.
    pub(crate) fn first_user_message(&self) -> Option<&str> {
        self.messages.iter().find_map(|m| match m {
            ChatMessage::User(text) => Some(text.as_str()),
            _ => None,
        })
    }
}
