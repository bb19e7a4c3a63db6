use crate::models::{ChatMessage, ChatTranscript};

use super::respond;

pub const GREETING: &str =
    "Hi! I'm your wellness assistant. Ask me anything about mental health, stress, or wellness!";

/// One activation of the chat widget. Starts with the assistant greeting.
#[derive(Debug, Clone)]
pub struct ChatSession {
    transcript: ChatTranscript,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatMessage::assistant(GREETING)],
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Records the user's turn and the assistant's reply, returning the
    /// reply. Blank input is ignored and leaves the transcript unchanged.
    pub fn send(&mut self, input: &str) -> Option<String> {
        if input.trim().is_empty() {
            return None;
        }

        let reply = respond(input);
        self.transcript.push(ChatMessage::user(input));
        self.transcript.push(ChatMessage::assistant(reply.clone()));
        Some(reply)
    }
}
