use crate::config::constants::FINISH_REASON_LENGTH;

/// Text extracted from a chat-completion response envelope.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub finish_reason: Option<String>,
}

impl Completion {
    /// A "length" finish reason means the model hit the token ceiling and the
    /// tail of the response is missing.
    pub fn is_truncated(&self) -> bool {
        self.finish_reason.as_deref() == Some(FINISH_REASON_LENGTH)
    }
}
