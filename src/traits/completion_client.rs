use async_trait::async_trait;

use crate::errors::VisaidResult;
use crate::structs::completion::Completion;

/// Seam over the chat-completion endpoint. Injected into the server context
/// so handlers never touch a process-wide client.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends a single user-role message and returns the generated text plus
    /// the finish reason from the response envelope.
    async fn complete(&self, prompt: String, max_tokens: u32) -> VisaidResult<Completion>;
}
