use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("request to answering service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("answering service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response from answering service: {0}")]
    Malformed(String),
    #[error("answering service timed out after {0:?}")]
    Timeout(std::time::Duration),
}

/// Single string in, single string out. Implementations may fail for any
/// reason; callers never see anything but the answer or the error.
#[async_trait]
pub trait AnswerService: Send + Sync {
    async fn ask(&self, query: &str) -> Result<String, AssistantError>;
}
