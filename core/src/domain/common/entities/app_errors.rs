use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Failed to generate recipes: received an empty response from the API")]
    EmptyResponse,

    #[error("Failed to generate recipes: invalid response format: {0}")]
    MalformedResponse(String),

    #[error("Failed to generate recipes: {0}")]
    TransportError(String),

    #[error("A recipe generation is already in progress")]
    GenerationInProgress,
}

impl CoreError {
    /// Whether the error came back from the generation service, as opposed to
    /// being rejected before any call was made.
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            CoreError::EmptyResponse | CoreError::MalformedResponse(_) | CoreError::TransportError(_)
        )
    }
}
