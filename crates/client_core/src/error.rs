use thiserror::Error;

/// Shown when the service fails without saying why.
pub const FALLBACK_FAILURE_MESSAGE: &str = "Could not get a response from the MindCraft API.";
/// Shown when the service answered successfully with something that is not a world.
pub const UNKNOWN_FAILURE_MESSAGE: &str = "An unknown error occurred.";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid generation service base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("generation service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("generation service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("generation service returned an unreadable world: {0}")]
    MalformedResponse(String),
    #[error("backend worker unavailable: {0}")]
    BackendUnavailable(String),
}

impl GenerationError {
    /// The single line surfaced to the user for this failure.
    ///
    /// A failing status keeps the service's body text verbatim so its own
    /// explanation ("rate limited", a validation detail, ...) reaches the form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { body, .. } if !body.trim().is_empty() => body.clone(),
            Self::Status { .. } | Self::Transport(_) | Self::InvalidBaseUrl { .. } => {
                FALLBACK_FAILURE_MESSAGE.to_string()
            }
            Self::MalformedResponse(_) => UNKNOWN_FAILURE_MESSAGE.to_string(),
            Self::BackendUnavailable(reason) if !reason.trim().is_empty() => reason.clone(),
            Self::BackendUnavailable(_) => FALLBACK_FAILURE_MESSAGE.to_string(),
        }
    }
}
