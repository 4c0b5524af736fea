/// Convenience result type used across flowscene.
pub type FlowsceneResult<T> = Result<T, FlowsceneError>;

/// Errors raised at construction and loading boundaries.
///
/// Evaluation itself never returns these: sampling a scene at a time is infallible and
/// degrades gracefully on malformed timing input.
#[derive(thiserror::Error, Debug)]
pub enum FlowsceneError {
    /// Invalid builder input (geometry, keyframes, timing parameters).
    #[error("validation error: {0}")]
    Validation(String),

    /// A timing spec could not be constructed.
    #[error("timing error: {0}")]
    Timing(String),

    /// A scene factory or scene document failed.
    #[error("scene error: {0}")]
    Scene(String),

    /// Scene documents that fail to (de)serialize.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlowsceneError {
    /// Build a [`FlowsceneError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlowsceneError::Timing`] value.
    pub fn timing(msg: impl Into<String>) -> Self {
        Self::Timing(msg.into())
    }

    /// Build a [`FlowsceneError::Scene`] value.
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    /// Build a [`FlowsceneError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
