//! Crate-wide error type and result alias.
//!
//! [`RelatoError`] is a small category enum with `impl Into<String>` helper
//! constructors and an [`RelatoError::Other`] `#[from] anyhow::Error` escape
//! hatch, following the teacher's `WavyteError`/`WavyteResult` shape.

pub type RelatoResult<T> = Result<T, RelatoError>;

#[derive(thiserror::Error, Debug)]
pub enum RelatoError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("capture error: {0}")]
    Capture(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RelatoError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            RelatoError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            RelatoError::capture("x")
                .to_string()
                .contains("capture error:")
        );
        assert!(
            RelatoError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = RelatoError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
