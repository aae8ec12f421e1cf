//! Error types shared by the layout generator and scene submission.

/// Errors produced while generating a room layout or handing it to a back end.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Caller input the generator cannot work with: an unknown wall identity,
    /// a non-positive dimension, or an opening on a wall that cannot hold one.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure reported by a [`RenderBackend`](crate::gfx::scene::RenderBackend)
    /// while it instantiates nodes or subtracts holes.
    #[error("Backend error: {0}")]
    Backend(String),
}

impl LayoutError {
    /// Convenience constructors for common error types
    pub fn invalid_argument<T: ToString>(msg: T) -> Self {
        LayoutError::InvalidArgument(msg.to_string())
    }

    pub fn backend<T: ToString>(msg: T) -> Self {
        LayoutError::Backend(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Fails with [`LayoutError::InvalidArgument`] unless `value` is finite and > 0.
pub(crate) fn ensure_positive(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::invalid_argument(format!(
            "{} must be a positive number, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("width", 1.0).is_ok());
        assert!(ensure_positive("width", 0.0).is_err());
        assert!(ensure_positive("width", -2.0).is_err());
        assert!(ensure_positive("width", f32::NAN).is_err());
        assert!(ensure_positive("width", f32::INFINITY).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = LayoutError::invalid_argument("unknown wall 'roof'");
        assert_eq!(err.to_string(), "Invalid argument: unknown wall 'roof'");
    }
}
