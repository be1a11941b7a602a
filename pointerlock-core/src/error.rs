use thiserror::Error;

/// Errors surfaced by [`crate::PointerCapture`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("target surface `{0}` not found")]
    SurfaceNotFound(String),
    #[error("pointer capture is already initialized")]
    AlreadyInitialized,
    #[error("pointer capture is not initialized")]
    NotInitialized,
}
