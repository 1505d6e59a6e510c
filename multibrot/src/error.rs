use thiserror::Error;

/// Faults of the render loop. None of them are recoverable: startup aborts,
/// or the animation halts on the last presented frame.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no drawing context available: {0}")]
    SurfaceUnavailable(String),
    #[error("raster element not found: {0}")]
    ElementNotFound(String),
    #[error("pixel buffer holds {actual} entries but the raster has {expected} pixels")]
    BufferSizeMismatch { expected: usize, actual: usize },
    #[error("fractal evaluator failed: {0}")]
    Evaluator(#[source] Box<dyn std::error::Error + Send + Sync>),
}
