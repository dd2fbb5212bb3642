use thiserror::Error;

/// Configuration errors raised while building engine state.
///
/// Nothing on the scroll/timer tick path returns these; they only come out of
/// constructors, so a bad section config fails at mount instead of mid-scroll.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("a zoned section needs at least one zone")]
    NoZones,
    #[error("invalid transition window [{start}, {end}]")]
    InvalidTransitionWindow { start: f64, end: f64 },
    #[error("visibility threshold {0} is outside [0, 1]")]
    InvalidThreshold(f64),
    #[error("carousel has no slides")]
    EmptyCarousel,
    #[error("invalid content document: {0}")]
    Content(#[from] serde_json::Error),
}
