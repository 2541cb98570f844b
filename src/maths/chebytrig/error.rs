/// Failure of a cosine/sine evaluation.
///
/// Neither variant is reachable for finite input; both signal a bug in the
/// caller or in range reduction rather than a condition to handle per call.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// The argument handed to the reducer; for sine this is `pi/2 - x`.
    #[error("non-finite argument {0}")]
    NonFinite(f64),
    #[error("reduced quadrant {0} outside 0..=3")]
    Quadrant(i32),
}
