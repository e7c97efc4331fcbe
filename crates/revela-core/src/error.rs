/// Error produced by a pipeline stage.
///
/// Stage errors are surfaced to the caller of the operation that
/// triggered them and never retried.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// The input could not be interpreted as a processable raster:
    /// zero dimensions, or a buffer that does not match them.
    #[error("unprocessable raster: {0}")]
    DecodeFailed(String),
}
