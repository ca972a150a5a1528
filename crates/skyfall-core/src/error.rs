use thiserror::Error;

/// Failure to obtain an optional asset. Callers log it and fall back to a
/// procedural substitute.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("fetch of {url} failed: {reason}")]
    Fetch { url: String, reason: String },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("catalogue length {len} is not a multiple of the {record}-byte record")]
    Truncated { len: usize, record: usize },
    #[error("catalogue contains no stars")]
    Empty,
}
