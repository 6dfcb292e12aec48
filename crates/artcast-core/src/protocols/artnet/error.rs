use thiserror::Error;

/// Errors returned by Art-Net encoding and decoding.
///
/// # Examples
/// ```
/// use artcast_core::ArtNetError;
///
/// let err = ArtNetError::InvalidChannelFrame { length: 70_000, max: 65_535 };
/// assert!(err.to_string().contains("invalid channel frame"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArtNetError {
    #[error("invalid channel frame: {length} bytes exceeds the {max}-byte length field")]
    InvalidChannelFrame { length: usize, max: usize },
    #[error("invalid universe: {value} is outside 0..=65535")]
    InvalidUniverse { value: i64 },
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("invalid ArtDMX length: header declares {length} bytes, {available} present")]
    InvalidLength { length: u16, available: usize },
}
