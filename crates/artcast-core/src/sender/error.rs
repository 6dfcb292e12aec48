use thiserror::Error;

use crate::protocols::artnet::ArtNetError;
use crate::transport::TransportError;

/// Errors returned by [`ArtNetSender`](crate::ArtNetSender).
///
/// # Examples
/// ```
/// use artcast_core::SenderError;
///
/// let err = SenderError::SenderClosed;
/// assert_eq!(err.to_string(), "sender is closed");
/// ```
#[derive(Debug, Error)]
pub enum SenderError {
    /// Frame or universe rejected before any byte was built.
    #[error(transparent)]
    Protocol(#[from] ArtNetError),
    #[error("sender is closed")]
    SenderClosed,
    /// The datagram could not even be handed to the transport.
    #[error("transport failure: {0}")]
    TransportFailure(#[from] TransportError),
    #[error("sender state lock poisoned")]
    Poisoned,
}

impl SenderError {
    pub fn is_closed(&self) -> bool {
        matches!(self, SenderError::SenderClosed)
    }
}
