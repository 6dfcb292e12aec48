use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to resolve host '{host}': {message}")]
    Resolve { host: String, message: String },
    #[error("host '{host}' has no IPv4 address")]
    NoIpv4Address { host: String },
    #[error("datagram too large: {size} bytes, IPv4 UDP carries at most {max}")]
    PayloadTooLarge { size: usize, max: usize },
    #[error("resolver cache lock poisoned")]
    CachePoisoned,
}
