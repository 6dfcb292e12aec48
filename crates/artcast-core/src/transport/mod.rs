//! Datagram transports.
//!
//! A transport takes a finished payload and an endpoint and attempts one
//! delivery. There is no acknowledgment: `Ok(())` means the datagram was
//! handed to the operating system, not that anyone received it.

mod error;
mod udp;

pub use error::TransportError;
pub use udp::{MAX_IPV4_FRAME_LEN, MAX_IPV4_UDP_PAYLOAD, UdpTransport};

use crate::config::Endpoint;

pub trait DatagramTransport {
    fn send_to(&self, payload: &[u8], endpoint: &Endpoint) -> Result<(), TransportError>;
}
