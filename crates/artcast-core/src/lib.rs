//! artcast core library: Art-Net DMX output over UDP.
//!
//! The crate is split the same way a packet flows out of it: the `protocols`
//! layer serializes ArtDmx packets (layout/writer/encoder, with a matching
//! reader/parser for verification), `transport` hands finished datagrams to
//! the network, and `sender` ties the two together with the addressing state
//! (endpoint and universe). Encoding is pure and side-effect free; all socket
//! I/O is isolated in `transport`.
//!
//! Invariants:
//! - Header bytes are fixed constants: `Art-Net\0`, opcode `0x00 0x50`,
//!   protocol version `0x00 0x0E`.
//! - Universe is written low byte first, length high byte first.
//! - Frames longer than 65535 bytes are rejected before any byte is built.
//!   Over IPv4 UDP only frames up to 65489 bytes fit in one datagram; longer
//!   ones fail in the transport.
//! - Sending is fire-and-forget. A successful `send` means the datagram was
//!   handed to the socket, not that it arrived.
//! - The sequence byte is always 0 (sequencing disabled).
//!
//! # Examples
//! ```no_run
//! use artcast_core::{ArtNetSender, SenderConfig, Universe};
//!
//! let config = SenderConfig {
//!     host: "192.168.1.50".to_string(),
//!     universe: Universe::new(1),
//!     ..SenderConfig::default()
//! };
//! let sender = ArtNetSender::connect(config)?;
//! let receipt = sender.send(&[255, 0, 128])?;
//! println!("dispatched {} bytes to {}", receipt.bytes, receipt.endpoint);
//! sender.close()?;
//! # Ok::<(), artcast_core::SenderError>(())
//! ```

mod config;
mod protocols;
mod sender;
mod transport;

pub use config::{ConfigError, DEFAULT_HOST, DEFAULT_PORT, Endpoint, SenderConfig};
pub use protocols::artnet::{
    ArtDmx, ArtDmxPacket, ArtNetError, Universe, encode_artdmx, layout, parse_artdmx,
};
pub use sender::{ArtNetSender, SendReceipt, SenderError};
pub use transport::{
    DatagramTransport, MAX_IPV4_FRAME_LEN, MAX_IPV4_UDP_PAYLOAD, TransportError, UdpTransport,
};
