//! Addressed Art-Net sender.
//!
//! `ArtNetSender` owns the destination endpoint, the current universe and one
//! transport. Each `send` snapshots the configuration, encodes a fresh packet
//! and hands it to the transport without waiting for delivery. After `close`
//! the sender is terminal: every mutating operation fails with
//! `SenderError::SenderClosed`.

mod error;

pub use error::SenderError;

use std::sync::{Mutex, RwLock};

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{Endpoint, SenderConfig};
use crate::protocols::artnet::{ArtDmxPacket, Universe, layout};
use crate::transport::{DatagramTransport, UdpTransport};

/// What a successful `send` dispatched.
///
/// A receipt confirms that the datagram was handed to the transport. Art-Net
/// over UDP has no acknowledgment, so it says nothing about reception.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendReceipt {
    pub endpoint: Endpoint,
    pub universe: Universe,
    pub bytes: usize,
}

#[derive(Debug, Clone)]
struct SenderState {
    endpoint: Endpoint,
    universe: Universe,
}

/// Art-Net DMX sender bound to one transport.
///
/// # Examples
/// ```no_run
/// use artcast_core::{ArtNetSender, SenderConfig, Universe};
///
/// let sender = ArtNetSender::connect(SenderConfig::default())?;
/// sender.set_universe(Universe::new(1))?;
/// sender.send(&[255, 0, 128])?;
/// sender.close()?;
/// # Ok::<(), artcast_core::SenderError>(())
/// ```
#[derive(Debug)]
pub struct ArtNetSender<T: DatagramTransport = UdpTransport> {
    state: Mutex<SenderState>,
    transport: RwLock<Option<T>>,
}

impl ArtNetSender<UdpTransport> {
    /// Bind a UDP socket and build a sender from `config`.
    pub fn connect(config: SenderConfig) -> Result<Self, SenderError> {
        let transport = UdpTransport::bind(config.broadcast)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: DatagramTransport> ArtNetSender<T> {
    pub fn with_transport(config: SenderConfig, transport: T) -> Self {
        let endpoint = config.endpoint();
        info!(
            %endpoint,
            universe = config.universe.get(),
            broadcast = config.broadcast,
            "art-net sender created"
        );
        Self {
            state: Mutex::new(SenderState {
                endpoint,
                universe: config.universe,
            }),
            transport: RwLock::new(Some(transport)),
        }
    }

    /// Update any of host, port and universe; `None` keeps the current value.
    ///
    /// Packets already handed to the transport are unaffected.
    pub fn configure(
        &self,
        host: Option<String>,
        port: Option<u16>,
        universe: Option<Universe>,
    ) -> Result<(), SenderError> {
        self.with_open_state(|state| {
            if let Some(host) = host {
                state.endpoint.host = host;
            }
            if let Some(port) = port {
                state.endpoint.port = port;
            }
            if let Some(universe) = universe {
                state.universe = universe;
            }
            debug!(endpoint = %state.endpoint, universe = state.universe.get(), "sender reconfigured");
        })
    }

    /// Takes effect on the next `send`.
    pub fn set_universe(&self, universe: Universe) -> Result<(), SenderError> {
        self.with_open_state(|state| state.universe = universe)
    }

    /// Encode `frame` for the current universe and dispatch it.
    ///
    /// Returns as soon as the transport accepted the datagram. `Ok` means
    /// "dispatch attempted"; delivery is never confirmed. The sequence byte is
    /// always zero, so receivers cannot detect loss or reordering.
    ///
    /// # Errors
    /// - `SenderError::SenderClosed` after `close`, with nothing transmitted.
    /// - `SenderError::Protocol` when the frame exceeds 65535 bytes.
    /// - `SenderError::TransportFailure` when the datagram could not be handed
    ///   to the socket. With `UdpTransport` this includes every frame longer
    ///   than 65489 bytes ([`MAX_IPV4_FRAME_LEN`]): such frames encode, but
    ///   the 18-byte header pushes the packet past the IPv4 UDP payload limit.
    ///   A hostname endpoint is resolved (blocking) on the first send to it.
    ///
    /// [`MAX_IPV4_FRAME_LEN`]: crate::transport::MAX_IPV4_FRAME_LEN
    pub fn send(&self, frame: &[u8]) -> Result<SendReceipt, SenderError> {
        let guard = self.transport.read().map_err(|_| SenderError::Poisoned)?;
        let transport = guard.as_ref().ok_or(SenderError::SenderClosed)?;
        let SenderState { endpoint, universe } = self.snapshot()?;

        let packet = ArtDmxPacket {
            sequence: layout::SEQUENCE_DISABLED,
            physical: layout::PHYSICAL_DEFAULT,
            universe,
            frame,
        }
        .encode()?;
        transport.send_to(&packet, &endpoint)?;
        debug!(%endpoint, universe = universe.get(), bytes = packet.len(), "artdmx dispatched");

        Ok(SendReceipt {
            endpoint,
            universe,
            bytes: packet.len(),
        })
    }

    /// Release the transport. Closing twice is a no-op.
    pub fn close(&self) -> Result<(), SenderError> {
        let mut guard = self.transport.write().map_err(|_| SenderError::Poisoned)?;
        if guard.take().is_some() {
            debug!("art-net sender closed");
        }
        Ok(())
    }

    pub fn is_closed(&self) -> Result<bool, SenderError> {
        let guard = self.transport.read().map_err(|_| SenderError::Poisoned)?;
        Ok(guard.is_none())
    }

    pub fn endpoint(&self) -> Result<Endpoint, SenderError> {
        Ok(self.snapshot()?.endpoint)
    }

    pub fn universe(&self) -> Result<Universe, SenderError> {
        Ok(self.snapshot()?.universe)
    }

    fn snapshot(&self) -> Result<SenderState, SenderError> {
        let state = self.state.lock().map_err(|_| SenderError::Poisoned)?;
        Ok(state.clone())
    }

    fn with_open_state(&self, update: impl FnOnce(&mut SenderState)) -> Result<(), SenderError> {
        let guard = self.transport.read().map_err(|_| SenderError::Poisoned)?;
        if guard.is_none() {
            return Err(SenderError::SenderClosed);
        }
        let mut state = self.state.lock().map_err(|_| SenderError::Poisoned)?;
        update(&mut state);
        Ok(())
    }
}
