use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4, ToSocketAddrs, UdpSocket};
use std::sync::Mutex;

use tracing::{debug, trace};

use super::{DatagramTransport, TransportError};
use crate::config::Endpoint;
use crate::protocols::artnet::layout;

/// Largest UDP payload an IPv4 datagram can carry (65535 - 20 IP - 8 UDP).
pub const MAX_IPV4_UDP_PAYLOAD: usize = 65_507;
/// Longest channel frame that still fits in one IPv4 UDP datagram.
pub const MAX_IPV4_FRAME_LEN: usize = MAX_IPV4_UDP_PAYLOAD - layout::DMX_DATA_OFFSET;

/// IPv4 UDP socket bound to an ephemeral local port.
///
/// The socket is non-blocking: a send that cannot be queued immediately is
/// reported as an error instead of stalling the caller.
///
/// Payloads above [`MAX_IPV4_UDP_PAYLOAD`] are rejected with
/// `TransportError::PayloadTooLarge` before reaching the socket. For ArtDmx
/// this means frames of 65490..=65535 bytes encode fine but cannot be sent
/// over IPv4 UDP.
///
/// Dotted-quad hosts never touch the resolver. A hostname is resolved on the
/// first send to that endpoint, which blocks on the system resolver; the
/// result is cached and reused until a different endpoint is used.
#[derive(Debug)]
pub struct UdpTransport {
    socket: UdpSocket,
    resolved: Mutex<Option<(Endpoint, SocketAddrV4)>>,
}

impl UdpTransport {
    /// Bind `0.0.0.0:0` and optionally enable broadcast.
    pub fn bind(broadcast: bool) -> Result<Self, TransportError> {
        Self::bind_to(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0), broadcast)
    }

    pub fn bind_to(local: SocketAddrV4, broadcast: bool) -> Result<Self, TransportError> {
        let socket = UdpSocket::bind(local)?;
        socket.set_broadcast(broadcast)?;
        socket.set_nonblocking(true)?;
        Ok(Self {
            socket,
            resolved: Mutex::new(None),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, TransportError> {
        Ok(self.socket.local_addr()?)
    }

    pub fn broadcast(&self) -> Result<bool, TransportError> {
        Ok(self.socket.broadcast()?)
    }

    fn target(&self, endpoint: &Endpoint) -> Result<SocketAddrV4, TransportError> {
        if let Ok(ip) = endpoint.host.parse::<Ipv4Addr>() {
            return Ok(SocketAddrV4::new(ip, endpoint.port));
        }
        let mut cache = self
            .resolved
            .lock()
            .map_err(|_| TransportError::CachePoisoned)?;
        if let Some((cached, addr)) = cache.as_ref() {
            if cached == endpoint {
                return Ok(*addr);
            }
        }
        let addr = resolve_ipv4(endpoint)?;
        debug!(%endpoint, %addr, "resolved destination host");
        *cache = Some((endpoint.clone(), addr));
        Ok(addr)
    }
}

impl DatagramTransport for UdpTransport {
    fn send_to(&self, payload: &[u8], endpoint: &Endpoint) -> Result<(), TransportError> {
        if payload.len() > MAX_IPV4_UDP_PAYLOAD {
            return Err(TransportError::PayloadTooLarge {
                size: payload.len(),
                max: MAX_IPV4_UDP_PAYLOAD,
            });
        }
        let target = self.target(endpoint)?;
        let written = self.socket.send_to(payload, target)?;
        trace!(%target, written, "datagram handed to socket");
        Ok(())
    }
}

/// Resolve an endpoint to its first IPv4 socket address.
pub(crate) fn resolve_ipv4(endpoint: &Endpoint) -> Result<SocketAddrV4, TransportError> {
    if let Ok(ip) = endpoint.host.parse::<Ipv4Addr>() {
        return Ok(SocketAddrV4::new(ip, endpoint.port));
    }
    let addrs = (endpoint.host.as_str(), endpoint.port)
        .to_socket_addrs()
        .map_err(|err| TransportError::Resolve {
            host: endpoint.host.clone(),
            message: err.to_string(),
        })?;
    addrs
        .filter_map(|addr| match addr {
            SocketAddr::V4(v4) => Some(v4),
            SocketAddr::V6(_) => None,
        })
        .next()
        .ok_or_else(|| TransportError::NoIpv4Address {
            host: endpoint.host.clone(),
        })
}
