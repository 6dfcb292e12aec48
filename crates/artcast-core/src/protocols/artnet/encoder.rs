use tracing::warn;

use super::error::ArtNetError;
use super::layout;
use super::universe::Universe;
use super::writer::ArtNetWriter;

/// Fields of one outgoing ArtDmx packet, borrowed from the caller.
///
/// # Examples
/// ```
/// use artcast_core::{ArtDmxPacket, Universe};
///
/// let packet = ArtDmxPacket::new(Universe::new(1), &[255, 0, 128]);
/// assert_eq!(packet.encoded_len(), 21);
/// let bytes = packet.encode()?;
/// assert_eq!(&bytes[14..18], &[1, 0, 0, 3]);
/// # Ok::<(), artcast_core::ArtNetError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtDmxPacket<'a> {
    pub sequence: u8,
    pub physical: u8,
    pub universe: Universe,
    pub frame: &'a [u8],
}

impl<'a> ArtDmxPacket<'a> {
    /// Packet with the sequence and physical fields left at zero.
    pub fn new(universe: Universe, frame: &'a [u8]) -> Self {
        Self {
            sequence: layout::SEQUENCE_DISABLED,
            physical: layout::PHYSICAL_DEFAULT,
            universe,
            frame,
        }
    }

    pub fn encoded_len(&self) -> usize {
        layout::DMX_DATA_OFFSET + self.frame.len()
    }

    pub fn encode(&self) -> Result<Vec<u8>, ArtNetError> {
        encode_artdmx(self.sequence, self.physical, self.universe, self.frame)
    }
}

/// Serialize one ArtDmx packet.
///
/// The frame length is checked before anything is written, so a rejected
/// frame never produces a partial packet.
///
/// # Errors
/// Returns `ArtNetError::InvalidChannelFrame` when the frame is longer than
/// the 16-bit length field can describe.
pub fn encode_artdmx(
    sequence: u8,
    physical: u8,
    universe: Universe,
    frame: &[u8],
) -> Result<Vec<u8>, ArtNetError> {
    if frame.len() > layout::MAX_FRAME_LEN {
        return Err(ArtNetError::InvalidChannelFrame {
            length: frame.len(),
            max: layout::MAX_FRAME_LEN,
        });
    }
    if frame.len() > layout::DMX_MAX_SLOTS {
        warn!(
            length = frame.len(),
            universe = universe.get(),
            "channel frame exceeds 512 slots; receivers may truncate it"
        );
    }

    let mut writer = ArtNetWriter::with_capacity(layout::DMX_DATA_OFFSET + frame.len());
    writer.write_signature();
    writer.write_u16_le(layout::ARTDMX_OPCODE);
    writer.write_u16_be(layout::PROTOCOL_VERSION);
    writer.write_u8(sequence);
    writer.write_u8(physical);
    writer.write_slice(&universe.to_wire());
    writer.write_length_be(frame.len())?;
    writer.write_slice(frame);
    Ok(writer.into_bytes())
}
