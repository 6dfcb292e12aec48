use super::error::ArtNetError;
use super::layout;
use super::reader::ArtNetReader;
use super::universe::Universe;

/// Decoded ArtDmx packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtDmx {
    pub protocol_version: u16,
    pub sequence: u8,
    pub physical: u8,
    pub universe: Universe,
    pub data: Vec<u8>,
}

/// Decode an ArtDmx payload.
///
/// Returns `Ok(None)` when the payload carries a different signature or
/// opcode. Trailing bytes past the declared length are ignored.
///
/// # Examples
/// ```
/// use artcast_core::{Universe, encode_artdmx, parse_artdmx};
///
/// let bytes = encode_artdmx(0, 0, Universe::new(4), &[9, 8, 7])?;
/// let packet = parse_artdmx(&bytes)?.expect("ArtDmx packet");
/// assert_eq!(packet.universe, Universe::new(4));
/// assert_eq!(packet.data, vec![9, 8, 7]);
/// # Ok::<(), artcast_core::ArtNetError>(())
/// ```
pub fn parse_artdmx(payload: &[u8]) -> Result<Option<ArtDmx>, ArtNetError> {
    let reader = ArtNetReader::new(payload);
    reader.require_len(layout::DMX_DATA_OFFSET)?;

    let signature = reader.read_signature()?;
    if signature != layout::ARTNET_ID {
        return Ok(None);
    }

    let opcode = reader.read_u16_le(layout::OP_CODE_RANGE)?;
    if opcode != layout::ARTDMX_OPCODE {
        return Ok(None);
    }

    let protocol_version = reader.read_u16_be(layout::PROT_VER_RANGE)?;
    let sequence = reader.read_u8(layout::SEQUENCE_OFFSET)?;
    let physical = reader.read_u8(layout::PHYSICAL_OFFSET)?;
    let universe = Universe::new(reader.read_u16_le(layout::UNIVERSE_RANGE)?);
    let length = reader.read_u16_be(layout::LENGTH_RANGE)?;

    let needed = layout::DMX_DATA_OFFSET + length as usize;
    if reader.len() < needed {
        return Err(ArtNetError::InvalidLength {
            length,
            available: reader.len() - layout::DMX_DATA_OFFSET,
        });
    }
    let data = reader.read_slice(layout::DMX_DATA_OFFSET..needed)?.to_vec();

    Ok(Some(ArtDmx {
        protocol_version,
        sequence,
        physical,
        universe,
        data,
    }))
}
