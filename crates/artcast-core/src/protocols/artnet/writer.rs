use super::error::ArtNetError;
use super::layout;

/// Append-only byte sink that owns the Art-Net byte-order conventions.
pub struct ArtNetWriter {
    buf: Vec<u8>,
}

impl ArtNetWriter {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn write_signature(&mut self) {
        self.buf.extend_from_slice(layout::ARTNET_ID);
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_u16_le(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u16_be(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Write a length prefix (big-endian) for a slice that must fit in 16 bits.
    pub fn write_length_be(&mut self, length: usize) -> Result<(), ArtNetError> {
        let value = u16::try_from(length).map_err(|_| ArtNetError::InvalidChannelFrame {
            length,
            max: layout::MAX_FRAME_LEN,
        })?;
        self.write_u16_be(value);
        Ok(())
    }

    pub fn write_slice(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
