use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ArtNetError;

/// Art-Net Port-Address (15 bits used by the protocol, 16 bits on the wire).
///
/// Conversion from `u16` is infallible; wider integers are range-checked.
///
/// # Examples
/// ```
/// use artcast_core::Universe;
///
/// let universe = Universe::try_from(0x0123u32).unwrap();
/// assert_eq!(universe.to_wire(), [0x23, 0x01]);
/// assert_eq!(universe.net(), 0x01);
/// assert_eq!(universe.sub_net(), 0x2);
/// assert_eq!(universe.sub_uni(), 0x3);
/// assert!(Universe::try_from(65_536u32).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct Universe(u16);

impl Universe {
    pub const MAX: Universe = Universe(u16::MAX);

    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u16 {
        self.0
    }

    /// Low byte first, independent of host byte order.
    pub const fn to_wire(self) -> [u8; 2] {
        [(self.0 & 0xFF) as u8, ((self.0 >> 8) & 0xFF) as u8]
    }

    /// Net component (bits 8..14).
    pub const fn net(self) -> u8 {
        ((self.0 >> 8) & 0x7F) as u8
    }

    /// Sub-Net component (bits 4..7).
    pub const fn sub_net(self) -> u8 {
        ((self.0 >> 4) & 0x0F) as u8
    }

    /// Universe component within the Sub-Net (bits 0..3).
    pub const fn sub_uni(self) -> u8 {
        (self.0 & 0x0F) as u8
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for Universe {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Universe> for u16 {
    fn from(value: Universe) -> Self {
        value.0
    }
}

impl TryFrom<i64> for Universe {
    type Error = ArtNetError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .map(Self)
            .map_err(|_| ArtNetError::InvalidUniverse { value })
    }
}

impl TryFrom<u32> for Universe {
    type Error = ArtNetError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::Universe;
    use crate::protocols::artnet::error::ArtNetError;

    #[test]
    fn wire_bytes_are_low_then_high() {
        assert_eq!(Universe::new(0).to_wire(), [0, 0]);
        assert_eq!(Universe::new(1).to_wire(), [1, 0]);
        assert_eq!(Universe::new(0x1234).to_wire(), [0x34, 0x12]);
        assert_eq!(Universe::MAX.to_wire(), [0xFF, 0xFF]);
    }

    #[test]
    fn wire_bytes_match_split_for_every_universe() {
        for raw in 0..=u16::MAX {
            let [lo, hi] = Universe::new(raw).to_wire();
            assert_eq!(lo, (raw & 0xFF) as u8);
            assert_eq!(hi, (raw >> 8) as u8);
        }
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            Universe::try_from(65_536u32),
            Err(ArtNetError::InvalidUniverse { value: 65_536 })
        );
        assert_eq!(
            Universe::try_from(-1i64),
            Err(ArtNetError::InvalidUniverse { value: -1 })
        );
        assert_eq!(Universe::try_from(65_535u32), Ok(Universe::MAX));
    }

    #[test]
    fn port_address_components() {
        let universe = Universe::new(0x7FFF);
        assert_eq!(universe.net(), 0x7F);
        assert_eq!(universe.sub_net(), 0x0F);
        assert_eq!(universe.sub_uni(), 0x0F);
    }

    #[test]
    fn serde_rejects_out_of_range() {
        let ok: Universe = serde_json::from_str("42").expect("universe json");
        assert_eq!(ok.get(), 42);
        assert!(serde_json::from_str::<Universe>("70000").is_err());
        assert_eq!(serde_json::to_string(&ok).expect("serialize"), "42");
    }
}
