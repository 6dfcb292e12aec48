pub const ARTNET_ID: &[u8; 8] = b"Art-Net\0";

pub const ID_RANGE: std::ops::Range<usize> = 0..8;
pub const OP_CODE_RANGE: std::ops::Range<usize> = 8..10;
pub const PROT_VER_RANGE: std::ops::Range<usize> = 10..12;
pub const SEQUENCE_OFFSET: usize = 12;
pub const PHYSICAL_OFFSET: usize = 13;
pub const UNIVERSE_RANGE: std::ops::Range<usize> = 14..16;
pub const LENGTH_RANGE: std::ops::Range<usize> = 16..18;
pub const DMX_DATA_OFFSET: usize = 18;

/// OpOutput / OpDmx, transmitted low byte first.
pub const ARTDMX_OPCODE: u16 = 0x5000;
/// Protocol revision 14, transmitted high byte first.
pub const PROTOCOL_VERSION: u16 = 14;

pub const HEADER_LEN: usize = SEQUENCE_OFFSET;
pub const MAX_FRAME_LEN: usize = u16::MAX as usize;
/// Slots a DMX512 universe carries; longer frames are legal on the wire but
/// most receivers ignore anything past this.
pub const DMX_MAX_SLOTS: usize = 512;

pub const SEQUENCE_DISABLED: u8 = 0;
pub const PHYSICAL_DEFAULT: u8 = 0;
