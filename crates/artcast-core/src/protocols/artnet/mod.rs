//! Art-Net protocol encoding.
//!
//! The encoder serializes ArtDmx (OpOutput) packets byte for byte: fixed
//! signature, opcode low byte first, protocol version high byte first,
//! sequence, physical port, universe low byte first, length high byte first,
//! then the channel frame. Universe and length use opposite byte orders on
//! the wire; the asymmetry is part of the protocol.
//!
//! The sequence byte is always written as zero ("sequencing disabled"),
//! which receivers treat as "do not reorder". Loss detection is therefore not
//! available to receivers of this sender.
//!
//! A matching decoder is kept for verification and tooling. Byte offsets live
//! in `layout`; byte-order conventions live in `writer` and `reader`.

pub mod encoder;
pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod universe;
pub mod writer;

pub use encoder::{ArtDmxPacket, encode_artdmx};
pub use error::ArtNetError;
pub use parser::{ArtDmx, parse_artdmx};
pub use universe::Universe;
