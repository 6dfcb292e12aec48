//! Protocol encoding modules.
//!
//! Each protocol follows a layered structure:
//! - `layout`: byte offsets, ranges and constants (source of truth)
//! - `writer` / `reader`: safe byte access and byte-order conventions
//! - `encoder` / `parser`: domain-level encoding and decoding (no direct
//!   byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Everything here is pure and contains no I/O; the transport layer owns
//! sockets.

pub mod artnet;
