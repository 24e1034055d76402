// src/types.rs
use std::fmt;

/// Byte order of every integer field in a TRX header.
///
/// A TRX header carries no explicit endianness field; the order is implied by
/// which spelling of the magic tag is present. The two tags are byte-reversals
/// of each other, so they are matched as raw bytes rather than as a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
}

impl ByteOrder {
    pub const MAGIC_LE: &'static [u8; 4] = b"HDR0";
    pub const MAGIC_BE: &'static [u8; 4] = b"0RDH";

    /// Pick the byte order selected by a magic tag, or `None` for an unknown tag
    pub fn from_magic(tag: &[u8; 4]) -> Option<Self> {
        match tag {
            t if t == Self::MAGIC_LE => Some(ByteOrder::LittleEndian),
            t if t == Self::MAGIC_BE => Some(ByteOrder::BigEndian),
            _ => None,
        }
    }

    /// The magic tag that selects this byte order
    pub fn magic(&self) -> &'static [u8; 4] {
        match self {
            ByteOrder::LittleEndian => Self::MAGIC_LE,
            ByteOrder::BigEndian => Self::MAGIC_BE,
        }
    }

    pub fn is_big_endian(&self) -> bool {
        matches!(self, ByteOrder::BigEndian)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::BigEndian => "big endian",
            ByteOrder::LittleEndian => "little endian",
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
