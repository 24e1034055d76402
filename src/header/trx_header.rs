// src/header/trx_header.rs
use crate::error::Result;
use crate::types::ByteOrder;

/// Decoded TRX header.
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +---------------------------------------------------------------+
/// |                  magic number ('HDR0' / '0RDH')               |
/// +---------------------------------------------------------------+
/// |                  length (header size + data)                  |
/// +---------------------------------------------------------------+
/// |                       32-bit CRC value                        |
/// +-------------------------------+-------------------------------+
/// |           TRX flags           |          TRX version          |
/// +-------------------------------+-------------------------------+
/// |                      Partition offset[0]                      |
/// +---------------------------------------------------------------+
/// |                      Partition offset[1]                      |
/// +---------------------------------------------------------------+
/// |                      Partition offset[2]                      |
/// +---------------------------------------------------------------+
/// ```
///
/// Values are only produced by [`decode_header`](super::decode_header), so a
/// `TrxHeader` always carries one of the two recognised magic tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrxHeader {
    pub(crate) magic: [u8; 4],
    pub(crate) byte_order: ByteOrder,
    pub(crate) total_length: u32,
    pub(crate) crc32: u32,
    pub(crate) flags: u16,
    pub(crate) version: u16,
    pub(crate) partition_offsets: [u32; 3],
}

impl TrxHeader {
    pub const SIZE: usize = 28;
    pub const MAGIC_LE: &'static [u8; 4] = ByteOrder::MAGIC_LE;
    pub const MAGIC_BE: &'static [u8; 4] = ByteOrder::MAGIC_BE;
    pub const MAX_PARTITIONS: usize = 3;

    // Field offsets within the header
    pub const MAGIC_OFFSET: usize = 0;
    pub const LENGTH_OFFSET: usize = 4;
    pub const CRC_OFFSET: usize = 8;
    pub const FLAGS_OFFSET: usize = 12;
    pub const VERSION_OFFSET: usize = 14;
    pub const PARTITION_OFFSETS: [usize; 3] = [16, 20, 24];

    /// Decode a header from the first 28 bytes of `buffer`.
    ///
    /// Shorthand for [`decode_header`](super::decode_header).
    pub fn decode(buffer: &[u8]) -> Result<Self> {
        super::decode_header(buffer)
    }

    /// The magic tag exactly as found at offset 0
    pub fn magic(&self) -> &[u8; 4] {
        &self.magic
    }

    /// The magic tag as text ("HDR0" or "0RDH")
    pub fn magic_str(&self) -> &'static str {
        match self.byte_order {
            ByteOrder::LittleEndian => "HDR0",
            ByteOrder::BigEndian => "0RDH",
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Header size plus payload size, in bytes
    pub fn total_length(&self) -> u32 {
        self.total_length
    }

    /// Image checksum as stored; it is not verified
    pub fn crc32(&self) -> u32 {
        self.crc32
    }

    pub fn flags(&self) -> u16 {
        self.flags
    }

    pub fn version(&self) -> u16 {
        self.version
    }

    /// All three partition offsets, relative to the start of the header
    pub fn partition_offsets(&self) -> [u32; 3] {
        self.partition_offsets
    }

    /// Offset of partition `index` (0-based), or `None` if out of range
    pub fn partition_offset(&self, index: usize) -> Option<u32> {
        self.partition_offsets.get(index).copied()
    }

    /// Iterate over `(index, offset)` for partitions whose offset is non-zero.
    ///
    /// Zero conventionally marks an unused slot. Offsets are not checked
    /// against `total_length`.
    pub fn active_partitions(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.partition_offsets
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, offset)| offset != 0)
    }
}
