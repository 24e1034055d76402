// src/header/decode.rs
use super::TrxHeader;
use crate::error::{Result, TrxError};
use crate::types::ByteOrder;
use byteorder::{BigEndian, ByteOrder as Endian, LittleEndian};

/// Decode a TRX header from the start of `buffer`.
///
/// `buffer` must hold at least [`TrxHeader::SIZE`] bytes; anything past that is
/// ignored, whatever `total_length` says. The magic tag is matched as raw
/// bytes and picks the byte order used for every other field.
///
/// # Errors
///
/// * [`TrxError::TruncatedHeader`] if `buffer` is shorter than 28 bytes
/// * [`TrxError::InvalidMagic`] if the first four bytes are neither `HDR0` nor `0RDH`
///
/// # Example
///
/// ```
/// use trx_rs::{decode_header, ByteOrder};
///
/// let mut bytes = [0u8; 28];
/// bytes[..4].copy_from_slice(b"HDR0");
/// bytes[4] = 0x20;
///
/// let header = decode_header(&bytes).unwrap();
/// assert_eq!(header.byte_order(), ByteOrder::LittleEndian);
/// assert_eq!(header.total_length(), 32);
/// ```
pub fn decode_header(buffer: &[u8]) -> Result<TrxHeader> {
    let bytes = buffer
        .get(..TrxHeader::SIZE)
        .and_then(|head| <&[u8; TrxHeader::SIZE]>::try_from(head).ok())
        .ok_or(TrxError::TruncatedHeader {
            required: TrxHeader::SIZE,
            actual: buffer.len(),
        })?;

    let mut magic = [0u8; 4];
    magic.copy_from_slice(&bytes[TrxHeader::MAGIC_OFFSET..TrxHeader::MAGIC_OFFSET + 4]);

    let byte_order = ByteOrder::from_magic(&magic).ok_or(TrxError::InvalidMagic { found: magic })?;

    let header = match byte_order {
        ByteOrder::LittleEndian => read_fields::<LittleEndian>(bytes, magic, byte_order),
        ByteOrder::BigEndian => read_fields::<BigEndian>(bytes, magic, byte_order),
    };

    Ok(header)
}

fn read_fields<E: Endian>(
    bytes: &[u8; TrxHeader::SIZE],
    magic: [u8; 4],
    byte_order: ByteOrder,
) -> TrxHeader {
    let u32_at = |offset: usize| E::read_u32(&bytes[offset..offset + 4]);
    let u16_at = |offset: usize| E::read_u16(&bytes[offset..offset + 2]);

    TrxHeader {
        magic,
        byte_order,
        total_length: u32_at(TrxHeader::LENGTH_OFFSET),
        crc32: u32_at(TrxHeader::CRC_OFFSET),
        flags: u16_at(TrxHeader::FLAGS_OFFSET),
        version: u16_at(TrxHeader::VERSION_OFFSET),
        partition_offsets: TrxHeader::PARTITION_OFFSETS.map(u32_at),
    }
}

impl TryFrom<&[u8]> for TrxHeader {
    type Error = TrxError;

    fn try_from(buffer: &[u8]) -> Result<Self> {
        decode_header(buffer)
    }
}
