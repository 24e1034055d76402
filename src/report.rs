// src/report.rs
//! Plain-text rendering of a decoded header, one field per line.
//!
//! ```
//! use trx_rs::{decode_header, HeaderReport};
//!
//! let mut bytes = [0u8; 28];
//! bytes[..4].copy_from_slice(b"0RDH");
//! let header = decode_header(&bytes).unwrap();
//!
//! let text = HeaderReport::new(&header).to_string();
//! assert!(text.starts_with("Endianness:"));
//! assert!(text.contains("big endian"));
//! ```

use crate::header::TrxHeader;
use std::fmt;

const LABEL_WIDTH: usize = 33;

/// Display adapter that renders a [`TrxHeader`] as a field report
#[derive(Debug, Clone, Copy)]
pub struct HeaderReport<'a> {
    header: &'a TrxHeader,
}

impl<'a> HeaderReport<'a> {
    pub fn new(header: &'a TrxHeader) -> Self {
        HeaderReport { header }
    }
}

impl fmt::Display for HeaderReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.header;
        let w = LABEL_WIDTH;

        writeln!(f, "{:<w$}{}", "Endianness:", h.byte_order())?;
        writeln!(f, "{:<w$}{}", "Magic:", h.magic_str())?;
        writeln!(f, "{:<w$}{}", "Length of TRX header + image:", h.total_length())?;
        writeln!(f, "{:<w$}0x{:08x}", "CRC:", h.crc32())?;
        writeln!(f, "{:<w$}0x{:04x}", "Flags:", h.flags())?;
        writeln!(f, "{:<w$}0x{:04x}", "Version:", h.version())?;
        for (index, offset) in h.partition_offsets().iter().enumerate() {
            let label = format!("Partition {} offset:", index + 1);
            writeln!(f, "{:<w$}{}", label, offset)?;
        }
        Ok(())
    }
}
