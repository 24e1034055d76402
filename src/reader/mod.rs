// src/reader/mod.rs
mod offset;
mod trx_reader;

pub use offset::parse_offset;
pub use trx_reader::{read_header_from_file, ReadSeek, TrxReader};
