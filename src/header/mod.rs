// src/header/mod.rs
mod decode;
mod trx_header;

pub use decode::decode_header;
pub use trx_header::TrxHeader;
