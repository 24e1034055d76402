// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrxError {
    #[error("Truncated TRX header: need {required} bytes, got {actual}")]
    TruncatedHeader { required: usize, actual: usize },

    #[error("Invalid TRX magic: expected \"HDR0\" or \"0RDH\", found {found:02x?}")]
    InvalidMagic { found: [u8; 4] },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid header offset: {0}")]
    InvalidOffset(String),
}

pub type Result<T> = std::result::Result<T, TrxError>;
