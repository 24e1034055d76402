// src/lib.rs
//! # trx-rs
//!
//! A small Rust library for decoding the header of TRX firmware containers,
//! the image format used by Broadcom-based routers and OpenWrt builds.
//!
//! ## Features
//!
//! - 🔍 **Strict Decoding**: Length and magic are checked before any field is read
//! - 🔀 **Both Byte Orders**: `HDR0` (little endian) and `0RDH` (big endian) images
//! - 🧊 **Immutable Headers**: Decoded headers are plain `Copy` values
//! - 📂 **Offset Reads**: Locate a header anywhere inside a larger image
//!
//! ## Quick Start
//!
//! ### Decoding a Buffer
//!
//! ```rust
//! use trx_rs::*;
//!
//! fn main() -> Result<()> {
//!     let mut bytes = [0u8; 28];
//!     bytes[..4].copy_from_slice(b"HDR0");
//!     bytes[4..8].copy_from_slice(&4096u32.to_le_bytes());
//!
//!     let header = decode_header(&bytes)?;
//!     assert_eq!(header.byte_order(), ByteOrder::LittleEndian);
//!     assert_eq!(header.total_length(), 4096);
//!     Ok(())
//! }
//! ```
//!
//! ### Reading From a Firmware Image
//!
//! ```rust,no_run
//! use trx_rs::*;
//!
//! fn main() -> Result<()> {
//!     let mut reader = TrxReader::open("firmware.bin")?;
//!     let header = reader.read_header(0x80)?;
//!
//!     print!("{}", HeaderReport::new(&header));
//!     Ok(())
//! }
//! ```

// Modules
pub mod error;
pub mod types;
pub mod header;
pub mod reader;
pub mod report;

// Re-export commonly used types at the crate root for convenience
pub use error::{TrxError, Result};

pub use types::ByteOrder;

pub use header::{decode_header, TrxHeader};

pub use reader::{parse_offset, read_header_from_file, TrxReader};

pub use report::HeaderReport;

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use trx_rs::prelude::*;
    //! ```

    pub use crate::error::{TrxError, Result};
    pub use crate::types::ByteOrder;
    pub use crate::header::{decode_header, TrxHeader};
    pub use crate::reader::TrxReader;
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
