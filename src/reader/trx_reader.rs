// src/reader/trx_reader.rs
use crate::error::{Result, TrxError};
use crate::header::{decode_header, TrxHeader};
use log::{debug, trace};
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

#[cfg(feature = "mmap")]
use memmap2::Mmap;
#[cfg(feature = "mmap")]
use std::io::Cursor;

/// Trait alias for Read + Seek
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// Reads TRX header bytes out of a larger firmware image.
///
/// The header may sit anywhere in the image (bootloaders often prepend their
/// own data), so every read takes the byte offset of the header.
pub struct TrxReader<R: ReadSeek> {
    source: R,
}

/// Constructor for standard file I/O
impl TrxReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening firmware image {}", path.display());
        let file = File::open(path)?;
        Ok(TrxReader::new(BufReader::new(file)))
    }
}

/// Constructor for memory-mapped file I/O (requires "mmap" feature)
#[cfg(feature = "mmap")]
impl TrxReader<Cursor<Mmap>> {
    pub fn open_mmap(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Mapping firmware image {}", path.display());
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(TrxReader::new(Cursor::new(mmap)))
    }
}

impl<R: ReadSeek> TrxReader<R> {
    pub fn new(source: R) -> Self {
        TrxReader { source }
    }

    /// Read the raw header bytes starting at `offset`.
    ///
    /// Fails with [`TrxError::TruncatedHeader`] when the source ends before
    /// 28 bytes are available, including when `offset` lies past the end.
    pub fn read_header_bytes(&mut self, offset: u64) -> Result<[u8; TrxHeader::SIZE]> {
        debug!("Reading {} header bytes at offset {:#x}", TrxHeader::SIZE, offset);
        self.source.seek(SeekFrom::Start(offset))?;

        let mut buf = Vec::with_capacity(TrxHeader::SIZE);
        (&mut self.source)
            .take(TrxHeader::SIZE as u64)
            .read_to_end(&mut buf)?;
        trace!("Read {} bytes: {:02x?}", buf.len(), buf);

        <[u8; TrxHeader::SIZE]>::try_from(buf.as_slice()).map_err(|_| TrxError::TruncatedHeader {
            required: TrxHeader::SIZE,
            actual: buf.len(),
        })
    }

    /// Read and decode the header starting at `offset`
    pub fn read_header(&mut self, offset: u64) -> Result<TrxHeader> {
        let bytes = self.read_header_bytes(offset)?;
        decode_header(&bytes)
    }

    pub fn into_inner(self) -> R {
        self.source
    }
}

/// Open `path` and decode the TRX header found at `offset`
pub fn read_header_from_file(path: impl AsRef<Path>, offset: u64) -> Result<TrxHeader> {
    TrxReader::open(path)?.read_header(offset)
}
