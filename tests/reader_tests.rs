// tests/reader_tests.rs
use std::io::Write;
use tempfile::NamedTempFile;
use trx_rs::*;

fn header_bytes(order: ByteOrder, total_length: u32, partitions: [u32; 3]) -> Vec<u8> {
    let be = order.is_big_endian();
    let word = |v: u32| if be { v.to_be_bytes() } else { v.to_le_bytes() };

    let mut bytes = order.magic().to_vec();
    bytes.extend_from_slice(&word(total_length));
    bytes.extend_from_slice(&word(0xCAFEBABE));
    bytes.extend_from_slice(&if be { 0u16.to_be_bytes() } else { 0u16.to_le_bytes() });
    bytes.extend_from_slice(&if be { 1u16.to_be_bytes() } else { 1u16.to_le_bytes() });
    for p in partitions {
        bytes.extend_from_slice(&word(p));
    }
    bytes
}

/// Write a firmware image with `prefix` bytes of padding before the header
fn write_image(prefix: usize, header: &[u8], payload: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&vec![0xFF; prefix]).unwrap();
    file.write_all(header).unwrap();
    file.write_all(&vec![0x5A; payload]).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_read_header_at_start() {
    let image = write_image(0, &header_bytes(ByteOrder::LittleEndian, 4124, [28, 1052, 0]), 4096);

    let header = read_header_from_file(image.path(), 0).unwrap();
    assert_eq!(header.byte_order(), ByteOrder::LittleEndian);
    assert_eq!(header.total_length(), 4124);
    assert_eq!(header.crc32(), 0xCAFEBABE);
    assert_eq!(header.version(), 1);
    assert_eq!(header.partition_offsets(), [28, 1052, 0]);
}

#[test]
fn test_read_header_at_hex_offset() {
    let image = write_image(0x80, &header_bytes(ByteOrder::BigEndian, 28, [0, 0, 0]), 0);

    let offset = parse_offset("0x80").unwrap();
    let mut reader = TrxReader::open(image.path()).unwrap();
    let header = reader.read_header(offset).unwrap();

    assert_eq!(header.magic(), b"0RDH");
    assert_eq!(header.total_length(), 28);
    assert_eq!(header.active_partitions().count(), 0);

    // The padding in front is not a header
    assert!(matches!(
        reader.read_header(0),
        Err(TrxError::InvalidMagic { found: [0xFF, 0xFF, 0xFF, 0xFF] })
    ));
}

#[test]
fn test_exact_size_file() {
    let image = write_image(0, &header_bytes(ByteOrder::LittleEndian, 28, [0, 0, 0]), 0);
    let mut reader = TrxReader::open(image.path()).unwrap();

    let bytes = reader.read_header_bytes(0).unwrap();
    assert_eq!(bytes.len(), TrxHeader::SIZE);
    assert_eq!(&bytes[..4], b"HDR0");
}

#[test]
fn test_truncated_file() {
    let full = header_bytes(ByteOrder::LittleEndian, 28, [0, 0, 0]);
    let image = write_image(16, &full[..10], 0);

    match read_header_from_file(image.path(), 16) {
        Err(TrxError::TruncatedHeader { required, actual }) => {
            assert_eq!(required, 28);
            assert_eq!(actual, 10);
        }
        other => panic!("Expected TruncatedHeader, got {:?}", other),
    }
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.bin");

    match read_header_from_file(&path, 0) {
        Err(TrxError::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::NotFound),
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[cfg(feature = "mmap")]
#[test]
fn test_mmap_matches_buffered() {
    let image = write_image(64, &header_bytes(ByteOrder::BigEndian, 92, [28, 60, 0]), 64);

    let buffered = TrxReader::open(image.path()).unwrap().read_header(64).unwrap();
    let mapped = TrxReader::open_mmap(image.path()).unwrap().read_header(64).unwrap();
    assert_eq!(buffered, mapped);
}
