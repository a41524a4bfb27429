//! Generic compression, a zip container with one deflated entry.

use std::io::{Cursor, Read, Write};

use log::error;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::SteganoError;
use crate::result::Result;

const ENTRY_NAME: &str = "payload";

pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut zip = ZipWriter::new(Cursor::new(&mut buf));
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        zip.start_file(ENTRY_NAME, options)?;
        zip.write_all(data)?;
        zip.finish()?;
    }

    Ok(buf)
}

pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut zip = ZipArchive::new(Cursor::new(data)).map_err(|e| {
        error!("Compressed payload is not readable: {e}");
        SteganoError::CorruptStream
    })?;
    let mut entry = zip.by_name(ENTRY_NAME).map_err(|e| {
        error!("Compressed payload has no entry {ENTRY_NAME}: {e}");
        SteganoError::CorruptStream
    })?;

    let mut inflated = Vec::new();
    entry.read_to_end(&mut inflated).map_err(|e| {
        error!("Compressed payload cannot be inflated: {e}");
        SteganoError::CorruptStream
    })?;

    Ok(inflated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_compress_and_decompress() {
        let text = "All work and no play makes Jack a dull boy. ".repeat(50);
        let compressed = compress(text.as_bytes()).unwrap();

        assert!(compressed.len() < text.len());
        assert_eq!(decompress(&compressed).unwrap(), text.as_bytes());
    }

    #[test]
    fn should_store_a_single_deflated_entry() {
        let compressed = compress(b"one entry only").unwrap();
        let mut zip = ZipArchive::new(Cursor::new(compressed)).unwrap();

        assert_eq!(zip.len(), 1);
        let entry = zip.by_name(ENTRY_NAME).unwrap();
        assert_eq!(entry.compression(), CompressionMethod::Deflated);
    }

    #[test]
    fn should_report_a_corrupt_stream() {
        assert!(matches!(
            decompress(b"definitely not a zip"),
            Err(SteganoError::CorruptStream)
        ));
    }
}
