use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use bufslice::byte_order::{self, ByteOrder};
use bufslice::{SliceError, View, make_view, make_view_from};
use crc::{CRC_32_ISO_HDLC, Crc};

use crate::args::Width;

/// CRC-32 as used by PNG chunks (ISO 3309 / ITU-T V.42).
pub const CRC: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Bytes per line of a hex dump.
const DUMP_WIDTH: usize = 16;

pub type Result<T> = std::result::Result<T, CommandsError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandsError {
    #[error("Failed to open the file")]
    IOError(#[from] io::Error),
    #[error("Invalid view: {0}")]
    SliceError(#[from] SliceError),
}

/// Hex dump of a byte view, labelled with offsets starting at `origin`.
pub struct HexDump<'v, V> {
    view: &'v V,
    origin: usize,
}

impl<'v, V: View<Item = u8>> HexDump<'v, V> {
    pub fn new(view: &'v V, origin: usize) -> Self {
        Self { view, origin }
    }
}

impl<V: View<Item = u8>> fmt::Display for HexDump<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.view.iter().enumerate() {
            if i % DUMP_WIDTH == 0 {
                if i > 0 {
                    writeln!(f)?;
                }
                write!(f, "{:08X}:", self.origin + i)?;
            }
            write!(f, " {:02X}", byte)?;
        }
        Ok(())
    }
}

pub fn dump_bytes(bytes: &[u8], begin: usize, end: Option<usize>) -> Result<String> {
    let view = make_view(bytes, begin, end.unwrap_or(bytes.len()))?;
    Ok(HexDump::new(&view, begin).to_string())
}

pub fn checksum_bytes(bytes: &[u8], begin: usize, end: Option<usize>) -> Result<u32> {
    let view = make_view(bytes, begin, end.unwrap_or(bytes.len()))?;
    Ok(CRC.checksum(view.as_slice()))
}

pub fn read_bytes(bytes: &[u8], offset: usize, width: Width, order: ByteOrder) -> Result<u64> {
    let view = make_view_from(bytes, offset)?;
    let value = match width {
        Width::One => byte_order::read_u8(&view)? as u64,
        Width::Two => byte_order::read_u16(&view, order)? as u64,
        Width::Four => byte_order::read_u32(&view, order)? as u64,
        Width::Eight => byte_order::read_u64(&view, order)?,
    };
    Ok(value)
}

pub fn dump(file_path: &Path, begin: usize, end: Option<usize>) -> Result<String> {
    let bytes = fs::read(file_path)?;
    dump_bytes(&bytes, begin, end)
}

pub fn checksum(file_path: &Path, begin: usize, end: Option<usize>) -> Result<u32> {
    let bytes = fs::read(file_path)?;
    checksum_bytes(&bytes, begin, end)
}

pub fn read(file_path: &Path, offset: usize, width: Width, order: ByteOrder) -> Result<u64> {
    let bytes = fs::read(file_path)?;
    read_bytes(&bytes, offset, width, order)
}
