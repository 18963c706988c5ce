//! Fixed-width integers read from and written to byte views.
//!
//! All functions work at the start of the view, so the usual pattern is to
//! sub-slice first and then read:
//!
//! ```
//! use bufslice::byte_order::{ByteOrder, read_u32};
//! use bufslice::make_view;
//!
//! let buf = [0xffu8, 0x00, 0x00, 0x01, 0x02, 0xff];
//! let view = make_view(&buf, 1, 5).unwrap();
//! assert_eq!(read_u32(&view, ByteOrder::Big).unwrap(), 0x0102);
//! ```

use crate::error::{Result, SliceError};
use crate::view::{View, ViewMut};

/// Byte order of a multi-byte integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least significant byte first ("II" in TIFF headers).
    Little,
    /// Most significant byte first ("MM" in TIFF headers, and all of PNG).
    Big,
}

fn read_array<const N: usize, V: View<Item = u8>>(view: &V) -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = *view.at(i)?;
    }
    Ok(bytes)
}

// Checks the full width up front so a short view is left untouched.
fn write_bytes<V: ViewMut<Item = u8>>(view: &mut V, bytes: &[u8]) -> Result<usize> {
    if bytes.len() > view.len() {
        return Err(SliceError::IndexOutOfRange {
            index: bytes.len() - 1,
            len: view.len(),
        });
    }
    for (i, &byte) in bytes.iter().enumerate() {
        *view.at_mut(i)? = byte;
    }
    Ok(bytes.len())
}

pub fn read_u8<V: View<Item = u8>>(view: &V) -> Result<u8> {
    view.at(0).copied()
}

/// Reads a `u16` from the first two bytes of `view`.
///
/// # Returns
///
/// - `Err(SliceError::IndexOutOfRange)`: when the view is shorter than two bytes
pub fn read_u16<V: View<Item = u8>>(view: &V, order: ByteOrder) -> Result<u16> {
    let bytes = read_array(view)?;
    Ok(match order {
        ByteOrder::Little => u16::from_le_bytes(bytes),
        ByteOrder::Big => u16::from_be_bytes(bytes),
    })
}

/// Reads a `u32` from the first four bytes of `view`.
///
/// # Returns
///
/// - `Err(SliceError::IndexOutOfRange)`: when the view is shorter than four bytes
pub fn read_u32<V: View<Item = u8>>(view: &V, order: ByteOrder) -> Result<u32> {
    let bytes = read_array(view)?;
    Ok(match order {
        ByteOrder::Little => u32::from_le_bytes(bytes),
        ByteOrder::Big => u32::from_be_bytes(bytes),
    })
}

pub fn read_u64<V: View<Item = u8>>(view: &V, order: ByteOrder) -> Result<u64> {
    let bytes = read_array(view)?;
    Ok(match order {
        ByteOrder::Little => u64::from_le_bytes(bytes),
        ByteOrder::Big => u64::from_be_bytes(bytes),
    })
}

pub fn read_i16<V: View<Item = u8>>(view: &V, order: ByteOrder) -> Result<i16> {
    read_u16(view, order).map(|n| n as i16)
}

pub fn read_i32<V: View<Item = u8>>(view: &V, order: ByteOrder) -> Result<i32> {
    read_u32(view, order).map(|n| n as i32)
}

/// Writes `value` into the first two bytes of `view`.
///
/// # Returns
///
/// - `Ok(2)`: the number of bytes written
/// - `Err(SliceError::IndexOutOfRange)`: when the view is shorter than two
///   bytes, in which case nothing is written
pub fn write_u16<V: ViewMut<Item = u8>>(
    view: &mut V,
    value: u16,
    order: ByteOrder,
) -> Result<usize> {
    match order {
        ByteOrder::Little => write_bytes(view, &value.to_le_bytes()),
        ByteOrder::Big => write_bytes(view, &value.to_be_bytes()),
    }
}

pub fn write_u32<V: ViewMut<Item = u8>>(
    view: &mut V,
    value: u32,
    order: ByteOrder,
) -> Result<usize> {
    match order {
        ByteOrder::Little => write_bytes(view, &value.to_le_bytes()),
        ByteOrder::Big => write_bytes(view, &value.to_be_bytes()),
    }
}

pub fn write_u64<V: ViewMut<Item = u8>>(
    view: &mut V,
    value: u64,
    order: ByteOrder,
) -> Result<usize> {
    match order {
        ByteOrder::Little => write_bytes(view, &value.to_le_bytes()),
        ByteOrder::Big => write_bytes(view, &value.to_be_bytes()),
    }
}
