//! The on-disk header structs.
//!
//! These are read straight out of the file bytes, so every field is a
//! little-endian integer type. [super::bmp_read_headers] converts them into the
//! public header types.

use pack1::*;

pub(super) const BI_RGB: u32 = 0;

#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct BitmapFileHeader {
  pub ty: [u8; 2],
  pub file_size: U32LE,
  pub reserved1: U16LE,
  pub reserved2: U16LE,
  pub bitmap_offset: U32LE,
}

/// The 40 byte `BITMAPINFOHEADER`.
///
/// Later header versions only append fields to this one, so it's also how we
/// read the front of a V4 or V5 header.
#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub(crate) struct BitmapInfoHeader {
  pub size: U32LE,
  pub width: U32LE,
  pub height: I32LE,
  pub planes: U16LE,
  pub bits_per_pixel: U16LE,
  pub compression: U32LE,
  pub image_size: U32LE,
  pub x_pixels_per_meter: U32LE,
  pub y_pixels_per_meter: U32LE,
  pub colors_used: U32LE,
  pub important_colors: U32LE,
}

#[test]
fn test_raw_header_sizes() {
  use core::mem::size_of;
  assert_eq!(size_of::<BitmapFileHeader>(), 14);
  assert_eq!(size_of::<BitmapInfoHeader>(), 40);
}
