//! Decoding the pixel array into a [PixelBuffer].

use super::{iter_bgr24_line_first_byte, iter_indexed_line, BmpFileHeader, DibInfo};
use crate::{try_get_span, CoeError, CoeResult};

/// The number of padding bytes that follow a scanline of `scanline_len` bytes.
///
/// Every BMP row is padded out to a multiple of 4 bytes.
#[inline]
#[must_use]
pub const fn row_padding(scanline_len: usize) -> usize {
  (4 - (scanline_len % 4)) % 4
}

/// The unpadded byte length of one row of pixels.
///
/// * 4bpp: `ceil(width / 2)`
/// * 8bpp: `width`
/// * 24bpp: `width * 3`
///
/// ## Failure
/// * [CoeError::UnsupportedBitDepth] for any other bit depth.
pub fn scanline_len(width: u32, bits_per_pixel: u16) -> CoeResult<usize> {
  let width = width as usize;
  match bits_per_pixel {
    4 => Ok(width / 2 + width % 2),
    8 => Ok(width),
    24 => width.checked_mul(3).ok_or(CoeError::Truncated {
      what: "pixel data",
      needed: usize::MAX,
      available: 0,
    }),
    other => Err(CoeError::UnsupportedBitDepth(other)),
  }
}

/// The decoded pixels of an image, one value per pixel.
///
/// Values are palette indexes for indexed images, and the blue channel byte
/// for 24bpp images.
///
/// The rows are held in bitmap storage order, so `pixels[0..width]` is the
/// **bottom** row of the image. Use [PixelBuffer::pixel_at] to address pixels
/// from the top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
  pub width: u32,
  pub height: u32,
  pub pixels: Vec<u8>,
}
impl PixelBuffer {
  /// Gets the pixel at the position counting rows from the top of the image,
  /// or `None` if the position is out of bounds.
  #[inline]
  #[must_use]
  pub fn pixel_at(&self, row_from_top: u32, col: u32) -> Option<u8> {
    self.pixel_at_with_stride(row_from_top, col, self.width)
  }

  /// Like [PixelBuffer::pixel_at], but rows are stepped `stride` pixels apart,
  /// walking back from the end of the buffer.
  ///
  /// Row `r` from the top starts at `len - stride * (r + 1)`. With a `stride`
  /// equal to the width that's the true image row. A narrower stride is how
  /// the sprite walk addresses images whose width isn't a whole number of
  /// sprites (see [SpriteTiler](crate::sprite::SpriteTiler)).
  #[inline]
  #[must_use]
  pub fn pixel_at_with_stride(&self, row_from_top: u32, col: u32, stride: u32) -> Option<u8> {
    if row_from_top >= self.height || col >= stride || stride > self.width {
      return None;
    }
    let rows_back = (row_from_top as usize + 1).checked_mul(stride as usize)?;
    let i = self.pixels.len().checked_sub(rows_back)? + col as usize;
    self.pixels.get(i).copied()
  }

  /// Number of pixels held.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.pixels.len()
  }
}

/// Reads the pixel array of an uncompressed 4, 8, or 24bpp bitmap.
///
/// The padding at the end of every row is dropped. Top-down images have their
/// rows reversed so that the buffer is always bottom row first.
///
/// ## Failure
/// * [CoeError::UnsupportedBitDepth] if the bit depth isn't 4, 8, or 24.
/// * [CoeError::Truncated] if the file is too short for the declared image.
pub fn decode_pixels(
  bytes: &[u8], file_header: &BmpFileHeader, dib_info: &DibInfo,
) -> CoeResult<PixelBuffer> {
  let DibInfo { width, height, bits_per_pixel, .. } = *dib_info;
  let scanline = scanline_len(width, bits_per_pixel)?;
  let padded = scanline + row_padding(scanline);
  let total = padded.checked_mul(height as usize).ok_or(CoeError::Truncated {
    what: "pixel data",
    needed: usize::MAX,
    available: bytes.len(),
  })?;
  let pixel_data =
    try_get_span(bytes, file_header.pixel_data_offset as usize, total, "pixel data")?;
  log::debug!(
    "decoding {width}x{height} at {bits_per_pixel}bpp: {scanline} bytes per line + {} padding",
    padded - scanline
  );

  let mut pixels = Vec::with_capacity(width as usize * height as usize);
  let mut per_row_op = |i: &mut dyn Iterator<Item = &[u8]>| {
    for line in i {
      let line = &line[..scanline];
      match bits_per_pixel {
        24 => pixels.extend(iter_bgr24_line_first_byte(line, width)),
        _ => pixels.extend(iter_indexed_line(line, width, bits_per_pixel)),
      }
    }
  };
  if padded == 0 {
    // zero width, there's no rows to walk.
  } else if dib_info.top_down {
    per_row_op(&mut pixel_data.rchunks_exact(padded));
  } else {
    per_row_op(&mut pixel_data.chunks_exact(padded));
  }

  Ok(PixelBuffer { width, height, pixels })
}
