//! Iterators over a single scanline of uncompressed pixel data.
//!
//! Each one takes the line *without* its padding bytes and stops after `width`
//! pixels.

use bitfrob::U8BitIterHigh;

/// Iterate the palette indexes of one scanline, based on the bit depth.
///
/// Indexes are packed high bits first. When the pixels don't fill the last
/// byte (4bpp with an odd width) the leftover low bits are skipped.
///
/// ## Panics
/// * The `bits_per_pixel` must be in the range `1..=8`.
#[inline]
pub fn iter_indexed_line(
  line: &[u8], width: u32, bits_per_pixel: u16,
) -> impl Iterator<Item = u8> + '_ {
  assert!((1..=8).contains(&bits_per_pixel));
  let count = u32::from(bits_per_pixel);
  line
    .iter()
    .copied()
    .flat_map(move |bits| U8BitIterHigh::from_count_and_bits(count, bits))
    .take(width.try_into().unwrap_or_default())
}

/// Iterates one scanline of 24bpp data, keeping only the first byte of each
/// `[b, g, r]` triplet.
///
/// All three bytes are still stepped over, so the line stays in sync.
#[inline]
pub fn iter_bgr24_line_first_byte(line: &[u8], width: u32) -> impl Iterator<Item = u8> + '_ {
  line.chunks_exact(3).map(|bgr| bgr[0]).take(width.try_into().unwrap_or_default())
}

#[test]
fn test_iter_indexed_line() {
  let line = [0x12, 0x34, 0x50];
  assert_eq!(iter_indexed_line(&line, 5, 4).collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
  assert_eq!(iter_indexed_line(&line, 6, 4).collect::<Vec<_>>(), [1, 2, 3, 4, 5, 0]);
  assert_eq!(iter_indexed_line(&line, 2, 8).collect::<Vec<_>>(), [0x12, 0x34]);
}

#[test]
fn test_iter_bgr24_line_first_byte() {
  let line = [1, 2, 3, 4, 5, 6, 7, 8];
  assert_eq!(iter_bgr24_line_first_byte(&line, 2).collect::<Vec<_>>(), [1, 4]);
}
