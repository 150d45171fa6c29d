#![forbid(unsafe_code)]

//! Module for Windows Bitmap files (BMP).
//!
//! ## Parsing The Format
//!
//! Note: All multi-byte values in BMP are always little-endian encoded.
//!
//! * A bitmap file always starts with a "file header". This is always 14 bytes.
//!   * A tag for the kind of bitmap you're expected to find. We only accept
//!     `BM`.
//!   * A total size of the file.
//!   * The position of the pixel data within the file.
//! * Next is an "info header". There's many versions of this header, but the
//!   first 4 bytes are always the size of the full info header and every
//!   version from `BITMAPINFOHEADER` onward starts with the same 40 bytes. We
//!   only read those 40 bytes.
//! * Next there **might** be a color table. This is present when the bit depth
//!   is 8 (or less) bits per pixel. It starts right after the info header (so
//!   at `14 + header_size`). The default number of entries is
//!   `2**bits_per_pixel`, but the header can declare a smaller table. Each
//!   entry is `[b, g, r, 0]`.
//! * Next there **might** be a gap, then the pixel array at the offset given
//!   in the file header.
//!
//! The pixel array is stored bottom row first unless the height is negative.
//! Each row is padded to a multiple of 4 bytes. When the bits per pixel is
//! less than 8 the pixels are packed within a byte, with the leftmost pixel in
//! the highest bits.
//!
//! This crate handles:
//! * 4 and 8 bits per pixel indexed color.
//! * 24 bits per pixel direct color, `[b, g, r]` per pixel.
//!
//! Compressed (RLE, bitfields, JPEG, PNG) images are rejected.

mod raw_headers;

mod header;
pub use header::*;

mod iters;
pub use iters::*;

mod pixels;
pub use pixels::*;
