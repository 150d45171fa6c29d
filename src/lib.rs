#![forbid(unsafe_code)]

//! Converts Windows Bitmap sprite sheets into FPGA memory initialization files.
//!
//! A `.coe` file is the plain text format that block-RAM generators read to
//! fill a memory at synthesis time. It's a two line header followed by a
//! vector of hex values:
//!
//! ```text
//! memory_initialization_radix=16;
//! memory_initialization_vector=5 5 5 5 ...
//! ```
//!
//! The conversion is a single pass:
//!
//! * [bmp::bmp_read_headers] parses and validates the BMP headers.
//! * [palette::extract_palette] pulls the color table out of indexed images.
//! * [bmp::decode_pixels] de-pads the scanlines into a [bmp::PixelBuffer].
//! * [sprite::SpriteTiler] walks that buffer one sprite at a time.
//! * [coe::write_coe] renders the values as text.
//!
//! The [convert] module ties all of that together.

pub mod ascii_array;
pub use ascii_array::*;

mod error;
pub use error::*;

mod util;
pub(crate) use util::*;

pub mod bmp;
pub mod coe;
pub mod config;
pub mod convert;
pub mod palette;
pub mod sprite;
