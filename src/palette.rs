//! Pulling the color table out of indexed bitmaps and writing it back out.
//!
//! The palette always ends up with exactly `2**bits_per_pixel` entries. Slots
//! past the ones the file actually stores get the transparency color.

use core::fmt;
use std::io::{self, Write};

use bytemuck::cast_slice;
use pixel_formats::r8g8b8_Srgb;

use crate::{
  bmp::DibInfo,
  coe::{write_coe, COE_HEADER},
  config::{ColorDepth, Transparency},
  try_get_span, CoeError, CoeResult,
};

/// A palette color after requantizing to the output depth.
///
/// The [LowerHex] impl writes the `RGB` triplet with a fixed number of digits
/// per channel (1 at 12-bit depth, 2 at 24-bit depth).
///
/// [LowerHex]: core::fmt::LowerHex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteColor {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub depth: ColorDepth,
}
impl PaletteColor {
  /// Requantizes a stored 8-bit color.
  #[inline]
  #[must_use]
  pub const fn from_srgb(c: r8g8b8_Srgb, depth: ColorDepth) -> Self {
    Self {
      r: depth.requantize(c.r),
      g: depth.requantize(c.g),
      b: depth.requantize(c.b),
      depth,
    }
  }

  #[inline]
  #[must_use]
  pub const fn from_transparency(t: Transparency, depth: ColorDepth) -> Self {
    let [r, g, b] = t.rgb();
    Self::from_srgb(r8g8b8_Srgb { r, g, b }, depth)
  }
}
impl fmt::LowerHex for PaletteColor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let w = self.depth.hex_digits_per_channel();
    write!(f, "{:0w$x}{:0w$x}{:0w$x}", self.r, self.g, self.b)
  }
}

/// The requantized color table of an indexed image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Palette {
  pub depth: ColorDepth,
  /// 4 or 8, used to size the case labels.
  pub bits_per_pixel: u16,
  /// How many of `entries` came from the file, the rest are `transparency`.
  pub colours_used: usize,
  pub entries: Vec<PaletteColor>,
  pub transparency: PaletteColor,
}
impl Palette {
  /// Writes the palette as a `.coe` file, one `RGB` token per slot.
  #[inline]
  pub fn write_coe<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
    write_coe(sink, COE_HEADER, &self.entries)
  }

  /// Writes the palette as the body of a Verilog `case` statement.
  ///
  /// There's one branch per color stored in the file, then a `default` branch
  /// that gives the transparency color. Each branch reads
  /// `<bpp>'d<index>: begin`, one `palette_r=<n>'d<R>` line per channel, then
  /// `end`.
  pub fn write_case_statement<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
    let index_bits = self.bits_per_pixel;
    for (index, color) in self.entries.iter().take(self.colours_used).enumerate() {
      writeln!(sink, "{index_bits}'d{index}: begin")?;
      self.write_assignments(sink, color)?;
      writeln!(sink, "end")?;
    }
    writeln!(sink, "default: begin")?;
    self.write_assignments(sink, &self.transparency)?;
    writeln!(sink, "end")?;
    Ok(())
  }

  fn write_assignments<W: Write + ?Sized>(&self, sink: &mut W, c: &PaletteColor) -> io::Result<()> {
    let n = self.depth.bits_per_channel();
    writeln!(sink, "palette_r={n}'d{}", c.r)?;
    writeln!(sink, "palette_g={n}'d{}", c.g)?;
    writeln!(sink, "palette_b={n}'d{}", c.b)
  }
}

/// Reads the color table of a 4bpp or 8bpp image.
///
/// The table starts right after the info header. Only the entries the header
/// says are used get read, the remaining slots are filled with the
/// transparency color.
///
/// ## Failure
/// * [CoeError::UnsupportedBitDepth] if the image isn't indexed.
/// * [CoeError::Truncated] if the file ends inside the color table.
pub fn extract_palette(
  bytes: &[u8], dib_info: &DibInfo, depth: ColorDepth, transparency: Transparency,
) -> CoeResult<Palette> {
  if !dib_info.is_palletised() {
    return Err(CoeError::UnsupportedBitDepth(dib_info.bits_per_pixel));
  }
  let num_colours = dib_info.num_colours();
  let colours_used = dib_info.colours_used();
  let table = try_get_span(
    bytes,
    dib_info.color_table_offset(),
    colours_used * core::mem::size_of::<[u8; 4]>(),
    "color table",
  )?;
  let transparency = PaletteColor::from_transparency(transparency, depth);

  let mut entries = Vec::with_capacity(num_colours);
  entries.extend(
    cast_slice::<u8, [u8; 4]>(table)
      .iter()
      .map(|&[b, g, r, _reserved]| PaletteColor::from_srgb(r8g8b8_Srgb { r, g, b }, depth)),
  );
  entries.resize(num_colours, transparency);
  log::debug!(
    "palette: {colours_used} of {num_colours} colors stored, {} padded with {transparency:x}",
    num_colours - colours_used
  );

  Ok(Palette { depth, bits_per_pixel: dib_info.bits_per_pixel, colours_used, entries, transparency })
}
