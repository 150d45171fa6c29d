use super::raw_headers::*;
use crate::{try_pull_pod, AsciiArray, CoeError, CoeResult};

/// The only file tag we accept: Windows 3.1 or later.
pub const BMP_SIGNATURE: AsciiArray<2> = AsciiArray(*b"BM");

/// Byte size of the file header.
pub const FILE_HEADER_LEN: usize = 14;

/// Byte size of the file header plus the `BITMAPINFOHEADER`.
pub const COMBINED_HEADER_LEN: usize = FILE_HEADER_LEN + 40;

/// The header at the start of all BMP files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BmpFileHeader {
  /// Always `BM` once parsed.
  pub signature: AsciiArray<2>,

  /// The total size of the file, as declared. This isn't checked.
  pub file_size: u32,

  /// The byte index within the file where the pixel data starts.
  pub pixel_data_offset: u32,
}

/// The parts of the info header ("DIB header") that we care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DibInfo {
  /// Size of the info header. The color table starts right after it.
  pub header_size: u32,
  /// Image pixel width
  pub width: u32,
  /// Image pixel height, always positive. See `top_down`.
  pub height: u32,
  /// A negative height on disk means the rows are stored top row first.
  pub top_down: bool,
  pub planes: u16,
  /// Always 4, 8, or 24 once parsed.
  pub bits_per_pixel: u16,
  /// Always 0 once parsed.
  pub compression: u32,
  pub image_size: u32,
  pub h_res: u32,
  pub v_res: u32,
  /// Number of color table entries actually stored, 0 means "all of them".
  pub palette_color_count: u32,
  pub important_colors: u32,
}
impl DibInfo {
  /// If the pixels are indexes into a color table.
  #[inline]
  #[must_use]
  pub const fn is_palletised(&self) -> bool {
    matches!(self.bits_per_pixel, 4 | 8)
  }

  /// The number of colors the pixel format can address.
  ///
  /// This is `2**bits_per_pixel` for indexed images and 0 otherwise.
  #[inline]
  #[must_use]
  pub const fn num_colours(&self) -> usize {
    if self.is_palletised() {
      1 << self.bits_per_pixel
    } else {
      0
    }
  }

  /// Number of entries actually stored in the color table.
  ///
  /// A stored count of 0 means the full table is present. Counts bigger than
  /// the format can address are clamped.
  #[inline]
  #[must_use]
  pub const fn colours_used(&self) -> usize {
    let num_colours = self.num_colours();
    match self.palette_color_count as usize {
      0 => num_colours,
      n if n > num_colours => num_colours,
      n => n,
    }
  }

  /// Byte offset of the color table within the file.
  #[inline]
  #[must_use]
  pub const fn color_table_offset(&self) -> usize {
    (self.header_size as usize).saturating_add(FILE_HEADER_LEN)
  }

  /// Checks that at least one whole sprite fits in the image.
  pub fn check_sprite_fits(&self, sprite_width: u32, sprite_height: u32) -> CoeResult<()> {
    if sprite_width == 0 || sprite_height == 0 {
      return Err(CoeError::ZeroSpriteSize);
    }
    if sprite_width > self.width {
      return Err(CoeError::SpriteTooLarge { axis: "width", sprite: sprite_width, image: self.width });
    }
    if sprite_height > self.height {
      return Err(CoeError::SpriteTooLarge {
        axis: "height",
        sprite: sprite_height,
        image: self.height,
      });
    }
    Ok(())
  }
}

/// Parses and validates the file header and info header.
///
/// Only the first 54 bytes are read. Callers find the color table and pixel
/// data by their offsets rather than assuming they follow directly.
///
/// ## Failure
/// * [CoeError::Truncated] if there's less than 54 bytes.
/// * [CoeError::Format] if the file doesn't start with `BM`.
/// * [CoeError::UnsupportedBitDepth] unless the bit depth is 4, 8, or 24.
/// * [CoeError::UnsupportedCompression] if the data is compressed.
pub fn bmp_read_headers(bytes: &[u8]) -> CoeResult<(BmpFileHeader, DibInfo)> {
  let (file_header, rest) = try_pull_pod::<BitmapFileHeader>(bytes, "file header")?;
  let signature = AsciiArray(file_header.ty);
  if signature != BMP_SIGNATURE {
    return Err(CoeError::Format(signature));
  }
  let (info, _) = try_pull_pod::<BitmapInfoHeader>(rest, "info header")?;

  let bits_per_pixel = info.bits_per_pixel.get();
  if !matches!(bits_per_pixel, 4 | 8 | 24) {
    return Err(CoeError::UnsupportedBitDepth(bits_per_pixel));
  }
  let compression = info.compression.get();
  if compression != BI_RGB {
    return Err(CoeError::UnsupportedCompression(compression));
  }

  let raw_height = info.height.get();
  let file_header = BmpFileHeader {
    signature,
    file_size: file_header.file_size.get(),
    pixel_data_offset: file_header.bitmap_offset.get(),
  };
  let dib_info = DibInfo {
    header_size: info.size.get(),
    width: info.width.get(),
    height: raw_height.unsigned_abs(),
    top_down: raw_height < 0,
    planes: info.planes.get(),
    bits_per_pixel,
    compression,
    image_size: info.image_size.get(),
    h_res: info.x_pixels_per_meter.get(),
    v_res: info.y_pixels_per_meter.get(),
    palette_color_count: info.colors_used.get(),
    important_colors: info.important_colors.get(),
  };
  log::debug!("{file_header:?}");
  log::debug!("{dib_info:?}");
  Ok((file_header, dib_info))
}
