use crate::AsciiArray;

/// An error from the `sprite2coe` crate.
///
/// Every error is terminal for the conversion that raised it.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoeError {
  /// The input doesn't start with the `BM` signature.
  #[error("not a BMP file: expected the signature \"BM\" but found {0:?}")]
  Format(AsciiArray<2>),

  /// Only 4, 8, and 24 bits per pixel are supported.
  #[error("unsupported bits per pixel: {0} (only 4, 8, and 24 are supported)")]
  UnsupportedBitDepth(u16),

  /// Only uncompressed (`BI_RGB`) pixel data is supported.
  #[error("unsupported compression mode: {0} (only uncompressed bitmaps are supported)")]
  UnsupportedCompression(u32),

  /// The image is too small to hold even one sprite.
  #[error("sprite {axis} of {sprite} pixels exceeds the image {axis} of {image} pixels")]
  SpriteTooLarge { axis: &'static str, sprite: u32, image: u32 },

  /// Sprites must be at least one pixel across.
  #[error("the sprite size must be at least 1 pixel")]
  ZeroSpriteSize,

  /// The transparency color doesn't fit in 24 bits.
  #[error("transparency color {0:#x} is outside the 24-bit range 0x0..=0xffffff")]
  TransparencyOutOfRange(u32),

  /// The input ended before a structure it declares.
  #[error("input truncated reading {what}: needed {needed} bytes but only {available} remain")]
  Truncated { what: &'static str, needed: usize, available: usize },

  /// Writing an output failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),
}

impl CoeError {
  /// If this is one of the "the file isn't a format we handle" errors.
  #[inline]
  #[must_use]
  pub const fn is_unsupported_format(&self) -> bool {
    matches!(self, Self::UnsupportedBitDepth(_) | Self::UnsupportedCompression(_))
  }

  /// If this error came from the configuration rather than the input file.
  #[inline]
  #[must_use]
  pub const fn is_config(&self) -> bool {
    matches!(
      self,
      Self::SpriteTooLarge { .. } | Self::ZeroSpriteSize | Self::TransparencyOutOfRange(_)
    )
  }
}

/// Shorthand for results with a [CoeError].
pub type CoeResult<T> = Result<T, CoeError>;
