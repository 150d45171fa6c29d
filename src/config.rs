//! The resolved, immutable settings for one conversion.

use core::{fmt, str::FromStr};
use std::path::PathBuf;

use crate::{CoeError, CoeResult};

/// The default transparency color, magenta.
pub const DEFAULT_TRANSPARENCY: u32 = 0xFF00FF;

/// Bit depth of the palette colors that get written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorDepth {
  /// 4 bits per channel.
  #[default]
  Rgb444,
  /// 8 bits per channel, the colors are written as they're stored.
  Rgb888,
}
impl ColorDepth {
  /// Total bits per color, 12 or 24.
  #[inline]
  #[must_use]
  pub const fn bits(self) -> u32 {
    match self {
      Self::Rgb444 => 12,
      Self::Rgb888 => 24,
    }
  }

  #[inline]
  #[must_use]
  pub const fn bits_per_channel(self) -> u32 {
    self.bits() / 3
  }

  /// Hex digits needed for one channel.
  #[inline]
  #[must_use]
  pub const fn hex_digits_per_channel(self) -> usize {
    (self.bits_per_channel() / 4) as usize
  }

  /// Reduces an 8-bit channel value to this depth.
  ///
  /// This truncates: at 12-bit depth it's just `v / 16`.
  #[inline]
  #[must_use]
  pub const fn requantize(self, v: u8) -> u8 {
    match self {
      Self::Rgb444 => v / 16,
      Self::Rgb888 => v,
    }
  }
}
impl FromStr for ColorDepth {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim() {
      "12" => Ok(Self::Rgb444),
      "24" => Ok(Self::Rgb888),
      other => Err(format!("color depth must be 12 or 24, got `{other}`")),
    }
  }
}
impl fmt::Display for ColorDepth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.bits())
  }
}

/// How the image is cut into sprites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpriteMode {
  /// A grid of `sprite_size` by `sprite_size` sprites.
  #[default]
  Sheet,
  /// The whole image is one sprite.
  Single,
}
impl FromStr for SpriteMode {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "sheet" | "0" => Ok(Self::Sheet),
      "single" | "1" => Ok(Self::Single),
      other => Err(format!("mode must be `sheet` (0) or `single` (1), got `{other}`")),
    }
  }
}

/// A `0xRRGGBB` color used to fill unused palette slots.
///
/// Parsing accepts any `u32` so that range problems are reported by
/// [ConvertConfig::validate] along with the other config errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transparency(pub u32);
impl Default for Transparency {
  #[inline]
  fn default() -> Self {
    Self(DEFAULT_TRANSPARENCY)
  }
}
impl Transparency {
  /// Splits the color into `[r, g, b]`.
  ///
  /// Bits above the low 24 are ignored, call [Transparency::validate] first.
  #[inline]
  #[must_use]
  pub const fn rgb(self) -> [u8; 3] {
    let [b, g, r, _] = self.0.to_le_bytes();
    [r, g, b]
  }

  /// ## Failure
  /// * [CoeError::TransparencyOutOfRange] if the value needs more than 24 bits.
  #[inline]
  pub fn validate(self) -> CoeResult<()> {
    if self.0 > 0xFF_FFFF {
      Err(CoeError::TransparencyOutOfRange(self.0))
    } else {
      Ok(())
    }
  }
}
impl FromStr for Transparency {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    let digits = s
      .strip_prefix("0x")
      .or_else(|| s.strip_prefix("0X"))
      .or_else(|| s.strip_prefix('#'))
      .unwrap_or(s);
    u32::from_str_radix(digits, 16)
      .map(Self)
      .map_err(|e| format!("transparency must be a hex color like 0xFF00FF: {e}"))
  }
}

/// Everything one conversion needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ConvertConfig {
  /// The BMP to read.
  pub input: PathBuf,
  /// Where the image `.coe` goes.
  pub output_image: PathBuf,
  /// Sprite width and height in pixels.
  pub sprite_size: u32,
  pub depth: ColorDepth,
  /// Where the palette `.coe` goes, if wanted.
  pub palette: Option<PathBuf>,
  /// Where the palette case statement goes, if wanted.
  pub palette_switch: Option<PathBuf>,
  pub transparency: Transparency,
  pub mode: SpriteMode,
  pub verbose: bool,
}
impl ConvertConfig {
  /// A config with default options for the given paths and sprite size.
  #[inline]
  #[must_use]
  pub fn new(input: impl Into<PathBuf>, output_image: impl Into<PathBuf>, sprite_size: u32) -> Self {
    Self {
      input: input.into(),
      output_image: output_image.into(),
      sprite_size,
      ..Self::default()
    }
  }

  /// If any palette output was asked for.
  #[inline]
  #[must_use]
  pub fn wants_palette(&self) -> bool {
    self.palette.is_some() || self.palette_switch.is_some()
  }

  /// Checks the parts of the config that don't depend on the image.
  ///
  /// This does no I/O, so it can run before any file is touched.
  pub fn validate(&self) -> CoeResult<()> {
    if self.sprite_size == 0 {
      return Err(CoeError::ZeroSpriteSize);
    }
    self.transparency.validate()
  }
}
