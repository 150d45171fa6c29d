//! The whole BMP to `.coe` pipeline.
//!
//! [convert_bytes] does all of the work in memory. [run] adds the file
//! handling: every output is written to a temporary file next to its final
//! path and only renamed into place once everything has succeeded, so a
//! failed run never leaves a half-written `.coe` behind.

use std::{
  fs,
  io::Write,
  path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{
  bmp::{bmp_read_headers, decode_pixels},
  coe::{write_coe, COE_HEADER},
  config::ConvertConfig,
  palette::extract_palette,
  sprite::{SpriteGrid, SpriteTiler},
  CoeResult,
};

/// Something the conversion skipped instead of failing on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConvertWarning {
  /// The image is indexed but no palette output was asked for.
  PaletteDiscarded { bits_per_pixel: u16 },
  /// A palette output was asked for but the image has no color table.
  NoColorTable { bits_per_pixel: u16 },
}
impl core::fmt::Display for ConvertWarning {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::PaletteDiscarded { bits_per_pixel } => write!(
        f,
        "{bits_per_pixel}bpp image has a color table but no palette output was given, the palette is discarded"
      ),
      Self::NoColorTable { bits_per_pixel } => write!(
        f,
        "{bits_per_pixel}bpp image has no color table, no palette output will be written"
      ),
    }
  }
}

/// What a conversion did, for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConvertSummary {
  pub width: u32,
  pub height: u32,
  pub bits_per_pixel: u16,
  pub grid: SpriteGrid,
  /// Number of hex tokens in the image `.coe`.
  pub pixel_tokens: usize,
  /// Number of palette slots written, if a palette was written.
  pub palette_entries: Option<usize>,
  /// Everything that was skipped, in the order it happened. Each one is also
  /// logged at `warn` level.
  pub warnings: Vec<ConvertWarning>,
}

/// The rendered output texts of a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Conversion {
  pub summary: ConvertSummary,
  pub image_coe: Vec<u8>,
  pub palette_coe: Option<Vec<u8>>,
  pub palette_switch: Option<Vec<u8>>,
}

/// Converts the bytes of a BMP file using the options in `config`.
///
/// The paths in `config` aren't touched, only whether the palette outputs are
/// `Some` matters.
///
/// ## Failure
/// Any header validation, configuration, or truncation error. See
/// [CoeError](crate::CoeError).
pub fn convert_bytes(bytes: &[u8], config: &ConvertConfig) -> CoeResult<Conversion> {
  config.validate()?;
  let (file_header, dib_info) = bmp_read_headers(bytes)?;
  dib_info.check_sprite_fits(config.sprite_size, config.sprite_size)?;

  let mut palette_coe = None;
  let mut palette_switch = None;
  let mut palette_entries = None;
  let mut warnings = Vec::new();
  if dib_info.is_palletised() {
    if config.wants_palette() {
      let palette = extract_palette(bytes, &dib_info, config.depth, config.transparency)?;
      if config.palette.is_some() {
        let mut out = Vec::new();
        palette.write_coe(&mut out)?;
        palette_coe = Some(out);
      }
      if config.palette_switch.is_some() {
        let mut out = Vec::new();
        palette.write_case_statement(&mut out)?;
        palette_switch = Some(out);
      }
      palette_entries = Some(palette.entries.len());
    } else {
      warnings.push(ConvertWarning::PaletteDiscarded { bits_per_pixel: dib_info.bits_per_pixel });
    }
  } else if config.wants_palette() {
    warnings.push(ConvertWarning::NoColorTable { bits_per_pixel: dib_info.bits_per_pixel });
  }
  for warning in &warnings {
    log::warn!("{warning}");
  }

  let pixels = decode_pixels(bytes, &file_header, &dib_info)?;
  let grid = SpriteGrid::for_mode(dib_info.width, dib_info.height, config.mode, config.sprite_size);
  log::debug!("{grid:?}");
  let tiler = SpriteTiler::new(&pixels, grid);
  let pixel_tokens = tiler.len();
  let mut image_coe = Vec::new();
  write_coe(&mut image_coe, COE_HEADER, tiler)?;

  Ok(Conversion {
    summary: ConvertSummary {
      width: dib_info.width,
      height: dib_info.height,
      bits_per_pixel: dib_info.bits_per_pixel,
      grid,
      pixel_tokens,
      palette_entries,
      warnings,
    },
    image_coe,
    palette_coe,
    palette_switch,
  })
}

/// Reads `config.input`, converts it, and writes every requested output.
///
/// The config is validated before the input is even opened. Outputs are
/// staged as temporary files and persisted together at the end.
pub fn run(config: &ConvertConfig) -> CoeResult<ConvertSummary> {
  config.validate()?;
  log::debug!("reading {}", config.input.display());
  let bytes = fs::read(&config.input)?;
  let conversion = convert_bytes(&bytes, config)?;

  let mut outputs: Vec<(&Path, &[u8])> =
    vec![(config.output_image.as_path(), conversion.image_coe.as_slice())];
  if let (Some(path), Some(text)) = (&config.palette, &conversion.palette_coe) {
    outputs.push((path.as_path(), text.as_slice()));
  }
  if let (Some(path), Some(text)) = (&config.palette_switch, &conversion.palette_switch) {
    outputs.push((path.as_path(), text.as_slice()));
  }

  let mut staged = Vec::with_capacity(outputs.len());
  for (path, text) in outputs {
    staged.push((path, stage_output(path, text)?));
  }
  for (path, temp) in staged {
    temp.persist(path).map_err(|e| e.error)?;
    log::info!("wrote {}", path.display());
  }

  Ok(conversion.summary)
}

/// Writes `text` to a new temporary file in the same directory as `path`.
fn stage_output(path: &Path, text: &[u8]) -> CoeResult<NamedTempFile> {
  let dir: PathBuf = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
    _ => PathBuf::from("."),
  };
  let mut temp = NamedTempFile::new_in(dir)?;
  temp.write_all(text)?;
  temp.flush()?;
  Ok(temp)
}
