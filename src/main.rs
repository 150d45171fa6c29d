use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sprite2coe::{
  config::{ColorDepth, ConvertConfig, SpriteMode, Transparency},
  convert,
};

/// Convert a BMP sprite sheet into FPGA memory initialization (.coe) files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
  /// Input bitmap file path
  input: PathBuf,

  /// Output image .coe file path
  output_image: PathBuf,

  /// Sprite width/height in pixels, e.g. 16 means 16x16 sprites
  #[arg(value_parser = clap::value_parser!(u32).range(1..))]
  sprite_size: u32,

  /// Bit depth of the palette colors written out: 12 or 24
  #[arg(short, long, default_value = "12")]
  depth: ColorDepth,

  /// Output color palette .coe file path
  #[arg(short, long)]
  palette: Option<PathBuf>,

  /// Output palette case statement file path
  #[arg(short = 's', long)]
  palette_switch: Option<PathBuf>,

  /// Color used for unused palette slots, as 0xRRGGBB
  #[arg(short, long, default_value = "0xFF00FF")]
  transparency: Transparency,

  /// `sheet` (0) cuts the image into sprites, `single` (1) treats it as one
  #[arg(short, long, default_value = "sheet")]
  mode: SpriteMode,

  /// Print diagnostics to stderr
  #[arg(short, long)]
  verbose: bool,
}

impl From<Args> for ConvertConfig {
  fn from(args: Args) -> Self {
    Self {
      input: args.input,
      output_image: args.output_image,
      sprite_size: args.sprite_size,
      depth: args.depth,
      palette: args.palette,
      palette_switch: args.palette_switch,
      transparency: args.transparency,
      mode: args.mode,
      verbose: args.verbose,
    }
  }
}

fn main() -> anyhow::Result<()> {
  let config = ConvertConfig::from(Args::parse());

  let default_level = if config.verbose { "debug" } else { "warn" };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
    .init();

  let summary = convert::run(&config)
    .with_context(|| format!("failed to convert {}", config.input.display()))?;

  log::info!(
    "{}x{} {}bpp image: {} sprites of {}x{}, {} pixels written",
    summary.width,
    summary.height,
    summary.bits_per_pixel,
    summary.grid.sprite_count(),
    summary.grid.sprite_width,
    summary.grid.sprite_height,
    summary.pixel_tokens,
  );
  if let Some(entries) = summary.palette_entries {
    log::info!("{entries} palette entries written");
  }

  Ok(())
}
