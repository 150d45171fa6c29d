use sprite2coe::{
  config::{ColorDepth, ConvertConfig, SpriteMode},
  convert::{convert_bytes, ConvertWarning},
  CoeError,
};

use super::{build_bmp, coe_tokens, rand_bytes};

fn config(sprite_size: u32) -> ConvertConfig {
  ConvertConfig::new("in.bmp", "out.coe", sprite_size)
}

#[test]
fn test_solid_8bpp_fill() {
  let palette = vec![[0, 0, 0, 0]; 256];
  let rows = vec![vec![5_u8; 4]; 4];
  let bytes = build_bmp(4, 4, 8, &palette, 0, &rows);
  let conversion = convert_bytes(&bytes, &config(4)).unwrap();
  let tokens = coe_tokens(&conversion.image_coe);
  assert_eq!(tokens.len(), 16);
  assert!(tokens.iter().all(|t| t == "5"));
  // indexed with no palette output: the table is dropped with a warning.
  assert!(conversion.palette_coe.is_none());
  assert_eq!(conversion.summary.warnings, [ConvertWarning::PaletteDiscarded { bits_per_pixel: 8 }]);
}

#[test]
fn test_24bpp_token_count() {
  let (width, height) = (8_u32, 4_u32);
  let rows: Vec<Vec<u8>> =
    (0..height).map(|y| (0..width * 3).map(|i| (y * 100 + i) as u8).collect()).collect();
  let bytes = build_bmp(width, height as i32, 24, &[], 0, &rows);
  let conversion = convert_bytes(&bytes, &config(2)).unwrap();
  let tokens = coe_tokens(&conversion.image_coe);
  assert_eq!(tokens.len(), (width * height) as usize);
  assert_eq!(conversion.summary.pixel_tokens, tokens.len());
  // first sprite starts at the top left pixel, the blue byte of the top row.
  assert_eq!(tokens[0], format!("{:x}", (3 * 100) as u8));
}

#[test]
fn test_2x2_single_pixel_sprites_top_down_order() {
  let palette = vec![[0, 0, 0, 0]; 4];
  // bottom row [2, 3], top row [0, 1]
  let rows = vec![vec![2, 3], vec![0, 1]];
  let bytes = build_bmp(2, 2, 8, &palette, 4, &rows);
  let conversion = convert_bytes(&bytes, &config(1)).unwrap();
  assert_eq!(coe_tokens(&conversion.image_coe), ["0", "1", "2", "3"]);
}

#[test]
fn test_top_down_file_matches_bottom_up_file() {
  let palette = vec![[0, 0, 0, 0]; 16];
  let bottom_up = build_bmp(2, 2, 8, &palette, 16, &[vec![2, 3], vec![0, 1]]);
  let top_down = build_bmp(2, -2, 8, &palette, 16, &[vec![0, 1], vec![2, 3]]);
  let a = convert_bytes(&bottom_up, &config(1)).unwrap();
  let b = convert_bytes(&top_down, &config(1)).unwrap();
  assert_eq!(a.image_coe, b.image_coe);
}

#[test]
fn test_4bpp_sheet_with_palette() {
  let palette = [[0xFF, 0x00, 0x00, 0], [0x00, 0xFF, 0x00, 0], [0x00, 0x00, 0xFF, 0]];
  // 5x2 image, odd width. Storage rows bottom first.
  let rows = vec![vec![0x21, 0x00, 0x10], vec![0x12, 0x00, 0x20]];
  let bytes = build_bmp(5, 2, 4, &palette, 3, &rows);
  let mut config = config(2);
  config.palette = Some("pal.coe".into());
  config.palette_switch = Some("pal.v".into());
  let conversion = convert_bytes(&bytes, &config).unwrap();

  // 2 sprites across, row width 4.
  assert_eq!(conversion.summary.grid.sprites_x, 2);
  // rows are 4 pixels apart in storage, so the stored fifth column shifts
  // into the row above.
  assert_eq!(coe_tokens(&conversion.image_coe), ["2", "0", "0", "0", "0", "2", "1", "1"]);

  let palette_tokens = coe_tokens(conversion.palette_coe.as_ref().unwrap());
  assert_eq!(palette_tokens.len(), 16);
  assert_eq!(&palette_tokens[..4], ["00f", "0f0", "f00", "f0f"]);
  assert_eq!(conversion.summary.palette_entries, Some(16));
  assert!(conversion.summary.warnings.is_empty());

  let switch = String::from_utf8(conversion.palette_switch.unwrap()).unwrap();
  assert_eq!(switch.matches(": begin").count(), 4);
  assert!(switch.starts_with("4'd0: begin\npalette_r=4'd0\npalette_g=4'd0\npalette_b=4'd15\nend\n"));
  assert!(switch.ends_with("default: begin\npalette_r=4'd15\npalette_g=4'd0\npalette_b=4'd15\nend\n"));
  assert!(!switch.contains(';'));
}

#[test]
fn test_24bit_palette_depth() {
  let palette = vec![[0x12, 0x34, 0x56, 0]; 256];
  let bytes = build_bmp(1, 1, 8, &palette, 0, &[vec![0]]);
  let mut config = config(1);
  config.depth = ColorDepth::Rgb888;
  config.palette = Some("pal.coe".into());
  let conversion = convert_bytes(&bytes, &config).unwrap();
  let tokens = coe_tokens(conversion.palette_coe.as_ref().unwrap());
  assert_eq!(tokens.len(), 256);
  assert!(tokens.iter().all(|t| t == "563412"));
  assert!(conversion.summary.warnings.is_empty());
}

#[test]
fn test_palette_request_on_24bpp_is_skipped() {
  let bytes = build_bmp(1, 1, 24, &[], 0, &[vec![1, 2, 3]]);
  let mut config = config(1);
  config.palette = Some("pal.coe".into());
  let conversion = convert_bytes(&bytes, &config).unwrap();
  assert!(conversion.palette_coe.is_none());
  assert_eq!(conversion.summary.palette_entries, None);
  assert_eq!(coe_tokens(&conversion.image_coe), ["1"]);
  assert_eq!(conversion.summary.warnings, [ConvertWarning::NoColorTable { bits_per_pixel: 24 }]);
  assert_eq!(
    conversion.summary.warnings[0].to_string(),
    "24bpp image has no color table, no palette output will be written"
  );
}

#[test]
fn test_single_mode() {
  let palette = vec![[0, 0, 0, 0]; 256];
  let rows = vec![vec![4, 5, 6], vec![1, 2, 3]];
  let bytes = build_bmp(3, 2, 8, &palette, 0, &rows);
  let mut config = config(1);
  config.mode = SpriteMode::Single;
  let conversion = convert_bytes(&bytes, &config).unwrap();
  assert_eq!(conversion.summary.grid.sprite_count(), 1);
  assert_eq!(coe_tokens(&conversion.image_coe), ["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn test_rejections() {
  let palette = vec![[0, 0, 0, 0]; 2];
  for bpp in [1, 16, 32] {
    let bytes = build_bmp(4, 4, bpp, &palette, 2, &vec![vec![0; 8]; 4]);
    let err = convert_bytes(&bytes, &config(1)).unwrap_err();
    assert!(err.is_unsupported_format(), "bpp {bpp}: {err}");
  }

  let mut bytes = build_bmp(4, 4, 8, &[], 0, &vec![vec![0; 4]; 4]);
  bytes[30] = 1; // RLE8
  assert!(matches!(convert_bytes(&bytes, &config(1)), Err(CoeError::UnsupportedCompression(1))));

  let mut bytes = build_bmp(4, 4, 24, &[], 0, &vec![vec![0; 12]; 4]);
  bytes[0] = b'X';
  assert!(matches!(convert_bytes(&bytes, &config(1)), Err(CoeError::Format(_))));

  let bytes = build_bmp(4, 2, 24, &[], 0, &vec![vec![0; 12]; 2]);
  let err = convert_bytes(&bytes, &config(3)).unwrap_err();
  assert!(matches!(err, CoeError::SpriteTooLarge { axis: "height", sprite: 3, image: 2 }));

  let mut bytes = build_bmp(4, 4, 24, &[], 0, &vec![vec![0; 12]; 4]);
  bytes.truncate(bytes.len() - 1);
  assert!(matches!(convert_bytes(&bytes, &config(1)), Err(CoeError::Truncated { .. })));
}

#[test]
fn test_random_bytes_do_not_panic() {
  for _ in 0..100 {
    let mut v = rand_bytes(256);
    let _ = convert_bytes(&v, &config(1));
    // also with a valid looking start, so the header checks get past the tag.
    v[0] = b'B';
    v[1] = b'M';
    let _ = convert_bytes(&v, &config(2));
  }
}
