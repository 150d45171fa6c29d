use sprite2coe::{
  config::{ConvertConfig, Transparency},
  convert::run,
  CoeError,
};

use super::{build_bmp, coe_tokens};

#[test]
fn test_run_writes_all_outputs() {
  let dir = tempfile::tempdir().unwrap();
  let input = dir.path().join("sheet.bmp");
  let palette = vec![[0x10, 0x20, 0x30, 0]; 2];
  std::fs::write(&input, build_bmp(4, 4, 8, &palette, 2, &vec![vec![1, 0, 1, 0]; 4])).unwrap();

  let mut config = ConvertConfig::new(&input, dir.path().join("sheet.coe"), 2);
  config.palette = Some(dir.path().join("palette.coe"));
  config.palette_switch = Some(dir.path().join("palette.v"));
  let summary = run(&config).unwrap();
  assert_eq!(summary.pixel_tokens, 16);
  assert_eq!(summary.palette_entries, Some(256));

  let image = std::fs::read(dir.path().join("sheet.coe")).unwrap();
  assert_eq!(coe_tokens(&image).len(), 16);
  let palette = std::fs::read(dir.path().join("palette.coe")).unwrap();
  let tokens = coe_tokens(&palette);
  assert_eq!(tokens.len(), 256);
  assert_eq!(tokens[0], "321");
  assert_eq!(tokens[2], "f0f");
  let switch = std::fs::read_to_string(dir.path().join("palette.v")).unwrap();
  assert!(switch.contains("8'd1: begin"));
  assert!(!switch.contains("8'd2: begin"));

  // nothing but the input and the three outputs.
  assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 4);
}

#[test]
fn test_run_failure_writes_nothing() {
  let dir = tempfile::tempdir().unwrap();
  let input = dir.path().join("deep.bmp");
  std::fs::write(&input, build_bmp(4, 4, 16, &[], 0, &vec![vec![0; 8]; 4])).unwrap();

  let config = ConvertConfig::new(&input, dir.path().join("deep.coe"), 2);
  let err = run(&config).unwrap_err();
  assert!(matches!(err, CoeError::UnsupportedBitDepth(16)));
  assert!(!dir.path().join("deep.coe").exists());
  assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_bad_transparency_fails_before_reading() {
  let dir = tempfile::tempdir().unwrap();
  // the input doesn't exist, so reaching the file system would be an io error.
  let mut config =
    ConvertConfig::new(dir.path().join("missing.bmp"), dir.path().join("out.coe"), 2);
  config.transparency = Transparency(0x100_0000);
  let err = run(&config).unwrap_err();
  assert!(matches!(err, CoeError::TransparencyOutOfRange(0x100_0000)));
  assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_input_is_io_error() {
  let dir = tempfile::tempdir().unwrap();
  let config = ConvertConfig::new(dir.path().join("missing.bmp"), dir.path().join("out.coe"), 2);
  assert!(matches!(run(&config), Err(CoeError::Io(_))));
}
