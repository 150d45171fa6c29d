//! Re-ordering pixels one sprite at a time.

use crate::{bmp::PixelBuffer, config::SpriteMode};

/// How an image divides into sprites.
///
/// Any columns on the right or rows on the bottom that don't fill a whole
/// sprite are left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpriteGrid {
  pub sprite_width: u32,
  pub sprite_height: u32,
  pub sprites_x: u32,
  pub sprites_y: u32,
}
impl SpriteGrid {
  /// A grid of `sprite_width` by `sprite_height` sprites over the image.
  ///
  /// Zero sized sprites give an empty grid.
  #[inline]
  #[must_use]
  pub const fn new(width: u32, height: u32, sprite_width: u32, sprite_height: u32) -> Self {
    let (sprites_x, sprites_y) = if sprite_width == 0 || sprite_height == 0 {
      (0, 0)
    } else {
      (width / sprite_width, height / sprite_height)
    };
    Self { sprite_width, sprite_height, sprites_x, sprites_y }
  }

  /// The grid for a [SpriteMode].
  #[inline]
  #[must_use]
  pub const fn for_mode(width: u32, height: u32, mode: SpriteMode, sprite_size: u32) -> Self {
    match mode {
      SpriteMode::Sheet => Self::new(width, height, sprite_size, sprite_size),
      SpriteMode::Single => Self::new(width, height, width, height),
    }
  }

  #[inline]
  #[must_use]
  pub const fn sprite_count(&self) -> usize {
    self.sprites_x as usize * self.sprites_y as usize
  }

  #[inline]
  #[must_use]
  pub const fn pixels_per_sprite(&self) -> usize {
    self.sprite_width as usize * self.sprite_height as usize
  }

  /// Width of the whole sprites across, in pixels.
  ///
  /// This is the row stride the tiler walks the buffer with.
  #[inline]
  #[must_use]
  pub const fn row_width(&self) -> u32 {
    self.sprites_x * self.sprite_width
  }

  /// Total number of pixels the tiler will produce.
  #[inline]
  #[must_use]
  pub const fn pixel_count(&self) -> usize {
    self.sprite_count() * self.pixels_per_sprite()
  }

  /// Maps the `n`th output pixel to its `(row_from_top, col)` in the image.
  ///
  /// Sprites go left to right then top to bottom, and so do the pixels within
  /// each sprite.
  #[inline]
  #[must_use]
  pub const fn position_of(&self, n: usize) -> (u32, u32) {
    let per_sprite = self.pixels_per_sprite();
    let sprite = n / per_sprite;
    let within = n % per_sprite;
    let sprite_y = (sprite / self.sprites_x as usize) as u32;
    let sprite_x = (sprite % self.sprites_x as usize) as u32;
    let pix_y = (within / self.sprite_width as usize) as u32;
    let pix_x = (within % self.sprite_width as usize) as u32;
    (sprite_y * self.sprite_height + pix_y, sprite_x * self.sprite_width + pix_x)
  }
}

/// Iterates the pixels of a [PixelBuffer] in sprite order.
///
/// Rows are addressed back from the end of the buffer with a stride of
/// [SpriteGrid::row_width], not the image width. When the width isn't a whole
/// number of sprites the leftover pixels of each stored row shift into the
/// next row up, and the output keeps that shift.
#[derive(Debug, Clone)]
pub struct SpriteTiler<'b> {
  buffer: &'b PixelBuffer,
  grid: SpriteGrid,
  next: usize,
}
impl<'b> SpriteTiler<'b> {
  #[inline]
  #[must_use]
  pub const fn new(buffer: &'b PixelBuffer, grid: SpriteGrid) -> Self {
    Self { buffer, grid, next: 0 }
  }
}
impl Iterator for SpriteTiler<'_> {
  type Item = u8;

  #[inline]
  fn next(&mut self) -> Option<u8> {
    if self.next >= self.grid.pixel_count() {
      return None;
    }
    let (row, col) = self.grid.position_of(self.next);
    self.next += 1;
    self.buffer.pixel_at_with_stride(row, col, self.grid.row_width())
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.grid.pixel_count().saturating_sub(self.next);
    (remaining, Some(remaining))
  }
}
impl ExactSizeIterator for SpriteTiler<'_> {}
