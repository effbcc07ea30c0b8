//! Owned rectangular pixel buffer.
//!
//! A [`Surface`] is the canvas every other module draws on: `width * height`
//! [`Color`] pixels in row-major order, pixel (x, y) at linear index
//! `y * width + x`. The buffer length always equals `width * height`; there
//! are no sparse or resizable surfaces. Release is `Drop`, which makes
//! use-after-destroy unrepresentable instead of a runtime check.

use crate::color::{Blend, Color};
use crate::error::Error;

/// Bytes per pixel in the raw RGBA8888 view
pub const BYTES_PER_PIXEL: usize = 4;

/// An owned width x height pixel buffer for software rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Surface {
    /// Allocate a zero-initialized (transparent black) surface.
    ///
    /// Fails with [`Error::Allocation`] when either dimension is zero; the
    /// size is fixed for the surface's lifetime.
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::Allocation { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![Color::default(); (width as usize) * (height as usize)],
        })
    }

    /// Build a surface from externally decoded RGBA8 bytes (4 bytes per
    /// pixel, row-major). The bytes are copied verbatim; this is the ingest
    /// point for third-party image decoders.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, Error> {
        let mut surface = Self::new(width, height)?;
        let expected = surface.pixels.len() * BYTES_PER_PIXEL;
        if bytes.len() != expected {
            return Err(Error::Format(format!(
                "rgba8 ingest expects {expected} bytes for {width}x{height}, got {}",
                bytes.len()
            )));
        }
        for (pixel, chunk) in surface.pixels.iter_mut().zip(bytes.chunks_exact(4)) {
            *pixel = Color::rgba(chunk[0], chunk[1], chunk[2], chunk[3]);
        }
        Ok(surface)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count (`width * height`)
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Linear index of pixel (x, y); caller guarantees in-bounds coordinates
    #[inline]
    pub(crate) fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// Read a pixel (bounds checked); `None` when off-surface
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if self.in_bounds(x, y) {
            Some(self.pixels[self.pixel_index(x as u32, y as u32)])
        } else {
            None
        }
    }

    /// Write a pixel (bounds checked); off-surface writes are skipped
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            self.pixels[idx] = color;
        }
    }

    /// Write a pixel through a [`Blend`] mode (bounds checked)
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, color: Color, blend: Blend) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            self.pixels[idx] = blend.apply(self.pixels[idx], color);
        }
    }

    /// Set every pixel to `color` using the default (index-loop) strategy.
    /// See [`crate::fill`] for the interchangeable fill strategies.
    pub fn fill(&mut self, color: Color) {
        crate::fill::fill_with(self, color, crate::fill::FillStrategy::Index);
    }

    /// Copy (or composite) `src` onto this surface with its top-left corner
    /// at (x, y). Destination pixels that fall off-surface are silently
    /// skipped; there is no wraparound.
    pub fn blit(&mut self, src: &Surface, x: i32, y: i32, blend: Blend) {
        let src_w = src.width as i32;
        let src_h = src.height as i32;

        for sy in 0..src_h {
            let dy = y + sy;
            if dy < 0 || dy >= self.height as i32 {
                continue;
            }
            for sx in 0..src_w {
                let dx = x + sx;
                if dx < 0 || dx >= self.width as i32 {
                    continue;
                }
                let si = src.pixel_index(sx as u32, sy as u32);
                let di = self.pixel_index(dx as u32, dy as u32);
                self.pixels[di] = blend.apply(self.pixels[di], src.pixels[si]);
            }
        }
    }

    /// Raw RGBA8888 byte view (32 bits/pixel, byte 0 = red).
    /// This is the layout a presentation layer uploads directly.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        // Safety: Color is #[repr(C)] with four u8 fields, so a pixel is
        // exactly 4 bytes with no padding and any byte pattern is valid.
        unsafe {
            std::slice::from_raw_parts(
                self.pixels.as_ptr() as *const u8,
                self.pixels.len() * BYTES_PER_PIXEL,
            )
        }
    }

    /// Mutable raw RGBA8888 byte view
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        // Safety: same layout argument as as_bytes(); exclusive borrow.
        unsafe {
            std::slice::from_raw_parts_mut(
                self.pixels.as_mut_ptr() as *mut u8,
                self.pixels.len() * BYTES_PER_PIXEL,
            )
        }
    }
}
