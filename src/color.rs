//! RGBA color model and channel-level operations.
//!
//! Memory layout is RGBA8888: byte 0 is red, byte 3 is alpha. A surface's
//! raw bytes can therefore be handed to a presentation layer as 32bpp RGBA
//! without conversion.

// ============================================================================
// Color
// ============================================================================

/// A color with four independent 8-bit channels.
///
/// Channels are not premultiplied unless explicitly produced by
/// [`Color::premultiply`]. Alpha 255 is fully opaque, 0 fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

pub const RED: Color = Color::rgb(255, 0, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const YELLOW: Color = Color::rgb(255, 255, 0);
pub const MAGENTA: Color = Color::rgb(255, 0, 255);
pub const CYAN: Color = Color::rgb(0, 255, 255);
pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

impl Color {
    /// Opaque color from RGB channels (alpha = 255)
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a color from a `0xAABBGGRR` hex word.
    ///
    /// Bit layout: red in bits 0..8, green 8..16, blue 16..24, alpha 24..32,
    /// so the classic packed palette reads naturally (`RED = 0xFF0000FF`).
    /// Always shift/mask; never reinterpret the integer's memory.
    #[inline]
    pub const fn from_hex(value: u32) -> Self {
        Self {
            r: (value & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: ((value >> 16) & 0xFF) as u8,
            a: ((value >> 24) & 0xFF) as u8,
        }
    }

    /// Pack into a `0xAABBGGRR` hex word (inverse of [`Color::from_hex`])
    #[inline]
    pub const fn to_hex(self) -> u32 {
        (self.r as u32) | ((self.g as u32) << 8) | ((self.b as u32) << 16) | ((self.a as u32) << 24)
    }

    /// Convert to grayscale using Rec.601 integer luma weights.
    /// Alpha is preserved.
    #[inline]
    pub const fn grayscale(self) -> Self {
        let luma = ((77 * self.r as u32 + 150 * self.g as u32 + 29 * self.b as u32) >> 8) as u8;
        Self {
            r: luma,
            g: luma,
            b: luma,
            a: self.a,
        }
    }

    /// Scale the color channels by `alpha / 255` with integer truncation.
    /// Alpha itself is unchanged. Nothing in this crate calls this
    /// implicitly; it only prepares colors for premultiplied storage.
    #[inline]
    pub const fn premultiply(self) -> Self {
        let a = self.a as u32;
        Self {
            r: (self.r as u32 * a / 255) as u8,
            g: (self.g as u32 * a / 255) as u8,
            b: (self.b as u32 * a / 255) as u8,
            a: self.a,
        }
    }
}

// ============================================================================
// Compositing
// ============================================================================

/// Blend a single channel: `dst + (src - dst) * alpha / 255`.
///
/// i32 arithmetic with truncating division. Exact integer form, not the
/// `(x + 1 + (x >> 8)) >> 8` approximation: callers rely on bit-exact output.
#[inline]
fn mix_channel(dst: u8, src: u8, alpha: u8) -> u8 {
    (dst as i32 + (src as i32 - dst as i32) * alpha as i32 / 255) as u8
}

/// Alpha-over blend of `src` onto `dst`, weighted by the source's alpha.
///
/// All four channels use the same truncating formula; the alpha channel is
/// blended with itself as the weight. The destination's own alpha never
/// attenuates the result, so this is a simplified "over", not full
/// Porter-Duff.
#[inline]
pub fn mix(dst: Color, src: Color) -> Color {
    Color {
        r: mix_channel(dst.r, src.r, src.a),
        g: mix_channel(dst.g, src.g, src.a),
        b: mix_channel(dst.b, src.b, src.a),
        a: mix_channel(dst.a, src.a, src.a),
    }
}

/// Per-pixel write policy for the drawing primitives and `blit`.
///
/// A runtime choice rather than a compile-time switch so both paths stay
/// testable in one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Blend {
    /// Raw overwrite; the source replaces the destination
    #[default]
    Overwrite,
    /// Alpha-over via [`mix`]
    Alpha,
}

impl Blend {
    /// Resolve the output pixel for this mode
    #[inline]
    pub(crate) fn apply(self, dst: Color, src: Color) -> Color {
        match self {
            Blend::Overwrite => src,
            Blend::Alpha => mix(dst, src),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let c = Color::rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(Color::from_hex(c.to_hex()), c);
        assert_eq!(c.to_hex(), 0x78563412);
    }

    #[test]
    fn test_hex_palette_constants() {
        assert_eq!(Color::from_hex(0xFF0000FF), RED);
        assert_eq!(Color::from_hex(0xFF00FF00), GREEN);
        assert_eq!(Color::from_hex(0xFFFF0000), BLUE);
        assert_eq!(Color::from_hex(0xFFFFFF00), CYAN);
        assert_eq!(Color::from_hex(0xFF000000), BLACK);
    }

    #[test]
    fn test_grayscale_preserves_alpha() {
        let g = Color::rgba(200, 100, 50, 77).grayscale();
        assert_eq!(g.r, g.g);
        assert_eq!(g.g, g.b);
        assert_eq!(g.a, 77);
    }

    #[test]
    fn test_grayscale_white_stays_white() {
        let g = WHITE.grayscale();
        // 77 + 150 + 29 = 256, so full white maps back to 255
        assert_eq!(g, WHITE);
    }

    #[test]
    fn test_premultiply_truncates() {
        let c = Color::rgba(255, 100, 1, 128).premultiply();
        assert_eq!(c.r, 128); // 255 * 128 / 255
        assert_eq!(c.g, 50); // 100 * 128 / 255 = 50.19 -> 50
        assert_eq!(c.b, 0); // 1 * 128 / 255 = 0.50 -> 0
        assert_eq!(c.a, 128);
    }

    #[test]
    fn test_premultiply_opaque_is_identity() {
        let c = Color::rgb(13, 200, 89);
        assert_eq!(c.premultiply(), c);
    }

    #[test]
    fn test_mix_opaque_source_replaces() {
        assert_eq!(mix(BLACK, RED), RED);
        assert_eq!(mix(WHITE, BLUE), BLUE);
    }

    #[test]
    fn test_mix_transparent_source_keeps_destination() {
        let dst = Color::rgb(10, 20, 30);
        assert_eq!(mix(dst, TRANSPARENT), dst);
    }

    #[test]
    fn test_mix_half_red_over_black() {
        // 0 + (255 - 0) * 128 / 255 = 128 exactly under truncating division
        let out = mix(BLACK, Color::rgba(255, 0, 0, 128));
        assert_eq!(out.r, 128);
        assert_eq!(out.g, 0);
        assert_eq!(out.b, 0);
    }

    #[test]
    fn test_mix_blends_alpha_by_itself() {
        let dst = Color::rgba(0, 0, 0, 0);
        let src = Color::rgba(0, 0, 0, 128);
        // 0 + (128 - 0) * 128 / 255 = 64
        assert_eq!(mix(dst, src).a, 64);
    }

    #[test]
    fn test_mix_descending_channel() {
        // dst above src: 200 + (100 - 200) * 128 / 255 = 200 - 50 = 150
        let out = mix(Color::rgb(200, 200, 200), Color::rgba(100, 100, 100, 128));
        assert_eq!(out.r, 150);
    }
}
