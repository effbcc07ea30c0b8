//! Interchangeable whole-surface fill strategies.
//!
//! Four algorithms with one contract: for any surface and color they produce
//! byte-identical buffers. They exist to compare throughput, never behavior.
//! The vector strategies use unaligned 128/256-bit splat stores with a scalar
//! remainder loop for the tail; on targets without the required CPU features
//! they fall back to the index loop, keeping the contract intact.

use crate::color::Color;
use crate::surface::Surface;

/// Which fill algorithm to run. All variants write the same bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillStrategy {
    /// Index-addressed scalar loop
    #[default]
    Index,
    /// Pointer-stepped scalar loop
    Pointer,
    /// 128-bit (SSE2) splat stores, 4 pixels per store, scalar tail
    Vector128,
    /// 256-bit (AVX2) splat stores, 8 pixels per store, scalar tail
    Vector256,
}

/// Set every pixel of `surface` to `color` using the chosen strategy
pub fn fill_with(surface: &mut Surface, color: Color, strategy: FillStrategy) {
    let pixels = surface.pixels_mut();
    match strategy {
        FillStrategy::Index => fill_index(pixels, color),
        FillStrategy::Pointer => fill_pointer(pixels, color),
        FillStrategy::Vector128 => fill_vector128(pixels, color),
        FillStrategy::Vector256 => fill_vector256(pixels, color),
    }
}

// The index-addressed loop is the point of this strategy
#[allow(clippy::needless_range_loop)]
fn fill_index(pixels: &mut [Color], color: Color) {
    for i in 0..pixels.len() {
        pixels[i] = color;
    }
}

fn fill_pointer(pixels: &mut [Color], color: Color) {
    let mut cur = pixels.as_mut_ptr();
    // Safety: end is one past the last element; cur starts at the first
    // element and advances one at a time, so every write is in-bounds and
    // the loop terminates exactly at end.
    unsafe {
        let end = cur.add(pixels.len());
        while cur != end {
            cur.write(color);
            cur = cur.add(1);
        }
    }
}

#[cfg(target_arch = "x86_64")]
fn fill_vector128(pixels: &mut [Color], color: Color) {
    if std::is_x86_feature_detected!("sse2") {
        // Safety: SSE2 support verified at runtime.
        unsafe { fill_sse2(pixels, color) }
    } else {
        fill_index(pixels, color);
    }
}

#[cfg(target_arch = "x86_64")]
fn fill_vector256(pixels: &mut [Color], color: Color) {
    if std::is_x86_feature_detected!("avx2") {
        // Safety: AVX2 support verified at runtime.
        unsafe { fill_avx2(pixels, color) }
    } else {
        fill_index(pixels, color);
    }
}

// Documented substitution: without x86_64 vector intrinsics the wide
// strategies run the index loop. Output is identical either way.
#[cfg(not(target_arch = "x86_64"))]
fn fill_vector128(pixels: &mut [Color], color: Color) {
    fill_index(pixels, color);
}

#[cfg(not(target_arch = "x86_64"))]
fn fill_vector256(pixels: &mut [Color], color: Color) {
    fill_index(pixels, color);
}

/// 4 pixels per 128-bit store, `len % 4` finished scalar.
///
/// The splat word is the `0xAABBGGRR` hex packing, which little-endian
/// stores lay out as the same r,g,b,a bytes the scalar loops write.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse2")]
unsafe fn fill_sse2(pixels: &mut [Color], color: Color) {
    use core::arch::x86_64::*;

    let len = pixels.len();
    let ptr = pixels.as_mut_ptr() as *mut u32;
    let splat = _mm_set1_epi32(color.to_hex() as i32);
    let vector_len = len & !3; // round down to multiple of 4

    let mut i = 0;
    while i < vector_len {
        // Safety: i + 4 <= len, and the unaligned store makes no alignment
        // assumption about the Vec allocation.
        _mm_storeu_si128(ptr.add(i) as *mut __m128i, splat);
        i += 4;
    }
    while i < len {
        *pixels.get_unchecked_mut(i) = color;
        i += 1;
    }
}

/// 8 pixels per 256-bit store, `len % 8` finished scalar
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn fill_avx2(pixels: &mut [Color], color: Color) {
    use core::arch::x86_64::*;

    let len = pixels.len();
    let ptr = pixels.as_mut_ptr() as *mut u32;
    let splat = _mm256_set1_epi32(color.to_hex() as i32);
    let vector_len = len & !7; // round down to multiple of 8

    let mut i = 0;
    while i < vector_len {
        // Safety: i + 8 <= len; unaligned store, no alignment assumption.
        _mm256_storeu_si256(ptr.add(i) as *mut __m256i, splat);
        i += 8;
    }
    while i < len {
        *pixels.get_unchecked_mut(i) = color;
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{CYAN, MAGENTA, YELLOW};

    const ALL_STRATEGIES: [FillStrategy; 4] = [
        FillStrategy::Index,
        FillStrategy::Pointer,
        FillStrategy::Vector128,
        FillStrategy::Vector256,
    ];

    fn assert_strategies_agree(width: u32, height: u32, color: Color) {
        let mut reference = Surface::new(width, height).unwrap();
        fill_with(&mut reference, color, FillStrategy::Index);
        assert!(reference.pixels().iter().all(|&p| p == color));

        for strategy in ALL_STRATEGIES {
            let mut surface = Surface::new(width, height).unwrap();
            fill_with(&mut surface, color, strategy);
            assert_eq!(
                surface.as_bytes(),
                reference.as_bytes(),
                "strategy {strategy:?} diverged on {width}x{height}"
            );
        }
    }

    #[test]
    fn test_single_pixel_surface() {
        assert_strategies_agree(1, 1, YELLOW);
    }

    #[test]
    fn test_tail_only_sizes() {
        // Pixel counts below one vector width exercise only the tail loops
        assert_strategies_agree(3, 1, CYAN);
        assert_strategies_agree(7, 1, CYAN);
    }

    #[test]
    fn test_non_multiple_of_vector_width() {
        // 13 * 17 = 221 = 27 * 8 + 5: both vector widths leave a tail
        assert_strategies_agree(13, 17, MAGENTA);
        assert_strategies_agree(33, 7, Color::rgba(1, 2, 3, 4));
    }

    #[test]
    fn test_large_surface() {
        assert_strategies_agree(1024, 1024, Color::rgba(0x12, 0x34, 0x56, 0x78));
    }

    #[test]
    fn test_refill_overwrites_previous_contents() {
        let mut surface = Surface::new(16, 16).unwrap();
        fill_with(&mut surface, YELLOW, FillStrategy::Vector256);
        fill_with(&mut surface, CYAN, FillStrategy::Pointer);
        assert!(surface.pixels().iter().all(|&p| p == CYAN));
    }

    #[test]
    fn test_surface_fill_uses_index_strategy() {
        let mut a = Surface::new(9, 9).unwrap();
        let mut b = Surface::new(9, 9).unwrap();
        a.fill(MAGENTA);
        fill_with(&mut b, MAGENTA, FillStrategy::Index);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }
}
