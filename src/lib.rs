//! Minimal software rasterization library.
//!
//! An in-memory pixel buffer ([`Surface`]) plus primitive drawing and
//! compositing operations, interchangeable fill strategies (scalar and
//! SIMD), a lossless PPM (P6) codec, and a fixed 3x5 bitmap font. No GPU,
//! no windowing dependency; callers that want a window enable the `display`
//! feature for the SDL2 presentation layer.
//!
//! Everything is single-threaded and synchronous. Drawing calls clip to the
//! surface bounds and never fail; only surface allocation and the codec
//! return [`Error`].
//!
//! ```
//! use softcanvas::{draw_text, save_ppm, Blend, Surface, BLACK, RED, WHITE};
//!
//! let mut canvas = Surface::new(320, 240)?;
//! canvas.fill(BLACK);
//! canvas.draw_circle(160, 120, 60, RED, Blend::Overwrite);
//! canvas.draw_line(0, 0, 320, 240, WHITE, Blend::Overwrite);
//! draw_text(&mut canvas, 8, 8, "HELLO", WHITE);
//! # let dir = std::env::temp_dir().join("softcanvas_doc.ppm");
//! # save_ppm(&canvas, &dir)?;
//! # std::fs::remove_file(&dir).ok();
//! # Ok::<(), softcanvas::Error>(())
//! ```

pub mod color;
pub mod draw;
pub mod error;
pub mod fill;
pub mod font;
pub mod ppm;
pub mod surface;

#[cfg(feature = "display")]
pub mod display;

pub use color::{
    mix, Blend, Color, BLACK, BLUE, CYAN, GREEN, MAGENTA, RED, TRANSPARENT, WHITE, YELLOW,
};
pub use error::Error;
pub use fill::{fill_with, FillStrategy};
pub use font::{draw_char, draw_text, text_width, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use ppm::{decode_ppm, decode_ppm_bytes, encode_ppm, load_ppm, save_ppm};
pub use surface::{Surface, BYTES_PER_PIXEL};

#[cfg(feature = "display")]
pub use display::{Display, InputEvent, RenderTarget};
