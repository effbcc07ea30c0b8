//! PPM (P6) image codec.
//!
//! Binary-safe encode/decode of a [`Surface`] to the uncompressed PPM
//! format: ASCII header `P6\n<width> <height>\n255\n`, then one r,g,b triple
//! per pixel in row-major order. Alpha is not persisted; decoding resets it
//! to 255. The decoder accepts `#` comment lines ahead of the dimension
//! tokens and requires maxval 255 (the format is not generalized).
//!
//! Failures terminate the operation and surface to the caller; they never
//! touch sibling surfaces, and freeing a surface is always the owner's
//! concern (`Drop`), independent of any codec error.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::debug;

use crate::color::Color;
use crate::error::Error;
use crate::surface::Surface;

const MAGIC: &[u8; 2] = b"P6";
const MAXVAL: u32 = 255;

// ============================================================================
// Encode
// ============================================================================

/// Encode `surface` as binary PPM into `writer`.
///
/// Writes the same r,g,b channel order the decoder reads back.
pub fn encode_ppm<W: Write>(surface: &Surface, writer: &mut W) -> Result<(), Error> {
    write!(
        writer,
        "P6\n{} {}\n{MAXVAL}\n",
        surface.width(),
        surface.height()
    )?;
    for pixel in surface.pixels() {
        writer.write_all(&[pixel.r, pixel.g, pixel.b])?;
    }
    debug!(
        "encoded {}x{} surface as PPM",
        surface.width(),
        surface.height()
    );
    Ok(())
}

/// Encode `surface` to a file at `path`.
///
/// On failure any partially written file is left in place (no atomic
/// rename); the surface itself is untouched.
pub fn save_ppm<P: AsRef<Path>>(surface: &Surface, path: P) -> Result<(), Error> {
    let mut writer = BufWriter::new(File::create(path)?);
    encode_ppm(surface, &mut writer)?;
    writer.flush()?;
    Ok(())
}

// ============================================================================
// Decode
// ============================================================================

/// Decode a binary PPM stream into a new [`Surface`] with alpha forced
/// to 255. Malformed magic, header, or a truncated pixel stream reports
/// [`Error::Format`].
pub fn decode_ppm<R: Read>(reader: &mut R) -> Result<Surface, Error> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    decode_ppm_bytes(&data)
}

/// Decode a binary PPM from an in-memory byte slice
pub fn decode_ppm_bytes(data: &[u8]) -> Result<Surface, Error> {
    if !data.starts_with(MAGIC) {
        return Err(Error::Format("not a P6 PPM (bad magic)".into()));
    }
    let mut pos = 2;

    let width = parse_header_number(data, &mut pos)?;
    let height = parse_header_number(data, &mut pos)?;
    let maxval = parse_header_number(data, &mut pos)?;
    if maxval != MAXVAL {
        return Err(Error::Format(format!(
            "unsupported maxval {maxval}, only {MAXVAL} is handled"
        )));
    }

    // Exactly one whitespace byte separates the header from pixel data
    match data.get(pos) {
        Some(b) if b.is_ascii_whitespace() => pos += 1,
        _ => {
            return Err(Error::Format(
                "missing whitespace after maxval".into(),
            ))
        },
    }

    let mut surface = Surface::new(width, height)?;
    let expected = surface.pixel_count() * 3;
    let body = &data[pos..];
    if body.len() < expected {
        return Err(Error::Format(format!(
            "truncated pixel stream: expected {expected} bytes, got {}",
            body.len()
        )));
    }
    for (pixel, triple) in surface.pixels_mut().iter_mut().zip(body.chunks_exact(3)) {
        *pixel = Color::rgb(triple[0], triple[1], triple[2]);
    }
    debug!("decoded {width}x{height} PPM");
    Ok(surface)
}

/// Load a binary PPM file from `path`
pub fn load_ppm<P: AsRef<Path>>(path: P) -> Result<Surface, Error> {
    let mut file = File::open(path)?;
    decode_ppm(&mut file)
}

/// Parse the next ASCII decimal in the header, skipping whitespace and
/// `#` comment lines
fn parse_header_number(data: &[u8], pos: &mut usize) -> Result<u32, Error> {
    // Skip whitespace and full comment lines
    loop {
        match data.get(*pos) {
            Some(b) if b.is_ascii_whitespace() => *pos += 1,
            Some(&b'#') => {
                while let Some(&b) = data.get(*pos) {
                    *pos += 1;
                    if b == b'\n' {
                        break;
                    }
                }
            },
            Some(_) => break,
            None => return Err(Error::Format("truncated PPM header".into())),
        }
    }

    let start = *pos;
    while let Some(b) = data.get(*pos) {
        if !b.is_ascii_digit() {
            break;
        }
        *pos += 1;
    }
    if *pos == start {
        return Err(Error::Format("expected decimal in PPM header".into()));
    }
    // Digits only, so the parse can only fail on u32 overflow
    std::str::from_utf8(&data[start..*pos])
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| Error::Format("header number out of range".into()))
}
