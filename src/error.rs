//! Crate error taxonomy.

use thiserror::Error;

/// Errors surfaced by surface creation and the PPM codec.
///
/// Invalid geometry (negative radius, off-surface coordinates, non-positive
/// rect extents) is never an error; those calls degrade to clipped or empty
/// draws. Only allocation of a zero-sized surface and codec I/O or format
/// problems report through this type.
#[derive(Debug, Error)]
pub enum Error {
    /// Surface creation with a zero dimension
    #[error("cannot allocate {width}x{height} surface: both dimensions must be nonzero")]
    Allocation { width: u32, height: u32 },

    /// File open/read/write failure in the codec paths
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed PPM magic/header, truncated pixel stream, or mismatched
    /// raw-pixel ingest length
    #[error("format error: {0}")]
    Format(String),
}
