use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::glyph::{GlyphIndex, GLYPH_HEIGHT, GLYPH_WIDTH};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(
        "glyph {index} is {width}x{height}, image must be {}x{}",
        GLYPH_WIDTH,
        GLYPH_HEIGHT
    )]
    DimensionMismatch {
        index: GlyphIndex,
        width: u32,
        height: u32,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
