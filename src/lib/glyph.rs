use core::fmt;
use std::path::{Path, PathBuf};

use byteorder::{BigEndian, ByteOrder};
use image::GrayImage;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 8;
pub const GLYPH_COUNT: u8 = 8;

// Pixels brighter than this are "on"
pub const LUMINANCE_THRESHOLD: u8 = 127;

const SOURCE_EXTENSION: &str = "png";
const OUTPUT_EXTENSION: &str = "char";

/// Character slot, always in `0..GLYPH_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlyphIndex(u8);

impl GlyphIndex {
    pub fn new(index: u8) -> Option<Self> {
        (index < GLYPH_COUNT).then_some(Self(index))
    }

    pub fn all() -> impl Iterator<Item = GlyphIndex> {
        (0..GLYPH_COUNT).map(GlyphIndex)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn source_path(self, base_dir: &Path) -> PathBuf {
        base_dir.join(format!("{}.{}", self.0, SOURCE_EXTENSION))
    }

    pub fn output_path(self, base_dir: &Path) -> PathBuf {
        base_dir.join(format!("{}.{}", self.0, OUTPUT_EXTENSION))
    }
}

impl fmt::Display for GlyphIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One byte per row. Column 0 lands in bit 4, column 4 in bit 0, and the top
/// three bits stay zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackedGlyph([u8; GLYPH_HEIGHT as usize]);

impl PackedGlyph {
    /// Returns `None` unless the image is exactly `GLYPH_WIDTH` x `GLYPH_HEIGHT`.
    pub fn pack(image: &GrayImage, threshold: u8) -> Option<Self> {
        if image.dimensions() != (GLYPH_WIDTH, GLYPH_HEIGHT) {
            return None;
        }

        let mut rows = [0u8; GLYPH_HEIGHT as usize];
        for y in 0..GLYPH_HEIGHT {
            let row = &mut rows[y as usize];
            for x in 0..GLYPH_WIDTH {
                let on = image.get_pixel(x, y).0[0] > threshold;
                *row = (*row << 1) | u8::from(on);
            }
        }

        Some(Self(rows))
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        <[u8; GLYPH_HEIGHT as usize]>::try_from(bytes).ok().map(Self)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= GLYPH_WIDTH || y >= GLYPH_HEIGHT {
            return false;
        }

        let mask = 1 << (GLYPH_WIDTH - 1 - x);
        self.0[y as usize] & mask != 0
    }

    // row 0 is the most significant byte
    pub fn to_u64(&self) -> u64 {
        BigEndian::read_u64(&self.0)
    }
}

impl fmt::Display for PackedGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..GLYPH_HEIGHT {
            for x in 0..GLYPH_WIDTH {
                f.write_str(if self.pixel(x, y) { "#" } else { "." })?;
            }
            if y + 1 < GLYPH_HEIGHT {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
