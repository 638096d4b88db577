mod compiler;
mod config;
mod error;
mod glyph;
mod report;

pub use compiler::{compile, GlyphCompiler};
pub use config::{CompileConfig, DimensionPolicy};
pub use error::{Error, Result};
pub use glyph::{
    GlyphIndex, PackedGlyph, GLYPH_COUNT, GLYPH_HEIGHT, GLYPH_WIDTH, LUMINANCE_THRESHOLD,
};
pub use report::{CompileReport, GlyphOutcome, SkipReason};
