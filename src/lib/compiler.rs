use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, ImageReader, Luma};
use log::{debug, error, info, trace, warn};

use crate::config::{CompileConfig, DimensionPolicy};
use crate::error::{Error, Result};
use crate::glyph::{GlyphIndex, PackedGlyph, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::report::{CompileReport, GlyphOutcome, SkipReason};

/// Turns `{i}.png` sources in a directory into packed `{i}.char` files.
#[derive(Debug)]
pub struct GlyphCompiler {
    config: CompileConfig,
}

impl GlyphCompiler {
    pub fn new(config: CompileConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// Visits every slot in index order. Missing sources are skipped, any
    /// other failure ends the run.
    pub fn compile(&self) -> Result<CompileReport> {
        let mut report = CompileReport::new();
        for index in GlyphIndex::all() {
            let outcome = self.compile_index(index)?;
            report.record(index, outcome);
        }

        Ok(report)
    }

    pub fn compile_index(&self, index: GlyphIndex) -> Result<GlyphOutcome> {
        let base_dir = self.config.base_dir();
        let source = index.source_path(base_dir);
        if !source.is_file() {
            trace!("No source image for glyph {}", index);
            return Ok(GlyphOutcome::Skipped(SkipReason::Missing));
        }

        let output = index.output_path(base_dir);
        info!("Compiling character file: {}", output.display());

        let dimensions = read_dimensions(&source)?;
        if dimensions != (GLYPH_WIDTH, GLYPH_HEIGHT) {
            return self.reject(index, dimensions);
        }

        let image = load_luma(&source)?;
        let glyph = match PackedGlyph::pack(&image, self.config.threshold) {
            Some(glyph) => glyph,
            None => return self.reject(index, image.dimensions()),
        };
        debug!("Glyph {} packed as {:016x}\n{}", index, glyph.to_u64(), glyph);

        fs::write(&output, glyph.as_bytes()).map_err(|source| Error::Write {
            path: output.clone(),
            source,
        })?;

        Ok(GlyphOutcome::Compiled(glyph))
    }

    fn reject(&self, index: GlyphIndex, (width, height): (u32, u32)) -> Result<GlyphOutcome> {
        let mismatch = Error::DimensionMismatch {
            index,
            width,
            height,
        };

        match self.config.policy {
            DimensionPolicy::Strict => {
                error!("{}", mismatch);
                Err(mismatch)
            }
            DimensionPolicy::Lenient => {
                warn!("{}, skipping", mismatch);
                Ok(GlyphOutcome::Skipped(SkipReason::DimensionMismatch {
                    width,
                    height,
                }))
            }
        }
    }
}

/// Compiles `base_dir` with the default configuration.
pub fn compile(base_dir: impl Into<PathBuf>) -> Result<CompileReport> {
    GlyphCompiler::new(CompileConfig::new(base_dir)).compile()
}

fn open_reader(path: &Path) -> Result<ImageReader<BufReader<File>>> {
    ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })
}

// Only parses the header, so oversized sources are never fully decoded.
fn read_dimensions(path: &Path) -> Result<(u32, u32)> {
    open_reader(path)?
        .into_dimensions()
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })
}

fn load_luma(path: &Path) -> Result<GrayImage> {
    let image = open_reader(path)?
        .decode()
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(to_luma(image))
}

fn to_luma(image: DynamicImage) -> GrayImage {
    match image {
        DynamicImage::ImageLuma8(gray) => gray,
        DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_) => image.to_luma8(),
        _ => {
            let rgb = image.to_rgb8();
            GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
                let [r, g, b] = rgb.get_pixel(x, y).0;
                Luma([rec601_luma(r, g, b)])
            })
        }
    }
}

// ITU-R 601-2 weights in 16.16 fixed point
fn rec601_luma(r: u8, g: u8, b: u8) -> u8 {
    let luma = u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000;
    (luma >> 16) as u8
}
