use std::path::{Path, PathBuf};

use crate::glyph::LUMINANCE_THRESHOLD;

/// What to do with a source image that is not 5x8.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DimensionPolicy {
    /// Stop the whole run at the first bad image.
    Strict,
    /// Skip the bad slot and carry on with the rest.
    #[default]
    Lenient,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileConfig {
    pub base_dir: PathBuf,
    pub policy: DimensionPolicy,
    pub threshold: u8,
}

impl CompileConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            policy: DimensionPolicy::default(),
            threshold: LUMINANCE_THRESHOLD,
        }
    }

    pub fn with_policy(mut self, policy: DimensionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
