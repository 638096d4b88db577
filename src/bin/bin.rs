use std::env;

use anyhow::{Context, Result};
use glyph_compiler::{CompileConfig, GlyphCompiler, SkipReason};
use log::info;

// Character sources live in `res/` next to wherever the build runs.
const RESOURCE_DIR: &str = "res";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let base_dir = env::current_dir()
        .context("failed to resolve working directory")?
        .join(RESOURCE_DIR);
    let compiler = GlyphCompiler::new(CompileConfig::new(base_dir));

    let base_dir = compiler.config().base_dir();
    let report = compiler
        .compile()
        .with_context(|| format!("failed to compile characters in {}", base_dir.display()))?;

    let rejected = report
        .skipped()
        .into_iter()
        .filter(|(_, reason)| matches!(reason, SkipReason::DimensionMismatch { .. }))
        .count();
    info!(
        "Compiled {} character file(s), rejected {}",
        report.compiled_count(),
        rejected
    );

    Ok(())
}
