use hashbrown::HashMap;

use crate::glyph::{GlyphIndex, PackedGlyph};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    // no source image, the slot is unused
    Missing,
    DimensionMismatch { width: u32, height: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphOutcome {
    Compiled(PackedGlyph),
    Skipped(SkipReason),
}

#[derive(Debug, Default)]
pub struct CompileReport {
    outcomes: HashMap<GlyphIndex, GlyphOutcome>,
}

impl CompileReport {
    pub fn new() -> Self {
        Self {
            outcomes: HashMap::new(),
        }
    }

    pub(crate) fn record(&mut self, index: GlyphIndex, outcome: GlyphOutcome) {
        self.outcomes.insert(index, outcome);
    }

    pub fn get(&self, index: GlyphIndex) -> Option<&GlyphOutcome> {
        self.outcomes.get(&index)
    }

    pub fn compiled(&self) -> Vec<(GlyphIndex, PackedGlyph)> {
        let mut compiled = self
            .outcomes
            .iter()
            .filter_map(|(index, outcome)| match outcome {
                GlyphOutcome::Compiled(glyph) => Some((*index, *glyph)),
                GlyphOutcome::Skipped(_) => None,
            })
            .collect::<Vec<_>>();
        compiled.sort_by_key(|(index, _)| *index);
        compiled
    }

    pub fn skipped(&self) -> Vec<(GlyphIndex, SkipReason)> {
        let mut skipped = self
            .outcomes
            .iter()
            .filter_map(|(index, outcome)| match outcome {
                GlyphOutcome::Skipped(reason) => Some((*index, *reason)),
                GlyphOutcome::Compiled(_) => None,
            })
            .collect::<Vec<_>>();
        skipped.sort_by_key(|(index, _)| *index);
        skipped
    }

    pub fn compiled_count(&self) -> usize {
        self.outcomes
            .values()
            .filter(|outcome| matches!(outcome, GlyphOutcome::Compiled(_)))
            .count()
    }

    /// True when no present image was rejected.
    pub fn is_clean(&self) -> bool {
        !self.outcomes.values().any(|outcome| {
            matches!(
                outcome,
                GlyphOutcome::Skipped(SkipReason::DimensionMismatch { .. })
            )
        })
    }
}
