//! Cleansing pipeline — structure, then slang, then abuse.

use tc_core::{CsvBatch, InvalidColumnError};

use crate::lexicon::{AbuseSet, Lexicon, SlangMap};
use crate::{stage1_structure, stage2_slang, stage3_abuse};

/// Cleaned text with per-call statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanResult {
    pub output: String,
    pub original_len: usize,
    pub cleaned_len: usize,
    pub slang_replacements: usize,
    pub masked: usize,
}

impl CleanResult {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.cleaned_len as f64 / self.original_len as f64
    }
}

/// Stateless text cleanser over an immutable lexicon snapshot.
///
/// Holds no interior mutability; share it behind an `Arc` across handlers.
#[derive(Debug, Clone, Default)]
pub struct Cleanser {
    slang: SlangMap,
    abuse: AbuseSet,
}

impl Cleanser {
    pub fn new(slang: SlangMap, abuse: AbuseSet) -> Self {
        Self { slang, abuse }
    }

    pub fn from_lexicon(lexicon: Lexicon) -> Self {
        Self::new(lexicon.slang, lexicon.abuse)
    }

    pub fn slang(&self) -> &SlangMap {
        &self.slang
    }

    pub fn abuse(&self) -> &AbuseSet {
        &self.abuse
    }

    /// Clean one text unit.
    pub fn clean(&self, text: &str) -> String {
        let result = stage1_structure::clean_structure(text);
        let result = stage2_slang::normalize_slang(&result, &self.slang);
        stage3_abuse::mask_abuse(&result, &self.abuse)
    }

    /// Clean one text unit, reporting what each lexical stage did.
    pub fn clean_detailed(&self, text: &str) -> CleanResult {
        let structured = stage1_structure::clean_structure(text);
        let (normalized, slang_replacements) = stage2_slang::normalize_slang_counted(&structured, &self.slang);
        let (output, masked) = stage3_abuse::mask_abuse_counted(&normalized, &self.abuse);
        tracing::trace!(slang_replacements, masked, "text cleaned");
        CleanResult {
            original_len: text.len(),
            cleaned_len: output.len(),
            output,
            slang_replacements,
            masked,
        }
    }

    /// Clean a bare column of values, order preserved.
    pub fn clean_values<S: AsRef<str>>(&self, values: &[S]) -> Vec<String> {
        values.iter().map(|v| self.clean(v.as_ref())).collect()
    }

    /// Return a copy of `batch` with `column` cleaned and every other column untouched.
    pub fn clean_column(&self, batch: &CsvBatch, column: &str) -> Result<CsvBatch, InvalidColumnError> {
        let mut out = batch.clone();
        self.clean_column_in_place(&mut out, column)?;
        Ok(out)
    }

    pub fn clean_column_in_place(&self, batch: &mut CsvBatch, column: &str) -> Result<(), InvalidColumnError> {
        batch.map_column(column, |v| self.clean(v))?;
        tracing::debug!(rows = batch.len(), column, "batch column cleaned");
        Ok(())
    }
}
