//! # Draw — Unique Number Sampling per Lottery Rule
//!
//! Each line draws its main group (and, when the rule has one, its extra
//! group) uniformly without replacement from `[RULE_START, max)`, sorts the
//! result ascending, and zero-pads every number to two digits.
//!
//! ## Randomness
//!
//! The engine is generic over `rand::Rng`. The binary seeds a `StdRng` from
//! entropy (or `--seed`); tests pass fixed seeds for repeatable output.
//! Sampling goes through `rand::seq::index::sample`, which picks distinct
//! indices without building the full candidate range.
//!
//! ## Validation
//!
//! Range sizes are checked before any number is drawn, so a misconfigured
//! rule fails with `InsufficientRange` instead of panicking inside `rand`.

use crate::error::{LotteryError, Result};
use crate::record::SavedRecord;
use crate::rules::{range_size, LotteryFormat, LotteryRule};
use crate::{pad_number, RULE_START};
use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::debug;

/// One generated line: the main group and the (possibly empty) extra group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DrawLine {
    pub main: Vec<String>,
    pub extra: Vec<String>,
}

impl DrawLine {
    pub fn has_extra(&self) -> bool {
        !self.extra.is_empty()
    }
}

/// A batch of lines, either freshly drawn or read back from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawBatch {
    pub format_name: String,
    /// Set only for batches that were saved or retrieved.
    pub created_at: Option<DateTime<Utc>>,
    pub lines: Vec<DrawLine>,
    pub was_saved: bool,
    pub was_retrieved: bool,
}

impl DrawBatch {
    /// A freshly generated batch that has not been persisted.
    pub fn generated(format: LotteryFormat, lines: Vec<DrawLine>) -> Self {
        DrawBatch {
            format_name: format.name().to_string(),
            created_at: None,
            lines,
            was_saved: false,
            was_retrieved: false,
        }
    }

    /// Mark a generated batch as persisted at `saved_at`.
    pub fn mark_saved(mut self, saved_at: DateTime<Utc>) -> Self {
        self.created_at = Some(saved_at);
        self.was_saved = true;
        self
    }

    /// A batch loaded from the store.
    pub fn retrieved(record: SavedRecord) -> Self {
        DrawBatch {
            format_name: record.format_name,
            created_at: Some(record.saved_at),
            lines: record.lines,
            was_saved: false,
            was_retrieved: true,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Draw `quantity` distinct numbers from `[RULE_START, maximum)`, sorted and
/// padded.
pub fn choose_numbers<R: Rng + ?Sized>(
    rng: &mut R,
    maximum: u32,
    quantity: u32,
) -> Result<Vec<String>> {
    let available = range_size(maximum);
    if quantity > available {
        return Err(LotteryError::InsufficientRange {
            requested: quantity,
            available,
        });
    }

    let mut picked: Vec<u32> =
        rand::seq::index::sample(rng, available as usize, quantity as usize)
            .into_iter()
            .map(|i| RULE_START + i as u32)
            .collect();
    picked.sort_unstable();
    Ok(picked.into_iter().map(pad_number).collect())
}

/// Generate `line_count` independent lines for `rule`.
pub fn generate<R: Rng + ?Sized>(
    rule: &LotteryRule,
    line_count: u32,
    rng: &mut R,
) -> Result<Vec<DrawLine>> {
    rule.validate()?;
    let extra = rule.extra_group();

    let mut lines = Vec::with_capacity(line_count as usize);
    for _ in 0..line_count {
        let main = choose_numbers(rng, rule.main_max, rule.main_qty)?;
        let extra = match extra {
            Some((max, qty)) => choose_numbers(rng, max, qty)?,
            None => Vec::new(),
        };
        lines.push(DrawLine { main, extra });
    }
    debug!(lines = line_count, main_max = rule.main_max, "lines drawn");
    Ok(lines)
}

/// Look up the format's rule and draw an unsaved batch.
pub fn generate_batch<R: Rng + ?Sized>(
    format: LotteryFormat,
    line_count: u32,
    rng: &mut R,
) -> Result<DrawBatch> {
    let lines = generate(&format.rule(), line_count, rng)?;
    Ok(DrawBatch::generated(format, lines))
}
