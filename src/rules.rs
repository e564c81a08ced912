//! # Rules — Built-in Lottery Format Table
//!
//! Six fixed formats, each mapped to the ranges and quantities of its main
//! group and optional bonus ("extra") group. Upper bounds are exclusive:
//! a main group drawn for `main_max = 51` uses the numbers `1..=50`.
//!
//! The table is a `const` array; nothing mutates it at runtime.

use crate::error::{LotteryError, Result};
use crate::RULE_START;
use std::fmt;
use std::str::FromStr;

/// One of the supported lottery formats, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LotteryFormat {
    Lotto,
    #[default]
    EuroMillions,
    SetForLife,
    LottoHotpicks,
    EuroMillionsHotpicks,
    Thunderball,
}

impl LotteryFormat {
    pub const ALL: [LotteryFormat; 6] = [
        LotteryFormat::Lotto,
        LotteryFormat::EuroMillions,
        LotteryFormat::SetForLife,
        LotteryFormat::LottoHotpicks,
        LotteryFormat::EuroMillionsHotpicks,
        LotteryFormat::Thunderball,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LotteryFormat::Lotto => "LOTTO",
            LotteryFormat::EuroMillions => "EUROMILLIONS",
            LotteryFormat::SetForLife => "SETFORLIFE",
            LotteryFormat::LottoHotpicks => "LOTTO-HOTPICKS",
            LotteryFormat::EuroMillionsHotpicks => "EUROMILLIONS-HOTPICKS",
            LotteryFormat::Thunderball => "THUNDERBALL",
        }
    }

    pub fn rule(&self) -> LotteryRule {
        match self {
            LotteryFormat::Lotto => LotteryRule::main_only(60, 6),
            LotteryFormat::EuroMillions => LotteryRule::with_extra(51, 5, 13, 2),
            LotteryFormat::SetForLife => LotteryRule::with_extra(48, 5, 11, 1),
            LotteryFormat::LottoHotpicks => LotteryRule::main_only(60, 5),
            LotteryFormat::EuroMillionsHotpicks => LotteryRule::main_only(51, 5),
            LotteryFormat::Thunderball => LotteryRule::with_extra(40, 5, 15, 1),
        }
    }
}

impl fmt::Display for LotteryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LotteryFormat {
    type Err = LotteryError;

    /// Case-insensitive; underscores are accepted in place of hyphens.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().replace('_', "-");
        LotteryFormat::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| LotteryError::UnknownFormat(s.to_string()))
    }
}

/// Generation rule for one format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LotteryRule {
    pub main_max: u32,
    pub main_qty: u32,
    pub extra_max: Option<u32>,
    pub extra_qty: Option<u32>,
}

impl LotteryRule {
    const fn main_only(main_max: u32, main_qty: u32) -> Self {
        LotteryRule {
            main_max,
            main_qty,
            extra_max: None,
            extra_qty: None,
        }
    }

    const fn with_extra(main_max: u32, main_qty: u32, extra_max: u32, extra_qty: u32) -> Self {
        LotteryRule {
            main_max,
            main_qty,
            extra_max: Some(extra_max),
            extra_qty: Some(extra_qty),
        }
    }

    /// The extra group as `(max, qty)`, or `None` when the rule draws no
    /// bonus numbers (absent or zero quantity).
    pub fn extra_group(&self) -> Option<(u32, u32)> {
        match (self.extra_max, self.extra_qty) {
            (Some(max), Some(qty)) if qty > 0 => Some((max, qty)),
            _ => None,
        }
    }

    /// Check that both groups can be drawn without replacement.
    pub fn validate(&self) -> Result<()> {
        check_range(self.main_max, self.main_qty)?;
        if let Some(qty) = self.extra_qty.filter(|&q| q > 0) {
            check_range(self.extra_max.unwrap_or(RULE_START), qty)?;
        }
        Ok(())
    }
}

/// Number of integers in `[RULE_START, max)`.
pub fn range_size(max: u32) -> u32 {
    max.saturating_sub(RULE_START)
}

fn check_range(max: u32, qty: u32) -> Result<()> {
    let available = range_size(max);
    if qty > available {
        return Err(LotteryError::InsufficientRange {
            requested: qty,
            available,
        });
    }
    Ok(())
}

/// Look up the rule for a format name.
pub fn lookup(format_name: &str) -> Result<LotteryRule> {
    format_name.parse::<LotteryFormat>().map(|f| f.rule())
}
