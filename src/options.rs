//! User-selected options: which lottery, how many lines, and what to do.

use crate::error::{LotteryError, Result};
use crate::rules::LotteryFormat;
use crate::{line_count_in_range, DEFAULT_LINES};
use std::fmt;

/// What a commit should do with the current options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// Generate and persist the batch.
    Save,
    /// Generate only.
    #[default]
    NoSave,
    /// Redisplay the last saved batch.
    Show,
    /// Remove the saved batch.
    Delete,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Save => "Save",
            Action::NoSave => "No Save",
            Action::Show => "Show",
            Action::Delete => "Delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Options for the running session. Owned by the front end and handed to
/// the session by reference; there is no process-wide copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsState {
    format: LotteryFormat,
    line_count: u32,
    action: Action,
}

impl Default for OptionsState {
    fn default() -> Self {
        OptionsState {
            format: LotteryFormat::default(),
            line_count: DEFAULT_LINES,
            action: Action::default(),
        }
    }
}

impl OptionsState {
    pub fn new(format: LotteryFormat, line_count: u32, action: Action) -> Result<Self> {
        let mut opts = OptionsState {
            format,
            action,
            ..Default::default()
        };
        opts.set_line_count(line_count)?;
        Ok(opts)
    }

    pub fn format(&self) -> LotteryFormat {
        self.format
    }

    pub fn line_count(&self) -> u32 {
        self.line_count
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn set_format(&mut self, format: LotteryFormat) {
        self.format = format;
    }

    /// Rejects counts outside `[MIN_LINES, MAX_LINES]`, leaving the current
    /// value untouched.
    pub fn set_line_count(&mut self, line_count: u32) -> Result<()> {
        if !line_count_in_range(line_count) {
            return Err(LotteryError::InvalidLineCount(line_count));
        }
        self.line_count = line_count;
        Ok(())
    }

    pub fn set_action(&mut self, action: Action) {
        self.action = action;
    }

    /// One-line summary shown whenever an option changes.
    pub fn status_text(&self) -> String {
        format!(
            "OPTIONS - Action: {}, Type: {}, Lines: {}",
            self.action, self.format, self.line_count
        )
    }
}
