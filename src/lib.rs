pub mod config;
pub mod display;
pub mod draw;
pub mod error;
pub mod options;
pub mod record;
pub mod rules;
pub mod session;
pub mod store;

pub use error::{LotteryError, Result};

/// Smallest number any group can contain.
pub const RULE_START: u32 = 1;

/// Fewest lines a single draw may request.
pub const MIN_LINES: u32 = 1;
/// Most lines a single draw may request. Arbitrary but keeps output readable.
pub const MAX_LINES: u32 = 99;
pub const DEFAULT_LINES: u32 = 2;

/// Directory under the user's home where saved batches live.
pub const SAVE_DIR_NAME: &str = "lottery-db";
/// Extension of saved batch files.
pub const SAVE_FILE_EXT: &str = "db";

/// strftime pattern used when showing when a batch was saved.
pub const DATE_FORMAT: &str = "%A %d %B %Y at %X %Z";

/// Format a drawn number the way every group is displayed and stored.
/// Numbers above 99 keep their full width.
pub fn pad_number(n: u32) -> String {
    format!("{:02}", n)
}

/// True when `n` is an acceptable line count.
pub fn line_count_in_range(n: u32) -> bool {
    (MIN_LINES..=MAX_LINES).contains(&n)
}

/// Resolve the user's home directory from `HOME`, falling back to
/// `USERPROFILE` on Windows.
pub fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
