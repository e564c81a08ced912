//! Plain-text rendering of batches and the rule table.

use crate::draw::{DrawBatch, DrawLine};
use crate::rules::LotteryFormat;
use crate::DATE_FORMAT;
use chrono::{DateTime, Local, Utc};
use std::fmt::Write;

/// `03, 11, 24, 38, 47 - 02, 09`, or just the main group when there are no
/// extra numbers.
pub fn format_line(line: &DrawLine) -> String {
    let main = line.main.join(", ");
    if line.has_extra() {
        format!("{} - {}", main, line.extra.join(", "))
    } else {
        main
    }
}

/// Save time in the user's local zone.
pub fn format_saved_at(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format(DATE_FORMAT).to_string()
}

/// Header, one numbered row per line, and a "Saved on" footer for batches
/// read back from the store.
pub fn render_batch(batch: &DrawBatch) -> String {
    let action = if batch.was_retrieved {
        "Stored"
    } else {
        "Generated"
    };
    let mut out = format!("{} {} Lottery numbers:\n", action, batch.format_name);
    for (i, line) in batch.lines.iter().enumerate() {
        let _ = writeln!(out, "Line {}: {}", i + 1, format_line(line));
    }
    if batch.was_retrieved {
        if let Some(at) = &batch.created_at {
            let _ = writeln!(out, "Saved on {}", format_saved_at(at));
        }
    }
    out
}

/// The built-in rule table, one format per row.
pub fn render_rules() -> String {
    let mut out = format!("{:<24}{:>6}{:>6}{:>8}\n", "FORMAT", "MAIN", "FROM", "EXTRA");
    for format in LotteryFormat::ALL {
        let rule = format.rule();
        let extra = match rule.extra_group() {
            Some((max, qty)) => format!("{} of {}", qty, max - crate::RULE_START),
            None => "-".to_string(),
        };
        let _ = writeln!(
            out,
            "{:<24}{:>6}{:>6}{:>8}",
            format.name(),
            rule.main_qty,
            rule.main_max - crate::RULE_START,
            extra
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SavedRecord;
    use chrono::TimeZone;

    fn line(main: &[&str], extra: &[&str]) -> DrawLine {
        DrawLine {
            main: main.iter().map(|s| s.to_string()).collect(),
            extra: extra.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn line_with_extra_group() {
        let l = line(&["03", "11", "24", "38", "47"], &["02", "09"]);
        assert_eq!(format_line(&l), "03, 11, 24, 38, 47 - 02, 09");
    }

    #[test]
    fn line_without_extra_group() {
        let l = line(&["01", "02", "03", "04", "05", "06"], &[]);
        assert_eq!(format_line(&l), "01, 02, 03, 04, 05, 06");
    }

    #[test]
    fn generated_batch_has_no_footer() {
        let batch = DrawBatch::generated(
            LotteryFormat::Lotto,
            vec![line(&["01", "02", "03", "04", "05", "06"], &[])],
        );
        assert_eq!(
            render_batch(&batch),
            "Generated LOTTO Lottery numbers:\nLine 1: 01, 02, 03, 04, 05, 06\n"
        );
    }

    #[test]
    fn retrieved_batch_shows_saved_on() {
        let record = SavedRecord {
            saved_at: Utc.with_ymd_and_hms(2024, 3, 8, 19, 30, 0).unwrap(),
            format_name: "THUNDERBALL".into(),
            lines: vec![
                line(&["04", "12", "20", "31", "39"], &["07"]),
                line(&["01", "02", "03", "04", "05"], &["14"]),
            ],
        };
        let text = render_batch(&DrawBatch::retrieved(record));
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "Stored THUNDERBALL Lottery numbers:");
        assert_eq!(rows[1], "Line 1: 04, 12, 20, 31, 39 - 07");
        assert_eq!(rows[2], "Line 2: 01, 02, 03, 04, 05 - 14");
        assert!(rows[3].starts_with("Saved on "));
        assert!(rows[3].contains("2024"));
    }

    #[test]
    fn rules_table_lists_every_format() {
        let table = render_rules();
        for format in LotteryFormat::ALL {
            assert!(table.contains(format.name()), "missing {}", format);
        }
        assert!(table.contains("2 of 12"));
    }
}
