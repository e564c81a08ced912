//! # Record — Saved Batch Schema
//!
//! A saved batch is a flat JSON object with fixed short keys:
//!
//! | key      | value                                   |
//! |----------|-----------------------------------------|
//! | `d`      | save timestamp, RFC 3339                |
//! | `t`      | format name                             |
//! | `l`      | line count                              |
//! | `x1<i>`  | main group of line `i`                  |
//! | `x2<i>`  | extra group of line `i` (may be empty)  |
//!
//! `SavedRecord` is the typed view; `to_flat` / `from_flat` convert between
//! the two. A missing `x2<i>` key (or a `null` value) reads back as an empty
//! extra group. A missing `x1<i>` key, or an `l` above `MAX_LINES`, is a
//! schema error.

use crate::draw::{DrawBatch, DrawLine};
use crate::MAX_LINES;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

pub const KEY_DATE: &str = "d";
pub const KEY_TYPE: &str = "t";
pub const KEY_LINES: &str = "l";
pub const KEY_MAIN_PREFIX: &str = "x1";
pub const KEY_EXTRA_PREFIX: &str = "x2";

/// Typed contents of one saved batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedRecord {
    pub saved_at: DateTime<Utc>,
    pub format_name: String,
    pub lines: Vec<DrawLine>,
}

impl SavedRecord {
    pub fn from_batch(batch: &DrawBatch, saved_at: DateTime<Utc>) -> Self {
        SavedRecord {
            saved_at,
            format_name: batch.format_name.clone(),
            lines: batch.lines.clone(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Serialize to the flat key layout.
    pub fn to_flat(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(KEY_DATE.into(), Value::String(self.saved_at.to_rfc3339()));
        map.insert(KEY_TYPE.into(), Value::String(self.format_name.clone()));
        map.insert(KEY_LINES.into(), Value::from(self.lines.len() as u64));
        for (i, line) in self.lines.iter().enumerate() {
            map.insert(main_key(i), group_value(&line.main));
            map.insert(extra_key(i), group_value(&line.extra));
        }
        map
    }

    /// Parse the flat key layout. Errors describe the first offending key.
    pub fn from_flat(map: &Map<String, Value>) -> Result<Self, String> {
        let date = map
            .get(KEY_DATE)
            .and_then(Value::as_str)
            .ok_or_else(|| format!("missing or non-string '{}'", KEY_DATE))?;
        let saved_at = DateTime::parse_from_rfc3339(date)
            .map_err(|e| format!("bad timestamp '{}': {}", date, e))?
            .with_timezone(&Utc);

        let format_name = map
            .get(KEY_TYPE)
            .and_then(Value::as_str)
            .ok_or_else(|| format!("missing or non-string '{}'", KEY_TYPE))?
            .to_string();

        let count = map
            .get(KEY_LINES)
            .and_then(Value::as_u64)
            .ok_or_else(|| format!("missing or non-integer '{}'", KEY_LINES))?;
        if count > u64::from(MAX_LINES) {
            return Err(format!(
                "'{}' is {}, more than {} lines",
                KEY_LINES, count, MAX_LINES
            ));
        }

        let mut lines = Vec::with_capacity(count as usize);
        for i in 0..count as usize {
            let key = main_key(i);
            let main = match map.get(&key) {
                Some(v) => parse_group(&key, v)?,
                None => return Err(format!("missing '{}'", key)),
            };
            let key = extra_key(i);
            let extra = match map.get(&key) {
                Some(v) => parse_group(&key, v)?,
                None => Vec::new(),
            };
            lines.push(DrawLine { main, extra });
        }

        Ok(SavedRecord {
            saved_at,
            format_name,
            lines,
        })
    }
}

fn main_key(i: usize) -> String {
    format!("{}{}", KEY_MAIN_PREFIX, i)
}

fn extra_key(i: usize) -> String {
    format!("{}{}", KEY_EXTRA_PREFIX, i)
}

fn group_value(group: &[String]) -> Value {
    Value::Array(group.iter().cloned().map(Value::String).collect())
}

fn parse_group(key: &str, value: &Value) -> Result<Vec<String>, String> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| format!("non-string entry in '{}'", key))
            })
            .collect(),
        _ => Err(format!("'{}' is not a list", key)),
    }
}
