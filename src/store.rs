//! # Store — Per-Format Saved Batch Files
//!
//! One file per lottery format at `<base_dir>/<FORMAT>.db`. Saving a format
//! overwrites its previous batch; there is no history.
//!
//! ## Atomic Writes
//!
//! Files are written to a `.tmp` sibling and renamed into place, so a crash
//! mid-write leaves the previous batch intact.
//!
//! ## Integrity
//!
//! The flat record (see `record`) is wrapped in an envelope with a SHA-256
//! checksum of its pretty-printed JSON. On load a mismatch, malformed JSON,
//! schema error, or a record naming another format surfaces as
//! `CorruptRecord`.
//!
//! ## Concurrency
//!
//! None. Single user, single process; two instances saving the same format
//! at once race on the rename and the last one wins.

use crate::draw::DrawBatch;
use crate::error::{LotteryError, Result};
use crate::record::SavedRecord;
use crate::rules::LotteryFormat;
use crate::{home_dir, SAVE_DIR_NAME, SAVE_FILE_EXT};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// On-disk wrapper: the flat record plus the SHA-256 of its pretty JSON.
#[derive(Serialize, Deserialize)]
struct RecordEnvelope {
    checksum: String,
    data: serde_json::Value,
}

/// Lower-case hex SHA-256 of `data`.
fn sha256_hex(data: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Saved-batch store rooted at one directory.
#[derive(Debug, Clone)]
pub struct Store {
    base_dir: PathBuf,
}

impl Store {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Store {
            base_dir: base_dir.into(),
        }
    }

    /// `<home>/lottery-db`, or `None` when no home directory can be found.
    pub fn default_dir() -> Option<PathBuf> {
        home_dir().map(|h| h.join(SAVE_DIR_NAME))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn path_for(&self, format: LotteryFormat) -> PathBuf {
        self.base_dir
            .join(format!("{}.{}", format.name(), SAVE_FILE_EXT))
    }

    pub fn exists(&self, format: LotteryFormat) -> bool {
        self.path_for(format).is_file()
    }

    /// Persist `batch`, replacing any previous batch for its format.
    /// Returns the batch marked as saved with the timestamp that was written.
    pub fn save(&self, format: LotteryFormat, batch: DrawBatch) -> Result<DrawBatch> {
        fs::create_dir_all(&self.base_dir)?;

        let saved_at = Utc::now();
        let record = SavedRecord::from_batch(&batch, saved_at);
        let data = serde_json::Value::Object(record.to_flat());
        let checksum = sha256_hex(&to_pretty(&data)?);
        let json = to_pretty(&RecordEnvelope { checksum, data })?;

        let path = self.path_for(format);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, &json)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        info!(
            format = format.name(),
            lines = record.line_count(),
            path = %path.display(),
            "batch saved"
        );
        Ok(batch.mark_saved(saved_at))
    }

    /// Read back the saved batch for `format`.
    pub fn load(&self, format: LotteryFormat) -> Result<SavedRecord> {
        let path = self.path_for(format);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(LotteryError::NotFound(path))
            }
            Err(e) => return Err(e.into()),
        };

        let corrupt = |reason: String| LotteryError::CorruptRecord {
            path: path.clone(),
            reason,
        };

        let envelope: RecordEnvelope =
            serde_json::from_str(&raw).map_err(|e| corrupt(e.to_string()))?;

        let expected = sha256_hex(&to_pretty(&envelope.data)?);
        if expected != envelope.checksum {
            return Err(corrupt(format!(
                "checksum mismatch (expected {}, got {})",
                &expected[..12],
                envelope.checksum.chars().take(12).collect::<String>()
            )));
        }

        let map = envelope
            .data
            .as_object()
            .ok_or_else(|| corrupt("record body is not an object".into()))?;
        let record = SavedRecord::from_flat(map).map_err(corrupt)?;
        if record.format_name != format.name() {
            return Err(corrupt(format!(
                "record is for {}, not {}",
                record.format_name,
                format.name()
            )));
        }

        debug!(
            format = format.name(),
            lines = record.line_count(),
            "batch loaded"
        );
        Ok(record)
    }

    /// Remove the saved batch for `format`. Returns `false` when there was
    /// nothing to remove.
    pub fn delete(&self, format: LotteryFormat) -> Result<bool> {
        let path = self.path_for(format);
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(format = format.name(), path = %path.display(), "batch deleted");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

fn to_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| LotteryError::Io(e.into()))
}
