//! # Session — Action Dispatch at the Front-End Boundary
//!
//! Owns the options record and the store. `commit` runs exactly one call
//! sequence for the selected action:
//!
//! - **Save**: generate, then persist.
//! - **NoSave**: generate only. Never touches the filesystem.
//! - **Show**: load the saved batch.
//! - **Delete**: remove the saved batch.
//!
//! Failures a user can cause (nothing saved yet, unreadable file, disk
//! error) come back as an `Outcome` whose status explains what happened.
//! Rule-table failures are returned as `Err`.

use crate::draw::{generate_batch, DrawBatch};
use crate::error::{LotteryError, Result};
use crate::options::{Action, OptionsState};
use crate::store::Store;
use rand::Rng;
use tracing::warn;

/// Result of one committed action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Short message for the status line.
    pub status: String,
    /// Batch to display, if the action produced one.
    pub batch: Option<DrawBatch>,
}

impl Outcome {
    fn status(status: String) -> Self {
        Outcome {
            status,
            batch: None,
        }
    }
}

pub struct Session {
    pub options: OptionsState,
    store: Store,
}

impl Session {
    pub fn new(options: OptionsState, store: Store) -> Self {
        Session { options, store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn commit<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Outcome> {
        let result = match self.options.action() {
            Action::Save | Action::NoSave => self.generate(rng),
            Action::Show => self.show(),
            Action::Delete => self.delete(),
        };

        match result {
            Err(e) if e.is_table_error() => Err(e),
            Err(e) => {
                warn!(action = %self.options.action(), error = %e, "action failed");
                Ok(Outcome::status(self.failure_status(&e)))
            }
            ok => ok,
        }
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Outcome> {
        let format = self.options.format();
        let batch = generate_batch(format, self.options.line_count(), rng)?;
        let count = batch.line_count();

        let (batch, negation) = if self.options.action() == Action::Save {
            (self.store.save(format, batch)?, "")
        } else {
            (batch, " not")
        };

        Ok(Outcome {
            status: format!(
                "The numbers have{} been saved and {} lines were generated",
                negation, count
            ),
            batch: Some(batch),
        })
    }

    fn show(&self) -> Result<Outcome> {
        let record = self.store.load(self.options.format())?;
        let batch = DrawBatch::retrieved(record);
        Ok(Outcome {
            status: format!(
                "Showing {} saved lines for {}",
                batch.line_count(),
                batch.format_name
            ),
            batch: Some(batch),
        })
    }

    fn delete(&self) -> Result<Outcome> {
        let format = self.options.format();
        let deleted = self.store.delete(format)?;
        Ok(Outcome::status(format!(
            "File: <{}> was {}",
            self.store.path_for(format).display(),
            if deleted { "deleted" } else { "not found" }
        )))
    }

    fn failure_status(&self, e: &LotteryError) -> String {
        let path = self.store.path_for(self.options.format());
        match (self.options.action(), e) {
            (_, LotteryError::NotFound(_)) => e.to_string(),
            (Action::Save, _) => format!("Unable to save <{}>: {}", path.display(), e),
            (Action::Delete, _) => format!("Unable to delete <{}>: {}", path.display(), e),
            _ => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::LotteryFormat;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(
        dir: &tempfile::TempDir,
        format: LotteryFormat,
        lines: u32,
        action: Action,
    ) -> Session {
        let options = OptionsState::new(format, lines, action).unwrap();
        Session::new(options, Store::new(dir.path().join("lottery-db")))
    }

    #[test]
    fn save_then_show_reproduces_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(2024);

        let mut s = session(&dir, LotteryFormat::EuroMillions, 2, Action::Save);
        let saved = s.commit(&mut rng).unwrap();
        assert_eq!(
            saved.status,
            "The numbers have been saved and 2 lines were generated"
        );
        let saved_batch = saved.batch.unwrap();
        assert!(saved_batch.was_saved);
        assert!(s.store().exists(LotteryFormat::EuroMillions));

        s.options.set_action(Action::Show);
        let shown = s.commit(&mut rng).unwrap();
        assert_eq!(shown.status, "Showing 2 saved lines for EUROMILLIONS");
        let shown_batch = shown.batch.unwrap();
        assert!(shown_batch.was_retrieved);
        assert!(!shown_batch.was_saved);
        assert_eq!(shown_batch.lines, saved_batch.lines);
        assert_eq!(shown_batch.created_at, saved_batch.created_at);
    }

    #[test]
    fn no_save_never_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let s = session(&dir, LotteryFormat::Lotto, 3, Action::NoSave);
        let out = s.commit(&mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(
            out.status,
            "The numbers have not been saved and 3 lines were generated"
        );
        let batch = out.batch.unwrap();
        assert!(batch.lines.iter().all(|l| l.extra.is_empty()));
        assert!(!s.store().base_dir().exists());
    }

    #[test]
    fn show_missing_reports_status() {
        let dir = tempfile::tempdir().unwrap();
        let s = session(&dir, LotteryFormat::SetForLife, 1, Action::Show);
        let out = s.commit(&mut StdRng::seed_from_u64(1)).unwrap();
        assert!(out.batch.is_none());
        assert!(out.status.starts_with("File <"));
        assert!(out.status.ends_with("SETFORLIFE.db> is missing"));
    }

    #[test]
    fn delete_reports_deleted_then_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let mut s = session(&dir, LotteryFormat::Thunderball, 1, Action::Save);
        s.commit(&mut rng).unwrap();

        s.options.set_action(Action::Delete);
        let first = s.commit(&mut rng).unwrap();
        assert!(first.status.ends_with("THUNDERBALL.db> was deleted"));
        let second = s.commit(&mut rng).unwrap();
        assert!(second.status.ends_with("THUNDERBALL.db> was not found"));
    }

    #[test]
    fn save_failure_becomes_status() {
        let dir = tempfile::tempdir().unwrap();
        // A plain file where the store directory should be
        let blocker = dir.path().join("lottery-db");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let s = session(&dir, LotteryFormat::Lotto, 1, Action::Save);
        let out = s.commit(&mut StdRng::seed_from_u64(1)).unwrap();
        assert!(out.batch.is_none());
        assert!(out.status.starts_with("Unable to save <"), "{}", out.status);
    }
}
