//! First-run marker — a boolean flag stored as file existence.
//!
//! Entirely separate from the selection slot; it only shares the data
//! directory. The shell uses it to show the welcome dialog exactly once.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::slot::SlotError;

/// File name of the first-run marker inside the data directory.
pub const MARKER_FILE: &str = "first_run.marker";

/// Handle to the first-run marker file.
#[derive(Debug, Clone)]
pub struct FirstRunMarker {
    path: PathBuf,
}

impl FirstRunMarker {
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(MARKER_FILE),
        }
    }

    /// True exactly once per data directory: if the marker is absent it is
    /// created and this returns true; afterwards it returns false. A failed
    /// marker write still reports a first run, so the worst case is showing
    /// the welcome again.
    pub fn check_and_set(&self) -> bool {
        if self.path.exists() {
            return false;
        }
        if let Err(e) = fs::write(&self.path, "") {
            log::warn!("failed to create first-run marker: {}", e);
        }
        true
    }

    /// Forget the first run, so the next check reports one again. A missing
    /// marker is a no-op.
    pub fn reset(&self) -> Result<(), SlotError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::SLOT_FILE;

    #[test]
    fn test_first_check_sets_marker() {
        let dir = tempfile::tempdir().unwrap();
        let marker = FirstRunMarker::in_dir(dir.path());
        assert!(marker.check_and_set());
        assert!(!marker.check_and_set());
    }

    #[test]
    fn test_reset_restores_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let marker = FirstRunMarker::in_dir(dir.path());
        assert!(marker.check_and_set());
        marker.reset().unwrap();
        assert!(marker.check_and_set());
    }

    #[test]
    fn test_reset_without_marker_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        FirstRunMarker::in_dir(dir.path()).reset().unwrap();
    }

    #[test]
    fn test_marker_and_slot_names_distinct() {
        assert_ne!(MARKER_FILE, SLOT_FILE);
    }
}
