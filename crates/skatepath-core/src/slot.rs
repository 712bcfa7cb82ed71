//! The persisted selection slot — one named file holding one line of text.
//!
//! Write is create-or-truncate; read returns the trimmed first line and
//! degrades every failure to "absent"; removal of a missing file is a no-op.
//! The slot file name is distinct from the first-run marker so the two
//! mechanisms never collide in the same data directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the selection slot inside the data directory.
pub const SLOT_FILE: &str = "selected_build.txt";

/// Errors that can occur writing to or removing the slot.
#[derive(Debug)]
pub enum SlotError {
    Io(io::Error),
}

impl From<io::Error> for SlotError {
    fn from(e: io::Error) -> Self {
        SlotError::Io(e)
    }
}

impl std::fmt::Display for SlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotError::Io(e) => write!(f, "slot IO error: {}", e),
        }
    }
}

impl std::error::Error for SlotError {}

/// Handle to the single persisted selection slot.
#[derive(Debug, Clone)]
pub struct SelectionSlot {
    path: PathBuf,
}

impl SelectionSlot {
    /// Slot at the conventional file name inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SLOT_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted name. Missing file, unreadable content, or an
    /// empty line all degrade to `None` — read errors never propagate.
    pub fn read(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let name = contents.lines().next()?.trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }

    /// Create-or-truncate, write the name, close.
    pub fn write(&self, name: &str) -> Result<(), SlotError> {
        fs::write(&self.path, name)?;
        Ok(())
    }

    /// Delete the slot. A missing file is a no-op, not an error.
    pub fn remove(&self) -> Result<(), SlotError> {
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

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let slot = SelectionSlot::in_dir(dir.path());
        slot.write("Cruiser").unwrap();
        assert_eq!(slot.read(), Some("Cruiser".to_string()));
    }

    #[test]
    fn test_missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = SelectionSlot::in_dir(dir.path());
        assert_eq!(slot.read(), None);
    }

    #[test]
    fn test_read_first_line_only() {
        let dir = tempfile::tempdir().unwrap();
        let slot = SelectionSlot::in_dir(dir.path());
        std::fs::write(slot.path(), "Longboard\nstray trailing data").unwrap();
        assert_eq!(slot.read(), Some("Longboard".to_string()));
    }

    #[test]
    fn test_blank_content_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = SelectionSlot::in_dir(dir.path());
        std::fs::write(slot.path(), "   \n").unwrap();
        assert_eq!(slot.read(), None);
    }

    #[test]
    fn test_write_truncates_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let slot = SelectionSlot::in_dir(dir.path());
        slot.write("Trick Skateboard").unwrap();
        slot.write("Surfskate").unwrap();
        assert_eq!(slot.read(), Some("Surfskate".to_string()));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let slot = SelectionSlot::in_dir(dir.path());
        slot.remove().unwrap();
        slot.write("Cruiser").unwrap();
        slot.remove().unwrap();
        assert!(!slot.path().exists());
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let slot = SelectionSlot::in_dir(&dir.path().join("no_such_subdir"));
        assert!(slot.write("Cruiser").is_err());
    }
}
