//! The single "current build" selection and its persistence contract.
//!
//! At most one selection exists per store. Selecting persists the template
//! name synchronously; restoring looks the persisted name up in the registry
//! and degrades every mismatch to "unset". The store itself is
//! single-threaded — a host embedding it in a concurrent environment must
//! guard the whole store with one mutex so a read-modify-persist sequence
//! cannot lose an update.

use skatepath_logic::registry::{BuildRegistry, BuildTemplate};

use crate::slot::{SelectionSlot, SlotError};

/// Owns the in-memory selection plus its persisted mirror.
#[derive(Debug)]
pub struct SelectionStore {
    slot: SelectionSlot,
    current: Option<BuildTemplate>,
}

impl SelectionStore {
    /// A store with no selection; call [`restore`](Self::restore) to pick up
    /// a previously persisted one.
    pub fn new(slot: SelectionSlot) -> Self {
        Self {
            slot,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&BuildTemplate> {
        self.current.as_ref()
    }

    /// Restore the persisted selection by name lookup. A missing slot, an
    /// unreadable file, or a name no longer in the registry all yield the
    /// unset state — never an error.
    pub fn restore(&mut self, registry: &BuildRegistry) -> Option<&BuildTemplate> {
        self.current = self
            .slot
            .read()
            .and_then(|name| registry.find_by_name(&name).copied());
        self.current.as_ref()
    }

    /// Set the selection and persist its name synchronously. On a write
    /// failure the in-memory selection is kept and the error is surfaced as
    /// a warning — persistence failure is non-fatal.
    pub fn select(&mut self, template: &BuildTemplate) -> Result<(), SlotError> {
        self.current = Some(*template);
        if let Err(e) = self.slot.write(template.name) {
            log::warn!(
                "failed to persist selection '{}', keeping it in memory: {}",
                template.name,
                e
            );
            return Err(e);
        }
        Ok(())
    }

    /// Unset the selection and delete the persisted slot. A slot that was
    /// never written is a no-op.
    pub fn clear(&mut self) -> Result<(), SlotError> {
        self.current = None;
        self.slot.remove()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> BuildRegistry {
        BuildRegistry::standard().unwrap()
    }

    #[test]
    fn test_starts_unset() {
        let dir = tempfile::tempdir().unwrap();
        let store = SelectionStore::new(SelectionSlot::in_dir(dir.path()));
        assert!(store.current().is_none());
    }

    #[test]
    fn test_select_then_restore_in_fresh_store() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry();
        let longboard = *registry.find_by_name("Longboard").unwrap();

        let mut store = SelectionStore::new(SelectionSlot::in_dir(dir.path()));
        store.select(&longboard).unwrap();

        // Fresh store over the same data dir, as after a process restart.
        let mut fresh = SelectionStore::new(SelectionSlot::in_dir(dir.path()));
        let restored = fresh.restore(&registry).unwrap();
        assert_eq!(restored.name, "Longboard");
    }

    #[test]
    fn test_restore_stale_name_degrades_to_unset() {
        let dir = tempfile::tempdir().unwrap();
        let slot = SelectionSlot::in_dir(dir.path());
        slot.write("Discontinued Board").unwrap();

        let mut store = SelectionStore::new(slot);
        assert!(store.restore(&registry()).is_none());
        assert!(store.current().is_none());
    }

    #[test]
    fn test_restore_without_persisted_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SelectionStore::new(SelectionSlot::in_dir(dir.path()));
        assert!(store.restore(&registry()).is_none());
    }

    #[test]
    fn test_clear_removes_slot() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry();
        let cruiser = *registry.find_by_name("Cruiser").unwrap();

        let mut store = SelectionStore::new(SelectionSlot::in_dir(dir.path()));
        store.select(&cruiser).unwrap();
        store.clear().unwrap();
        assert!(store.current().is_none());
        assert!(!dir.path().join(crate::slot::SLOT_FILE).exists());
        assert!(store.restore(&registry).is_none());
    }

    #[test]
    fn test_clear_when_never_selected() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SelectionStore::new(SelectionSlot::in_dir(dir.path()));
        store.clear().unwrap();
    }

    #[test]
    fn test_select_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry();
        let surfskate = *registry.find_by_name("Surfskate").unwrap();

        let mut store = SelectionStore::new(SelectionSlot::in_dir(dir.path()));
        store.select(&surfskate).unwrap();
        let first = std::fs::read_to_string(dir.path().join(crate::slot::SLOT_FILE)).unwrap();
        store.select(&surfskate).unwrap();
        let second = std::fs::read_to_string(dir.path().join(crate::slot::SLOT_FILE)).unwrap();
        assert_eq!(first, second);
        assert_eq!(store.current().unwrap().name, "Surfskate");
    }

    #[test]
    fn test_replacing_selection_discards_previous() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry();
        let cruiser = *registry.find_by_name("Cruiser").unwrap();
        let longboard = *registry.find_by_name("Longboard").unwrap();

        let mut store = SelectionStore::new(SelectionSlot::in_dir(dir.path()));
        store.select(&cruiser).unwrap();
        store.select(&longboard).unwrap();
        assert_eq!(store.current().unwrap().name, "Longboard");

        let mut fresh = SelectionStore::new(SelectionSlot::in_dir(dir.path()));
        assert_eq!(fresh.restore(&registry).unwrap().name, "Longboard");
    }

    #[test]
    fn test_write_failure_keeps_memory_selection() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry();
        let cruiser = *registry.find_by_name("Cruiser").unwrap();

        // Slot inside a directory that does not exist, so the write fails.
        let slot = SelectionSlot::in_dir(&dir.path().join("missing"));
        let mut store = SelectionStore::new(slot);
        assert!(store.select(&cruiser).is_err());
        assert_eq!(store.current().unwrap().name, "Cruiser");
    }
}
