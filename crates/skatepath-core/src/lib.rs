//! Application state for Skatepath.
//!
//! The host process (mobile shell, native harness) owns exactly one
//! [`AppState`] for its lifetime: the immutable build registry plus the
//! selection store with its persisted slot. All state is explicit — there
//! are no globals, and hosts embedding the state in a concurrent runtime
//! wrap it in one mutex.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`selection`] | The single current-build selection and its lifecycle |
//! | [`slot`] | File mechanics of the one persisted selection slot |
//! | [`first_run`] | Welcome-dialog marker, separate from the slot |

pub mod first_run;
pub mod selection;
pub mod slot;

use std::path::Path;

use skatepath_logic::registry::{BuildRegistry, RegistryError};

use crate::selection::SelectionStore;
use crate::slot::SelectionSlot;

/// Process-lifetime application state.
#[derive(Debug)]
pub struct AppState {
    pub registry: BuildRegistry,
    pub selection: SelectionStore,
}

impl AppState {
    /// Build the standard registry and restore any persisted selection from
    /// `data_dir`. Registry construction fails only on a catalog invariant
    /// violation; a missing or stale persisted selection is normal and
    /// leaves the selection unset.
    pub fn open(data_dir: &Path) -> Result<Self, RegistryError> {
        let registry = BuildRegistry::standard()?;
        let mut selection = SelectionStore::new(SelectionSlot::in_dir(data_dir));
        match selection.restore(&registry) {
            Some(template) => log::info!("restored selected build '{}'", template.name),
            None => log::info!("no selected build to restore"),
        }
        Ok(Self {
            registry,
            selection,
        })
    }
}
