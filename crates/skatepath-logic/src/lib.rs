//! Pure catalog and derivation logic for Skatepath.
//!
//! This crate contains all equipment logic that is independent of any
//! storage, UI framework, or platform. Functions take plain data and return
//! values, making them unit-testable and portable between the mobile shell
//! and native tooling.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`parts`] | Closed part enumerations (wheels, bearings, decks, trucks) |
//! | [`characteristics`] | Combination → performance profile derivation |
//! | [`registry`] | Fixed catalog of purchasable build templates |
//! | [`roadmap`] | Per-build ordered progression checklists |

pub mod characteristics;
pub mod parts;
pub mod registry;
pub mod roadmap;
