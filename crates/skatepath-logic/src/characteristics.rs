//! Combination → performance profile derivation.
//!
//! [`compute`] is a pure, total function over the closed part domain: every
//! combination resolves to finite, non-negative numbers plus an ordered perk
//! list. Factor tables are exhaustive matches, so an unhandled variant is a
//! compile error rather than a silent default.
//!
//! ```
//! use skatepath_logic::characteristics::compute;
//! use skatepath_logic::parts::{Bearing, Deck, PartCombination, Suspension, Wheel};
//!
//! let profile = compute(PartCombination {
//!     wheel: Wheel::Soft,
//!     bearing: Bearing::Abec7,
//!     front_suspension: Suspension::Classic,
//!     back_suspension: Suspension::Classic,
//!     deck: Deck::Cruiser,
//! });
//! assert!(profile.speed > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::parts::{Bearing, Deck, PartCombination, Suspension, Wheel};

/// Base scalar applied to the wheel × bearing speed product.
pub const BASE_SPEED: f32 = 12.0;

/// Turn-rate multiplier granted by surf trucks on the front axle.
pub const SURF_TURN_MULTIPLIER: f32 = 7.0;

/// A qualitative bonus triggered by a combination predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Perk {
    /// Classic deck: jump tricks become executable.
    TrickExecution,
    /// Surf front truck: pumping replaces push-off.
    NoPushAcceleration,
    /// Surf front truck: near-pivot cornering.
    ExtremeCornering,
    /// Full longboard setup: stable descent at speed.
    HighSpeedDescent,
}

impl Perk {
    pub fn label(self) -> &'static str {
        match self {
            Perk::TrickExecution => "Trick execution",
            Perk::NoPushAcceleration => "No-push acceleration",
            Perk::ExtremeCornering => "Extreme cornering",
            Perk::HighSpeedDescent => "High-speed descent",
        }
    }
}

/// Derived performance summary for one combination. A value, never stored —
/// produced fresh on each query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceProfile {
    pub speed: f32,
    pub turn_rate: f32,
    pub acceleration: f32,
    /// Dissipative loss of rolling momentum — higher means the board bleeds
    /// speed faster when coasting.
    pub roll_loss: f32,
    /// Ordered by predicate evaluation; ordering is observable and tested.
    pub perks: Vec<Perk>,
}

fn wheel_speed_factor(wheel: Wheel) -> f32 {
    match wheel {
        Wheel::Rigid => 1.0,
        Wheel::Lego => 1.1,
        Wheel::Wide => 1.2,
        Wheel::Soft => 1.3,
        Wheel::LongBoard => 1.6,
    }
}

fn bearing_speed_factor(bearing: Bearing) -> f32 {
    match bearing {
        Bearing::Abec1 => 1.0,
        Bearing::Abec3 => 1.2,
        Bearing::Abec5 => 1.4,
        Bearing::Abec7 => 1.6,
        Bearing::Abec9 => 1.65,
    }
}

fn deck_turn_factor(deck: Deck) -> f32 {
    match deck {
        Deck::Classic => 1.5,
        Deck::Cruiser => 1.4,
        Deck::Surf => 1.2,
        Deck::LongBoard => 1.0,
    }
}

fn suspension_turn_factor(front: Suspension) -> f32 {
    // Surf trucks are the one outlier class; everything else turns at the
    // deck's native rate.
    match front {
        Suspension::Surf => SURF_TURN_MULTIPLIER,
        Suspension::Classic | Suspension::LongBoard => 1.0,
    }
}

fn deck_accel_factor(deck: Deck) -> f32 {
    match deck {
        Deck::Cruiser => 1.6,
        Deck::Classic => 1.5,
        Deck::LongBoard => 1.0,
        Deck::Surf => 1.0,
    }
}

fn wheel_loss_factor(wheel: Wheel) -> f32 {
    match wheel {
        Wheel::Rigid => 2.0,
        Wheel::Lego => 1.4,
        Wheel::Wide => 1.2,
        Wheel::Soft => 1.1,
        Wheel::LongBoard => 1.0,
    }
}

/// Evaluate the fixed perk predicates in their canonical order.
fn perks_for(combo: PartCombination) -> Vec<Perk> {
    let mut perks = Vec::new();
    if combo.deck == Deck::Classic {
        perks.push(Perk::TrickExecution);
    }
    if combo.front_suspension == Suspension::Surf {
        perks.push(Perk::NoPushAcceleration);
        perks.push(Perk::ExtremeCornering);
    }
    if combo.deck == Deck::LongBoard
        && combo.front_suspension == Suspension::LongBoard
        && combo.back_suspension == Suspension::LongBoard
    {
        perks.push(Perk::HighSpeedDescent);
    }
    perks
}

/// Derive the performance profile for a part combination.
pub fn compute(combo: PartCombination) -> PerformanceProfile {
    PerformanceProfile {
        speed: wheel_speed_factor(combo.wheel) * bearing_speed_factor(combo.bearing) * BASE_SPEED,
        turn_rate: deck_turn_factor(combo.deck) * suspension_turn_factor(combo.front_suspension),
        acceleration: deck_accel_factor(combo.deck),
        roll_loss: wheel_loss_factor(combo.wheel),
        perks: perks_for(combo),
    }
}
