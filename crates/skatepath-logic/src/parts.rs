//! Closed part enumerations — every equipment variant the app knows about.
//!
//! Each category (wheel, bearing, deck, suspension) is a small fixed enum.
//! Variants carry immutable attributes through a `spec()` method and expose
//! an `all()` slice for iteration. The characteristics engine keys its
//! factor tables off these variants with exhaustive matches, so adding a
//! variant here forces every derivation rule to account for it.

use serde::{Deserialize, Serialize};

/// Fixed attributes of a wheel variant.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WheelSpec {
    pub name: &'static str,
    /// Urethane hardness descriptor, display only.
    pub rigidity: &'static str,
    pub diameter_mm: f32,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wheel {
    Rigid,
    Soft,
    LongBoard,
    Lego,
    Wide,
}

impl Wheel {
    pub fn spec(self) -> WheelSpec {
        match self {
            Wheel::Rigid => WheelSpec {
                name: "Rigid Wheel",
                rigidity: "Rigid",
                diameter_mm: 54.0,
                icon: "img/wheel",
            },
            Wheel::Soft => WheelSpec {
                name: "Soft Wheel",
                rigidity: "Soft",
                diameter_mm: 60.0,
                icon: "img/wheel",
            },
            Wheel::LongBoard => WheelSpec {
                name: "Longboard Wheel",
                rigidity: "Very soft",
                diameter_mm: 70.0,
                icon: "img/wheel",
            },
            Wheel::Lego => WheelSpec {
                name: "Lego Wheel",
                rigidity: "Specific",
                diameter_mm: 43.0,
                icon: "img/wheel",
            },
            Wheel::Wide => WheelSpec {
                name: "Wide Wheel",
                rigidity: "Soft",
                diameter_mm: 65.0,
                icon: "img/wheel",
            },
        }
    }

    pub fn all() -> &'static [Wheel] {
        &[
            Wheel::Rigid,
            Wheel::Soft,
            Wheel::LongBoard,
            Wheel::Lego,
            Wheel::Wide,
        ]
    }
}

/// Fixed attributes of a bearing variant.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BearingSpec {
    pub name: &'static str,
    /// ABEC-style precision tier, higher is better.
    pub quality_tier: u8,
    pub grade: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bearing {
    Abec1,
    Abec3,
    Abec5,
    Abec7,
    Abec9,
}

impl Bearing {
    pub fn spec(self) -> BearingSpec {
        match self {
            Bearing::Abec1 => BearingSpec {
                name: "ABEC-1 Bearing",
                quality_tier: 1,
                grade: "Awful",
                icon: "img/bearing",
            },
            Bearing::Abec3 => BearingSpec {
                name: "ABEC-3 Bearing",
                quality_tier: 3,
                grade: "Bad",
                icon: "img/bearing",
            },
            Bearing::Abec5 => BearingSpec {
                name: "ABEC-5 Bearing",
                quality_tier: 5,
                grade: "Cheap",
                icon: "img/bearing",
            },
            Bearing::Abec7 => BearingSpec {
                name: "ABEC-7 Bearing",
                quality_tier: 7,
                grade: "Good",
                icon: "img/bearing",
            },
            Bearing::Abec9 => BearingSpec {
                name: "ABEC-9 Bearing",
                quality_tier: 9,
                grade: "Perfect",
                icon: "img/bearing",
            },
        }
    }

    pub fn all() -> &'static [Bearing] {
        &[
            Bearing::Abec1,
            Bearing::Abec3,
            Bearing::Abec5,
            Bearing::Abec7,
            Bearing::Abec9,
        ]
    }
}

/// Fixed attributes of a deck variant.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeckSpec {
    pub name: &'static str,
    pub length_cm: u32,
    pub width_cm: u32,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Deck {
    Cruiser,
    Classic,
    LongBoard,
    Surf,
}

impl Deck {
    pub fn spec(self) -> DeckSpec {
        match self {
            Deck::Cruiser => DeckSpec {
                name: "Cruiser Deck",
                length_cm: 80,
                width_cm: 40,
                icon: "img/deck",
            },
            Deck::Classic => DeckSpec {
                name: "Classic Deck",
                length_cm: 100,
                width_cm: 50,
                icon: "img/deck",
            },
            Deck::LongBoard => DeckSpec {
                name: "Longboard Deck",
                length_cm: 200,
                width_cm: 55,
                icon: "img/deck",
            },
            Deck::Surf => DeckSpec {
                name: "Surf Deck",
                length_cm: 150,
                width_cm: 60,
                icon: "img/deck",
            },
        }
    }

    pub fn all() -> &'static [Deck] {
        &[Deck::Cruiser, Deck::Classic, Deck::LongBoard, Deck::Surf]
    }
}

/// Fixed attributes of a suspension (truck) variant.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SuspensionSpec {
    pub name: &'static str,
    pub mobility: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suspension {
    Classic,
    LongBoard,
    /// Surf trucks are a qualitatively different handling class — the
    /// turn-rate derivation treats them as a deliberate outlier.
    Surf,
}

impl Suspension {
    pub fn spec(self) -> SuspensionSpec {
        match self {
            Suspension::Classic => SuspensionSpec {
                name: "Classic Truck",
                mobility: "Standard",
                icon: "img/suspension",
            },
            Suspension::LongBoard => SuspensionSpec {
                name: "Longboard Truck",
                mobility: "Wide and stable",
                icon: "img/suspension",
            },
            Suspension::Surf => SuspensionSpec {
                name: "Surf Truck",
                mobility: "Unreal mobility",
                icon: "img/suspension",
            },
        }
    }

    pub fn all() -> &'static [Suspension] {
        &[Suspension::Classic, Suspension::LongBoard, Suspension::Surf]
    }
}

/// One part per category — the sole input to the characteristics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartCombination {
    pub wheel: Wheel,
    pub bearing: Bearing,
    pub front_suspension: Suspension,
    pub back_suspension: Suspension,
    pub deck: Deck,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_counts() {
        assert_eq!(Wheel::all().len(), 5);
        assert_eq!(Bearing::all().len(), 5);
        assert_eq!(Deck::all().len(), 4);
        assert_eq!(Suspension::all().len(), 3);
    }

    #[test]
    fn test_all_specs_have_names() {
        for w in Wheel::all() {
            assert!(!w.spec().name.is_empty());
        }
        for b in Bearing::all() {
            assert!(!b.spec().name.is_empty());
        }
        for d in Deck::all() {
            assert!(!d.spec().name.is_empty());
        }
        for s in Suspension::all() {
            assert!(!s.spec().name.is_empty());
        }
    }

    #[test]
    fn test_bearing_tiers_ascending() {
        let tiers: Vec<u8> = Bearing::all().iter().map(|b| b.spec().quality_tier).collect();
        assert_eq!(tiers, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_deck_dimensions_positive() {
        for d in Deck::all() {
            let spec = d.spec();
            assert!(spec.length_cm > 0);
            assert!(spec.width_cm > 0);
        }
    }

    #[test]
    fn test_longboard_deck_is_longest() {
        let max = Deck::all()
            .iter()
            .max_by_key(|d| d.spec().length_cm)
            .copied();
        assert_eq!(max, Some(Deck::LongBoard));
    }
}
