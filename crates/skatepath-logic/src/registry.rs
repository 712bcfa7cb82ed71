//! Fixed catalog of build templates.
//!
//! The registry is populated once at startup from a constant table and never
//! mutated. Template order is display order and stable across runs. Template
//! names are the join key for both selection persistence and road map
//! lookups, so uniqueness is enforced at construction instead of silently
//! resolving to the first match.

use serde::Serialize;

use crate::parts::{Bearing, Deck, PartCombination, Suspension, Wheel};

/// Difficulty label shown on the build card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    ExtremelyHard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::ExtremelyHard => "Extremely hard",
        }
    }
}

/// Rarity label, drives the card's name color in the UI collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

/// One catalog entry: display metadata plus its fixed part combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BuildTemplate {
    /// Unique, stable; used as the persistence key and road map join key.
    pub name: &'static str,
    pub description: &'static str,
    pub image_ref: &'static str,
    pub difficulty: Difficulty,
    pub rarity: Rarity,
    pub combination: PartCombination,
}

/// Error raised when the catalog table violates its invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two templates share a name — would make persistence ambiguous.
    DuplicateName(&'static str),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::DuplicateName(name) => {
                write!(f, "duplicate build template name: {}", name)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// The ordered, immutable list of build templates.
#[derive(Debug, Clone, Serialize)]
pub struct BuildRegistry {
    templates: Vec<BuildTemplate>,
}

impl BuildRegistry {
    /// Build a registry from a template table, rejecting duplicate names.
    pub fn new(templates: Vec<BuildTemplate>) -> Result<Self, RegistryError> {
        for (i, template) in templates.iter().enumerate() {
            if templates[i + 1..].iter().any(|t| t.name == template.name) {
                return Err(RegistryError::DuplicateName(template.name));
            }
        }
        Ok(Self { templates })
    }

    /// The standard catalog, in display order.
    pub fn standard() -> Result<Self, RegistryError> {
        Self::new(vec![
            BuildTemplate {
                name: "Cruiser",
                description: "A forgiving everyday board. Soft wheels soak up \
                              rough pavement, and the short deck keeps it \
                              nimble around town.",
                image_ref: "img/cruiser",
                difficulty: Difficulty::Easy,
                rarity: Rarity::Rare,
                combination: PartCombination {
                    wheel: Wheel::Soft,
                    bearing: Bearing::Abec7,
                    front_suspension: Suspension::Classic,
                    back_suspension: Suspension::Classic,
                    deck: Deck::Cruiser,
                },
            },
            BuildTemplate {
                name: "Trick Skateboard",
                description: "The classic popsicle shape. Rigid wheels pop \
                              cleanly off ledges; everything about it is \
                              tuned for tricks, not comfort.",
                image_ref: "img/classic",
                difficulty: Difficulty::Hard,
                rarity: Rarity::Common,
                combination: PartCombination {
                    wheel: Wheel::Rigid,
                    bearing: Bearing::Abec7,
                    front_suspension: Suspension::Classic,
                    back_suspension: Suspension::Classic,
                    deck: Deck::Classic,
                },
            },
            BuildTemplate {
                name: "Longboard",
                description: "Long wheelbase, huge soft wheels, top-shelf \
                              bearings. Built to hold speed on open road and \
                              descend safely.",
                image_ref: "img/longboard",
                difficulty: Difficulty::Medium,
                rarity: Rarity::Epic,
                combination: PartCombination {
                    wheel: Wheel::LongBoard,
                    bearing: Bearing::Abec9,
                    front_suspension: Suspension::LongBoard,
                    back_suspension: Suspension::LongBoard,
                    deck: Deck::LongBoard,
                },
            },
            BuildTemplate {
                name: "Surfskate",
                description: "A surf truck up front turns every street into \
                              a wave. Pumps from a standstill and corners \
                              like nothing else on wheels.",
                image_ref: "img/surfskate",
                difficulty: Difficulty::ExtremelyHard,
                rarity: Rarity::Legendary,
                combination: PartCombination {
                    wheel: Wheel::Wide,
                    bearing: Bearing::Abec9,
                    front_suspension: Suspension::Surf,
                    back_suspension: Suspension::LongBoard,
                    deck: Deck::Surf,
                },
            },
        ])
    }

    pub fn find_by_name(&self, name: &str) -> Option<&BuildTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuildTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
