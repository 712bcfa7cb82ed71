//! Per-build progression checklists ("road map").
//!
//! Each build template has an ordered milestone sequence, from first steps
//! through its signature techniques. The tables are static and keyed by
//! template name; a name with no entry yields the empty slice, not an error.
//! There is no completion state — every milestone is always presentable, and
//! only the checklist for the currently selected build is interactive.

use serde::Serialize;

use crate::registry::BuildTemplate;

/// One step in a build's progression sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub label: &'static str,
    pub illustration: &'static str,
    /// Lesson video for the media player collaborator, when one exists.
    pub media: Option<&'static str>,
}

const fn milestone(label: &'static str, illustration: &'static str) -> Milestone {
    Milestone {
        label,
        illustration,
        media: None,
    }
}

// Shared basics every rider works through before the build's specials.
const WALK_ONE_FOOT: Milestone =
    milestone("One-foot walking with the board", "img/walk1leg");
const STAND_UP: Milestone = milestone("Standing up on the board", "img/standup");
const RIDE_NO_PUSH: Milestone = milestone("Riding without pushing", "img/move");
const RIDE_WITH_PUSH: Milestone = milestone("Riding with pushes", "img/surge");
const MANEUVERING: Milestone = milestone("Turning and maneuvering", "img/maneuvers");
const FAST_START: Milestone = milestone("Fast rolling start", "img/downskate");
const FAST_STOP: Milestone = milestone("Fast rolling stop", "img/upskate");
const ENDLESS_PRACTICE: Milestone = milestone("ENDLESS PRACTICE", "img/infinity");

static CRUISER: [Milestone; 8] = [
    WALK_ONE_FOOT,
    STAND_UP,
    RIDE_NO_PUSH,
    RIDE_WITH_PUSH,
    MANEUVERING,
    FAST_START,
    FAST_STOP,
    ENDLESS_PRACTICE,
];

static TRICK_SKATEBOARD: [Milestone; 11] = [
    WALK_ONE_FOOT,
    STAND_UP,
    RIDE_NO_PUSH,
    RIDE_WITH_PUSH,
    MANEUVERING,
    FAST_START,
    FAST_STOP,
    milestone("Ollie", "img/ollie"),
    milestone("Kickflip", "img/kickflip"),
    milestone("Grind", "img/grind"),
    ENDLESS_PRACTICE,
];

static LONGBOARD: [Milestone; 9] = [
    WALK_ONE_FOOT,
    STAND_UP,
    RIDE_NO_PUSH,
    RIDE_WITH_PUSH,
    MANEUVERING,
    FAST_START,
    FAST_STOP,
    milestone("Dance steps", "img/dancing"),
    ENDLESS_PRACTICE,
];

static SURFSKATE: [Milestone; 10] = [
    WALK_ONE_FOOT,
    STAND_UP,
    RIDE_NO_PUSH,
    RIDE_WITH_PUSH,
    MANEUVERING,
    FAST_START,
    FAST_STOP,
    milestone("Wide-angle turns", "img/superturn"),
    milestone("Super-maneuverability", "img/megaspeed"),
    ENDLESS_PRACTICE,
];

/// Ordered checklist for a build template name. Unknown names get an empty
/// slice — absence is a first-class outcome.
pub fn checklist_for(name: &str) -> &'static [Milestone] {
    match name {
        "Cruiser" => &CRUISER,
        "Trick Skateboard" => &TRICK_SKATEBOARD,
        "Longboard" => &LONGBOARD,
        "Surfskate" => &SURFSKATE,
        _ => &[],
    }
}

/// Whether the checklist for `name` is the interactive one. True iff a
/// selection exists and its name matches; everything else renders dimmed.
pub fn is_active(name: &str, selection: Option<&BuildTemplate>) -> bool {
    selection.is_some_and(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::BuildRegistry;

    #[test]
    fn test_every_build_has_a_checklist() {
        let registry = BuildRegistry::standard().unwrap();
        for template in registry.iter() {
            assert!(
                !checklist_for(template.name).is_empty(),
                "{} has no road map",
                template.name
            );
        }
    }

    #[test]
    fn test_unknown_name_yields_empty() {
        assert!(checklist_for("Hoverboard").is_empty());
        assert!(checklist_for("").is_empty());
    }

    #[test]
    fn test_shared_basics_come_first() {
        for name in ["Cruiser", "Trick Skateboard", "Longboard", "Surfskate"] {
            let checklist = checklist_for(name);
            assert_eq!(checklist[0], WALK_ONE_FOOT);
            assert_eq!(checklist[6], FAST_STOP);
        }
    }

    #[test]
    fn test_endless_practice_closes_every_list() {
        for name in ["Cruiser", "Trick Skateboard", "Longboard", "Surfskate"] {
            let checklist = checklist_for(name);
            assert_eq!(*checklist.last().unwrap(), ENDLESS_PRACTICE);
        }
    }

    #[test]
    fn test_trick_board_has_trick_milestones() {
        let labels: Vec<&str> = checklist_for("Trick Skateboard")
            .iter()
            .map(|m| m.label)
            .collect();
        let ollie = labels.iter().position(|l| *l == "Ollie").unwrap();
        let kickflip = labels.iter().position(|l| *l == "Kickflip").unwrap();
        let grind = labels.iter().position(|l| *l == "Grind").unwrap();
        assert!(ollie < kickflip && kickflip < grind);
    }

    #[test]
    fn test_is_active_requires_matching_selection() {
        let registry = BuildRegistry::standard().unwrap();
        let cruiser = registry.find_by_name("Cruiser").unwrap();
        assert!(is_active("Cruiser", Some(cruiser)));
        assert!(!is_active("Longboard", Some(cruiser)));
    }

    #[test]
    fn test_never_active_without_selection() {
        for name in ["Cruiser", "Trick Skateboard", "Longboard", "Surfskate", ""] {
            assert!(!is_active(name, None));
        }
    }
}
