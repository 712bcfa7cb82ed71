//! Skatepath Headless Validation Harness
//!
//! Exercises the catalog, characteristics engine, and selection contract
//! without a UI. Runs entirely in-process — no rendering, no media player.
//!
//! Usage:
//!   cargo run -p skatepath-harness
//!   cargo run -p skatepath-harness -- --verbose
//!   cargo run -p skatepath-harness -- --json    (dump the catalog and exit)

use serde::Serialize;

use skatepath_core::AppState;
use skatepath_logic::characteristics::{compute, Perk, PerformanceProfile};
use skatepath_logic::parts::{Bearing, Deck, PartCombination, Suspension, Wheel};
use skatepath_logic::registry::BuildRegistry;
use skatepath_logic::roadmap;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    if std::env::args().any(|a| a == "--json") {
        dump_catalog_json();
        return;
    }

    println!("=== Skatepath Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Full combination domain sweep
    results.extend(validate_combination_domain(verbose));

    // 2. Perk predicate ordering
    results.extend(validate_perk_ordering(verbose));

    // 3. Registry consistency
    results.extend(validate_registry(verbose));

    // 4. Road map tables
    results.extend(validate_roadmap(verbose));

    // 5. Selection persistence round trip
    results.extend(validate_selection_roundtrip(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn all_combinations() -> Vec<PartCombination> {
    let mut combos = Vec::new();
    for &wheel in Wheel::all() {
        for &bearing in Bearing::all() {
            for &front_suspension in Suspension::all() {
                for &back_suspension in Suspension::all() {
                    for &deck in Deck::all() {
                        combos.push(PartCombination {
                            wheel,
                            bearing,
                            front_suspension,
                            back_suspension,
                            deck,
                        });
                    }
                }
            }
        }
    }
    combos
}

// ── 1. Combination domain ───────────────────────────────────────────────

fn validate_combination_domain(verbose: bool) -> Vec<TestResult> {
    println!("--- Combination Domain ---");
    let mut results = Vec::new();

    let combos = all_combinations();
    let expected = Wheel::all().len()
        * Bearing::all().len()
        * Suspension::all().len()
        * Suspension::all().len()
        * Deck::all().len();
    results.push(TestResult {
        name: "domain_size".into(),
        passed: combos.len() == expected,
        detail: format!("{} combinations (expected {})", combos.len(), expected),
    });

    let mut bad_values = 0usize;
    let mut dup_perks = 0usize;
    for combo in &combos {
        let p = compute(*combo);
        for v in [p.speed, p.turn_rate, p.acceleration, p.roll_loss] {
            if !v.is_finite() || v < 0.0 {
                bad_values += 1;
            }
        }
        for (i, perk) in p.perks.iter().enumerate() {
            if p.perks[i + 1..].contains(perk) {
                dup_perks += 1;
            }
        }
        if verbose {
            println!(
                "  {:?}/{:?}/{:?}+{:?}/{:?}: speed {:.1}, turn {:.1}, perks {}",
                combo.wheel,
                combo.bearing,
                combo.front_suspension,
                combo.back_suspension,
                combo.deck,
                p.speed,
                p.turn_rate,
                p.perks.len()
            );
        }
    }
    results.push(TestResult {
        name: "all_profiles_finite_non_negative".into(),
        passed: bad_values == 0,
        detail: format!("{} bad numeric fields", bad_values),
    });
    results.push(TestResult {
        name: "no_duplicate_perks".into(),
        passed: dup_perks == 0,
        detail: format!("{} duplicated perks", dup_perks),
    });

    let speeds: Vec<f32> = combos.iter().map(|c| compute(*c).speed).collect();
    let min = speeds.iter().cloned().fold(f32::INFINITY, f32::min);
    let max = speeds.iter().cloned().fold(0.0f32, f32::max);
    results.push(TestResult {
        name: "speed_range_sane".into(),
        passed: min >= 12.0 && max <= 12.0 * 1.6 * 1.65 + 0.001,
        detail: format!("speed range {:.2}–{:.2}", min, max),
    });

    results
}

// ── 2. Perk ordering ────────────────────────────────────────────────────

fn validate_perk_ordering(_verbose: bool) -> Vec<TestResult> {
    println!("--- Perk Ordering ---");
    let mut results = Vec::new();

    let trick_surf = compute(PartCombination {
        wheel: Wheel::Rigid,
        bearing: Bearing::Abec5,
        front_suspension: Suspension::Surf,
        back_suspension: Suspension::Classic,
        deck: Deck::Classic,
    });
    let expected = vec![
        Perk::TrickExecution,
        Perk::NoPushAcceleration,
        Perk::ExtremeCornering,
    ];
    results.push(TestResult {
        name: "classic_deck_surf_front_order".into(),
        passed: trick_surf.perks == expected,
        detail: format!("{:?}", trick_surf.perks),
    });

    let descent = compute(PartCombination {
        wheel: Wheel::LongBoard,
        bearing: Bearing::Abec9,
        front_suspension: Suspension::LongBoard,
        back_suspension: Suspension::LongBoard,
        deck: Deck::LongBoard,
    });
    results.push(TestResult {
        name: "full_longboard_descent_only".into(),
        passed: descent.perks == vec![Perk::HighSpeedDescent],
        detail: format!("{:?}", descent.perks),
    });

    let mixed = compute(PartCombination {
        wheel: Wheel::LongBoard,
        bearing: Bearing::Abec9,
        front_suspension: Suspension::LongBoard,
        back_suspension: Suspension::Classic,
        deck: Deck::LongBoard,
    });
    results.push(TestResult {
        name: "mixed_trucks_no_descent".into(),
        passed: mixed.perks.is_empty(),
        detail: format!("{:?}", mixed.perks),
    });

    results
}

// ── 3. Registry ─────────────────────────────────────────────────────────

fn validate_registry(verbose: bool) -> Vec<TestResult> {
    println!("--- Build Registry ---");
    let mut results = Vec::new();

    let registry = match BuildRegistry::standard() {
        Ok(r) => r,
        Err(e) => {
            results.push(TestResult {
                name: "registry_construction".into(),
                passed: false,
                detail: format!("{}", e),
            });
            return results;
        }
    };

    results.push(TestResult {
        name: "registry_size".into(),
        passed: registry.len() == 4,
        detail: format!("{} templates", registry.len()),
    });

    let order: Vec<&str> = registry.iter().map(|t| t.name).collect();
    results.push(TestResult {
        name: "registry_display_order".into(),
        passed: order == ["Cruiser", "Trick Skateboard", "Longboard", "Surfskate"],
        detail: order.join(", "),
    });

    results.push(TestResult {
        name: "registry_miss_is_absent".into(),
        passed: registry.find_by_name("Hoverboard").is_none(),
        detail: "unknown name yields None".into(),
    });

    let missing_maps: Vec<&str> = registry
        .iter()
        .filter(|t| roadmap::checklist_for(t.name).is_empty())
        .map(|t| t.name)
        .collect();
    results.push(TestResult {
        name: "every_build_has_roadmap".into(),
        passed: missing_maps.is_empty(),
        detail: if missing_maps.is_empty() {
            "all templates mapped".into()
        } else {
            format!("missing: {}", missing_maps.join(", "))
        },
    });

    if verbose {
        for t in registry.iter() {
            let p = compute(t.combination);
            println!(
                "  {} [{} / {}]: speed {:.1}, turn {:.1}, accel {:.1}, loss {:.1}",
                t.name,
                t.difficulty.label(),
                t.rarity.label(),
                p.speed,
                p.turn_rate,
                p.acceleration,
                p.roll_loss
            );
        }
    }

    results
}

// ── 4. Road map ─────────────────────────────────────────────────────────

fn validate_roadmap(_verbose: bool) -> Vec<TestResult> {
    println!("--- Road Map ---");
    let mut results = Vec::new();

    results.push(TestResult {
        name: "unknown_name_empty_checklist".into(),
        passed: roadmap::checklist_for("Hoverboard").is_empty(),
        detail: "absent key yields empty slice".into(),
    });

    let trick = roadmap::checklist_for("Trick Skateboard");
    results.push(TestResult {
        name: "trick_board_checklist_length".into(),
        passed: trick.len() == 11,
        detail: format!("{} milestones", trick.len()),
    });

    let all_labeled = ["Cruiser", "Trick Skateboard", "Longboard", "Surfskate"]
        .iter()
        .flat_map(|n| roadmap::checklist_for(n))
        .all(|m| !m.label.is_empty() && !m.illustration.is_empty());
    results.push(TestResult {
        name: "milestones_fully_labeled".into(),
        passed: all_labeled,
        detail: "labels and illustrations present".into(),
    });

    results.push(TestResult {
        name: "inactive_without_selection".into(),
        passed: !roadmap::is_active("Cruiser", None),
        detail: "unset selection activates nothing".into(),
    });

    results
}

// ── 5. Selection persistence ────────────────────────────────────────────

fn validate_selection_roundtrip(_verbose: bool) -> Vec<TestResult> {
    println!("--- Selection Persistence ---");
    let mut results = Vec::new();

    let data_dir =
        std::env::temp_dir().join(format!("skatepath-harness-{}", std::process::id()));
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        results.push(TestResult {
            name: "round_trip_setup".into(),
            passed: false,
            detail: format!("cannot create temp dir: {}", e),
        });
        return results;
    }

    let outcome = (|| -> Result<Vec<TestResult>, Box<dyn std::error::Error>> {
        let mut checks = Vec::new();

        let mut state = AppState::open(&data_dir)?;
        checks.push(TestResult {
            name: "cold_start_unset".into(),
            passed: state.selection.current().is_none(),
            detail: "no selection before first pick".into(),
        });

        let longboard = *state
            .registry
            .find_by_name("Longboard")
            .ok_or("Longboard missing from registry")?;
        state.selection.select(&longboard)?;
        drop(state);

        let state = AppState::open(&data_dir)?;
        checks.push(TestResult {
            name: "round_trip_restore".into(),
            passed: state.selection.current().map(|t| t.name) == Some("Longboard"),
            detail: format!("restored {:?}", state.selection.current().map(|t| t.name)),
        });

        checks.push(TestResult {
            name: "restored_selection_activates_roadmap".into(),
            passed: roadmap::is_active("Longboard", state.selection.current())
                && !roadmap::is_active("Cruiser", state.selection.current()),
            detail: "only the selected build's checklist is active".into(),
        });

        let mut state = state;
        state.selection.clear()?;
        drop(state);

        let state = AppState::open(&data_dir)?;
        checks.push(TestResult {
            name: "clear_survives_restart".into(),
            passed: state.selection.current().is_none(),
            detail: "cleared selection stays unset".into(),
        });

        Ok(checks)
    })();

    match outcome {
        Ok(checks) => results.extend(checks),
        Err(e) => results.push(TestResult {
            name: "round_trip".into(),
            passed: false,
            detail: format!("{}", e),
        }),
    }

    let _ = std::fs::remove_dir_all(&data_dir);
    results
}

// ── Catalog dump ────────────────────────────────────────────────────────

#[derive(Serialize)]
struct CatalogEntry {
    name: &'static str,
    difficulty: &'static str,
    rarity: &'static str,
    profile: PerformanceProfile,
    perk_labels: Vec<&'static str>,
}

fn dump_catalog_json() {
    let registry = match BuildRegistry::standard() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("registry error: {}", e);
            std::process::exit(1);
        }
    };

    let entries: Vec<CatalogEntry> = registry
        .iter()
        .map(|t| {
            let profile = compute(t.combination);
            let perk_labels = profile.perks.iter().map(|p| p.label()).collect();
            CatalogEntry {
                name: t.name,
                difficulty: t.difficulty.label(),
                rarity: t.rarity.label(),
                profile,
                perk_labels,
            }
        })
        .collect();

    match serde_json::to_string_pretty(&entries) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("serialization error: {}", e);
            std::process::exit(1);
        }
    }
}
