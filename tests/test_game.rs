//! Tests for the level catalog, game sessions and saved progress

use kmap_logic::equation::parse_equation;
use kmap_logic::game::{levels, Feedback, FileStore, GameSession, MemoryStore, ProgressStore};
use kmap_logic::{simplify, VarCount};
use tempfile::TempDir;

#[test]
fn test_catalog_targets_survive_simplification() {
    for vars in [VarCount::Two, VarCount::Three] {
        for level in levels(vars) {
            let target = level.target(vars);
            let solution = simplify(&target);
            assert_eq!(
                solution.expression().to_cells(),
                target,
                "level {:?} simplifies to {}",
                level.equation(),
                solution.expression()
            );
        }
    }
}

#[test]
fn test_parseable_levels_round_trip() {
    for vars in [VarCount::Two, VarCount::Three] {
        for level in levels(vars) {
            let Ok(parsed) = parse_equation(level.equation(), vars) else {
                continue;
            };
            if !parsed.skipped().is_empty() {
                continue;
            }
            let solution = simplify(parsed.cells());
            assert_eq!(solution.expression().to_cells(), level.target(vars));
        }
    }
}

#[test]
fn test_counter_only_increases() {
    let mut game = GameSession::new(VarCount::Two, MemoryStore::new()).unwrap();
    let mut last = 0;

    for _ in 0..5 {
        // A wrong answer first: the counter must not move
        game.toggle(0).unwrap();
        game.toggle(1).unwrap();
        game.toggle(2).unwrap();
        game.toggle(3).unwrap();
        if game.check().unwrap() == Some(Feedback::Wrong) {
            assert_eq!(game.progress().level(VarCount::Two).unwrap(), last);
        }

        game.select_level(game.level_index());
        game.solve().unwrap();
        let now = game.progress().level(VarCount::Two).unwrap();
        assert!(now > last);
        last = now;
        game.next();
    }

    // Replaying level 0 never lowers the counter
    game.select_level(0);
    game.solve().unwrap();
    assert_eq!(game.progress().level(VarCount::Two).unwrap(), last);
}

#[test]
fn test_modes_keep_separate_counters() {
    let mut game = GameSession::new(VarCount::Three, MemoryStore::new()).unwrap();
    game.solve().unwrap();
    game.next();
    game.solve().unwrap();

    let progress = ProgressStore::new(game.into_store());
    assert_eq!(progress.level(VarCount::Three).unwrap(), 2);
    assert_eq!(progress.level(VarCount::Two).unwrap(), 0);
}

#[test]
fn test_progress_persists_in_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kmap_progress");

    {
        let store = FileStore::open(&path).unwrap();
        let mut game = GameSession::new(VarCount::Two, store).unwrap();
        game.solve().unwrap();
        game.next();
        game.solve().unwrap();
    }

    let game = GameSession::new(VarCount::Two, FileStore::open(&path).unwrap()).unwrap();
    assert_eq!(game.level_index(), 2);
    assert_eq!(game.current_level().unwrap().equation(), "F = AB'");

    let mut progress = ProgressStore::new(FileStore::open(&path).unwrap());
    assert!(!progress.tutorial_seen().unwrap());
    progress.mark_tutorial_seen().unwrap();
    let progress = ProgressStore::new(FileStore::open(&path).unwrap());
    assert!(progress.tutorial_seen().unwrap());
}
