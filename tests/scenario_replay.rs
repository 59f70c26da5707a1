use std::{fs, path::PathBuf};

use lilypad::{
    engine::MoveEngine,
    rng::RngManager,
    scenario::ScenarioLoader,
    session::{MoveError, Outcome, Session},
    Board, Cell, Gender, JumpError,
};
use tempfile::tempdir;

fn scenario_loader() -> ScenarioLoader {
    ScenarioLoader::new(env!("CARGO_MANIFEST_DIR"))
}

fn scenario_path() -> PathBuf {
    PathBuf::from("scenarios/starter_pond.yaml")
}

fn replay(seed: u64) -> (Board, Vec<String>, Vec<Result<Outcome, MoveError>>) {
    let scenario = scenario_loader().load(scenario_path()).expect("scenario parses");
    let mut rng = RngManager::new(seed);
    let board = scenario
        .build_board(&mut rng.stream("setup"))
        .expect("board builds");
    let engine = MoveEngine::new(board, rng.stream("inheritance"));
    let mut session = Session::new(engine, Vec::new());
    let results = scenario.moves.iter().map(|mv| session.play(mv)).collect();
    let (engine, messages) = session.into_parts();
    (engine.into_board(), messages, results)
}

#[test]
fn scenario_loader_reads_fixture() {
    let scenario = scenario_loader().load(scenario_path()).expect("scenario parses");
    assert_eq!(scenario.name, "starter_pond");
    assert_eq!((scenario.height, scenario.width), (5, 5));
    assert_eq!(scenario.frogs.len(), 5);
    assert_eq!(scenario.moves.len(), 5);
}

#[test]
fn fixture_replays_with_one_rejection() {
    let (board, messages, results) = replay(20240611);

    assert!(matches!(results[0], Ok(Outcome::Jumped(_))));
    let Ok(Outcome::Born(first_birth)) = &results[1] else {
        panic!("second move should be a birth: {:?}", results[1]);
    };
    assert_eq!(first_birth.mother, Cell::new(0, 4));
    assert_eq!(first_birth.cell, Cell::new(1, 3));
    assert_eq!(
        results[2],
        Err(MoveError::Jump(JumpError::InvalidDirection {
            from: Cell::new(2, 2),
            to: Cell::new(1, 4)
        }))
    );
    assert!(matches!(results[3], Ok(Outcome::Jumped(_))));
    assert!(matches!(results[4], Ok(Outcome::Born(_))));

    assert_eq!(messages, vec!["Frog can only jump by line (including diagonal)"]);
    assert_eq!(board.frog_count(), 7);
    assert!(board.is_gender(Cell::new(0, 3), Gender::Male));
    assert!(board.is_gender(Cell::new(4, 3), Gender::Male));
    assert!(board.is_empty(Cell::new(0, 0)).unwrap());
}

#[test]
fn replay_is_deterministic_for_a_seed() {
    let (first, _, _) = replay(5);
    let (second, _, _) = replay(5);
    assert_eq!(first, second);
}

#[test]
fn loader_reports_invalid_files() {
    let temp = tempdir().expect("tempdir");
    let loader = ScenarioLoader::new(temp.path());

    fs::write(
        temp.path().join("overlap.yaml"),
        "name: overlap\nheight: 2\nwidth: 2\nfrogs:\n  - { row: 0, col: 0, gender: male }\n  - { row: 0, col: 0, gender: female }\n",
    )
    .expect("write scenario");
    let err = loader.load("overlap.yaml").unwrap_err();
    assert!(format!("{err:#}").contains("more than one frog placed at (0, 0)"));

    let err = loader.load("missing.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read scenario file"));
}

#[test]
fn loader_accepts_minimal_file() {
    let temp = tempdir().expect("tempdir");
    fs::write(temp.path().join("tiny.yaml"), "name: tiny\nheight: 1\nwidth: 3\n")
        .expect("write scenario");

    let scenario = ScenarioLoader::new(temp.path())
        .load("tiny.yaml")
        .expect("scenario parses");
    assert_eq!(scenario.seed, 0);
    assert!(scenario.frogs.is_empty());
    assert!(scenario.moves.is_empty());

    let board = scenario
        .build_board(&mut RngManager::new(0).stream("setup"))
        .expect("board builds");
    assert_eq!(board.frog_count(), 0);
    assert_eq!(board.to_string(), "...\n");
}
