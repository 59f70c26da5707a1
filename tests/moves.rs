use lilypad::{
    engine::{JumpError, MoveEngine, ReproduceError},
    Board, Cell, Frog, Gender, Grid, Height, Occupant, ScriptedPicks, SeededPicker, Weight,
};

const MALE: Frog = Frog::new(Gender::Male, Height::Tall, Weight::Slim);
const FEMALE: Frog = Frog::new(Gender::Female, Height::Short, Weight::Fat);

fn pond(size: usize, frogs: &[(Cell, Frog)]) -> Board {
    let mut board = Board::new(Grid::new(size, size).expect("non-empty pond"));
    for (cell, frog) in frogs {
        board
            .set_occupant(*cell, Occupant::Frog(*frog))
            .expect("frog on grid");
    }
    board
}

fn c(row: usize, col: usize) -> Cell {
    Cell::new(row, col)
}

#[test]
fn male_jumps_three_along_a_row() {
    let mut engine = MoveEngine::new(pond(5, &[(c(0, 0), MALE)]), ScriptedPicks::default());

    let jump = engine.perform_jump(&[c(0, 0), c(0, 3)]).expect("legal jump");

    assert_eq!(jump.frog, MALE);
    assert_eq!(engine.board().occupant_at(c(0, 0)), Ok(Occupant::Empty));
    assert_eq!(engine.board().frog_at(c(0, 3)), Ok(Some(MALE)));
    assert_eq!(engine.board().frog_count(), 1);
}

#[test]
fn female_jumps_two_along_a_diagonal() {
    let mut engine = MoveEngine::new(pond(5, &[(c(2, 2), FEMALE)]), ScriptedPicks::default());

    engine.perform_jump(&[c(2, 2), c(4, 4)]).expect("legal jump");
    assert_eq!(engine.board().frog_at(c(4, 4)), Ok(Some(FEMALE)));
    assert!(engine.board().is_empty(c(2, 2)).unwrap());
}

#[test]
fn female_three_cell_jump_is_refused() {
    let board = pond(6, &[(c(2, 2), FEMALE)]);
    let mut engine = MoveEngine::new(board.clone(), ScriptedPicks::default());

    let err = engine.perform_jump(&[c(2, 2), c(5, 2)]).unwrap_err();
    assert_eq!(
        err,
        JumpError::InvalidJumpDistance {
            gender: Gender::Female,
            required: 2,
            actual: 3
        }
    );
    assert_eq!(engine.board(), &board);
}

#[test]
fn male_two_cell_jump_is_refused() {
    let mut engine = MoveEngine::new(pond(5, &[(c(1, 1), MALE)]), ScriptedPicks::default());

    let err = engine.perform_jump(&[c(1, 1), c(3, 1)]).unwrap_err();
    assert!(matches!(
        err,
        JumpError::InvalidJumpDistance {
            gender: Gender::Male,
            ..
        }
    ));
}

#[test]
fn knights_move_is_off_line() {
    let mut engine = MoveEngine::new(pond(5, &[(c(1, 1), MALE)]), ScriptedPicks::default());

    let err = engine.perform_jump(&[c(1, 1), c(2, 3)]).unwrap_err();
    assert_eq!(
        err,
        JumpError::InvalidDirection {
            from: c(1, 1),
            to: c(2, 3)
        }
    );
}

#[test]
fn reproduction_adds_one_child_next_to_mother() {
    let board = pond(5, &[(c(2, 2), FEMALE), (c(3, 3), MALE)]);
    let mut engine = MoveEngine::new(board, SeededPicker::new(9));

    let birth = engine.perform_reproduce(&[c(3, 3), c(2, 2)]).expect("legal birth");

    let after = engine.board();
    assert_eq!(after.frog_count(), 3);
    assert_eq!(after.frog_at(c(2, 2)), Ok(Some(FEMALE)));
    assert_eq!(after.frog_at(c(3, 3)), Ok(Some(MALE)));
    assert_eq!(birth.cell, c(1, 1));
    assert_eq!(after.frog_at(birth.cell), Ok(Some(birth.child)));
    assert!([FEMALE.weight(), MALE.weight()].contains(&birth.child.weight()));
    assert!([FEMALE.height(), MALE.height()].contains(&birth.child.height()));
}

#[test]
fn same_gender_pair_cannot_reproduce() {
    let other = Frog::new(Gender::Male, Height::Short, Weight::Fat);
    let mut engine = MoveEngine::new(
        pond(5, &[(c(0, 0), MALE), (c(1, 0), other)]),
        ScriptedPicks::default(),
    );

    let err = engine.perform_reproduce(&[c(0, 0), c(1, 0)]).unwrap_err();
    assert_eq!(err, ReproduceError::SameGender { gender: Gender::Male });
    assert_eq!(err.to_string(), "Frogs should have different gender to reproduce");
}

#[test]
fn distant_couple_cannot_reproduce() {
    let mut engine = MoveEngine::new(
        pond(5, &[(c(0, 0), FEMALE), (c(0, 2), MALE)]),
        ScriptedPicks::default(),
    );

    let err = engine.perform_reproduce(&[c(0, 0), c(0, 2)]).unwrap_err();
    assert_eq!(err, ReproduceError::FrogsNotAdjacent { distance: 2 });
}

#[test]
fn crowded_mother_leaves_board_untouched() {
    // Mother in the corner of a 3x3 pond; every on-grid neighbour is taken.
    let mut frogs = vec![(c(0, 0), FEMALE), (c(0, 1), MALE)];
    frogs.extend([(c(1, 0), MALE), (c(1, 1), MALE)]);
    let board = pond(3, &frogs);
    let mut engine = MoveEngine::new(board.clone(), ScriptedPicks::new([0, 1, 0]));

    let err = engine.perform_reproduce(&[c(0, 0), c(0, 1)]).unwrap_err();
    assert_eq!(err, ReproduceError::NoPlacementSpace { mother: c(0, 0) });
    assert_eq!(err.to_string(), "No place to reproduce");
    assert_eq!(engine.board(), &board);
    assert_eq!(engine.board().frog_count(), 4);
}

#[test]
fn child_lands_beside_mother_not_father() {
    // Father's block is wide open, mother's only has the bottom-right corner.
    let board = pond(
        4,
        &[
            (c(0, 0), MALE),
            (c(0, 1), FEMALE),
            (c(0, 2), MALE),
            (c(1, 0), MALE),
            (c(1, 1), MALE),
        ],
    );
    let mut engine = MoveEngine::new(board, ScriptedPicks::default());

    let birth = engine.perform_reproduce(&[c(0, 0), c(0, 1)]).expect("legal birth");
    assert_eq!(birth.mother, c(0, 1));
    assert_eq!(birth.cell, c(1, 2));
}
