use quasiboats::{
    generate, is_won, Boat, Direction, Game, GameStatus, GridState, MoveRejection, Orientation,
};

/// Size 6, player at (3, 0), a length-2 vertical boat covering (2, 3) and (3, 3).
fn blocked_harbor() -> Game {
    let blocker = Boat::obstacle(1, 2, 3, 2, Orientation::Vertical).unwrap();
    let grid = GridState::new(6, vec![Boat::player(0, 3, 0).unwrap(), blocker]).unwrap();
    Game::from_grid(grid)
}

#[test]
fn test_moves_are_checked_and_counted() {
    let mut game = blocked_harbor();
    assert!(game.report().solvable);

    let result = game.try_move(0, Direction::Right);
    assert!(result.accepted);
    assert_eq!(result.state.moves, 1);
    assert_eq!(game.grid().player().col(), 1);

    let result = game.try_move(0, Direction::Right);
    assert!(!result.accepted);
    assert_eq!(result.rejection, Some(MoveRejection::Blocked { by: 1 }));
    assert_eq!(game.move_count(), 1);
    assert_eq!(game.grid().player().col(), 1);

    let result = game.try_move(0, Direction::Up);
    assert_eq!(result.rejection, Some(MoveRejection::WrongAxis));
    let result = game.try_move(4, Direction::Up);
    assert_eq!(result.rejection, Some(MoveRejection::UnknownBoat(4)));
    assert_eq!(game.move_count(), 1);
}

#[test]
fn test_winning_locks_the_game() {
    let mut game = blocked_harbor();
    assert!(game.try_move(1, Direction::Up).accepted);
    for _ in 0..3 {
        assert!(game.try_move(0, Direction::Right).accepted);
        assert!(!game.is_won());
    }
    let result = game.try_move(0, Direction::Right);
    assert!(result.accepted);
    assert!(is_won(&result.state));
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.move_count(), 5);

    let result = game.try_move(0, Direction::Left);
    assert_eq!(result.rejection, Some(MoveRejection::GameOver));
    assert_eq!(game.try_move_to(1, 0, 3).rejection, Some(MoveRejection::GameOver));
    assert_eq!(game.begin_drag(1), Err(MoveRejection::GameOver));
    assert!(game.movable_directions(1).is_empty());
    assert_eq!(game.move_count(), 5);
}

#[test]
fn test_start_at_exit_is_not_won_yet() {
    let grid = GridState::with_player(6, 4).unwrap();
    let mut game = Game::from_grid(grid);
    assert!(!game.is_won());
    assert_eq!(game.status(), GameStatus::InProgress);

    assert!(game.try_move(0, Direction::Left).accepted);
    assert!(!game.is_won());
    assert!(game.try_move(0, Direction::Right).accepted);
    assert!(game.is_won());
}

#[test]
fn test_slide_to() {
    let mut game = blocked_harbor();
    let result = game.try_move_to(0, 3, 2);
    assert_eq!(result.rejection, Some(MoveRejection::Blocked { by: 1 }));

    let result = game.try_move_to(0, 3, 1);
    assert!(result.accepted);
    assert_eq!(game.move_count(), 1);

    // zero-length slide: accepted, not counted
    let result = game.try_move_to(0, 3, 1);
    assert!(result.accepted);
    assert_eq!(game.move_count(), 1);

    let result = game.try_move_to(1, 0, 3);
    assert!(result.accepted);
    assert_eq!(game.grid().boat(1).unwrap().origin(), (0, 3));
    assert_eq!(game.move_count(), 2);
}

#[test]
fn test_drag_counts_once() {
    let mut game = blocked_harbor();
    game.begin_drag(1).unwrap();
    assert_eq!(game.dragging(), Some(1));

    // axis-locked: the column is ignored for a vertical boat
    let result = game.drag_to(0, 5);
    assert!(result.accepted);
    assert_eq!(game.grid().boat(1).unwrap().origin(), (0, 3));
    assert_eq!(game.move_count(), 0);

    // clamped to the bottom edge
    assert!(game.drag_to(9, 0).accepted);
    assert_eq!(game.grid().boat(1).unwrap().origin(), (4, 3));

    let result = game.end_drag();
    assert!(result.accepted);
    assert_eq!(game.move_count(), 1);
    assert_eq!(game.dragging(), None);
}

#[test]
fn test_drag_back_to_start_is_not_a_move() {
    let mut game = blocked_harbor();
    game.begin_drag(1).unwrap();
    assert!(game.drag_to(0, 3).accepted);
    assert!(game.drag_to(2, 3).accepted);
    let result = game.end_drag();
    assert!(!result.accepted);
    assert_eq!(result.rejection, None);
    assert_eq!(game.move_count(), 0);
}

#[test]
fn test_blocked_drag_stays_put() {
    let mut game = blocked_harbor();
    game.begin_drag(0).unwrap();
    let result = game.drag_to(3, 4);
    assert_eq!(result.rejection, Some(MoveRejection::Blocked { by: 1 }));
    assert_eq!(game.grid().player().col(), 0);
    assert!(game.drag_to(3, 1).accepted);
    assert_eq!(game.grid().player().col(), 1);
}

#[test]
fn test_cancel_drag_snaps_back() {
    let mut game = blocked_harbor();
    game.begin_drag(1).unwrap();
    assert!(game.drag_to(0, 3).accepted);
    let state = game.cancel_drag();
    assert_eq!(state.grid.boat(1).unwrap().origin(), (2, 3));
    assert_eq!(state.moves, 0);
    assert_eq!(game.dragging(), None);
}

#[test]
fn test_drag_without_begin() {
    let mut game = blocked_harbor();
    assert_eq!(
        game.drag_to(0, 0).rejection,
        Some(MoveRejection::NoDragInProgress)
    );
    assert_eq!(game.end_drag().rejection, Some(MoveRejection::NoDragInProgress));
    assert_eq!(game.begin_drag(7), Err(MoveRejection::UnknownBoat(7)));
}

#[test]
fn test_drag_to_the_exit_wins() {
    let mut game = blocked_harbor();
    assert!(game.try_move(1, Direction::Up).accepted);
    game.begin_drag(0).unwrap();
    assert!(game.drag_to(3, 99).accepted);
    assert!(!game.is_won());
    let result = game.end_drag();
    assert!(result.accepted);
    assert!(game.is_won());
    assert_eq!(game.move_count(), 2);
}

#[test]
fn test_movable_directions_hint() {
    let game = blocked_harbor();
    assert_eq!(game.movable_directions(0), vec![Direction::Right]);
    assert_eq!(
        game.movable_directions(1),
        vec![Direction::Up, Direction::Down]
    );
}

#[test]
fn test_reset_restores_the_layout() {
    let mut game = Game::new(42, 6);
    let start = game.grid().clone();
    assert_eq!(&start, &generate(42, 6).grid);

    let moved = (0..start.boats().len())
        .flat_map(|id| Direction::ALL.into_iter().map(move |d| (id, d)))
        .any(|(id, d)| game.try_move(id, d).accepted);
    assert!(moved);
    assert_ne!(game.grid(), &start);
    assert_eq!(game.move_count(), 1);

    let state = game.reset_game();
    assert_eq!(state.grid, start);
    assert_eq!(state.moves, 0);
    assert_eq!(state.seed, 42);
}

#[test]
fn test_reset_hand_built_layout() {
    let mut game = blocked_harbor();
    let start = game.grid().clone();
    game.try_move(0, Direction::Right);
    game.reset_game();
    assert_eq!(game.grid(), &start);
}

#[test]
fn test_new_game_and_size_changes() {
    let mut game = Game::new(42, 6);
    let state = game.new_game(7);
    assert_eq!(state.seed, 7);
    assert_eq!(game.seed(), 7);
    assert_eq!(state.grid, generate(7, 6).grid);

    let state = game.change_grid_size(2, 9);
    assert_eq!(state.grid.size(), 4);
    assert_eq!(state.seed, 9);
    assert_eq!(state.grid, generate(9, 4).grid);

    let state = game.change_grid_size(15, 9);
    assert_eq!(state.grid.size(), 10);
    assert_eq!(game.report().grid_size, 10);

    // new games keep the size
    let state = game.new_game(11);
    assert_eq!(state.grid.size(), 10);
    assert_eq!(state.moves, 0);
    assert_eq!(state.status, GameStatus::InProgress);
}

#[test]
fn test_snapshot_reports_solvability() {
    let game = Game::new(42, 6);
    let state = game.snapshot();
    assert_eq!(state.solvable, game.report().solvable);
    assert_eq!(state.grid, *game.grid());
    assert_eq!(state.moves, 0);
}

#[test]
fn test_moves_wait_for_the_drag_to_finish() {
    let crossing = Boat::obstacle(1, 1, 1, 2, Orientation::Vertical).unwrap();
    let grid = GridState::new(6, vec![Boat::player(0, 3, 0).unwrap(), crossing]).unwrap();
    let mut game = Game::from_grid(grid);

    game.begin_drag(0).unwrap();
    assert!(game.drag_to(3, 4).accepted);

    // boat 1 could slide into the player's start cell now
    let result = game.try_move(1, Direction::Down);
    assert_eq!(result.rejection, Some(MoveRejection::DragInProgress));
    assert_eq!(game.grid().boat(1).unwrap().origin(), (1, 1));
    assert_eq!(
        game.try_move_to(1, 2, 1).rejection,
        Some(MoveRejection::DragInProgress)
    );
    assert_eq!(game.begin_drag(1), Err(MoveRejection::DragInProgress));

    let state = game.cancel_drag();
    assert_eq!(state.grid.player().origin(), (3, 0));
    assert!(state.grid.validate().is_ok());
    assert_eq!(state.moves, 0);

    assert_eq!(
        game.try_move(1, Direction::Down).rejection,
        Some(MoveRejection::Blocked { by: 0 })
    );
    assert!(game.grid().validate().is_ok());
}

#[test]
fn test_dragged_boat_counts_once() {
    let mut game = blocked_harbor();
    game.begin_drag(0).unwrap();
    assert!(game.drag_to(3, 1).accepted);
    assert_eq!(
        game.try_move(0, Direction::Left).rejection,
        Some(MoveRejection::DragInProgress)
    );
    assert!(game.end_drag().accepted);
    assert_eq!(game.move_count(), 1);
    assert_eq!(game.grid().player().col(), 1);
}
