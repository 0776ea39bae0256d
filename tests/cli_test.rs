#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;
    use std::time::Duration;

    use quasiboats::cli::{format_elapsed, parse_command, run_session, Command};
    use quasiboats::{Boat, Direction, Game, GridState, MemoryPrefs, Orientation, PreferenceStore};

    fn blocked_harbor() -> Game {
        let blocker = Boat::obstacle(1, 2, 3, 2, Orientation::Vertical).unwrap();
        let grid = GridState::new(6, vec![Boat::player(0, 3, 0).unwrap(), blocker]).unwrap();
        Game::from_grid(grid)
    }

    fn run(game: &mut Game, prefs: &mut MemoryPrefs, script: &str) -> String {
        let mut out = Vec::new();
        run_session(game, prefs, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!(
            parse_command("3 up"),
            Ok(Command::Move { boat: 3, direction: Direction::Up })
        );
        assert_eq!(
            parse_command("  0 R "),
            Ok(Command::Move { boat: 0, direction: Direction::Right })
        );
        assert_eq!(
            parse_command("drag 1 -1 4"),
            Ok(Command::Drag { boat: 1, row: -1, col: 4 })
        );
        assert_eq!(parse_command("hint 2"), Ok(Command::Hint { boat: 2 }));
    }

    #[test]
    fn test_parse_session_commands() {
        assert_eq!(parse_command("new"), Ok(Command::New(None)));
        assert_eq!(parse_command("new 12"), Ok(Command::New(Some(12))));
        assert_eq!(parse_command("size 8"), Ok(Command::Size(8)));
        assert_eq!(parse_command("reset"), Ok(Command::Reset));
        assert_eq!(parse_command("show"), Ok(Command::Show));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("").is_err());
        assert!(parse_command("size x").is_err());
        assert!(parse_command("hint").is_err());
        assert!(parse_command("2 sideways").is_err());
        assert!(parse_command("2").is_err());
        assert!(parse_command("show extra").is_err());
        assert!(parse_command("new -4").is_err());
    }

    #[test]
    fn test_scripted_session_to_the_exit() {
        let mut game = blocked_harbor();
        let mut prefs = MemoryPrefs::new();
        let out = run(
            &mut game,
            &mut prefs,
            "hint 0\n0 r\n0 r\n1 u\n\nbogus\ndrag 0 3 9\nquit\n0 l\n",
        );
        assert!(out.contains("boat 0 can move right"));
        assert!(out.contains("refused: boat 1 is in the way"));
        assert!(out.contains("'bogus' is not a valid boat id"));
        assert!(out.contains("out of the harbor in 3 moves (0:00)"));
        assert!(game.is_won());
        assert_eq!(game.move_count(), 3);
    }

    #[test]
    fn test_moves_after_win_are_refused() {
        let grid = GridState::with_player(6, 3).unwrap();
        let mut game = Game::from_grid(grid);
        let mut prefs = MemoryPrefs::new();
        let out = run(&mut game, &mut prefs, "0 right\n0 left\n");
        assert!(out.contains("refused: the puzzle is already solved"));
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_size_change_is_remembered() {
        let mut game = blocked_harbor();
        let mut prefs = MemoryPrefs::new();
        run(&mut game, &mut prefs, "size 8\n");
        assert_eq!(game.grid().size(), 8);
        assert_eq!(prefs.grid_size(), Some(8));

        run(&mut game, &mut prefs, "size 2\nreset\n");
        assert_eq!(game.grid().size(), 4);
        assert_eq!(prefs.grid_size(), Some(4));
    }

    #[test]
    fn test_new_with_seed() {
        let mut game = blocked_harbor();
        let mut prefs = MemoryPrefs::new();
        let out = run(&mut game, &mut prefs, "new 42\nshow\n");
        assert_eq!(game.seed(), 42);
        assert_eq!(game.grid(), &quasiboats::generate(42, 6).grid);
        assert!(out.contains("seed 42  size 6  moves 0"));
    }

    #[test]
    fn test_solve_time_format() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "0:00");
        assert_eq!(format_elapsed(Duration::from_millis(75_900)), "1:15");
        assert_eq!(format_elapsed(Duration::from_secs(600)), "10:00");
    }

    #[test]
    fn test_win_reports_moves_and_time() {
        let grid = GridState::with_player(6, 2).unwrap();
        let mut game = Game::from_grid(grid);
        let mut prefs = MemoryPrefs::new();
        let out = run(&mut game, &mut prefs, "0 r\nreset\n0 r\n0 r\n");
        assert!(out.contains("out of the harbor in 2 moves (0:00)!"));
        assert_eq!(game.move_count(), 2);
    }
}
