#![cfg(feature = "std")]

//! Line-oriented play loop over any reader/writer pair.

use std::io::{BufRead, Write};
use std::string::{String, ToString};
use std::time::{Duration, Instant};
use std::vec::Vec;

use crate::{
    common::Direction,
    game::{Game, MoveResult},
    generator::draw_seed,
    prefs::{remember_grid_size, PreferenceStore},
};

/// One parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { boat: usize, direction: Direction },
    Drag { boat: usize, row: isize, col: isize },
    Hint { boat: usize },
    Reset,
    New(Option<u64>),
    Size(usize),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  <boat> <up|down|left|right>   slide a boat one cell (u/d/l/r also work)
  drag <boat> <row> <col>       slide a boat towards (row, col) in one move
  hint <boat>                   list the directions a boat can move
  reset                         restart this puzzle
  new [seed]                    start another puzzle
  size <n>                      change the grid size (4-10)
  show                          print the harbor
  quit                          leave";

fn parse_direction(input: &str) -> Option<Direction> {
    match input.to_ascii_lowercase().as_str() {
        "u" | "up" => Some(Direction::Up),
        "d" | "down" => Some(Direction::Down),
        "l" | "left" => Some(Direction::Left),
        "r" | "right" => Some(Direction::Right),
        _ => None,
    }
}

fn parse_number<T: core::str::FromStr>(input: Option<&str>, what: &str) -> Result<T, String> {
    let raw = input.ok_or_else(|| std::format!("missing {}", what))?;
    raw.parse()
        .map_err(|_| std::format!("'{}' is not a valid {}", raw, what))
}

/// Parse one input line.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = parts.split_first() else {
        return Err("empty command".to_string());
    };
    let mut args = rest.iter().copied();
    let command = match head.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        "?" | "help" => Command::Help,
        "show" => Command::Show,
        "reset" => Command::Reset,
        "new" => Command::New(match args.next() {
            Some(seed) => Some(parse_number(Some(seed), "seed")?),
            None => None,
        }),
        "size" => Command::Size(parse_number(args.next(), "size")?),
        "hint" => Command::Hint {
            boat: parse_number(args.next(), "boat id")?,
        },
        "drag" => Command::Drag {
            boat: parse_number(args.next(), "boat id")?,
            row: parse_number(args.next(), "row")?,
            col: parse_number(args.next(), "column")?,
        },
        _ => {
            let boat = parse_number(Some(head), "boat id")?;
            let word = args.next().ok_or("missing direction")?;
            let direction = parse_direction(word)
                .ok_or_else(|| std::format!("unknown direction '{}'", word))?;
            Command::Move { boat, direction }
        }
    };
    if args.next().is_some() {
        return Err(std::format!("too many arguments for '{}'", head));
    }
    Ok(command)
}

/// Solve time as `m:ss`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    std::format!("{}:{:02}", secs / 60, secs % 60)
}

fn print_game<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    writeln!(
        out,
        "seed {}  size {}  moves {}",
        game.seed(),
        game.grid().size(),
        game.move_count()
    )?;
    writeln!(out, "{}", game.grid())
}

fn report_move<W: Write>(
    out: &mut W,
    game: &Game,
    result: &MoveResult,
    started: Instant,
) -> std::io::Result<()> {
    if let Some(reason) = result.rejection {
        return writeln!(out, "refused: {}", reason);
    }
    if !result.accepted {
        return writeln!(out, "nothing moved");
    }
    print_game(out, game)?;
    if result.state.is_won() {
        writeln!(
            out,
            "The boat is out of the harbor in {} moves ({})! Type 'new' for another puzzle.",
            result.state.moves,
            format_elapsed(started.elapsed())
        )?;
    }
    Ok(())
}

/// Run commands from `input` against `game` until `quit` or end of input.
/// Grid size changes are written to `prefs`. The solve clock restarts with
/// every new, reset or resized puzzle.
pub fn run_session<R, W, P>(
    game: &mut Game,
    prefs: &mut P,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
    P: PreferenceStore + ?Sized,
{
    print_game(out, game)?;
    if !game.report().solvable {
        writeln!(out, "(this layout could not be proven solvable)")?;
    }
    writeln!(out, "Type 'help' for commands.")?;
    let mut started = Instant::now();

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                writeln!(out, "{}", msg)?;
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Show => print_game(out, game)?,
            Command::Reset => {
                game.reset_game();
                started = Instant::now();
                print_game(out, game)?;
            }
            Command::New(seed) => {
                game.new_game(seed.unwrap_or_else(draw_seed));
                started = Instant::now();
                print_game(out, game)?;
            }
            Command::Size(size) => {
                let state = game.change_grid_size(size, draw_seed());
                remember_grid_size(prefs, state.grid.size());
                started = Instant::now();
                print_game(out, game)?;
            }
            Command::Hint { boat } => {
                if game.grid().boat(boat).is_none() {
                    writeln!(out, "there is no boat {}", boat)?;
                    continue;
                }
                let dirs = game.movable_directions(boat);
                if dirs.is_empty() {
                    writeln!(out, "boat {} cannot move", boat)?;
                } else {
                    let names: Vec<String> = dirs.iter().map(|d| d.to_string()).collect();
                    writeln!(out, "boat {} can move {}", boat, names.join(", "))?;
                }
            }
            Command::Move { boat, direction } => {
                let result = game.try_move(boat, direction);
                report_move(out, game, &result, started)?;
            }
            Command::Drag { boat, row, col } => {
                if let Err(reason) = game.begin_drag(boat) {
                    writeln!(out, "refused: {}", reason)?;
                    continue;
                }
                let dragged = game.drag_to(row, col);
                let result = game.end_drag();
                match dragged.rejection {
                    Some(reason) => writeln!(out, "refused: {}", reason)?,
                    None => report_move(out, game, &result, started)?,
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}
