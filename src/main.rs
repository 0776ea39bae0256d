#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use quasiboats::{
    cli::run_session, draw_seed, init_logging, remember_grid_size, startup_grid_size,
    Game, JsonFilePrefs, MemoryPrefs, PreferenceStore, PuzzleGenerator,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Solve puzzles interactively on the terminal.
    Play {
        #[arg(long, help = "Grid size, 4-10 (overrides the stored preference)")]
        size: Option<usize>,
        #[arg(long, help = "Fix the puzzle seed (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Preference file remembering the grid size")]
        prefs: Option<PathBuf>,
    },
    /// Print the puzzle generated from a seed.
    Generate {
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = quasiboats::DEFAULT_GRID_SIZE)]
        size: usize,
        #[arg(long, help = "Emit the layout and its report as JSON")]
        json: bool,
    },
}

#[cfg(feature = "std")]
fn open_prefs(path: Option<PathBuf>) -> Box<dyn PreferenceStore> {
    let Some(path) = path else {
        return Box::new(MemoryPrefs::new());
    };
    match JsonFilePrefs::open(&path) {
        Ok(prefs) => Box::new(prefs),
        Err(e) => {
            log::warn!("ignoring preferences in {}: {}", path.display(), e);
            Box::new(JsonFilePrefs::empty(path))
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { size, seed, prefs } => {
            let mut prefs = open_prefs(prefs);
            let grid_size = match size {
                Some(size) => {
                    let size = quasiboats::clamp_grid_size(size);
                    remember_grid_size(prefs.as_mut(), size);
                    size
                }
                None => startup_grid_size(prefs.as_ref()),
            };
            let seed = seed.unwrap_or_else(draw_seed);
            let mut game = Game::new(seed, grid_size);
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_session(&mut game, prefs.as_mut(), stdin.lock(), &mut stdout)?;
        }
        Commands::Generate { seed, size, json } => {
            let generated = PuzzleGenerator::new().generate(seed, size);
            if json {
                let doc = serde_json::json!({
                    "grid": generated.grid,
                    "report": generated.report,
                });
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                let report = generated.report;
                println!(
                    "seed {}  size {}  attempts {}  verdict {:?}",
                    report.seed, report.grid_size, report.attempts, report.verdict
                );
                println!("{}", generated.grid);
            }
        }
    }
    Ok(())
}
