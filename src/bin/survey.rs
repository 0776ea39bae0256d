use quasiboats::{PuzzleGenerator, Verdict, DEFAULT_GRID_SIZE};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    quasiboats::init_logging_with(log::LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 && args.len() != 4 {
        eprintln!("Usage: {} <first_seed> <count> [size]", args[0]);
        std::process::exit(1);
    }
    let first: u64 = args[1].parse()?;
    let count: u64 = args[2].parse()?;
    let size: usize = match args.get(3) {
        Some(s) => s.parse()?,
        None => DEFAULT_GRID_SIZE,
    };

    let generator = PuzzleGenerator::new();
    let (mut solvable, mut unsolvable, mut inconclusive) = (0u64, 0u64, 0u64);
    let mut attempts = 0usize;
    let mut best_effort = 0u64;
    for seed in first..first.saturating_add(count) {
        let report = generator.generate(seed, size).report;
        attempts += report.attempts;
        if !report.solvable {
            best_effort += 1;
        }
        match report.verdict {
            Verdict::Solvable => solvable += 1,
            Verdict::Unsolvable => unsolvable += 1,
            Verdict::Inconclusive => inconclusive += 1,
        }
    }

    let mean_attempts = if count == 0 {
        0.0
    } else {
        attempts as f64 / count as f64
    };
    let result = json!({
        "first_seed": first,
        "count": count,
        "grid_size": quasiboats::clamp_grid_size(size),
        "solvable": solvable,
        "unsolvable": unsolvable,
        "inconclusive": inconclusive,
        "best_effort": best_effort,
        "mean_attempts": mean_attempts,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
