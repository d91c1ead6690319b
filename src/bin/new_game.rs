use clap::Parser;
use floodit_solver::engine::Grid;
use floodit_solver::wire::{grid_to_wire, SolveRequest};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of rows (clamped to 3..=12)
    #[clap(short, long, default_value_t = 6)]
    rows: usize,

    /// Number of columns (clamped to 3..=12)
    #[clap(short, long, default_value_t = 6)]
    columns: usize,

    /// Number of palette colors in play (clamped to 3..=8)
    #[clap(long, default_value_t = 4)]
    colors: usize,

    /// Seed for reproducible grids; omitting it uses the fixed default seed
    #[clap(short, long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let grid = match args.seed {
        Some(seed) => Grid::new_random_with_seed(args.rows, args.columns, args.colors, seed),
        None => Grid::new_random(args.rows, args.columns, args.colors),
    };

    let request = SolveRequest {
        grid: grid_to_wire(&grid),
    };

    // Wire JSON on stdout so it can be piped straight into a solver run;
    // the human-readable board goes to stderr.
    println!(
        "{}",
        serde_json::to_string(&request).expect("wire grids always serialize")
    );
    eprintln!("{}", grid);
}
