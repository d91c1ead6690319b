use clap::Parser;
use floodit_solver::engine::{traverse, Grid};
use floodit_solver::solver::{solve_game, solve_next_move};
use floodit_solver::wire::{grid_from_wire, SolveRequest};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON file holding the wire-format grid: {"grid": [[1, 2], ...]}
    grid_file: PathBuf,
}

fn read_grid_file(path: &PathBuf) -> Result<Grid, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let request: SolveRequest =
        serde_json::from_str(&content).map_err(|e| format!("Invalid JSON: {}", e))?;

    grid_from_wire(&request.grid).map_err(|e| format!("Invalid grid: {}", e))
}

fn main() {
    let args = Args::parse();

    let grid = read_grid_file(&args.grid_file)
        .expect(&format!("Failed to read grid from file: {}", args.grid_file.display()));
    println!("Loaded grid from {}\n", args.grid_file.display());
    println!("Initial grid state:\n{}\n", grid);

    match solve_next_move(&grid) {
        Some(color) => println!("Next move: color {}", color.to_number()),
        None => println!("Grid is already solved; nothing to play."),
    }

    let colors = solve_game(&grid);
    println!("\nGreedy solution ({} moves):", colors.len());
    if colors.is_empty() {
        println!("  No moves needed.");
    }

    let mut current = grid;
    for (i, color) in colors.iter().enumerate() {
        current = traverse(&current, *color);
        println!("  Move {}: color {}", i + 1, color.to_number());
    }
    println!("\nFinal grid state:\n{}", current);
}
