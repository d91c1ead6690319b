//! # Flood-It Solver Library
//!
//! This library provides the core grid logic for the Flood-It puzzle game
//! and a deterministic greedy solver that produces full move sequences.
//!
//! The game: starting from the origin tile at (0, 0), the player repeatedly
//! picks a color; every tile reachable from the origin's region through runs
//! of that color is absorbed and the whole region is repainted. The puzzle is
//! solved once every tile belongs to the region.
//!
//! It is used by three binaries:
//! - `human_player`: Allows interactive gameplay via the command line.
//! - `ai_solver`: Takes a grid in the numbered wire format and outputs the
//!   next move plus the full greedy move sequence.
//! - `new_game`: Generates a random starting grid in the wire format.
//!
//! ## Modules
//! - `engine`: Contains the grid representation (`Grid`), tile types (`Tile`,
//!   `TileColor`), the region-growth transform (`traverse`), and the random
//!   grid factory.
//! - `heuristics`: Cheap scoring functions over a grid used to rank moves.
//! - `solver`: Provides `solve_next_move` and `solve_game`.
//! - `wire`: Conversion between `Grid` and the plain 2D color-number arrays
//!   exchanged with external callers, with input validation.
//! - `utils`: Provides utility functions, such as parsing grids from strings.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;
pub mod wire;

// Items from sub-modules, if public, should be accessed via their full path,
// e.g., `floodit_solver::solver::solve_game()`. This keeps the top-level
// library namespace cleaner.
