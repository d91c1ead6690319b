//! Greedy move selection and full-game solving.
//!
//! The solver looks exactly one move ahead: every frontier color is tried
//! via [`traverse`], scored with the heuristics, and the winner applied. The
//! result is deterministic but not guaranteed minimal; that approximation is
//! accepted by design.

use crate::engine::{traverse, Grid, TileColor};
use crate::heuristics::{remaining_count, remaining_count_for_color};
use std::collections::HashSet;

/// Picks the next color to play, or `None` when the puzzle offers no
/// frontier to extend (already solved).
///
/// Candidates are the distinct colors of untraversed tiles directly adjacent
/// to the region, scanned in palette priority order. A candidate that leaves
/// no same-colored tile stranded is returned immediately, as is one that
/// solves the grid outright; otherwise the candidate with the strictly
/// smallest remaining-tile count wins, earlier palette order keeping ties.
///
/// # Examples
///
/// ```
/// use floodit_solver::solver::solve_next_move;
/// use floodit_solver::engine::TileColor;
/// use floodit_solver::utils::grid_from_str_array;
///
/// let grid = grid_from_str_array(&["13", "51"]).unwrap();
/// assert_eq!(solve_next_move(&grid), Some(TileColor::Color3));
/// ```
pub fn solve_next_move(grid: &Grid) -> Option<TileColor> {
    // Collect the frontier: colors of untraversed neighbours of the region.
    let mut frontier = HashSet::new();
    for x in 0..grid.rows() {
        for y in 0..grid.columns() {
            if !grid.tile(x, y).is_some_and(|tile| tile.traversed) {
                continue;
            }
            for (nx, ny) in grid.neighbour_positions(x, y) {
                if let Some(neighbour) = grid.tile(nx, ny) {
                    if !neighbour.traversed {
                        frontier.insert(neighbour.color);
                    }
                }
            }
        }
    }

    if frontier.is_empty() {
        return None;
    }

    // Fixed palette priority keeps tie-breaking deterministic.
    let mut candidates: Vec<TileColor> = frontier.into_iter().collect();
    candidates.sort_unstable_by_key(|color| color.to_number());

    let mut next_color = None;
    let mut min_heuristic = usize::MAX;

    for color in candidates {
        let next = traverse(grid, color);

        // A move that strands no tile of its own color is taken outright.
        if remaining_count_for_color(&next, color) == 0 {
            return Some(color);
        }

        let heuristic = remaining_count(&next);
        if heuristic == 0 {
            return Some(color);
        } else if heuristic < min_heuristic {
            next_color = Some(color);
            min_heuristic = heuristic;
        }
    }

    next_color
}

/// Solves the whole game, returning the ordered colors that flood the grid.
///
/// Repeatedly applies [`solve_next_move`] until the grid is fully traversed.
/// A `None` from the selector stops the loop early; that cannot happen on a
/// well-formed grid but guards the loop against malformed input.
pub fn solve_game(grid: &Grid) -> Vec<TileColor> {
    let mut colors = Vec::new();
    let mut current = grid.clone();

    while !current.is_solved() {
        let Some(color) = solve_next_move(&current) else {
            break;
        };
        colors.push(color);
        current = traverse(&current, color);
    }

    colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ALL_COLORS;
    use crate::utils::grid_from_str_array;

    fn replay(grid: &Grid, colors: &[TileColor]) -> Grid {
        let mut current = grid.clone();
        for &color in colors {
            current = traverse(&current, color);
        }
        current
    }

    #[test]
    fn test_solve_next_move_picks_adjacent_run() {
        let grid = grid_from_str_array(&["13", "51"]).unwrap();
        assert_eq!(solve_next_move(&grid), Some(TileColor::Color3));
    }

    #[test]
    fn test_solve_next_move_on_solved_grid() {
        let grid = grid_from_str_array(&["44", "44"]).unwrap();
        assert!(grid.is_solved());
        assert_eq!(solve_next_move(&grid), None);
    }

    #[test]
    fn test_solve_next_move_prefers_exact_absorption() {
        // Color 2 scores better on remaining tiles but strands the color-2
        // tile at (2, 0); color 5 absorbs every color-5 tile and must win
        // despite its worse score and later palette position.
        let grid = grid_from_str_array(&["122", "512", "211"]).unwrap();
        assert_eq!(solve_next_move(&grid), Some(TileColor::Color5));
    }

    #[test]
    fn test_solve_next_move_breaks_ties_by_palette_order() {
        // Both frontier colors gain exactly one tile and strand one island;
        // the scan must keep the first candidate in palette order.
        let grid = grid_from_str_array(&["523", "342", "243"]).unwrap();
        assert_eq!(solve_next_move(&grid), Some(TileColor::Color2));
    }

    #[test]
    fn test_solve_game_two_by_two() {
        let grid = grid_from_str_array(&["13", "51"]).unwrap();
        let colors = solve_game(&grid);

        assert_eq!(
            colors,
            vec![TileColor::Color3, TileColor::Color1, TileColor::Color5]
        );
        assert!(replay(&grid, &colors).is_solved());
    }

    #[test]
    fn test_solve_game_three_by_three() {
        let grid = grid_from_str_array(&["312", "414", "122"]).unwrap();
        let colors = solve_game(&grid);

        assert_eq!(
            colors,
            vec![
                TileColor::Color1,
                TileColor::Color2,
                TileColor::Color1,
                TileColor::Color4
            ]
        );
        assert!(replay(&grid, &colors).is_solved());
    }

    #[test]
    fn test_solve_game_already_solved() {
        let grid = grid_from_str_array(&["11", "11"]).unwrap();
        assert!(solve_game(&grid).is_empty());
    }

    #[test]
    fn test_solve_game_terminates_and_solves_random_grids() {
        for seed in 0..6 {
            let grid = Grid::new_random_with_seed(6, 6, 4, seed);
            let colors = solve_game(&grid);

            let solved = replay(&grid, &colors);
            assert!(solved.is_solved(), "seed {seed} left the grid unsolved");
            assert!(
                colors.len() <= grid.rows() * grid.columns(),
                "seed {seed} produced an implausibly long solution"
            );
            assert!(colors.iter().all(|c| ALL_COLORS[..4].contains(c)));
        }
    }
}
