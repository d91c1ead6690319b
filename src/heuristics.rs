//! Heuristic scores used to rank candidate moves.
//!
//! Both heuristics are plain read-only folds over the grid; the solver calls
//! them on the grid produced by a simulated move and never looks further
//! ahead than that one step.

use crate::engine::{Grid, TileColor};

/// Counts the tiles not yet absorbed into the region.
///
/// Zero iff the puzzle is solved. Applying [`crate::engine::traverse`] can
/// never increase this count.
pub fn remaining_count(grid: &Grid) -> usize {
    grid.tiles().filter(|tile| !tile.traversed).count()
}

/// Counts the untraversed tiles of one specific color.
///
/// The solver uses this to detect moves that leave no same-colored island
/// stranded: a candidate color scoring zero here absorbs every tile of that
/// color in a single step.
pub fn remaining_count_for_color(grid: &Grid, color: TileColor) -> usize {
    grid.tiles()
        .filter(|tile| !tile.traversed && tile.color == color)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{palette, traverse, Grid, TileColor};
    use crate::utils::grid_from_str_array;

    /// Builds the reference 3x3 fixture with the region `{(0,0), (0,1),
    /// (1,1)}` flooded to color 1.
    fn reference_grid() -> Grid {
        let grid = grid_from_str_array(&["312", "414", "122"]).unwrap();
        traverse(&grid, TileColor::Color1)
    }

    #[test]
    fn test_remaining_count() {
        let grid = reference_grid();
        assert_eq!(remaining_count(&grid), 6);
    }

    #[test]
    fn test_remaining_count_for_color() {
        let grid = reference_grid();
        assert_eq!(remaining_count_for_color(&grid, TileColor::Color4), 2);
        assert_eq!(remaining_count_for_color(&grid, TileColor::Color2), 3);
        // The region color itself has no untraversed tiles left here.
        assert_eq!(remaining_count_for_color(&grid, TileColor::Color1), 1);
    }

    #[test]
    fn test_remaining_count_zero_iff_solved() {
        let solved = grid_from_str_array(&["22", "22"]).unwrap();
        assert!(solved.is_solved());
        assert_eq!(remaining_count(&solved), 0);

        let unsolved = grid_from_str_array(&["21", "22"]).unwrap();
        assert!(remaining_count(&unsolved) > 0);
    }

    #[test]
    fn test_monotonic_absorption() {
        let grid = Grid::new_random_with_seed(8, 8, 4, 11);
        let before = remaining_count(&grid);

        for color in palette(4) {
            let next = traverse(&grid, *color);
            assert!(
                remaining_count(&next) <= before,
                "traverse toward {color:?} increased the remaining count"
            );
        }
    }
}
