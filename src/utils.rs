use crate::engine::{traverse, Grid, Tile, TileColor};

/// Parses an array of string slices into a [`Grid`].
///
/// Each string slice is one row, starting from row 0; each character is a
/// color digit between '1' and '8'. All rows must be the same non-zero
/// length and at least one row must be present. After parsing, one
/// [`traverse`] step toward the origin's color establishes the origin-region
/// invariant, so the returned grid is ready for the solver.
///
/// # Arguments
/// * `s`: A slice of string slices (`&[&str]`) representing the rows of the
///   grid, starting from the top (row 0).
///
/// # Returns
/// * `Ok(Grid)` if parsing is successful.
/// * `Err(String)` if the input is empty, a row is empty or has a different
///   length than the first row, or an unrecognized character is encountered.
///
/// # Examples
/// ```
/// use floodit_solver::utils::grid_from_str_array;
/// use floodit_solver::engine::TileColor;
///
/// let grid = grid_from_str_array(&["13", "51"]).unwrap();
/// assert_eq!(grid.region_color(), TileColor::Color1);
/// assert_eq!(grid.tile(1, 0).unwrap().color, TileColor::Color5);
///
/// assert!(grid_from_str_array(&["1X"]).is_err());
/// assert!(grid_from_str_array(&[]).is_err());
/// ```
pub fn grid_from_str_array(s: &[&str]) -> Result<Grid, String> {
    if s.is_empty() {
        return Err("At least one row is required".to_string());
    }

    let expected = s[0].chars().count();
    if expected == 0 {
        return Err("Row 0 is empty".to_string());
    }

    let mut tiles = Vec::with_capacity(s.len());
    for (x, row_str) in s.iter().enumerate() {
        let row_len = row_str.chars().count();
        if row_len != expected {
            return Err(format!(
                "Row {} has {} characters, expected {}",
                x, row_len, expected
            ));
        }

        let mut row = Vec::with_capacity(expected);
        for (y, char_tile) in row_str.chars().enumerate() {
            let color = char_tile
                .to_digit(10)
                .and_then(|d| TileColor::from_number(d as u8))
                .ok_or_else(|| {
                    format!(
                        "Unrecognized character '{}' in row {} col {}",
                        char_tile, x, y
                    )
                })?;
            row.push(Tile {
                color,
                traversed: false,
            });
        }
        tiles.push(row);
    }

    let raw = Grid::from_tiles(tiles);
    Ok(traverse(&raw, raw.region_color()))
}
