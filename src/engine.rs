//! Core grid engine for the Flood-It puzzle.
//!
//! This module defines the game's fundamental components:
//! - `TileColor`: The fixed eight-color palette, with an explicit ordering
//!   used by the solver for deterministic tie-breaking.
//! - `Tile`: A single cell holding a color and a region-membership flag.
//! - `Grid`: The rectangular board, with adjacency queries, the solved check,
//!   and the random grid factory.
//! - `traverse`: The region-growth transform, the one operation that moves
//!   the game forward.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Represents one color of the fixed puzzle palette.
///
/// Colors are symbolic; on the wire they are exchanged as the numbers 1..=8
/// (see [`crate::wire`]). The palette order in [`ALL_COLORS`] matches the
/// numeric order and is the priority order used for solver tie-breaking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileColor {
    Color1,
    Color2,
    Color3,
    Color4,
    Color5,
    Color6,
    Color7,
    Color8,
}

/// The full palette in its fixed priority order.
///
/// This ordering is part of the solver contract: when two candidate moves
/// score equally, the one appearing earlier here wins.
pub const ALL_COLORS: [TileColor; 8] = [
    TileColor::Color1,
    TileColor::Color2,
    TileColor::Color3,
    TileColor::Color4,
    TileColor::Color5,
    TileColor::Color6,
    TileColor::Color7,
    TileColor::Color8,
];

/// Smallest playable palette.
pub const MIN_COLORS: usize = 3;
/// Largest playable palette (the whole of [`ALL_COLORS`]).
pub const MAX_COLORS: usize = 8;
/// Smallest supported grid dimension (rows or columns).
pub const MIN_DIMENSION: usize = 3;
/// Largest supported grid dimension (rows or columns).
pub const MAX_DIMENSION: usize = 12;

impl TileColor {
    /// Converts a wire color number (1..=8) to a `TileColor`.
    ///
    /// Returns `None` for anything outside the palette.
    ///
    /// # Examples
    ///
    /// ```
    /// use floodit_solver::engine::TileColor;
    /// assert_eq!(TileColor::from_number(1), Some(TileColor::Color1));
    /// assert_eq!(TileColor::from_number(8), Some(TileColor::Color8));
    /// assert_eq!(TileColor::from_number(0), None);
    /// assert_eq!(TileColor::from_number(9), None);
    /// ```
    pub fn from_number(value: u8) -> Option<Self> {
        match value {
            1 => Some(TileColor::Color1),
            2 => Some(TileColor::Color2),
            3 => Some(TileColor::Color3),
            4 => Some(TileColor::Color4),
            5 => Some(TileColor::Color5),
            6 => Some(TileColor::Color6),
            7 => Some(TileColor::Color7),
            8 => Some(TileColor::Color8),
            _ => None,
        }
    }

    /// Converts the color to its wire number (1..=8).
    pub fn to_number(self) -> u8 {
        match self {
            TileColor::Color1 => 1,
            TileColor::Color2 => 2,
            TileColor::Color3 => 3,
            TileColor::Color4 => 4,
            TileColor::Color5 => 5,
            TileColor::Color6 => 6,
            TileColor::Color7 => 7,
            TileColor::Color8 => 8,
        }
    }

    /// Converts the color to its character representation ('1'..'8').
    ///
    /// This is primarily used for text-based display and for the string grid
    /// format accepted by [`crate::utils::grid_from_str_array`].
    ///
    /// # Examples
    ///
    /// ```
    /// use floodit_solver::engine::TileColor;
    /// assert_eq!(TileColor::Color1.to_char(), '1');
    /// assert_eq!(TileColor::Color8.to_char(), '8');
    /// ```
    pub fn to_char(self) -> char {
        (b'0' + self.to_number()) as char
    }

    /// Returns the ANSI background color code string for terminal output.
    fn to_ansi_color_code(self) -> &'static str {
        match self {
            TileColor::Color1 => "41",
            TileColor::Color2 => "42",
            TileColor::Color3 => "43",
            TileColor::Color4 => "44",
            TileColor::Color5 => "45",
            TileColor::Color6 => "46",
            TileColor::Color7 => "47",
            TileColor::Color8 => "100",
        }
    }
}

/// Returns the playable palette for a requested color count.
///
/// The count is clamped to `MIN_COLORS..=MAX_COLORS` and the result is always
/// a prefix of [`ALL_COLORS`], so smaller games use the lowest-priority
/// colors.
///
/// # Examples
///
/// ```
/// use floodit_solver::engine::{palette, ALL_COLORS};
/// assert_eq!(palette(4), &ALL_COLORS[..4]);
/// assert_eq!(palette(0).len(), 3);
/// assert_eq!(palette(99).len(), 8);
/// ```
pub fn palette(color_count: usize) -> &'static [TileColor] {
    &ALL_COLORS[..color_count.clamp(MIN_COLORS, MAX_COLORS)]
}

/// A single cell of the grid.
///
/// `traversed` marks membership in the region anchored at the origin tile
/// (0, 0). All traversed tiles share one color at all times.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    pub color: TileColor,
    pub traversed: bool,
}

/// Represents the rectangular game grid.
///
/// Positions are `(x, y)` = (row index, column index). A grid always has at
/// least one row and one column; the tiles marked `traversed` always form a
/// single 4-connected region containing the origin, all sharing one color.
///
/// A `Grid` is an immutable value from the solver's perspective: [`traverse`]
/// returns a new grid and never touches its input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    tiles: Vec<Vec<Tile>>,
}

impl Grid {
    /// Creates a grid from prepared rows of tiles.
    ///
    /// The caller must supply a well-formed layout: at least one row, all
    /// rows the same non-zero length, and the origin-region invariant already
    /// established (or re-established right after via [`traverse`], as the
    /// factory and the wire layer do).
    pub fn from_tiles(tiles: Vec<Vec<Tile>>) -> Self {
        debug_assert!(!tiles.is_empty());
        debug_assert!(!tiles[0].is_empty());
        debug_assert!(tiles.iter().all(|row| row.len() == tiles[0].len()));
        Grid { tiles }
    }

    /// Creates a random grid with a fixed internal seed.
    ///
    /// Calls are deterministic: the same dimensions and color count always
    /// produce the same grid, which keeps tests and demo runs reproducible.
    /// Use [`Grid::new_random_with_seed`] for varied boards.
    ///
    /// Dimensions are clamped to `MIN_DIMENSION..=MAX_DIMENSION` and the
    /// color count to `MIN_COLORS..=MAX_COLORS`. The returned grid has one
    /// [`traverse`] step applied, so the origin tile is already traversed.
    pub fn new_random(rows: usize, columns: usize, color_count: usize) -> Self {
        Self::new_random_with_seed(rows, columns, color_count, 0xF100D)
    }

    /// Creates a random grid from the given seed.
    ///
    /// The same seed always produces the same grid; different seeds produce
    /// different grids. Clamping and origin seeding behave exactly as in
    /// [`Grid::new_random`].
    ///
    /// # Examples
    ///
    /// ```
    /// use floodit_solver::engine::Grid;
    /// let a = Grid::new_random_with_seed(6, 6, 4, 7);
    /// let b = Grid::new_random_with_seed(6, 6, 4, 7);
    /// assert_eq!(a, b);
    /// assert!(a.tile(0, 0).is_some_and(|t| t.traversed));
    /// ```
    pub fn new_random_with_seed(rows: usize, columns: usize, color_count: usize, seed: u64) -> Self {
        let rows = rows.clamp(MIN_DIMENSION, MAX_DIMENSION);
        let columns = columns.clamp(MIN_DIMENSION, MAX_DIMENSION);
        let colors = palette(color_count);
        let mut rng = SmallRng::seed_from_u64(seed);

        let tiles = (0..rows)
            .map(|_| {
                (0..columns)
                    .map(|_| Tile {
                        color: colors[rng.gen_range(0..colors.len())],
                        traversed: false,
                    })
                    .collect()
            })
            .collect();

        // Seed the origin region: one growth step toward the origin's own
        // color marks (0, 0) and any same-colored run around it.
        let raw = Grid { tiles };
        traverse(&raw, raw.region_color())
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    /// Returns the number of columns.
    pub fn columns(&self) -> usize {
        self.tiles[0].len()
    }

    /// Returns the tile at `(x, y)`, or `None` when the position is outside
    /// the grid. Out-of-bounds positions are absent, not errors.
    pub fn tile(&self, x: usize, y: usize) -> Option<&Tile> {
        self.tiles.get(x).and_then(|row| row.get(y))
    }

    /// Iterates over every tile in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flatten()
    }

    /// Returns the current color of the region, i.e. the color of the origin
    /// tile at (0, 0).
    pub fn region_color(&self) -> TileColor {
        self.tiles[0][0].color
    }

    /// Returns `true` when every tile belongs to the region.
    pub fn is_solved(&self) -> bool {
        self.tiles().all(|tile| tile.traversed)
    }

    /// Returns the in-bounds neighbour positions of `(x, y)` in top, right,
    /// bottom, left order.
    pub fn neighbour_positions(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut positions = Vec::with_capacity(4);
        if x > 0 {
            positions.push((x - 1, y)); // Top
        }
        if y + 1 < self.columns() {
            positions.push((x, y + 1)); // Right
        }
        if x + 1 < self.rows() {
            positions.push((x + 1, y)); // Bottom
        }
        if y > 0 {
            positions.push((x, y - 1)); // Left
        }
        positions
    }
}

/// Computes one region-growth step toward `color`, returning the new grid.
///
/// The walk starts at the origin and judges every position against the
/// *input* grid: a position propagates iff it is already part of the region
/// or carries the requested color, but not both. Every such position becomes
/// `color` and traversed in the output, and the walk continues through its
/// four neighbours; an inactive position is visited once and not expanded.
/// Tiles the walk never reaches are returned unchanged.
///
/// Choosing the region's current color is a legal no-op. The input grid is
/// never mutated and the result depends only on `(grid, color)`.
///
/// # Examples
///
/// ```
/// use floodit_solver::engine::{traverse, TileColor};
/// use floodit_solver::utils::grid_from_str_array;
///
/// let grid = grid_from_str_array(&["13", "51"]).unwrap();
/// let next = traverse(&grid, TileColor::Color3);
/// assert_eq!(next.region_color(), TileColor::Color3);
/// assert!(next.tile(0, 1).is_some_and(|t| t.traversed));
/// assert!(!next.tile(1, 1).is_some_and(|t| t.traversed));
/// ```
pub fn traverse(grid: &Grid, color: TileColor) -> Grid {
    let mut next = grid.clone();
    let mut visited = vec![vec![false; grid.columns()]; grid.rows()];
    let mut pending = vec![(0usize, 0usize)];

    while let Some((x, y)) = pending.pop() {
        if visited[x][y] {
            continue;
        }
        visited[x][y] = true;

        // Active iff exactly one of "already in the region" / "carries the
        // requested color" holds. Both or neither stops the walk here.
        let tile = grid.tiles[x][y];
        if (tile.color == color) == tile.traversed {
            continue;
        }

        next.tiles[x][y] = Tile {
            color,
            traversed: true,
        };

        for (nx, ny) in grid.neighbour_positions(x, y) {
            if !visited[nx][ny] {
                pending.push((nx, ny));
            }
        }
    }

    next
}

impl fmt::Display for Grid {
    /// Formats the grid with row and column headers. Each cell shows its
    /// color digit on the matching ANSI background; traversed tiles carry a
    /// `*` marker.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for y in 0..self.columns() {
            write!(f, "{:<2}", y)?;
        }
        writeln!(f)?;

        for (x, row) in self.tiles.iter().enumerate() {
            write!(f, "{:<2}", x)?;
            for tile in row {
                let marker = if tile.traversed { '*' } else { ' ' };
                write!(
                    f,
                    "\x1b[1;{}m{}{}\x1b[m",
                    tile.color.to_ansi_color_code(),
                    tile.color.to_char(),
                    marker
                )?;
            }
            if x < self.rows() - 1 {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}
