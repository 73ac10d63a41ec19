use std::fmt;

use super::{Coord, GameError};

/// Grid holds the lit/unlit state of every light on the board.
/// Updates are copy-on-write: toggling returns a new grid and leaves
/// the receiver untouched, so every snapshot stays valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid with every light off
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Create a grid by asking `lit` for each position, row-major
    pub fn from_fn(rows: usize, cols: usize, mut lit: impl FnMut(Coord) -> bool) -> Self {
        let cells = (0..rows * cols)
            .map(|idx| lit(Coord::new((idx / cols) as i32, (idx % cols) as i32)))
            .collect();
        Self { rows, cols, cells }
    }

    /// Build a grid from explicit rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GameError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(GameError::RaggedGrid { row, expected: cols, found });
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.index_of(coord).is_some()
    }

    /// Row-major index of an in-bounds coordinate
    fn index_of(&self, coord: Coord) -> Option<usize> {
        let row = usize::try_from(coord.row).ok()?;
        let col = usize::try_from(coord.col).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    const fn coord_at(&self, index: usize) -> Coord {
        Coord::new((index / self.cols) as i32, (index % self.cols) as i32)
    }

    /// Light state at position (None when out of bounds)
    pub fn get(&self, coord: Coord) -> Option<bool> {
        self.index_of(coord).map(|idx| self.cells[idx])
    }

    /// Invert `coord` and its in-bounds orthogonal neighbors in place.
    /// Only used on grids nobody else can observe yet.
    pub(crate) fn flip_around(&mut self, coord: Coord) -> Result<(), GameError> {
        if !self.contains(coord) {
            return Err(GameError::InvalidCoordinate {
                coord,
                rows: self.rows,
                cols: self.cols,
            });
        }

        for neighbor in coord.neighborhood() {
            if let Some(idx) = self.index_of(neighbor) {
                self.cells[idx] = !self.cells[idx];
            }
        }
        Ok(())
    }

    /// Returns a new grid with `coord` and its up/down/left/right
    /// neighbors inverted. Neighbors off the board are skipped.
    pub fn toggled_around(&self, coord: Coord) -> Result<Self, GameError> {
        let mut next = self.clone();
        next.flip_around(coord)?;
        Ok(next)
    }

    /// True when every light is off. Vacuously true for an empty grid.
    pub fn has_won(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    /// Iterate over all lights with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &lit)| (self.coord_at(idx), lit))
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells.chunks(self.cols).map(<[bool]>::to_vec).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &lit in row {
                f.write_str(if lit { "O" } else { "." })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn flipped(before: &Grid, after: &Grid) -> Vec<Coord> {
        before
            .iter_cells()
            .zip(after.iter_cells())
            .filter(|((_, a), (_, b))| a != b)
            .map(|((coord, _), _)| coord)
            .collect()
    }

    #[test]
    fn test_new_grid_is_dark() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.dimensions(), (3, 4));
        assert_eq!(grid.lit_count(), 0);
        assert!(grid.has_won());
    }

    #[test]
    fn test_corner_toggle_flips_three() {
        let grid = Grid::new(3, 3);
        let next = grid.toggled_around(Coord::new(0, 0)).unwrap();

        let mut changed = flipped(&grid, &next);
        changed.sort_by_key(|c| (c.row, c.col));
        assert_eq!(changed, vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 0)]);
    }

    #[test]
    fn test_center_toggle_flips_five() {
        let grid = Grid::new(3, 3);
        let next = grid.toggled_around(Coord::new(1, 1)).unwrap();

        let changed = flipped(&grid, &next);
        assert_eq!(changed.len(), 5);
        for coord in [(1, 1), (0, 1), (2, 1), (1, 0), (1, 2)] {
            assert!(changed.contains(&Coord::new(coord.0, coord.1)));
        }
    }

    #[test]
    fn test_edge_toggles_on_wide_board() {
        let grid = Grid::new(2, 4);
        let bottom_right = grid.toggled_around(Coord::new(1, 3)).unwrap();
        assert_eq!(bottom_right.to_string(), "...O\n..OO");

        let top_edge = bottom_right.toggled_around(Coord::new(0, 1)).unwrap();
        assert_eq!(top_edge.to_string(), "OOOO\n.OOO");
        assert_eq!(top_edge.lit_count(), 7);
    }

    #[test]
    fn test_toggle_leaves_input_untouched() {
        let grid = Grid::new(2, 2);
        let next = grid.toggled_around(Coord::new(1, 1)).unwrap();
        assert_eq!(grid, Grid::new(2, 2));
        assert_ne!(grid, next);
    }

    #[test]
    fn test_toggle_out_of_bounds() {
        let grid = Grid::new(3, 3);
        for coord in [Coord::new(-1, 0), Coord::new(3, 0), Coord::new(0, 3), Coord::new(0, -1)] {
            assert_eq!(
                grid.toggled_around(coord),
                Err(GameError::InvalidCoordinate { coord, rows: 3, cols: 3 })
            );
        }
    }

    #[test]
    fn test_single_lit_cell_has_not_won() {
        let grid = Grid::from_rows(vec![vec![false, false], vec![false, true]]).unwrap();
        assert!(!grid.has_won());
    }

    #[test]
    fn test_all_on_has_not_won() {
        let grid = Grid::from_rows(vec![vec![true; 3]; 3]).unwrap();
        assert!(!grid.has_won());
    }

    #[test]
    fn test_empty_grids_have_won() {
        assert!(Grid::new(0, 0).has_won());
        assert!(Grid::new(0, 5).has_won());
        assert!(Grid::new(5, 0).has_won());
        assert!(Grid::new(1, 1).has_won());
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Grid::from_rows(vec![vec![true, false], vec![true]]).unwrap_err();
        assert_eq!(err, GameError::RaggedGrid { row: 1, expected: 2, found: 1 });
    }

    #[test]
    fn test_rows_round_trip() {
        let rows = vec![
            vec![false, false, false],
            vec![true, true, false],
            vec![false, false, false],
        ];
        let grid = Grid::from_rows(rows.clone()).unwrap();
        assert_eq!(grid.get(Coord::new(1, 1)), Some(true));
        assert_eq!(grid.get(Coord::new(1, 2)), Some(false));
        assert_eq!(grid.get(Coord::new(3, 0)), None);
        assert_eq!(grid.to_rows(), rows);
    }

    #[test]
    fn test_display() {
        let rows = vec![vec![false, false, false], vec![true, true, false]];
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(grid.to_string(), "...\nOO.");
    }

    fn grid_and_coord() -> impl Strategy<Value = (Grid, Coord)> {
        (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| {
            (
                prop::collection::vec(any::<bool>(), rows * cols),
                0..rows as i32,
                0..cols as i32,
            )
                .prop_map(move |(cells, row, col)| {
                    let rows = cells.chunks(cols).map(<[bool]>::to_vec).collect();
                    (Grid::from_rows(rows).unwrap(), Coord::new(row, col))
                })
        })
    }

    proptest! {
        #[test]
        fn test_toggle_is_self_inverse((grid, coord) in grid_and_coord()) {
            let twice = grid.toggled_around(coord).unwrap().toggled_around(coord).unwrap();
            prop_assert_eq!(twice, grid);
        }

        #[test]
        fn test_toggle_keeps_dimensions((grid, coord) in grid_and_coord()) {
            let before = grid.clone();
            let next = grid.toggled_around(coord).unwrap();
            prop_assert_eq!(next.dimensions(), grid.dimensions());
            prop_assert_eq!(&grid, &before);
            prop_assert_ne!(next, grid);
        }
    }
}
