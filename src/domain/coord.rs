use std::fmt;

/// A (row, col) position on the board.
///
/// Signed so that positions just off the board (e.g. a neighbor of an
/// edge cell, or a click outside the board) are representable and can be
/// rejected by bounds checks instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell itself followed by its up, down, left and right neighbors.
    /// Neighbors may lie outside the board.
    pub const fn neighborhood(self) -> [Coord; 5] {
        let Coord { row, col } = self;
        [
            self,
            Coord::new(row - 1, col),
            Coord::new(row + 1, col),
            Coord::new(row, col - 1),
            Coord::new(row, col + 1),
        ]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighborhood_starts_with_center() {
        let hood = Coord::new(2, 3).neighborhood();
        assert_eq!(hood[0], Coord::new(2, 3));
        assert!(hood.contains(&Coord::new(1, 3)));
        assert!(hood.contains(&Coord::new(3, 3)));
        assert!(hood.contains(&Coord::new(2, 2)));
        assert!(hood.contains(&Coord::new(2, 4)));
    }

    #[test]
    fn test_corner_neighborhood_goes_negative() {
        let hood = Coord::new(0, 0).neighborhood();
        assert!(hood.contains(&Coord::new(-1, 0)));
        assert!(hood.contains(&Coord::new(0, -1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(1, -2).to_string(), "(1, -2)");
    }
}
