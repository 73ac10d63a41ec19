//! Lights Out solver.
//!
//! Each light's final state is the XOR of its starting state and every
//! press in its neighborhood, so finding a solution is a linear system
//! over GF(2) with one variable per cell. Pressing a cell twice cancels
//! out, so a solution is a set of distinct presses.

use super::{Coord, Grid};

/// Find presses that turn every light off.
///
/// Returns `None` when the board cannot be solved. Free variables are
/// left unpressed, so the result is one solution, not necessarily the
/// shortest. Presses come back row-major.
pub fn solve(grid: &Grid) -> Option<Vec<Coord>> {
    let cells: Vec<(Coord, bool)> = grid.iter_cells().collect();
    let n = cells.len();

    // Augmented matrix: row i is the equation for light i, column j is
    // "pressing j flips i", the last column is whether i starts lit.
    // Neighborhood is symmetric, so row i also lists the presses that reach i.
    let mut system: Vec<Vec<bool>> = cells
        .iter()
        .map(|&(coord, lit)| {
            let mut equation = vec![false; n + 1];
            for (j, &(other, _)) in cells.iter().enumerate() {
                equation[j] = coord.neighborhood().contains(&other);
            }
            equation[n] = lit;
            equation
        })
        .collect();

    // Gauss-Jordan elimination
    let mut pivots = Vec::new();
    for col in 0..n {
        let rank = pivots.len();
        let Some(found) = (rank..n).find(|&r| system[r][col]) else {
            continue;
        };
        system.swap(rank, found);

        let pivot = system[rank].clone();
        for (r, equation) in system.iter_mut().enumerate() {
            if r != rank && equation[col] {
                equation.iter_mut().zip(&pivot).for_each(|(a, &b)| *a ^= b);
            }
        }
        pivots.push(col);
    }

    // Rows past the rank read 0 = rhs
    if system[pivots.len()..].iter().any(|equation| equation[n]) {
        return None;
    }

    let presses = pivots
        .iter()
        .zip(&system)
        .filter(|(_, equation)| equation[n])
        .map(|(&col, _)| col);

    let mut result: Vec<Coord> = presses.map(|col| cells[col].0).collect();
    result.sort_by_key(|c| (c.row, c.col));
    Some(result)
}
