use crate::Point;
use crate::grid::Grid;
use crate::group::Groups;

/// Distinct empty neighbors of a chain of points.
///
/// A shared empty neighbor is listed once no matter how many members touch it.
pub fn liberties_of(grid: &Grid, chain: &[Point]) -> Vec<Point> {
    let mut seen = vec![false; grid.cells().len()];
    let mut libs = Vec::new();
    for &p in chain {
        for n in grid.neighbors(p) {
            let ni = grid.idx(n);
            if !seen[ni] && grid.stone_at(n).is_none() {
                seen[ni] = true;
                libs.push(n);
            }
        }
    }
    libs
}

/// Recompute the liberties of every group against the grid.
pub fn count_liberties(grid: &Grid, groups: &mut Groups) {
    for group in groups.groups_mut() {
        group.liberties = liberties_of(grid, &group.stones);
    }
}
