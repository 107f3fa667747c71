use crate::Point;
use crate::grid::Grid;
use crate::group::Groups;
use crate::liberty::count_liberties;

/// Remove every group without liberties and return the vacated points.
///
/// All dead groups are removed in a single pass, including the mover's own
/// group (self-capture is allowed). When anything was removed, liberties of the
/// survivors are recomputed once. Group discovery is not re-run.
pub fn resolve_captures(grid: &mut Grid, groups: &mut Groups) -> Vec<Point> {
    let dead: Vec<Point> = groups
        .iter()
        .filter(|g| g.liberty_count() == 0)
        .flat_map(|g| g.stones.iter().copied())
        .collect();

    if dead.is_empty() {
        return dead;
    }

    for &p in &dead {
        grid.clear(p);
    }
    groups.retain(|g| g.liberty_count() > 0);
    count_liberties(grid, groups);

    tracing::debug!(stones = dead.len(), "captured");
    debug_assert!(groups.iter().all(|g| g.liberty_count() > 0));

    dead
}
