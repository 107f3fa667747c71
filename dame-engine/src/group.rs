use crate::Point;
use crate::grid::Grid;
use crate::stone::Stone;

pub type GroupId = usize;

/// A maximal set of same-colored, 4-connected stones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub stone: Stone,
    /// Members in discovery order.
    pub stones: Vec<Point>,
    /// Distinct empty neighbors of the members. Filled in by `liberty::count_liberties`.
    pub liberties: Vec<Point>,
}

impl Group {
    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.stones.contains(&point)
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }
}

/// The partition of a grid's stones into groups, with every stone annotated by its group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groups {
    groups: Vec<Group>,
    owner: Vec<Option<GroupId>>,
    size: u8,
}

impl Groups {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    pub fn get(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id)
    }

    /// The group owning the stone at `point`, if any.
    pub fn owner_of(&self, (x, y): Point) -> Option<GroupId> {
        if x < 1 || y < 1 || x > self.size || y > self.size {
            return None;
        }
        self.owner[(y as usize - 1) * self.size as usize + (x as usize - 1)]
    }

    pub fn group_at(&self, point: Point) -> Option<&Group> {
        self.owner_of(point).map(|id| &self.groups[id])
    }

    pub(crate) fn groups_mut(&mut self) -> &mut [Group] {
        &mut self.groups
    }

    /// Keep only the groups matching `keep`, renumbering the survivors and their annotations.
    pub(crate) fn retain(&mut self, keep: impl FnMut(&Group) -> bool) {
        self.groups.retain(keep);
        self.owner.iter_mut().for_each(|o| *o = None);
        let size = self.size as usize;
        for (id, group) in self.groups.iter().enumerate() {
            for &(x, y) in &group.stones {
                self.owner[(y as usize - 1) * size + (x as usize - 1)] = Some(id);
            }
        }
    }
}

impl<'a> IntoIterator for &'a Groups {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Partition every stone on the grid into groups.
///
/// Cells are scanned in the grid's fixed order; each unowned stone seeds a new
/// group which is flood-filled with an explicit stack. Liberties are left empty.
pub fn find_groups(grid: &Grid) -> Groups {
    let mut owner: Vec<Option<GroupId>> = vec![None; grid.cells().len()];
    let mut groups = Vec::new();

    for seed in grid.points() {
        let Some(stone) = grid.stone_at(seed) else {
            continue;
        };
        if owner[grid.idx(seed)].is_some() {
            continue;
        }

        let id = groups.len();
        let mut stones = Vec::new();
        let mut stack = vec![seed];
        owner[grid.idx(seed)] = Some(id);

        while let Some(p) = stack.pop() {
            stones.push(p);
            for n in grid.neighbors(p) {
                let ni = grid.idx(n);
                if owner[ni].is_none() && grid.stone_at(n) == Some(stone) {
                    owner[ni] = Some(id);
                    stack.push(n);
                }
            }
        }

        groups.push(Group {
            stone,
            stones,
            liberties: Vec::new(),
        });
    }

    Groups {
        groups,
        owner,
        size: grid.size(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::grid_from_layout;

    fn assert_partition(grid: &Grid, groups: &Groups) {
        let mut seen = vec![0usize; grid.cells().len()];
        for group in groups {
            for &p in &group.stones {
                assert_eq!(grid.stone_at(p), Some(group.stone));
                seen[grid.idx(p)] += 1;
            }
        }
        for p in grid.points() {
            let expected = usize::from(grid.stone_at(p).is_some());
            assert_eq!(seen[grid.idx(p)], expected, "point {p:?}");
        }
    }

    #[test]
    fn empty_grid_has_no_groups() {
        let grid = Grid::new(9).unwrap();
        let groups = find_groups(&grid);
        assert!(groups.is_empty());
        assert_eq!(groups.owner_of((1, 1)), None);
    }

    #[test]
    fn connects_orthogonal_stones_only() {
        let grid = grid_from_layout(&["XX..", ".X..", "..X.", "...."]);
        let groups = find_groups(&grid);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.group_at((1, 1)).unwrap().len(), 3);
        assert_eq!(groups.group_at((3, 3)).unwrap().len(), 1);
        assert_ne!(groups.owner_of((2, 2)), groups.owner_of((3, 3)));
        assert_partition(&grid, &groups);
    }

    #[test]
    fn separates_colors() {
        let grid = grid_from_layout(&["XO.", "XO.", "..."]);
        let groups = find_groups(&grid);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.group_at((1, 2)).unwrap().stone, Stone::Black);
        assert_eq!(groups.group_at((2, 1)).unwrap().stone, Stone::White);
        assert_partition(&grid, &groups);
    }

    #[test]
    fn edges_do_not_wrap() {
        let grid = grid_from_layout(&["X..X", "....", "....", "X..X"]);
        let groups = find_groups(&grid);
        assert_eq!(groups.len(), 4);
        assert!(groups.iter().all(|g| g.len() == 1));
    }

    #[test]
    fn discovery_follows_scan_order() {
        let grid = grid_from_layout(&["..O", "X..", "..."]);
        let groups = find_groups(&grid);
        assert_eq!(groups.get(0).unwrap().stones, vec![(3, 1)]);
        assert_eq!(groups.get(1).unwrap().stones, vec![(1, 2)]);
    }

    #[test]
    fn large_snake_fills_iteratively() {
        let size = 19u8;
        let mut grid = Grid::new(size).unwrap();
        for y in 1..=size {
            for x in 1..=size {
                // full odd rows joined alternately at either end
                let gap = if y % 4 == 2 { size } else { 1 };
                if y % 2 == 1 || x == gap {
                    grid.place_stone((x, y), Stone::Black, 0).unwrap();
                }
            }
        }
        let groups = find_groups(&grid);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.get(0).unwrap().len(), grid.stone_count());
        assert_partition(&grid, &groups);
    }

    #[test]
    fn retain_renumbers_owners() {
        let grid = grid_from_layout(&["X.O", "...", "O.X"]);
        let mut groups = find_groups(&grid);
        assert_eq!(groups.len(), 4);

        groups.retain(|g| g.stone == Stone::White);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.owner_of((1, 1)), None);
        assert_eq!(groups.owner_of((3, 1)), Some(0));
        assert_eq!(groups.owner_of((1, 3)), Some(1));
    }
}
