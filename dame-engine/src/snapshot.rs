use crate::Point;
use crate::capture::resolve_captures;
use crate::error::GoError;
use crate::grid::Grid;
use crate::group::{Group, Groups, find_groups};
use crate::liberty::count_liberties;
use crate::turn::Turn;

pub type SnapshotId = usize;

/// One fully resolved board state in the move tree.
///
/// Everything but the child list is fixed once the snapshot is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    grid: Grid,
    groups: Groups,
    move_index: u32,
    turn: Option<Turn>,
    parent: Option<SnapshotId>,
    children: Vec<SnapshotId>,
}

impl Snapshot {
    /// The empty starting position.
    pub(crate) fn root(size: u8) -> Result<Self, GoError> {
        let grid = Grid::new(size)?;
        let groups = find_groups(&grid);
        Ok(Snapshot {
            grid,
            groups,
            move_index: 0,
            turn: None,
            parent: None,
            children: Vec::new(),
        })
    }

    /// Apply `turn` on top of this snapshot (whose id is `id`).
    ///
    /// Places the stone on a derived grid, then finds groups, counts liberties
    /// and resolves captures. Returns the captured points alongside the new
    /// snapshot; `self` is left untouched on failure.
    pub(crate) fn play(&self, id: SnapshotId, turn: Turn) -> Result<(Snapshot, Vec<Point>), GoError> {
        let move_index = self.move_index + 1;
        let mut grid = Grid::derive(&self.grid);
        grid.place_stone(turn.point, turn.stone, move_index)?;

        let mut groups = find_groups(&grid);
        count_liberties(&grid, &mut groups);
        let captured = resolve_captures(&mut grid, &mut groups);

        let snapshot = Snapshot {
            grid,
            groups,
            move_index,
            turn: Some(turn),
            parent: Some(id),
            children: Vec::new(),
        };
        Ok((snapshot, captured))
    }

    /// Rebuild a stored snapshot, recomputing its groups from the grid.
    pub(crate) fn from_parts(
        grid: Grid,
        move_index: u32,
        turn: Option<Turn>,
        parent: Option<SnapshotId>,
        children: Vec<SnapshotId>,
    ) -> Self {
        let mut groups = find_groups(&grid);
        count_liberties(&grid, &mut groups);
        Snapshot {
            grid,
            groups,
            move_index,
            turn,
            parent,
            children,
        }
    }

    pub(crate) fn push_child(&mut self, id: SnapshotId) {
        self.children.push(id);
    }

    // -- Accessors --

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> u8 {
        self.grid.size()
    }

    pub fn groups(&self) -> &Groups {
        &self.groups
    }

    /// The group of the stone at `point`, with its liberties.
    pub fn group_at(&self, point: Point) -> Option<&Group> {
        self.groups.group_at(point)
    }

    pub fn move_index(&self) -> u32 {
        self.move_index
    }

    /// The move that produced this snapshot. `None` for the root.
    pub fn turn(&self) -> Option<&Turn> {
        self.turn.as_ref()
    }

    pub fn move_point(&self) -> Option<Point> {
        self.turn.map(|t| t.point)
    }

    pub fn parent(&self) -> Option<SnapshotId> {
        self.parent
    }

    pub fn children(&self) -> &[SnapshotId] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
