use crate::Point;
use crate::error::GoError;
use crate::grid::Grid;
use crate::move_tree::MoveTree;
use crate::snapshot::{Snapshot, SnapshotId};
use crate::stone::Stone;
use crate::turn::Turn;

/// A move tree with a navigation cursor.
///
/// Moves always extend the tree from the cursor; undo and redo only move the
/// cursor. Nothing is ever removed from the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    tree: MoveTree,
    cursor: SnapshotId,
    /// Most recently created snapshot.
    latest: SnapshotId,
}

impl Session {
    pub fn new(size: u8) -> Result<Self, GoError> {
        Ok(Self {
            tree: MoveTree::new(size)?,
            cursor: MoveTree::ROOT,
            latest: MoveTree::ROOT,
        })
    }

    /// Reassemble a session from a validated tree.
    pub(crate) fn from_parts(tree: MoveTree, cursor: SnapshotId, latest: SnapshotId) -> Self {
        debug_assert!(cursor < tree.len() && latest < tree.len());
        Self {
            tree,
            cursor,
            latest,
        }
    }

    // -- Accessors --

    pub fn tree(&self) -> &MoveTree {
        &self.tree
    }

    pub fn size(&self) -> u8 {
        self.tree.size()
    }

    pub fn current_id(&self) -> SnapshotId {
        self.cursor
    }

    pub fn current(&self) -> &Snapshot {
        self.tree.node(self.cursor)
    }

    pub fn latest_id(&self) -> SnapshotId {
        self.latest
    }

    pub fn grid(&self) -> &Grid {
        self.current().grid()
    }

    pub fn move_index(&self) -> u32 {
        self.current().move_index()
    }

    pub fn last_move(&self) -> Option<&Turn> {
        self.current().turn()
    }

    pub fn is_at_start(&self) -> bool {
        self.cursor == MoveTree::ROOT
    }

    pub fn is_at_leaf(&self) -> bool {
        self.current().is_leaf()
    }

    /// Moves from the root to the cursor.
    pub fn moves(&self) -> Vec<Turn> {
        self.tree.moves_to(self.cursor)
    }

    // -- Game actions --

    /// Play `stone` at `(x, y)` from the cursor and advance to the result.
    ///
    /// Replaying a move that already exists below the cursor reuses that child.
    /// On error neither the tree nor the cursor changes.
    pub fn make_move(&mut self, x: u8, y: u8, stone: Stone) -> Result<SnapshotId, GoError> {
        let turn = Turn::play(stone, (x, y));

        if let Some(existing) = self.tree.find_child(self.cursor, &turn) {
            tracing::debug!(%turn, snapshot = existing, "move already in tree");
            self.cursor = existing;
            return Ok(existing);
        }

        let (snapshot, captured) = self.current().play(self.cursor, turn)?;
        let move_index = snapshot.move_index();
        let id = self.tree.add_child(snapshot);
        self.cursor = id;
        self.latest = id;

        tracing::debug!(
            %turn,
            move_index,
            snapshot = id,
            captured = captured.len(),
            "move played"
        );
        Ok(id)
    }

    /// Step back to the parent. Returns false at the root.
    pub fn undo(&mut self) -> bool {
        match self.current().parent() {
            Some(parent) => {
                tracing::debug!(from = self.cursor, to = parent, "undo");
                self.cursor = parent;
                true
            }
            None => false,
        }
    }

    /// Step forward to a child.
    ///
    /// With a single child the target is ignored. With several children the
    /// target point picks the branch; a missing or unmatched target is `NoBranch`.
    pub fn redo(&mut self, target: Option<Point>) -> Result<SnapshotId, GoError> {
        let children = self.tree.children_of(self.cursor);
        let next = match children {
            [] => None,
            [only] => Some(*only),
            _ => target.and_then(|point| {
                children
                    .iter()
                    .copied()
                    .find(|&c| self.tree.node(c).move_point() == Some(point))
            }),
        };

        let next = next.ok_or(GoError::NoBranch)?;
        tracing::debug!(from = self.cursor, to = next, "redo");
        self.cursor = next;
        Ok(next)
    }

    // -- Navigation --

    /// Jump to the empty starting position.
    pub fn to_start(&mut self) {
        self.cursor = MoveTree::ROOT;
    }

    /// Jump to the most recently created snapshot.
    pub fn to_latest(&mut self) {
        self.cursor = self.latest;
    }

    /// Jump to any snapshot in the tree. Returns false for an unknown id.
    pub fn navigate_to(&mut self, id: SnapshotId) -> bool {
        if id < self.tree.len() {
            self.cursor = id;
            true
        } else {
            false
        }
    }
}
