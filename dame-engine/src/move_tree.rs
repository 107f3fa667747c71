use crate::error::GoError;
use crate::snapshot::{Snapshot, SnapshotId};
use crate::turn::Turn;

/// Arena of snapshots linked by parent and child indices. The root is always id 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTree {
    nodes: Vec<Snapshot>,
}

impl MoveTree {
    pub const ROOT: SnapshotId = 0;

    pub fn new(size: u8) -> Result<Self, GoError> {
        Ok(Self {
            nodes: vec![Snapshot::root(size)?],
        })
    }

    /// Wrap already validated nodes.
    pub(crate) fn from_nodes(nodes: Vec<Snapshot>) -> Self {
        debug_assert!(nodes.first().is_some_and(Snapshot::is_root));
        Self { nodes }
    }

    /// Attach a snapshot under its parent and return its id.
    pub(crate) fn add_child(&mut self, snapshot: Snapshot) -> SnapshotId {
        let id = self.nodes.len();
        let parent = snapshot.parent();
        self.nodes.push(snapshot);
        if let Some(pid) = parent {
            self.nodes[pid].push_child(id);
        }
        id
    }

    /// The child of `parent` reached by `turn`, if that move was already played there.
    pub fn find_child(&self, parent: SnapshotId, turn: &Turn) -> Option<SnapshotId> {
        self.children_of(parent)
            .iter()
            .copied()
            .find(|&c| self.nodes[c].turn() == Some(turn))
    }

    /// Walk parent links from node to root, return path (root-first order).
    pub fn path_to(&self, id: SnapshotId) -> Vec<SnapshotId> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(id) = current {
            path.push(id);
            current = self.nodes[id].parent();
        }
        path.reverse();
        path
    }

    /// The sequence of moves from the root to the given node.
    pub fn moves_to(&self, id: SnapshotId) -> Vec<Turn> {
        self.path_to(id)
            .iter()
            .filter_map(|&id| self.nodes[id].turn().copied())
            .collect()
    }

    pub fn root(&self) -> &Snapshot {
        &self.nodes[Self::ROOT]
    }

    pub fn size(&self) -> u8 {
        self.root().size()
    }

    pub fn node(&self, id: SnapshotId) -> &Snapshot {
        &self.nodes[id]
    }

    pub fn get(&self, id: SnapshotId) -> Option<&Snapshot> {
        self.nodes.get(id)
    }

    pub fn children_of(&self, id: SnapshotId) -> &[SnapshotId] {
        self.nodes[id].children()
    }

    pub fn parent_of(&self, id: SnapshotId) -> Option<SnapshotId> {
        self.nodes[id].parent()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Snapshot] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stone::Stone;

    fn play(tree: &mut MoveTree, parent: SnapshotId, turn: Turn) -> SnapshotId {
        let (snapshot, _) = tree.node(parent).play(parent, turn).unwrap();
        tree.add_child(snapshot)
    }

    #[test]
    fn new_tree_has_root_only() {
        let tree = MoveTree::new(9).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.root().is_root());
        assert!(tree.children_of(MoveTree::ROOT).is_empty());
        assert_eq!(tree.size(), 9);
    }

    #[test]
    fn linear_line() {
        let mut tree = MoveTree::new(9).unwrap();
        let moves = [
            Turn::play(Stone::Black, (1, 1)),
            Turn::play(Stone::White, (2, 1)),
            Turn::play(Stone::Black, (3, 1)),
        ];
        let mut current = MoveTree::ROOT;
        for turn in moves {
            current = play(&mut tree, current, turn);
        }

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.path_to(current), vec![0, 1, 2, 3]);
        assert_eq!(tree.moves_to(current), moves.to_vec());
        assert_eq!(tree.node(current).move_index(), 3);
        assert!(tree.moves_to(MoveTree::ROOT).is_empty());
    }

    #[test]
    fn branching() {
        let mut tree = MoveTree::new(9).unwrap();
        let a = play(&mut tree, MoveTree::ROOT, Turn::play(Stone::Black, (1, 1)));
        let b = play(&mut tree, a, Turn::play(Stone::White, (2, 1)));
        let c = play(&mut tree, a, Turn::play(Stone::White, (3, 1)));

        assert_eq!(tree.children_of(a), &[b, c]);
        assert_eq!(tree.parent_of(b), Some(a));
        assert_eq!(tree.parent_of(c), Some(a));
        assert_eq!(tree.moves_to(b)[1], Turn::play(Stone::White, (2, 1)));
        assert_eq!(tree.moves_to(c)[1], Turn::play(Stone::White, (3, 1)));
    }

    #[test]
    fn find_child_matches_whole_turn() {
        let mut tree = MoveTree::new(9).unwrap();
        let a = play(&mut tree, MoveTree::ROOT, Turn::play(Stone::Black, (4, 4)));

        assert_eq!(
            tree.find_child(MoveTree::ROOT, &Turn::play(Stone::Black, (4, 4))),
            Some(a)
        );
        assert_eq!(
            tree.find_child(MoveTree::ROOT, &Turn::play(Stone::White, (4, 4))),
            None
        );
        assert_eq!(tree.find_child(a, &Turn::play(Stone::Black, (4, 4))), None);
    }

    #[test]
    fn get_out_of_range() {
        let tree = MoveTree::new(3).unwrap();
        assert!(tree.get(0).is_some());
        assert!(tree.get(1).is_none());
    }
}
