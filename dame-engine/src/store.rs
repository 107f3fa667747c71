//! Save and load of a whole session.
//!
//! The move tree is written as a flat, versioned list of snapshot records in
//! arena order (root first). Groups are not stored; they are recomputed from
//! each grid on load.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::grid::{Cell, Grid};
use crate::move_tree::MoveTree;
use crate::session::Session;
use crate::snapshot::{Snapshot, SnapshotId};
use crate::turn::Turn;

/// Current save format version.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSession {
    pub version: u32,
    pub size: u8,
    pub cursor: SnapshotId,
    pub latest: SnapshotId,
    pub snapshots: Vec<SavedSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSnapshot {
    pub move_index: u32,
    pub turn: Option<Turn>,
    pub parent: Option<SnapshotId>,
    pub children: Vec<SnapshotId>,
    pub cells: Vec<Cell>,
}

impl SavedSession {
    pub fn from_session(session: &Session) -> Self {
        let tree = session.tree();
        SavedSession {
            version: FORMAT_VERSION,
            size: tree.size(),
            cursor: session.current_id(),
            latest: session.latest_id(),
            snapshots: tree
                .nodes()
                .iter()
                .map(|s| SavedSnapshot {
                    move_index: s.move_index(),
                    turn: s.turn().copied(),
                    parent: s.parent(),
                    children: s.children().to_vec(),
                    cells: s.grid().cells().to_vec(),
                })
                .collect(),
        }
    }

    /// Validate the records and rebuild the session.
    pub fn into_session(self) -> Result<Session, StoreError> {
        if self.version != FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion(self.version));
        }
        if self.size == 0 {
            return Err(corrupt("board size is zero"));
        }
        let len = self.snapshots.len();
        if len == 0 {
            return Err(corrupt("no snapshots"));
        }
        if self.cursor >= len || self.latest >= len {
            return Err(corrupt("cursor outside the tree"));
        }

        let mut child_links = 0;
        for (id, record) in self.snapshots.iter().enumerate() {
            match (id, record.parent) {
                (0, None) => {
                    if record.move_index != 0 || record.turn.is_some() {
                        return Err(corrupt("root must be the empty starting position"));
                    }
                }
                (0, Some(_)) => return Err(corrupt("root has a parent")),
                (_, None) => return Err(corrupt(format!("snapshot {id} has no parent"))),
                (_, Some(pid)) => {
                    // Parents precede their children in arena order, so this also rules out cycles.
                    if pid >= id {
                        return Err(corrupt(format!("snapshot {id} has parent {pid} after it")));
                    }
                    let parent = &self.snapshots[pid];
                    if !parent.children.contains(&id) {
                        return Err(corrupt(format!("snapshot {pid} does not list child {id}")));
                    }
                    if record.turn.is_none() || parent.move_index.checked_add(1) != Some(record.move_index) {
                        return Err(corrupt(format!("snapshot {id} has an inconsistent move")));
                    }
                }
            }
            for &child in &record.children {
                if child >= len || self.snapshots[child].parent != Some(id) {
                    return Err(corrupt(format!("snapshot {id} lists foreign child {child}")));
                }
            }
            child_links += record.children.len();
        }
        if child_links != len - 1 {
            return Err(corrupt("duplicate child links"));
        }

        let mut nodes = Vec::with_capacity(len);
        for (id, record) in self.snapshots.into_iter().enumerate() {
            let grid = Grid::from_cells(self.size, record.cells)
                .ok_or_else(|| corrupt(format!("snapshot {id} has a malformed grid")))?;
            let snapshot =
                Snapshot::from_parts(grid, record.move_index, record.turn, record.parent, record.children);
            if snapshot.groups().iter().any(|g| g.liberty_count() == 0) {
                return Err(corrupt(format!("snapshot {id} holds a group without liberties")));
            }
            nodes.push(snapshot);
        }

        Ok(Session::from_parts(
            MoveTree::from_nodes(nodes),
            self.cursor,
            self.latest,
        ))
    }
}

fn corrupt(msg: impl Into<String>) -> StoreError {
    StoreError::Corrupt(msg.into())
}

impl Session {
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(&SavedSession::from_session(self))?)
    }

    pub fn from_json(json: &str) -> Result<Session, StoreError> {
        let saved: SavedSession = serde_json::from_str(json)?;
        saved.into_session()
    }

    /// Write the whole tree and cursor to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let saved = SavedSession::from_session(self);
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, &saved)?;
        writer.flush()?;

        tracing::info!(path = %path.display(), snapshots = saved.snapshots.len(), "session saved");
        Ok(())
    }

    /// Read a session previously written by `save`.
    pub fn load(path: impl AsRef<Path>) -> Result<Session, StoreError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let saved: SavedSession = serde_json::from_reader(reader)?;
        let session = saved
            .into_session()
            .inspect_err(|e| tracing::warn!(path = %path.display(), "rejected save file: {e}"))?;

        tracing::info!(path = %path.display(), snapshots = session.tree().len(), "session loaded");
        Ok(session)
    }
}
