pub mod capture;
pub mod error;
pub mod grid;
pub mod group;
pub mod liberty;
pub mod move_tree;
pub mod session;
pub mod snapshot;
pub mod stone;
pub mod store;
pub mod turn;

/// Board coordinate `(x, y)`, 1-indexed on both axes.
pub type Point = (u8, u8);

pub use capture::resolve_captures;
pub use error::{GoError, StoreError};
pub use grid::{Cell, Grid};
pub use group::{Group, GroupId, Groups, find_groups};
pub use liberty::count_liberties;
pub use move_tree::MoveTree;
pub use session::Session;
pub use snapshot::{Snapshot, SnapshotId};
pub use stone::Stone;
pub use store::{FORMAT_VERSION, SavedSession};
pub use turn::Turn;
