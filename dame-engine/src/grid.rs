use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::GoError;
use crate::stone::Stone;

/// State of a single intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Empty,
    /// A stone together with the move index it was placed on.
    Stone { stone: Stone, placed_on: u32 },
}

impl Cell {
    pub fn stone(&self) -> Option<Stone> {
        match self {
            Cell::Empty => None,
            Cell::Stone { stone, .. } => Some(*stone),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A square board stored as a flat row-major array.
///
/// Points are `(x, y)` and 1-indexed on both axes. Every scan over the board
/// walks `y` from 1 to `size` and, within a row, `x` from 1 to `size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    size: u8,
}

impl Grid {
    /// Create an all-empty grid. Fails for a zero size.
    pub fn new(size: u8) -> Result<Self, GoError> {
        if size == 0 {
            return Err(GoError::InvalidSize);
        }
        Ok(Grid {
            cells: vec![Cell::Empty; size as usize * size as usize],
            size,
        })
    }

    /// Copy every cell of `parent` into a new grid.
    pub fn derive(parent: &Grid) -> Self {
        Grid {
            cells: parent.cells.clone(),
            size: parent.size,
        }
    }

    /// Rebuild a grid from raw cells. Returns `None` if the cell count doesn't match the size.
    pub(crate) fn from_cells(size: u8, cells: Vec<Cell>) -> Option<Self> {
        if size == 0 || cells.len() != size as usize * size as usize {
            return None;
        }
        Some(Grid { cells, size })
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell_at(&self, point: Point) -> Option<Cell> {
        if self.on_board(point) {
            Some(self.cells[self.idx(point)])
        } else {
            None
        }
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.cell_at(point).and_then(|c| c.stone())
    }

    pub fn on_board(&self, (x, y): Point) -> bool {
        x >= 1 && y >= 1 && x <= self.size && y <= self.size
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// All points in scan order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (1..=self.size).flat_map(move |y| (1..=self.size).map(move |x| (x, y)))
    }

    // -- Mutation --

    /// Write a stone into an empty cell. Knows nothing about groups.
    pub fn place_stone(&mut self, point: Point, stone: Stone, move_index: u32) -> Result<(), GoError> {
        if !self.on_board(point) {
            return Err(GoError::OutOfBounds);
        }
        let i = self.idx(point);
        if !self.cells[i].is_empty() {
            return Err(GoError::OccupiedCell);
        }
        self.cells[i] = Cell::Stone {
            stone,
            placed_on: move_index,
        };
        Ok(())
    }

    pub(crate) fn clear(&mut self, point: Point) {
        if self.on_board(point) {
            let i = self.idx(point);
            self.cells[i] = Cell::Empty;
        }
    }

    /// The 4-connected neighbors that are on the board. Edges don't wrap.
    pub fn neighbors(&self, (x, y): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if x > 1 {
            result.push((x - 1, y));
        }
        if x < self.size {
            result.push((x + 1, y));
        }
        if y > 1 {
            result.push((x, y - 1));
        }
        if y < self.size {
            result.push((x, y + 1));
        }
        result
    }

    /// Flat index of an on-board point.
    #[inline]
    pub(crate) fn idx(&self, (x, y): Point) -> usize {
        (y as usize - 1) * self.size as usize + (x as usize - 1)
    }
}

/// One line per row, each cell a space followed by `.`, `X` or `O`.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 1..=self.size {
            if y > 1 {
                writeln!(f)?;
            }
            for x in 1..=self.size {
                let glyph = self.stone_at((x, y)).map_or('.', Stone::glyph);
                write!(f, " {glyph}")?;
            }
        }
        Ok(())
    }
}

/// Test helper: build a grid from rows of `X` (black), `O` (white) and `.` (empty).
#[cfg(test)]
pub(crate) fn grid_from_layout(layout: &[&str]) -> Grid {
    let size = layout.len() as u8;
    let mut grid = Grid::new(size).unwrap();
    for (y, row) in layout.iter().enumerate() {
        assert_eq!(row.len(), size as usize, "layout must be square");
        for (x, c) in row.chars().enumerate() {
            let stone = match c {
                'X' => Stone::Black,
                'O' => Stone::White,
                _ => continue,
            };
            grid.place_stone((x as u8 + 1, y as u8 + 1), stone, 0).unwrap();
        }
    }
    grid
}
