//! Analysis engine - scans, adjacency and connectivity

use std::collections::{HashSet, VecDeque};

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{Cell, Coordinate, Vector};

/// Orthogonal neighbor offsets
const ORTHOGONAL: [Vector; 4] = [Vector::UP, Vector::RIGHT, Vector::DOWN, Vector::LEFT];

/// Diagonal neighbor offsets
const DIAGONAL: [Vector; 4] = [
    Vector::new(-1, -1),
    Vector::new(1, -1),
    Vector::new(1, 1),
    Vector::new(-1, 1),
];

impl Grid {
    /// Indices of full rows, ascending
    pub fn full_rows(&self) -> Vec<usize> {
        (0..self.height() as usize)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Indices of full columns, ascending
    pub fn full_columns(&self) -> Vec<usize> {
        (0..self.width() as usize)
            .filter(|&x| self.is_column_full(x))
            .collect()
    }

    /// In-bounds neighbor cells of `c`: up, right, down, left, then the four
    /// diagonals when requested. Out-of-bounds positions are skipped.
    pub fn neighbors(&self, c: Coordinate, include_diagonal: bool) -> ArrayVec<Cell, 8> {
        let diagonals: &[Vector] = if include_diagonal { &DIAGONAL } else { &[] };
        ORTHOGONAL
            .iter()
            .chain(diagonals)
            .filter_map(|&offset| self.get_cell(c.checked_add(offset)?))
            .collect()
    }

    /// Breadth-first search from `start` over orthogonally adjacent active
    /// cells sharing the start cell's value. Includes the start cell; empty
    /// if the start is inactive or out of bounds.
    pub fn find_connected_cells(&self, start: Coordinate) -> Vec<Cell> {
        let Some(origin) = self.get_cell(start).filter(|cell| cell.is_active()) else {
            return Vec::new();
        };

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        let mut group = Vec::new();
        visited.insert(start);
        queue.push_back(origin);

        while let Some(cell) = queue.pop_front() {
            group.push(cell);
            for next in self.neighbors(cell.coordinate, false) {
                if next.value == origin.value && visited.insert(next.coordinate) {
                    queue.push_back(next);
                }
            }
        }
        group
    }

    /// Every maximal same-value connected group of active cells, in
    /// row-major order of each group's first cell
    pub fn connected_groups(&self) -> Vec<Vec<Cell>> {
        let mut seen = vec![false; self.len()];
        let mut groups = Vec::new();
        for (idx, cell) in self.cells.iter().enumerate() {
            if seen[idx] || cell.is_inactive() {
                continue;
            }
            let group = self.find_connected_cells(cell.coordinate);
            for member in &group {
                if let Some(i) = self.index(member.coordinate) {
                    seen[i] = true;
                }
            }
            groups.push(group);
        }
        groups
    }

    /// Rows from the topmost active cell of column `x` down to the floor;
    /// 0 for an empty or out-of-range column
    pub fn column_height(&self, x: usize) -> usize {
        let height = self.height() as usize;
        (0..height)
            .find(|&y| self.is_active(Coordinate::new(x as i32, y as i32)))
            .map_or(0, |top| height - top)
    }

    /// Exchange value and color of two cells. Both are read before either is
    /// written. Returns false (and changes nothing) if either is out of
    /// bounds.
    pub fn swap_cells(&mut self, a: Coordinate, b: Coordinate) -> bool {
        let (Some(first), Some(second)) = (self.get_cell(a), self.get_cell(b)) else {
            return false;
        };
        self.stamp_cell(&second.at(a));
        self.stamp_cell(&first.at(b));
        true
    }
}
