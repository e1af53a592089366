//! Board geometry for the 10x10 hunt grid.
//!
//! Cells are indexed `0..100`, row-major: cell `i` sits at row `i / 10`,
//! column `i % 10`. Adjacency is four-connected and never wraps across an
//! edge, so 9 and 10 are not neighbours.

pub const GRID_WIDTH: u32 = 10;
pub const GRID_CELLS: u32 = GRID_WIDTH * GRID_WIDTH;

pub fn in_bounds(cell: u32) -> bool {
    cell < GRID_CELLS
}

pub fn row(cell: u32) -> u32 {
    cell / GRID_WIDTH
}

pub fn col(cell: u32) -> u32 {
    cell % GRID_WIDTH
}

/// True iff `a` and `b` share a grid edge.
pub fn is_adjacent(a: u32, b: u32) -> bool {
    in_bounds(a) && in_bounds(b) && Neighbors::of(a).contains(b)
}

/// In-bounds neighbours of a cell, ordered up, left, right, down.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Neighbors {
    cells: [u32; 4],
    len: u32,
}

impl Neighbors {
    /// Neighbours of `cell`. An out-of-range origin is clamped to the last cell.
    pub fn of(cell: u32) -> Self {
        let cell = cell.min(GRID_CELLS - 1);
        let mut out = Self { cells: [0; 4], len: 0 };
        if row(cell) > 0 {
            out.push(cell - GRID_WIDTH);
        }
        if col(cell) > 0 {
            out.push(cell - 1);
        }
        if col(cell) < GRID_WIDTH - 1 {
            out.push(cell + 1);
        }
        if row(cell) < GRID_WIDTH - 1 {
            out.push(cell + GRID_WIDTH);
        }
        out
    }

    fn push(&mut self, cell: u32) {
        self.cells[self.len as usize] = cell;
        self.len += 1;
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: u32) -> Option<u32> {
        if index < self.len {
            Some(self.cells[index as usize])
        } else {
            None
        }
    }

    pub fn contains(&self, cell: u32) -> bool {
        self.iter().any(|c| c == cell)
    }

    /// Same list with `cell` dropped (order preserved).
    pub fn without(&self, cell: u32) -> Self {
        let mut out = Self { cells: [0; 4], len: 0 };
        for c in self.iter().filter(|c| *c != cell) {
            out.push(c);
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells[..self.len as usize].iter().copied()
    }
}

pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

// Cell 0 counts.
pub fn is_multiple_of_five(n: u32) -> bool {
    n % 5 == 0
}
