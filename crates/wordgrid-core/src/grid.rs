/// A rectangular grid of single letters, stored row-major.
///
/// Cells are addressed either by linear index (`y * width + x`) or by
/// `(x, y)` coordinates; conversion helpers bridge the two. A cell is
/// either empty or holds one character. All accessors are total:
/// out-of-range reads return `None` and out-of-range writes are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    width: usize,
    height: usize,
    cells: Vec<Option<char>>,
}

impl LetterGrid {
    /// Create an empty grid of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Build a grid from equal-length row strings.
    ///
    /// Returns `None` if the rows are ragged or there are none.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.chars().count();
        if width == 0 || rows.iter().any(|r| r.chars().count() != width) {
            return None;
        }
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                grid.set_at(x, y, Some(ch));
            }
        }
        Some(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The letter at a linear index, if the index is in bounds and the
    /// cell is filled.
    pub fn get(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    /// Set or clear the cell at a linear index. Out-of-range writes are
    /// silently dropped.
    pub fn set(&mut self, index: usize, letter: Option<char>) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = letter;
        }
    }

    /// The letter at `(x, y)`.
    pub fn get_at(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.get(self.index_of(x, y))
    }

    /// Set or clear the cell at `(x, y)`.
    pub fn set_at(&mut self, x: usize, y: usize, letter: Option<char>) {
        if x < self.width && y < self.height {
            self.set(self.index_of(x, y), letter);
        }
    }

    /// Convert coordinates to a linear index.
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Convert a linear index to `(x, y)` coordinates.
    pub fn coords_of(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Whether every cell holds a letter.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// The in-bounds Moore neighbors of a cell, clockwise from north:
    /// N, NE, E, SE, S, SW, W, NW. At most 8; fewer at edges and corners.
    ///
    /// The order is fixed so that word discovery enumerates occurrences
    /// deterministically.
    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        let (x, y) = self.coords_of(index);
        let mut out = Vec::with_capacity(8);
        let up = y > 0;
        let down = y + 1 < self.height;
        let left = x > 0;
        let right = x + 1 < self.width;

        if up {
            out.push(self.index_of(x, y - 1));
        }
        if right && up {
            out.push(self.index_of(x + 1, y - 1));
        }
        if right {
            out.push(self.index_of(x + 1, y));
        }
        if right && down {
            out.push(self.index_of(x + 1, y + 1));
        }
        if down {
            out.push(self.index_of(x, y + 1));
        }
        if left && down {
            out.push(self.index_of(x - 1, y + 1));
        }
        if left {
            out.push(self.index_of(x - 1, y));
        }
        if left && up {
            out.push(self.index_of(x - 1, y - 1));
        }
        out
    }
}
