//! Row-major cell storage with line-window scanning

use super::Cell;

/// Direction vectors for line scanning (4 directions).
/// Each line is visited once, from its lowest/leftmost end.
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal up-right
    (1, -1), // Diagonal up-left
];

/// Mark counts inside one window of consecutive cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineCounts {
    pub empty: usize,
    pub x: usize,
    pub o: usize,
}

impl LineCounts {
    #[inline]
    fn add(&mut self, cell: Cell) {
        match cell {
            Cell::Empty => self.empty += 1,
            Cell::X => self.x += 1,
            Cell::O => self.o += 1,
        }
    }

    /// Number of cells in the window holding `cell`
    #[inline]
    pub fn count(&self, cell: Cell) -> usize {
        match cell {
            Cell::Empty => self.empty,
            Cell::X => self.x,
            Cell::O => self.o,
        }
    }

    /// The player owning every cell of a window of `len` cells, if any
    #[inline]
    pub fn owner(&self, len: usize) -> Option<Cell> {
        if self.x == len {
            Some(Cell::X)
        } else if self.o == len {
            Some(Cell::O)
        } else {
            None
        }
    }
}

/// Rectangular grid of cells. Row 0 is the bottom row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Total stones on the grid
    #[cfg(test)]
    pub(crate) fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Number of length-`len` windows a `rows` x `cols` grid holds across all
    /// four directions.
    pub fn window_count(rows: usize, cols: usize, len: usize) -> usize {
        let span = |n: usize| (n + 1).saturating_sub(len);
        let (r, c) = (span(rows), span(cols));
        rows * c + cols * r + 2 * r * c
    }

    /// Iterate over every window of `len` consecutive cells in all four
    /// directions, yielding the mark counts of each.
    pub fn windows(&self, len: usize) -> impl Iterator<Item = LineCounts> + '_ {
        DIRECTIONS.into_iter().flat_map(move |(dr, dc)| {
            (0..self.rows).flat_map(move |row| {
                (0..self.cols).filter_map(move |col| self.count_window(row, col, dr, dc, len))
            })
        })
    }

    /// Counts for the window starting at (row, col), or None if it runs off the grid
    fn count_window(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
        len: usize,
    ) -> Option<LineCounts> {
        let reach = len as isize - 1;
        let end_row = row as isize + dr * reach;
        let end_col = col as isize + dc * reach;
        if end_row < 0
            || end_row >= self.rows as isize
            || end_col < 0
            || end_col >= self.cols as isize
        {
            return None;
        }

        let mut counts = LineCounts::default();
        for i in 0..len as isize {
            let r = (row as isize + dr * i) as usize;
            let c = (col as isize + dc * i) as usize;
            counts.add(self.get(r, c));
        }
        Some(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_count_connect_four() {
        // 24 horizontal + 21 vertical + 12 per diagonal direction
        assert_eq!(Grid::window_count(6, 7, 4), 69);
        assert_eq!(Grid::new(6, 7).windows(4).count(), 69);
    }

    #[test]
    fn test_window_count_tictactoe() {
        assert_eq!(Grid::window_count(3, 3, 3), 8);
        assert_eq!(Grid::new(3, 3).windows(3).count(), 8);
    }

    #[test]
    fn test_window_count_line_longer_than_rows() {
        // Only horizontal windows fit
        assert_eq!(Grid::window_count(2, 5, 4), 4);
        assert_eq!(Grid::new(2, 5).windows(4).count(), 4);
    }

    #[test]
    fn test_windows_count_marks() {
        let mut grid = Grid::new(3, 3);
        grid.set(0, 0, Cell::X);
        grid.set(1, 1, Cell::X);
        grid.set(2, 2, Cell::X);
        grid.set(0, 2, Cell::O);

        let owned: Vec<_> = grid.windows(3).filter_map(|w| w.owner(3)).collect();
        assert_eq!(owned, vec![Cell::X]);

        let bottom_row = grid.windows(3).next().unwrap();
        assert_eq!(bottom_row, LineCounts { empty: 1, x: 1, o: 1 });
    }

    #[test]
    fn test_clear_and_full() {
        let mut grid = Grid::new(1, 2);
        assert!(!grid.is_full());
        grid.set(0, 0, Cell::X);
        grid.set(0, 1, Cell::O);
        assert!(grid.is_full());
        assert_eq!(grid.stone_count(), 2);
        grid.clear();
        assert_eq!(grid.stone_count(), 0);
    }
}
