use super::{MoveError, Player};

pub const COLS: usize = 7;
pub const ROWS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Purple,
    Orange,
}

impl Cell {
    /// Conventional numeric encoding: 0 for empty, +1 / -1 for the two players.
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Purple => 1,
            Cell::Orange => -1,
        }
    }

    /// The player occupying this cell, if any.
    pub fn owner(self) -> Option<Player> {
        Player::from_value(self.value())
    }
}

/// Column-major grid. Within a column, row 0 is the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of the standard 7x6 size
    pub fn new() -> Self {
        Self::with_size(COLS, ROWS)
    }

    /// Create a new empty board with the given dimensions
    pub fn with_size(columns: usize, rows: usize) -> Self {
        Board {
            columns,
            rows,
            cells: vec![Cell::Empty; columns * rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the cell at a specific position, `None` if off the board
    pub fn get(&self, column: usize, row: usize) -> Option<Cell> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        Some(self.cells[column * self.rows + row])
    }

    /// All cells of a column, bottom to top
    pub fn column(&self, column: usize) -> Option<&[Cell]> {
        if column >= self.columns {
            return None;
        }
        let start = column * self.rows;
        Some(&self.cells[start..start + self.rows])
    }

    /// First empty row from the bottom, `None` if the column is full or invalid
    pub fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        self.column(column)?
            .iter()
            .position(|&cell| cell == Cell::Empty)
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        self.lowest_empty_row(column).is_none()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, column: usize, cell: Cell) -> Result<usize, MoveError> {
        if column >= self.columns {
            return Err(MoveError::InvalidColumn {
                column,
                columns: self.columns,
            });
        }

        let row = self
            .lowest_empty_row(column)
            .ok_or(MoveError::ColumnFull { column })?;
        self.cells[column * self.rows + row] = cell;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Number of non-empty cells
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
