//! Win detection anchored at the most recently placed cell.
//!
//! A win can only come into existence through the cell just filled, so each
//! check walks outward from that cell along one axis and counts matching
//! neighbors; there is no whole-board scan.

use super::{Board, Cell, Player};

/// Number of pieces in a row needed to win a standard game.
pub const WIN_LENGTH: usize = 4;

/// A single step on the board as `(column delta, row delta)`. Rows grow upward.
pub type Step = (isize, isize);

/// The four lines a run can lie on, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Up-left to down-right.
    NorthwestSoutheast,
    /// Up-right to down-left.
    NortheastSouthwest,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::NorthwestSoutheast,
        Axis::NortheastSouthwest,
    ];

    /// Directions walked from the placed cell for this axis.
    ///
    /// Vertical only looks down: under drop semantics the placed piece is the
    /// top of its stack, so nothing above it can belong to the run. Supporting
    /// arbitrary placement would require adding `(0, 1)` here.
    pub fn steps(self) -> &'static [Step] {
        match self {
            Axis::Horizontal => &[(-1, 0), (1, 0)],
            Axis::Vertical => &[(0, -1)],
            Axis::NorthwestSoutheast => &[(-1, 1), (1, -1)],
            Axis::NortheastSouthwest => &[(1, 1), (-1, -1)],
        }
    }
}

/// Count consecutive cells matching the piece at `(column, row)`, starting one
/// step away and walking along `step` until the edge of the board or the
/// first different cell. The starting cell itself is not counted, and an
/// empty or off-board starting cell counts nothing.
pub fn count_adjacent(board: &Board, column: usize, row: usize, step: Step) -> usize {
    let Some(target) = board.get(column, row).filter(|&cell| cell != Cell::Empty) else {
        return 0;
    };

    let mut count = 0;
    let (mut c, mut r) = (column, row);
    loop {
        let next = c
            .checked_add_signed(step.0)
            .zip(r.checked_add_signed(step.1));
        match next {
            Some((nc, nr)) if board.get(nc, nr) == Some(target) => {
                count += 1;
                c = nc;
                r = nr;
            }
            _ => break,
        }
    }
    count
}

/// The first axis on which the piece at `(column, row)` completes a run of at
/// least `win_length`.
pub fn winning_axis(board: &Board, column: usize, row: usize, win_length: usize) -> Option<Axis> {
    board.get(column, row)?.owner()?;

    let needed = win_length.saturating_sub(1);
    Axis::ALL.into_iter().find(|axis| {
        let neighbors: usize = axis
            .steps()
            .iter()
            .map(|&step| count_adjacent(board, column, row, step))
            .sum();
        neighbors >= needed
    })
}

/// Returns the player who owns `(column, row)` if that cell completes a run of
/// at least `win_length`, otherwise `None`.
pub fn detect_win(board: &Board, column: usize, row: usize, win_length: usize) -> Option<Player> {
    winning_axis(board, column, row, win_length)?;
    board.get(column, row).and_then(|cell| cell.owner())
}
