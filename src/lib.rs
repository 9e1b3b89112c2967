#![doc = include_str!("../README.md")]
//!
//!
//! To solve a board with this implementation, instantiate a [`Board`]
//! with the side length you want, call [`Board::solve()`], and read
//! the placement back out through the accessors (or [`Board::render()`]
//! for a printable grid):
//!
//! ```
//! let mut board = nqline::Board::new(8);
//!
//! assert!(board.solve());
//!
//! // Exactly one queen per column, and the grid agrees with the
//! // per-column assignment.
//! for col in 0..board.size() {
//!     let row = board.queen_in_column(col).unwrap();
//!     assert!(board.occupied(col, row));
//! }
//! ```
//!
//! The solver finds one solution (always the same one for a given
//! size) or proves that none exists; it does not enumerate.

use log::{debug, trace};

/// An N x N chess board being solved for the augmented N queens
/// puzzle.
///
/// The augmented puzzle keeps the classic rules -- no two queens may
/// share a row, column, or diagonal -- and adds one more: no *three*
/// queens may lie on a single straight line of any slope.  The
/// standard 8-queens solutions all contain such triples, so this
/// variant is strictly harder.
///
/// The board is addressed column-major, `(column, row)`, with one
/// queen per column enforced structurally: the search assigns columns
/// left to right, so a column holds at most one queen by
/// construction, and the remaining rules are checked incrementally as
/// each queen is placed.
///
/// A `Board` is single-use: construct, call [`Board::solve()`] once,
/// then read the result.  After a successful solve the board holds
/// the placement; after a failed solve every placement has been
/// undone and the board is empty again.
pub struct Board {
    /// The side length, fixed at construction.
    n: usize,

    // NB The three structures below are deliberately redundant.  The
    // grid is the source of truth consumed by rendering; the other
    // two are caches that let the hot safety checks avoid scanning
    // it.  They move together: `place()` sets all three, `unplace()`
    // clears all three, and nothing else writes them.
    /// The occupancy grid, indexed `cells[column][row]`.
    cells: Vec<Vec<bool>>,

    /// Per-column queen assignment: `queens[column]` is the row of
    /// that column's queen, or `None` while the column is unassigned.
    queens: Vec<Option<usize>>,

    /// Per-row occupancy: `queen_in_row[row]` is true iff some placed
    /// queen sits in that row.
    queen_in_row: Vec<bool>,
}

impl Board {
    /// Initializes an empty board with side length `n`.
    ///
    /// `n` is unsigned, so there is no invalid size to reject; a zero
    /// board is legal and trivially solvable (there are no columns to
    /// fill).
    pub fn new(n: usize) -> Board {
        Board {
            n,
            cells: vec![vec![false; n]; n],
            queens: vec![None; n],
            queen_in_row: vec![false; n],
        }
    }

    /// The side length this board was constructed with.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Whether a queen currently occupies `(col, row)`.
    pub fn occupied(&self, col: usize, row: usize) -> bool {
        self.cells[col][row]
    }

    /// The row of the queen in `col`, or `None` if the column is
    /// unassigned (which after [`Board::solve()`] means the search
    /// failed).
    pub fn queen_in_column(&self, col: usize) -> Option<usize> {
        self.queens[col]
    }

    /// Searches for a placement satisfying all four rules, returning
    /// true iff one exists.
    ///
    /// On success the board holds the placement found; on failure
    /// every tentative placement has been undone and the board is
    /// empty.  The search tries rows in ascending order and stops at
    /// the first full placement, so the solution is deterministic for
    /// a given `n`.
    ///
    /// The first column only tries rows `0..ceil(n/2)`: a solution
    /// with its column-0 queen in the top half mirrors one (row `y`
    /// maps to `n-1-y`) with that queen in the bottom half, so
    /// restricting column 0 to the bottom half loses no solvable
    /// board and halves the search.
    pub fn solve(&mut self) -> bool {
        // The zero board has no columns to fill; call that solved
        // explicitly rather than leaning on the recursion's base case.
        if self.n == 0 {
            return true;
        }

        let solved = self.solve_from(self.n.div_ceil(2), 0);
        debug!("{n}x{n} board: solved={solved}", n = self.n);
        solved
    }

    /// Assigns columns `col..n`, trying rows `0..rows` in this column
    /// and the full row range in the columns after it.
    fn solve_from(&mut self, rows: usize, col: usize) -> bool {
        // Past the last column: every column is assigned, success.
        if col == self.n {
            return true;
        }

        for row in 0..rows {
            if self.place(col, row) {
                if self.solve_from(self.n, col + 1) {
                    return true;
                }

                // The rest of the board cannot be completed with this
                // queen in place; take it back and try the next row.
                trace!("backtracking off ({col}, {row})");
                self.unplace(col, row);
            }
        }

        // No row in this column works: a genuine dead end, reported
        // to the caller so it can retry its own column.
        false
    }

    /// Tries to place a queen at `(col, row)`, checking all four
    /// safety rules first.  Returns false -- without touching any
    /// state -- if the cell is unsafe; otherwise records the queen in
    /// the grid, the column assignment, and the row cache, and
    /// returns true.
    fn place(&mut self, col: usize, row: usize) -> bool {
        if !self.row_is_safe(row)
            || !self.sw_diagonal_is_safe(col, row)
            || !self.nw_diagonal_is_safe(col, row)
            || !self.line_is_safe(col, row)
        {
            return false;
        }

        self.cells[col][row] = true;
        self.queens[col] = Some(row);
        self.queen_in_row[row] = true;
        true
    }

    /// The exact inverse of [`Board::place()`]: clears the same three
    /// pieces of state.
    fn unplace(&mut self, col: usize, row: usize) {
        self.cells[col][row] = false;
        self.queens[col] = None;
        self.queen_in_row[row] = false;
    }

    /// Whether `row` is free of queens.  O(1) via the row cache.
    fn row_is_safe(&self, row: usize) -> bool {
        !self.queen_in_row[row]
    }

    /// Whether the NW diagonal through `(col, row)` is free of
    /// queens.
    ///
    /// Walks up-and-left from `(col-1, row+1)` until it falls off the
    /// board.  Only columns left of `col` need checking; the search
    /// has not placed anything to the right yet.
    fn nw_diagonal_is_safe(&self, col: usize, row: usize) -> bool {
        let mut x = col;
        let mut y = row + 1;
        while x > 0 && y < self.n {
            x -= 1;
            if self.cells[x][y] {
                return false;
            }
            y += 1;
        }
        true
    }

    /// Whether the SW diagonal through `(col, row)` is free of
    /// queens.  The mirror of the NW walk: down-and-left from
    /// `(col-1, row-1)`.
    fn sw_diagonal_is_safe(&self, col: usize, row: usize) -> bool {
        let mut x = col;
        let mut y = row;
        while x > 0 && y > 0 {
            x -= 1;
            y -= 1;
            if self.cells[x][y] {
                return false;
            }
        }
        true
    }

    /// Whether placing a queen at `(col, row)` would put three queens
    /// on one straight line of *any* slope.
    ///
    /// Every already-placed pair was itself checked when its second
    /// member was placed, so only pairs combined with the new
    /// candidate need testing: for each pair of assigned columns
    /// `i < j < col`, the candidate is rejected iff it lies on the
    /// line through those two queens.  This is the dominant cost of
    /// the search, O(col^2) per placement attempt.
    ///
    /// With fewer than two queens on the board no line can have three
    /// points, so columns 0 and 1 skip the check entirely.
    fn line_is_safe(&self, col: usize, row: usize) -> bool {
        if col < 2 {
            return true;
        }

        for i in 0..col - 1 {
            // Columns left of `col` always hold a queen during the
            // search; the guard keeps partially-filled boards (as the
            // tests build) well-defined.
            let Some(yi) = self.queens[i] else { continue };
            for j in i + 1..col {
                let Some(yj) = self.queens[j] else { continue };
                if collinear(
                    i as i64,
                    yi as i64,
                    j as i64,
                    yj as i64,
                    col as i64,
                    row as i64,
                ) {
                    return false;
                }
            }
        }
        true
    }

    /// Renders the board as text, one line per row with row 0 at the
    /// bottom, `"1 "` for an occupied cell and `"0 "` for an empty
    /// one.  Reflects whatever the grid currently holds: a full
    /// solution after a successful solve, the empty board after a
    /// failed one.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.n * (2 * self.n + 1));
        for row in (0..self.n).rev() {
            for col in 0..self.n {
                out.push_str(if self.cells[col][row] { "1 " } else { "0 " });
            }
            out.push('\n');
        }
        out
    }
}

/// Whether the point `(cx, cy)` lies on the line through `(ax, ay)`
/// and `(bx, by)`.
///
/// Uses the cross-multiplied form of the slope comparison,
/// `(cy - ay) * (bx - ax) == (by - ay) * (cx - ax)`, which is exact
/// in integer arithmetic.  The division-based form (`cy - ay ==
/// m * (cx - ax)` with `m` a floating slope) can round the product to
/// the wrong side of an integer and silently misclassify a point; see
/// the tests for a coordinate triple where the two forms disagree.
fn collinear(ax: i64, ay: i64, bx: i64, by: i64, cx: i64, cy: i64) -> bool {
    (cy - ay) * (bx - ax) == (by - ay) * (cx - ax)
}
