//! Randomized backtracking search.
//!
//! The search walks empty cells in board order and tries candidate digits,
//! undoing placements on dead ends. Digit order is shuffled through the
//! caller's RNG when producing solutions, so the same seed always yields the
//! same solved board. Solution counting uses a fixed digit order instead: the
//! count is order-independent and a deterministic walk keeps uniqueness
//! checks reproducible without threading an RNG through them.
//!
//! Cells already filled on the input board are trusted as given and are
//! never re-validated.

use novem_core::{Board, Digit};
use rand::{Rng, seq::SliceRandom};

/// Fills every empty cell of `board` in place, leaving a complete solution.
///
/// Returns `true` on success. If the board cannot be completed, returns
/// `false` and leaves the board exactly as it was passed in.
///
/// # Examples
///
/// ```
/// use novem_core::Board;
/// use novem_solver::backtrack;
///
/// let mut board = Board::new();
/// assert!(backtrack::fill(&mut board, &mut rand::rng()));
/// assert!(board.is_solved());
/// ```
pub fn fill<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> bool {
    let Some(pos) = board.first_empty() else {
        return true;
    };

    let mut digits = Digit::ALL;
    digits.shuffle(rng);
    for digit in digits {
        if board.is_placement_valid(pos, digit) {
            board.set(pos, Some(digit));
            if fill(board, rng) {
                return true;
            }
            board.set(pos, None);
        }
    }
    false
}

/// Returns a solved copy of `board`, or `None` if it cannot be completed.
///
/// The input board is never modified. When several solutions exist, the RNG
/// decides which one is returned.
///
/// # Examples
///
/// ```
/// use novem_core::{Board, Position};
/// use novem_solver::backtrack;
///
/// let solved: Board =
///     "123456789456789123789123456231564897564897231897231564312645978645978312978312645"
///         .parse()?;
/// let mut puzzle = solved;
/// puzzle.set(Position::new(0, 0), None);
///
/// assert_eq!(backtrack::solve(&puzzle, &mut rand::rng()), Some(solved));
/// # Ok::<(), novem_core::ParseBoardError>(())
/// ```
#[must_use]
pub fn solve<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Board> {
    let mut scratch = *board;
    fill(&mut scratch, rng).then_some(scratch)
}

/// Counts the solutions of `board`, stopping as soon as `limit` are found.
///
/// Returns the number of solutions discovered, at most `limit`. A limit of
/// zero returns zero without searching. The input board is never modified.
///
/// # Examples
///
/// ```
/// use novem_core::Board;
/// use novem_solver::backtrack;
///
/// // An empty board has a vast number of solutions; stop counting at two.
/// assert_eq!(backtrack::count_solutions(&Board::new(), 2), 2);
/// ```
#[must_use]
pub fn count_solutions(board: &Board, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    let mut scratch = *board;
    count_search(&mut scratch, limit)
}

/// Returns `true` if `board` has exactly one solution.
///
/// # Examples
///
/// ```
/// use novem_core::{Board, Position};
/// use novem_solver::backtrack;
///
/// let mut board: Board =
///     "123456789456789123789123456231564897564897231897231564312645978645978312978312645"
///         .parse()?;
/// assert!(backtrack::has_unique_solution(&board));
///
/// board.set(Position::new(0, 0), None);
/// assert!(backtrack::has_unique_solution(&board));
/// # Ok::<(), novem_core::ParseBoardError>(())
/// ```
#[must_use]
pub fn has_unique_solution(board: &Board) -> bool {
    count_solutions(board, 2) == 1
}

// Invariant: `limit >= 1`, and the board is restored before returning.
fn count_search(board: &mut Board, limit: usize) -> usize {
    let Some(pos) = board.first_empty() else {
        return 1;
    };

    let mut found = 0;
    for digit in Digit::ALL {
        if board.is_placement_valid(pos, digit) {
            board.set(pos, Some(digit));
            found += count_search(board, limit - found);
            board.set(pos, None);
            if found >= limit {
                break;
            }
        }
    }
    found
}
