//! Game session state and rules.

use std::time::Duration;

use novem_core::{Board, ConflictList, Difficulty, Digit, DigitSet, Position};
use novem_generator::GeneratedPuzzle;

use crate::{CellState, GameError, GameSnapshot, score::calculate_score};

/// Outcome of a successful placement.
///
/// Conflicts do not block a placement; they are reported here so callers can
/// highlight them, and each conflicting placement is counted as an error for
/// scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Cells in the placed cell's row, column, or box that already hold the
    /// same digit.
    pub conflicts: ConflictList,
    /// Whether the placement completed the puzzle.
    pub solved: bool,
}

/// A sudoku game session.
///
/// Tracks given (clue) cells and player input separately, stores the puzzle
/// solution for hints and completion checks, and counts the hints and errors
/// that feed into the final score.
///
/// # Examples
///
/// ```
/// use novem_core::Difficulty;
/// use novem_game::Game;
/// use novem_generator::PuzzleGenerator;
///
/// let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate();
/// let game = Game::new(puzzle);
///
/// // A newly created game is not solved yet
/// assert!(!game.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    solution: Board,
    difficulty: Difficulty,
    hints_used: u32,
    errors: u32,
}

impl Game {
    /// Creates a new game from a generated puzzle.
    ///
    /// All cells present in the puzzle's problem board are marked as given
    /// (fixed) cells; the rest start as [`CellState::Empty`].
    ///
    /// # Panics
    ///
    /// Panics if the puzzle's solution board is not a complete, valid
    /// solution.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            difficulty,
            seed: _,
        } = puzzle;
        assert!(solution.is_solved(), "solution board must be solved");

        let mut cells = [const { CellState::Empty }; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem.get(pos) {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Self {
            cells,
            solution,
            difficulty,
            hints_used: 0,
            errors: 0,
        }
    }

    /// Restores a game from a snapshot.
    ///
    /// The snapshot's boards are parsed and replayed, so a resumed game is
    /// indistinguishable from the session it was saved from.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoard`] if a board string does not parse,
    /// [`GameError::CorruptSnapshot`] if the solution is not solved or a
    /// given cell disagrees with it, [`GameError::CannotModifyGivenCell`] if
    /// a filled digit overlaps a given cell, [`GameError::InvalidNotes`] if
    /// note bits fall outside the 9-digit mask, and
    /// [`GameError::CannotAddNoteToFilledCell`] if notes coincide with a
    /// filled cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use novem_core::Difficulty;
    /// use novem_game::Game;
    /// use novem_generator::PuzzleGenerator;
    ///
    /// let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate();
    /// let game = Game::new(puzzle);
    ///
    /// let snapshot = game.snapshot(Duration::from_secs(90));
    /// let restored = Game::resume(&snapshot)?;
    /// assert_eq!(restored, game);
    /// # Ok::<(), novem_game::GameError>(())
    /// ```
    pub fn resume(snapshot: &GameSnapshot) -> Result<Self, GameError> {
        let solution: Board = snapshot.solution.parse().map_err(GameError::InvalidBoard)?;
        if !solution.is_solved() {
            return Err(GameError::CorruptSnapshot("solution is not a solved board"));
        }
        let givens: Board = snapshot.givens.parse().map_err(GameError::InvalidBoard)?;
        let filled: Board = snapshot.filled.parse().map_err(GameError::InvalidBoard)?;

        let mut cells = [const { CellState::Empty }; 81];
        for pos in Position::ALL {
            if let Some(digit) = givens.get(pos) {
                if solution.get(pos) != Some(digit) {
                    return Err(GameError::CorruptSnapshot(
                        "given cell disagrees with the solution",
                    ));
                }
                cells[pos.index()] = CellState::Given(digit);
            }
        }

        let mut game = Self {
            cells,
            solution,
            difficulty: snapshot.difficulty,
            hints_used: 0,
            errors: 0,
        };
        for pos in Position::ALL {
            if let Some(digit) = filled.get(pos) {
                game.place(pos, digit)?;
            }
        }
        for (y, row) in (0..9).zip(&snapshot.notes) {
            for (x, bits) in (0..9).zip(row) {
                let digits = DigitSet::try_from_bits(*bits).ok_or(GameError::InvalidNotes(*bits))?;
                for digit in digits {
                    game.toggle_note(Position::new(x, y), digit)?;
                }
            }
        }

        // Replaying placements recounts conflicts; the session counters come
        // from the snapshot.
        game.hints_used = snapshot.hints_used;
        game.errors = snapshot.errors;
        Ok(game)
    }

    /// Returns the state of the cell at the given position.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &CellState {
        &self.cells[pos.index()]
    }

    /// Returns the stored solution board for this puzzle.
    #[must_use]
    pub const fn solution(&self) -> &Board {
        &self.solution
    }

    /// Returns the difficulty of this puzzle.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns how many hints have been revealed.
    #[must_use]
    pub const fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Returns how many conflicting placements have been made.
    #[must_use]
    pub const fn errors(&self) -> u32 {
        self.errors
    }

    /// Places a digit at the given position.
    ///
    /// If the cell is empty or holds notes, it becomes filled. If the cell
    /// is already filled, the digit is replaced; re-entering the same digit
    /// is a no-op. Placements that conflict with peers are applied anyway:
    /// the conflicts are reported in the returned [`Placement`] and the
    /// error count increases by one. The placed digit is also removed from
    /// the notes of every peer cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the position contains
    /// a given cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use novem_core::{Difficulty, Position};
    /// use novem_game::Game;
    /// use novem_generator::PuzzleGenerator;
    ///
    /// let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate();
    /// let mut game = Game::new(puzzle);
    ///
    /// // Find an empty cell and fill it with its solution digit
    /// let pos = *Position::ALL
    ///     .iter()
    ///     .find(|&&pos| game.cell(pos).is_empty())
    ///     .expect("puzzle has empty cells");
    /// let digit = game.solution().get(pos).expect("solution is complete");
    ///
    /// let placement = game.place(pos, digit)?;
    /// assert!(placement.conflicts.is_empty());
    /// assert_eq!(game.errors(), 0);
    /// # Ok::<(), novem_game::GameError>(())
    /// ```
    pub fn place(&mut self, pos: Position, digit: Digit) -> Result<Placement, GameError> {
        match self.cells[pos.index()] {
            CellState::Given(_) => return Err(GameError::CannotModifyGivenCell),
            CellState::Filled(current) if current == digit => {
                // Re-entering the same digit never recounts an error.
                return Ok(Placement {
                    conflicts: self.conflicts(pos),
                    solved: self.is_solved(),
                });
            }
            CellState::Filled(_) | CellState::Notes(_) | CellState::Empty => {}
        }

        self.cells[pos.index()] = CellState::Filled(digit);
        self.drop_peer_notes(pos, digit);

        let conflicts = self.conflicts(pos);
        if !conflicts.is_empty() {
            self.errors += 1;
        }
        Ok(Placement {
            conflicts,
            solved: self.is_solved(),
        })
    }

    /// Clears the player input at the given position.
    ///
    /// Filled digits and notes are removed alike; clearing an empty cell is
    /// a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the position contains
    /// a given cell.
    pub fn clear(&mut self, pos: Position) -> Result<(), GameError> {
        if self.cells[pos.index()].is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        self.cells[pos.index()] = CellState::Empty;
        Ok(())
    }

    /// Toggles a pencil-mark note at the given position.
    ///
    /// An empty cell becomes a notes cell holding the digit. In a notes
    /// cell the digit is toggled, and removing the last note empties the
    /// cell again. Returns whether the note is present after the toggle.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the position contains
    /// a given cell, and [`GameError::CannotAddNoteToFilledCell`] if it
    /// contains a filled digit.
    pub fn toggle_note(&mut self, pos: Position, digit: Digit) -> Result<bool, GameError> {
        match self.cells[pos.index()] {
            CellState::Given(_) => Err(GameError::CannotModifyGivenCell),
            CellState::Filled(_) => Err(GameError::CannotAddNoteToFilledCell),
            CellState::Notes(mut notes) => {
                let present = notes.toggle(digit);
                self.cells[pos.index()] = if notes.is_empty() {
                    CellState::Empty
                } else {
                    CellState::Notes(notes)
                };
                Ok(present)
            }
            CellState::Empty => {
                let mut notes = DigitSet::new();
                notes.insert(digit);
                self.cells[pos.index()] = CellState::Notes(notes);
                Ok(true)
            }
        }
    }

    /// Reveals the solution digit at the given position.
    ///
    /// The cell becomes filled with the correct digit, replacing any player
    /// input, and the hint count increases by one.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the position contains
    /// a given cell.
    pub fn reveal_hint(&mut self, pos: Position) -> Result<Digit, GameError> {
        if self.cells[pos.index()].is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        // The solution board is complete, as asserted on construction.
        #[expect(clippy::missing_panics_doc)]
        let digit = self.solution.get(pos).unwrap();
        self.cells[pos.index()] = CellState::Filled(digit);
        self.drop_peer_notes(pos, digit);
        self.hints_used += 1;
        Ok(digit)
    }

    /// Returns the cells conflicting with the digit at the given position.
    ///
    /// A conflict is another given or filled cell in the same row, column,
    /// or box holding the same digit. Cells without a decided digit have no
    /// conflicts.
    #[must_use]
    pub fn conflicts(&self, pos: Position) -> ConflictList {
        self.player_board().conflicts(pos)
    }

    /// Checks whether the board matches the stored solution cell by cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use novem_core::{Difficulty, Position};
    /// use novem_game::Game;
    /// use novem_generator::PuzzleGenerator;
    ///
    /// let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate();
    /// let mut game = Game::new(puzzle);
    ///
    /// for pos in Position::ALL {
    ///     if game.cell(pos).is_empty() {
    ///         let digit = puzzle.solution.get(pos).expect("solution is complete");
    ///         game.place(pos, digit)?;
    ///     }
    /// }
    /// assert!(game.is_solved());
    /// # Ok::<(), novem_game::GameError>(())
    /// ```
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Position::ALL
            .iter()
            .all(|&pos| self.cells[pos.index()].as_digit() == self.solution.get(pos))
    }

    /// Returns the board as the player sees it, with given and filled
    /// digits alike.
    #[must_use]
    pub fn player_board(&self) -> Board {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, self.cells[pos.index()].as_digit());
        }
        board
    }

    /// Returns the original problem board, holding only the given cells.
    #[must_use]
    pub fn problem_board(&self) -> Board {
        let mut board = Board::new();
        for pos in Position::ALL {
            if let CellState::Given(digit) = self.cells[pos.index()] {
                board.set(pos, Some(digit));
            }
        }
        board
    }

    /// Calculates the score this game would earn if completed now.
    #[must_use]
    pub fn score(&self, elapsed: Duration) -> u32 {
        calculate_score(self.difficulty, elapsed, self.hints_used, self.errors)
    }

    /// Captures the full session state for persistence.
    ///
    /// The result restores an identical game through [`Game::resume`].
    #[must_use]
    pub fn snapshot(&self, elapsed: Duration) -> GameSnapshot {
        let mut notes = [[0; 9]; 9];
        for pos in Position::ALL {
            if let CellState::Notes(digits) = self.cells[pos.index()] {
                notes[usize::from(pos.y())][usize::from(pos.x())] = digits.bits();
            }
        }
        GameSnapshot {
            difficulty: self.difficulty,
            solution: self.solution.to_string(),
            givens: self.problem_board().to_string(),
            filled: self.filled_board().to_string(),
            notes,
            elapsed_secs: elapsed.as_secs(),
            hints_used: self.hints_used,
            errors: self.errors,
        }
    }

    fn filled_board(&self) -> Board {
        let mut board = Board::new();
        for pos in Position::ALL {
            if let CellState::Filled(digit) = self.cells[pos.index()] {
                board.set(pos, Some(digit));
            }
        }
        board
    }

    fn drop_peer_notes(&mut self, pos: Position, digit: Digit) {
        for peer_pos in pos.house_peers() {
            if let CellState::Notes(mut notes) = self.cells[peer_pos.index()] {
                notes.remove(digit);
                self.cells[peer_pos.index()] = if notes.is_empty() {
                    CellState::Empty
                } else {
                    CellState::Notes(notes)
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use novem_generator::PuzzleSeed;

    use super::*;

    const TEST_SOLUTION: &str =
        "123456789456789123789123456231564897564897231897231564312645978645978312978312645";

    const EMPTY_CELLS: [Position; 5] = [
        Position::new(4, 0),
        Position::new(5, 0),
        Position::new(4, 1),
        Position::new(8, 4),
        Position::new(0, 8),
    ];

    fn test_puzzle() -> GeneratedPuzzle {
        let solution: Board = TEST_SOLUTION.parse().expect("valid solution");
        let mut problem = solution;
        for pos in EMPTY_CELLS {
            problem.set(pos, None);
        }
        GeneratedPuzzle {
            problem,
            solution,
            difficulty: Difficulty::Medium,
            seed: PuzzleSeed::from_phrase("game tests"),
        }
    }

    #[test]
    fn test_new_game_marks_givens() {
        let puzzle = test_puzzle();
        let game = Game::new(puzzle);

        for pos in Position::ALL {
            match puzzle.problem.get(pos) {
                Some(digit) => assert_eq!(game.cell(pos), &CellState::Given(digit)),
                None => assert_eq!(game.cell(pos), &CellState::Empty),
            }
        }
        assert_eq!(game.difficulty(), Difficulty::Medium);
        assert_eq!(game.hints_used(), 0);
        assert_eq!(game.errors(), 0);
        assert_eq!(game.problem_board(), puzzle.problem);
    }

    #[test]
    #[should_panic(expected = "solution board must be solved")]
    fn test_new_rejects_unsolved_solution() {
        let puzzle = GeneratedPuzzle {
            problem: Board::new(),
            solution: Board::new(),
            difficulty: Difficulty::Easy,
            seed: PuzzleSeed::from_phrase("unsolved"),
        };
        let _ = Game::new(puzzle);
    }

    #[test]
    fn test_place_fills_replaces_and_skips_noop() {
        let mut game = Game::new(test_puzzle());
        let pos = Position::new(4, 0);

        // Correct digit, no conflicts
        let placement = game.place(pos, Digit::D5).unwrap();
        assert!(placement.conflicts.is_empty());
        assert_eq!(game.cell(pos), &CellState::Filled(Digit::D5));
        assert_eq!(game.errors(), 0);

        // Replacing with a conflicting digit counts one error
        let placement = game.place(pos, Digit::D6).unwrap();
        assert!(!placement.conflicts.is_empty());
        assert_eq!(game.cell(pos), &CellState::Filled(Digit::D6));
        assert_eq!(game.errors(), 1);

        // Re-entering the same digit reports conflicts but adds no error
        let placement = game.place(pos, Digit::D6).unwrap();
        assert!(!placement.conflicts.is_empty());
        assert_eq!(game.errors(), 1);
    }

    #[test]
    fn test_place_rejects_given_cells() {
        let mut game = Game::new(test_puzzle());
        let pos = Position::new(0, 0);

        assert_eq!(
            game.place(pos, Digit::D9),
            Err(GameError::CannotModifyGivenCell),
        );
        assert_eq!(game.cell(pos), &CellState::Given(Digit::D1));
        assert_eq!(game.errors(), 0);
    }

    #[test]
    fn test_conflicting_placements_apply_and_report_peers() {
        let mut game = Game::new(test_puzzle());
        let pos = Position::new(4, 0);

        // A 4 here collides with the given 4 at (3, 0) and the one at (4, 6)
        let placement = game.place(pos, Digit::D4).unwrap();
        assert_eq!(game.cell(pos), &CellState::Filled(Digit::D4));
        assert_eq!(placement.conflicts.len(), 2);
        assert!(placement.conflicts.contains(&Position::new(3, 0)));
        assert!(placement.conflicts.contains(&Position::new(4, 6)));
        assert_eq!(game.errors(), 1);

        // The conflict is visible from the other side as well
        assert!(game.conflicts(Position::new(3, 0)).contains(&pos));
        // An undecided cell has no conflicts
        assert!(game.conflicts(Position::new(5, 0)).is_empty());
    }

    #[test]
    fn test_clear_removes_player_input_only() {
        let mut game = Game::new(test_puzzle());
        let pos = Position::new(4, 0);

        game.place(pos, Digit::D5).unwrap();
        game.clear(pos).unwrap();
        assert_eq!(game.cell(pos), &CellState::Empty);

        // Clearing an empty cell is a no-op
        assert_eq!(game.clear(pos), Ok(()));

        game.toggle_note(pos, Digit::D5).unwrap();
        game.clear(pos).unwrap();
        assert_eq!(game.cell(pos), &CellState::Empty);

        assert_eq!(
            game.clear(Position::new(0, 0)),
            Err(GameError::CannotModifyGivenCell),
        );
    }

    #[test]
    fn test_toggle_note_lifecycle() {
        let mut game = Game::new(test_puzzle());
        let pos = Position::new(4, 0);

        assert_eq!(game.toggle_note(pos, Digit::D5), Ok(true));
        assert_eq!(game.toggle_note(pos, Digit::D6), Ok(true));
        assert!(matches!(
            game.cell(pos),
            CellState::Notes(notes) if notes.contains(Digit::D5) && notes.contains(Digit::D6)
        ));

        assert_eq!(game.toggle_note(pos, Digit::D5), Ok(false));
        // Removing the last note empties the cell
        assert_eq!(game.toggle_note(pos, Digit::D6), Ok(false));
        assert_eq!(game.cell(pos), &CellState::Empty);

        assert_eq!(
            game.toggle_note(Position::new(0, 0), Digit::D1),
            Err(GameError::CannotModifyGivenCell),
        );

        game.place(pos, Digit::D5).unwrap();
        assert_eq!(
            game.toggle_note(pos, Digit::D1),
            Err(GameError::CannotAddNoteToFilledCell),
        );
    }

    #[test]
    fn test_place_drops_the_digit_from_peer_notes() {
        let mut game = Game::new(test_puzzle());

        // (4, 1) shares a column and box with (4, 0); (5, 0) shares a row
        game.toggle_note(Position::new(4, 1), Digit::D5).unwrap();
        game.toggle_note(Position::new(5, 0), Digit::D5).unwrap();
        game.toggle_note(Position::new(5, 0), Digit::D6).unwrap();
        // (0, 8) sees none of them
        game.toggle_note(Position::new(0, 8), Digit::D5).unwrap();

        game.place(Position::new(4, 0), Digit::D5).unwrap();

        assert_eq!(game.cell(Position::new(4, 1)), &CellState::Empty);
        assert!(matches!(
            game.cell(Position::new(5, 0)),
            CellState::Notes(notes) if !notes.contains(Digit::D5) && notes.contains(Digit::D6)
        ));
        assert!(matches!(
            game.cell(Position::new(0, 8)),
            CellState::Notes(notes) if notes.contains(Digit::D5)
        ));
    }

    #[test]
    fn test_reveal_hint_fills_the_solution_digit() {
        let mut game = Game::new(test_puzzle());

        assert_eq!(game.reveal_hint(Position::new(8, 4)), Ok(Digit::D1));
        assert_eq!(game.cell(Position::new(8, 4)), &CellState::Filled(Digit::D1));
        assert_eq!(game.hints_used(), 1);

        assert_eq!(
            game.reveal_hint(Position::new(0, 0)),
            Err(GameError::CannotModifyGivenCell),
        );
        assert_eq!(game.hints_used(), 1);

        // A hint replaces a wrong player digit
        game.place(Position::new(4, 0), Digit::D6).unwrap();
        assert_eq!(game.reveal_hint(Position::new(4, 0)), Ok(Digit::D5));
        assert_eq!(game.cell(Position::new(4, 0)), &CellState::Filled(Digit::D5));
        assert_eq!(game.hints_used(), 2);
    }

    #[test]
    fn test_is_solved_requires_exact_solution_match() {
        let puzzle = test_puzzle();
        let mut game = Game::new(puzzle);
        assert!(!game.is_solved());

        // Fill everything except the last cell, and that one wrongly
        let (&last, rest) = EMPTY_CELLS.split_last().expect("cells to fill");
        for &pos in rest {
            let digit = puzzle.solution.get(pos).expect("solution is complete");
            let placement = game.place(pos, digit).unwrap();
            assert!(!placement.solved);
        }
        game.place(last, Digit::D1).unwrap();
        assert!(!game.is_solved());

        // Correcting the digit solves the game
        let digit = puzzle.solution.get(last).expect("solution is complete");
        let placement = game.place(last, digit).unwrap();
        assert!(placement.solved);
        assert!(game.is_solved());
        assert_eq!(game.player_board(), puzzle.solution);
    }

    #[test]
    fn test_score_uses_the_session_counters() {
        let mut game = Game::new(test_puzzle());
        let elapsed = Duration::from_secs(300);
        assert_eq!(
            game.score(elapsed),
            calculate_score(Difficulty::Medium, elapsed, 0, 0),
        );

        game.place(Position::new(4, 0), Digit::D4).unwrap();
        game.reveal_hint(Position::new(8, 4)).unwrap();
        assert_eq!(
            game.score(elapsed),
            calculate_score(Difficulty::Medium, elapsed, 1, 1),
        );
    }

    #[test]
    fn test_snapshot_and_resume_round_trip() {
        let mut game = Game::new(test_puzzle());
        game.place(Position::new(4, 0), Digit::D5).unwrap();
        game.place(Position::new(8, 4), Digit::D3).unwrap();
        game.toggle_note(Position::new(4, 1), Digit::D4).unwrap();
        game.toggle_note(Position::new(4, 1), Digit::D8).unwrap();
        game.reveal_hint(Position::new(0, 8)).unwrap();
        assert_eq!(game.errors(), 1);
        assert_eq!(game.hints_used(), 1);

        let snapshot = game.snapshot(Duration::from_secs(123));
        assert_eq!(snapshot.elapsed_secs, 123);

        let restored = Game::resume(&snapshot).unwrap();
        assert_eq!(restored, game);
    }

    #[test]
    fn test_resume_validates_snapshot_contents() {
        let game = Game::new(test_puzzle());
        let snapshot = game.snapshot(Duration::ZERO);

        let mut bad = snapshot.clone();
        bad.solution = "abc".to_owned();
        assert!(matches!(
            Game::resume(&bad),
            Err(GameError::InvalidBoard(_)),
        ));

        let mut bad = snapshot.clone();
        bad.solution = format!("{}.", &TEST_SOLUTION[..80]);
        assert_eq!(
            Game::resume(&bad),
            Err(GameError::CorruptSnapshot("solution is not a solved board")),
        );

        let mut bad = snapshot.clone();
        bad.givens = format!("9{}", &TEST_SOLUTION[1..]);
        assert_eq!(
            Game::resume(&bad),
            Err(GameError::CorruptSnapshot(
                "given cell disagrees with the solution",
            )),
        );

        // A filled digit on top of a given cell
        let mut bad = snapshot.clone();
        bad.filled = format!("9{}", ".".repeat(80));
        assert_eq!(Game::resume(&bad), Err(GameError::CannotModifyGivenCell));

        let mut bad = snapshot.clone();
        bad.notes[0][4] = 0x3ff;
        assert_eq!(Game::resume(&bad), Err(GameError::InvalidNotes(0x3ff)));

        // Notes recorded on a cell that is also filled
        let mut bad = snapshot;
        bad.filled = format!("....5{}", ".".repeat(76));
        bad.notes[0][4] = 0b1;
        assert_eq!(
            Game::resume(&bad),
            Err(GameError::CannotAddNoteToFilledCell),
        );
    }
}
