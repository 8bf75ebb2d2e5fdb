//! Puzzle generation by cell removal.

use novem_core::{Board, Difficulty, Position};
use novem_solver::backtrack;
use rand::{Rng, seq::SliceRandom};

use crate::PuzzleSeed;

/// A generated puzzle together with its solution and provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// Board handed to the player, with only the clue cells filled.
    pub problem: Board,
    /// The unique solution of `problem`.
    pub solution: Board,
    /// Difficulty the puzzle was generated for.
    pub difficulty: Difficulty,
    /// Seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Generates puzzles with a unique solution for one difficulty level.
///
/// Generation first fills an empty board into a random complete solution,
/// then removes cells one at a time in random order. A removal is kept only
/// if the remaining clues still determine the solution uniquely; otherwise
/// the cell is restored and the next candidate is tried. Removal stops once
/// the clue count reaches a target drawn from the difficulty's clue range,
/// or when every cell has been tried. Running out of candidates leaves the
/// puzzle with more clues than the target, never with a second solution.
///
/// # Examples
///
/// ```
/// use novem_core::Difficulty;
/// use novem_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new(Difficulty::Easy);
/// let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("example"));
///
/// assert!(puzzle.solution.is_solved());
/// assert_eq!(puzzle, generator.generate_with_seed(puzzle.seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    difficulty: Difficulty,
}

impl PuzzleGenerator {
    /// Creates a generator for the given difficulty.
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Returns the difficulty this generator produces puzzles for.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random(&mut rand::rng()))
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same seed and difficulty always produce the same puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();

        let mut solution = Board::new();
        // An empty board always completes.
        let filled = backtrack::fill(&mut solution, &mut rng);
        debug_assert!(filled);

        let target = usize::from(rng.random_range(self.difficulty.clue_range()));
        let mut positions = Position::ALL;
        positions.shuffle(&mut rng);

        let mut problem = solution;
        let mut clues = positions.len();
        for pos in positions {
            if clues <= target {
                break;
            }
            let removed = problem.get(pos);
            problem.set(pos, None);
            if backtrack::has_unique_solution(&problem) {
                clues -= 1;
            } else {
                problem.set(pos, removed);
            }
        }

        log::debug!(
            "generated {} puzzle: seed={seed} clues={clues} target={target}",
            self.difficulty,
        );

        GeneratedPuzzle {
            problem,
            solution,
            difficulty: self.difficulty,
            seed,
        }
    }
}
