//! Example demonstrating basic puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a difficulty level
//! - Generate a random puzzle
//! - Display the puzzle, solution, and seed
//! - Replay a puzzle from a seed or a phrase
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Select the difficulty (easy, medium, or hard):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Replay a puzzle from its 64-character hex seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <HEX>
//! ```
//!
//! Derive the seed from a phrase instead:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase "daily 2024-03-01"
//! ```

use clap::Parser;
use novem_core::Difficulty;
use novem_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty of the generated puzzle.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: Difficulty,

    /// Hex seed to replay. A fresh random seed is drawn when omitted.
    #[arg(long, value_name = "HEX")]
    seed: Option<PuzzleSeed>,

    /// Phrase to derive the seed from.
    #[arg(long, value_name = "PHRASE", conflicts_with = "seed")]
    phrase: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let generator = PuzzleGenerator::new(args.difficulty);
    let puzzle = match (args.seed, args.phrase) {
        (Some(seed), _) => generator.generate_with_seed(seed),
        (None, Some(phrase)) => generator.generate_with_seed(PuzzleSeed::from_phrase(&phrase)),
        (None, None) => generator.generate(),
    };

    print_puzzle(&puzzle);
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Difficulty:");
    println!("  {}", puzzle.difficulty);
    println!();

    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();

    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();

    println!("Clues:");
    println!("  {}", puzzle.problem.filled_count());
}
