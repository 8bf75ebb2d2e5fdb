//! Score calculation for completed games.

use std::time::Duration;

use novem_core::Difficulty;

/// Calculates the final score of a completed game.
///
/// The score starts from the difficulty's base score and adds a time bonus
/// that decays linearly from the full base score at zero elapsed time to
/// nothing at the difficulty's time limit. Each hint costs 15 points and
/// each error 5 points, and finishing without any hints earns a 50 point
/// bonus. The result never drops below 10.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use novem_core::Difficulty;
/// use novem_game::calculate_score;
///
/// // An instant, flawless hard game earns the maximum score.
/// assert_eq!(calculate_score(Difficulty::Hard, Duration::ZERO, 0, 0), 1050);
///
/// // Five minutes into a medium game, with one hint and two errors.
/// let elapsed = Duration::from_secs(300);
/// assert_eq!(calculate_score(Difficulty::Medium, elapsed, 1, 2), 412);
/// ```
#[must_use]
pub fn calculate_score(
    difficulty: Difficulty,
    elapsed: Duration,
    hints_used: u32,
    errors: u32,
) -> u32 {
    let base = u64::from(difficulty.base_score());
    let limit = u64::from(difficulty.time_limit_secs());

    let remaining = limit.saturating_sub(elapsed.as_secs());
    let time_bonus = base * remaining / limit;
    let no_hint_bonus = if hints_used == 0 { 50 } else { 0 };

    let earned = base + time_bonus + no_hint_bonus;
    let penalty = 15 * u64::from(hints_used) + 5 * u64::from(errors);

    // Earned points top out at 1050, so the clamped total fits in u32.
    #[expect(clippy::cast_possible_truncation)]
    let score = earned.saturating_sub(penalty).max(10) as u32;
    score
}
