//! Guessing Game Round
//!
//! One round of the high-low game: a hidden target in `[1, 100]`, an attempt
//! counter, and a terminal won flag cleared only by starting a new round.
//! Invalid input is rejected before any state changes.

use std::cmp::Ordering;

pub const MIN_TARGET: u32 = 1;
pub const MAX_TARGET: u32 = 100;

/// Map a uniform sample from [0, 1) onto the target range
pub fn target_from_unit(unit: f64) -> u32 {
    // `as` saturates, so any out-of-range sample still lands in range
    let scaled = (unit * f64::from(MAX_TARGET - MIN_TARGET + 1)) as u32;
    MIN_TARGET + scaled.min(MAX_TARGET - MIN_TARGET)
}

/// Outcome of a valid guess
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    TooLow,
    TooHigh,
    Win { target: u32, attempts: u32 },
}

impl Feedback {
    pub fn message(&self) -> String {
        match self {
            Feedback::TooLow => "Too low! Try again.".to_string(),
            Feedback::TooHigh => "Too high! Try again.".to_string(),
            Feedback::Win { target, attempts } => {
                format!("Correct! The number was {target}, found in {attempts} attempt(s).")
            }
        }
    }
}

/// Rejected guess; the round is left untouched and no attempt is consumed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidGuess;

impl InvalidGuess {
    pub fn message(&self) -> &'static str {
        "Please enter a whole number from 1 to 100."
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameRound {
    target: u32,
    attempts: u32,
    won: bool,
}

impl GameRound {
    pub fn new(target: u32) -> Self {
        debug_assert!((MIN_TARGET..=MAX_TARGET).contains(&target));
        Self {
            target,
            attempts: 0,
            won: false,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Check a raw guess against the target
    ///
    /// Text that is not an integer in `[MIN_TARGET, MAX_TARGET]` is rejected
    /// without consuming an attempt. A won round rejects everything; input
    /// is disabled then, and the round stays terminal until reset.
    pub fn guess(&mut self, raw: &str) -> Result<Feedback, InvalidGuess> {
        if self.won {
            return Err(InvalidGuess);
        }
        let value = raw.trim().parse::<u32>().map_err(|_| InvalidGuess)?;
        if !(MIN_TARGET..=MAX_TARGET).contains(&value) {
            return Err(InvalidGuess);
        }

        self.attempts += 1;
        Ok(match value.cmp(&self.target) {
            Ordering::Less => Feedback::TooLow,
            Ordering::Greater => Feedback::TooHigh,
            Ordering::Equal => {
                self.won = true;
                Feedback::Win {
                    target: self.target,
                    attempts: self.attempts,
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_consumes_no_attempt() {
        let mut round = GameRound::new(42);
        for raw in ["0", "101", "abc", "", "  ", "-5", "4.2"] {
            assert_eq!(round.guess(raw), Err(InvalidGuess), "input {raw:?}");
            assert_eq!(round.attempts(), 0);
            assert!(!round.is_won());
        }
    }

    #[test]
    fn test_scripted_round_against_42() {
        let mut round = GameRound::new(42);

        assert_eq!(round.guess("50"), Ok(Feedback::TooHigh));
        assert_eq!(round.attempts(), 1);

        assert_eq!(round.guess("30"), Ok(Feedback::TooLow));
        assert_eq!(round.attempts(), 2);

        let feedback = round.guess("42").unwrap();
        assert_eq!(
            feedback,
            Feedback::Win {
                target: 42,
                attempts: 3
            }
        );
        assert!(round.is_won());

        let message = feedback.message();
        assert!(message.contains("42"));
        assert!(message.contains('3'));
    }

    #[test]
    fn test_first_guess_win_reads_one_attempt() {
        let mut round = GameRound::new(42);
        let feedback = round.guess("42").unwrap();
        assert_eq!(
            feedback,
            Feedback::Win {
                target: 42,
                attempts: 1
            }
        );
        assert!(feedback.message().contains('1'));
    }

    #[test]
    fn test_won_round_rejects_further_guesses() {
        let mut round = GameRound::new(10);
        round.guess("10").unwrap();
        assert_eq!(round.guess("10"), Err(InvalidGuess));
        assert_eq!(round.attempts(), 1);
    }

    #[test]
    fn test_guess_accepts_surrounding_whitespace() {
        let mut round = GameRound::new(7);
        assert_eq!(round.guess(" 7 "), Ok(Feedback::Win { target: 7, attempts: 1 }));
    }

    #[test]
    fn test_target_sweep_stays_in_range() {
        let mut seen_min = false;
        let mut seen_max = false;
        for step in 0..10_000 {
            let unit = f64::from(step) / 10_000.0;
            let target = target_from_unit(unit);
            assert!((MIN_TARGET..=MAX_TARGET).contains(&target));
            seen_min |= target == MIN_TARGET;
            seen_max |= target == MAX_TARGET;

            assert_eq!(GameRound::new(target).attempts(), 0);
        }
        assert!(seen_min);
        assert!(seen_max);
    }

    #[test]
    fn test_target_saturates_outside_unit_interval() {
        assert_eq!(target_from_unit(-0.5), MIN_TARGET);
        assert_eq!(target_from_unit(1.0), MAX_TARGET);
        assert_eq!(target_from_unit(2.0), MAX_TARGET);
    }
}
