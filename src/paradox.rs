//! Probability paradoxes: closed forms and simulations.

use rand::Rng;
use serde::Serialize;

use crate::error::{Result, UtilError};
use crate::random::create_rng;

/// Days in a non-leap year, the default for [`birthday_paradox`].
pub const DAYS_IN_YEAR: u32 = 365;

/// Probability that at least two of `people` share a birthday in a
/// 365-day year.
///
/// # Examples
/// ```
/// use u_toolkit::paradox::birthday_paradox;
/// let p = birthday_paradox(23);
/// assert!(p > 0.50 && p < 0.51);
/// ```
pub fn birthday_paradox(people: u32) -> f64 {
    // days > 0, cannot fail
    birthday_paradox_with_days(people, DAYS_IN_YEAR).unwrap_or(0.0)
}

/// Birthday-collision probability `1 − Π_{i<n} (days − i)/days`.
///
/// Returns 0 for fewer than two people and 1 once `people > days`
/// (pigeonhole).
///
/// # Errors
/// Returns `InvalidArgument` if `days == 0`.
pub fn birthday_paradox_with_days(people: u32, days: u32) -> Result<f64> {
    if days == 0 {
        return Err(UtilError::invalid("days", "must be at least 1"));
    }
    if people <= 1 {
        return Ok(0.0);
    }
    if people > days {
        return Ok(1.0);
    }
    let d = f64::from(days);
    let all_distinct: f64 = (0..people).map(|i| (d - f64::from(i)) / d).product();
    Ok(1.0 - all_distinct)
}

/// Simulates the Monty Hall game and returns the empirical win rate.
///
/// Each trial places the prize behind a random door, lets the player pick
/// a random door, has the host open a door that is neither the pick nor
/// the prize, then either switches to the remaining closed door or stays.
///
/// # Errors
/// Returns `InvalidArgument` if `trials == 0`.
///
/// # Examples
/// ```
/// use u_toolkit::paradox::monty_hall_seeded;
/// let switch = monty_hall_seeded(20_000, true, 1).unwrap();
/// assert!((switch - 2.0 / 3.0).abs() < 0.02);
/// ```
pub fn monty_hall<R: Rng>(trials: u32, switch: bool, rng: &mut R) -> Result<f64> {
    if trials == 0 {
        return Err(UtilError::invalid("trials", "must be at least 1"));
    }
    let mut wins = 0_u32;
    for _ in 0..trials {
        let prize = rng.random_range(0..3_u8);
        let choice = rng.random_range(0..3_u8);
        let revealed = if choice == prize {
            // Host picks one of the two empty doors at random
            let offset = rng.random_range(1..3_u8);
            (choice + offset) % 3
        } else {
            3 - choice - prize
        };
        let final_choice = if switch {
            3 - choice - revealed
        } else {
            choice
        };
        if final_choice == prize {
            wins += 1;
        }
    }
    Ok(f64::from(wins) / f64::from(trials))
}

/// [`monty_hall`] with a generator built from `seed`.
pub fn monty_hall_seeded(trials: u32, switch: bool, seed: u64) -> Result<f64> {
    monty_hall(trials, switch, &mut create_rng(seed))
}

/// Benford's-law probability that a number's leading digit is `digit`:
/// `log10(1 + 1/d)`.
///
/// # Errors
/// Returns `InvalidArgument` if `digit` is not in `1..=9`.
pub fn benford_probability(digit: u32) -> Result<f64> {
    if !(1..=9).contains(&digit) {
        return Err(UtilError::invalid(
            "digit",
            format!("must be in 1..=9, got {digit}"),
        ));
    }
    Ok((1.0 + 1.0 / f64::from(digit)).log10())
}

/// Expected leading-digit frequencies for digits 1 through 9.
pub fn benford_distribution() -> [f64; 9] {
    let mut out = [0.0; 9];
    for (d, slot) in (1_u32..).zip(out.iter_mut()) {
        *slot = (1.0 + 1.0 / f64::from(d)).log10();
    }
    out
}

/// Successes out of trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub successes: u32,
    pub trials: u32,
}

impl Tally {
    /// `successes` out of `trials`.
    pub const fn new(successes: u32, trials: u32) -> Self {
        Self { successes, trials }
    }

    /// Success rate; 0 for an empty tally.
    pub fn rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            f64::from(self.successes) / f64::from(self.trials)
        }
    }

    /// Pools two tallies; counts saturate at `u32::MAX`.
    pub fn combine(self, other: Tally) -> Tally {
        Tally::new(
            self.successes.saturating_add(other.successes),
            self.trials.saturating_add(other.trials),
        )
    }
}

/// Per-group and pooled outcomes of one treatment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreatmentOutcome {
    pub name: &'static str,
    pub small: Tally,
    pub large: Tally,
    pub combined: Tally,
    pub small_rate: f64,
    pub large_rate: f64,
    pub combined_rate: f64,
}

impl TreatmentOutcome {
    fn new(name: &'static str, small: Tally, large: Tally) -> Self {
        let combined = small.combine(large);
        Self {
            name,
            small,
            large,
            combined,
            small_rate: small.rate(),
            large_rate: large.rate(),
            combined_rate: combined.rate(),
        }
    }
}

/// Illustrative Simpson's-paradox dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpsonsParadox {
    pub treatment_a: TreatmentOutcome,
    pub treatment_b: TreatmentOutcome,
    /// A wins in every group yet B wins once the groups are pooled.
    pub paradox_holds: bool,
}

/// The kidney-stone study (Charig et al., 1986): treatment A beats B on
/// both small and large stones, but B has the better pooled success rate
/// because A was given the harder cases more often.
///
/// # Examples
/// ```
/// use u_toolkit::paradox::simpsons_paradox;
/// let data = simpsons_paradox();
/// assert!(data.paradox_holds);
/// assert!(data.treatment_a.small_rate > data.treatment_b.small_rate);
/// assert!(data.treatment_a.combined_rate < data.treatment_b.combined_rate);
/// ```
pub fn simpsons_paradox() -> SimpsonsParadox {
    let a = TreatmentOutcome::new("A", Tally::new(81, 87), Tally::new(192, 263));
    let b = TreatmentOutcome::new("B", Tally::new(234, 270), Tally::new(55, 80));
    let paradox_holds = a.small_rate > b.small_rate
        && a.large_rate > b.large_rate
        && a.combined_rate < b.combined_rate;
    SimpsonsParadox {
        treatment_a: a,
        treatment_b: b,
        paradox_holds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_thresholds() {
        let p23 = birthday_paradox(23);
        assert!(p23 > 0.50 && p23 < 0.51, "p(23) = {p23}");
        assert!(birthday_paradox(70) > 0.999);
    }

    #[test]
    fn test_birthday_edges() {
        assert_eq!(birthday_paradox(0), 0.0);
        assert_eq!(birthday_paradox(1), 0.0);
        assert_eq!(birthday_paradox(366), 1.0);
        assert!((birthday_paradox(2) - 1.0 / 365.0).abs() < 1e-12);
    }

    #[test]
    fn test_birthday_custom_days() {
        // Two people, two days: 1/2 chance of sharing
        assert_eq!(birthday_paradox_with_days(2, 2).unwrap(), 0.5);
        assert_eq!(birthday_paradox_with_days(3, 2).unwrap(), 1.0);
        assert!(birthday_paradox_with_days(3, 0).is_err());
    }

    #[test]
    fn test_monty_hall_switch_wins_two_thirds() {
        let rate = monty_hall_seeded(30_000, true, 42).unwrap();
        assert!((rate - 2.0 / 3.0).abs() < 0.02, "switch rate {rate}");
    }

    #[test]
    fn test_monty_hall_stay_wins_one_third() {
        let rate = monty_hall_seeded(30_000, false, 42).unwrap();
        assert!((rate - 1.0 / 3.0).abs() < 0.02, "stay rate {rate}");
    }

    #[test]
    fn test_monty_hall_deterministic_for_seed() {
        let a = monty_hall_seeded(1000, true, 7).unwrap();
        let b = monty_hall_seeded(1000, true, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_monty_hall_zero_trials() {
        assert!(monty_hall_seeded(0, true, 1).is_err());
    }

    #[test]
    fn test_benford() {
        assert!((benford_probability(1).unwrap() - 0.30103).abs() < 1e-5);
        assert!((benford_probability(9).unwrap() - 0.045757).abs() < 1e-5);
        assert!(benford_probability(0).is_err());
        assert!(benford_probability(10).is_err());
    }

    #[test]
    fn test_benford_distribution_sums_to_one() {
        let dist = benford_distribution();
        let total: f64 = dist.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!(dist.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(dist[2], benford_probability(3).unwrap());
    }

    #[test]
    fn test_simpsons_paradox_data() {
        let data = simpsons_paradox();
        assert!(data.paradox_holds);
        assert_eq!(data.treatment_a.combined, Tally::new(273, 350));
        assert_eq!(data.treatment_b.combined, Tally::new(289, 350));
        assert!((data.treatment_a.small_rate - 81.0 / 87.0).abs() < 1e-12);
        assert!((data.treatment_b.large_rate - 0.6875).abs() < 1e-12);
    }

    #[test]
    fn test_tally_empty_rate() {
        assert_eq!(Tally::new(0, 0).rate(), 0.0);
    }

    #[test]
    fn test_tally_combine_saturates() {
        let big = Tally::new(u32::MAX - 1, u32::MAX);
        let pooled = big.combine(Tally::new(5, 10));
        assert_eq!(pooled, Tally::new(u32::MAX, u32::MAX));
        assert_eq!(pooled.rate(), 1.0);
    }
}
