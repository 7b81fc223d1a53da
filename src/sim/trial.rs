//! Trial engine for the secretary stopping rule.
//!
//! One trial draws a uniformly random arrival order of `n` distinct
//! candidates (identifiers `0..n`, where `n - 1` is the unique best),
//! rejects the first `skip` arrivals outright, then commits to the first
//! later candidate that beats every rejected one.

use crate::sim::error::SimError;
use crate::sim::rng::Rng;

/// Run one randomized trial and return the identifier of the chosen
/// candidate. The result is always in `[0, n - 1]`.
///
/// The randomness source is an explicit parameter so trials are
/// deterministic under a fixed seed and safe to run on independent
/// per-task generators.
pub fn run_trial(n: usize, skip: usize, rng: &mut Rng) -> Result<usize, SimError> {
    if n == 0 {
        return Err(SimError::EmptyPool);
    }
    if skip > n {
        return Err(SimError::SkipOutOfRange { skip, n });
    }

    let mut arrivals: Vec<usize> = (0..n).collect();
    rng.shuffle(&mut arrivals);
    Ok(choose_from_arrivals(&arrivals, skip))
}

/// Apply the stopping rule to a concrete arrival order.
///
/// `best_so_far` is the maximum of the first `skip` arrivals, or `None`
/// when nothing is skipped (a sentinel below every valid identifier).
/// When no remaining arrival beats it, the rule falls back to the last
/// arrival. The fallback is an exact tie-break policy, not a degenerate
/// case: it dominates the aggregate statistics once `skip` nears `n`.
///
/// Panics if `arrivals` is empty or `skip > arrivals.len()`; callers go
/// through [run_trial], which validates both.
pub fn choose_from_arrivals(arrivals: &[usize], skip: usize) -> usize {
    let best_so_far = arrivals[..skip].iter().copied().max();
    arrivals[skip..]
        .iter()
        .copied()
        .find(|&candidate| best_so_far.map_or(true, |best| candidate > best))
        .unwrap_or_else(|| arrivals[arrivals.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_arrival_order_picks_first_candidate_beating_skipped_max() {
        // best_so_far = max(2, 0) = 2; scan [4, 1, 3]; first value > 2 is 4.
        assert_eq!(choose_from_arrivals(&[2, 0, 4, 1, 3], 2), 4);
    }

    #[test]
    fn skipping_everything_falls_back_to_last_arrival() {
        assert_eq!(choose_from_arrivals(&[2, 0, 4, 1, 3], 5), 3);
    }

    #[test]
    fn skipping_nothing_commits_to_first_arrival() {
        // No sentinel to beat, so the first arrival scanned always wins.
        assert_eq!(choose_from_arrivals(&[2, 0, 4, 1, 3], 0), 2);
        assert_eq!(choose_from_arrivals(&[0, 4, 2, 1, 3], 0), 0);
    }

    #[test]
    fn fallback_triggers_when_best_was_skipped() {
        // 4 sits inside the skipped prefix; nothing later beats it.
        assert_eq!(choose_from_arrivals(&[4, 2, 0, 1, 3], 2), 3);
    }

    #[test]
    fn run_trial_outcome_is_always_a_valid_identifier() {
        let mut rng = Rng::new(11);
        for n in 1..=12 {
            for skip in 0..=n {
                let outcome = run_trial(n, skip, &mut rng).unwrap();
                assert!(outcome < n, "outcome {outcome} out of range for n={n}");
            }
        }
    }

    #[test]
    fn run_trial_is_deterministic_per_seed() {
        let a = run_trial(50, 18, &mut Rng::new(77)).unwrap();
        let b = run_trial(50, 18, &mut Rng::new(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn run_trial_rejects_invalid_parameters() {
        let mut rng = Rng::new(0);
        assert_eq!(run_trial(0, 0, &mut rng), Err(SimError::EmptyPool));
        assert_eq!(
            run_trial(10, 11, &mut rng),
            Err(SimError::SkipOutOfRange { skip: 11, n: 10 })
        );
    }

    #[test]
    fn single_candidate_pool_always_selects_it() {
        let mut rng = Rng::new(3);
        assert_eq!(run_trial(1, 0, &mut rng).unwrap(), 0);
        assert_eq!(run_trial(1, 1, &mut rng).unwrap(), 0);
    }
}
