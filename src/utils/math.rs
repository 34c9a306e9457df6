//! # Quest Mathematics
//!
//! The numeric rules that bound quest generation. Out-of-range requests are
//! clamped rather than rejected.

use crate::config::*;

/// Narrows a raw command-line request into `u32`, saturating at both ends.
///
/// The result still goes through the range clamps below.
///
/// # Examples
///
/// ```
/// use questsmith::{clamp_monster_count, saturate_request};
///
/// assert_eq!(saturate_request(-1), 0);
/// assert_eq!(saturate_request(99_999_999_999), u32::MAX);
/// assert_eq!(clamp_monster_count(saturate_request(-1)), 1);
/// assert_eq!(clamp_monster_count(saturate_request(99_999_999_999)), 3);
/// ```
pub fn saturate_request(requested: i64) -> u32 {
    requested.clamp(0, i64::from(u32::MAX)) as u32
}

/// Clamps a requested monster count to 1..=3.
///
/// # Examples
///
/// ```
/// use questsmith::clamp_monster_count;
///
/// assert_eq!(clamp_monster_count(0), 1);
/// assert_eq!(clamp_monster_count(2), 2);
/// assert_eq!(clamp_monster_count(8), 3);
/// ```
pub fn clamp_monster_count(requested: u32) -> u32 {
    requested.clamp(MIN_MONSTERS, MAX_MONSTERS)
}

/// Clamps a requested reward count to 1..=10.
pub fn clamp_reward_count(requested: u32) -> u32 {
    requested.clamp(MIN_REWARDS, MAX_REWARDS)
}

/// Clamps a star rating to 1..=9.
pub fn clamp_difficulty(difficulty: u32) -> u32 {
    difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
}

/// Highest item rarity eligible as a reward at `difficulty`.
///
/// # Examples
///
/// ```
/// use questsmith::max_reward_rarity;
///
/// assert_eq!(max_reward_rarity(1), 3);
/// assert_eq!(max_reward_rarity(5), 7);
/// assert_eq!(max_reward_rarity(9), 7);
/// ```
pub fn max_reward_rarity(difficulty: u32) -> u32 {
    difficulty.saturating_add(RARITY_HEADROOM).min(RARITY_CAP)
}

/// Drop probability for every reward of a quest at `difficulty`.
pub fn drop_probability(difficulty: u32) -> f64 {
    let base = BASE_DROP_PROBABILITY + DROP_PROBABILITY_PER_STAR * difficulty as f64;
    base.min(MAX_DROP_PROBABILITY)
}

/// Whether an item of `rarity` drops in stacks larger than one.
pub fn is_stackable(rarity: u32) -> bool {
    rarity <= STACKABLE_RARITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_clamping() {
        assert_eq!(clamp_reward_count(0), 1);
        assert_eq!(clamp_reward_count(10), 10);
        assert_eq!(clamp_reward_count(11), 10);
        assert_eq!(clamp_difficulty(0), 1);
        assert_eq!(clamp_difficulty(12), 9);
    }

    #[test]
    fn test_saturate_request() {
        assert_eq!(saturate_request(i64::MIN), 0);
        assert_eq!(saturate_request(7), 7);
        assert_eq!(saturate_request(i64::MAX), u32::MAX);
        assert_eq!(clamp_difficulty(saturate_request(-3)), 1);
        assert_eq!(clamp_reward_count(saturate_request(5_000_000_000)), 10);
    }

    #[test]
    fn test_drop_probability_follows_formula() {
        for difficulty in 0..=9 {
            let expected = (0.1 + 0.05 * difficulty as f64).min(0.85);
            assert_eq!(drop_probability(difficulty), expected);
        }
    }

    #[test]
    fn test_drop_probability_scales_and_caps() {
        assert!((drop_probability(1) - 0.15).abs() < 1e-9);
        assert!((drop_probability(5) - 0.35).abs() < 1e-9);
        assert!(drop_probability(9) <= MAX_DROP_PROBABILITY);
        assert_eq!(drop_probability(20), MAX_DROP_PROBABILITY);
    }

    #[test]
    fn test_stackable_threshold() {
        assert!(is_stackable(1));
        assert!(is_stackable(3));
        assert!(!is_stackable(4));
    }
}
