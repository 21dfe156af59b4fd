//! Win evaluation.
//!
//! Caravans are compared pairwise across the table: player one's A against
//! player two's A, and so on. A pair is *sold* once either side is inside the
//! sell range and the two values differ. The match ends when all three pairs
//! are sold; whoever sold at least two of them wins.

use serde::{Deserialize, Serialize};

use crate::caravan::{Caravan, CaravanId, Slot};
use crate::core::{GameConfig, PlayerId};

/// State of one facing pair of caravans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairVerdict {
    /// Neither side is inside the sell range.
    Undecided,
    /// Both sides hold the same value.
    Tied,
    Won(PlayerId),
}

/// Judge one pair from player one's value `one` and player two's value `two`.
///
/// ```
/// use caravan_engine::core::{GameConfig, PlayerId};
/// use caravan_engine::rules::{pair_verdict, PairVerdict};
///
/// let config = GameConfig::default();
/// assert_eq!(pair_verdict(23, 19, &config), PairVerdict::Won(PlayerId::ONE));
/// assert_eq!(pair_verdict(27, 22, &config), PairVerdict::Won(PlayerId::TWO));
/// assert_eq!(pair_verdict(24, 24, &config), PairVerdict::Tied);
/// assert_eq!(pair_verdict(12, 30, &config), PairVerdict::Undecided);
/// ```
#[must_use]
pub fn pair_verdict(one: u32, two: u32, config: &GameConfig) -> PairVerdict {
    if !config.sells(one) && !config.sells(two) {
        return PairVerdict::Undecided;
    }
    if one == two {
        return PairVerdict::Tied;
    }

    let bust = |v: u32| v > config.sell_max;
    if bust(two) || (!bust(one) && one > two) {
        PairVerdict::Won(PlayerId::ONE)
    } else {
        PairVerdict::Won(PlayerId::TWO)
    }
}

/// Verdicts for the A, B and C pairs.
///
/// `caravans` must be the six caravans in `CaravanId::index` order.
#[must_use]
pub fn pair_verdicts(caravans: &[Caravan], config: &GameConfig) -> [PairVerdict; 3] {
    Slot::ALL.map(|slot| {
        let value = |owner| {
            caravans
                .get(CaravanId::new(owner, slot).index())
                .map_or(0, Caravan::value)
        };
        pair_verdict(value(PlayerId::ONE), value(PlayerId::TWO), config)
    })
}

/// Overall winner, once every pair is sold.
#[must_use]
pub fn evaluate(caravans: &[Caravan], config: &GameConfig) -> Option<PlayerId> {
    let mut one_wins = 0;
    for verdict in pair_verdicts(caravans, config) {
        match verdict {
            PairVerdict::Won(PlayerId::ONE) => one_wins += 1,
            PairVerdict::Won(_) => {}
            PairVerdict::Undecided | PairVerdict::Tied => return None,
        }
    }

    Some(if one_wins >= 2 {
        PlayerId::ONE
    } else {
        PlayerId::TWO
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_side_in_range_is_enough() {
        let config = GameConfig::default();
        assert_eq!(pair_verdict(21, 0, &config), PairVerdict::Won(PlayerId::ONE));
        assert_eq!(pair_verdict(0, 26, &config), PairVerdict::Won(PlayerId::TWO));
    }

    #[test]
    fn test_overflow_loses() {
        let config = GameConfig::default();
        assert_eq!(pair_verdict(21, 40, &config), PairVerdict::Won(PlayerId::ONE));
        assert_eq!(pair_verdict(40, 21, &config), PairVerdict::Won(PlayerId::TWO));
    }

    #[test]
    fn test_tie_inside_range() {
        let config = GameConfig::default();
        assert_eq!(pair_verdict(26, 26, &config), PairVerdict::Tied);
    }

    #[test]
    fn test_custom_sell_range() {
        let config = GameConfig::default().with_sell_range(10, 12);
        assert_eq!(pair_verdict(11, 5, &config), PairVerdict::Won(PlayerId::ONE));
        assert_eq!(pair_verdict(13, 11, &config), PairVerdict::Won(PlayerId::TWO));
        assert_eq!(pair_verdict(9, 13, &config), PairVerdict::Undecided);
    }
}
