//! Match setup: pools, shuffling and the opening deal.
//!
//! Each player brings a full 54-card pool. Pools are shuffled independently,
//! each from its own context stream of the match RNG, so the same seed always
//! deals the same hands.
//!
//! ```
//! use caravan_engine::core::{GameConfig, PlayerId};
//! use caravan_engine::rules::CaravanGameBuilder;
//!
//! let state = CaravanGameBuilder::new()
//!     .config(GameConfig::default().with_hand_size(6).with_refill_threshold(4))
//!     .build(42)
//!     .unwrap();
//!
//! assert_eq!(state.hand(PlayerId::ONE).len(), 6);
//! assert_eq!(state.draw_pile(PlayerId::TWO).len(), 48);
//! ```

use tracing::{debug, warn};

use crate::cards::{Card, CardArena};
use crate::core::{CardId, GameConfig, GameRng, GameState, PlayerId, PlayerMap};
use crate::error::ConfigError;

/// Builder for a match with non-default rules.
#[derive(Clone, Debug, Default)]
pub struct CaravanGameBuilder {
    config: GameConfig,
}

impl CaravanGameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the configuration and deal a match from `seed`.
    pub fn build(self, seed: u64) -> Result<GameState, ConfigError> {
        self.config.validate()?;
        Ok(deal(self.config, seed))
    }
}

/// Deal a match with the standard rules.
#[must_use]
pub fn new_game(seed: u64) -> GameState {
    deal(GameConfig::default(), seed)
}

fn deal(config: GameConfig, seed: u64) -> GameState {
    let rng = GameRng::new(seed);
    let mut cards = CardArena::new();
    let hand_size = config.hand_size;
    let needed = usize::from(config.opening_moves);

    let mut pools = PlayerMap::new(|_| Vec::new());
    for (player, pool) in pools.iter_mut() {
        let mut ids = cards.alloc_pool();
        rng.for_context(&deal_context(player)).shuffle(&mut ids);

        let swaps = seed_numerical(&cards, &mut ids, hand_size, needed);
        if swaps > 0 {
            warn!(%player, swaps, "opening hand short of numerical cards, swapped from pile");
        }
        *pool = ids;
    }

    let hands = PlayerMap::new(|p| pools[p][..hand_size].to_vec());
    let piles = PlayerMap::new(|p| pools[p][hand_size..].to_vec());

    debug!(seed, hand_size, cards = cards.len(), "dealt new game");
    GameState::from_deal(config, cards, hands, piles, rng)
}

fn deal_context(player: PlayerId) -> String {
    format!("deal:p{}", player.index() + 1)
}

/// Make sure the first `hand_size` cards hold at least `needed` numerical
/// cards, swapping face cards out for the earliest numerical cards behind
/// them. Returns the number of swaps.
fn seed_numerical(cards: &CardArena, ids: &mut [CardId], hand_size: usize, needed: usize) -> usize {
    let is_numerical = |id: &CardId| cards.get(*id).is_some_and(Card::is_numerical);
    let mut swaps = 0;

    while ids[..hand_size].iter().filter(|id| is_numerical(id)).count() < needed {
        let face = ids[..hand_size].iter().position(|id| !is_numerical(id));
        let spare = ids[hand_size..].iter().position(|id| is_numerical(id));
        let (Some(face), Some(spare)) = (face, spare) else {
            break;
        };
        ids.swap(face, hand_size + spare);
        swaps += 1;
    }

    swaps
}
