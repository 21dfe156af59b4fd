//! Game configuration.
//!
//! `GameConfig` holds every tunable of a match. The defaults are the standard
//! Caravan table; tests and alternative front ends adjust them with the
//! `with_*` builders or by deserializing a partial document, where missing
//! fields fall back to the defaults.
//!
//! ```
//! use caravan_engine::core::GameConfig;
//!
//! let config = GameConfig::default().with_opening_moves(2);
//! assert_eq!(config.opening_moves, 2);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::caravan::{CaravanLimits, Slot, MAX_ATTACHMENTS, MAX_BASES};
use crate::cards::POOL_SIZE;
use crate::error::ConfigError;

/// Move-category weights for the random opponent.
///
/// A uniform sample `r` picks a play when `r < play`, a hand discard when
/// `r < play + discard_card`, and a caravan discard otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyWeights {
    pub play: f64,
    pub discard_card: f64,
}

impl Default for PolicyWeights {
    fn default() -> Self {
        Self {
            play: 0.95,
            discard_card: 0.04,
        }
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards dealt to each player at the start.
    pub hand_size: usize,

    /// After playing a card, draw one if the hand holds fewer than this.
    pub refill_threshold: usize,

    /// Moves each player must spend seeding empty caravans before anything else.
    pub opening_moves: u8,

    /// Maximum bases in one caravan.
    pub max_bases: usize,

    /// Maximum non-Jack face cards on one base.
    pub max_attachments: usize,

    /// Lowest sellable caravan value.
    pub sell_min: u32,

    /// Highest sellable caravan value.
    pub sell_max: u32,

    pub policy: PolicyWeights,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 8,
            refill_threshold: 5,
            opening_moves: 3,
            max_bases: MAX_BASES,
            max_attachments: MAX_ATTACHMENTS,
            sell_min: 21,
            sell_max: 26,
            policy: PolicyWeights::default(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_refill_threshold(mut self, threshold: usize) -> Self {
        self.refill_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_opening_moves(mut self, moves: u8) -> Self {
        self.opening_moves = moves;
        self
    }

    #[must_use]
    pub fn with_limits(mut self, limits: CaravanLimits) -> Self {
        self.max_bases = limits.max_bases;
        self.max_attachments = limits.max_attachments;
        self
    }

    #[must_use]
    pub fn with_sell_range(mut self, min: u32, max: u32) -> Self {
        self.sell_min = min;
        self.sell_max = max;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: PolicyWeights) -> Self {
        self.policy = policy;
        self
    }

    /// Caravan limits derived from this configuration.
    #[must_use]
    pub fn limits(&self) -> CaravanLimits {
        CaravanLimits {
            max_bases: self.max_bases,
            max_attachments: self.max_attachments,
        }
    }

    /// Is `value` within the sell range?
    #[must_use]
    pub fn sells(&self, value: u32) -> bool {
        (self.sell_min..=self.sell_max).contains(&value)
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("hand_size", self.hand_size),
            ("refill_threshold", self.refill_threshold),
            ("max_bases", self.max_bases),
            ("max_attachments", self.max_attachments),
        ] {
            if value == 0 {
                return Err(ConfigError::TooSmall { field, min: 1, value });
            }
        }

        if self.hand_size > POOL_SIZE {
            return Err(ConfigError::TooLarge {
                field: "hand_size",
                max: POOL_SIZE,
                value: self.hand_size,
            });
        }

        // Each opening move seeds a different empty caravan of the mover.
        if usize::from(self.opening_moves) > Slot::ALL.len() {
            return Err(ConfigError::TooLarge {
                field: "opening_moves",
                max: Slot::ALL.len(),
                value: usize::from(self.opening_moves),
            });
        }

        if usize::from(self.opening_moves) > self.hand_size {
            return Err(ConfigError::TooSmall {
                field: "hand_size",
                min: usize::from(self.opening_moves),
                value: self.hand_size,
            });
        }

        if self.refill_threshold > self.hand_size {
            return Err(ConfigError::RefillAboveHandSize {
                threshold: self.refill_threshold,
                hand_size: self.hand_size,
            });
        }

        if self.sell_min > self.sell_max {
            return Err(ConfigError::EmptySellRange {
                min: self.sell_min,
                max: self.sell_max,
            });
        }

        let PolicyWeights { play, discard_card } = self.policy;
        let in_unit = |w: f64| (0.0..=1.0).contains(&w);
        if !in_unit(play) || !in_unit(discard_card) || play + discard_card > 1.0 {
            return Err(ConfigError::PolicyWeights { play, discard_card });
        }

        Ok(())
    }
}
