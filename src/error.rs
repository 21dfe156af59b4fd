//! Error types.
//!
//! Two families are kept apart:
//! - `PlacementError`: the game rules reject a placement on a caravan.
//! - The remaining `MoveError` variants: the caller broke the driver contract
//!   (wrong turn, a card it does not hold, a move the phase forbids).
//!
//! None of these are fatal; the state is untouched whenever one is returned.

use thiserror::Error;

use crate::caravan::CaravanId;
use crate::core::{CardId, PlayerId};
use crate::zones::Zone;

/// A placement the caravan rules do not allow.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("caravan already holds {max} bases")]
    CapacityExceeded { max: usize },

    #[error("numerical cards must be placed on the last base")]
    MustAppendToLast,

    #[error("card breaks the caravan's direction and does not match its suit")]
    OrderOrSuitMismatch,

    #[error("base already carries {max} face cards")]
    FaceCapacityExceeded { max: usize },

    #[error("target card is not part of this caravan")]
    NoSuchTarget,
}

/// Why `apply_move` rejected a move.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error("it is {expected}'s turn, not {actual}'s")]
    NotYourTurn { expected: PlayerId, actual: PlayerId },

    #[error("{card} is not in {player}'s hand")]
    CardNotInHand { player: PlayerId, card: CardId },

    #[error("{caravan} does not belong to {player}")]
    ForeignCaravan { player: PlayerId, caravan: CaravanId },

    #[error("{caravan} is empty")]
    EmptyCaravan { caravan: CaravanId },

    #[error("{player} must first seed an empty caravan with a numerical card")]
    OpeningPhase { player: PlayerId },

    #[error("the game is already decided")]
    GameOver,
}

impl MoveError {
    /// `true` when the game rules rejected the move, `false` for caller misuse.
    #[must_use]
    pub fn is_rule_violation(&self) -> bool {
        matches!(self, MoveError::Placement(_))
    }
}

/// Invalid `GameConfig`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be at least {min}, got {value}")]
    TooSmall {
        field: &'static str,
        min: usize,
        value: usize,
    },

    #[error("{field} must be at most {max}, got {value}")]
    TooLarge {
        field: &'static str,
        max: usize,
        value: usize,
    },

    #[error("refill threshold {threshold} exceeds hand size {hand_size}")]
    RefillAboveHandSize { threshold: usize, hand_size: usize },

    #[error("sell range {min}..={max} is empty")]
    EmptySellRange { min: u32, max: u32 },

    #[error("policy weights must lie in [0, 1] and sum to at most 1, got play={play} discard_card={discard_card}")]
    PolicyWeights { play: f64, discard_card: f64 },
}

/// A card found in the wrong place by `GameState::check_ownership`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OwnershipError {
    #[error("{card} is held by more than one container")]
    Duplicated { card: CardId },

    #[error("{card} is not held by any container")]
    Missing { card: CardId },

    #[error("ledger places {card} in {recorded:?}, but it was found in {found}")]
    LedgerMismatch {
        card: CardId,
        recorded: Option<Zone>,
        found: Zone,
    },
}
