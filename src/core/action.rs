//! Move representation.
//!
//! A Caravan turn is exactly one of three moves:
//! - discard a card from hand (then draw)
//! - discard every card of one of your own caravans
//! - play a hand card onto a caravan, targeting a card or the empty-slot
//!   placeholder
//!
//! ```
//! use caravan_engine::caravan::{CaravanId, Slot, Target};
//! use caravan_engine::core::{CardId, Move, PlayerId};
//!
//! let mv = Move::Play {
//!     card: CardId(7),
//!     caravan: CaravanId::new(PlayerId::ONE, Slot::A),
//!     target: Target::Placeholder,
//! };
//! assert!(mv.is_play());
//! assert_eq!(mv.card(), Some(CardId(7)));
//! ```

use serde::{Deserialize, Serialize};

use super::entity::CardId;
use super::player::PlayerId;
use crate::caravan::{CaravanId, Target};

/// One turn's move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    DiscardCard {
        card: CardId,
    },
    DiscardCaravan {
        caravan: CaravanId,
    },
    Play {
        card: CardId,
        caravan: CaravanId,
        target: Target,
    },
}

impl Move {
    #[must_use]
    pub const fn is_play(&self) -> bool {
        matches!(self, Move::Play { .. })
    }

    /// The hand card this move spends, if any.
    #[must_use]
    pub const fn card(&self) -> Option<CardId> {
        match *self {
            Move::DiscardCard { card } | Move::Play { card, .. } => Some(card),
            Move::DiscardCaravan { .. } => None,
        }
    }

    /// The caravan this move touches directly, if any.
    #[must_use]
    pub const fn caravan(&self) -> Option<CaravanId> {
        match *self {
            Move::DiscardCaravan { caravan } | Move::Play { caravan, .. } => Some(caravan),
            Move::DiscardCard { .. } => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::DiscardCard { card } => write!(f, "discard {card}"),
            Move::DiscardCaravan { caravan } => write!(f, "discard {caravan}"),
            Move::Play {
                card,
                caravan,
                target: Target::Placeholder,
            } => write!(f, "play {card} on empty {caravan}"),
            Move::Play {
                card,
                caravan,
                target: Target::Card(target),
            } => write!(f, "play {card} on {target} in {caravan}"),
        }
    }
}

/// An applied move, kept in the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: PlayerId,
    pub mv: Move,
    /// Turn number at which the move was applied, starting at 0.
    pub turn: u32,
}

impl MoveRecord {
    #[must_use]
    pub const fn new(player: PlayerId, mv: Move, turn: u32) -> Self {
        Self { player, mv, turn }
    }
}
