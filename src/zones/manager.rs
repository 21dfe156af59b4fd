//! Zone ledger: which container owns each card.
//!
//! The containers themselves (hands, draw piles, caravans, discard) keep card
//! order. The `ZoneManager` keeps one authoritative location per card so a
//! transfer can check where a card really is before moving it, and so
//! `GameState::check_ownership` has something to compare the containers to.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::caravan::CaravanId;
use crate::core::{CardId, PlayerId};

/// A container that can own cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Hand(PlayerId),
    DrawPile(PlayerId),
    Caravan(CaravanId),
    Discard,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Hand(p) => write!(f, "{p} hand"),
            Zone::DrawPile(p) => write!(f, "{p} draw pile"),
            Zone::Caravan(c) => write!(f, "{c}"),
            Zone::Discard => f.write_str("discard"),
        }
    }
}

/// Card locations, one entry per card in the match.
///
/// ```
/// use caravan_engine::core::{CardId, PlayerId};
/// use caravan_engine::zones::{Zone, ZoneManager};
///
/// let mut zones = ZoneManager::new();
/// zones.place(CardId(0), Zone::DrawPile(PlayerId::ONE));
///
/// let from = zones.transfer(CardId(0), Zone::DrawPile(PlayerId::ONE), Zone::Hand(PlayerId::ONE));
/// assert!(from);
/// assert_eq!(zones.zone_of(CardId(0)), Some(Zone::Hand(PlayerId::ONE)));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ZoneManager {
    locations: FxHashMap<CardId, Zone>,
}

impl ZoneManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly dealt card.
    ///
    /// Returns `false` (and changes nothing) if the card is already tracked.
    pub fn place(&mut self, card: CardId, zone: Zone) -> bool {
        if self.locations.contains_key(&card) {
            return false;
        }
        self.locations.insert(card, zone);
        true
    }

    /// Move a card from `from` to `to`.
    ///
    /// Returns `false` (and changes nothing) unless the card is currently
    /// recorded in `from`.
    pub fn transfer(&mut self, card: CardId, from: Zone, to: Zone) -> bool {
        match self.locations.get_mut(&card) {
            Some(zone) if *zone == from => {
                *zone = to;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn zone_of(&self, card: CardId) -> Option<Zone> {
        self.locations.get(&card).copied()
    }

    #[must_use]
    pub fn is_in_zone(&self, card: CardId, zone: Zone) -> bool {
        self.locations.get(&card) == Some(&zone)
    }

    /// Number of cards currently recorded in `zone`.
    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.locations.values().filter(|&&z| z == zone).count()
    }

    /// Number of tracked cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
