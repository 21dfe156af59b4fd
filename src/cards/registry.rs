//! Card arena: the single source of truth for what every `CardId` is.
//!
//! The arena only grows. Cards are never removed from it, only moved between
//! zones, so a `CardId` stays valid for the whole match.

use serde::{Deserialize, Serialize};

use super::definition::{Card, Rank, Suit};
use crate::core::entity::CardId;

/// Number of cards in one player's pool (52 + 2 jokers).
pub const POOL_SIZE: usize = 54;

/// Arena of every card in a match, indexed by `CardId`.
///
/// ```
/// use caravan_engine::cards::{Card, CardArena, Rank, Suit};
///
/// let mut arena = CardArena::new();
/// let id = arena.alloc(Card::new(Rank::Seven, Suit::Hearts));
///
/// assert_eq!(arena.get(id), Some(Card::new(Rank::Seven, Suit::Hearts)));
/// assert_eq!(arena.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardArena {
    cards: Vec<Card>,
}

impl CardArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card and return its identity.
    pub fn alloc(&mut self, card: Card) -> CardId {
        let id = CardId::new(self.cards.len() as u32);
        self.cards.push(card);
        id
    }

    /// Register a full 54-card pool, returning the new IDs in deck order.
    pub fn alloc_pool(&mut self) -> Vec<CardId> {
        standard_pool().into_iter().map(|card| self.alloc(card)).collect()
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<Card> {
        self.cards.get(id.index()).copied()
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        id.index() < self.cards.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All (id, card) pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, Card)> + '_ {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, &card)| (CardId::new(i as u32), card))
    }
}

/// One player's pool: every rank/suit of a standard deck plus both jokers.
#[must_use]
pub fn standard_pool() -> Vec<Card> {
    let mut pool = Vec::with_capacity(POOL_SIZE);
    for rank in Rank::NUMERICAL.into_iter().chain(Rank::COURT) {
        for suit in Suit::STANDARD {
            pool.push(Card::new(rank, suit));
        }
    }
    pool.push(Card::new(Rank::Joker, Suit::BlackJoker));
    pool.push(Card::new(Rank::Joker, Suit::RedJoker));
    pool
}
