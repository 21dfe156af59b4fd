//! Ordered card containers: a player's hand and draw pile.
//!
//! These hold `CardId`s only and carry no rule logic. Moving a card between
//! containers is done by `GameState`, which keeps the zone ledger in step.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::entity::CardId;

/// Cards a player may play from, in the order they were received.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<CardId>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: CardId) {
        self.cards.push(card);
    }

    /// Remove a card. Returns `false` if the hand did not hold it.
    pub fn remove(&mut self, card: CardId) -> bool {
        if let Some(pos) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(pos);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }
}

/// Face-down cards remaining to a player, drawn from the front.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPile {
    cards: VecDeque<CardId>,
}

impl DrawPile {
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Take the front card.
    pub fn draw(&mut self) -> Option<CardId> {
        self.cards.pop_front()
    }

    #[must_use]
    pub fn peek(&self) -> Option<CardId> {
        self.cards.front().copied()
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }
}
