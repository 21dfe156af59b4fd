//! Which bases a Joker purge hits.
//!
//! A Joker on a base anchored by an Ace purges by suit; on any other anchor it
//! purges by rank. The target base itself is always spared by the resolver.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};

/// Matching rule for a Joker purge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurgeCriterion {
    /// Remove bases anchored by this rank.
    Rank(Rank),
    /// Remove bases anchored by this suit (Joker played on an Ace).
    Suit(Suit),
}

impl PurgeCriterion {
    /// Criterion for a Joker attached to a base anchored by `anchor`.
    #[must_use]
    pub fn for_anchor(anchor: Card) -> Self {
        if anchor.rank == Rank::Ace {
            PurgeCriterion::Suit(anchor.suit)
        } else {
            PurgeCriterion::Rank(anchor.rank)
        }
    }

    /// Does a base anchored by `anchor` fall under this purge?
    #[must_use]
    pub fn matches(self, anchor: Card) -> bool {
        match self {
            PurgeCriterion::Rank(rank) => anchor.rank == rank,
            PurgeCriterion::Suit(suit) => anchor.suit == suit,
        }
    }
}
