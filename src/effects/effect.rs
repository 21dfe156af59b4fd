//! Effect descriptions.
//!
//! `Effect` is what a single caravan reports back from `Caravan::place`.
//! `Effects` is the whole-move delta handed to the driver: which card moved
//! where, what was removed from which caravan, and which caravans need to be
//! redrawn. A presentation layer can animate from it without the engine
//! knowing anything about animation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::targeting::PurgeCriterion;
use crate::caravan::{Base, CaravanId, PlacedCard, Target};
use crate::core::{CardId, PlayerId};

/// Caravan-local outcome of a successful placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// A numerical card became a new base at this index.
    Appended { base: usize },

    /// A Queen or King joined the base anchored by `anchor`.
    Attached { card: PlacedCard, anchor: CardId },

    /// A Jack removed its target base. Neither the Jack nor the base remain.
    BaseDiscarded { jack: PlacedCard, removed: Base },

    /// A Joker joined the base anchored by `anchor`; every other base matching
    /// `criterion` on the table must now be purged.
    PurgeTriggered {
        joker: PlacedCard,
        anchor: PlacedCard,
        criterion: PurgeCriterion,
    },
}

impl Effect {
    #[must_use]
    pub fn kind(&self) -> EffectKind {
        match self {
            Effect::Appended { .. } => EffectKind::NewBase,
            Effect::Attached { .. } => EffectKind::Modified,
            Effect::BaseDiscarded { .. } => EffectKind::JackDiscard,
            Effect::PurgeTriggered { .. } => EffectKind::JokerPurge,
        }
    }
}

/// Coarse classification of an applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    NewBase,
    /// Queen or King attached.
    Modified,
    JackDiscard,
    JokerPurge,
    HandDiscard,
    CaravanDiscard,
}

/// A card placed from a hand onto a caravan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedCard {
    pub card: PlacedCard,
    pub caravan: CaravanId,
    pub target: Target,
}

/// A card that left a caravan for the discard sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovedCard {
    pub card: PlacedCard,
    pub from: CaravanId,
}

/// Everything one applied move changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effects {
    pub player: PlayerId,
    pub kind: EffectKind,
    pub played: Option<PlayedCard>,
    /// Cards removed from caravans, in removal order.
    ///
    /// A Jack is listed under the caravan it hit, after its base, but it goes
    /// from the hand straight to the discard and is never held by the caravan.
    pub removed: SmallVec<[RemovedCard; 8]>,
    /// Hand card thrown away by a hand discard.
    pub discarded: Option<CardId>,
    /// Card drawn into the hand afterwards, if any.
    pub drawn: Option<CardId>,
    /// Caravans whose contents changed, in table order.
    pub affected: SmallVec<[CaravanId; 6]>,
}

impl Effects {
    #[must_use]
    pub fn new(player: PlayerId, kind: EffectKind) -> Self {
        Self {
            player,
            kind,
            played: None,
            removed: SmallVec::new(),
            discarded: None,
            drawn: None,
            affected: SmallVec::new(),
        }
    }

    /// Mark a caravan as changed.
    pub fn touch(&mut self, caravan: CaravanId) {
        if let Err(pos) = self.affected.binary_search(&caravan) {
            self.affected.insert(pos, caravan);
        }
    }

    /// Record every card of a removed base.
    pub fn record_base(&mut self, base: &Base, from: CaravanId) {
        self.removed
            .extend(base.cards().map(|card| RemovedCard { card, from }));
        self.touch(from);
    }

    /// Record one removed card.
    pub fn record_card(&mut self, card: PlacedCard, from: CaravanId) {
        self.removed.push(RemovedCard { card, from });
        self.touch(from);
    }

    /// IDs of every removed card.
    pub fn removed_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.removed.iter().map(|r| r.card.id)
    }
}
