//! The caravan: an ordered stack of bases with attached face cards.
//!
//! A caravan's `value`, `suit` and `direction` are never patched in place.
//! Every mutation ends in `recompute`, which derives all three from `bases`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::legality::{self, CaravanLimits};
use crate::cards::{Card, Rank, Suit};
use crate::core::{CardId, PlayerId};
use crate::effects::{Effect, PurgeCriterion};
use crate::error::PlacementError;

/// One of a player's three caravan positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    A,
    B,
    C,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::A, Slot::B, Slot::C];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Identifies a caravan by owner and slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CaravanId {
    pub owner: PlayerId,
    pub slot: Slot,
}

impl CaravanId {
    #[must_use]
    pub const fn new(owner: PlayerId, slot: Slot) -> Self {
        Self { owner, slot }
    }

    /// Table position 0..6: player one's A-C, then player two's A-C.
    #[must_use]
    pub const fn index(self) -> usize {
        self.owner.index() * Slot::ALL.len() + self.slot.index()
    }

    /// All six caravans in table order.
    pub fn all() -> impl Iterator<Item = CaravanId> {
        PlayerId::both().flat_map(Self::owned_by)
    }

    /// The three caravans owned by `player`.
    pub fn owned_by(player: PlayerId) -> impl Iterator<Item = CaravanId> {
        Slot::ALL.into_iter().map(move |slot| CaravanId::new(player, slot))
    }

    /// The caravan facing this one across the table.
    #[must_use]
    pub const fn opposing(self) -> Self {
        Self::new(self.owner.opponent(), self.slot)
    }
}

impl std::fmt::Display for CaravanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} caravan {:?}", self.owner, self.slot)
    }
}

/// A card on the table: its identity plus its face value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedCard {
    pub id: CardId,
    pub card: Card,
}

impl PlacedCard {
    #[must_use]
    pub const fn new(id: CardId, card: Card) -> Self {
        Self { id, card }
    }
}

/// A numerical anchor card and the face cards attached to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base {
    anchor: PlacedCard,
    attachments: SmallVec<[PlacedCard; 4]>,
}

impl Base {
    #[must_use]
    pub fn new(anchor: PlacedCard) -> Self {
        Self {
            anchor,
            attachments: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn anchor(&self) -> PlacedCard {
        self.anchor
    }

    #[must_use]
    pub fn attachments(&self) -> &[PlacedCard] {
        &self.attachments
    }

    /// Is `id` the anchor or one of the attachments?
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.anchor.id == id || self.attachments.iter().any(|a| a.id == id)
    }

    /// Anchor first, then attachments in the order they were played.
    pub fn cards(&self) -> impl Iterator<Item = PlacedCard> + '_ {
        std::iter::once(self.anchor).chain(self.attachments.iter().copied())
    }

    fn count_rank(&self, rank: Rank) -> usize {
        self.attachments.iter().filter(|a| a.card.rank == rank).count()
    }

    /// Anchor value doubled once per attached King.
    #[must_use]
    pub fn contribution(&self) -> u32 {
        let rank = self.anchor.card.numeric_value().unwrap_or(0);
        rank << self.count_rank(Rank::King)
    }

    fn attach(&mut self, card: PlacedCard) {
        self.attachments.push(card);
    }
}

/// Which way base ranks must continue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Fewer than two bases.
    #[default]
    Undefined,
    Ascending,
    Descending,
}

impl Direction {
    /// Queen reversal. `Undefined` has nothing to reverse.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Direction::Undefined => Direction::Undefined,
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

/// What a card is placed onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// The empty-slot marker of a caravan with no bases.
    Placeholder,
    /// A card already in the caravan (anchor or attachment).
    Card(CardId),
}

/// A caravan and its derived statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caravan {
    id: CaravanId,
    limits: CaravanLimits,
    bases: Vec<Base>,
    value: u32,
    suit: Option<Suit>,
    direction: Direction,
}

impl Caravan {
    /// Create an empty caravan with the standard limits.
    #[must_use]
    pub fn new(id: CaravanId) -> Self {
        Self::with_limits(id, CaravanLimits::default())
    }

    #[must_use]
    pub fn with_limits(id: CaravanId, limits: CaravanLimits) -> Self {
        Self {
            id,
            limits,
            bases: Vec::new(),
            value: 0,
            suit: None,
            direction: Direction::Undefined,
        }
    }

    #[must_use]
    pub fn id(&self) -> CaravanId {
        self.id
    }

    #[must_use]
    pub fn limits(&self) -> CaravanLimits {
        self.limits
    }

    #[must_use]
    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    #[must_use]
    pub fn last_base(&self) -> Option<&Base> {
        self.bases.last()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.base_index_of(id).is_some()
    }

    /// Index of the base holding `id` as anchor or attachment.
    #[must_use]
    pub fn base_index_of(&self, id: CardId) -> Option<usize> {
        self.bases.iter().position(|b| b.contains(id))
    }

    /// Every card in the caravan, base by base.
    pub fn cards(&self) -> impl Iterator<Item = PlacedCard> + '_ {
        self.bases.iter().flat_map(|b| b.cards())
    }

    /// Would placing `card` on `target` be legal? Never mutates.
    pub fn check(&self, card: Card, target: Target) -> Result<(), PlacementError> {
        legality::check_placement(self, card, target)
    }

    /// Place a card, applying its caravan-local effect.
    ///
    /// A Jack removes its base immediately and the removed base is returned in
    /// the effect. A Joker stays attached; the cross-caravan purge it triggers
    /// is left to `effects::resolver::purge`.
    pub fn place(&mut self, card: PlacedCard, target: Target) -> Result<Effect, PlacementError> {
        self.check(card.card, target)?;

        if card.card.is_numerical() {
            self.bases.push(Base::new(card));
            self.recompute();
            return Ok(Effect::Appended {
                base: self.bases.len() - 1,
            });
        }

        let index = match target {
            Target::Card(id) => self.base_index_of(id),
            Target::Placeholder => None,
        }
        .ok_or(PlacementError::NoSuchTarget)?;

        let effect = match card.card.rank {
            // The Jack leaves together with the base it removes.
            Rank::Jack => Effect::BaseDiscarded {
                jack: card,
                removed: self.bases.remove(index),
            },
            rank => {
                self.bases[index].attach(card);
                let anchor = self.bases[index].anchor();
                if rank == Rank::Joker {
                    Effect::PurgeTriggered {
                        joker: card,
                        anchor,
                        criterion: PurgeCriterion::for_anchor(anchor.card),
                    }
                } else {
                    Effect::Attached {
                        card,
                        anchor: anchor.id,
                    }
                }
            }
        };

        self.recompute();
        Ok(effect)
    }

    /// Remove the whole base containing `id`. `None` if `id` is not here.
    pub fn remove(&mut self, id: CardId) -> Option<Base> {
        let index = self.base_index_of(id)?;
        let base = self.bases.remove(index);
        self.recompute();
        Some(base)
    }

    /// Remove every base whose anchor satisfies `predicate`, in table order.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&PlacedCard) -> bool) -> Vec<Base> {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.bases.len());
        for base in self.bases.drain(..) {
            if predicate(&base.anchor) {
                removed.push(base);
            } else {
                kept.push(base);
            }
        }
        self.bases = kept;
        self.recompute();
        removed
    }

    /// Remove every base.
    pub fn clear(&mut self) -> Vec<Base> {
        let removed = std::mem::take(&mut self.bases);
        self.recompute();
        removed
    }

    /// Rederive value, suit and direction from `bases`.
    pub fn recompute(&mut self) {
        self.value = compute_value(&self.bases);
        self.suit = compute_suit(&self.bases);
        self.direction = compute_direction(&self.bases);
    }
}

/// Sum of base contributions.
#[must_use]
pub fn compute_value(bases: &[Base]) -> u32 {
    bases.iter().map(Base::contribution).sum()
}

/// Suit of the last base, overridden by the last Queen attached to it.
#[must_use]
pub fn compute_suit(bases: &[Base]) -> Option<Suit> {
    let last = bases.last()?;
    let queen = last
        .attachments
        .iter()
        .rev()
        .find(|a| a.card.rank == Rank::Queen);
    Some(queen.map_or(last.anchor.card.suit, |q| q.card.suit))
}

/// Direction from the last two anchors (ties descend), flipped once per
/// Queen on the last base.
#[must_use]
pub fn compute_direction(bases: &[Base]) -> Direction {
    let [.., prev, last] = bases else {
        return Direction::Undefined;
    };

    let rank = |b: &Base| b.anchor.card.rank;
    let base_direction = if rank(last) > rank(prev) {
        Direction::Ascending
    } else {
        Direction::Descending
    };

    if last.count_rank(Rank::Queen) % 2 == 1 {
        base_direction.flipped()
    } else {
        base_direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(id: u32, rank: Rank, suit: Suit) -> PlacedCard {
        PlacedCard::new(CardId(id), Card::new(rank, suit))
    }

    fn caravan() -> Caravan {
        Caravan::new(CaravanId::new(PlayerId::ONE, Slot::A))
    }

    #[test]
    fn test_caravan_id_layout() {
        let ids: Vec<_> = CaravanId::all().map(CaravanId::index).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);

        let b2 = CaravanId::new(PlayerId::TWO, Slot::B);
        assert_eq!(b2.opposing(), CaravanId::new(PlayerId::ONE, Slot::B));
        assert_eq!(b2.to_string(), "Player 2 caravan B");
    }

    #[test]
    fn test_empty_caravan_stats() {
        let c = caravan();
        assert!(c.is_empty());
        assert_eq!(c.value(), 0);
        assert_eq!(c.suit(), None);
        assert_eq!(c.direction(), Direction::Undefined);
    }

    #[test]
    fn test_first_base_on_placeholder() {
        let mut c = caravan();
        let effect = c.place(placed(1, Rank::Five, Suit::Clubs), Target::Placeholder).unwrap();

        assert_eq!(effect, Effect::Appended { base: 0 });
        assert_eq!(c.value(), 5);
        assert_eq!(c.suit(), Some(Suit::Clubs));
        assert_eq!(c.direction(), Direction::Undefined);
    }

    #[test]
    fn test_direction_ties_descend() {
        let mut c = caravan();
        c.place(placed(1, Rank::Four, Suit::Clubs), Target::Placeholder).unwrap();
        // Equal neighbouring ranks only arise after a middle base is removed.
        c.place(placed(2, Rank::Seven, Suit::Clubs), Target::Card(CardId(1))).unwrap();
        c.place(placed(3, Rank::Four, Suit::Clubs), Target::Card(CardId(2))).unwrap();
        c.remove(CardId(2));

        assert_eq!(c.bases().len(), 2);
        assert_eq!(c.direction(), Direction::Descending);
    }

    #[test]
    fn test_queen_on_single_base_changes_suit_only() {
        let mut c = caravan();
        c.place(placed(1, Rank::Six, Suit::Spades), Target::Placeholder).unwrap();
        c.place(placed(2, Rank::Queen, Suit::Hearts), Target::Card(CardId(1))).unwrap();

        assert_eq!(c.suit(), Some(Suit::Hearts));
        assert_eq!(c.direction(), Direction::Undefined);
        assert_eq!(c.value(), 6);
    }

    #[test]
    fn test_jack_removes_its_base() {
        let mut c = caravan();
        c.place(placed(1, Rank::Two, Suit::Spades), Target::Placeholder).unwrap();
        c.place(placed(2, Rank::Nine, Suit::Spades), Target::Card(CardId(1))).unwrap();
        c.place(placed(3, Rank::King, Suit::Clubs), Target::Card(CardId(1))).unwrap();

        let effect = c.place(placed(4, Rank::Jack, Suit::Hearts), Target::Card(CardId(3))).unwrap();

        match effect {
            Effect::BaseDiscarded { jack, removed } => {
                assert_eq!(jack.id, CardId(4));
                let ids: Vec<_> = removed.cards().map(|p| p.id).collect();
                assert_eq!(ids, vec![CardId(1), CardId(3)]);
            }
            other => panic!("unexpected effect {other:?}"),
        }
        assert_eq!(c.bases().len(), 1);
        assert_eq!(c.value(), 9);
        assert!(!c.contains(CardId(4)));
    }

    #[test]
    fn test_joker_stays_attached() {
        let mut c = caravan();
        c.place(placed(1, Rank::Ace, Suit::Diamonds), Target::Placeholder).unwrap();
        let effect = c.place(placed(2, Rank::Joker, Suit::RedJoker), Target::Card(CardId(1))).unwrap();

        assert!(matches!(
            effect,
            Effect::PurgeTriggered { criterion: PurgeCriterion::Suit(Suit::Diamonds), .. }
        ));
        assert!(c.contains(CardId(2)));
        assert_eq!(c.value(), 1);
    }

    #[test]
    fn test_remove_by_attachment_removes_base() {
        let mut c = caravan();
        c.place(placed(1, Rank::Three, Suit::Spades), Target::Placeholder).unwrap();
        c.place(placed(2, Rank::King, Suit::Spades), Target::Card(CardId(1))).unwrap();
        assert_eq!(c.value(), 6);

        let base = c.remove(CardId(2)).unwrap();
        assert_eq!(base.anchor().id, CardId(1));
        assert!(c.is_empty());
        assert_eq!(c.value(), 0);

        assert!(c.remove(CardId(99)).is_none());
    }

    #[test]
    fn test_failed_place_does_not_mutate() {
        let mut c = caravan();
        c.place(placed(1, Rank::Three, Suit::Spades), Target::Placeholder).unwrap();
        let before = c.clone();

        let err = c.place(placed(2, Rank::King, Suit::Spades), Target::Card(CardId(50)));
        assert_eq!(err, Err(PlacementError::NoSuchTarget));
        assert_eq!(c, before);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut c = caravan();
        c.place(placed(1, Rank::Three, Suit::Spades), Target::Placeholder).unwrap();
        c.place(placed(2, Rank::Eight, Suit::Hearts), Target::Card(CardId(1))).unwrap();
        c.place(placed(3, Rank::Queen, Suit::Clubs), Target::Card(CardId(2))).unwrap();

        let snapshot = c.clone();
        c.recompute();
        c.recompute();
        assert_eq!(c, snapshot);
    }

    #[test]
    fn test_clear() {
        let mut c = caravan();
        c.place(placed(1, Rank::Three, Suit::Spades), Target::Placeholder).unwrap();
        c.place(placed(2, Rank::Eight, Suit::Hearts), Target::Card(CardId(1))).unwrap();

        let removed = c.clear();
        assert_eq!(removed.len(), 2);
        assert!(c.is_empty());
        assert_eq!(c.suit(), None);
    }
}
