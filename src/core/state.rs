//! Game state.
//!
//! ## GameState
//!
//! Everything a match needs:
//! - the card arena and the zone ledger
//! - both hands and draw piles
//! - the six caravans, in `CaravanId::index` order
//! - the discard sink and move history (`im` vectors, cheap to clone)
//! - turn bookkeeping: active player, opening counters, turn number
//!
//! Only `rules::engine` mutates a state. Every card transfer goes through one
//! of the `pub(crate)` helpers below, which update the container and the
//! ledger together; `check_ownership` verifies they still agree.
//!
//! A state serializes whole, RNG position included, so a saved match
//! resumes exactly where it stopped.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::{Move, MoveRecord};
use super::config::GameConfig;
use super::entity::CardId;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::caravan::{Caravan, CaravanId, PlacedCard};
use crate::cards::{Card, CardArena, DrawPile, Hand};
use crate::error::OwnershipError;
use crate::zones::{Zone, ZoneManager};

/// Complete match state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    config: GameConfig,
    cards: CardArena,
    zones: ZoneManager,
    hands: PlayerMap<Hand>,
    draw_piles: PlayerMap<DrawPile>,
    caravans: Vec<Caravan>,
    discard: Vector<CardId>,
    active_player: PlayerId,
    opening_moves_left: PlayerMap<u8>,
    turn_number: u32,
    history: Vector<MoveRecord>,
    rng: GameRng,
}

impl GameState {
    /// Assemble a freshly dealt state. Player one moves first.
    ///
    /// Every card in `hands` and `piles` is recorded in the ledger.
    pub(crate) fn from_deal(
        config: GameConfig,
        cards: CardArena,
        hands: PlayerMap<Vec<CardId>>,
        piles: PlayerMap<Vec<CardId>>,
        rng: GameRng,
    ) -> Self {
        let mut zones = ZoneManager::new();
        for (player, ids) in hands.iter() {
            for &id in ids {
                zones.place(id, Zone::Hand(player));
            }
        }
        for (player, ids) in piles.iter() {
            for &id in ids {
                zones.place(id, Zone::DrawPile(player));
            }
        }

        let limits = config.limits();
        let opening = config.opening_moves;

        Self {
            cards,
            zones,
            hands: PlayerMap::new(|p| {
                let mut hand = Hand::new();
                hands[p].iter().for_each(|&id| hand.add(id));
                hand
            }),
            draw_piles: PlayerMap::new(|p| DrawPile::new(piles[p].iter().copied())),
            caravans: CaravanId::all()
                .map(|id| Caravan::with_limits(id, limits))
                .collect(),
            discard: Vector::new(),
            active_player: PlayerId::ONE,
            opening_moves_left: PlayerMap::with_value(opening),
            turn_number: 0,
            history: Vector::new(),
            rng,
            config,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn cards(&self) -> &CardArena {
        &self.cards
    }

    /// Rank and suit of a dealt card.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<Card> {
        self.cards.get(id)
    }

    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    #[must_use]
    pub fn draw_pile(&self, player: PlayerId) -> &DrawPile {
        &self.draw_piles[player]
    }

    /// All six caravans in table order.
    #[must_use]
    pub fn caravans(&self) -> &[Caravan] {
        &self.caravans
    }

    #[must_use]
    pub fn caravan(&self, id: CaravanId) -> &Caravan {
        &self.caravans[id.index()]
    }

    #[must_use]
    pub fn discard(&self) -> &Vector<CardId> {
        &self.discard
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Opening moves `player` still owes.
    #[must_use]
    pub fn opening_moves_left(&self, player: PlayerId) -> u8 {
        self.opening_moves_left[player]
    }

    /// Is `player` still seeding their caravans?
    #[must_use]
    pub fn in_opening(&self, player: PlayerId) -> bool {
        self.opening_moves_left[player] > 0
    }

    /// Number of moves applied so far.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Root RNG of the match. Derive streams with `for_context`.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    // === Transfers ===

    pub(crate) fn caravans_mut(&mut self) -> &mut [Caravan] {
        &mut self.caravans
    }

    pub(crate) fn caravan_mut(&mut self, id: CaravanId) -> &mut Caravan {
        &mut self.caravans[id.index()]
    }

    /// Move the front card of `player`'s pile into their hand.
    ///
    /// `None` if the pile is empty or the ledger does not place its front
    /// card in the pile; nothing moves in either case.
    pub(crate) fn draw(&mut self, player: PlayerId) -> Option<CardId> {
        let card = self.draw_piles[player].peek()?;
        if !self
            .zones
            .transfer(card, Zone::DrawPile(player), Zone::Hand(player))
        {
            return None;
        }
        self.draw_piles[player].draw();
        self.hands[player].add(card);
        Some(card)
    }

    /// Move a hand card to the discard sink.
    ///
    /// `false` (and nothing moves) unless both the hand and the ledger hold it.
    pub(crate) fn discard_from_hand(&mut self, player: PlayerId, card: CardId) -> bool {
        if !self.hands[player].contains(card)
            || !self.zones.transfer(card, Zone::Hand(player), Zone::Discard)
        {
            return false;
        }
        self.hands[player].remove(card);
        self.discard.push_back(card);
        true
    }

    /// Record that a hand card now lies in `caravan`.
    ///
    /// The caravan itself must already hold the card.
    pub(crate) fn commit_to_caravan(
        &mut self,
        player: PlayerId,
        card: CardId,
        caravan: CaravanId,
    ) -> bool {
        if !self.hands[player].contains(card)
            || !self
                .zones
                .transfer(card, Zone::Hand(player), Zone::Caravan(caravan))
        {
            return false;
        }
        self.hands[player].remove(card)
    }

    /// Send a card that left `from` to the discard sink.
    ///
    /// `false` (and the discard is untouched) unless the ledger has the card
    /// in `from`.
    pub(crate) fn discard_from_caravan(&mut self, card: PlacedCard, from: CaravanId) -> bool {
        if !self
            .zones
            .transfer(card.id, Zone::Caravan(from), Zone::Discard)
        {
            return false;
        }
        self.discard.push_back(card.id);
        true
    }

    /// Log the move and pass the turn.
    pub(crate) fn finish_turn(&mut self, player: PlayerId, mv: Move) {
        self.history
            .push_back(MoveRecord::new(player, mv, self.turn_number));
        if self.opening_moves_left[player] > 0 {
            self.opening_moves_left[player] -= 1;
        }
        self.turn_number += 1;
        self.active_player = player.opponent();
    }

    // === Invariants ===

    /// Verify that every dealt card sits in exactly one container and that
    /// the ledger agrees with the containers.
    pub fn check_ownership(&self) -> Result<(), OwnershipError> {
        let held = self
            .hands
            .iter()
            .flat_map(|(p, hand)| hand.cards().iter().map(move |&c| (c, Zone::Hand(p))))
            .chain(
                self.draw_piles
                    .iter()
                    .flat_map(|(p, pile)| pile.iter().map(move |c| (c, Zone::DrawPile(p)))),
            )
            .chain(
                self.caravans
                    .iter()
                    .flat_map(|c| c.cards().map(move |pc| (pc.id, Zone::Caravan(c.id())))),
            )
            .chain(self.discard.iter().map(|&c| (c, Zone::Discard)));

        let mut seen = FxHashSet::default();
        for (card, found) in held {
            if !seen.insert(card) {
                return Err(OwnershipError::Duplicated { card });
            }
            let recorded = self.zones.zone_of(card);
            if recorded != Some(found) {
                return Err(OwnershipError::LedgerMismatch {
                    card,
                    recorded,
                    found,
                });
            }
        }

        match self.cards.iter().find(|(id, _)| !seen.contains(id)) {
            Some((card, _)) => Err(OwnershipError::Missing { card }),
            None => Ok(()),
        }
    }
}
