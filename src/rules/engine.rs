//! Rules engine: legal-move enumeration, move application and outcome.
//!
//! `RulesEngine` is the seam a driver or policy talks to. `CaravanRules` is
//! the standard rule set; the free functions at the bottom of this module
//! call into it for callers that do not need the trait.
//!
//! ## Move application
//!
//! `apply_move` validates the whole move before touching the state, so an
//! `Err` always leaves the state exactly as it was. On success it:
//! 1. moves the card (or caravan contents) between containers
//! 2. resolves Jack removals and Joker purges
//! 3. draws a replacement card where the rules call for one
//! 4. records the move and passes the turn

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::win;
use crate::caravan::{CaravanId, PlacedCard, Target};
use crate::cards::Card;
use crate::core::{CardId, GameState, Move, PlayerId};
use crate::effects::{self, Effect, EffectKind, Effects, PlayedCard};
use crate::error::MoveError;

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Every pair is sold and this player sold at least two.
    Winner(PlayerId),
    /// The player to move has no legal move.
    Stalemate,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: empty when it is not `player`'s turn or the game is over
/// - `apply_move`: must be deterministic and must not mutate on `Err`
/// - `check_winner`: `None` while the game continues
pub trait RulesEngine {
    /// Every move `player` may make right now.
    fn legal_moves(&self, state: &GameState, player: PlayerId) -> Vec<Move>;

    /// Apply a move, returning what changed.
    fn apply_move(
        &self,
        state: &mut GameState,
        player: PlayerId,
        mv: &Move,
    ) -> Result<Effects, MoveError>;

    /// The winner, once every caravan pair is sold.
    fn check_winner(&self, state: &GameState) -> Option<PlayerId>;

    /// Winner, stalemate, or `None` while play continues.
    fn outcome(&self, state: &GameState) -> Option<GameResult> {
        if let Some(winner) = self.check_winner(state) {
            return Some(GameResult::Winner(winner));
        }
        let active = state.active_player();
        if self.legal_moves(state, active).is_empty() {
            return Some(GameResult::Stalemate);
        }
        None
    }
}

/// Standard Caravan rules, parameterised by the state's `GameConfig`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CaravanRules;

impl RulesEngine for CaravanRules {
    fn legal_moves(&self, state: &GameState, player: PlayerId) -> Vec<Move> {
        if state.active_player() != player || self.check_winner(state).is_some() {
            return Vec::new();
        }

        let hand: Vec<(CardId, Card)> = state
            .hand(player)
            .cards()
            .iter()
            .filter_map(|&id| state.card(id).map(|card| (id, card)))
            .collect();

        if state.in_opening(player) {
            return opening_moves(state, player, &hand);
        }

        let mut moves: Vec<Move> = hand
            .iter()
            .map(|&(card, _)| Move::DiscardCard { card })
            .collect();

        moves.extend(
            CaravanId::owned_by(player)
                .filter(|&id| !state.caravan(id).is_empty())
                .map(|caravan| Move::DiscardCaravan { caravan }),
        );

        for &(id, card) in &hand {
            if card.is_numerical() {
                for caravan in CaravanId::owned_by(player) {
                    let target = numerical_target(state, caravan);
                    if state.caravan(caravan).check(card, target).is_ok() {
                        moves.push(Move::Play {
                            card: id,
                            caravan,
                            target,
                        });
                    }
                }
            } else {
                for caravan in state.caravans() {
                    for target in caravan.cards().map(|placed| Target::Card(placed.id)) {
                        if caravan.check(card, target).is_ok() {
                            moves.push(Move::Play {
                                card: id,
                                caravan: caravan.id(),
                                target,
                            });
                        }
                    }
                }
            }
        }

        moves
    }

    fn apply_move(
        &self,
        state: &mut GameState,
        player: PlayerId,
        mv: &Move,
    ) -> Result<Effects, MoveError> {
        if self.check_winner(state).is_some() {
            return Err(MoveError::GameOver);
        }
        let expected = state.active_player();
        if player != expected {
            return Err(MoveError::NotYourTurn {
                expected,
                actual: player,
            });
        }

        let effects = match *mv {
            Move::DiscardCard { card } => discard_card(state, player, card)?,
            Move::DiscardCaravan { caravan } => discard_caravan(state, player, caravan)?,
            Move::Play {
                card,
                caravan,
                target,
            } => play_card(state, player, card, caravan, target)?,
        };

        state.finish_turn(player, *mv);
        debug!(
            %player,
            mv = %mv,
            kind = ?effects.kind,
            removed = effects.removed.len(),
            turn = state.turn_number(),
            "applied move"
        );

        if let Some(winner) = self.check_winner(state) {
            info!(%winner, turn = state.turn_number(), "caravans sold");
        }

        Ok(effects)
    }

    fn check_winner(&self, state: &GameState) -> Option<PlayerId> {
        win::evaluate(state.caravans(), state.config())
    }
}

/// Opening phase: numerical cards onto the mover's own empty caravans.
fn opening_moves(state: &GameState, player: PlayerId, hand: &[(CardId, Card)]) -> Vec<Move> {
    let empty: Vec<CaravanId> = CaravanId::owned_by(player)
        .filter(|&id| state.caravan(id).is_empty())
        .collect();

    hand.iter()
        .filter(|(_, card)| card.is_numerical())
        .flat_map(|&(card, _)| {
            empty.iter().map(move |&caravan| Move::Play {
                card,
                caravan,
                target: Target::Placeholder,
            })
        })
        .collect()
}

/// Numerical cards are offered only on the last anchor (or the placeholder).
fn numerical_target(state: &GameState, caravan: CaravanId) -> Target {
    state
        .caravan(caravan)
        .last_base()
        .map_or(Target::Placeholder, |base| Target::Card(base.anchor().id))
}

fn hand_card(state: &GameState, player: PlayerId, card: CardId) -> Result<Card, MoveError> {
    if !state.hand(player).contains(card) {
        return Err(MoveError::CardNotInHand { player, card });
    }
    state
        .card(card)
        .ok_or(MoveError::CardNotInHand { player, card })
}

fn discard_card(state: &mut GameState, player: PlayerId, card: CardId) -> Result<Effects, MoveError> {
    if state.in_opening(player) {
        return Err(MoveError::OpeningPhase { player });
    }
    hand_card(state, player, card)?;

    let mut effects = Effects::new(player, EffectKind::HandDiscard);
    let moved = state.discard_from_hand(player, card);
    debug_assert!(moved, "{card} left the hand without reaching the discard");
    effects.discarded = Some(card);
    effects.drawn = state.draw(player);
    Ok(effects)
}

fn discard_caravan(
    state: &mut GameState,
    player: PlayerId,
    caravan: CaravanId,
) -> Result<Effects, MoveError> {
    if state.in_opening(player) {
        return Err(MoveError::OpeningPhase { player });
    }
    if caravan.owner != player {
        return Err(MoveError::ForeignCaravan { player, caravan });
    }
    if state.caravan(caravan).is_empty() {
        return Err(MoveError::EmptyCaravan { caravan });
    }

    let mut effects = Effects::new(player, EffectKind::CaravanDiscard);
    for base in state.caravan_mut(caravan).clear() {
        effects.record_base(&base, caravan);
        for card in base.cards() {
            let moved = state.discard_from_caravan(card, caravan);
            debug_assert!(moved, "{} was not recorded in {caravan}", card.id);
        }
    }
    Ok(effects)
}

fn play_card(
    state: &mut GameState,
    player: PlayerId,
    id: CardId,
    caravan: CaravanId,
    target: Target,
) -> Result<Effects, MoveError> {
    let card = hand_card(state, player, id)?;

    if card.is_numerical() && caravan.owner != player {
        return Err(MoveError::ForeignCaravan { player, caravan });
    }
    if state.in_opening(player)
        && (card.is_face() || caravan.owner != player || !state.caravan(caravan).is_empty())
    {
        return Err(MoveError::OpeningPhase { player });
    }

    // The caravan checks legality before it mutates anything.
    let placed = PlacedCard::new(id, card);
    let effect = state.caravan_mut(caravan).place(placed, target)?;

    let mut effects = Effects::new(player, effect.kind());
    effects.played = Some(PlayedCard {
        card: placed,
        caravan,
        target,
    });
    effects.touch(caravan);

    match effect {
        Effect::Appended { .. } | Effect::Attached { .. } => {
            let moved = state.commit_to_caravan(player, id, caravan);
            debug_assert!(moved, "{id} left the hand without reaching {caravan}");
        }
        Effect::BaseDiscarded { jack, removed } => {
            effects.record_base(&removed, caravan);
            for card in removed.cards() {
                let moved = state.discard_from_caravan(card, caravan);
                debug_assert!(moved, "{} was not recorded in {caravan}", card.id);
            }
            let moved = state.discard_from_hand(player, jack.id);
            debug_assert!(moved, "{} left the hand without reaching the discard", jack.id);
            effects.record_card(jack, caravan);
        }
        Effect::PurgeTriggered {
            joker,
            anchor,
            criterion,
        } => {
            let moved = state.commit_to_caravan(player, joker.id, caravan);
            debug_assert!(moved, "{} left the hand without reaching {caravan}", joker.id);
            for removed in effects::purge(state.caravans_mut(), anchor, criterion) {
                let moved = state.discard_from_caravan(removed.card, removed.from);
                debug_assert!(moved, "{} was not recorded in {}", removed.card.id, removed.from);
                effects.record_card(removed.card, removed.from);
            }
        }
    }

    if state.hand(player).len() < state.config().refill_threshold {
        effects.drawn = state.draw(player);
    }
    Ok(effects)
}

// =============================================================================
// Free functions over the standard rules
// =============================================================================

/// Every move `player` may make right now under the standard rules.
#[must_use]
pub fn legal_moves(state: &GameState, player: PlayerId) -> Vec<Move> {
    CaravanRules.legal_moves(state, player)
}

/// Apply a move under the standard rules.
pub fn apply_move(state: &mut GameState, player: PlayerId, mv: &Move) -> Result<Effects, MoveError> {
    CaravanRules.apply_move(state, player, mv)
}

/// The winner, once every caravan pair is sold.
#[must_use]
pub fn check_winner(state: &GameState) -> Option<PlayerId> {
    CaravanRules.check_winner(state)
}

/// Winner, stalemate, or `None` while play continues.
#[must_use]
pub fn outcome(state: &GameState) -> Option<GameResult> {
    CaravanRules.outcome(state)
}
