//! Opponent policies.
//!
//! A policy picks one move for a player from the engine's legal moves. The
//! engine never asks a policy for anything; drivers and tests do.
//!
//! - `UniformOpponent`: uniform over every legal move
//! - `WeightedRandomOpponent`: the computer opponent. Mostly plays cards,
//!   occasionally discards from hand, rarely dumps a caravan
//!
//! `play_out` runs a whole match between policies, the same way a rollout
//! would.

use tracing::trace;

use crate::core::{GameRng, GameState, Move, PlayerId, PolicyWeights};
use crate::rules::{GameResult, RulesEngine};

/// Chooses moves for a player.
pub trait OpponentPolicy<E: RulesEngine>: Send + Sync {
    /// Choose a move for `player`.
    ///
    /// Returns `None` if no legal moves exist.
    fn choose_move(
        &self,
        engine: &E,
        state: &GameState,
        player: PlayerId,
        rng: &mut GameRng,
    ) -> Option<Move>;
}

/// Uniform random opponent policy.
#[derive(Clone, Debug, Default)]
pub struct UniformOpponent;

impl<E: RulesEngine> OpponentPolicy<E> for UniformOpponent {
    fn choose_move(
        &self,
        engine: &E,
        state: &GameState,
        player: PlayerId,
        rng: &mut GameRng,
    ) -> Option<Move> {
        let moves = engine.legal_moves(state, player);
        rng.choose(&moves).copied()
    }
}

/// Category-weighted random opponent.
///
/// During the opening phase every legal move is a seed, picked uniformly.
/// Afterwards one uniform sample picks the category (play, hand discard,
/// caravan discard) by `weights`, then a move is picked uniformly within it.
/// An empty category falls through to the next, and finally to any legal move.
#[derive(Clone, Debug, Default)]
pub struct WeightedRandomOpponent {
    pub weights: PolicyWeights,
}

impl WeightedRandomOpponent {
    #[must_use]
    pub fn new(weights: PolicyWeights) -> Self {
        Self { weights }
    }

    /// Use the weights from the match configuration.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self::new(state.config().policy)
    }
}

impl<E: RulesEngine> OpponentPolicy<E> for WeightedRandomOpponent {
    fn choose_move(
        &self,
        engine: &E,
        state: &GameState,
        player: PlayerId,
        rng: &mut GameRng,
    ) -> Option<Move> {
        let moves = engine.legal_moves(state, player);
        if moves.is_empty() {
            return None;
        }
        if state.in_opening(player) {
            return rng.choose(&moves).copied();
        }

        let (plays, discards): (Vec<Move>, Vec<Move>) = moves.iter().partition(|m| m.is_play());
        let (hand_discards, caravan_discards): (Vec<Move>, Vec<Move>) =
            discards.into_iter().partition(|m| m.card().is_some());

        let r = rng.gen_unit();
        let PolicyWeights { play, discard_card } = self.weights;

        let pool = if r < play && !plays.is_empty() {
            &plays
        } else if r < play + discard_card && !hand_discards.is_empty() {
            &hand_discards
        } else if !caravan_discards.is_empty() {
            &caravan_discards
        } else {
            &moves
        };

        let chosen = rng.choose(pool).copied();
        trace!(%player, r, candidates = pool.len(), ?chosen, "policy chose move");
        chosen
    }
}

/// Play `state` forward with `policies` until the game ends or `max_turns`
/// moves have been applied.
///
/// Returns `None` if the turn limit was reached first.
pub fn play_out<E, P>(
    engine: &E,
    state: &mut GameState,
    policies: &[P; 2],
    rng: &mut GameRng,
    max_turns: u32,
) -> Option<GameResult>
where
    E: RulesEngine,
    P: OpponentPolicy<E>,
{
    loop {
        if let Some(result) = engine.outcome(state) {
            return Some(result);
        }
        if state.turn_number() >= max_turns {
            return None;
        }

        let active = state.active_player();
        let mv = policies[active.index()].choose_move(engine, state, active, rng)?;
        if let Err(err) = engine.apply_move(state, active, &mv) {
            trace!(%active, %mv, %err, "policy proposed an illegal move");
            return None;
        }
    }
}
