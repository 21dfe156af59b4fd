//! Core engine types: card identity, players, state, moves, RNG, configuration.
//!
//! Everything here is rule-agnostic plumbing. The Caravan rules themselves
//! live in `caravan` and `rules`.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use entity::CardId;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, PolicyWeights};
pub use action::{Move, MoveRecord};
pub use state::GameState;
