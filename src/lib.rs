//! # caravan-engine
//!
//! Rules engine for Caravan, the two-player card game: six caravans, two
//! 54-card pools, and a race to sell caravans worth 21 to 26.
//!
//! ## Design Principles
//!
//! 1. **Derived, never patched**: a caravan's value, suit and direction are
//!    recomputed from its bases after every mutation.
//!
//! 2. **Validate, then mutate**: `apply_move` either applies a whole move or
//!    returns an error and leaves the state untouched.
//!
//! 3. **Identity by arena index**: both pools contain the same rank/suit
//!    pairs, so cards are told apart by `CardId`, never by face value.
//!
//! 4. **Single ownership**: every card sits in exactly one hand, draw pile,
//!    caravan or the discard sink, and a zone ledger checks it.
//!
//! ## Modules
//!
//! - `core`: card IDs, players, state, moves, RNG, configuration
//! - `cards`: rank/suit definitions, the card arena, hands and draw piles
//! - `zones`: the card ownership ledger
//! - `caravan`: caravans, bases and placement legality
//! - `effects`: placement outcomes, Joker purges, and the per-move `Effects`
//! - `rules`: the rules engine, dealing and win evaluation
//! - `policy`: computer opponents and match play-out
//! - `error`: error types
//!
//! ## Example
//!
//! ```
//! use caravan_engine::{apply_move, legal_moves, new_game, outcome};
//!
//! let mut state = new_game(7);
//! while outcome(&state).is_none() && state.turn_number() < 10 {
//!     let player = state.active_player();
//!     let mv = legal_moves(&state, player)[0];
//!     apply_move(&mut state, player, &mv).unwrap();
//! }
//! assert!(state.check_ownership().is_ok());
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod caravan;
pub mod effects;
pub mod rules;
pub mod policy;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    CardId, PlayerId, PlayerMap,
    GameRng, GameRngState,
    GameConfig, PolicyWeights,
    Move, MoveRecord,
    GameState,
};

pub use crate::cards::{Card, CardArena, DrawPile, Hand, Rank, Suit};

pub use crate::zones::{Zone, ZoneManager};

pub use crate::caravan::{Base, Caravan, CaravanId, CaravanLimits, Direction, PlacedCard, Slot, Target};

pub use crate::effects::{Effect, EffectKind, Effects, PurgeCriterion};

pub use crate::rules::{
    apply_move, check_winner, legal_moves, new_game, outcome,
    CaravanGameBuilder, CaravanRules, GameResult, PairVerdict, RulesEngine,
};

pub use crate::policy::{play_out, OpponentPolicy, UniformOpponent, WeightedRandomOpponent};

pub use crate::error::{ConfigError, MoveError, OwnershipError, PlacementError};
