//! Rules of play.
//!
//! - `engine`: the `RulesEngine` trait, the standard `CaravanRules`, and free
//!   functions over them (`legal_moves`, `apply_move`, `check_winner`, `outcome`)
//! - `setup`: dealing a new match (`new_game`, `CaravanGameBuilder`)
//! - `win`: per-pair verdicts and the overall winner

pub mod engine;
pub mod setup;
pub mod win;

pub use engine::{
    apply_move, check_winner, legal_moves, outcome, CaravanRules, GameResult, RulesEngine,
};
pub use setup::{new_game, CaravanGameBuilder};
pub use win::{evaluate, pair_verdict, pair_verdicts, PairVerdict};
