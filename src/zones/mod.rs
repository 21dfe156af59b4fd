//! Zone ledger for card ownership.
//!
//! Every card belongs to exactly one `Zone` at a time: a hand, a draw pile, a
//! caravan, or the discard sink.

pub mod manager;

pub use manager::{Zone, ZoneManager};
