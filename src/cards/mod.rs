//! Card system: definitions, the per-match arena, and ordered containers.
//!
//! ## Key Types
//!
//! - `Card`, `Rank`, `Suit`: face value and classification
//! - `CardArena`: maps every `CardId` in a match to its `Card`
//! - `Hand`, `DrawPile`: ordered containers of card IDs

pub mod definition;
pub mod pile;
pub mod registry;

pub use definition::{Card, Rank, Suit};
pub use pile::{DrawPile, Hand};
pub use registry::{standard_pool, CardArena, POOL_SIZE};
