//! Card identity.
//!
//! Every physical card dealt into a match gets a unique `CardId`: its index in
//! the match's `CardArena`. Identity is never derived from rank and suit,
//! because each player brings a full deck and the two pools share every
//! rank/suit pair.
//!
//! ## ID Layout
//!
//! IDs are handed out in deal order: player one's 54-card pool first, then
//! player two's. The layout is an implementation detail; callers should only
//! compare IDs for equality.
//!
//! ```
//! use caravan_engine::core::CardId;
//!
//! let a = CardId::new(3);
//! let b = CardId::new(3);
//! assert_eq!(a, b);
//! assert_eq!(a.index(), 3);
//! ```

use serde::{Deserialize, Serialize};

/// Stable per-card arena index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID from a raw arena index.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Arena index as `usize`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}
