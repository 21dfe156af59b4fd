//! Caravans: bases, attachments, derived statistics and placement rules.
//!
//! - `Caravan`: the stateful stack with `place`, `remove` and `recompute`
//! - `legality`: the pure placement check used by `Caravan::place` and by
//!   legal-move enumeration

pub mod caravan;
pub mod legality;

pub use caravan::{
    compute_direction, compute_suit, compute_value, Base, Caravan, CaravanId, Direction, PlacedCard,
    Slot, Target,
};
pub use legality::{check_placement, follows_direction, CaravanLimits, MAX_ATTACHMENTS, MAX_BASES};
