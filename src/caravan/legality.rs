//! Placement legality.
//!
//! `check_placement` is a pure function of the caravan, the card and the
//! target. Rules are tried in a fixed order and the first failing rule names
//! the error.

use serde::{Deserialize, Serialize};

use super::caravan::{Caravan, Direction, Target};
use crate::cards::{Card, Rank};
use crate::error::PlacementError;

/// Default maximum number of bases in a caravan.
pub const MAX_BASES: usize = 7;

/// Default maximum number of non-Jack face cards on one base.
pub const MAX_ATTACHMENTS: usize = 3;

/// Size limits applied to one caravan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaravanLimits {
    pub max_bases: usize,
    pub max_attachments: usize,
}

impl Default for CaravanLimits {
    fn default() -> Self {
        Self {
            max_bases: MAX_BASES,
            max_attachments: MAX_ATTACHMENTS,
        }
    }
}

/// Decide whether `card` may be placed on `target` in `caravan`.
pub fn check_placement(caravan: &Caravan, card: Card, target: Target) -> Result<(), PlacementError> {
    if card.is_numerical() {
        check_numerical(caravan, card, target)
    } else {
        check_face(caravan, card, target)
    }
}

fn check_numerical(caravan: &Caravan, card: Card, target: Target) -> Result<(), PlacementError> {
    let Some(last) = caravan.last_base() else {
        return Ok(());
    };

    let limits = caravan.limits();
    if caravan.bases().len() >= limits.max_bases {
        return Err(PlacementError::CapacityExceeded {
            max: limits.max_bases,
        });
    }

    match target {
        Target::Card(id) if last.contains(id) => {}
        _ => return Err(PlacementError::MustAppendToLast),
    }

    let last_rank = last.anchor().card.rank;
    if follows_direction(caravan.direction(), last_rank, card.rank)
        || matches_suit(caravan, card, last_rank)
    {
        Ok(())
    } else {
        Err(PlacementError::OrderOrSuitMismatch)
    }
}

fn check_face(caravan: &Caravan, card: Card, target: Target) -> Result<(), PlacementError> {
    let Target::Card(id) = target else {
        return Err(PlacementError::NoSuchTarget);
    };
    let base = caravan
        .bases()
        .iter()
        .find(|b| b.contains(id))
        .ok_or(PlacementError::NoSuchTarget)?;

    let max = caravan.limits().max_attachments;
    if card.rank != Rank::Jack && base.attachments().len() >= max {
        return Err(PlacementError::FaceCapacityExceeded { max });
    }
    Ok(())
}

/// Strictly higher needs a caravan that is not descending, strictly lower one
/// that is not ascending. Equal ranks never follow a direction.
#[must_use]
pub fn follows_direction(direction: Direction, last: Rank, next: Rank) -> bool {
    (next > last && direction != Direction::Descending)
        || (next < last && direction != Direction::Ascending)
}

fn matches_suit(caravan: &Caravan, card: Card, last_rank: Rank) -> bool {
    caravan.suit() == Some(card.suit) && card.rank != last_rank
}
