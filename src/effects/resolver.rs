//! Cross-caravan effect resolution.
//!
//! Jack removals are local to one caravan and already done by
//! `Caravan::place`. A Joker purge reaches every caravan on the table, so it
//! is resolved here, over the full set of caravans.

use tracing::trace;

use super::effect::RemovedCard;
use super::targeting::PurgeCriterion;
use crate::caravan::{Caravan, PlacedCard};

/// Remove every base matching `criterion` from `caravans`, sparing the base
/// anchored by `preserved`.
///
/// Each touched caravan recomputes its statistics. Returns the removed cards
/// (anchors followed by their attachments) in table order.
pub fn purge(
    caravans: &mut [Caravan],
    preserved: PlacedCard,
    criterion: PurgeCriterion,
) -> Vec<RemovedCard> {
    let mut removed = Vec::new();

    for caravan in caravans.iter_mut() {
        let from = caravan.id();
        let bases =
            caravan.remove_where(|anchor| anchor.id != preserved.id && criterion.matches(anchor.card));

        for base in &bases {
            trace!(caravan = %from, anchor = %base.anchor().card, "joker purged base");
            removed.extend(base.cards().map(|card| RemovedCard { card, from }));
        }
    }

    removed
}
