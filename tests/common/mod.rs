//! Shared helpers for integration tests.

#![allow(dead_code)]

use caravan_engine::caravan::{Caravan, CaravanId, PlacedCard, Slot, Target};
use caravan_engine::cards::{Card, Rank, Suit};
use caravan_engine::core::{CardId, PlayerId};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per test binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Hands out fresh card IDs for hand-built caravans.
#[derive(Default)]
pub struct Cards {
    next: u32,
}

impl Cards {
    pub fn card(&mut self, rank: Rank, suit: Suit) -> PlacedCard {
        self.next += 1;
        PlacedCard::new(CardId(self.next), Card::new(rank, suit))
    }
}

pub fn empty_caravan() -> Caravan {
    Caravan::new(CaravanId::new(PlayerId::ONE, Slot::A))
}

/// Target for a numerical card: the last anchor, or the placeholder.
pub fn append_target(caravan: &Caravan) -> Target {
    caravan
        .last_base()
        .map_or(Target::Placeholder, |b| Target::Card(b.anchor().id))
}
