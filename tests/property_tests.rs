//! Property tests for caravan statistics and face-card effects.

mod common;

use caravan_engine::caravan::{Caravan, CaravanId, Direction, PlacedCard, Slot, Target};
use caravan_engine::cards::{Card, Rank, Suit};
use caravan_engine::core::{GameConfig, PlayerId};
use caravan_engine::effects::{purge, Effect, PurgeCriterion};
use caravan_engine::error::PlacementError;
use caravan_engine::rules::{new_game, pair_verdict, PairVerdict};
use proptest::prelude::*;
use proptest::sample::Index;

use common::{append_target, empty_caravan, Cards};

#[derive(Clone, Debug)]
enum Step {
    Numerical(Rank, Suit),
    Face(Rank, Suit, Index),
}

fn numerical_rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::NUMERICAL.to_vec())
}

fn standard_suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::STANDARD.to_vec())
}

fn face_rank() -> impl Strategy<Value = Rank> {
    prop_oneof![
        Just(Rank::Jack),
        Just(Rank::Queen),
        Just(Rank::King),
        Just(Rank::Joker),
    ]
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (numerical_rank(), standard_suit()).prop_map(|(r, s)| Step::Numerical(r, s)),
        1 => (face_rank(), standard_suit(), any::<Index>()).prop_map(|(r, s, i)| Step::Face(r, s, i)),
    ]
}

fn apply(caravan: &mut Caravan, cards: &mut Cards, step: &Step) -> Result<Effect, PlacementError> {
    match step {
        Step::Numerical(rank, suit) => {
            let target = append_target(caravan);
            caravan.place(cards.card(*rank, *suit), target)
        }
        Step::Face(rank, suit, index) => {
            let suit = if *rank == Rank::Joker { Suit::BlackJoker } else { *suit };
            let ids: Vec<_> = caravan.cards().map(|p| p.id).collect();
            let target = if ids.is_empty() {
                Target::Placeholder
            } else {
                Target::Card(ids[index.index(ids.len())])
            };
            caravan.place(cards.card(*rank, suit), target)
        }
    }
}

/// Value computed straight from the rules, independent of `Caravan`.
fn expected_value(caravan: &Caravan) -> u32 {
    caravan
        .bases()
        .iter()
        .map(|base| {
            let kings = base
                .attachments()
                .iter()
                .filter(|a| a.card.rank == Rank::King)
                .count() as u32;
            base.anchor().card.numeric_value().unwrap_or(0) * 2u32.pow(kings)
        })
        .sum()
}

fn anchors(caravan: &Caravan) -> Vec<PlacedCard> {
    caravan.bases().iter().map(|b| b.anchor()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Value always matches ranks and Kings, and a rejected placement
    /// changes nothing.
    #[test]
    fn prop_value_never_drifts(steps in prop::collection::vec(step(), 1..40)) {
        let mut cards = Cards::default();
        let mut caravan = empty_caravan();

        for step in &steps {
            let before = caravan.clone();
            if apply(&mut caravan, &mut cards, step).is_err() {
                prop_assert_eq!(&caravan, &before);
            }
            prop_assert_eq!(caravan.value(), expected_value(&caravan));
            prop_assert!(caravan.bases().len() <= 7);
            prop_assert!(caravan.bases().iter().all(|b| b.attachments().len() <= 3));
        }
    }

    /// A Jack removes exactly the base holding its target.
    #[test]
    fn prop_jack_removes_exactly_its_base(
        steps in prop::collection::vec(step(), 1..30),
        pick in any::<Index>(),
    ) {
        let mut cards = Cards::default();
        let mut caravan = empty_caravan();
        for step in &steps {
            let _ = apply(&mut caravan, &mut cards, step);
        }
        prop_assume!(!caravan.is_empty());

        let ids: Vec<_> = caravan.cards().map(|p| p.id).collect();
        let target = ids[pick.index(ids.len())];
        let hit = caravan.base_index_of(target).unwrap();
        let mut expected = anchors(&caravan);
        expected.remove(hit);

        let effect = caravan.place(cards.card(Rank::Jack, Suit::Hearts), Target::Card(target));

        let discarded = matches!(effect, Ok(Effect::BaseDiscarded { .. }));
        prop_assert!(discarded);
        prop_assert_eq!(anchors(&caravan), expected);
        prop_assert_eq!(caravan.value(), expected_value(&caravan));
    }

    /// A Joker purge removes every other matching base on the table and
    /// nothing else.
    #[test]
    fn prop_joker_purges_matching_bases(
        seeds in prop::collection::vec((0usize..6, numerical_rank(), standard_suit()), 1..30),
        pick in any::<Index>(),
    ) {
        let mut cards = Cards::default();
        let mut table: Vec<Caravan> = CaravanId::all().map(Caravan::new).collect();
        for (slot, rank, suit) in &seeds {
            let caravan = &mut table[*slot];
            let target = append_target(caravan);
            let _ = caravan.place(cards.card(*rank, *suit), target);
        }

        let placed: Vec<(usize, PlacedCard)> = table
            .iter()
            .enumerate()
            .flat_map(|(i, c)| c.cards().map(move |p| (i, p)))
            .collect();
        prop_assume!(!placed.is_empty());
        let (at, target) = placed[pick.index(placed.len())];

        let criterion = PurgeCriterion::for_anchor(target.card);
        let expected: Vec<Vec<PlacedCard>> = table
            .iter()
            .map(|c| {
                anchors(c)
                    .into_iter()
                    .filter(|a| a.id == target.id || !criterion.matches(a.card))
                    .collect()
            })
            .collect();

        let joker = cards.card(Rank::Joker, Suit::RedJoker);
        let Ok(Effect::PurgeTriggered { anchor, criterion: got, .. }) =
            table[at].place(joker, Target::Card(target.id))
        else {
            return Err(TestCaseError::fail("joker placement did not trigger a purge"));
        };
        prop_assert_eq!(got, criterion);
        purge(&mut table, anchor, got);

        let actual: Vec<Vec<PlacedCard>> = table.iter().map(anchors).collect();
        prop_assert_eq!(actual, expected);
        prop_assert!(table[at].contains(joker.id));
        for caravan in &table {
            prop_assert_eq!(caravan.value(), expected_value(caravan));
        }
    }

    /// Queens on the last base flip direction once each.
    #[test]
    fn prop_queen_parity(
        first in numerical_rank(),
        second in numerical_rank(),
        queens in 0usize..=3,
    ) {
        prop_assume!(first != second);
        let mut cards = Cards::default();
        let mut caravan = empty_caravan();
        let a = cards.card(first, Suit::Spades);
        let b = cards.card(second, Suit::Spades);
        caravan.place(a, Target::Placeholder).unwrap();
        caravan.place(b, Target::Card(a.id)).unwrap();

        let unflipped = if second > first { Direction::Ascending } else { Direction::Descending };
        for _ in 0..queens {
            caravan.place(cards.card(Rank::Queen, Suit::Diamonds), Target::Card(b.id)).unwrap();
        }

        let expected = if queens % 2 == 1 { unflipped.flipped() } else { unflipped };
        prop_assert_eq!(caravan.direction(), expected);
    }

    /// Moving any base to the end gives the same caravan as playing the
    /// cards in that order from scratch.
    #[test]
    fn prop_moved_base_matches_fresh_build(
        seeds in prop::collection::vec((numerical_rank(), standard_suit(), 0usize..=2), 2..12),
        pick in any::<Index>(),
    ) {
        let mut cards = Cards::default();
        let mut caravan = empty_caravan();
        for (rank, suit, kings) in &seeds {
            let anchor = cards.card(*rank, *suit);
            if caravan.place(anchor, append_target(&caravan)).is_err() {
                continue;
            }
            for _ in 0..*kings {
                caravan.place(cards.card(Rank::King, Suit::Hearts), Target::Card(anchor.id)).unwrap();
            }
        }
        prop_assume!(caravan.bases().len() >= 2);

        let moved_at = pick.index(caravan.bases().len());
        let anchor = caravan.bases()[moved_at].anchor();
        let base = caravan.remove(anchor.id).unwrap();
        prop_assume!(caravan.place(base.anchor(), append_target(&caravan)).is_ok());
        for &king in base.attachments() {
            caravan.place(king, Target::Card(anchor.id)).unwrap();
        }

        let order: Vec<_> = caravan.bases().to_vec();
        prop_assert_eq!(order.last().map(|b| b.anchor()), Some(anchor));

        let mut fresh = empty_caravan();
        for b in &order {
            prop_assume!(fresh.place(b.anchor(), append_target(&fresh)).is_ok());
            for &king in b.attachments() {
                fresh.place(king, Target::Card(b.anchor().id)).unwrap();
            }
        }

        prop_assert_eq!(caravan.value(), fresh.value());
        prop_assert_eq!(caravan.value(), expected_value(&caravan));
        prop_assert_eq!(caravan.suit(), fresh.suit());
        prop_assert_eq!(caravan.direction(), fresh.direction());
        prop_assert_eq!(caravan, fresh);
    }

    /// A tied pair is never won.
    #[test]
    fn prop_ties_never_win(value in 0u32..60) {
        let verdict = pair_verdict(value, value, &GameConfig::default());
        prop_assert!(!matches!(verdict, PairVerdict::Won(_)));
    }

    /// Deals are a pure function of the seed and always consistent.
    #[test]
    fn prop_deal_is_deterministic(seed in any::<u64>()) {
        let a = new_game(seed);
        let b = new_game(seed);

        prop_assert!(a.check_ownership().is_ok());
        for player in PlayerId::both() {
            prop_assert_eq!(a.hand(player), b.hand(player));
            prop_assert_eq!(a.draw_pile(player), b.draw_pile(player));
        }
        prop_assert!(a.caravan(CaravanId::new(PlayerId::TWO, Slot::C)).is_empty());
    }
}
