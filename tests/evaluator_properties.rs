use holdem_hand::cards::Card;
use holdem_hand::evaluator::{classify, evaluate_mask, evaluate_type, rank, Category, RankTables};
use holdem_hand::hand::{parse_hand, HandMask};
use proptest::prelude::*;

fn any_hand(sizes: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = HandMask> {
    prop::sample::subsequence((0u8..52).collect::<Vec<_>>(), sizes)
        .prop_map(|indices| indices.into_iter().filter_map(Card::from_index).collect())
}

fn has_run(ranks: u16) -> bool {
    // Ace doubles as the low card of the wheel.
    let ranks = u32::from(ranks);
    let ranks = (ranks << 1) | (ranks >> 12);
    (0..=9).any(|low| (ranks >> low) & 0x1F == 0x1F)
}

/// Straightforward category by counting ranks and suits.
fn naive_category(mask: HandMask) -> Category {
    let mut counts = [0u8; 13];
    let mut suits = [0u16; 4];
    for card in mask.cards() {
        counts[card.rank().index() as usize] += 1;
        suits[card.suit().index() as usize] |= 1 << card.rank().index();
    }
    let ranks = suits.iter().fold(0u16, |acc, &s| acc | s);
    let flush = suits.iter().find(|s| s.count_ones() >= 5);
    let trips = counts.iter().filter(|&&c| c >= 3).count();
    let pairs = counts.iter().filter(|&&c| c == 2).count();

    if flush.is_some_and(|&s| has_run(s)) {
        Category::StraightFlush
    } else if counts.contains(&4) {
        Category::FourOfAKind
    } else if trips >= 2 || (trips == 1 && pairs >= 1) {
        Category::FullHouse
    } else if flush.is_some() {
        Category::Flush
    } else if has_run(ranks) {
        Category::Straight
    } else if trips == 1 {
        Category::ThreeOfAKind
    } else if pairs >= 2 {
        Category::TwoPair
    } else if pairs == 1 {
        Category::Pair
    } else {
        Category::HighCard
    }
}

fn five_card_subsets(mask: HandMask) -> Vec<HandMask> {
    let cards: Vec<Card> = mask.cards().collect();
    let mut out = Vec::new();
    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            let dropped = HandMask::from(cards[i]) | HandMask::from(cards[j]);
            out.push(HandMask::from_bits(mask.bits() & !dropped.bits()));
        }
    }
    out
}

proptest! {
    #[test]
    fn classifier_matches_counting(hand in any_hand(1..=7)) {
        prop_assert_eq!(evaluate_type(hand), naive_category(hand));
    }

    #[test]
    fn ranker_category_matches_classifier(hand in any_hand(1..=7)) {
        let tables = RankTables::shared();
        let value = rank(tables, hand).unwrap();
        prop_assert_eq!(value.category(), classify(tables, hand));
    }

    #[test]
    fn seven_cards_rank_as_best_five(hand in any_hand(7..=7)) {
        let best = five_card_subsets(hand)
            .into_iter()
            .map(|five| evaluate_mask(five).unwrap())
            .max()
            .unwrap();
        prop_assert_eq!(evaluate_mask(hand).unwrap(), best);
    }

    #[test]
    fn ordering_is_total_and_consistent(a in any_hand(5..=7), b in any_hand(5..=7)) {
        let va = evaluate_mask(a).unwrap();
        let vb = evaluate_mask(b).unwrap();
        if va.category() != vb.category() {
            prop_assert_eq!(va.cmp(&vb), va.category().cmp(&vb.category()));
        }
        prop_assert_eq!(va.cmp(&vb), vb.cmp(&va).reverse());
    }

    #[test]
    fn text_round_trips_through_display(hand in any_hand(1..=7)) {
        let text = hand.to_string();
        prop_assert_eq!(parse_hand(&text).unwrap(), hand);
        prop_assert_eq!(text.split(' ').count() as u32, hand.card_count());
    }

    #[test]
    fn adding_a_card_never_weakens_a_made_hand(hand in any_hand(6..=6), extra in 0u8..52) {
        let card = Card::from_index(extra).unwrap();
        prop_assume!(!hand.contains(card));
        let before = evaluate_mask(hand).unwrap();
        let after = evaluate_mask(hand.with(card)).unwrap();
        prop_assert!(after >= before);
    }
}
