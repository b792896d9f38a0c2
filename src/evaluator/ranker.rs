//! Full hand ranking: category plus kicker fields packed into a [`HandValue`].
//!
//! Duplicate ranks are isolated from the four suit patterns `c, d, h, s`:
//! - `ranks ^ (c ^ d ^ h ^ s)` holds ranks present in an even number of suits
//!   (pairs, and quads);
//! - `((c & d) | (h & s)) & ((c & h) | (d & s))` holds ranks present in at
//!   least three suits (trips, and quads);
//! - `c & d & h & s` holds quads.

use super::tables::RankTables;
use super::{
    Category, EvalError, HandValue, CARD_WIDTH, FIFTH_CARD_MASK, MAX_HAND_CARDS, SECOND_CARD_MASK,
    SECOND_CARD_SHIFT, THIRD_CARD_SHIFT, TOP_CARD_MASK, TOP_CARD_SHIFT,
};
use crate::hand::HandMask;

/// Rank `mask` into a comparable [`HandValue`].
///
/// Fails with [`EvalError::InvalidCardinality`] unless the mask holds 1 to 7
/// cards. The category always equals [`super::classify`] for the same mask.
pub fn rank(tables: &RankTables, mask: HandMask) -> Result<HandValue, EvalError> {
    let num_cards = mask.card_count();
    if num_cards == 0 || num_cards > MAX_HAND_CARDS {
        return Err(EvalError::InvalidCardinality(num_cards));
    }

    let [sc, sd, sh, ss] = mask.suit_patterns();
    let ranks = sc | sd | sh | ss;
    let num_ranks = tables.bit_count(ranks);
    let num_dups = num_cards - num_ranks;

    let mut made = None;
    if num_ranks >= 5 {
        made = match [sc, sd, sh, ss].into_iter().find(|&suit| tables.bit_count(suit) >= 5) {
            Some(flush) => Some(match tables.straight(flush) {
                0 => HandValue::from_parts(Category::Flush, tables.top_five(flush)),
                top => HandValue::from_parts(Category::StraightFlush, top << TOP_CARD_SHIFT),
            }),
            None => match tables.straight(ranks) {
                0 => None,
                top => Some(HandValue::from_parts(Category::Straight, top << TOP_CARD_SHIFT)),
            },
        };
        if let Some(value) = made {
            if num_dups < 3 {
                return Ok(value);
            }
        }
    }

    let value = match num_dups {
        0 => HandValue::from_parts(Category::HighCard, tables.top_five(ranks)),
        1 => {
            let two_mask = ranks ^ (sc ^ sd ^ sh ^ ss);
            let rest = ranks ^ two_mask;
            // Drop the fifth of the remaining top five and slide the other
            // three down one field to sit under the pair.
            let kickers = (tables.top_five(rest) >> CARD_WIDTH) & !FIFTH_CARD_MASK;
            HandValue::from_parts(
                Category::Pair,
                (tables.top_card(two_mask) << TOP_CARD_SHIFT) | kickers,
            )
        }
        2 => {
            let two_mask = ranks ^ (sc ^ sd ^ sh ^ ss);
            if two_mask != 0 {
                let rest = ranks ^ two_mask;
                HandValue::from_parts(
                    Category::TwoPair,
                    (tables.top_five(two_mask) & (TOP_CARD_MASK | SECOND_CARD_MASK))
                        | (tables.top_card(rest) << THIRD_CARD_SHIFT),
                )
            } else {
                let three_mask = ((sc & sd) | (sh & ss)) & ((sc & sh) | (sd & ss));
                let trips = tables.top_card(three_mask);
                let mut rest = ranks ^ three_mask;
                let second = tables.top_card(rest);
                rest &= !(1 << second);
                let third = tables.top_card(rest);
                HandValue::from_parts(
                    Category::ThreeOfAKind,
                    (trips << TOP_CARD_SHIFT)
                        | (second << SECOND_CARD_SHIFT)
                        | (third << THIRD_CARD_SHIFT),
                )
            }
        }
        _ => {
            let four_mask = sc & sd & sh & ss;
            if four_mask != 0 {
                let quads = tables.top_card(four_mask);
                let kicker = tables.top_card(ranks ^ (1 << quads));
                return Ok(HandValue::from_parts(
                    Category::FourOfAKind,
                    (quads << TOP_CARD_SHIFT) | (kicker << SECOND_CARD_SHIFT),
                ));
            }

            // Quads are ruled out, so these are exactly the paired and the
            // tripled ranks.
            let two_mask = ranks ^ (sc ^ sd ^ sh ^ ss);
            let three_mask = ((sc & sd) | (sh & ss)) & ((sc & sh) | (sd & ss));
            if three_mask != 0 {
                let trips = tables.top_card(three_mask);
                let pair = tables.top_card((two_mask | three_mask) ^ (1 << trips));
                return Ok(HandValue::from_parts(
                    Category::FullHouse,
                    (trips << TOP_CARD_SHIFT) | (pair << SECOND_CARD_SHIFT),
                ));
            }

            if let Some(value) = made {
                return Ok(value);
            }

            // Three pairs: the third pair may still play as the kicker.
            let top = tables.top_card(two_mask);
            let second = tables.top_card(two_mask ^ (1 << top));
            let kicker = tables.top_card(ranks ^ (1 << top) ^ (1 << second));
            HandValue::from_parts(
                Category::TwoPair,
                (top << TOP_CARD_SHIFT) | (second << SECOND_CARD_SHIFT) | (kicker << THIRD_CARD_SHIFT),
            )
        }
    };
    Ok(value)
}
