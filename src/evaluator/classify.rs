use super::tables::RankTables;
use super::Category;
use crate::hand::HandMask;

/// Category-only evaluation. Cheaper than [`super::rank`] because no kickers
/// are resolved.
///
/// `mask` must hold 1 to 7 cards; the result is unspecified otherwise.
pub fn classify(tables: &RankTables, mask: HandMask) -> Category {
    let [sc, sd, sh, ss] = mask.suit_patterns();
    let ranks = sc | sd | sh | ss;
    let info = tables.bits_and_straight(ranks);
    let num_dups = mask.card_count().saturating_sub(info.bit_count());

    let mut made = None;
    if info.flush_candidate() {
        if info.has_straight() {
            made = Some(Category::Straight);
        }
        for suit in [sc, sd, sh, ss] {
            let suited = tables.bits_and_straight(suit);
            if suited.flush_candidate() {
                if suited.has_straight() {
                    return Category::StraightFlush;
                }
                made = Some(Category::Flush);
                break;
            }
        }
        // Quads and boats need at least three duplicated ranks.
        if let Some(category) = made {
            if num_dups < 3 {
                return category;
            }
        }
    }

    match num_dups {
        0 => Category::HighCard,
        1 => Category::Pair,
        // Ranks held in an even number of suits are the paired ones.
        2 if ranks ^ (sc ^ sd ^ sh ^ ss) != 0 => Category::TwoPair,
        2 => Category::ThreeOfAKind,
        _ => {
            if sc & sd & sh & ss != 0 {
                Category::FourOfAKind
            } else if ((sc & sd) | (sh & ss)) & ((sc & sh) | (sd & ss)) != 0 {
                Category::FullHouse
            } else {
                made.unwrap_or(Category::TwoPair)
            }
        }
    }
}
