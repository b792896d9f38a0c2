pub mod classify;
pub mod ranker;
pub mod tables;

use crate::hand::{parse_hand, HandError, HandMask};
use core::cmp::Ordering;

pub use classify::classify;
pub use ranker::rank;
pub use tables::{RankInfo, RankTables};

pub(crate) const HANDTYPE_SHIFT: u32 = 24;
pub(crate) const TOP_CARD_SHIFT: u32 = 16;
pub(crate) const SECOND_CARD_SHIFT: u32 = 12;
pub(crate) const THIRD_CARD_SHIFT: u32 = 8;
pub(crate) const FIFTH_CARD_SHIFT: u32 = 0;
pub(crate) const CARD_WIDTH: u32 = 4;
pub(crate) const CARD_MASK: u32 = 0x0F;
pub(crate) const TOP_CARD_MASK: u32 = CARD_MASK << TOP_CARD_SHIFT;
pub(crate) const SECOND_CARD_MASK: u32 = CARD_MASK << SECOND_CARD_SHIFT;
pub(crate) const FIFTH_CARD_MASK: u32 = CARD_MASK << FIFTH_CARD_SHIFT;

/// Most cards a hand may hold and still be ranked.
pub const MAX_HAND_CARDS: u32 = 7;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn from_ordinal(ordinal: u8) -> Option<Category> {
        if (ordinal as usize) < Category::ALL.len() {
            Some(Category::ALL[ordinal as usize])
        } else {
            None
        }
    }
}

/// Compact, comparable hand strength. Higher is better.
///
/// Layout (most significant -> least):
/// `[ category (8) | top (4) | second (4) | third (4) | fourth (4) | fifth (4) ]`.
/// Kicker fields hold rank indices (0 = Two .. 12 = Ace); straights store
/// their top rank + 1 in the top field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u32);

impl HandValue {
    #[inline]
    pub(crate) const fn from_parts(category: Category, kickers: u32) -> Self {
        HandValue(((category as u32) << HANDTYPE_SHIFT) | kickers)
    }

    /// Return the packed comparable value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Category stored in the top byte.
    ///
    /// Values are only built by [`HandValue::from_parts`], so the byte always
    /// holds a valid ordinal.
    pub const fn category(self) -> Category {
        match Category::from_ordinal((self.0 >> HANDTYPE_SHIFT) as u8) {
            Some(category) => category,
            None => {
                debug_assert!(false, "hand value holds no valid category");
                Category::StraightFlush
            }
        }
    }

    /// Kicker field `n`, 0 being the most significant. Fields past the fifth
    /// read as 0.
    pub const fn kicker(self, n: u32) -> u32 {
        if n >= 5 {
            return 0;
        }
        (self.0 >> (TOP_CARD_SHIFT - CARD_WIDTH * n)) & CARD_MASK
    }

    /// All five kicker fields, most significant first.
    pub fn kickers(self) -> [u32; 5] {
        [self.kicker(0), self.kicker(1), self.kicker(2), self.kicker(3), self.kicker(4)]
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("cannot rank a hand of {0} cards; expected 1 to 7")]
    InvalidCardinality(u32),
    #[error("invalid hand: {0}")]
    Parse(#[from] HandError),
    #[error("hands share cards")]
    Overlap,
}

/// Category of `mask` using the shared tables.
///
/// `mask` must hold 1 to 7 cards; other sizes give an unspecified category.
///
/// ```
/// use holdem_hand::evaluator::{evaluate_type, Category};
/// use holdem_hand::hand::parse_hand_with_board;
///
/// let mask = parse_hand_with_board("Ad Ah", "As Kd 6d 6c Th").unwrap();
/// assert_eq!(evaluate_type(mask), Category::FullHouse);
/// ```
pub fn evaluate_type(mask: HandMask) -> Category {
    classify(RankTables::shared(), mask)
}

/// Full comparable value of `mask` using the shared tables.
pub fn evaluate_mask(mask: HandMask) -> Result<HandValue, EvalError> {
    rank(RankTables::shared(), mask)
}

/// Parse `text` and rank it.
///
/// ```
/// use holdem_hand::evaluator::{evaluate_text, Category};
///
/// let value = evaluate_text("Ad Kh 8c 5s 6c Js 10h").unwrap();
/// assert_eq!(value.category(), Category::HighCard);
/// assert!(evaluate_text("Ad Ad").is_err());
/// ```
pub fn evaluate_text(text: &str) -> Result<HandValue, EvalError> {
    evaluate_mask(parse_hand(text)?)
}

/// Compare two pockets on a shared board. The pockets and the board must
/// not share cards.
///
/// ```
/// use holdem_hand::evaluator::compare_holdem;
/// use std::cmp::Ordering;
///
/// let board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let a = "As Ah".parse().unwrap();
/// let b = "Ks Kh".parse().unwrap();
/// assert_eq!(compare_holdem(a, b, board).unwrap(), Ordering::Greater);
/// ```
pub fn compare_holdem(a: HandMask, b: HandMask, board: HandMask) -> Result<Ordering, EvalError> {
    if a.overlaps(board) || b.overlaps(board) || a.overlaps(b) {
        return Err(EvalError::Overlap);
    }
    let va = evaluate_mask(a | board)?;
    let vb = evaluate_mask(b | board)?;
    Ok(va.cmp(&vb))
}
