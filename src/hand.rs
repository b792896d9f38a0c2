use crate::cards::{next_card, Card, CardParseError, Suit, DECK_SIZE};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

/// Mask selecting one 13-bit suit pattern.
pub const SUIT_PATTERN_MASK: u64 = 0x1FFF;

/// Mask with all 52 card bits set.
pub const FULL_DECK: u64 = (1u64 << DECK_SIZE) - 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("malformed card at byte {position}: {source}")]
    Malformed {
        /// Byte offset where the failing token starts.
        position: usize,
        #[source]
        source: CardParseError,
    },
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("hand contains no cards")]
    Empty,
}

/// A set of cards: bit `i` is set iff the card with deck index `i` is present.
///
/// ```
/// use holdem_hand::cards::{Card, Rank, Suit};
/// use holdem_hand::hand::HandMask;
///
/// let hand: HandMask = "Ks 10s".parse().unwrap();
/// assert_eq!(hand.card_count(), 2);
/// assert!(hand.contains(Card::new(Rank::Ten, Suit::Spades)));
/// assert_eq!(hand.to_string(), "Ks Ts");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandMask(u64);

impl HandMask {
    pub const EMPTY: HandMask = HandMask(0);

    /// Build a mask from raw bits; bits above card 51 are dropped.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits & FULL_DECK)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn card_count(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, card: Card) -> bool {
        self.0 & card.mask() != 0
    }

    pub const fn with(self, card: Card) -> Self {
        Self(self.0 | card.mask())
    }

    pub const fn overlaps(self, other: HandMask) -> bool {
        self.0 & other.0 != 0
    }

    /// The 13 rank bits held in `suit`, shifted down to bit 0.
    pub const fn suit_pattern(self, suit: Suit) -> u16 {
        ((self.0 >> suit.offset()) & SUIT_PATTERN_MASK) as u16
    }

    /// Suit patterns in clubs, diamonds, hearts, spades order.
    pub const fn suit_patterns(self) -> [u16; 4] {
        [
            self.suit_pattern(Suit::Clubs),
            self.suit_pattern(Suit::Diamonds),
            self.suit_pattern(Suit::Hearts),
            self.suit_pattern(Suit::Spades),
        ]
    }

    /// Ranks present in any suit.
    pub const fn rank_bitmap(self) -> u16 {
        let [c, d, h, s] = self.suit_patterns();
        c | d | h | s
    }

    /// Cards from the highest deck index to the lowest.
    pub fn cards(self) -> impl Iterator<Item = Card> {
        (0..DECK_SIZE as u8).rev().filter_map(move |i| {
            if self.0 & (1u64 << i) != 0 {
                Card::from_index(i)
            } else {
                None
            }
        })
    }
}

impl From<Card> for HandMask {
    fn from(card: Card) -> Self {
        Self(card.mask())
    }
}

impl FromIterator<Card> for HandMask {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        iter.into_iter().fold(HandMask::EMPTY, HandMask::with)
    }
}

impl BitOr for HandMask {
    type Output = HandMask;
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for HandMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for HandMask {
    type Output = HandMask;
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

/// Renders cards in canonical order: spades first, each suit from Ace down.
impl fmt::Display for HandMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for HandMask {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hand(s)
    }
}

/// Tokenize the whole of `text`, rejecting malformed tokens, repeated cards
/// and text that holds no cards at all.
fn scan(text: &str) -> Result<HandMask, HandError> {
    let mut cursor = 0;
    let mut mask = HandMask::EMPTY;
    loop {
        let position = cursor + text[cursor..].bytes().take_while(|&b| b == b' ').count();
        match next_card(text, &mut cursor) {
            Ok(Some(card)) => {
                if mask.contains(card) {
                    return Err(HandError::DuplicateCard(card));
                }
                mask = mask.with(card);
            }
            Ok(None) => break,
            Err(source) => return Err(HandError::Malformed { position, source }),
        }
    }
    if mask.is_empty() {
        return Err(HandError::Empty);
    }
    Ok(mask)
}

/// Check that `text` names at least one card, every token is well formed
/// and no card repeats. Blank text is rejected with [`HandError::Empty`].
///
/// ```
/// use holdem_hand::hand::{validate_hand, HandError};
///
/// assert!(validate_hand("2s 3c 4d 5d").is_ok());
/// assert!(matches!(validate_hand("Ts Ts"), Err(HandError::DuplicateCard(_))));
/// assert_eq!(validate_hand("   "), Err(HandError::Empty));
/// ```
pub fn validate_hand(text: &str) -> Result<(), HandError> {
    scan(text).map(|_| ())
}

/// Boolean form of [`validate_hand`].
pub fn is_valid_hand(text: &str) -> bool {
    validate_hand(text).is_ok()
}

/// Validate a pocket and board as one hand. The two strings are joined
/// without a separator, so `"Td 10s"` + `"10h Jd"` is one five-token hand.
pub fn validate_hand_with_board(pocket: &str, board: &str) -> Result<(), HandError> {
    validate_hand(&[pocket, board].concat())
}

/// Parse hand text into a mask.
///
/// Unlike [`validate_hand`], blank text (empty or only spaces) parses to
/// [`HandMask::EMPTY`]; callers that need at least one card should
/// validate first.
///
/// ```
/// use holdem_hand::hand::{parse_hand, HandMask};
///
/// assert_eq!(parse_hand("  ").unwrap(), HandMask::EMPTY);
/// assert_eq!(parse_hand("Ks 10s").unwrap().card_count(), 2);
/// ```
pub fn parse_hand(text: &str) -> Result<HandMask, HandError> {
    if text.trim_matches(' ').is_empty() {
        return Ok(HandMask::EMPTY);
    }
    scan(text)
}

/// Parse a pocket and board as one hand; see [`validate_hand_with_board`].
pub fn parse_hand_with_board(pocket: &str, board: &str) -> Result<HandMask, HandError> {
    parse_hand(&[pocket, board].concat())
}
