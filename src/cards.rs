use std::fmt;
use std::str::FromStr;

/// Number of distinct cards in a deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit; also the width of a suit pattern.
pub const RANKS_PER_SUIT: usize = 13;

/// Card ranks from Two (low) to Ace (high). The discriminant is the rank's
/// bit position inside a 13-bit suit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Option<Rank> {
        if (index as usize) < RANKS_PER_SUIT {
            Some(Rank::ALL[index as usize])
        } else {
            None
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t == "10" {
            return Ok(Rank::Ten);
        }
        let mut chars = t.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::try_from(c).map_err(|_| RankParseError::Invalid(s.to_string())),
            _ => Err(RankParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(RankParseError::Invalid(c.to_string())),
        }
    }
}

/// Four suits in mask order: clubs occupy bits 0..13, spades bits 39..52.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Bit offset of this suit's 13-bit pattern inside a hand mask.
    pub const fn offset(self) -> u32 {
        self as u32 * RANKS_PER_SUIT as u32
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::try_from(c),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Suit::Clubs),
            'd' => Ok(Suit::Diamonds),
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card, stored as its deck index `rank + 13 * suit` (0..52).
///
/// ```
/// use holdem_hand::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(card.index(), 51);
/// assert_eq!(card.to_string(), "As");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card(u8);

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self(rank as u8 + RANKS_PER_SUIT as u8 * suit as u8)
    }

    /// Card for a deck index, or `None` when `index >= 52`.
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < DECK_SIZE {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 % RANKS_PER_SUIT as u8) as usize]
    }

    pub const fn suit(self) -> Suit {
        Suit::ALL[(self.0 / RANKS_PER_SUIT as u8) as usize]
    }

    /// Single-bit hand mask for this card.
    pub const fn mask(self) -> u64 {
        1u64 << self.0
    }

    pub const fn to_tuple(self) -> (Rank, Suit) {
        (self.rank(), self.suit())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error("rank '{0}' is not followed by a suit")]
    MissingSuit(Rank),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

/// Scan the next RANK+SUIT token of `text` starting at byte `*cursor`.
///
/// Leading spaces are skipped. Returns `Ok(None)` once only spaces remain and
/// `Err` for a token with an unknown rank, an unknown suit, or a rank with no
/// suit after it. On success `*cursor` points just past the token.
///
/// ```
/// use holdem_hand::cards::{next_card, Card, Rank, Suit};
///
/// let mut cursor = 0;
/// assert_eq!(next_card("10h Jd", &mut cursor).unwrap(), Some(Card::new(Rank::Ten, Suit::Hearts)));
/// assert_eq!(next_card("10h Jd", &mut cursor).unwrap(), Some(Card::new(Rank::Jack, Suit::Diamonds)));
/// assert_eq!(next_card("10h Jd", &mut cursor).unwrap(), None);
/// ```
pub fn next_card(text: &str, cursor: &mut usize) -> Result<Option<Card>, CardParseError> {
    let bytes = text.as_bytes();
    while *cursor < bytes.len() && bytes[*cursor] == b' ' {
        *cursor += 1;
    }
    if *cursor >= bytes.len() {
        return Ok(None);
    }

    // Accepted ranks and suits are ASCII, so the cursor stays on a char
    // boundary until a token fails.
    let rank = match bytes[*cursor] {
        b'1' => {
            if bytes.get(*cursor + 1) != Some(&b'0') {
                return Err(RankParseError::Invalid("1".to_string()).into());
            }
            *cursor += 1;
            Rank::Ten
        }
        _ => Rank::try_from(char_at(text, *cursor))?,
    };
    *cursor += 1;

    if *cursor >= bytes.len() {
        return Err(CardParseError::MissingSuit(rank));
    }
    let suit = Suit::try_from(char_at(text, *cursor))?;
    *cursor += 1;

    Ok(Some(Card::new(rank, suit)))
}

fn char_at(text: &str, at: usize) -> char {
    text.get(at..).and_then(|rest| rest.chars().next()).unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut cursor = 0;
        match next_card(t, &mut cursor)? {
            Some(card) if cursor == t.len() => Ok(card),
            _ => Err(CardParseError::Invalid(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_display_and_from_str() {
        assert_eq!(Rank::Ace.to_string(), "A");
        assert_eq!(Rank::from_str("T").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("10").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("q").unwrap(), Rank::Queen);
        assert!(Rank::from_str("1").is_err());
        assert!(Rank::from_str("AK").is_err());
    }

    #[test]
    fn suit_display_and_from_str() {
        assert_eq!(Suit::Spades.to_string(), "s");
        assert_eq!(Suit::from_str("s").unwrap(), Suit::Spades);
        assert_eq!(Suit::from_str("H").unwrap(), Suit::Hearts);
        assert!(Suit::from_str("x").is_err());
        assert_eq!(Suit::from_str("hearts"), Err(SuitParseError::Invalid("hearts".to_string())));
    }

    #[test]
    fn card_index_layout() {
        assert_eq!(Card::new(Rank::Two, Suit::Clubs).index(), 0);
        assert_eq!(Card::new(Rank::Six, Suit::Clubs).index(), 4);
        assert_eq!(Card::new(Rank::Two, Suit::Diamonds).index(), 13);
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).index(), 51);
        for i in 0..DECK_SIZE as u8 {
            let card = Card::from_index(i).unwrap();
            assert_eq!(Card::new(card.rank(), card.suit()), card);
        }
        assert_eq!(Card::from_index(52), None);
    }

    #[test]
    fn card_accessors() {
        let qs: Card = "Qs".parse().unwrap();
        assert_eq!(qs.rank(), Rank::Queen);
        let four_d: Card = "4d".parse().unwrap();
        assert_eq!(four_d.suit(), Suit::Diamonds);
        assert_eq!(four_d.to_tuple(), (Rank::Four, Suit::Diamonds));
    }

    #[test]
    fn card_display_and_from_str() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(a.to_string(), "As");
        assert_eq!(Card::from_str("As").unwrap(), a);
        assert_eq!(Card::from_str("10d").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!(Card::from_str("ah").unwrap(), Card::new(Rank::Ace, Suit::Hearts));
        assert!(matches!(Card::from_str("As Kd"), Err(CardParseError::Invalid(_))));
        assert!(matches!(Card::from_str(""), Err(CardParseError::Invalid(_))));
    }

    #[test]
    fn next_card_skips_spaces_and_reports_end() {
        let text = "  7c   2d ";
        let mut cursor = 0;
        assert_eq!(next_card(text, &mut cursor).unwrap(), Some(Card::new(Rank::Seven, Suit::Clubs)));
        assert_eq!(next_card(text, &mut cursor).unwrap(), Some(Card::new(Rank::Two, Suit::Diamonds)));
        assert_eq!(next_card(text, &mut cursor).unwrap(), None);
        assert_eq!(cursor, text.len());
    }

    #[test]
    fn next_card_accepts_adjacent_tokens() {
        let mut cursor = 0;
        assert_eq!(next_card("Td10s", &mut cursor).unwrap(), Some(Card::new(Rank::Ten, Suit::Diamonds)));
        assert_eq!(next_card("Td10s", &mut cursor).unwrap(), Some(Card::new(Rank::Ten, Suit::Spades)));
    }

    #[test]
    fn next_card_malformed_tokens() {
        let mut cursor = 0;
        assert!(matches!(next_card("Xs", &mut cursor), Err(CardParseError::Rank(_))));
        cursor = 0;
        assert!(matches!(next_card("Ax", &mut cursor), Err(CardParseError::Suit(_))));
        cursor = 0;
        assert!(matches!(next_card("A", &mut cursor), Err(CardParseError::MissingSuit(Rank::Ace))));
        cursor = 0;
        assert!(matches!(next_card("1s", &mut cursor), Err(CardParseError::Rank(_))));
        cursor = 0;
        assert!(matches!(next_card("1", &mut cursor), Err(CardParseError::Rank(_))));
        cursor = 0;
        assert!(matches!(next_card("10", &mut cursor), Err(CardParseError::MissingSuit(Rank::Ten))));
    }

    #[test]
    fn next_card_reports_whole_non_ascii_chars() {
        let mut cursor = 0;
        assert_eq!(
            next_card("A\u{e9}", &mut cursor),
            Err(CardParseError::Suit(SuitParseError::Invalid("\u{e9}".to_string())))
        );
        cursor = 0;
        assert_eq!(
            next_card("\u{2660}s", &mut cursor),
            Err(CardParseError::Rank(RankParseError::Invalid("\u{2660}".to_string())))
        );
    }

    #[test]
    fn ordering_is_suit_major() {
        let as_ = Card::new(Rank::Ace, Suit::Spades);
        let ks = Card::new(Rank::King, Suit::Spades);
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        assert!(as_ > ks);
        assert!(ks > ah);
    }
}
