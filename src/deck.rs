use crate::cards::{Card, DECK_SIZE};
use crate::hand::HandMask;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A deck of distinct cards, drawn from the top.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards in deck-index order.
    ///
    /// ```
    /// use holdem_hand::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        Self { cards: (0..DECK_SIZE as u8).filter_map(Card::from_index).collect() }
    }

    /// The standard deck minus every card in `dead`.
    pub fn without(dead: HandMask) -> Self {
        let mut deck = Self::standard();
        deck.cards.retain(|&c| !dead.contains(c));
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards still in the deck as a mask.
    pub fn remaining(&self) -> HandMask {
        self.cards.iter().copied().collect()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }

    /// Draw up to `n` cards as a hand mask.
    pub fn deal(&mut self, n: usize) -> HandMask {
        (0..n).filter_map(|_| self.draw()).collect()
    }
}

/// `count` random hands of `size` cards each, reproducible from `seed`.
/// Every hand comes from a freshly shuffled full deck.
pub fn random_hands(size: usize, count: usize, seed: u64) -> Vec<HandMask> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut deck = Deck::standard();
            deck.shuffle_with(&mut rng);
            deck.deal(size)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_has_52_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        assert_eq!(d.remaining().card_count(), 52);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn deal_removes_cards_from_deck() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let hand = d.deal(7);
        assert_eq!(hand.card_count(), 7);
        assert_eq!(d.len(), 45);
        assert!(!hand.overlaps(d.remaining()));
        assert_eq!(d.draw_n(50).len(), 45);
        assert!(d.is_empty());
        assert_eq!(d.deal(3), HandMask::EMPTY);
    }

    #[test]
    fn without_dead_cards() {
        let dead: HandMask = "As Kd 2c".parse().unwrap();
        let d = Deck::without(dead);
        assert_eq!(d.len(), 49);
        assert!(!d.remaining().overlaps(dead));
    }

    #[test]
    fn random_hands_are_sized_and_reproducible() {
        let a = random_hands(7, 20, 99);
        let b = random_hands(7, 20, 99);
        assert_eq!(a, b);
        assert!(a.iter().all(|h| h.card_count() == 7));
    }
}
