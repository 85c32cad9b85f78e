use crate::card::{Card, DECK_SIZE};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A complete 52-card deal, in the order the cards were read.
///
/// Positions 0..24 are the initial stock (position 23 is drawn first);
/// positions 24..52 are dealt onto the tableau from position 51 down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    cards: [Card; DECK_SIZE],
}

impl Deal {
    /// Create a deal from an explicit card ordering.
    /// Fails if any card appears more than once.
    pub fn new(cards: [Card; DECK_SIZE]) -> Result<Self, String> {
        let mut seen = [false; DECK_SIZE];
        for card in &cards {
            let idx = card.to_index() as usize;
            if seen[idx] {
                return Err(format!("Card {} appears twice", card));
            }
            seen[idx] = true;
        }
        Ok(Deal { cards })
    }

    /// Create a deal by shuffling a fresh deck with a seeded RNG.
    /// The same seed always produces the same deal.
    pub fn shuffled(seed: u64) -> Self {
        let mut cards: [Card; DECK_SIZE] =
            std::array::from_fn(|i| Card::from_index(i as u8).unwrap());
        let mut rng = StdRng::seed_from_u64(seed);
        cards.shuffle(&mut rng);
        Deal { cards }
    }

    /// All 52 cards in read order
    pub fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn test_rejects_duplicates() {
        let mut cards: [Card; DECK_SIZE] =
            std::array::from_fn(|i| Card::from_index(i as u8).unwrap());
        cards[51] = cards[0];
        let result = Deal::new(cards);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("twice"));
    }

    #[test]
    fn test_accepts_full_deck() {
        let cards: [Card; DECK_SIZE] =
            std::array::from_fn(|i| Card::from_index(i as u8).unwrap());
        assert!(Deal::new(cards).is_ok());
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let deal = Deal::shuffled(7);
        let mut indices: Vec<u8> = deal.cards().iter().map(|c| c.to_index()).collect();
        indices.sort();
        for (i, &idx) in indices.iter().enumerate() {
            assert_eq!(i as u8, idx);
        }
    }

    #[test]
    fn test_shuffled_deterministic() {
        assert_eq!(Deal::shuffled(42), Deal::shuffled(42));
        assert_ne!(Deal::shuffled(1), Deal::shuffled(2));
    }

    #[test]
    fn test_card_order_preserved() {
        let ace_spades = Card::new(Suit::Spades, Rank::Ace);
        let mut cards: [Card; DECK_SIZE] =
            std::array::from_fn(|i| Card::from_index(i as u8).unwrap());
        cards.swap(0, 51);
        let deal = Deal::new(cards).unwrap();
        assert_eq!(deal.cards()[51], ace_spades);
    }
}
