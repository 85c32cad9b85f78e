use klondike_core::{Card, Deal, Rank, Suit, DECK_SIZE};
use std::fmt;

/// Error produced when an input line cannot be read as a deal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parse a deal from one input line: 52 two-character card codes, rank
/// character first (A23456789TJQK), then suit character (SHDC).
/// Example prefix: "AS2SKH..." for ace of spades, two of spades, ...
pub fn parse_deck_line(line: &str) -> Result<Deal, ParseError> {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() != 2 * DECK_SIZE {
        return Err(ParseError {
            message: format!(
                "Expected {} characters (52 cards), got {}",
                2 * DECK_SIZE,
                chars.len()
            ),
        });
    }

    let mut cards = Vec::with_capacity(DECK_SIZE);
    for i in 0..DECK_SIZE {
        let rank_char = chars[2 * i];
        let suit_char = chars[2 * i + 1];
        let rank = Rank::from_char(rank_char).ok_or_else(|| ParseError {
            message: format!("Invalid rank character '{}' at card {}", rank_char, i),
        })?;
        let suit = Suit::from_char(suit_char).ok_or_else(|| ParseError {
            message: format!("Invalid suit character '{}' at card {}", suit_char, i),
        })?;
        cards.push(Card::new(suit, rank));
    }

    let cards: [Card; DECK_SIZE] = cards.try_into().expect("collected 52 cards");
    Deal::new(cards).map_err(|message| ParseError { message })
}

/// The deal's 52 card codes, in read order
pub fn deck_codes(deal: &Deal) -> Vec<String> {
    deal.cards().iter().map(|c| c.code()).collect()
}
