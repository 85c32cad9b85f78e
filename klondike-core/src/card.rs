use std::fmt;

/// Number of cards in a full deck
pub const DECK_SIZE: usize = 52;

/// Represents the four suits, in the solver's fixed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl Suit {
    /// All suits in standard order
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Convert from numeric index (0-3)
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Suit::Spades),
            1 => Some(Suit::Hearts),
            2 => Some(Suit::Diamonds),
            3 => Some(Suit::Clubs),
            _ => None,
        }
    }

    /// Get the suit as a single character (S, H, D, C)
    pub fn to_char(&self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    /// Parse a suit from its single-character code
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'S' => Some(Suit::Spades),
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }

    /// Spades and clubs are black; hearts and diamonds are red
    pub fn is_black(&self) -> bool {
        matches!(self, Suit::Spades | Suit::Clubs)
    }
}

/// Represents card ranks from Ace (low) to King
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
}

impl Rank {
    /// All ranks from Ace to King
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
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
    ];

    /// Convert from numeric index (0-12)
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rank::Ace),
            1 => Some(Rank::Two),
            2 => Some(Rank::Three),
            3 => Some(Rank::Four),
            4 => Some(Rank::Five),
            5 => Some(Rank::Six),
            6 => Some(Rank::Seven),
            7 => Some(Rank::Eight),
            8 => Some(Rank::Nine),
            9 => Some(Rank::Ten),
            10 => Some(Rank::Jack),
            11 => Some(Rank::Queen),
            12 => Some(Rank::King),
            _ => None,
        }
    }

    /// Get the rank as a character (A, 2-9, T, J, Q, K)
    pub fn to_char(&self) -> char {
        match self {
            Rank::Ace => 'A',
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
        }
    }

    /// Parse a rank from its single-character code
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Rank::Ace),
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            _ => None,
        }
    }
}

/// Represents a single playing card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a new card
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card { suit, rank }
    }

    /// Create a card from an index (0-51), calculated as suit * 13 + rank
    pub fn from_index(index: u8) -> Option<Self> {
        if index >= DECK_SIZE as u8 {
            return None;
        }
        let suit = Suit::from_index(index / 13)?;
        let rank = Rank::from_index(index % 13)?;
        Some(Card::new(suit, rank))
    }

    /// Convert card to index (0-51)
    pub fn to_index(&self) -> u8 {
        (self.suit as u8) * 13 + self.rank as u8
    }

    pub fn is_black(&self) -> bool {
        self.suit.is_black()
    }

    /// True when the two cards have opposite colors
    pub fn differs_in_color(&self, other: Card) -> bool {
        self.is_black() != other.is_black()
    }

    /// Two-character code as it appears on the wire (e.g. "AS", "TD")
    pub fn code(&self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.rank.to_char());
        s.push(self.suit.to_char());
        s
    }

    /// The card's glyph in the Unicode playing-cards block.
    /// The block has a Knight between Jack and Queen, hence the skip.
    pub fn glyph(&self) -> char {
        let mut code = 0x1F0A1 + 0x10 * (self.suit as u32) + self.rank as u32;
        if self.rank > Rank::Jack {
            code += 1;
        }
        char::from_u32(code).unwrap()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}
