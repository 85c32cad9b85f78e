use crate::card::{Card, Rank, DECK_SIZE};
use crate::deal::Deal;
use crate::moves::Move;

/// Number of tableau columns
pub const TABLEAU_WIDTH: usize = 7;

/// Cards left over for the stock after dealing the tableau
pub const STOCK_SIZE: usize = DECK_SIZE - 28;

/// One tableau column: face-down cards under a face-up run.
///
/// `face_down` has no internal ordering requirement; `face_up` runs from
/// the bottom of the run to its top, descending by rank and alternating
/// in color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    face_down: Vec<Card>,
    face_up: Vec<Card>,
}

impl Column {
    pub fn new(face_down: Vec<Card>, face_up: Vec<Card>) -> Self {
        Column { face_down, face_up }
    }

    pub fn face_down(&self) -> &[Card] {
        &self.face_down
    }

    pub fn face_up(&self) -> &[Card] {
        &self.face_up
    }

    /// Top face-up card, if any
    pub fn top(&self) -> Option<Card> {
        self.face_up.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.face_down.is_empty() && self.face_up.is_empty()
    }
}

/// A full Klondike position.
///
/// The stock and waste share one vector: the first `len - waste` cards are
/// the face-down stock with its top at the back of that prefix, the last
/// `waste` cards are the waste with its top at the front of that suffix.
/// This is the convention the deal encoding uses, kept consistent between
/// dealing, drawing and fingerprinting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    draw_size: usize,
    foundation: [i8; 4],
    talon: Vec<Card>,
    waste: usize,
    tableau: [Column; TABLEAU_WIDTH],
}

impl Game {
    /// Deal a new game. Cards 0..24 of the deal become the stock; the rest
    /// are dealt row-major onto the tableau, popping from the back, with
    /// the card dealt in a column's own row face-up.
    pub fn new(deal: &Deal, draw_size: usize) -> Self {
        let cards = deal.cards();
        let talon = cards[..STOCK_SIZE].to_vec();
        let mut tableau: [Column; TABLEAU_WIDTH] = std::array::from_fn(|_| Column::default());
        let mut next = cards.len();
        for row in 0..TABLEAU_WIDTH {
            for (column, slot) in tableau.iter_mut().enumerate().skip(row) {
                next -= 1;
                let card = cards[next];
                if row == column {
                    slot.face_up.push(card);
                } else {
                    slot.face_down.push(card);
                }
            }
        }
        Game {
            draw_size,
            foundation: [-1; 4],
            talon,
            waste: 0,
            tableau,
        }
    }

    /// Assemble a game from explicit parts, verifying the state invariants.
    pub fn from_parts(
        foundation: [i8; 4],
        talon: Vec<Card>,
        waste: usize,
        tableau: [Column; TABLEAU_WIDTH],
        draw_size: usize,
    ) -> Result<Self, String> {
        let game = Game {
            draw_size,
            foundation,
            talon,
            waste,
            tableau,
        };
        game.check()?;
        Ok(game)
    }

    /// Foundation top rank per suit; -1 means empty
    pub fn foundation(&self) -> &[i8; 4] {
        &self.foundation
    }

    pub fn draw_size(&self) -> usize {
        self.draw_size
    }

    /// The stock and waste as one sequence (see the type-level comment)
    pub fn talon(&self) -> &[Card] {
        &self.talon
    }

    pub fn waste_len(&self) -> usize {
        self.waste
    }

    pub fn stock_len(&self) -> usize {
        self.talon.len() - self.waste
    }

    /// Top card of the waste, if any
    pub fn waste_top(&self) -> Option<Card> {
        if self.waste == 0 {
            None
        } else {
            Some(self.talon[self.stock_len()])
        }
    }

    pub fn tableau(&self) -> &[Column; TABLEAU_WIDTH] {
        &self.tableau
    }

    /// True iff `mv` is playable under Klondike rules
    pub fn is_legal(&self, mv: Move) -> bool {
        match mv {
            Move::Draw => !self.talon.is_empty(),
            Move::WasteToFoundation => match self.waste_top() {
                Some(card) => self.next_for_foundation(card),
                None => false,
            },
            Move::WasteToTableau { dst } => match self.waste_top() {
                Some(card) => dst < TABLEAU_WIDTH && self.fits_on_column(card, dst),
                None => false,
            },
            Move::TableauToFoundation { src } => {
                if src >= TABLEAU_WIDTH {
                    return false;
                }
                match self.tableau[src].top() {
                    Some(card) => self.next_for_foundation(card),
                    None => false,
                }
            }
            Move::TableauToTableau { src, row, dst } => {
                if src >= TABLEAU_WIDTH || dst >= TABLEAU_WIDTH {
                    return false;
                }
                if row >= self.tableau[src].face_up.len() {
                    return false;
                }
                self.fits_on_column(self.tableau[src].face_up[row], dst)
            }
        }
    }

    fn next_for_foundation(&self, card: Card) -> bool {
        card.rank as i8 == self.foundation[card.suit as usize] + 1
    }

    fn fits_on_column(&self, card: Card, dst: usize) -> bool {
        match self.tableau[dst].top() {
            // Only a king may open an empty column
            None => card.rank == Rank::King,
            Some(top) => card.differs_in_color(top) && card.rank as u8 + 1 == top.rank as u8,
        }
    }

    /// Apply a legal move, then flip any newly exposed face-down cards.
    /// Callers clone first and must gate with [`Game::is_legal`].
    pub fn apply(&mut self, mv: Move) {
        debug_assert!(self.is_legal(mv), "apply on illegal move: {}", mv);
        match mv {
            Move::Draw => {
                if self.waste == self.talon.len() {
                    // Stock exhausted: the waste flips back to the stock
                    self.waste = 0;
                }
                self.waste = (self.waste + self.draw_size).min(self.talon.len());
            }
            Move::WasteToFoundation => {
                let card = self.take_waste_top();
                self.foundation[card.suit as usize] = card.rank as i8;
            }
            Move::WasteToTableau { dst } => {
                let card = self.take_waste_top();
                self.tableau[dst].face_up.push(card);
            }
            Move::TableauToFoundation { src } => {
                let card = self.tableau[src].face_up.pop().unwrap();
                self.foundation[card.suit as usize] = card.rank as i8;
            }
            Move::TableauToTableau { src, row, dst } => {
                let run = self.tableau[src].face_up.split_off(row);
                self.tableau[dst].face_up.extend(run);
            }
        }

        for column in &mut self.tableau {
            if column.face_up.is_empty() {
                if let Some(card) = column.face_down.pop() {
                    column.face_up.push(card);
                }
            }
        }
    }

    fn take_waste_top(&mut self) -> Card {
        let boundary = self.stock_len();
        self.waste -= 1;
        self.talon.remove(boundary)
    }

    /// Won as soon as the stock and waste are empty and no card is face
    /// down: such a position always plays out to four full foundations.
    pub fn is_won(&self) -> bool {
        self.talon.is_empty() && self.tableau.iter().all(|c| c.face_down.is_empty())
    }

    /// Verify the state invariants; used by tests and diagnostics.
    pub fn check(&self) -> Result<(), String> {
        if self.draw_size == 0 {
            return Err("draw size must be at least 1".into());
        }
        if self.waste > self.talon.len() {
            return Err(format!(
                "waste index {} exceeds talon length {}",
                self.waste,
                self.talon.len()
            ));
        }

        // Exactly one copy of each card across foundation (implicit),
        // stock+waste and the tableau
        let mut seen = [false; DECK_SIZE];
        let mut claim = |card: Card| -> Result<(), String> {
            let idx = card.to_index() as usize;
            if seen[idx] {
                return Err(format!("card {} appears twice", card));
            }
            seen[idx] = true;
            Ok(())
        };
        for suit in crate::card::Suit::ALL {
            let top = self.foundation[suit as usize];
            if !(-1..=12).contains(&top) {
                return Err(format!("foundation top {} out of range", top));
            }
            for r in 0..=top {
                claim(Card::new(suit, Rank::from_index(r as u8).unwrap()))?;
            }
        }
        for &card in &self.talon {
            claim(card)?;
        }
        for column in &self.tableau {
            for &card in column.face_down.iter().chain(column.face_up.iter()) {
                claim(card)?;
            }
        }
        if !seen.iter().all(|&s| s) {
            return Err("not all 52 cards accounted for".into());
        }

        for (i, column) in self.tableau.iter().enumerate() {
            if column.face_up.is_empty() && !column.face_down.is_empty() {
                return Err(format!("column {} has unflipped top card", i));
            }
            for pair in column.face_up.windows(2) {
                if !pair[1].differs_in_color(pair[0]) || pair[1].rank as u8 + 1 != pair[0].rank as u8
                {
                    return Err(format!(
                        "column {} face-up run breaks at {} over {}",
                        i, pair[1], pair[0]
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn ordered_deal() -> Deal {
        let cards: [Card; DECK_SIZE] =
            std::array::from_fn(|i| Card::from_index(i as u8).unwrap());
        Deal::new(cards).unwrap()
    }

    fn card(code: &str) -> Card {
        let mut chars = code.chars();
        let rank = Rank::from_char(chars.next().unwrap()).unwrap();
        let suit = Suit::from_char(chars.next().unwrap()).unwrap();
        Card::new(suit, rank)
    }

    #[test]
    fn test_deal_layout() {
        let deal = ordered_deal();
        let game = Game::new(&deal, 3);

        assert_eq!(game.stock_len(), STOCK_SIZE);
        assert_eq!(game.waste_len(), 0);
        assert_eq!(game.talon(), &deal.cards()[..STOCK_SIZE]);

        for (i, column) in game.tableau().iter().enumerate() {
            assert_eq!(column.face_down().len(), i);
            assert_eq!(column.face_up().len(), 1);
        }

        // Card 51 is dealt first, face-up on column 0; the rest of row 0
        // goes face-down across columns 1..7
        let cards = deal.cards();
        assert_eq!(game.tableau()[0].face_up(), &[cards[51]]);
        for c in 1..TABLEAU_WIDTH {
            assert_eq!(game.tableau()[c].face_down()[0], cards[51 - c]);
        }
        // Column 1's face-up card is the first card of row 1
        assert_eq!(game.tableau()[1].face_up(), &[cards[44]]);

        game.check().unwrap();
    }

    #[test]
    fn test_draw_and_wraparound() {
        let deal = ordered_deal();
        let mut game = Game::new(&deal, 3);

        assert!(game.is_legal(Move::Draw));
        game.apply(Move::Draw);
        assert_eq!(game.waste_len(), 3);
        // Waste top sits at the stock/waste boundary
        assert_eq!(game.waste_top(), Some(deal.cards()[21]));

        // Draw through the rest of the stock; the last draw is short
        for _ in 0..7 {
            game.apply(Move::Draw);
        }
        assert_eq!(game.waste_len(), STOCK_SIZE);
        assert_eq!(game.stock_len(), 0);
        assert_eq!(game.waste_top(), Some(deal.cards()[0]));

        // Next draw flips the waste back and draws again
        game.apply(Move::Draw);
        assert_eq!(game.waste_len(), 3);
        assert_eq!(game.waste_top(), Some(deal.cards()[21]));
        game.check().unwrap();
    }

    #[test]
    fn test_draw_one() {
        let deal = ordered_deal();
        let mut game = Game::new(&deal, 1);
        game.apply(Move::Draw);
        assert_eq!(game.waste_top(), Some(deal.cards()[23]));
        game.apply(Move::Draw);
        assert_eq!(game.waste_top(), Some(deal.cards()[22]));
    }

    #[test]
    fn test_waste_to_foundation() {
        // Empty waste: nothing to play
        let deal = ordered_deal();
        let mut game = Game::new(&deal, 3);
        assert!(!game.is_legal(Move::WasteToFoundation));

        // Hand-built position with the ace of spades third in the stock
        let mut talon = deal.cards()[..STOCK_SIZE].to_vec();
        let ace = card("AS");
        let pos = talon.iter().position(|&c| c == ace).unwrap();
        talon.swap(pos, 21);
        let tableau = Game::new(&deal, 3).tableau.clone();
        let mut game2 = Game::from_parts([-1; 4], talon, 0, tableau, 3).unwrap();
        game2.apply(Move::Draw);
        assert_eq!(game2.waste_top(), Some(ace));
        assert!(game2.is_legal(Move::WasteToFoundation));
        game2.apply(Move::WasteToFoundation);
        assert_eq!(game2.foundation()[Suit::Spades as usize], 0);
        assert_eq!(game2.talon().len(), STOCK_SIZE - 1);
        // Card under the played one becomes the new waste top
        assert_eq!(game2.waste_len(), 2);
        game2.check().unwrap();

        assert!(game.is_legal(Move::Draw));
        game.check().unwrap();
    }

    #[test]
    fn test_tableau_rules() {
        // Two columns: 8H over nothing, 7S/6D run on another
        let mut tableau: [Column; TABLEAU_WIDTH] = std::array::from_fn(|_| Column::default());
        tableau[0] = Column::new(vec![card("2C")], vec![card("8H")]);
        tableau[1] = Column::new(vec![], vec![card("7S"), card("6D")]);
        tableau[2] = Column::new(vec![], vec![card("KC"), card("QD"), card("JC")]);
        let talon: Vec<Card> = (0..52u8)
            .map(|i| Card::from_index(i).unwrap())
            .filter(|c| {
                !["2C", "8H", "7S", "6D", "KC", "QD", "JC"]
                    .iter()
                    .any(|code| card(code) == *c)
            })
            .collect();
        assert_eq!(talon.len(), 45);
        let game = Game::from_parts([-1; 4], talon, 0, tableau, 3).unwrap();

        // Whole 7S/6D run onto the 8H
        assert!(game.is_legal(Move::TableauToTableau { src: 1, row: 0, dst: 0 }));
        // 6D alone onto 8H is not descending-by-one
        assert!(!game.is_legal(Move::TableauToTableau { src: 1, row: 1, dst: 0 }));
        // JC cannot land on 6D
        assert!(!game.is_legal(Move::TableauToTableau { src: 2, row: 2, dst: 1 }));
        // Non-king cannot open an empty column
        assert!(!game.is_legal(Move::TableauToTableau { src: 1, row: 0, dst: 3 }));
        // A king-led run can
        assert!(game.is_legal(Move::TableauToTableau { src: 2, row: 0, dst: 3 }));
        // Out-of-range row
        assert!(!game.is_legal(Move::TableauToTableau { src: 1, row: 2, dst: 0 }));
    }

    #[test]
    fn test_apply_run_move_reveals() {
        let mut tableau: [Column; TABLEAU_WIDTH] = std::array::from_fn(|_| Column::default());
        tableau[0] = Column::new(vec![card("2C")], vec![card("8H")]);
        tableau[1] = Column::new(vec![], vec![card("7S"), card("6D")]);
        tableau[3] = Column::new(vec![], vec![card("9S")]);
        let talon: Vec<Card> = (0..52u8)
            .map(|i| Card::from_index(i).unwrap())
            .filter(|c| {
                !["2C", "8H", "7S", "6D", "9S"]
                    .iter()
                    .any(|code| card(code) == *c)
            })
            .collect();
        let mut game = Game::from_parts([-1; 4], talon, 0, tableau, 3).unwrap();

        game.apply(Move::TableauToTableau { src: 1, row: 0, dst: 0 });
        assert_eq!(
            game.tableau()[0].face_up(),
            &[card("8H"), card("7S"), card("6D")]
        );
        assert!(game.tableau()[1].is_empty());
        game.check().unwrap();

        // Moving the 8H run onto the 9S must flip the 2C
        game.apply(Move::TableauToTableau { src: 0, row: 0, dst: 3 });
        assert_eq!(game.tableau()[0].face_up(), &[card("2C")]);
        assert!(game.tableau()[0].face_down().is_empty());
        assert_eq!(game.tableau()[3].top(), Some(card("6D")));
        game.check().unwrap();
    }

    #[test]
    fn test_won_shortcut() {
        let tableau: [Column; TABLEAU_WIDTH] = std::array::from_fn(|i| {
            if i < 4 {
                let suit = Suit::from_index(i as u8).unwrap();
                Column::new(
                    vec![],
                    vec![Card::new(suit, Rank::King)],
                )
            } else {
                Column::default()
            }
        });
        let game = Game::from_parts([11, 11, 11, 11], vec![], 0, tableau, 3).unwrap();
        assert!(game.is_won());

        let deal = ordered_deal();
        assert!(!Game::new(&deal, 3).is_won());
    }

    #[test]
    fn test_check_catches_bad_run() {
        let mut tableau: [Column; TABLEAU_WIDTH] = std::array::from_fn(|_| Column::default());
        // 6D over 7H: descending but not alternating
        tableau[0] = Column::new(vec![], vec![card("7H"), card("6D")]);
        let talon: Vec<Card> = (0..52u8)
            .map(|i| Card::from_index(i).unwrap())
            .filter(|c| *c != card("7H") && *c != card("6D"))
            .collect();
        let result = Game::from_parts([-1; 4], talon, 0, tableau, 3);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_catches_unflipped_column() {
        let mut tableau: [Column; TABLEAU_WIDTH] = std::array::from_fn(|_| Column::default());
        tableau[0] = Column::new(vec![card("7H")], vec![]);
        let talon: Vec<Card> = (0..52u8)
            .map(|i| Card::from_index(i).unwrap())
            .filter(|c| *c != card("7H"))
            .collect();
        let result = Game::from_parts([-1; 4], talon, 0, tableau, 3);
        assert!(result.is_err());
    }
}
