use crate::card::{Card, Rank, Suit};
use crate::game::Game;
use std::fmt;

const FACE_DOWN_GLYPH: char = '\u{1F0A0}';
const FACE_DOWN_COLOR: &str = "\u{1b}[31m";
const RESET: &str = "\u{1b}[0m";

/// Console rendering of a position: stock, waste and foundations on the
/// first line, then the tableau row by row with face-down cards colored.
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stock_len() > 0 {
            write!(f, "{} ", FACE_DOWN_GLYPH)?;
        } else {
            write!(f, "  ")?;
        }
        match self.waste_top() {
            Some(card) => write!(f, "{} ", card.glyph())?,
            None => write!(f, "  ")?,
        }
        write!(f, "{}", " ".repeat(2 * (self.tableau().len() - 4)))?;
        for suit in Suit::ALL {
            match self.foundation()[suit as usize] {
                -1 => write!(f, "  ")?,
                top => {
                    let rank = Rank::from_index(top as u8).unwrap();
                    write!(f, "{} ", Card::new(suit, rank).glyph())?
                }
            }
        }

        let height = self
            .tableau()
            .iter()
            .map(|c| c.face_down().len() + c.face_up().len())
            .max()
            .unwrap_or(0);
        for row in 0..height {
            write!(f, "\n    ")?;
            for column in self.tableau() {
                let down = column.face_down().len();
                if row < down {
                    write!(
                        f,
                        "{}{}{} ",
                        FACE_DOWN_COLOR,
                        column.face_down()[row].glyph(),
                        RESET
                    )?;
                } else if row < down + column.face_up().len() {
                    write!(f, "{} ", column.face_up()[row - down].glyph())?;
                } else {
                    write!(f, "  ")?;
                }
            }
        }
        Ok(())
    }
}
