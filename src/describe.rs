//! Human-readable descriptions of dice, boards and collections of either.

use crate::core::Die;
use crate::games::{DiceGame, JumpTable, SnakesAndLadders};

/// Something that can describe itself in a line of text.
pub trait TextRepresentable {
    fn textual_description(&self) -> String;
}

/// A richer, possibly multi-line description.
///
/// Falls back to the plain description unless overridden.
pub trait PrettyTextRepresentable: TextRepresentable {
    fn pretty_textual_description(&self) -> String {
        self.textual_description()
    }
}

impl<T: TextRepresentable + ?Sized> TextRepresentable for Box<T> {
    fn textual_description(&self) -> String {
        (**self).textual_description()
    }
}

/// `[a,b,c]`
impl<T: TextRepresentable> TextRepresentable for [T] {
    fn textual_description(&self) -> String {
        let items: Vec<String> = self.iter().map(TextRepresentable::textual_description).collect();
        format!("[{}]", items.join(","))
    }
}

impl TextRepresentable for Die {
    fn textual_description(&self) -> String {
        format!("A {}-sided dice", self.sides())
    }
}

impl TextRepresentable for JumpTable {
    fn textual_description(&self) -> String {
        format!(
            "a board of {} squares with {} ladders and {} snakes",
            self.final_square(),
            self.ladder_count(),
            self.snake_count()
        )
    }
}

/// One glyph per square from 1 to the final square.
impl PrettyTextRepresentable for JumpTable {
    fn pretty_textual_description(&self) -> String {
        let mut output = String::new();
        for square in 1..=self.final_square() {
            let delta = self.delta(square);
            let glyph = if delta > 0 {
                "▲ "
            } else if delta < 0 {
                "▼ "
            } else {
                "○"
            };
            output.push_str(glyph);
        }
        output
    }
}

impl TextRepresentable for SnakesAndLadders {
    fn textual_description(&self) -> String {
        format!("A game of {} with {} squares", self.title(), self.final_square())
    }
}

impl PrettyTextRepresentable for SnakesAndLadders {
    fn pretty_textual_description(&self) -> String {
        format!(
            "{}:\n{}",
            self.textual_description(),
            self.board().pretty_textual_description()
        )
    }
}
