use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;

pub const SEPARATOR: char = ':';

/// A spymaster's hint: one word and the number of cards it relates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    word: String,
    number: usize,
}

impl Clue {
    pub fn word(&self) -> &str {
        &self.word
    }

    /// How many guesses the operatives may make for this clue.
    pub fn number(&self) -> usize {
        self.number
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.word, SEPARATOR, self.number)
    }
}

/// Why a clue was refused. The message is meant for the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClueRejection {
    #[error("a clue must look like word:number")]
    MissingSeparator,
    #[error("the clue word must be a single word")]
    InvalidWord,
    #[error("\"{0}\" is a codename still on the board")]
    CodenameOnBoard(String),
    #[error("\"{0}\" is not a whole number")]
    InvalidNumber(String),
    #[error("{requested} guesses requested, but only {remaining} agents are left to find")]
    TooManyGuesses { requested: String, remaining: usize },
}

/// Checks `text` against `board` for a team that still has `remaining` agents to find.
///
/// Checks run in a fixed order and the first failure wins.
pub fn validate(text: &str, board: &Board, remaining: usize) -> Result<Clue, ClueRejection> {
    let (word, number) = text
        .split_once(SEPARATOR)
        .ok_or(ClueRejection::MissingSeparator)?;

    if word.is_empty() || word.chars().any(char::is_whitespace) {
        return Err(ClueRejection::InvalidWord);
    }
    if board.is_hidden_codename(word) {
        return Err(ClueRejection::CodenameOnBoard(word.to_string()));
    }
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ClueRejection::InvalidNumber(number.to_string()));
    }

    // digits only, so parsing can only fail on overflow, which is too many anyway
    match number.parse::<usize>() {
        Ok(n) if n <= remaining => Ok(Clue {
            word: word.to_string(),
            number: n,
        }),
        _ => Err(ClueRejection::TooManyGuesses {
            requested: number.to_string(),
            remaining,
        }),
    }
}
