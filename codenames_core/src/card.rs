use serde::{Deserialize, Serialize};

use crate::affiliation::Affiliation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    word: String,
    affiliation: Affiliation,
    revealed: bool,
}

impl Card {
    pub fn new(word: String, affiliation: Affiliation) -> Self {
        Card {
            word,
            affiliation,
            revealed: false,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn affiliation(&self) -> Affiliation {
        self.affiliation
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Turns the card face up. Callers check `revealed` first.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }
}
