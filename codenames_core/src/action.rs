use serde::{Deserialize, Serialize};

/// Everything a presenter can ask the game to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Raw `word:number` text typed by the spymaster.
    GiveClue(String),
    /// Reveal the card at a grid position.
    RevealCard(usize),
    /// Reveal the first hidden card with exactly this word.
    RevealWord(String),
    EndGuessing,
}
