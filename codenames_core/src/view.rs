use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::{
    affiliation::{Affiliation, Team},
    game_state::{Game, Phase},
    player::Role,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum PhaseName {
    Clue,
    Guess,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub word: String,
    pub revealed: bool,
    /// Known once revealed, or always to spymasters.
    pub affiliation: Option<Affiliation>,
}

/// A read-only snapshot of a game as one role is allowed to see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub perspective: Role,
    pub current_team: Team,
    pub phase: PhaseName,
    pub clue: Option<String>,
    pub allowed_guesses: usize,
    pub guesses_made: usize,
    pub red_score: usize,
    pub blue_score: usize,
    pub red_remaining: usize,
    pub blue_remaining: usize,
    pub winner: Option<Team>,
    pub cards: Vec<CardView>,
}

impl GameView {
    pub fn new(game: &Game, perspective: Role) -> Self {
        let phase = match game.phase() {
            Phase::Clue => PhaseName::Clue,
            Phase::Guess { .. } => PhaseName::Guess,
            Phase::Finished { .. } => PhaseName::Finished,
        };
        let cards = game
            .board()
            .cards()
            .iter()
            .map(|c| CardView {
                word: c.word().to_string(),
                revealed: c.revealed(),
                affiliation: (c.revealed() || perspective == Role::Spymaster)
                    .then(|| c.affiliation()),
            })
            .collect();

        GameView {
            perspective,
            current_team: game.current_team(),
            phase,
            clue: game.current_clue().map(|c| c.to_string()),
            allowed_guesses: game.allowed_guesses(),
            guesses_made: game.guesses_made(),
            red_score: game.red_score(),
            blue_score: game.blue_score(),
            red_remaining: game.remaining_to_win(Team::Red),
            blue_remaining: game.remaining_to_win(Team::Blue),
            winner: game.winner(),
            cards,
        }
    }
}
