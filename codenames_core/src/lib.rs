use affiliation::Team;
use presenter::Presenter;
use session::Session;

pub mod action;
pub mod affiliation;
pub mod board;
pub mod card;
pub mod clue;
pub mod event;
mod game_logic;
mod game_state;
pub mod player;
pub mod presenter;
pub mod session;
pub mod view;
pub mod words;

pub use game_logic::{reduce, GameError, RevealError};
pub use game_state::{Game, Phase};

/// Plays `game` to the end with a single presenter taking every seat.
pub fn run_game<P: Presenter>(game: Game, presenter: P) -> Option<Team> {
    Session::new(game, presenter).play()
}
