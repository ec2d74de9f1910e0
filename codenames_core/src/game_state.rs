use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{
    affiliation::Team,
    board::{Board, SetupError},
    clue::{self, Clue, ClueRejection},
    event::{Event, EventEntry, EventVisibility, Victory},
    player::{Player, Role},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The current team's spymaster has to give a clue.
    Clue,
    /// The current team's operatives are guessing.
    Guess { clue: Clue, guesses_made: usize },
    Finished { winner: Team, reason: Victory },
}

#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) players: Vec<Player>,
    pub(crate) current_team: Team,
    pub(crate) phase: Phase,
    pub(crate) red_score: usize,
    pub(crate) blue_score: usize,
    pub(crate) log: Vec<EventEntry>,
}

impl Game {
    /// Deals a game with an entropy-seeded board.
    pub fn new<S: AsRef<str>>(words: &[S]) -> Result<Self, SetupError> {
        Self::with_rng(words, &mut ChaCha8Rng::from_entropy())
    }

    /// Deals a game whose board is fully determined by `words` and `seed`.
    pub fn with_seed<S: AsRef<str>>(words: &[S], seed: u64) -> Result<Self, SetupError> {
        Self::with_rng(words, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with_rng<S, R>(words: &[S], rng: &mut R) -> Result<Self, SetupError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        Ok(Self::from_board(Board::setup(words, rng)?))
    }

    pub fn from_board(board: Board) -> Self {
        let dealt = Event::BoardDealt {
            words: board.cards().iter().map(|c| c.word().to_string()).collect(),
            key: Some(board.cards().iter().map(|c| c.affiliation()).collect()),
        };
        Game {
            board,
            players: Player::roster(),
            current_team: Team::STARTING,
            phase: Phase::Clue,
            red_score: 0,
            blue_score: 0,
            log: vec![EventEntry {
                visibility: EventVisibility::Spymasters,
                event: dealt,
            }],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn log(&self) -> &[EventEntry] {
        &self.log
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn current_team(&self) -> Team {
        self.current_team
    }

    pub fn red_score(&self) -> usize {
        self.red_score
    }

    pub fn blue_score(&self) -> usize {
        self.blue_score
    }

    pub fn score(&self, team: Team) -> usize {
        match team {
            Team::Red => self.red_score,
            Team::Blue => self.blue_score,
        }
    }

    pub(crate) fn score_mut(&mut self, team: Team) -> &mut usize {
        match team {
            Team::Red => &mut self.red_score,
            Team::Blue => &mut self.blue_score,
        }
    }

    pub fn remaining_to_win(&self, team: Team) -> usize {
        team.agent_count().saturating_sub(self.score(team))
    }

    /// The first team, in turn order, that has contacted all of its agents.
    pub(crate) fn team_with_all_agents(&self) -> Option<Team> {
        Team::iter().find(|&team| self.remaining_to_win(team) == 0)
    }

    pub fn current_clue(&self) -> Option<&Clue> {
        match &self.phase {
            Phase::Guess { clue, .. } => Some(clue),
            _ => None,
        }
    }

    /// Zero unless a clue is active.
    pub fn allowed_guesses(&self) -> usize {
        self.current_clue().map(Clue::number).unwrap_or(0)
    }

    pub fn guesses_made(&self) -> usize {
        match &self.phase {
            Phase::Guess { guesses_made, .. } => *guesses_made,
            _ => 0,
        }
    }

    pub fn winner(&self) -> Option<Team> {
        match &self.phase {
            Phase::Finished { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.winner().is_some()
    }

    /// Which role of the current team has to act next.
    pub fn acting_role(&self) -> Option<Role> {
        match self.phase {
            Phase::Clue => Some(Role::Spymaster),
            Phase::Guess { .. } => Some(Role::Operative),
            Phase::Finished { .. } => None,
        }
    }

    pub fn acting_player(&self) -> Option<&Player> {
        let role = self.acting_role()?;
        self.players
            .iter()
            .find(|p| p.team == self.current_team && p.role == role)
    }

    /// Checks a clue for the team whose turn it is, without changing anything.
    pub fn validate_clue(&self, text: &str) -> Result<Clue, ClueRejection> {
        clue::validate(text, &self.board, self.remaining_to_win(self.current_team))
    }
}
