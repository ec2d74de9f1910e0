use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::{
    affiliation::{Affiliation, Team},
    clue::Clue,
    player::Role,
};

#[derive(Debug, PartialEq, Eq, Copy, Clone, Display, Serialize, Deserialize)]
pub enum TurnEnd {
    #[strum(to_string = "an innocent bystander was contacted")]
    Bystander,
    #[strum(to_string = "an opposing agent was contacted")]
    OpponentAgent,
    #[strum(to_string = "all guesses for the clue were used")]
    GuessesUsed,
    #[strum(to_string = "the operatives stopped guessing")]
    Passed,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Display, Serialize, Deserialize)]
pub enum Victory {
    #[strum(to_string = "the other team contacted the assassin")]
    Assassin,
    #[strum(to_string = "all of their agents were contacted")]
    AllAgentsContacted,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Board words in grid order; `key` is withheld from operatives.
    BoardDealt {
        words: Vec<String>,
        key: Option<Vec<Affiliation>>,
    },
    ClueGiven {
        team: Team,
        clue: Clue,
    },
    CardRevealed {
        team: Team,
        index: usize,
        word: String,
        affiliation: Affiliation,
    },
    TurnEnded {
        team: Team,
        reason: TurnEnd,
    },
    GameWon {
        winner: Team,
        reason: Victory,
    },
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum EventVisibility {
    Public,
    Spymasters,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEntry {
    pub visibility: EventVisibility,
    pub event: Event,
}

impl EventEntry {
    pub fn public(event: Event) -> Self {
        EventEntry {
            visibility: EventVisibility::Public,
            event,
        }
    }
}

/// Renders the log as seen by `role`, stripping what only spymasters may know.
pub fn filter_events(log: &[EventEntry], role: Role) -> Vec<Event> {
    log.iter()
        .map(|e| match (e.visibility, role) {
            (EventVisibility::Public, _) | (EventVisibility::Spymasters, Role::Spymaster) => {
                e.event.clone()
            }
            (EventVisibility::Spymasters, Role::Operative) => match &e.event {
                Event::BoardDealt { words, .. } => Event::BoardDealt {
                    words: words.clone(),
                    key: None,
                },
                other => other.clone(),
            },
        })
        .collect()
}
