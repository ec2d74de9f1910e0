use std::iter::repeat;

use serde::{Deserialize, Serialize};
use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString};

/// The two competing teams.
#[derive(
    Debug, PartialEq, Eq, Hash, Copy, Clone, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    /// The team that gives the first clue. It also owns the extra agent card.
    pub const STARTING: Team = Team::Red;

    pub fn other(self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }

    pub fn affiliation(self) -> Affiliation {
        match self {
            Team::Red => Affiliation::Red,
            Team::Blue => Affiliation::Blue,
        }
    }

    /// Number of agent cards dealt to this team, which is also the score it needs to win.
    pub fn agent_count(self) -> usize {
        self.affiliation().count()
    }
}

/// The secret tag a card receives when the board is dealt.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Copy,
    Clone,
    Display,
    EnumIter,
    EnumString,
    EnumMessage,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Affiliation {
    #[strum(message = "An agent of the red team. Revealing it scores a point for red.")]
    Red,
    #[strum(message = "An agent of the blue team. Revealing it scores a point for blue.")]
    Blue,
    #[strum(message = "An innocent bystander. Revealing it ends the current turn.")]
    Neutral,
    #[strum(message = "The assassin. The team revealing it loses the game immediately.")]
    Assassin,
}

impl Affiliation {
    /// How many cards of this kind are on every board.
    pub fn count(self) -> usize {
        match self {
            Affiliation::Red | Affiliation::Blue => {
                if self.team() == Some(Team::STARTING) {
                    9
                } else {
                    8
                }
            }
            Affiliation::Neutral => 7,
            Affiliation::Assassin => 1,
        }
    }

    pub fn team(self) -> Option<Team> {
        match self {
            Affiliation::Red => Some(Team::Red),
            Affiliation::Blue => Some(Team::Blue),
            Affiliation::Neutral | Affiliation::Assassin => None,
        }
    }

    /// The full multiset of affiliations for one board, in enum order.
    pub fn key() -> Vec<Affiliation> {
        Affiliation::iter()
            .flat_map(|a| repeat(a).take(a.count()))
            .collect()
    }

    pub fn rule(&self) -> String {
        format!(
            "{} [{} cards]: {}",
            self,
            self.count(),
            self.get_message().unwrap_or("No rule")
        )
    }
}
