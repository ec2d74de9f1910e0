use itertools::iproduct;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::affiliation::Team;

#[derive(
    Debug, PartialEq, Eq, Hash, Copy, Clone, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Role {
    Spymaster,
    Operative,
}

/// A seat at the table. Turn order is tracked by the game, not by players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub role: Role,
    pub team: Team,
}

impl Player {
    pub fn new(name: String, role: Role, team: Team) -> Self {
        Player { name, role, team }
    }

    /// One spymaster and one operative for each team.
    pub fn roster() -> Vec<Player> {
        iproduct!(Team::iter(), Role::iter())
            .map(|(team, role)| Player::new(format!("{team} {role}"), role, team))
            .collect()
    }
}
