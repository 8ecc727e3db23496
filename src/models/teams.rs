//! Team slots, the formed teams, and the game started from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Players per team once a selection protocol has finished.
pub const TEAM_SIZE: usize = 5;

/// Which of the two teams. Stored as `1` / `2` on the wire.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TeamSlot {
    #[default]
    One,
    Two,
}

impl TeamSlot {
    pub fn other(self) -> Self {
        match self {
            TeamSlot::One => TeamSlot::Two,
            TeamSlot::Two => TeamSlot::One,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            TeamSlot::One => 1,
            TeamSlot::Two => 2,
        }
    }
}

impl From<TeamSlot> for u8 {
    fn from(slot: TeamSlot) -> Self {
        slot.number()
    }
}

impl TryFrom<u8> for TeamSlot {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(TeamSlot::One),
            2 => Ok(TeamSlot::Two),
            other => Err(format!("team slot must be 1 or 2, got {}", other)),
        }
    }
}

/// Selection protocol: random draw or captains' snake draft.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Roulette,
    Draft,
}

/// Terminal result of either protocol.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Teams {
    pub team1: Vec<String>,
    pub team2: Vec<String>,
    /// Set once the user confirms the teams.
    pub validated: bool,
    /// Which protocol produced the teams.
    pub source: Mode,
}

impl Teams {
    pub fn new(team1: Vec<String>, team2: Vec<String>, source: Mode) -> Self {
        Self {
            team1,
            team2,
            validated: false,
            source,
        }
    }

    /// Both teams are full.
    pub fn is_complete(&self) -> bool {
        self.team1.len() == TEAM_SIZE && self.team2.len() == TEAM_SIZE
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Wip,
    Running,
    Ended,
}

/// Game created when the teams are validated.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub status: GameStatus,
    /// Placeholder for a session code issued by a future backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
}

impl Game {
    pub fn running(code: String, started_at: DateTime<Utc>) -> Self {
        Self {
            status: GameStatus::Running,
            code: Some(code),
            started_at: Some(started_at),
        }
    }
}
