//! Session and its explicit phases.

use crate::models::roster::Roster;
use crate::models::teams::{Game, Mode, TeamSlot, Teams};
use serde::{Deserialize, Serialize};

/// Errors from team-formation transitions. The host swallows these: an
/// invalid action leaves the session untouched.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SessionError {
    /// Session is not in a phase that allows this action.
    InvalidState,
    /// Roulette already drew five players, or nobody is left.
    DrawsExhausted,
    /// Name is not one of the ten players.
    UnknownPlayer(String),
    /// Both captains must be chosen before the coin flip.
    CaptainsMissing,
    /// Player is a captain or was already drafted.
    PlayerNotAvailable(String),
    /// Teams were already validated.
    AlreadyValidated,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::InvalidState => write!(f, "Invalid state for this action"),
            SessionError::DrawsExhausted => write!(f, "No draw left in the roulette"),
            SessionError::UnknownPlayer(name) => write!(f, "Unknown player: {}", name),
            SessionError::CaptainsMissing => write!(f, "Both captains must be set"),
            SessionError::PlayerNotAvailable(name) => {
                write!(f, "Player is not available for picking: {}", name)
            }
            SessionError::AlreadyValidated => write!(f, "Teams are already validated"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Roulette draw state.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouletteState {
    /// Not yet drawn, in roster order.
    #[serde(default)]
    pub remaining: Vec<String>,
    /// Drawn names, most recent first.
    #[serde(default)]
    pub history: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_picked: Option<String>,
}

impl RouletteState {
    pub fn new(players: &Roster) -> Self {
        Self {
            remaining: players.to_vec(),
            history: Vec::new(),
            last_picked: None,
        }
    }
}

/// Draft phase. One-way: captains -> picking -> done (reset goes back to captains).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftPhase {
    #[default]
    Captains,
    Picking,
    Done,
}

/// Captain selection and snake draft board.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftBoard {
    pub phase: DraftPhase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captain1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captain2: Option<String>,
    /// Team picking on pattern-0 turns (decided by coin flip).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_picker: Option<TeamSlot>,
    #[serde(default)]
    pub available: Vec<String>,
    #[serde(default)]
    pub team1: Vec<String>,
    #[serde(default)]
    pub team2: Vec<String>,
    /// Picks made so far (0..=8).
    #[serde(default)]
    pub pick_index: usize,
}

impl DraftBoard {
    pub fn new(players: &Roster) -> Self {
        Self {
            available: players.to_vec(),
            ..Self::default()
        }
    }

    pub fn captain(&self, slot: TeamSlot) -> Option<&String> {
        match slot {
            TeamSlot::One => self.captain1.as_ref(),
            TeamSlot::Two => self.captain2.as_ref(),
        }
    }

    pub fn team_mut(&mut self, slot: TeamSlot) -> &mut Vec<String> {
        match slot {
            TeamSlot::One => &mut self.team1,
            TeamSlot::Two => &mut self.team2,
        }
    }
}

/// State of whichever protocol the session is running.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Selection {
    Roulette(RouletteState),
    Draft(DraftBoard),
}

impl Selection {
    /// Fresh protocol state for `mode`.
    pub fn new(mode: Mode, players: &Roster) -> Self {
        match mode {
            Mode::Roulette => Selection::Roulette(RouletteState::new(players)),
            Mode::Draft => Selection::Draft(DraftBoard::new(players)),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Selection::Roulette(_) => Mode::Roulette,
            Selection::Draft(_) => Mode::Draft,
        }
    }
}

/// Phase name exposed to the view layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    NoSession,
    NamesEntered,
    ModeChosen,
    TeamsFormed,
    GameStarted,
}

/// The tournament-in-progress. Each variant carries exactly the data its phase owns.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Session {
    #[default]
    Empty,
    NamesEntered {
        players: Roster,
    },
    ModeChosen {
        players: Roster,
        selection: Selection,
    },
    TeamsFormed {
        players: Roster,
        selection: Selection,
        teams: Teams,
    },
    GameStarted {
        players: Roster,
        selection: Selection,
        teams: Teams,
        game: Game,
    },
}

impl Session {
    pub fn phase(&self) -> SessionPhase {
        match self {
            Session::Empty => SessionPhase::NoSession,
            Session::NamesEntered { .. } => SessionPhase::NamesEntered,
            Session::ModeChosen { .. } => SessionPhase::ModeChosen,
            Session::TeamsFormed { .. } => SessionPhase::TeamsFormed,
            Session::GameStarted { .. } => SessionPhase::GameStarted,
        }
    }

    pub fn players(&self) -> Option<&Roster> {
        match self {
            Session::Empty => None,
            Session::NamesEntered { players }
            | Session::ModeChosen { players, .. }
            | Session::TeamsFormed { players, .. }
            | Session::GameStarted { players, .. } => Some(players),
        }
    }

    pub fn selection(&self) -> Option<&Selection> {
        match self {
            Session::Empty | Session::NamesEntered { .. } => None,
            Session::ModeChosen { selection, .. }
            | Session::TeamsFormed { selection, .. }
            | Session::GameStarted { selection, .. } => Some(selection),
        }
    }

    pub fn mode(&self) -> Option<Mode> {
        self.selection().map(Selection::mode)
    }

    pub fn teams(&self) -> Option<&Teams> {
        match self {
            Session::TeamsFormed { teams, .. } | Session::GameStarted { teams, .. } => Some(teams),
            _ => None,
        }
    }

    pub fn game(&self) -> Option<&Game> {
        match self {
            Session::GameStarted { game, .. } => Some(game),
            _ => None,
        }
    }

    pub fn roulette(&self) -> Option<&RouletteState> {
        match self.selection() {
            Some(Selection::Roulette(state)) => Some(state),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&DraftBoard> {
        match self.selection() {
            Some(Selection::Draft(board)) => Some(board),
            _ => None,
        }
    }
}
