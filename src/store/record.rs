//! Persisted record: the JSON shape stored in the session slot, and its
//! conversion to and from [`Session`].

use crate::models::{DraftBoard, Game, Mode, Roster, RouletteState, Selection, Session, Teams};
use serde::{Deserialize, Serialize};

/// Record schema version. Records with any other version are discarded on load.
pub const RECORD_VERSION: u32 = 1;

/// Whole-record snapshot of a session.
///
/// Only the chosen protocol's sub-record is written, and `teams`/`game` only in
/// the phases that own them, so encoding a decoded record gives the same bytes.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub version: u32,
    pub players: Roster,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roulette: Option<RouletteState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft: Option<DraftBoard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teams: Option<Teams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<Game>,
}

impl SessionRecord {
    fn base(players: &Roster) -> Self {
        Self {
            version: RECORD_VERSION,
            players: players.clone(),
            mode: None,
            roulette: None,
            draft: None,
            teams: None,
            game: None,
        }
    }

    fn with_selection(mut self, selection: &Selection) -> Self {
        self.mode = Some(selection.mode());
        match selection {
            Selection::Roulette(state) => self.roulette = Some(state.clone()),
            Selection::Draft(board) => self.draft = Some(board.clone()),
        }
        self
    }

    /// Snapshot of `session`; `None` for an empty session (nothing to store).
    pub fn from_session(session: &Session) -> Option<Self> {
        let record = match session {
            Session::Empty => return None,
            Session::NamesEntered { players } => Self::base(players),
            Session::ModeChosen { players, selection } => {
                Self::base(players).with_selection(selection)
            }
            Session::TeamsFormed {
                players,
                selection,
                teams,
            } => Self {
                teams: Some(teams.clone()),
                ..Self::base(players).with_selection(selection)
            },
            Session::GameStarted {
                players,
                selection,
                teams,
                game,
            } => Self {
                teams: Some(teams.clone()),
                game: Some(game.clone()),
                ..Self::base(players).with_selection(selection)
            },
        };
        Some(record)
    }

    /// Rebuild the session phase from which parts are present.
    ///
    /// A mode without its sub-record starts that protocol fresh; teams that are
    /// not five against five are dropped.
    pub fn into_session(self) -> Session {
        let players = self.players;
        let Some(mode) = self.mode else {
            return Session::NamesEntered { players };
        };
        let selection = match mode {
            Mode::Roulette => {
                Selection::Roulette(self.roulette.unwrap_or_else(|| RouletteState::new(&players)))
            }
            Mode::Draft => {
                Selection::Draft(self.draft.unwrap_or_else(|| DraftBoard::new(&players)))
            }
        };
        let Some(teams) = self.teams.filter(Teams::is_complete) else {
            return Session::ModeChosen { players, selection };
        };
        match self.game {
            Some(game) => Session::GameStarted {
                players,
                selection,
                teams,
                game,
            },
            None => Session::TeamsFormed {
                players,
                selection,
                teams,
            },
        }
    }
}
