//! Data structures for a team-picking session: roster, protocol state, teams, game.

mod roster;
mod session;
mod teams;

pub use roster::{dup_check_key, normalize_name, Roster, SetupError, ROSTER_SIZE};
pub use session::{
    DraftBoard, DraftPhase, RouletteState, Selection, Session, SessionError, SessionPhase,
};
pub use teams::{Game, GameStatus, Mode, TeamSlot, Teams, TEAM_SIZE};
