//! LoL team picker: library with session models, team-formation logic, persistence and tier list.

pub mod host;
pub mod logic;
pub mod models;
pub mod random;
pub mod store;
pub mod tier;

pub use host::{Action, ActionError, SessionHost, View};
pub use logic::{
    choose_mode, current_turn, draw, end_game, pick_player, reset_draft, reset_roulette,
    reset_session, set_captain, start_picking, start_session, turn_at, validate_players,
    validate_teams,
};
pub use models::{
    DraftBoard, DraftPhase, Game, GameStatus, Mode, Roster, RouletteState, Selection, Session,
    SessionError, SessionPhase, SetupError, TeamSlot, Teams,
};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use store::{KeyValueStore, MemoryStore, SessionRecord, SessionStore};
