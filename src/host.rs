//! Session host: load the record, apply one user action, write the full replacement back.

use crate::logic;
use crate::models::{Mode, Session, SessionError, SessionPhase, SetupError, TeamSlot};
use crate::random::RandomSource;
use crate::store::{KeyValueStore, SessionRecord, SessionStore};
use serde::Serialize;

/// One user action on the session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Start over with these ten raw names.
    EnterNames(Vec<String>),
    /// Forget the names entirely.
    ClearNames,
    ChooseMode(Mode),
    /// Back to mode selection, keeping the names.
    ResetSession,
    Draw,
    ResetRoulette,
    SetCaptain(TeamSlot, Option<String>),
    StartPicking,
    Pick(String),
    ResetDraft,
    ValidateTeams,
    EndGame,
}

/// Errors surfaced to the user. Transition errors never are; they leave the session as is.
#[derive(Debug)]
pub enum ActionError {
    Setup(SetupError),
    Storage(serde_json::Error),
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionError::Setup(e) => write!(f, "{}", e),
            ActionError::Storage(e) => write!(f, "Could not store session: {}", e),
        }
    }
}

impl std::error::Error for ActionError {}

impl From<SetupError> for ActionError {
    fn from(e: SetupError) -> Self {
        ActionError::Setup(e)
    }
}

impl From<serde_json::Error> for ActionError {
    fn from(e: serde_json::Error) -> Self {
        ActionError::Storage(e)
    }
}

/// What a client needs to render the current screen.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub phase: SessionPhase,
    pub record: Option<SessionRecord>,
    /// Team on the clock during the draft.
    pub current_turn: Option<TeamSlot>,
}

impl View {
    pub fn of(session: &Session) -> Self {
        Self {
            phase: session.phase(),
            record: SessionRecord::from_session(session),
            current_turn: session.draft().and_then(logic::current_turn),
        }
    }
}

/// Store plus random source. One host per request; each action is read, compute, write.
pub struct SessionHost<S, R> {
    store: SessionStore<S>,
    rng: R,
}

impl<S: KeyValueStore, R: RandomSource> SessionHost<S, R> {
    pub fn new(store: S, rng: R) -> Self {
        Self {
            store: SessionStore::new(store),
            rng,
        }
    }

    pub fn session(&self) -> Session {
        self.store.load()
    }

    pub fn view(&self) -> View {
        View::of(&self.store.load())
    }

    /// Apply `action` and return the resulting view.
    ///
    /// Setup validation errors are returned; an action that is not valid in the
    /// current phase is ignored and the stored record is left untouched.
    pub fn apply(&mut self, action: Action) -> Result<View, ActionError> {
        let mut session = self.store.load();
        match action {
            Action::EnterNames(names) => {
                session = logic::start_session(&names)?;
                log::info!("Session started with {} players", names.len());
            }
            Action::ClearNames => session = Session::Empty,
            action => {
                if let Err(e) = self.transition(&mut session, &action) {
                    log::debug!("Ignoring {:?} in phase {:?}: {}", action, session.phase(), e);
                    return Ok(View::of(&session));
                }
            }
        }
        self.store.save(&session)?;
        Ok(View::of(&session))
    }

    fn transition(&mut self, session: &mut Session, action: &Action) -> Result<(), SessionError> {
        match action {
            Action::ChooseMode(mode) => logic::choose_mode(session, *mode),
            Action::ResetSession => logic::reset_session(session),
            Action::Draw => logic::draw(session, &mut self.rng),
            Action::ResetRoulette => logic::reset_roulette(session),
            Action::SetCaptain(slot, name) => logic::set_captain(session, *slot, name.clone()),
            Action::StartPicking => logic::start_picking(session, &mut self.rng),
            Action::Pick(name) => logic::pick_player(session, name),
            Action::ResetDraft => logic::reset_draft(session),
            Action::ValidateTeams => {
                logic::validate_teams(session, &mut self.rng, chrono::Utc::now())
            }
            Action::EndGame => logic::end_game(session),
            Action::EnterNames(_) | Action::ClearNames => Ok(()),
        }
    }

    pub fn into_store(self) -> S {
        self.store.into_inner()
    }
}
