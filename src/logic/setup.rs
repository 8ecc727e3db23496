//! Setup phase: name entry and whole-session resets.

use crate::models::{normalize_name, Roster, Session, SessionError, SetupError};

/// Normalize the raw inputs and check them: ten names, none empty, no duplicates
/// (case, spacing and accents ignored).
pub fn validate_players(inputs: &[String]) -> Result<Roster, SetupError> {
    let names: Vec<String> = inputs.iter().map(|n| normalize_name(n)).collect();
    Roster::new(names)
}

/// Start a fresh session from the entered names. Nothing is created on error.
pub fn start_session(inputs: &[String]) -> Result<Session, SetupError> {
    let players = validate_players(inputs)?;
    Ok(Session::NamesEntered { players })
}

/// Drop mode, protocol state, teams and game; keep the names.
pub fn reset_session(session: &mut Session) -> Result<(), SessionError> {
    let players = session.players().cloned().ok_or(SessionError::InvalidState)?;
    *session = Session::NamesEntered { players };
    Ok(())
}
