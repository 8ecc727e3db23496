//! Mode selection: roulette or draft.

use crate::models::{Mode, Selection, Session, SessionError};

/// Pick the selection protocol. Re-choosing the active mode keeps its progress;
/// switching starts the other protocol from scratch. Not allowed once teams exist.
pub fn choose_mode(session: &mut Session, mode: Mode) -> Result<(), SessionError> {
    match session {
        Session::ModeChosen { selection, .. } if selection.mode() == mode => Ok(()),
        Session::NamesEntered { players } | Session::ModeChosen { players, .. } => {
            let players = players.clone();
            let selection = Selection::new(mode, &players);
            *session = Session::ModeChosen { players, selection };
            Ok(())
        }
        _ => Err(SessionError::InvalidState),
    }
}
