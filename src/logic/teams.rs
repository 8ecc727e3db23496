//! Teams confirmation and game lifecycle.

use crate::models::{Game, GameStatus, Session, SessionError};
use crate::random::RandomSource;
use chrono::{DateTime, Utc};

const CODE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const CODE_LEN: usize = 6;

/// Stand-in for a code issued by a tournament backend: 6 uppercase base-36 chars.
pub fn generate_game_code<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LEN)
        .map(|_| CODE_ALPHABET[rng.pick_index(CODE_ALPHABET.len())] as char)
        .collect()
}

/// Confirm the formed teams and start the game.
pub fn validate_teams<R: RandomSource + ?Sized>(
    session: &mut Session,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<(), SessionError> {
    let (players, selection, teams) = match session {
        Session::TeamsFormed {
            players,
            selection,
            teams,
        } => (players, selection, teams),
        Session::GameStarted { .. } => return Err(SessionError::AlreadyValidated),
        _ => return Err(SessionError::InvalidState),
    };
    if !teams.is_complete() {
        return Err(SessionError::InvalidState);
    }

    let mut teams = teams.clone();
    teams.validated = true;
    let game = Game::running(generate_game_code(rng), now);
    log::info!(
        "Teams validated ({:?}), game code {}",
        teams.source,
        game.code.as_deref().unwrap_or_default()
    );
    *session = Session::GameStarted {
        players: players.clone(),
        selection: selection.clone(),
        teams,
        game,
    };
    Ok(())
}

/// Mark a running game as ended.
pub fn end_game(session: &mut Session) -> Result<(), SessionError> {
    match session {
        Session::GameStarted { game, .. } if game.status == GameStatus::Running => {
            game.status = GameStatus::Ended;
            Ok(())
        }
        _ => Err(SessionError::InvalidState),
    }
}
