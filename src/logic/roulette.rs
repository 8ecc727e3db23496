//! Roulette: draw five players at random; they form team 1, the rest team 2.

use crate::models::{Mode, RouletteState, Selection, Session, SessionError, Teams, TEAM_SIZE};
use crate::random::RandomSource;

/// Number of draws before the roulette stops.
pub const ROULETTE_DRAWS: usize = TEAM_SIZE;

/// Draw one remaining player uniformly at random.
///
/// The picked name is removed from `remaining` (order of the rest preserved)
/// and prepended to `history`. The fifth draw forms the teams: team 1 is the
/// history newest-first, team 2 everyone left.
pub fn draw<R: RandomSource + ?Sized>(
    session: &mut Session,
    rng: &mut R,
) -> Result<(), SessionError> {
    let Session::ModeChosen {
        players,
        selection: Selection::Roulette(state),
    } = session
    else {
        return Err(SessionError::InvalidState);
    };
    if state.remaining.is_empty() || state.history.len() >= ROULETTE_DRAWS {
        return Err(SessionError::DrawsExhausted);
    }

    let idx = rng.pick_index(state.remaining.len());
    let picked = state.remaining.remove(idx);
    state.history.insert(0, picked.clone());
    state.last_picked = Some(picked);

    if state.history.len() == ROULETTE_DRAWS {
        let teams = Teams::new(state.history.clone(), state.remaining.clone(), Mode::Roulette);
        let players = players.clone();
        let selection = Selection::Roulette(state.clone());
        *session = Session::TeamsFormed {
            players,
            selection,
            teams,
        };
    }
    Ok(())
}

/// Put everyone back in the pool and forget the draws (and any formed teams).
pub fn reset_roulette(session: &mut Session) -> Result<(), SessionError> {
    match session {
        Session::ModeChosen {
            players,
            selection: Selection::Roulette(_),
        }
        | Session::TeamsFormed {
            players,
            selection: Selection::Roulette(_),
            ..
        } => {
            let players = players.clone();
            let selection = Selection::Roulette(RouletteState::new(&players));
            *session = Session::ModeChosen { players, selection };
            Ok(())
        }
        _ => Err(SessionError::InvalidState),
    }
}
