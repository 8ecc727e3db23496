//! Draft: two captains, a coin flip, then an 8-pick snake draft (4 picks per team).

use crate::models::{
    DraftBoard, DraftPhase, Mode, Roster, Selection, Session, SessionError, TeamSlot, Teams,
};
use crate::random::RandomSource;

/// Snake order over 8 picks: 0 = first picker, 1 = the other team.
pub const SNAKE_PATTERN: [u8; 8] = [0, 1, 1, 0, 0, 1, 1, 0];

/// Total picks in a draft (captains excluded).
pub const DRAFT_PICKS: usize = SNAKE_PATTERN.len();

/// Team picking at `pick_index` when `first_picker` won the coin flip.
pub fn turn_at(first_picker: TeamSlot, pick_index: usize) -> TeamSlot {
    match SNAKE_PATTERN.get(pick_index).copied().unwrap_or(0) {
        0 => first_picker,
        _ => first_picker.other(),
    }
}

/// Team whose turn it is, if picking is under way.
pub fn current_turn(board: &DraftBoard) -> Option<TeamSlot> {
    match (board.phase, board.first_picker) {
        (DraftPhase::Picking, Some(first)) if board.pick_index < DRAFT_PICKS => {
            Some(turn_at(first, board.pick_index))
        }
        _ => None,
    }
}

/// Draft board of a session still forming teams (teams formed by a draft may be redone).
fn draft_parts(session: &mut Session) -> Result<(&Roster, &mut DraftBoard), SessionError> {
    match session {
        Session::ModeChosen {
            players,
            selection: Selection::Draft(board),
        }
        | Session::TeamsFormed {
            players,
            selection: Selection::Draft(board),
            ..
        } => Ok((&*players, board)),
        _ => Err(SessionError::InvalidState),
    }
}

/// Set or clear the captain of `slot`.
///
/// Captains stay distinct: naming the other team's captain clears that other
/// captain. Any captain change throws away the coin flip, all picks and any
/// formed teams, and returns the board to captain selection.
pub fn set_captain(
    session: &mut Session,
    slot: TeamSlot,
    name: Option<String>,
) -> Result<(), SessionError> {
    let (players, board) = draft_parts(session)?;
    if let Some(name) = &name {
        if !players.contains(name) {
            return Err(SessionError::UnknownPlayer(name.clone()));
        }
    }
    let players = players.clone();

    let (mut captain1, mut captain2) = (board.captain1.take(), board.captain2.take());
    match slot {
        TeamSlot::One => {
            if name.is_some() && name == captain2 {
                captain2 = None;
            }
            captain1 = name;
        }
        TeamSlot::Two => {
            if name.is_some() && name == captain1 {
                captain1 = None;
            }
            captain2 = name;
        }
    }

    let board = DraftBoard {
        captain1,
        captain2,
        ..DraftBoard::new(&players)
    };
    *session = Session::ModeChosen {
        players,
        selection: Selection::Draft(board),
    };
    Ok(())
}

/// Flip the coin and open the picking phase. Captains seed their own teams.
pub fn start_picking<R: RandomSource + ?Sized>(
    session: &mut Session,
    rng: &mut R,
) -> Result<(), SessionError> {
    let Session::ModeChosen {
        players,
        selection: Selection::Draft(board),
    } = session
    else {
        return Err(SessionError::InvalidState);
    };
    if board.phase != DraftPhase::Captains {
        return Err(SessionError::InvalidState);
    }
    let (Some(captain1), Some(captain2)) = (board.captain1.clone(), board.captain2.clone()) else {
        return Err(SessionError::CaptainsMissing);
    };

    let first_picker = rng.flip_coin();
    log::debug!(
        "Coin flip: team {} ({}) picks first",
        first_picker.number(),
        board.captain(first_picker).map(String::as_str).unwrap_or_default()
    );

    board.available = players
        .names()
        .iter()
        .filter(|p| **p != captain1 && **p != captain2)
        .cloned()
        .collect();
    board.team1 = vec![captain1];
    board.team2 = vec![captain2];
    board.first_picker = Some(first_picker);
    board.pick_index = 0;
    board.phase = DraftPhase::Picking;
    Ok(())
}

/// Draft `name` onto the team whose turn it is. The eighth pick closes the
/// draft and forms the teams.
pub fn pick_player(session: &mut Session, name: &str) -> Result<(), SessionError> {
    let Session::ModeChosen {
        players,
        selection: Selection::Draft(board),
    } = session
    else {
        return Err(SessionError::InvalidState);
    };
    let turn = current_turn(board).ok_or(SessionError::InvalidState)?;
    let idx = board
        .available
        .iter()
        .position(|p| p == name)
        .ok_or_else(|| SessionError::PlayerNotAvailable(name.to_string()))?;

    let picked = board.available.remove(idx);
    board.team_mut(turn).push(picked);
    board.pick_index += 1;

    if board.pick_index >= DRAFT_PICKS {
        board.phase = DraftPhase::Done;
        let teams = Teams::new(board.team1.clone(), board.team2.clone(), Mode::Draft);
        let players = players.clone();
        let selection = Selection::Draft(board.clone());
        *session = Session::TeamsFormed {
            players,
            selection,
            teams,
        };
    }
    Ok(())
}

/// Back to captain selection with nothing chosen; formed teams are dropped.
pub fn reset_draft(session: &mut Session) -> Result<(), SessionError> {
    let (players, _) = draft_parts(session)?;
    let players = players.clone();
    let selection = Selection::Draft(DraftBoard::new(&players));
    *session = Session::ModeChosen { players, selection };
    Ok(())
}
