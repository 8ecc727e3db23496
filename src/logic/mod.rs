//! Team-formation business logic: setup, mode choice, roulette, draft, validation.

mod draft;
mod mode;
mod roulette;
mod setup;
mod teams;

pub use draft::{
    current_turn, pick_player, reset_draft, set_captain, start_picking, turn_at, DRAFT_PICKS,
    SNAKE_PATTERN,
};
pub use mode::choose_mode;
pub use roulette::{draw, reset_roulette, ROULETTE_DRAWS};
pub use setup::{reset_session, start_session, validate_players};
pub use teams::{end_game, generate_game_code, validate_teams};
