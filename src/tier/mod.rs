//! Tier list over the static mock dataset: directory, per-player details, board and stats.

mod board;
mod details;
mod directory;
mod stats;

pub use board::{
    build_board, is_placement, TierBucket, TierEntry, COST_TIERS, PLACEMENT_DEFAULT_COST,
    PLACEMENT_MIN_GAMES,
};
pub use details::{normalize_details, parse_details, ChampStat, PlayerDetails, RoleStat};
pub use directory::{is_valid_player_id, parse_directory, player_id_from_name, DirectoryPlayer};
pub use stats::{
    compute_champions, mean, min_games_for_best_perf, stddev, summarize, ChampionHighlights,
    PlayerSummary, Stability,
};

use std::path::Path;

/// Directory file, relative to the mock dataset root.
pub const DIRECTORY_FILE: &str = "players.txt";
/// Details files live at `<root>/players/<id>.json`.
pub const DETAILS_DIR: &str = "players";

/// Failures reading the mock dataset.
#[derive(Debug)]
pub enum TierError {
    /// No player (or no details file) with this id.
    NotFound(String),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for TierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TierError::NotFound(id) => write!(f, "Player not found: {}", id),
            TierError::Io(e) => write!(f, "Could not read mock data: {}", e),
            TierError::Json(e) => write!(f, "Malformed player details: {}", e),
        }
    }
}

impl std::error::Error for TierError {}

impl From<std::io::Error> for TierError {
    fn from(e: std::io::Error) -> Self {
        TierError::Io(e)
    }
}

impl From<serde_json::Error> for TierError {
    fn from(e: serde_json::Error) -> Self {
        TierError::Json(e)
    }
}

/// Read and parse `<root>/players.txt`.
pub async fn load_directory(root: &Path) -> Result<Vec<DirectoryPlayer>, TierError> {
    let text = tokio::fs::read_to_string(root.join(DIRECTORY_FILE)).await?;
    Ok(parse_directory(&text))
}

/// Read and normalize `<root>/players/<id>.json`.
pub async fn load_details(root: &Path, id: &str) -> Result<PlayerDetails, TierError> {
    if !is_valid_player_id(id) {
        return Err(TierError::NotFound(id.to_string()));
    }
    let path = root.join(DETAILS_DIR).join(format!("{}.json", id));
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(TierError::NotFound(id.to_string()))
        }
        Err(e) => return Err(e.into()),
    };
    Ok(parse_details(&bytes)?)
}

/// A directory player with normalized details and derived stats.
#[derive(Clone, Debug, serde::Serialize)]
pub struct PlayerProfile {
    pub player: DirectoryPlayer,
    pub details: PlayerDetails,
    pub summary: PlayerSummary,
}

/// Look the player up in the directory, then load their details.
pub async fn load_profile(root: &Path, id: &str) -> Result<PlayerProfile, TierError> {
    let player = load_directory(root)
        .await?
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| TierError::NotFound(id.to_string()))?;
    let details = load_details(root, id).await?;
    let summary = summarize(&player, &details);
    Ok(PlayerProfile {
        player,
        details,
        summary,
    })
}
