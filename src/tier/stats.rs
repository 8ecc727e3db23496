//! Derived player statistics: score stability and champion highlights.

use crate::tier::details::{ChampStat, PlayerDetails};
use crate::tier::directory::DirectoryPlayer;
use serde::Serialize;

/// Champions shown per highlight list.
pub const CHAMPION_LIST_LEN: usize = 5;

pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Population standard deviation; 0 with fewer than two samples.
pub fn stddev(xs: &[f64]) -> f64 {
    if xs.len() < 2 {
        return 0.0;
    }
    let m = mean(xs);
    let variance = xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / xs.len() as f64;
    variance.sqrt()
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stability {
    Stable,
    Medium,
    Unstable,
}

impl Stability {
    pub fn from_stddev(sd: f64) -> Self {
        if sd < 6.0 {
            Stability::Stable
        } else if sd <= 10.0 {
            Stability::Medium
        } else {
            Stability::Unstable
        }
    }
}

/// Minimum games on a champion to count for best performance: 20% of all games, within 3..=10.
pub fn min_games_for_best_perf(total_games: u32) -> u32 {
    ((total_games as f64 * 0.2).ceil() as u32).clamp(3, 10)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionHighlights {
    pub min_games_best_perf: u32,
    pub most_played: Vec<ChampStat>,
    pub best_perf: Vec<ChampStat>,
}

/// Most played (games, then average score) and best performing (average score,
/// then games, among champions played at least `min_games` times).
pub fn compute_champions(champ_stats: &[ChampStat], min_games: u32) -> ChampionHighlights {
    let mut most_played = champ_stats.to_vec();
    most_played.sort_by(|a, b| {
        b.games
            .cmp(&a.games)
            .then_with(|| b.avg_score.total_cmp(&a.avg_score))
    });
    most_played.truncate(CHAMPION_LIST_LEN);

    let mut best_perf: Vec<ChampStat> = champ_stats
        .iter()
        .filter(|c| c.games >= min_games)
        .cloned()
        .collect();
    best_perf.sort_by(|a, b| {
        b.avg_score
            .total_cmp(&a.avg_score)
            .then_with(|| b.games.cmp(&a.games))
    });
    best_perf.truncate(CHAMPION_LIST_LEN);

    ChampionHighlights {
        min_games_best_perf: min_games,
        most_played,
        best_perf,
    }
}

/// Everything the player page shows beyond the raw details.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub stddev: f64,
    pub stability: Stability,
    pub champions: ChampionHighlights,
}

pub fn summarize(player: &DirectoryPlayer, details: &PlayerDetails) -> PlayerSummary {
    let sd = stddev(&details.recent_scores);
    let min_games = details
        .min_games_rule
        .unwrap_or_else(|| min_games_for_best_perf(player.games));
    let mut champions = compute_champions(&details.champ_stats, min_games);
    if !details.best_performance.is_empty() {
        champions.best_perf = details
            .best_performance
            .iter()
            .take(CHAMPION_LIST_LEN)
            .cloned()
            .collect();
    }
    PlayerSummary {
        stddev: sd,
        stability: Stability::from_stddev(sd),
        champions,
    }
}
