//! Per-player details JSON. The mock files went through several schemas, so
//! every field is looked up under each of its historical names and normalized.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleStat {
    pub role: String,
    pub games: u32,
    pub avg_score: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampStat {
    /// Champion key (also used for the icon).
    pub name: String,
    pub games: u32,
    pub avg_score: f64,
}

/// Canonical details shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetails {
    /// 0..1
    pub winrate: Option<f64>,
    /// Oldest first.
    pub recent_scores: Vec<f64>,
    /// Most played role first.
    pub role_stats: Vec<RoleStat>,
    pub champ_stats: Vec<ChampStat>,
    /// Precomputed best-performance list, when the file has one.
    pub best_performance: Vec<ChampStat>,
    /// Precomputed minimum games for best performance, when the file has one.
    pub min_games_rule: Option<u32>,
}

/// First value among JSON pointers that `parse` accepts.
fn first<T>(raw: &Value, pointers: &[&str], parse: impl Fn(&Value) -> Option<T>) -> Option<T> {
    pointers
        .iter()
        .filter_map(|p| raw.pointer(p))
        .find_map(parse)
}

/// First non-empty list among JSON pointers; a field under an older name
/// may still be present with a shape that yields nothing.
fn first_list<T>(raw: &Value, pointers: &[&str], parse: fn(Option<&Value>) -> Vec<T>) -> Vec<T> {
    first(raw, pointers, |v| Some(parse(Some(v))).filter(|items| !items.is_empty()))
        .unwrap_or_default()
}

/// Number or numeric string.
fn number(v: &Value) -> Option<f64> {
    let n: Option<f64> = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

fn count(v: Option<&Value>) -> u32 {
    v.and_then(number)
        .filter(|n| *n >= 0.0)
        .map(|n| n as u32)
        .unwrap_or(0)
}

fn text(v: Option<&Value>) -> String {
    match v {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Array of numbers, comma-separated string, or `{ "values": [...] }`.
fn number_list(raw: Option<&Value>) -> Vec<f64> {
    match raw {
        Some(Value::Array(items)) => items.iter().filter_map(number).collect(),
        Some(Value::String(s)) => s
            .split(',')
            .filter_map(|part| part.trim().parse::<f64>().ok())
            .filter(|n| n.is_finite())
            .collect(),
        Some(Value::Object(obj)) => match obj.get("values") {
            Some(Value::Array(items)) => items.iter().filter_map(number).collect(),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn role_stats(raw: Option<&Value>) -> Vec<RoleStat> {
    let Some(Value::Array(items)) = raw else {
        return Vec::new();
    };
    let mut roles: Vec<RoleStat> = items
        .iter()
        .map(|r| RoleStat {
            role: text(r.get("role")),
            games: count(r.get("games")),
            avg_score: r.get("avgScore").and_then(number).unwrap_or(0.0),
        })
        .filter(|r| !r.role.is_empty())
        .collect();
    roles.sort_by(|a, b| b.games.cmp(&a.games));
    roles
}

/// Array of champion entries, or an object wrapping one under `champStats` or `mostPlayed`.
fn champ_stats(raw: Option<&Value>) -> Vec<ChampStat> {
    let items = match raw {
        Some(Value::Array(items)) => items,
        Some(Value::Object(obj)) => match obj.get("champStats").or_else(|| obj.get("mostPlayed")) {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    items
        .iter()
        .map(|c| ChampStat {
            name: text(c.get("name").or_else(|| c.get("key"))),
            games: count(c.get("games")),
            avg_score: c.get("avgScore").and_then(number).unwrap_or(0.0),
        })
        .filter(|c| !c.name.is_empty())
        .collect()
}

/// Normalize any known details shape into [`PlayerDetails`].
pub fn normalize_details(raw: &Value) -> PlayerDetails {
    let winrate = first(raw, &["/winrate", "/global/winrate", "/summary/winrate"], number);

    let recent_scores = first_list(
        raw,
        &[
            "/recentScores",
            "/scores/recent",
            "/lastScores",
            "/recent/scores",
            "/recentScoresObj",
        ],
        number_list,
    );

    let role_stats = first_list(
        raw,
        &["/roleStats", "/roles", "/byRole", "/rolePerformance"],
        role_stats,
    );

    let champ_stats = first_list(raw, &["/champStats", "/champions", "/byChampion"], champ_stats);

    let best_performance = champ_stats_items(raw.pointer("/champions/bestPerformance/items"));

    let min_games_rule = raw
        .pointer("/champions/bestPerformance/minGamesRule/clamp/min")
        .and_then(number)
        .filter(|n| *n > 0.0)
        .map(|n| n as u32);

    PlayerDetails {
        winrate,
        recent_scores,
        role_stats,
        champ_stats,
        best_performance,
        min_games_rule,
    }
}

fn champ_stats_items(raw: Option<&Value>) -> Vec<ChampStat> {
    match raw {
        Some(Value::Array(_)) => champ_stats(raw),
        _ => Vec::new(),
    }
}

/// Parse and normalize a details file.
pub fn parse_details(bytes: &[u8]) -> Result<PlayerDetails, serde_json::Error> {
    let raw: Value = serde_json::from_slice(bytes)?;
    Ok(normalize_details(&raw))
}
