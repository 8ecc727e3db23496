//! Mock player directory: one player per line, `;`-separated.
//!
//! `id;name;cost;score;games;mainRole;roles;avatarUrl` with `roles` comma-separated.
//! Blank lines and `#` comments are ignored; lines without id or name are skipped.

use serde::{Deserialize, Serialize};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryPlayer {
    /// URL-safe slug; also the details file name.
    pub id: String,
    pub name: String,
    /// Tier cost; `None` when missing or not a number.
    pub cost: Option<u32>,
    pub score: f64,
    pub games: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

fn non_empty(field: Option<&str>) -> Option<String> {
    field.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

fn parse_number<T: std::str::FromStr>(field: Option<&str>) -> Option<T> {
    field.and_then(|s| s.trim().parse().ok())
}

fn parse_score(field: Option<&str>) -> f64 {
    parse_number::<f64>(field)
        .filter(|s| s.is_finite())
        .unwrap_or(0.0)
}

fn parse_line(record: &csv::StringRecord) -> Option<DirectoryPlayer> {
    let id = non_empty(record.get(0))?;
    let name = non_empty(record.get(1))?;
    let roles = non_empty(record.get(6)).map(|roles| {
        roles
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect()
    });
    Some(DirectoryPlayer {
        id,
        name,
        cost: parse_number(record.get(2)),
        score: parse_score(record.get(3)),
        games: parse_number(record.get(4)).unwrap_or(0),
        main_role: non_empty(record.get(5)),
        roles,
        avatar_url: non_empty(record.get(7)),
    })
}

/// Parse the directory text. Bad lines are skipped, bad numbers defaulted.
pub fn parse_directory(text: &str) -> Vec<DirectoryPlayer> {
    let body = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(body.as_bytes());

    let mut players = Vec::new();
    for (line, result) in reader.records().enumerate() {
        match result {
            Ok(record) => match parse_line(&record) {
                Some(player) => players.push(player),
                None => log::debug!("Skipping directory line {}: missing id or name", line + 1),
            },
            Err(e) => log::warn!("Skipping unreadable directory line {}: {}", line + 1, e),
        }
    }
    players
}

/// URL and file-name safe slug for a player name: lowercase, accents stripped,
/// anything outside `[a-z0-9]` collapsed to `-`. Falls back to `"player"`.
pub fn player_id_from_name(name: &str) -> String {
    let base: String = name
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    let mut slug = String::with_capacity(base.len());
    for c in base.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "player".to_string()
    } else {
        slug.to_string()
    }
}

/// True when `id` could have come from [`player_id_from_name`] (safe as a file name).
pub fn is_valid_player_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
