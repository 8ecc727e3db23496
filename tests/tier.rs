//! Integration tests for the tier list: directory parsing, board, details normalization.

use lol_team_picker::tier::{
    build_board, compute_champions, is_placement, load_profile, min_games_for_best_perf,
    normalize_details, parse_directory, player_id_from_name, stddev, summarize, ChampStat,
    Stability, TierError,
};
use serde_json::json;
use std::path::PathBuf;

const DIRECTORY: &str = "\
# id;name;cost;score;games;mainRole;roles;avatarUrl
ares;Ares;7;82.4;31;mid;mid, top;https://img/ares.png

  lyra ; Lyra ;7;90;20;support;;
;Nameless;5;50;10;top;;
ghost;;5;50;10;top;;
   # indented comment
rookie;Rookie;6;99;2;adc;adc;
nocost;NoCost;;70;12;jungle;jungle;
weird;Weird;abc;xyz;-3
odd;Odd;9;40;12;mid;;
";

#[test]
fn directory_skips_comments_blanks_and_nameless_lines() {
    let players = parse_directory(DIRECTORY);
    let ids: Vec<&str> = players.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["ares", "lyra", "rookie", "nocost", "weird", "odd"]);

    let ares = &players[0];
    assert_eq!(ares.cost, Some(7));
    assert_eq!(ares.score, 82.4);
    assert_eq!(ares.games, 31);
    assert_eq!(ares.main_role.as_deref(), Some("mid"));
    assert_eq!(ares.roles, Some(vec!["mid".to_string(), "top".to_string()]));
    assert_eq!(ares.avatar_url.as_deref(), Some("https://img/ares.png"));

    let lyra = &players[1];
    assert_eq!(lyra.name, "Lyra");
    assert_eq!(lyra.roles, None);
    assert_eq!(lyra.avatar_url, None);
}

#[test]
fn directory_defaults_bad_numbers() {
    let players = parse_directory(DIRECTORY);
    let weird = players.iter().find(|p| p.id == "weird").unwrap();
    assert_eq!(weird.cost, None);
    assert_eq!(weird.score, 0.0);
    assert_eq!(weird.games, 0);
    assert_eq!(weird.main_role, None);
}

#[test]
fn board_buckets_by_cost_with_placement_in_last_tier() {
    let board = build_board(&parse_directory(DIRECTORY));
    let costs: Vec<u32> = board.iter().map(|b| b.cost).collect();
    assert_eq!(costs, [7, 6, 5, 4, 3, 2, 1]);

    let top: Vec<&str> = board[0].players.iter().map(|e| e.player.id.as_str()).collect();
    assert_eq!(top, ["lyra", "ares"]);
    assert!(board[1].players.is_empty(), "rookie is still in placement");

    let last = &board[6];
    let placement: Vec<&str> = last.players.iter().map(|e| e.player.id.as_str()).collect();
    assert_eq!(placement, ["rookie", "nocost", "weird"]);
    assert!(last.players.iter().all(|e| e.placement));

    let listed: usize = board.iter().map(|b| b.players.len()).sum();
    assert_eq!(listed, 5, "cost 9 is outside the tiers");
}

#[test]
fn player_ids_are_slugs() {
    assert_eq!(player_id_from_name("  Noé Lefèvre "), "noe-lefevre");
    assert_eq!(player_id_from_name("xX_Faker_Xx!!"), "xx-faker-xx");
    assert_eq!(player_id_from_name("???"), "player");
}

#[test]
fn details_accept_the_preview_shape() {
    let details = normalize_details(&json!({
        "winrate": 0.55,
        "recentScores": [70, "72", "bad", 77],
        "roleStats": [
            { "role": "adc", "games": 5, "avgScore": 70.8 },
            { "role": "support", "games": 17, "avgScore": 75.0 },
            { "games": 3 }
        ],
        "champStats": [
            { "name": "Thresh", "games": 9, "avgScore": 76.1 },
            { "key": "Nami", "games": 6, "avgScore": 73.4 },
            { "games": 2 }
        ]
    }));
    assert_eq!(details.winrate, Some(0.55));
    assert_eq!(details.recent_scores, [70.0, 72.0, 77.0]);
    let roles: Vec<&str> = details.role_stats.iter().map(|r| r.role.as_str()).collect();
    assert_eq!(roles, ["support", "adc"]);
    let champs: Vec<&str> = details.champ_stats.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(champs, ["Thresh", "Nami"]);
    assert!(details.best_performance.is_empty());
    assert_eq!(details.min_games_rule, None);
}

#[test]
fn details_accept_the_nested_shape() {
    let details = normalize_details(&json!({
        "summary": { "winrate": 0.61 },
        "recentScoresObj": { "values": [78, 85] },
        "roles": [{ "role": "mid", "games": 22, "avgScore": 84.9 }],
        "champions": {
            "mostPlayed": [{ "key": "Ahri", "games": 11, "avgScore": 86.2 }],
            "bestPerformance": {
                "minGamesRule": { "clamp": { "min": 4, "max": 10 } },
                "items": [{ "key": "Ahri", "games": 11, "avgScore": 86.2 }]
            }
        }
    }));
    assert_eq!(details.winrate, Some(0.61));
    assert_eq!(details.recent_scores, [78.0, 85.0]);
    assert_eq!(details.role_stats[0].role, "mid");
    assert_eq!(details.champ_stats[0].name, "Ahri");
    assert_eq!(details.best_performance[0].name, "Ahri");
    assert_eq!(details.min_games_rule, Some(4));
}

#[test]
fn details_accept_string_score_lists() {
    let details = normalize_details(&json!({ "scores": { "recent": "60, 65 ,x, 70" } }));
    assert_eq!(details.recent_scores, [60.0, 65.0, 70.0]);
    assert_eq!(details.winrate, None);
}

#[test]
fn details_accept_the_global_and_by_shape() {
    let details = normalize_details(&json!({
        "global": { "winrate": 0.4 },
        "lastScores": [61, 63],
        "byRole": [{ "role": "top", "games": 8, "avgScore": 66.0 }],
        "byChampion": [{ "name": "Garen", "games": 8, "avgScore": 66.0 }]
    }));
    assert_eq!(details.winrate, Some(0.4));
    assert_eq!(details.recent_scores, [61.0, 63.0]);
    assert_eq!(details.role_stats[0].role, "top");
    assert_eq!(details.champ_stats[0].name, "Garen");
}

#[test]
fn details_accept_the_recent_and_performance_shape() {
    let details = normalize_details(&json!({
        "recent": { "scores": "3, 4" },
        "rolePerformance": [
            { "role": "jungle", "games": 2, "avgScore": 50.0 },
            { "role": "mid", "games": 6, "avgScore": 58.5 }
        ],
        "champions": [{ "key": "Zed", "games": 6, "avgScore": 58.5 }]
    }));
    assert_eq!(details.winrate, None);
    assert_eq!(details.recent_scores, [3.0, 4.0]);
    let roles: Vec<&str> = details.role_stats.iter().map(|r| r.role.as_str()).collect();
    assert_eq!(roles, ["mid", "jungle"]);
    assert_eq!(details.champ_stats[0].name, "Zed");
    assert!(details.best_performance.is_empty());
}

#[test]
fn details_accept_wrapped_recent_scores() {
    let details = normalize_details(&json!({ "recentScores": { "values": [80, "82"] } }));
    assert_eq!(details.recent_scores, [80.0, 82.0]);
}

#[test]
fn details_skip_unusable_fields_for_later_names() {
    let details = normalize_details(&json!({
        "winrate": "n/a",
        "summary": { "winrate": 0.5 },
        "recentScores": { "order": "oldest_first" },
        "recentScoresObj": { "values": [1, 2] },
        "roles": ["mid"],
        "byRole": [{ "role": "mid", "games": 4, "avgScore": 70.0 }],
        "champions": { "bestPerformance": { "items": [] } },
        "byChampion": [{ "name": "Orianna", "games": 4, "avgScore": 70.0 }]
    }));
    assert_eq!(details.winrate, Some(0.5));
    assert_eq!(details.recent_scores, [1.0, 2.0]);
    assert_eq!(details.role_stats[0].role, "mid");
    assert_eq!(details.champ_stats[0].name, "Orianna");
}

#[test]
fn zero_cost_player_is_placement() {
    let players = parse_directory("free;Free;0;88;40;mid;;\npaid;Paid;1;70;40;top;;");
    assert!(is_placement(&players[0]));
    assert!(!is_placement(&players[1]));

    let board = build_board(&players);
    let last = &board[6];
    assert_eq!(last.cost, 1);
    let ids: Vec<(&str, bool)> = last
        .players
        .iter()
        .map(|e| (e.player.id.as_str(), e.placement))
        .collect();
    assert_eq!(ids, [("free", true), ("paid", false)]);
}

fn champ(name: &str, games: u32, avg_score: f64) -> ChampStat {
    ChampStat {
        name: name.to_string(),
        games,
        avg_score,
    }
}

#[test]
fn champion_highlights() {
    let stats = vec![
        champ("A", 10, 70.0),
        champ("B", 10, 80.0),
        champ("C", 2, 99.0),
        champ("D", 5, 85.0),
        champ("E", 4, 60.0),
        champ("F", 3, 90.0),
    ];
    let highlights = compute_champions(&stats, 4);
    let most: Vec<&str> = highlights.most_played.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(most, ["B", "A", "D", "E", "F"]);
    let best: Vec<&str> = highlights.best_perf.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(best, ["D", "B", "A", "E"]);
}

#[test]
fn stability_and_min_games() {
    assert_eq!(stddev(&[5.0]), 0.0);
    assert_eq!(stddev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 2.0);
    assert_eq!(Stability::from_stddev(5.9), Stability::Stable);
    assert_eq!(Stability::from_stddev(10.0), Stability::Medium);
    assert_eq!(Stability::from_stddev(10.1), Stability::Unstable);

    assert_eq!(min_games_for_best_perf(0), 3);
    assert_eq!(min_games_for_best_perf(31), 7);
    assert_eq!(min_games_for_best_perf(200), 10);
}

#[test]
fn summary_prefers_precomputed_best_performance() {
    let player = parse_directory("ares;Ares;7;82.4;31;mid;;").remove(0);
    let details = normalize_details(&json!({
        "champStats": [
            { "name": "Ahri", "games": 11, "avgScore": 86.2 },
            { "name": "Gwen", "games": 8, "avgScore": 95.0 }
        ],
        "champions": null,
    }));
    let summary = summarize(&player, &details);
    assert_eq!(summary.champions.min_games_best_perf, 7);
    assert_eq!(summary.champions.best_perf[0].name, "Gwen");
    assert_eq!(summary.stability, Stability::Stable);
}

fn mock_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static/mock")
}

#[tokio::test]
async fn bundled_mock_profile_loads() {
    let profile = load_profile(&mock_dir(), "ares").await.unwrap();
    assert_eq!(profile.player.name, "Ares");
    assert_eq!(profile.details.winrate, Some(0.61));
    assert_eq!(profile.summary.champions.min_games_best_perf, 3);
    assert_eq!(profile.summary.champions.best_perf.len(), 3);
}

#[tokio::test]
async fn unknown_or_unsafe_ids_are_not_found() {
    assert!(matches!(
        load_profile(&mock_dir(), "nobody").await,
        Err(TierError::NotFound(_))
    ));
    assert!(matches!(
        load_profile(&mock_dir(), "../Cargo").await,
        Err(TierError::NotFound(_))
    ));
}
