//! Integration tests for record persistence.

use chrono::{TimeZone, Utc};
use lol_team_picker::store::{KeyValueStore, MemoryStore, SessionStore, STORAGE_KEY};
use lol_team_picker::{
    choose_mode, draw, pick_player, set_captain, start_picking, start_session, validate_teams,
    Mode, ScriptedRandom, Session, SessionPhase, TeamSlot,
};

fn names() -> Vec<String> {
    ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]
        .iter()
        .map(|n| n.to_string())
        .collect()
}

/// One session per phase, each reached through the real transitions.
fn sessions() -> Vec<Session> {
    let names_entered = start_session(&names()).unwrap();

    let mut roulette = names_entered.clone();
    choose_mode(&mut roulette, Mode::Roulette).unwrap();
    let mut rng = ScriptedRandom::new([3, 1]);
    draw(&mut roulette, &mut rng).unwrap();
    draw(&mut roulette, &mut rng).unwrap();

    let mut drafting = names_entered.clone();
    choose_mode(&mut drafting, Mode::Draft).unwrap();
    set_captain(&mut drafting, TeamSlot::One, Some("E".to_string())).unwrap();
    set_captain(&mut drafting, TeamSlot::Two, Some("F".to_string())).unwrap();
    let mut rng = ScriptedRandom::default().with_coins([TeamSlot::Two]);
    start_picking(&mut drafting, &mut rng).unwrap();
    pick_player(&mut drafting, "A").unwrap();

    let mut formed = names_entered.clone();
    choose_mode(&mut formed, Mode::Roulette).unwrap();
    let mut rng = ScriptedRandom::new([0, 0, 0, 0, 0]);
    for _ in 0..5 {
        draw(&mut formed, &mut rng).unwrap();
    }

    let mut started = formed.clone();
    let now = Utc.with_ymd_and_hms(2026, 10, 18, 20, 30, 0).unwrap();
    validate_teams(&mut started, &mut ScriptedRandom::new([10, 11, 12, 1, 2, 3]), now).unwrap();

    vec![names_entered, roulette, drafting, formed, started]
}

#[test]
fn every_phase_survives_save_and_load() {
    for session in sessions() {
        let mut store = SessionStore::new(MemoryStore::new());
        store.save(&session).unwrap();
        assert_eq!(store.load(), session, "phase {:?}", session.phase());
    }
}

#[test]
fn reload_and_resave_is_byte_identical() {
    for session in sessions() {
        let mut store = SessionStore::new(MemoryStore::new());
        store.save(&session).unwrap();
        let first = store.into_inner().get(STORAGE_KEY).unwrap();

        let mut kv = MemoryStore::new();
        kv.set(STORAGE_KEY, first.clone());
        let mut store = SessionStore::new(kv);
        let loaded = store.load();
        store.save(&loaded).unwrap();
        let second = store.into_inner().get(STORAGE_KEY).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn record_uses_the_documented_shape() {
    let started = sessions().pop().unwrap();
    let mut store = SessionStore::new(MemoryStore::new());
    store.save(&started).unwrap();
    let bytes = store.into_inner().get(STORAGE_KEY).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["version"], 1);
    assert_eq!(json["mode"], "roulette");
    assert_eq!(json["roulette"]["lastPicked"], "E");
    assert_eq!(json["teams"]["team1"], serde_json::json!(["E", "D", "C", "B", "A"]));
    assert_eq!(json["teams"]["source"], "roulette");
    assert_eq!(json["teams"]["validated"], true);
    assert_eq!(json["game"]["status"], "running");
    assert_eq!(json["game"]["code"], "ABC123");
    assert_eq!(json["game"]["startedAt"], "2026-10-18T20:30:00Z");
    assert!(json.get("draft").is_none());
}

#[test]
fn draft_record_stores_first_picker_as_number() {
    let drafting = sessions().remove(2);
    let mut store = SessionStore::new(MemoryStore::new());
    store.save(&drafting).unwrap();
    let bytes = store.into_inner().get(STORAGE_KEY).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["draft"]["firstPicker"], 2);
    assert_eq!(json["draft"]["phase"], "picking");
    assert_eq!(json["draft"]["pickIndex"], 1);
    assert_eq!(json["draft"]["team2"], serde_json::json!(["F", "A"]));
}

#[test]
fn missing_or_broken_records_load_as_empty() {
    let store = SessionStore::new(MemoryStore::new());
    assert_eq!(store.load(), Session::Empty);

    let mut kv = MemoryStore::new();
    kv.set(STORAGE_KEY, b"{not json".to_vec());
    assert_eq!(SessionStore::new(kv).load(), Session::Empty);
}

#[test]
fn version_mismatch_loads_as_empty() {
    let record = serde_json::json!({
        "version": 2,
        "players": names(),
    });
    let mut kv = MemoryStore::new();
    kv.set(STORAGE_KEY, serde_json::to_vec(&record).unwrap());
    assert_eq!(SessionStore::new(kv).load(), Session::Empty);
}

#[test]
fn record_with_bad_player_list_loads_as_empty() {
    let record = serde_json::json!({
        "version": 1,
        "players": ["A", "a", "C", "D", "E", "F", "G", "H", "I", "J"],
    });
    let mut kv = MemoryStore::new();
    kv.set(STORAGE_KEY, serde_json::to_vec(&record).unwrap());
    assert_eq!(SessionStore::new(kv).load(), Session::Empty);
}

#[test]
fn mode_without_sub_record_starts_that_protocol() {
    let record = serde_json::json!({
        "version": 1,
        "players": names(),
        "mode": "draft",
    });
    let mut kv = MemoryStore::new();
    kv.set(STORAGE_KEY, serde_json::to_vec(&record).unwrap());
    let session = SessionStore::new(kv).load();
    assert_eq!(session.phase(), SessionPhase::ModeChosen);
    assert_eq!(session.draft().unwrap().available, names());
}

#[test]
fn saving_empty_clears_and_boot_wipes_leftovers() {
    let mut store = SessionStore::new(MemoryStore::new());
    store.save(&start_session(&names()).unwrap()).unwrap();
    store.save(&Session::Empty).unwrap();
    assert!(store.into_inner().is_empty());

    let mut kv = MemoryStore::new();
    kv.set(STORAGE_KEY, b"{}".to_vec());
    let store = SessionStore::boot(kv);
    assert_eq!(store.load(), Session::Empty);
    assert!(store.into_inner().is_empty());
}
