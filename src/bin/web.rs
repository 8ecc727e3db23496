//! Single binary web server: JSON API over the team picker, mock tier data under /mock.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! MOCK_DIR points at the mock dataset (default static/mock).
//! COOKIE_SECURE=1 marks the session cookie Secure (needs HTTPS).
//!
//! Each browser's session record lives in its own signed cookie. The signing
//! key is generated at startup, so records from a previous run are unreadable
//! and every browser starts over after a restart.

use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session as BrowserSession, SessionMiddleware};
use actix_web::{
    cookie::Key,
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use lol_team_picker::tier::{self, TierError};
use lol_team_picker::{
    Action, ActionError, KeyValueStore, Mode, SessionHost, TeamSlot, ThreadRandom, View,
};
use serde::Deserialize;
use std::path::PathBuf;

/// Session slot backed by the browser's signed session cookie.
struct CookieStore(BrowserSession);

impl KeyValueStore for CookieStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        match self.0.get::<String>(key) {
            Ok(value) => value.map(String::into_bytes),
            Err(e) => {
                log::debug!("Unreadable session cookie: {}", e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: Vec<u8>) {
        let value = String::from_utf8_lossy(&value).into_owned();
        if let Err(e) = self.0.insert(key, value) {
            log::warn!("Could not write session cookie: {}", e);
        }
    }

    fn delete(&mut self, key: &str) {
        self.0.remove(key);
    }
}

type Host = SessionHost<CookieStore, ThreadRandom>;

fn session_host(session: BrowserSession) -> Host {
    SessionHost::new(CookieStore(session), ThreadRandom)
}

/// Location of the mock tier dataset.
struct MockDir(PathBuf);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct EnterNamesBody {
    names: Vec<String>,
}

#[derive(Deserialize)]
struct SetModeBody {
    mode: Mode,
}

#[derive(Deserialize)]
struct SetCaptainBody {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize)]
struct PickBody {
    name: String,
}

/// Path segment: team slot (e.g. /api/session/draft/captains/{slot})
#[derive(Deserialize)]
struct CaptainPath {
    slot: u8,
}

/// Path segment: tier player id (e.g. /api/tier/players/{id})
#[derive(Deserialize)]
struct TierPlayerPath {
    id: String,
}

fn error_json(message: impl std::fmt::Display) -> serde_json::Value {
    serde_json::json!({ "error": message.to_string() })
}

fn respond(result: Result<View, ActionError>) -> HttpResponse {
    match result {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(e @ ActionError::Setup(_)) => HttpResponse::BadRequest().json(error_json(e)),
        Err(e) => {
            log::error!("{}", e);
            HttpResponse::InternalServerError().json(error_json(e))
        }
    }
}

fn tier_error(e: TierError) -> HttpResponse {
    match e {
        TierError::NotFound(_) => HttpResponse::NotFound().json(error_json(e)),
        e => {
            log::warn!("Mock data unavailable: {}", e);
            HttpResponse::BadGateway().json(error_json(e))
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "lol-team-picker",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Current session view (phase decides which screen the client shows).
#[get("/api/session")]
async fn api_get_session(session: BrowserSession) -> HttpResponse {
    HttpResponse::Ok().json(session_host(session).view())
}

/// Enter the ten names; starts a fresh session (400 on empty or duplicate names).
#[post("/api/session/players")]
async fn api_enter_names(session: BrowserSession, body: Json<EnterNamesBody>) -> HttpResponse {
    respond(session_host(session).apply(Action::EnterNames(body.into_inner().names)))
}

/// Forget everything, names included.
#[delete("/api/session")]
async fn api_clear_session(session: BrowserSession) -> HttpResponse {
    respond(session_host(session).apply(Action::ClearNames))
}

/// Back to mode selection, keeping the names.
#[post("/api/session/reset")]
async fn api_reset_session(session: BrowserSession) -> HttpResponse {
    respond(session_host(session).apply(Action::ResetSession))
}

#[put("/api/session/mode")]
async fn api_choose_mode(session: BrowserSession, body: Json<SetModeBody>) -> HttpResponse {
    respond(session_host(session).apply(Action::ChooseMode(body.mode)))
}

#[post("/api/session/roulette/draw")]
async fn api_roulette_draw(session: BrowserSession) -> HttpResponse {
    respond(session_host(session).apply(Action::Draw))
}

#[post("/api/session/roulette/reset")]
async fn api_roulette_reset(session: BrowserSession) -> HttpResponse {
    respond(session_host(session).apply(Action::ResetRoulette))
}

/// Set (or clear with null / "") the captain of team 1 or 2.
#[put("/api/session/draft/captains/{slot}")]
async fn api_set_captain(
    session: BrowserSession,
    path: Path<CaptainPath>,
    body: Json<SetCaptainBody>,
) -> HttpResponse {
    let slot = match TeamSlot::try_from(path.slot) {
        Ok(slot) => slot,
        Err(e) => return HttpResponse::BadRequest().json(error_json(e)),
    };
    let name = body.into_inner().name.filter(|n| !n.is_empty());
    respond(session_host(session).apply(Action::SetCaptain(slot, name)))
}

/// Coin flip, then picking starts.
#[post("/api/session/draft/start")]
async fn api_draft_start(session: BrowserSession) -> HttpResponse {
    respond(session_host(session).apply(Action::StartPicking))
}

#[post("/api/session/draft/pick")]
async fn api_draft_pick(session: BrowserSession, body: Json<PickBody>) -> HttpResponse {
    respond(session_host(session).apply(Action::Pick(body.into_inner().name)))
}

#[post("/api/session/draft/reset")]
async fn api_draft_reset(session: BrowserSession) -> HttpResponse {
    respond(session_host(session).apply(Action::ResetDraft))
}

/// Confirm the teams; creates the game and its code.
#[post("/api/session/teams/validate")]
async fn api_validate_teams(session: BrowserSession) -> HttpResponse {
    respond(session_host(session).apply(Action::ValidateTeams))
}

#[post("/api/session/game/end")]
async fn api_end_game(session: BrowserSession) -> HttpResponse {
    respond(session_host(session).apply(Action::EndGame))
}

/// Tier board: players bucketed by cost.
#[get("/api/tier")]
async fn api_tier_board(mock: Data<MockDir>) -> HttpResponse {
    match tier::load_directory(&mock.0).await {
        Ok(players) => HttpResponse::Ok().json(tier::build_board(&players)),
        Err(e) => tier_error(e),
    }
}

/// One player's profile: directory entry, normalized details, derived stats.
#[get("/api/tier/players/{id}")]
async fn api_tier_player(mock: Data<MockDir>, path: Path<TierPlayerPath>) -> HttpResponse {
    match tier::load_profile(&mock.0, &path.id).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => tier_error(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_mock_dir() -> PathBuf {
    PathBuf::from("static/mock")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let mock_dir = std::env::var("MOCK_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_mock_dir());
    let cookie_secure = std::env::var("COOKIE_SECURE")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);
    log::info!("Serving mock tier data from {}", mock_dir.display());

    // Fresh key per process: sessions from a previous run no longer verify.
    let key = Key::generate();
    let mock = Data::new(MockDir(mock_dir.clone()));

    HttpServer::new(move || {
        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), key.clone())
                    .cookie_secure(cookie_secure)
                    .build(),
            )
            .app_data(mock.clone())
            .service(api_health)
            .service(favicon)
            .service(api_get_session)
            .service(api_enter_names)
            .service(api_clear_session)
            .service(api_reset_session)
            .service(api_choose_mode)
            .service(api_roulette_draw)
            .service(api_roulette_reset)
            .service(api_set_captain)
            .service(api_draft_start)
            .service(api_draft_pick)
            .service(api_draft_reset)
            .service(api_validate_teams)
            .service(api_end_game)
            .service(api_tier_board)
            .service(api_tier_player)
            .service(Files::new("/mock", mock_dir.clone()))
    })
    .bind(bind)?
    .run()
    .await
}
