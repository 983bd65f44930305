//! HTTP front end for the arena bot.
//!
//! The game server POSTs an arena snapshot once per turn and expects a
//! single-letter move in reply. Each match, keyed by the self href inside the
//! snapshot, gets its own [`Decider`] so concurrent matches never share sweep
//! state or recovery draws.

use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
};
use bot_core::{ArenaUpdate, Decider, Tactics};
use dashmap::DashMap;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use xxhash_rust::xxh3::xxh3_64;

pub mod config;

/// Greeting served on plain GETs, mostly useful as a liveness probe.
pub const GREETING: &str = "Let the battle begin!";

#[derive(Clone)]
pub struct AppState {
    // Self href -> per-match decision state
    bots: Arc<DashMap<String, Decider>>,
}

pub fn create_app() -> Router {
    let state = AppState { bots: Arc::new(DashMap::new()) };

    Router::new().route("/", any(root)).with_state(state)
}

/// Console log level defaults to INFO; `RUST_LOG` overrides per module.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder().with_default_directive(Level::INFO.into()).from_env_lossy(),
        )
        .init();
}

// The body is taken raw: non-UTF-8 payloads must reach the same warn + 500
// branch as any other undecodable body instead of dying in an extractor.
async fn root(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    if method == Method::GET {
        return GREETING.into_response();
    }

    let update: ArenaUpdate = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(err) => {
            tracing::warn!(%err, "rejecting undecodable arena snapshot");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let href = update.self_href().to_string();
    let mut decider = state
        .bots
        .entry(href.clone())
        .or_insert_with(|| Decider::new(Tactics::default(), match_seed(&href)));

    let decision = match decider.try_decide(&update) {
        Ok(decision) => decision,
        Err(err) => {
            tracing::warn!(%err, %href, "snapshot broke the arena contract");
            decider.fallback_decision()
        }
    };
    tracing::info!(%href, action = %decision.action, reason = ?decision.reason, "turn decided");

    decision.action.code().to_string().into_response()
}

/// Seed for a match's recovery RNG. Derived from the href so restarting the
/// server mid-match replays the same draw sequence.
fn match_seed(href: &str) -> u64 {
    xxh3_64(href.as_bytes())
}
