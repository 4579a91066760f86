//! JSON HTTP API over the ranking engine: per-dataset in-memory store plus stateless rankings.

use crate::{
    compute_unit_rankings_with, AnalysisConfig, Dataset, DatasetId, MatchFilter, MatchRecord,
    Roster, RosterEntry,
};
use actix_web::{
    delete, get, post, put,
    web::{self, Bytes, Data, Json, Path},
    HttpResponse, Responder,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-dataset entry: dataset inputs + last activity time (for auto-cleanup).
pub struct DatasetEntry {
    pub dataset: Dataset,
    pub last_activity: Instant,
}

/// In-memory state: many datasets by ID.
pub type AppState = Data<RwLock<HashMap<DatasetId, DatasetEntry>>>;

/// Inactivity threshold: datasets not accessed for this long are removed.
pub const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// How often the cleanup task runs.
pub const CLEANUP_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Empty store.
pub fn new_state() -> AppState {
    Data::new(RwLock::new(HashMap::new()))
}

/// Remove datasets idle for at least `timeout`. Returns how many were removed.
pub fn purge_inactive(state: &AppState, timeout: Duration) -> usize {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return 0,
    };
    let before = g.len();
    g.retain(|_, entry| entry.last_activity.elapsed() < timeout);
    before - g.len()
}

/// Register every route and the JSON body limit.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().limit(16 * 1024 * 1024))
        .service(api_health)
        .service(api_rankings)
        .service(api_create_dataset)
        .service(api_get_dataset)
        .service(api_delete_dataset)
        .service(api_add_match)
        .service(api_remove_match)
        .service(api_set_roster)
        .service(api_set_roster_csv)
        .service(api_dataset_rankings);
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Stateless ranking request: everything needed in one body.
#[derive(Deserialize)]
struct RankingsBody {
    matches: Vec<MatchRecord>,
    #[serde(default)]
    roster: Vec<RosterEntry>,
    #[serde(default)]
    filter: MatchFilter,
    #[serde(default)]
    config: AnalysisConfig,
}

/// Ranking request against a stored dataset.
#[derive(Default, Deserialize)]
struct DatasetRankingsBody {
    #[serde(default)]
    filter: MatchFilter,
    #[serde(default)]
    config: AnalysisConfig,
}

impl DatasetRankingsBody {
    /// An empty body means defaults; anything else must be valid JSON.
    fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }
}

/// Path segment: dataset id (e.g. /api/datasets/{id})
#[derive(Deserialize)]
struct DatasetPath {
    id: DatasetId,
}

/// Path segments: dataset id and match id (e.g. /api/datasets/{id}/matches/{match_id})
#[derive(Deserialize)]
struct DatasetMatchPath {
    id: DatasetId,
    match_id: Uuid,
}

fn error_json(message: impl std::fmt::Display) -> serde_json::Value {
    serde_json::json!({ "error": message.to_string() })
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(error_json("No dataset"))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "lineup-index-web",
    })
}

/// Compute rankings from the request body alone; nothing is stored.
#[post("/api/rankings")]
async fn api_rankings(body: Json<RankingsBody>) -> HttpResponse {
    let body = body.into_inner();
    let roster = Roster::from_entries(body.roster);
    match compute_unit_rankings_with(&body.matches, &roster, &body.filter, &body.config) {
        Ok(rankings) => HttpResponse::Ok().json(rankings),
        Err(e) => HttpResponse::BadRequest().json(error_json(e)),
    }
}

/// Create a new empty dataset (returns it with id; client stores id for subsequent requests).
#[post("/api/datasets")]
async fn api_create_dataset(state: AppState) -> HttpResponse {
    let dataset = Dataset::new();
    let body = HttpResponse::Ok().json(&dataset);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        dataset.id,
        DatasetEntry {
            dataset,
            last_activity: Instant::now(),
        },
    );
    body
}

/// Get a dataset by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/datasets/{id}")]
async fn api_get_dataset(state: AppState, path: Path<DatasetPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.dataset)
        }
        None => not_found(),
    }
}

/// Delete a dataset.
#[delete("/api/datasets/{id}")]
async fn api_delete_dataset(state: AppState, path: Path<DatasetPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove(&path.id) {
        Some(_) => HttpResponse::NoContent().finish(),
        None => not_found(),
    }
}

/// Add a match record.
#[post("/api/datasets/{id}/matches")]
async fn api_add_match(
    state: AppState,
    path: Path<DatasetPath>,
    body: Json<MatchRecord>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    let d = &mut entry.dataset;
    match d.add_match(body.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(d),
        Err(e) => HttpResponse::BadRequest().json(error_json(e)),
    }
}

/// Remove a match record by id.
#[delete("/api/datasets/{id}/matches/{match_id}")]
async fn api_remove_match(state: AppState, path: Path<DatasetMatchPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    let d = &mut entry.dataset;
    match d.remove_match(path.match_id) {
        Ok(_) => HttpResponse::Ok().json(d),
        Err(e) => HttpResponse::NotFound().json(error_json(e)),
    }
}

/// Replace the roster from a JSON list of entries.
#[put("/api/datasets/{id}/roster")]
async fn api_set_roster(
    state: AppState,
    path: Path<DatasetPath>,
    body: Json<Vec<RosterEntry>>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    entry.dataset.set_roster(Roster::from_entries(body.into_inner()));
    HttpResponse::Ok().json(&entry.dataset)
}

/// Replace the roster from CSV text (`player_id,name,nickname,photo` with header).
#[put("/api/datasets/{id}/roster/csv")]
async fn api_set_roster_csv(
    state: AppState,
    path: Path<DatasetPath>,
    body: String,
) -> HttpResponse {
    let roster = match Roster::from_csv_reader(body.as_bytes()) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(error_json(e)),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    log::info!("Dataset {}: roster loaded with {} players", path.id, roster.len());
    entry.dataset.set_roster(roster);
    HttpResponse::Ok().json(&entry.dataset)
}

/// Compute rankings over a stored dataset. An empty body uses the default filter and config.
#[post("/api/datasets/{id}/rankings")]
async fn api_dataset_rankings(
    state: AppState,
    path: Path<DatasetPath>,
    body: Bytes,
) -> HttpResponse {
    let request = match DatasetRankingsBody::parse(&body) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(error_json(e)),
    };
    // Copy inputs out so the lock is not held during the computation.
    let dataset = {
        let mut g = match state.write() {
            Ok(guard) => guard,
            Err(_) => return HttpResponse::InternalServerError().body("lock error"),
        };
        match g.get_mut(&path.id) {
            Some(entry) => {
                entry.last_activity = Instant::now();
                entry.dataset.clone()
            }
            None => return not_found(),
        }
    };
    let rankings = compute_unit_rankings_with(
        &dataset.matches,
        &dataset.roster,
        &request.filter,
        &request.config,
    );
    match rankings {
        Ok(rankings) => HttpResponse::Ok().json(rankings),
        Err(e) => HttpResponse::BadRequest().json(error_json(e)),
    }
}
