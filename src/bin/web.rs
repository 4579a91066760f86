//! Single binary web server: JSON API over the unit ranking engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{App, HttpServer};
use lineup_index::api::{self, CLEANUP_INTERVAL, INACTIVITY_TIMEOUT};

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = api::new_state();

    // Background task: every 30 minutes, remove datasets inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = api::purge_inactive(&state_cleanup, INACTIVITY_TIMEOUT);
            if removed > 0 {
                log::info!("Cleaned up {} inactive dataset(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || App::new().app_data(state.clone()).configure(api::configure))
        .bind(bind)?
        .run()
        .await
}
