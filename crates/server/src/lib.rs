pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod standings;

use axum::{
    middleware,
    routing::{get, post},
    Extension, Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Db;

/// Build the full router over a storage handle.
pub fn app(db: Db, config: Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/health", get(routes::health::health_check))
        // Players
        .route(
            "/api/players",
            get(routes::players::list_players).post(routes::players::create_player),
        )
        .route(
            "/api/players/{player_id}",
            get(routes::players::get_player).put(routes::players::update_player),
        )
        .route("/api/players/{player_id}/scores", get(routes::players::get_player_scores))
        // Courses
        .route(
            "/api/courses",
            get(routes::courses::list_courses).post(routes::courses::create_course),
        )
        .route("/api/courses/{course_id}", get(routes::courses::get_course))
        // Competitions
        .route(
            "/api/competitions",
            get(routes::competitions::list_competitions)
                .post(routes::competitions::create_competition),
        )
        .route(
            "/api/competitions/{competition_id}",
            get(routes::competitions::get_competition),
        )
        .route(
            "/api/competitions/{competition_id}/scores",
            get(routes::competitions::get_competition_scores),
        )
        .route(
            "/api/competitions/{competition_id}/leaderboard",
            get(routes::competitions::get_competition_leaderboard),
        )
        .route(
            "/api/competitions/{competition_id}/grand-prix",
            get(routes::competitions::get_competition_grand_prix),
        )
        // Scores
        .route("/api/scores", post(routes::scores::record_score))
        .route("/api/scores/{score_id}", get(routes::scores::get_score))
        // Season leaderboards
        .route("/api/leaderboards/overall", get(routes::leaderboards::overall_leaderboard))
        .route("/api/leaderboards/twos", get(routes::leaderboards::twos_leaderboard))
        // Handicap calculator
        .route("/api/handicap", get(routes::handicap::course_handicap))
        // Shared-secret gate for every mutating request
        .layer(middleware::from_fn_with_state(
            config.clone(),
            auth::middleware::require_api_key,
        ))
        // Shared state
        .layer(Extension(db))
        .layer(Extension(config))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Serve the app on an already-bound listener until the process stops.
pub async fn serve(listener: TcpListener, db: Db, config: Config) -> std::io::Result<()> {
    axum::serve(listener, app(db, config)).await
}
