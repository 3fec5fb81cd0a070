/// API route modules
pub mod artists;
pub mod forms;
pub mod health;
pub mod locations;
pub mod shows;
pub mod venues;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the `/api` router with tracing and CORS layers applied
pub fn router(app_state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(health::health))
        // Venues
        .route("/venues", get(venues::list_venues).post(venues::create_venue))
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/:id",
            get(venues::get_venue).delete(venues::delete_venue),
        )
        .route(
            "/venues/:id/edit",
            get(venues::edit_venue_form).post(venues::edit_venue),
        )
        // Artists
        .route(
            "/artists",
            get(artists::list_artists).post(artists::create_artist),
        )
        .route("/artists/search", post(artists::search_artists))
        .route("/artists/:id", get(artists::get_artist))
        .route(
            "/artists/:id/edit",
            get(artists::edit_artist_form).post(artists::edit_artist),
        )
        // Shows
        .route("/shows", get(shows::list_shows).post(shows::create_show))
        // Locations
        .route("/locations", get(locations::location_summary));

    Router::new()
        .nest("/api", routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
