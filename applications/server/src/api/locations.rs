/// Location API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use encore_core::{aggregate, types::LocationCount};

/// GET /api/locations
/// Number of venues in each city
pub async fn location_summary(State(app_state): State<AppState>) -> Result<Json<Vec<LocationCount>>> {
    let counts = aggregate::location_summary(app_state.db.as_ref()).await?;
    Ok(Json(counts))
}
