/// Shows API routes
use crate::{
    api::forms::{self, WriteResponse},
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{RawForm, State},
    http::StatusCode,
    Json,
};
use encore_core::{
    aggregate::{self, ShowListingEntry},
    submission::ShowSubmission,
    types::CreateShow,
};

const CREATE_FAILED: &str = "Could not add new show.";

/// GET /api/shows
/// Every show, past and upcoming alike
pub async fn list_shows(State(app_state): State<AppState>) -> Result<Json<Vec<ShowListingEntry>>> {
    let shows = aggregate::all_shows_listing(app_state.db.as_ref()).await?;
    Ok(Json(shows))
}

/// POST /api/shows
/// Form fields: `artist_id`, `venue_id`, `start_time`
pub async fn create_show(
    State(app_state): State<AppState>,
    form: RawForm,
) -> Result<(StatusCode, Json<WriteResponse>)> {
    let submission = ShowSubmission::from_form(&forms::fields(form))
        .map_err(|e| ServerError::write(CREATE_FAILED, e))?;

    let show = app_state
        .db
        .create_show(CreateShow::from(submission))
        .await
        .map_err(|e| ServerError::write(CREATE_FAILED, e))?;

    Ok(WriteResponse::created("Show was successfully listed!", show.id))
}
