/// Venues API routes
use crate::{
    api::forms::{self, EditForm, WriteResponse},
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, RawForm, State},
    http::StatusCode,
    Json,
};
use encore_core::{
    aggregate::{self, LocationGroup, VenueDetailView},
    search::{self, SearchResult},
    submission::VenueSubmission,
    time::reference_now,
    types::{CreateVenue, VenueId},
    EncoreError,
};

/// GET /api/venues
/// All venues grouped by city and state
pub async fn list_venues(State(app_state): State<AppState>) -> Result<Json<Vec<LocationGroup>>> {
    let groups = aggregate::venues_by_location(app_state.db.as_ref(), reference_now()).await?;
    Ok(Json(groups))
}

/// POST /api/venues/search
/// Case-insensitive name search; the form field is `search_term`
pub async fn search_venues(
    State(app_state): State<AppState>,
    form: RawForm,
) -> Result<Json<SearchResult>> {
    let fields = forms::fields(form);
    let term = fields.raw("search_term").unwrap_or_default();
    let result = search::search_venues(app_state.db.as_ref(), term, reference_now()).await?;
    Ok(Json(result))
}

/// GET /api/venues/:id
/// Venue page with past and upcoming shows
pub async fn get_venue(
    Path(id): Path<VenueId>,
    State(app_state): State<AppState>,
) -> Result<Json<VenueDetailView>> {
    let detail = aggregate::venue_detail(app_state.db.as_ref(), id, reference_now()).await?;
    Ok(Json(detail))
}

/// POST /api/venues
pub async fn create_venue(
    State(app_state): State<AppState>,
    form: RawForm,
) -> Result<(StatusCode, Json<WriteResponse>)> {
    let fields = forms::fields(form);
    let name = fields.optional("name").unwrap_or_default();
    let failed = |err: EncoreError| {
        ServerError::write(format!("An error occurred. Venue {name} could not be listed."), err)
    };

    let submission = VenueSubmission::from_form(&fields).map_err(failed)?;
    let venue = app_state
        .db
        .create_venue(CreateVenue::from(submission))
        .await
        .map_err(|e| failed(e.into()))?;

    Ok(WriteResponse::created(
        format!("Venue {} was successfully listed!", venue.name),
        venue.id,
    ))
}

/// GET /api/venues/:id/edit
/// Current values of a venue, ready to pre-populate the edit form
pub async fn edit_venue_form(
    Path(id): Path<VenueId>,
    State(app_state): State<AppState>,
) -> Result<Json<EditForm<VenueSubmission>>> {
    let venue = app_state
        .db
        .get_venue(id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Venue {id} not found")))?;

    Ok(Json(EditForm {
        id,
        form: VenueSubmission::from(&venue),
    }))
}

/// POST /api/venues/:id/edit
pub async fn edit_venue(
    Path(id): Path<VenueId>,
    State(app_state): State<AppState>,
    form: RawForm,
) -> Result<Json<WriteResponse>> {
    let failed = |err: EncoreError| {
        ServerError::write(
            "An error occurred. Venue information could not be edited.",
            err,
        )
    };

    let submission = VenueSubmission::from_form(&forms::fields(form)).map_err(failed)?;
    let venue = app_state
        .db
        .update_venue(id, CreateVenue::from(submission))
        .await
        .map_err(|e| failed(e.into()))?;

    Ok(WriteResponse::ok(
        "Venue information was updated successfully!",
        venue.id,
    ))
}

/// DELETE /api/venues/:id
/// Removes the venue together with its shows
pub async fn delete_venue(
    Path(id): Path<VenueId>,
    State(app_state): State<AppState>,
) -> Result<Json<WriteResponse>> {
    app_state
        .db
        .delete_venue(id)
        .await
        .map_err(|e| ServerError::write(format!("Venue {id} was not deleted."), e))?;

    Ok(WriteResponse::ok(
        format!("Venue {id} was successfully deleted."),
        id,
    ))
}
