/// Artists API routes
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
    aggregate::{self, ArtistDetailView, ArtistSummary},
    search::{self, SearchResult},
    submission::ArtistSubmission,
    time::reference_now,
    types::{ArtistId, CreateArtist},
    EncoreError,
};

/// GET /api/artists
/// Id and name of every artist
pub async fn list_artists(State(app_state): State<AppState>) -> Result<Json<Vec<ArtistSummary>>> {
    let artists = aggregate::artist_directory(app_state.db.as_ref()).await?;
    Ok(Json(artists))
}

/// POST /api/artists/search
pub async fn search_artists(
    State(app_state): State<AppState>,
    form: RawForm,
) -> Result<Json<SearchResult>> {
    let fields = forms::fields(form);
    let term = fields.raw("search_term").unwrap_or_default();
    let result = search::search_artists(app_state.db.as_ref(), term, reference_now()).await?;
    Ok(Json(result))
}

/// GET /api/artists/:id
pub async fn get_artist(
    Path(id): Path<ArtistId>,
    State(app_state): State<AppState>,
) -> Result<Json<ArtistDetailView>> {
    let detail = aggregate::artist_detail(app_state.db.as_ref(), id, reference_now()).await?;
    Ok(Json(detail))
}

/// POST /api/artists
pub async fn create_artist(
    State(app_state): State<AppState>,
    form: RawForm,
) -> Result<(StatusCode, Json<WriteResponse>)> {
    let fields = forms::fields(form);
    let name = fields.optional("name").unwrap_or_default();
    let failed = |err: EncoreError| {
        ServerError::write(format!("An error occurred. Artist {name} could not be listed."), err)
    };

    let submission = ArtistSubmission::from_form(&fields).map_err(failed)?;
    let artist = app_state
        .db
        .create_artist(CreateArtist::from(submission))
        .await
        .map_err(|e| failed(e.into()))?;

    Ok(WriteResponse::created(
        format!("Artist {} was successfully listed!", artist.name),
        artist.id,
    ))
}

/// GET /api/artists/:id/edit
pub async fn edit_artist_form(
    Path(id): Path<ArtistId>,
    State(app_state): State<AppState>,
) -> Result<Json<EditForm<ArtistSubmission>>> {
    let artist = app_state
        .db
        .get_artist(id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Artist {id} not found")))?;

    Ok(Json(EditForm {
        id,
        form: ArtistSubmission::from(&artist),
    }))
}

/// POST /api/artists/:id/edit
pub async fn edit_artist(
    Path(id): Path<ArtistId>,
    State(app_state): State<AppState>,
    form: RawForm,
) -> Result<Json<WriteResponse>> {
    let failed = |err: EncoreError| {
        ServerError::write(
            "An error occurred. Artist information could not be edited.",
            err,
        )
    };

    let submission = ArtistSubmission::from_form(&forms::fields(form)).map_err(failed)?;
    let artist = app_state
        .db
        .update_artist(id, CreateArtist::from(submission))
        .await
        .map_err(|e| failed(e.into()))?;

    Ok(WriteResponse::ok(
        "Artist information was updated successfully!",
        artist.id,
    ))
}
