//! Form bodies and write responses shared by the listing routes

use axum::{extract::RawForm, http::StatusCode, Json};
use encore_core::submission::FormFields;
use serde::Serialize;

/// Decode an `application/x-www-form-urlencoded` body into grouped pairs
pub fn fields(RawForm(body): RawForm) -> FormFields {
    FormFields::from_pairs(url::form_urlencoded::parse(&body))
}

/// Body returned by every successful create, edit or delete
#[derive(Debug, Serialize)]
pub struct WriteResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl WriteResponse {
    pub fn ok(message: impl Into<String>, id: i64) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.into(),
            id: Some(id),
        })
    }

    pub fn created(message: impl Into<String>, id: i64) -> (StatusCode, Json<Self>) {
        (StatusCode::CREATED, Self::ok(message, id))
    }
}

/// Edit-form payload: the current values keyed for re-submission
#[derive(Debug, Serialize)]
pub struct EditForm<T> {
    pub id: i64,
    pub form: T,
}
