//! Artist types

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Artist primary key
pub type ArtistId = i64;

/// An artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Store-assigned id
    pub id: ArtistId,
    /// Display name
    pub name: String,
    /// City
    pub city: String,
    /// Two-letter state code
    pub state: String,
    /// Contact phone number
    pub phone: Option<String>,
    /// Website URL
    pub website: Option<String>,
    /// Facebook page URL
    pub facebook_link: Option<String>,
    /// Image URL
    pub image_link: Option<String>,
    /// Genre names, deduplicated
    pub genres: BTreeSet<String>,
    /// Whether the artist is looking for venues
    pub seeking_venue: bool,
    /// Free text shown with the seeking flag
    pub seeking_description: Option<String>,
}

/// Data for creating an artist, or replacing all editable fields of one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateArtist {
    /// Display name
    pub name: String,
    /// City
    pub city: String,
    /// Two-letter state code
    pub state: String,
    /// Contact phone number
    pub phone: Option<String>,
    /// Website URL
    pub website: Option<String>,
    /// Facebook page URL
    pub facebook_link: Option<String>,
    /// Image URL
    pub image_link: Option<String>,
    /// Genre names, deduplicated
    pub genres: BTreeSet<String>,
    /// Whether the artist is looking for venues
    pub seeking_venue: bool,
    /// Free text shown with the seeking flag
    pub seeking_description: Option<String>,
}
