//! Venue types

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Venue primary key
pub type VenueId = i64;

/// A venue hosting shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// Store-assigned id
    pub id: VenueId,
    /// Display name
    pub name: String,
    /// City
    pub city: String,
    /// Two-letter state code
    pub state: String,
    /// Street address
    pub address: String,
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
    /// Whether the venue is looking for artists
    pub seeking_talent: bool,
    /// Free text shown with the seeking flag
    pub seeking_description: Option<String>,
}

/// Data for creating a venue, or replacing all editable fields of one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVenue {
    /// Display name
    pub name: String,
    /// City
    pub city: String,
    /// Two-letter state code
    pub state: String,
    /// Street address
    pub address: String,
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
    /// Whether the venue is looking for artists
    pub seeking_talent: bool,
    /// Free text shown with the seeking flag
    pub seeking_description: Option<String>,
}

/// Number of venues sharing one (city, state) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCount {
    /// City
    pub city: String,
    /// Two-letter state code
    pub state: String,
    /// Venues at this location
    pub count: i64,
}
