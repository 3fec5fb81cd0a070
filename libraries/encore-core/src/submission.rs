//! Typed create/edit submissions
//!
//! Listings arrive as `application/x-www-form-urlencoded` pairs. These
//! types turn the raw pairs into validated write payloads:
//!
//! - text fields are trimmed; optional fields that are blank become `None`
//! - every `genres` pair adds one genre to the set
//! - checkboxes (`seeking_talent`, `seeking_venue`) are `true` when the key
//!   is present with any value and `false` when it is absent
//! - required fields that are missing or blank fail with `InvalidInput`

use crate::error::{EncoreError, Result};
use crate::time::{format_timestamp, parse_timestamp};
use crate::types::{Artist, CreateArtist, CreateShow, CreateVenue, Venue};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Raw form pairs grouped by key
#[derive(Debug, Default, Clone)]
pub struct FormFields {
    fields: HashMap<String, Vec<String>>,
}

impl FormFields {
    /// Group decoded `(key, value)` pairs, keeping repeated keys in order
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            fields.entry(key.into()).or_default().push(value.into());
        }
        Self { fields }
    }

    /// First value of `key`, trimmed, or `InvalidInput` when missing or blank
    pub fn required(&self, key: &str) -> Result<String> {
        self.optional(key)
            .ok_or_else(|| EncoreError::invalid_input(format!("{key} is required")))
    }

    /// First value of `key`, trimmed, or `None` when missing or blank
    pub fn optional(&self, key: &str) -> Option<String> {
        self.fields
            .get(key)
            .and_then(|values| values.first())
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// First value of `key` exactly as submitted
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Whether a checkbox named `key` was submitted
    pub fn flag(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Every non-blank value of `key`
    pub fn set(&self, key: &str) -> BTreeSet<String> {
        self.fields
            .get(key)
            .into_iter()
            .flatten()
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Venue create/edit form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueSubmission {
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

impl VenueSubmission {
    /// Validate raw form pairs
    ///
    /// # Errors
    ///
    /// `InvalidInput` when `name`, `city`, `state` or `address` is missing.
    pub fn from_form(fields: &FormFields) -> Result<Self> {
        Ok(Self {
            name: fields.required("name")?,
            city: fields.required("city")?,
            state: fields.required("state")?,
            address: fields.required("address")?,
            phone: fields.optional("phone"),
            website: fields.optional("website"),
            facebook_link: fields.optional("facebook_link"),
            image_link: fields.optional("image_link"),
            genres: fields.set("genres"),
            seeking_talent: fields.flag("seeking_talent"),
            seeking_description: fields.optional("seeking_description"),
        })
    }
}

impl From<VenueSubmission> for CreateVenue {
    fn from(form: VenueSubmission) -> Self {
        Self {
            name: form.name,
            city: form.city,
            state: form.state,
            address: form.address,
            phone: form.phone,
            website: form.website,
            facebook_link: form.facebook_link,
            image_link: form.image_link,
            genres: form.genres,
            seeking_talent: form.seeking_talent,
            seeking_description: form.seeking_description,
        }
    }
}

/// Pre-populate the edit form from a stored venue
impl From<&Venue> for VenueSubmission {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            website: venue.website.clone(),
            facebook_link: venue.facebook_link.clone(),
            image_link: venue.image_link.clone(),
            genres: venue.genres.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
        }
    }
}

/// Artist create/edit form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistSubmission {
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

impl ArtistSubmission {
    /// Validate raw form pairs
    ///
    /// # Errors
    ///
    /// `InvalidInput` when `name`, `city` or `state` is missing.
    pub fn from_form(fields: &FormFields) -> Result<Self> {
        Ok(Self {
            name: fields.required("name")?,
            city: fields.required("city")?,
            state: fields.required("state")?,
            phone: fields.optional("phone"),
            website: fields.optional("website"),
            facebook_link: fields.optional("facebook_link"),
            image_link: fields.optional("image_link"),
            genres: fields.set("genres"),
            seeking_venue: fields.flag("seeking_venue"),
            seeking_description: fields.optional("seeking_description"),
        })
    }
}

impl From<ArtistSubmission> for CreateArtist {
    fn from(form: ArtistSubmission) -> Self {
        Self {
            name: form.name,
            city: form.city,
            state: form.state,
            phone: form.phone,
            website: form.website,
            facebook_link: form.facebook_link,
            image_link: form.image_link,
            genres: form.genres,
            seeking_venue: form.seeking_venue,
            seeking_description: form.seeking_description,
        }
    }
}

/// Pre-populate the edit form from a stored artist
impl From<&Artist> for ArtistSubmission {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            website: artist.website.clone(),
            facebook_link: artist.facebook_link.clone(),
            image_link: artist.image_link.clone(),
            genres: artist.genres.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
        }
    }
}

/// Show create form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowSubmission(CreateShow);

impl ShowSubmission {
    /// Validate raw form pairs
    ///
    /// Reference existence is checked by the store when the show is
    /// written; this only checks that the values are well-formed.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when an id is not an integer or the start time does
    /// not parse.
    pub fn from_form(fields: &FormFields) -> Result<Self> {
        let artist_id = parse_id(fields, "artist_id")?;
        let venue_id = parse_id(fields, "venue_id")?;

        let raw_time = fields.required("start_time")?;
        let start_time = parse_timestamp(&raw_time).ok_or_else(|| {
            EncoreError::invalid_input(format!("start_time is not a valid timestamp: {raw_time}"))
        })?;

        Ok(Self(CreateShow {
            venue_id,
            artist_id,
            start_time,
        }))
    }

    /// Start time as it will be displayed
    pub fn start_time(&self) -> String {
        format_timestamp(&self.0.start_time)
    }
}

impl From<ShowSubmission> for CreateShow {
    fn from(form: ShowSubmission) -> Self {
        form.0
    }
}

fn parse_id(fields: &FormFields, key: &str) -> Result<i64> {
    let raw = fields.required(key)?;
    raw.parse()
        .map_err(|_| EncoreError::invalid_input(format!("{key} must be an integer, got {raw}")))
}
