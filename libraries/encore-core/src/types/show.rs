//! Show types
//!
//! A show joins one artist to one venue at a start time. It references both
//! sides and owns neither.

use super::{ArtistId, VenueId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Show primary key
pub type ShowId = i64;

/// A scheduled performance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Store-assigned id
    pub id: ShowId,
    /// Hosting venue
    pub venue_id: VenueId,
    /// Performing artist
    pub artist_id: ArtistId,
    /// Naive local start time
    pub start_time: NaiveDateTime,
}

/// Data for creating a new show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateShow {
    /// Hosting venue
    pub venue_id: VenueId,
    /// Performing artist
    pub artist_id: ArtistId,
    /// Naive local start time
    pub start_time: NaiveDateTime,
}
