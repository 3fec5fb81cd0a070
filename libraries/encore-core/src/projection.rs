//! Show projection
//!
//! Flattens a show and its counterpart (the artist when looking from a
//! venue, the venue when looking from an artist) into a display record.

use crate::error::{EncoreError, Result};
use crate::time::format_timestamp;
use crate::types::{Artist, Show, Venue};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Which side of the show the counterpart is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counterpart {
    /// Viewed from a venue: the counterpart is the artist
    Artist,
    /// Viewed from an artist: the counterpart is the venue
    Venue,
}

/// A show as displayed on a venue or artist page
///
/// Serializes with the counterpart's field names, e.g. `artist_id`,
/// `artist_name`, `artist_image_link`, `start_time` on a venue page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowView {
    /// Side the counterpart is on; picks the serialized field names
    pub counterpart: Counterpart,
    /// Id of the artist or venue
    pub counterpart_id: i64,
    /// Name of the artist or venue
    pub counterpart_name: String,
    /// Image of the artist or venue
    pub counterpart_image_link: Option<String>,
    /// `YYYY-MM-DD HH:MM:SS`
    pub start_time: String,
}

impl Serialize for ShowView {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let (id, name, image_link) = match self.counterpart {
            Counterpart::Artist => ("artist_id", "artist_name", "artist_image_link"),
            Counterpart::Venue => ("venue_id", "venue_name", "venue_image_link"),
        };

        let mut state = serializer.serialize_struct("ShowView", 4)?;
        state.serialize_field(id, &self.counterpart_id)?;
        state.serialize_field(name, &self.counterpart_name)?;
        state.serialize_field(image_link, &self.counterpart_image_link)?;
        state.serialize_field("start_time", &self.start_time)?;
        state.end()
    }
}

/// Project a show onto a venue page, with its artist as counterpart
///
/// # Errors
///
/// Returns `MissingCounterpart` if `artist` is not the artist the show
/// references.
pub fn project_for_venue(show: &Show, artist: &Artist) -> Result<ShowView> {
    if artist.id != show.artist_id {
        return Err(EncoreError::missing_counterpart(
            show.id,
            "Artist",
            show.artist_id,
        ));
    }

    Ok(ShowView {
        counterpart: Counterpart::Artist,
        counterpart_id: artist.id,
        counterpart_name: artist.name.clone(),
        counterpart_image_link: artist.image_link.clone(),
        start_time: format_timestamp(&show.start_time),
    })
}

/// Project a show onto an artist page, with its venue as counterpart
///
/// # Errors
///
/// Returns `MissingCounterpart` if `venue` is not the venue the show
/// references.
pub fn project_for_artist(show: &Show, venue: &Venue) -> Result<ShowView> {
    if venue.id != show.venue_id {
        return Err(EncoreError::missing_counterpart(
            show.id,
            "Venue",
            show.venue_id,
        ));
    }

    Ok(ShowView {
        counterpart: Counterpart::Venue,
        counterpart_id: venue.id,
        counterpart_name: venue.name.clone(),
        counterpart_image_link: venue.image_link.clone(),
        start_time: format_timestamp(&show.start_time),
    })
}

/// Project a show whose counterpart may not have resolved
///
/// A `None` counterpart is a referential integrity failure and is reported
/// as `MissingCounterpart` rather than rendered with blanks.
pub fn project_resolved<C>(
    show: &Show,
    counterpart: Option<&C>,
    project: fn(&Show, &C) -> Result<ShowView>,
    entity: &str,
    id: i64,
) -> Result<ShowView> {
    match counterpart {
        Some(counterpart) => project(show, counterpart),
        None => Err(EncoreError::missing_counterpart(show.id, entity, id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn show() -> Show {
        Show {
            id: 11,
            venue_id: 2,
            artist_id: 5,
            start_time: NaiveDate::from_ymd_opt(2019, 5, 21)
                .unwrap()
                .and_hms_opt(21, 30, 0)
                .unwrap(),
        }
    }

    fn artist() -> Artist {
        Artist {
            id: 5,
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: None,
            website: None,
            facebook_link: None,
            image_link: Some("https://img.example/gnp.jpg".to_string()),
            genres: BTreeSet::from(["Rock n Roll".to_string()]),
            seeking_venue: true,
            seeking_description: None,
        }
    }

    fn venue() -> Venue {
        Venue {
            id: 2,
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: None,
            website: None,
            facebook_link: None,
            image_link: None,
            genres: BTreeSet::new(),
            seeking_talent: false,
            seeking_description: None,
        }
    }

    #[test]
    fn venue_page_shows_artist() {
        let view = project_for_venue(&show(), &artist()).unwrap();

        assert_eq!(view.counterpart, Counterpart::Artist);
        assert_eq!(view.counterpart_id, 5);
        assert_eq!(view.counterpart_name, "Guns N Petals");
        assert_eq!(
            view.counterpart_image_link.as_deref(),
            Some("https://img.example/gnp.jpg")
        );
        assert_eq!(view.start_time, "2019-05-21 21:30:00");
    }

    #[test]
    fn artist_page_shows_venue() {
        let view = project_for_artist(&show(), &venue()).unwrap();

        assert_eq!(view.counterpart, Counterpart::Venue);
        assert_eq!(view.counterpart_id, 2);
        assert_eq!(view.counterpart_name, "The Musical Hop");
        assert_eq!(view.counterpart_image_link, None);
    }

    #[test]
    fn wrong_counterpart_is_rejected() {
        let mut other = artist();
        other.id = 99;

        let err = project_for_venue(&show(), &other).unwrap_err();
        assert!(matches!(
            err,
            EncoreError::MissingCounterpart { show_id: 11, id: 5, .. }
        ));
    }

    #[test]
    fn unresolved_counterpart_is_an_error() {
        let err = project_resolved::<Artist>(&show(), None, project_for_venue, "Artist", 5)
            .unwrap_err();
        assert!(matches!(err, EncoreError::MissingCounterpart { .. }));
    }

    #[test]
    fn serializes_with_counterpart_field_names() {
        let json = serde_json::to_value(project_for_venue(&show(), &artist()).unwrap()).unwrap();
        assert_eq!(json["artist_id"], 5);
        assert_eq!(json["artist_name"], "Guns N Petals");
        assert_eq!(json["start_time"], "2019-05-21 21:30:00");
        assert!(json.get("venue_id").is_none());

        let json = serde_json::to_value(project_for_artist(&show(), &venue()).unwrap()).unwrap();
        assert_eq!(json["venue_id"], 2);
        assert_eq!(json["venue_name"], "The Musical Hop");
        assert!(json["venue_image_link"].is_null());
    }
}
