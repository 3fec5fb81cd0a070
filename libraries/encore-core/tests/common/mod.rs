//! In-memory store and fixtures for aggregation tests

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use encore_core::{
    error::{PersistenceError, Result, WriteResult},
    storage::StorageContext,
    types::*,
};
use std::collections::BTreeSet;
use std::sync::Mutex;

/// Vec-backed store that returns rows in insertion order
#[derive(Default)]
pub struct FixtureStore {
    venues: Mutex<Vec<Venue>>,
    artists: Mutex<Vec<Artist>>,
    shows: Mutex<Vec<Show>>,
}

impl FixtureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_venue(&self, id: VenueId, name: &str, city: &str, state: &str) -> Venue {
        let venue = Venue {
            id,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: format!("{id} Main Street"),
            phone: None,
            website: None,
            facebook_link: None,
            image_link: Some(format!("https://img.example/venue-{id}.jpg")),
            genres: BTreeSet::from(["Jazz".to_string()]),
            seeking_talent: false,
            seeking_description: None,
        };
        self.venues.lock().unwrap().push(venue.clone());
        venue
    }

    pub fn add_artist(&self, id: ArtistId, name: &str) -> Artist {
        let artist = Artist {
            id,
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: None,
            website: None,
            facebook_link: None,
            image_link: Some(format!("https://img.example/artist-{id}.jpg")),
            genres: BTreeSet::new(),
            seeking_venue: false,
            seeking_description: None,
        };
        self.artists.lock().unwrap().push(artist.clone());
        artist
    }

    pub fn add_show(
        &self,
        id: ShowId,
        venue_id: VenueId,
        artist_id: ArtistId,
        start_time: NaiveDateTime,
    ) -> Show {
        let show = Show {
            id,
            venue_id,
            artist_id,
            start_time,
        };
        self.shows.lock().unwrap().push(show.clone());
        show
    }
}

#[async_trait]
impl StorageContext for FixtureStore {
    async fn get_venue(&self, id: VenueId) -> Result<Option<Venue>> {
        Ok(self.venues.lock().unwrap().iter().find(|v| v.id == id).cloned())
    }

    async fn get_all_venues(&self) -> Result<Vec<Venue>> {
        Ok(self.venues.lock().unwrap().clone())
    }

    async fn count_venues_by_location(&self) -> Result<Vec<LocationCount>> {
        let mut counts: Vec<LocationCount> = Vec::new();
        for venue in self.venues.lock().unwrap().iter() {
            match counts
                .iter_mut()
                .find(|c| c.city == venue.city && c.state == venue.state)
            {
                Some(count) => count.count += 1,
                None => counts.push(LocationCount {
                    city: venue.city.clone(),
                    state: venue.state.clone(),
                    count: 1,
                }),
            }
        }
        Ok(counts)
    }

    async fn create_venue(&self, _venue: CreateVenue) -> WriteResult<Venue> {
        Err(PersistenceError::Backend("read-only fixture".to_string()))
    }

    async fn update_venue(&self, id: VenueId, _venue: CreateVenue) -> WriteResult<Venue> {
        Err(PersistenceError::not_found("Venue", id))
    }

    async fn delete_venue(&self, id: VenueId) -> WriteResult<()> {
        let mut venues = self.venues.lock().unwrap();
        let before = venues.len();
        venues.retain(|v| v.id != id);
        if venues.len() == before {
            return Err(PersistenceError::not_found("Venue", id));
        }
        self.shows.lock().unwrap().retain(|s| s.venue_id != id);
        Ok(())
    }

    async fn get_artist(&self, id: ArtistId) -> Result<Option<Artist>> {
        Ok(self.artists.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn get_all_artists(&self) -> Result<Vec<Artist>> {
        Ok(self.artists.lock().unwrap().clone())
    }

    async fn create_artist(&self, _artist: CreateArtist) -> WriteResult<Artist> {
        Err(PersistenceError::Backend("read-only fixture".to_string()))
    }

    async fn update_artist(&self, id: ArtistId, _artist: CreateArtist) -> WriteResult<Artist> {
        Err(PersistenceError::not_found("Artist", id))
    }

    async fn get_all_shows(&self) -> Result<Vec<Show>> {
        Ok(self.shows.lock().unwrap().clone())
    }

    async fn get_shows_by_venue(&self, venue_id: VenueId) -> Result<Vec<Show>> {
        Ok(self
            .shows
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.venue_id == venue_id)
            .cloned()
            .collect())
    }

    async fn get_shows_by_artist(&self, artist_id: ArtistId) -> Result<Vec<Show>> {
        Ok(self
            .shows
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.artist_id == artist_id)
            .cloned()
            .collect())
    }

    async fn create_show(&self, _show: CreateShow) -> WriteResult<Show> {
        Err(PersistenceError::Backend("read-only fixture".to_string()))
    }
}

/// Fixed reference time used across the suites
pub fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 4, 12)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap()
}

pub fn hours_from_reference(hours: i64) -> NaiveDateTime {
    reference_time() + Duration::hours(hours)
}
