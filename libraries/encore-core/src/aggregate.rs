//! Venue and artist aggregate views
//!
//! Each function reads what it needs from the store handle it is given,
//! then partitions, projects and counts against one reference time.

use crate::error::{EncoreError, Result};
use crate::partition::{count_upcoming, partition};
use crate::projection::{project_for_artist, project_for_venue, project_resolved, ShowView};
use crate::storage::StorageContext;
use crate::time::format_timestamp;
use crate::types::{Artist, ArtistId, Listing, LocationCount, Show, Venue, VenueId};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashMap;

/// A venue page: all venue attributes plus its shows on both sides of now
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetailView {
    /// Venue attributes, flattened into the page
    #[serde(flatten)]
    pub venue: Venue,
    /// Shows that already started, in store order
    pub past_shows: Vec<ShowView>,
    /// Shows still to come, in store order
    pub upcoming_shows: Vec<ShowView>,
    /// Length of `past_shows`
    pub past_shows_count: usize,
    /// Length of `upcoming_shows`
    pub upcoming_shows_count: usize,
}

/// An artist page: all artist attributes plus its shows on both sides of now
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetailView {
    /// Artist attributes, flattened into the page
    #[serde(flatten)]
    pub artist: Artist,
    /// Shows that already started, in store order
    pub past_shows: Vec<ShowView>,
    /// Shows still to come, in store order
    pub upcoming_shows: Vec<ShowView>,
    /// Length of `past_shows`
    pub past_shows_count: usize,
    /// Length of `upcoming_shows`
    pub upcoming_shows_count: usize,
}

/// One entry of a listing: venue in a location group, or a search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingSummary {
    /// Venue or artist id
    pub id: i64,
    /// Venue or artist name
    pub name: String,
    /// Shows starting after the reference time
    pub num_upcoming_shows: usize,
}

/// Venues sharing one (city, state) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationGroup {
    /// City shared by the group
    pub city: String,
    /// State shared by the group
    pub state: String,
    /// Venues in this location, in store order
    pub venues: Vec<ListingSummary>,
}

/// One row of the all-shows listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListingEntry {
    /// Venue hosting the show
    pub venue_id: VenueId,
    /// Name of the hosting venue
    pub venue_name: String,
    /// Performing artist
    pub artist_id: ArtistId,
    /// Name of the performing artist
    pub artist_name: String,
    /// Image of the performing artist
    pub artist_image_link: Option<String>,
    /// `YYYY-MM-DD HH:MM:SS`
    pub start_time: String,
}

/// An artist in the artist directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistSummary {
    /// Artist id
    pub id: ArtistId,
    /// Artist name
    pub name: String,
}

/// Build the venue page for `venue_id`
///
/// # Errors
///
/// `NotFound` if the venue does not exist, `MissingCounterpart` if one of
/// its shows references an artist that does not exist.
pub async fn venue_detail<S>(
    store: &S,
    venue_id: VenueId,
    reference_time: NaiveDateTime,
) -> Result<VenueDetailView>
where
    S: StorageContext + ?Sized,
{
    let venue = store
        .get_venue(venue_id)
        .await?
        .ok_or_else(|| EncoreError::not_found("Venue", venue_id))?;

    let shows = store.get_shows_by_venue(venue_id).await?;
    let artists = resolve_artists(store, &shows).await?;

    let project = |show: &&Show| {
        project_resolved(
            show,
            artists.get(&show.artist_id),
            project_for_venue,
            "Artist",
            show.artist_id,
        )
    };

    let split = partition(&shows, reference_time);
    let past_shows = split.past.iter().map(project).collect::<Result<Vec<_>>>()?;
    let upcoming_shows = split
        .upcoming
        .iter()
        .map(project)
        .collect::<Result<Vec<_>>>()?;

    Ok(VenueDetailView {
        venue,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

/// Build the artist page for `artist_id`
///
/// # Errors
///
/// `NotFound` if the artist does not exist, `MissingCounterpart` if one of
/// its shows references a venue that does not exist.
pub async fn artist_detail<S>(
    store: &S,
    artist_id: ArtistId,
    reference_time: NaiveDateTime,
) -> Result<ArtistDetailView>
where
    S: StorageContext + ?Sized,
{
    let artist = store
        .get_artist(artist_id)
        .await?
        .ok_or_else(|| EncoreError::not_found("Artist", artist_id))?;

    let shows = store.get_shows_by_artist(artist_id).await?;
    let venues = resolve_venues(store, &shows).await?;

    let project = |show: &&Show| {
        project_resolved(
            show,
            venues.get(&show.venue_id),
            project_for_artist,
            "Venue",
            show.venue_id,
        )
    };

    let split = partition(&shows, reference_time);
    let past_shows = split.past.iter().map(project).collect::<Result<Vec<_>>>()?;
    let upcoming_shows = split
        .upcoming
        .iter()
        .map(project)
        .collect::<Result<Vec<_>>>()?;

    Ok(ArtistDetailView {
        artist,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

/// Group every venue by (city, state)
///
/// Groups appear in the order their first venue is returned by the store,
/// not alphabetically.
pub async fn venues_by_location<S>(
    store: &S,
    reference_time: NaiveDateTime,
) -> Result<Vec<LocationGroup>>
where
    S: StorageContext + ?Sized,
{
    let venues = store.get_all_venues().await?;
    let shows = store.get_all_shows().await?;
    Ok(group_by_location(&venues, &shows, reference_time))
}

/// Pure grouping step of [`venues_by_location`]
pub fn group_by_location(
    venues: &[Venue],
    shows: &[Show],
    reference_time: NaiveDateTime,
) -> Vec<LocationGroup> {
    let upcoming = upcoming_by_owner::<Venue>(shows, reference_time);

    let mut groups: Vec<LocationGroup> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for venue in venues {
        let key = (venue.city.as_str(), venue.state.as_str());
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(LocationGroup {
                city: venue.city.clone(),
                state: venue.state.clone(),
                venues: Vec::new(),
            });
            groups.len() - 1
        });

        groups[slot].venues.push(ListingSummary {
            id: venue.id,
            name: venue.name.clone(),
            num_upcoming_shows: upcoming.get(&venue.id).copied().unwrap_or(0),
        });
    }

    groups
}

/// Every show with its venue and artist, regardless of start time
///
/// Unlike the detail pages this listing is not split around a reference
/// time, so a show starting right now still appears.
///
/// # Errors
///
/// `MissingCounterpart` if a show references a missing venue or artist.
pub async fn all_shows_listing<S>(store: &S) -> Result<Vec<ShowListingEntry>>
where
    S: StorageContext + ?Sized,
{
    let shows = store.get_all_shows().await?;
    let venues = resolve_venues(store, &shows).await?;
    let artists = resolve_artists(store, &shows).await?;

    shows
        .iter()
        .map(|show| -> Result<ShowListingEntry> {
            let venue = venues
                .get(&show.venue_id)
                .ok_or_else(|| EncoreError::missing_counterpart(show.id, "Venue", show.venue_id))?;
            let artist = artists.get(&show.artist_id).ok_or_else(|| {
                EncoreError::missing_counterpart(show.id, "Artist", show.artist_id)
            })?;

            Ok(ShowListingEntry {
                venue_id: venue.id,
                venue_name: venue.name.clone(),
                artist_id: artist.id,
                artist_name: artist.name.clone(),
                artist_image_link: artist.image_link.clone(),
                start_time: format_timestamp(&show.start_time),
            })
        })
        .collect()
}

/// Id and name of every artist, in store order
pub async fn artist_directory<S>(store: &S) -> Result<Vec<ArtistSummary>>
where
    S: StorageContext + ?Sized,
{
    let artists = store.get_all_artists().await?;
    Ok(artists
        .into_iter()
        .map(|artist| ArtistSummary {
            id: artist.id,
            name: artist.name,
        })
        .collect())
}

/// Number of venues per (city, state)
pub async fn location_summary<S>(store: &S) -> Result<Vec<LocationCount>>
where
    S: StorageContext + ?Sized,
{
    store.count_venues_by_location().await
}

/// Upcoming show count per owning entity of kind `E`
pub(crate) fn upcoming_by_owner<E: Listing>(
    shows: &[Show],
    reference_time: NaiveDateTime,
) -> HashMap<i64, usize> {
    let mut owned: HashMap<i64, Vec<&Show>> = HashMap::new();
    for show in shows {
        owned.entry(E::owner_of(show)).or_default().push(show);
    }

    owned
        .into_iter()
        .map(|(owner, shows)| (owner, count_upcoming(shows, reference_time)))
        .collect()
}

async fn resolve_artists<S>(store: &S, shows: &[Show]) -> Result<HashMap<ArtistId, Artist>>
where
    S: StorageContext + ?Sized,
{
    let mut artists = HashMap::new();
    for show in shows {
        if artists.contains_key(&show.artist_id) {
            continue;
        }
        if let Some(artist) = store.get_artist(show.artist_id).await? {
            artists.insert(show.artist_id, artist);
        }
    }
    Ok(artists)
}

async fn resolve_venues<S>(store: &S, shows: &[Show]) -> Result<HashMap<VenueId, Venue>>
where
    S: StorageContext + ?Sized,
{
    let mut venues = HashMap::new();
    for show in shows {
        if venues.contains_key(&show.venue_id) {
            continue;
        }
        if let Some(venue) = store.get_venue(show.venue_id).await? {
            venues.insert(show.venue_id, venue);
        }
    }
    Ok(venues)
}
