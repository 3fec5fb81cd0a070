//! Storage trait for the booking directory

use crate::error::{Result, WriteResult};
use crate::types::{
    Artist, ArtistId, CreateArtist, CreateShow, CreateVenue, LocationCount, Show, Venue, VenueId,
};
use async_trait::async_trait;

/// Predicate used by the filter queries
pub type Predicate<'a, T> = &'a (dyn Fn(&T) -> bool + Send + Sync);

/// Storage context providing access to venues, artists and shows
///
/// Aggregation and search functions receive a handle to an implementation
/// of this trait instead of reaching for a global database. Reads return
/// entities in the store's natural (insertion) order. Each write runs in
/// its own transaction and either commits fully or leaves the store
/// untouched.
#[async_trait]
pub trait StorageContext: Send + Sync {
    // ========================================================================
    // Venues
    // ========================================================================

    /// Get venue by ID
    async fn get_venue(&self, id: VenueId) -> Result<Option<Venue>>;

    /// Get all venues
    async fn get_all_venues(&self) -> Result<Vec<Venue>>;

    /// Get the venues accepted by `predicate`
    async fn filter_venues(&self, predicate: Predicate<'_, Venue>) -> Result<Vec<Venue>> {
        let venues = self.get_all_venues().await?;
        Ok(venues.into_iter().filter(|v| predicate(v)).collect())
    }

    /// Count venues per (city, state), in order of first occurrence
    async fn count_venues_by_location(&self) -> Result<Vec<LocationCount>>;

    /// Create a new venue
    async fn create_venue(&self, venue: CreateVenue) -> WriteResult<Venue>;

    /// Replace the editable fields of a venue
    async fn update_venue(&self, id: VenueId, venue: CreateVenue) -> WriteResult<Venue>;

    /// Delete a venue and the shows it hosts
    async fn delete_venue(&self, id: VenueId) -> WriteResult<()>;

    // ========================================================================
    // Artists
    // ========================================================================

    /// Get artist by ID
    async fn get_artist(&self, id: ArtistId) -> Result<Option<Artist>>;

    /// Get all artists
    async fn get_all_artists(&self) -> Result<Vec<Artist>>;

    /// Get the artists accepted by `predicate`
    async fn filter_artists(&self, predicate: Predicate<'_, Artist>) -> Result<Vec<Artist>> {
        let artists = self.get_all_artists().await?;
        Ok(artists.into_iter().filter(|a| predicate(a)).collect())
    }

    /// Create a new artist
    async fn create_artist(&self, artist: CreateArtist) -> WriteResult<Artist>;

    /// Replace the editable fields of an artist
    async fn update_artist(&self, id: ArtistId, artist: CreateArtist) -> WriteResult<Artist>;

    // ========================================================================
    // Shows
    // ========================================================================

    /// Get all shows, regardless of start time
    async fn get_all_shows(&self) -> Result<Vec<Show>>;

    /// Get shows hosted by a venue
    async fn get_shows_by_venue(&self, venue_id: VenueId) -> Result<Vec<Show>>;

    /// Get shows performed by an artist
    async fn get_shows_by_artist(&self, artist_id: ArtistId) -> Result<Vec<Show>>;

    /// Create a new show
    ///
    /// Fails with a constraint violation when either reference does not
    /// resolve.
    async fn create_show(&self, show: CreateShow) -> WriteResult<Show>;
}
