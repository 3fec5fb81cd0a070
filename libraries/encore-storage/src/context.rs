use crate::{artists, shows, venues};
use async_trait::async_trait;
use encore_core::{
    error::{Result, WriteResult},
    storage::StorageContext,
    types::{
        Artist, ArtistId, CreateArtist, CreateShow, CreateVenue, LocationCount, Show, Venue,
        VenueId,
    },
};
use sqlx::SqlitePool;

/// Local storage context using `SQLite`
#[derive(Clone)]
pub struct LocalStorageContext {
    pool: SqlitePool,
}

impl LocalStorageContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl StorageContext for LocalStorageContext {
    // Venues
    async fn get_venue(&self, id: VenueId) -> Result<Option<Venue>> {
        venues::get_by_id(&self.pool, id).await
    }

    async fn get_all_venues(&self) -> Result<Vec<Venue>> {
        venues::get_all(&self.pool).await
    }

    async fn count_venues_by_location(&self) -> Result<Vec<LocationCount>> {
        venues::count_by_location(&self.pool).await
    }

    async fn create_venue(&self, venue: CreateVenue) -> WriteResult<Venue> {
        venues::create(&self.pool, venue).await
    }

    async fn update_venue(&self, id: VenueId, venue: CreateVenue) -> WriteResult<Venue> {
        venues::update(&self.pool, id, venue).await
    }

    async fn delete_venue(&self, id: VenueId) -> WriteResult<()> {
        venues::delete(&self.pool, id).await
    }

    // Artists
    async fn get_artist(&self, id: ArtistId) -> Result<Option<Artist>> {
        artists::get_by_id(&self.pool, id).await
    }

    async fn get_all_artists(&self) -> Result<Vec<Artist>> {
        artists::get_all(&self.pool).await
    }

    async fn create_artist(&self, artist: CreateArtist) -> WriteResult<Artist> {
        artists::create(&self.pool, artist).await
    }

    async fn update_artist(&self, id: ArtistId, artist: CreateArtist) -> WriteResult<Artist> {
        artists::update(&self.pool, id, artist).await
    }

    // Shows
    async fn get_all_shows(&self) -> Result<Vec<Show>> {
        shows::get_all(&self.pool).await
    }

    async fn get_shows_by_venue(&self, venue_id: VenueId) -> Result<Vec<Show>> {
        shows::get_by_venue(&self.pool, venue_id).await
    }

    async fn get_shows_by_artist(&self, artist_id: ArtistId) -> Result<Vec<Show>> {
        shows::get_by_artist(&self.pool, artist_id).await
    }

    async fn create_show(&self, show: CreateShow) -> WriteResult<Show> {
        shows::create(&self.pool, show).await
    }
}
