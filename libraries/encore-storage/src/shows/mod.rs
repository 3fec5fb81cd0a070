use crate::columns::{decode_start_time, encode_start_time};
use encore_core::{
    error::{PersistenceError, Result, WriteResult},
    types::{ArtistId, CreateShow, Show, VenueId},
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

fn from_row(row: &SqliteRow) -> std::result::Result<Show, sqlx::Error> {
    let start_time: String = row.try_get("start_time")?;
    Ok(Show {
        id: row.try_get("id")?,
        venue_id: row.try_get("venue_id")?,
        artist_id: row.try_get("artist_id")?,
        start_time: decode_start_time(&start_time)?,
    })
}

fn collect(rows: &[SqliteRow]) -> Result<Vec<Show>> {
    Ok(rows
        .iter()
        .map(from_row)
        .collect::<std::result::Result<Vec<_>, _>>()?)
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Show>> {
    let rows = sqlx::query(
        "SELECT id, venue_id, artist_id, start_time
         FROM shows
         ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    collect(&rows)
}

pub async fn get_by_venue(pool: &SqlitePool, venue_id: VenueId) -> Result<Vec<Show>> {
    let rows = sqlx::query(
        "SELECT id, venue_id, artist_id, start_time
         FROM shows
         WHERE venue_id = ?
         ORDER BY id",
    )
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    collect(&rows)
}

pub async fn get_by_artist(pool: &SqlitePool, artist_id: ArtistId) -> Result<Vec<Show>> {
    let rows = sqlx::query(
        "SELECT id, venue_id, artist_id, start_time
         FROM shows
         WHERE artist_id = ?
         ORDER BY id",
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    collect(&rows)
}

/// Record a show after checking that both references resolve
pub async fn create(pool: &SqlitePool, show: CreateShow) -> WriteResult<Show> {
    let mut tx = pool.begin().await?;

    let venue_exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM venues WHERE id = ?)")
        .bind(show.venue_id)
        .fetch_one(&mut *tx)
        .await?;
    if !venue_exists {
        return Err(PersistenceError::ConstraintViolation(format!(
            "Venue {} does not exist",
            show.venue_id
        )));
    }

    let artist_exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM artists WHERE id = ?)")
            .bind(show.artist_id)
            .fetch_one(&mut *tx)
            .await?;
    if !artist_exists {
        return Err(PersistenceError::ConstraintViolation(format!(
            "Artist {} does not exist",
            show.artist_id
        )));
    }

    let result = sqlx::query("INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?, ?, ?)")
        .bind(show.venue_id)
        .bind(show.artist_id)
        .bind(encode_start_time(&show.start_time))
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    let id = result.last_insert_rowid();
    tracing::info!(
        show_id = id,
        venue_id = show.venue_id,
        artist_id = show.artist_id,
        "Show created"
    );

    Ok(Show {
        id,
        venue_id: show.venue_id,
        artist_id: show.artist_id,
        start_time: show.start_time,
    })
}
