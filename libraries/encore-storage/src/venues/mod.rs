use crate::columns::{decode_genres, encode_genres};
use encore_core::{
    error::{PersistenceError, Result, WriteResult},
    types::{CreateVenue, LocationCount, Venue, VenueId},
};
use sqlx::{sqlite::SqliteRow, Row, Sqlite, SqlitePool};

const SELECT_VENUE: &str = "SELECT id, name, city, state, address, phone, website, facebook_link,
            image_link, genres, seeking_talent, seeking_description
     FROM venues";

fn from_row(row: &SqliteRow) -> std::result::Result<Venue, sqlx::Error> {
    let genres: String = row.try_get("genres")?;
    Ok(Venue {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        address: row.try_get("address")?,
        phone: row.try_get("phone")?,
        website: row.try_get("website")?,
        facebook_link: row.try_get("facebook_link")?,
        image_link: row.try_get("image_link")?,
        genres: decode_genres(&genres)?,
        seeking_talent: row.try_get("seeking_talent")?,
        seeking_description: row.try_get("seeking_description")?,
    })
}

async fn select_by_id<'e, E>(executor: E, id: VenueId) -> std::result::Result<Option<Venue>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let sql = format!("{SELECT_VENUE} WHERE id = ?");
    let row = sqlx::query(&sql).bind(id).fetch_optional(executor).await?;
    row.as_ref().map(from_row).transpose()
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Venue>> {
    let sql = format!("{SELECT_VENUE} ORDER BY id");
    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    Ok(rows
        .iter()
        .map(from_row)
        .collect::<std::result::Result<Vec<_>, _>>()?)
}

pub async fn get_by_id(pool: &SqlitePool, id: VenueId) -> Result<Option<Venue>> {
    Ok(select_by_id(pool, id).await?)
}

/// Venue counts per (city, state), ordered by the first venue listed there
pub async fn count_by_location(pool: &SqlitePool) -> Result<Vec<LocationCount>> {
    let rows = sqlx::query(
        "SELECT city, state, COUNT(id) AS venue_count
         FROM venues
         GROUP BY city, state
         ORDER BY MIN(id)",
    )
    .fetch_all(pool)
    .await?;

    let mut counts = Vec::with_capacity(rows.len());
    for row in &rows {
        counts.push(LocationCount {
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            count: row.try_get("venue_count")?,
        });
    }
    Ok(counts)
}

pub async fn create(pool: &SqlitePool, venue: CreateVenue) -> WriteResult<Venue> {
    let genres = encode_genres(&venue.genres)?;
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "INSERT INTO venues (name, city, state, address, phone, website, facebook_link,
                             image_link, genres, seeking_talent, seeking_description)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.website)
    .bind(&venue.facebook_link)
    .bind(&venue.image_link)
    .bind(&genres)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .execute(&mut *tx)
    .await?;

    let id = result.last_insert_rowid();
    let created = select_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| PersistenceError::Backend("Failed to retrieve created venue".into()))?;

    tx.commit().await?;
    tracing::info!(venue_id = id, name = %created.name, "Venue created");

    Ok(created)
}

pub async fn update(pool: &SqlitePool, id: VenueId, venue: CreateVenue) -> WriteResult<Venue> {
    let genres = encode_genres(&venue.genres)?;
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "UPDATE venues
         SET name = ?, city = ?, state = ?, address = ?, phone = ?, website = ?,
             facebook_link = ?, image_link = ?, genres = ?, seeking_talent = ?,
             seeking_description = ?, updated_at = datetime('now')
         WHERE id = ?",
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.website)
    .bind(&venue.facebook_link)
    .bind(&venue.image_link)
    .bind(&genres)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(PersistenceError::not_found("Venue", id));
    }

    let updated = select_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| PersistenceError::not_found("Venue", id))?;

    tx.commit().await?;
    tracing::info!(venue_id = id, "Venue updated");

    Ok(updated)
}

/// Delete a venue; its shows go with it
pub async fn delete(pool: &SqlitePool, id: VenueId) -> WriteResult<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(PersistenceError::not_found("Venue", id));
    }

    tx.commit().await?;
    tracing::info!(venue_id = id, "Venue deleted");

    Ok(())
}
