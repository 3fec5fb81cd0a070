use crate::columns::{decode_genres, encode_genres};
use encore_core::{
    error::{PersistenceError, Result, WriteResult},
    types::{Artist, ArtistId, CreateArtist},
};
use sqlx::{sqlite::SqliteRow, Row, Sqlite, SqlitePool};

const SELECT_ARTIST: &str = "SELECT id, name, city, state, phone, website, facebook_link,
            image_link, genres, seeking_venue, seeking_description
     FROM artists";

fn from_row(row: &SqliteRow) -> std::result::Result<Artist, sqlx::Error> {
    let genres: String = row.try_get("genres")?;
    Ok(Artist {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        phone: row.try_get("phone")?,
        website: row.try_get("website")?,
        facebook_link: row.try_get("facebook_link")?,
        image_link: row.try_get("image_link")?,
        genres: decode_genres(&genres)?,
        seeking_venue: row.try_get("seeking_venue")?,
        seeking_description: row.try_get("seeking_description")?,
    })
}

async fn select_by_id<'e, E>(
    executor: E,
    id: ArtistId,
) -> std::result::Result<Option<Artist>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let sql = format!("{SELECT_ARTIST} WHERE id = ?");
    let row = sqlx::query(&sql).bind(id).fetch_optional(executor).await?;
    row.as_ref().map(from_row).transpose()
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let sql = format!("{SELECT_ARTIST} ORDER BY id");
    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    Ok(rows
        .iter()
        .map(from_row)
        .collect::<std::result::Result<Vec<_>, _>>()?)
}

pub async fn get_by_id(pool: &SqlitePool, id: ArtistId) -> Result<Option<Artist>> {
    Ok(select_by_id(pool, id).await?)
}

pub async fn create(pool: &SqlitePool, artist: CreateArtist) -> WriteResult<Artist> {
    let genres = encode_genres(&artist.genres)?;
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "INSERT INTO artists (name, city, state, phone, website, facebook_link,
                              image_link, genres, seeking_venue, seeking_description)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.website)
    .bind(&artist.facebook_link)
    .bind(&artist.image_link)
    .bind(&genres)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .execute(&mut *tx)
    .await?;

    let id = result.last_insert_rowid();
    let created = select_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| PersistenceError::Backend("Failed to retrieve created artist".into()))?;

    tx.commit().await?;
    tracing::info!(artist_id = id, name = %created.name, "Artist created");

    Ok(created)
}

pub async fn update(pool: &SqlitePool, id: ArtistId, artist: CreateArtist) -> WriteResult<Artist> {
    let genres = encode_genres(&artist.genres)?;
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "UPDATE artists
         SET name = ?, city = ?, state = ?, phone = ?, website = ?, facebook_link = ?,
             image_link = ?, genres = ?, seeking_venue = ?, seeking_description = ?,
             updated_at = datetime('now')
         WHERE id = ?",
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.website)
    .bind(&artist.facebook_link)
    .bind(&artist.image_link)
    .bind(&genres)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(PersistenceError::not_found("Artist", id));
    }

    let updated = select_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| PersistenceError::not_found("Artist", id))?;

    tx.commit().await?;
    tracing::info!(artist_id = id, "Artist updated");

    Ok(updated)
}
