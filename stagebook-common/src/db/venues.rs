//! Venue database operations

use crate::db::contains_pattern;
use crate::db::models::{Area, Summary, Venue, VenueProfile, VenueShow};
use crate::genres::{decode_genres, encode_genres};
use crate::{Error, Result};
use chrono::NaiveDateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

/// All venues grouped by (city, state), each with its upcoming show count
///
/// Areas are ordered by state then city; venues within an area by name.
pub async fn list_areas(pool: &SqlitePool, now: NaiveDateTime) -> Result<Vec<Area>> {
    let rows = sqlx::query(
        r#"
        SELECT v.id, v.name, v.city, v.state, COUNT(s.id) AS num_upcoming_shows
        FROM venues v
        LEFT JOIN shows s ON s.venue_id = v.id AND s.start_time >= ?
        GROUP BY v.id, v.name, v.city, v.state
        ORDER BY v.state, v.city, v.name, v.id
        "#,
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    let mut areas: Vec<Area> = Vec::new();
    for row in rows {
        let city: String = row.get("city");
        let state: String = row.get("state");
        let venue = Summary {
            id: row.get("id"),
            name: row.get("name"),
            num_upcoming_shows: row.get("num_upcoming_shows"),
        };

        // Rows arrive sorted by area, so a new area starts whenever the pair changes
        match areas.last_mut() {
            Some(area) if area.city == city && area.state == state => area.venues.push(venue),
            _ => areas.push(Area {
                city,
                state,
                venues: vec![venue],
            }),
        }
    }

    Ok(areas)
}

/// Case-insensitive substring search over name, city and state
pub async fn search_venues(
    pool: &SqlitePool,
    term: &str,
    now: NaiveDateTime,
) -> Result<Vec<Summary>> {
    let pattern = contains_pattern(term);
    debug!("Venue search pattern: {}", pattern);

    let rows = sqlx::query(
        r#"
        SELECT v.id, v.name, COUNT(s.id) AS num_upcoming_shows
        FROM venues v
        LEFT JOIN shows s ON s.venue_id = v.id AND s.start_time >= ?
        WHERE v.name LIKE ? ESCAPE '\'
           OR v.city LIKE ? ESCAPE '\'
           OR v.state LIKE ? ESCAPE '\'
        GROUP BY v.id, v.name
        ORDER BY v.name, v.id
        "#,
    )
    .bind(now)
    .bind(&pattern)
    .bind(&pattern)
    .bind(&pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| Summary {
            id: row.get("id"),
            name: row.get("name"),
            num_upcoming_shows: row.get("num_upcoming_shows"),
        })
        .collect())
}

/// Load venue by id
pub async fn get_venue(pool: &SqlitePool, id: i64) -> Result<Option<Venue>> {
    let row = sqlx::query(
        r#"
        SELECT id, name, city, state, address, phone, image_link, website,
               facebook_link, seeking_talent, seeking_description, genres
        FROM venues
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(venue_from_row))
}

/// All shows at a venue, ordered by start time, with artist name and image
pub async fn venue_shows(pool: &SqlitePool, venue_id: i64) -> Result<Vec<VenueShow>> {
    let rows = sqlx::query(
        r#"
        SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
               s.start_time
        FROM shows s
        JOIN artists a ON a.id = s.artist_id
        WHERE s.venue_id = ?
        ORDER BY s.start_time, s.id
        "#,
    )
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| VenueShow {
            artist_id: row.get("artist_id"),
            artist_name: row.get("artist_name"),
            artist_image_link: row.get("artist_image_link"),
            start_time: row.get("start_time"),
        })
        .collect())
}

/// Insert a venue, returning its new id
pub async fn insert_venue(pool: &SqlitePool, venue: &VenueProfile) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO venues (
            name, city, state, address, phone, image_link, website,
            facebook_link, seeking_talent, seeking_description, genres
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.image_link)
    .bind(&venue.website)
    .bind(&venue.facebook_link)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .bind(encode_genres(&venue.genres))
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite every editable column of an existing venue
pub async fn update_venue(pool: &SqlitePool, id: i64, venue: &VenueProfile) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE venues SET
            name = ?, city = ?, state = ?, address = ?, phone = ?,
            image_link = ?, website = ?, facebook_link = ?,
            seeking_talent = ?, seeking_description = ?, genres = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.image_link)
    .bind(&venue.website)
    .bind(&venue.facebook_link)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .bind(encode_genres(&venue.genres))
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    Ok(())
}

/// Delete a venue and every show booked there, in one transaction
///
/// Returns the number of shows removed.
pub async fn delete_venue(pool: &SqlitePool, id: i64) -> Result<u64> {
    let mut tx = pool.begin().await?;

    let shows = sqlx::query("DELETE FROM shows WHERE venue_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let venues = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if venues == 0 {
        // Dropping the transaction rolls it back
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    tx.commit().await?;
    Ok(shows)
}

fn venue_from_row(row: &SqliteRow) -> Venue {
    let genres: String = row.get("genres");

    Venue {
        id: row.get("id"),
        profile: VenueProfile {
            name: row.get("name"),
            city: row.get("city"),
            state: row.get("state"),
            address: row.get("address"),
            phone: row.get("phone"),
            image_link: row.get("image_link"),
            website: row.get("website"),
            facebook_link: row.get("facebook_link"),
            seeking_talent: row.get("seeking_talent"),
            seeking_description: row.get("seeking_description"),
            genres: decode_genres(&genres),
        },
    }
}
