//! Artist database operations

use crate::db::contains_pattern;
use crate::db::models::{Artist, ArtistProfile, ArtistShow, Summary};
use crate::genres::{decode_genres, encode_genres};
use crate::{Error, Result};
use chrono::NaiveDateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// All artists ordered by name, each with its upcoming show count
pub async fn list_artists(pool: &SqlitePool, now: NaiveDateTime) -> Result<Vec<Summary>> {
    let rows = sqlx::query(
        r#"
        SELECT a.id, a.name, COUNT(s.id) AS num_upcoming_shows
        FROM artists a
        LEFT JOIN shows s ON s.artist_id = a.id AND s.start_time >= ?
        GROUP BY a.id, a.name
        ORDER BY a.name, a.id
        "#,
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(summary_from_row).collect())
}

/// Case-insensitive substring search over name, city and state
pub async fn search_artists(
    pool: &SqlitePool,
    term: &str,
    now: NaiveDateTime,
) -> Result<Vec<Summary>> {
    let pattern = contains_pattern(term);

    let rows = sqlx::query(
        r#"
        SELECT a.id, a.name, COUNT(s.id) AS num_upcoming_shows
        FROM artists a
        LEFT JOIN shows s ON s.artist_id = a.id AND s.start_time >= ?
        WHERE a.name LIKE ? ESCAPE '\'
           OR a.city LIKE ? ESCAPE '\'
           OR a.state LIKE ? ESCAPE '\'
        GROUP BY a.id, a.name
        ORDER BY a.name, a.id
        "#,
    )
    .bind(now)
    .bind(&pattern)
    .bind(&pattern)
    .bind(&pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(summary_from_row).collect())
}

/// Load artist by id
pub async fn get_artist(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let row = sqlx::query(
        r#"
        SELECT id, name, city, state, phone, image_link, website, facebook_link,
               seeking_venue, seeking_description, genres
        FROM artists
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(artist_from_row))
}

/// All shows for an artist, ordered by start time, with venue name and image
pub async fn artist_shows(pool: &SqlitePool, artist_id: i64) -> Result<Vec<ArtistShow>> {
    let rows = sqlx::query(
        r#"
        SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
               s.start_time
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        WHERE s.artist_id = ?
        ORDER BY s.start_time, s.id
        "#,
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| ArtistShow {
            venue_id: row.get("venue_id"),
            venue_name: row.get("venue_name"),
            venue_image_link: row.get("venue_image_link"),
            start_time: row.get("start_time"),
        })
        .collect())
}

/// Insert an artist, returning its new id
pub async fn insert_artist(pool: &SqlitePool, artist: &ArtistProfile) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO artists (
            name, city, state, phone, image_link, website, facebook_link,
            seeking_venue, seeking_description, genres
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.image_link)
    .bind(&artist.website)
    .bind(&artist.facebook_link)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .bind(encode_genres(&artist.genres))
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite every editable column of an existing artist
pub async fn update_artist(pool: &SqlitePool, id: i64, artist: &ArtistProfile) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE artists SET
            name = ?, city = ?, state = ?, phone = ?, image_link = ?,
            website = ?, facebook_link = ?, seeking_venue = ?,
            seeking_description = ?, genres = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.image_link)
    .bind(&artist.website)
    .bind(&artist.facebook_link)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .bind(encode_genres(&artist.genres))
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("artist {}", id)));
    }

    Ok(())
}

/// Delete an artist and all of their shows, in one transaction
///
/// Returns the number of shows removed.
pub async fn delete_artist(pool: &SqlitePool, id: i64) -> Result<u64> {
    let mut tx = pool.begin().await?;

    let shows = sqlx::query("DELETE FROM shows WHERE artist_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let artists = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if artists == 0 {
        return Err(Error::NotFound(format!("artist {}", id)));
    }

    tx.commit().await?;
    Ok(shows)
}

fn summary_from_row(row: &SqliteRow) -> Summary {
    Summary {
        id: row.get("id"),
        name: row.get("name"),
        num_upcoming_shows: row.get("num_upcoming_shows"),
    }
}

fn artist_from_row(row: &SqliteRow) -> Artist {
    let genres: String = row.get("genres");

    Artist {
        id: row.get("id"),
        profile: ArtistProfile {
            name: row.get("name"),
            city: row.get("city"),
            state: row.get("state"),
            phone: row.get("phone"),
            image_link: row.get("image_link"),
            website: row.get("website"),
            facebook_link: row.get("facebook_link"),
            seeking_venue: row.get("seeking_venue"),
            seeking_description: row.get("seeking_description"),
            genres: decode_genres(&genres),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init::init_memory_database;

    fn guns_n_petals() -> ArtistProfile {
        ArtistProfile {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: Some("326-123-5000".to_string()),
            website: Some("https://www.gunsnpetalsband.com".to_string()),
            seeking_venue: true,
            seeking_description: Some("Looking for shows in the Bay Area".to_string()),
            genres: vec!["Rock n Roll".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_save_and_load_artist() {
        let pool = init_memory_database().await.expect("schema");

        let id = insert_artist(&pool, &guns_n_petals()).await.expect("insert");
        let loaded = get_artist(&pool, id)
            .await
            .expect("query")
            .expect("artist exists");

        assert_eq!(loaded.profile, guns_n_petals());
    }

    #[tokio::test]
    async fn test_list_artists_sorted_by_name() {
        let pool = init_memory_database().await.expect("schema");
        insert_artist(&pool, &guns_n_petals()).await.unwrap();
        let mut quevedo = guns_n_petals();
        quevedo.name = "Matt Quevedo".to_string();
        insert_artist(&pool, &quevedo).await.unwrap();
        let mut sax = guns_n_petals();
        sax.name = "The Wild Sax Band".to_string();
        insert_artist(&pool, &sax).await.unwrap();

        let names: Vec<String> = list_artists(&pool, crate::datetime::now_local())
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();

        assert_eq!(names, vec!["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"]);
    }

    #[tokio::test]
    async fn test_search_artists_case_insensitive() {
        let pool = init_memory_database().await.expect("schema");
        insert_artist(&pool, &guns_n_petals()).await.unwrap();
        let mut sax = guns_n_petals();
        sax.name = "The Wild Sax Band".to_string();
        sax.city = "Portland".to_string();
        sax.state = "OR".to_string();
        insert_artist(&pool, &sax).await.unwrap();

        let now = crate::datetime::now_local();
        let found = search_artists(&pool, "BAND", now).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "The Wild Sax Band");

        assert_eq!(search_artists(&pool, "A", now).await.unwrap().len(), 2);
        assert!(search_artists(&pool, "zzz", now).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_artist() {
        let pool = init_memory_database().await.expect("schema");
        assert!(matches!(
            update_artist(&pool, 9, &guns_n_petals()).await,
            Err(Error::NotFound(_))
        ));
        assert!(matches!(delete_artist(&pool, 9).await, Err(Error::NotFound(_))));
    }
}
