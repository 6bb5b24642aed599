//! Show database operations
//!
//! Shows carry no booking logic: two shows for the same artist or venue may
//! overlap freely.

use crate::db::models::{NewShow, ShowListing};
use crate::Result;
use sqlx::{Row, SqlitePool};

/// Every show ordered by start time, with venue and artist denormalized
pub async fn list_shows(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let rows = sqlx::query(
        r#"
        SELECT s.id, s.venue_id, v.name AS venue_name,
               s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
               s.start_time
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        JOIN artists a ON a.id = s.artist_id
        ORDER BY s.start_time, s.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| ShowListing {
            id: row.get("id"),
            venue_id: row.get("venue_id"),
            venue_name: row.get("venue_name"),
            artist_id: row.get("artist_id"),
            artist_name: row.get("artist_name"),
            artist_image_link: row.get("artist_image_link"),
            start_time: row.get("start_time"),
        })
        .collect())
}

/// Insert a show, returning its new id
///
/// A missing artist or venue fails on the foreign key constraint.
pub async fn insert_show(pool: &SqlitePool, show: &NewShow) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO shows (artist_id, venue_id, start_time)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(show.artist_id)
    .bind(show.venue_id)
    .bind(show.start_time)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::artists::insert_artist;
    use crate::db::init::init_memory_database;
    use crate::db::models::{ArtistProfile, VenueProfile};
    use crate::db::venues::insert_venue;
    use crate::Error;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_insert_and_list_show() {
        let pool = init_memory_database().await.expect("schema");
        let venue_id = insert_venue(
            &pool,
            &VenueProfile {
                name: "The Musical Hop".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                address: "1015 Folsom Street".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let artist_id = insert_artist(
            &pool,
            &ArtistProfile {
                name: "Guns N Petals".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                image_link: Some("https://example.com/petals.jpg".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let start_time = NaiveDate::from_ymd_opt(2019, 5, 21)
            .unwrap()
            .and_hms_opt(21, 30, 0)
            .unwrap();
        insert_show(&pool, &NewShow { artist_id, venue_id, start_time })
            .await
            .expect("insert show");

        let shows = list_shows(&pool).await.unwrap();
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].venue_name, "The Musical Hop");
        assert_eq!(shows[0].artist_name, "Guns N Petals");
        assert_eq!(shows[0].artist_image_link.as_deref(), Some("https://example.com/petals.jpg"));
        // Stored as a timestamp, read back unchanged
        assert_eq!(shows[0].start_time, start_time);
    }

    #[tokio::test]
    async fn test_insert_show_requires_existing_artist_and_venue() {
        let pool = init_memory_database().await.expect("schema");

        let result = insert_show(
            &pool,
            &NewShow {
                artist_id: 1,
                venue_id: 1,
                start_time: chrono::Local::now().naive_local(),
            },
        )
        .await;

        assert!(matches!(result, Err(Error::Database(_))));
    }
}
