//! Database models

use chrono::NaiveDateTime;
use serde::Serialize;

/// Editable venue columns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VenueProfile {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Venue {
    pub id: i64,
    #[serde(flatten)]
    pub profile: VenueProfile,
}

/// Editable artist columns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArtistProfile {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artist {
    pub id: i64,
    #[serde(flatten)]
    pub profile: ArtistProfile,
}

/// Show to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: NaiveDateTime,
}

/// Venue or artist row with its upcoming show count (list and search pages)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Venues sharing one (city, state) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<Summary>,
}

/// Show as listed on a venue page, enriched with the artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// Show as listed on an artist page, enriched with the venue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// Show as listed on the shows page, with both sides denormalized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    pub id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// Anything with a scheduled start time
pub trait Scheduled {
    fn start_time(&self) -> NaiveDateTime;
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }
}

impl Scheduled for ShowListing {
    fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }
}

/// Shows split into past (before now) and upcoming (now or later)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowSplit<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T: Scheduled> ShowSplit<T> {
    /// Partition `shows` around `now`; every show lands in exactly one side
    pub fn new(shows: Vec<T>, now: NaiveDateTime) -> Self {
        let (past, upcoming) = shows.into_iter().partition(|s| s.start_time() < now);
        Self { past, upcoming }
    }
}

impl<T> ShowSplit<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn show_at(start_time: NaiveDateTime) -> VenueShow {
        VenueShow {
            artist_id: 1,
            artist_name: "Guns N Petals".to_string(),
            artist_image_link: None,
            start_time,
        }
    }

    #[test]
    fn test_split_partitions_around_now() {
        let now = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap();
        let shows = vec![
            show_at(now - Duration::days(3)),
            show_at(now),
            show_at(now + Duration::hours(1)),
            show_at(now - Duration::seconds(1)),
        ];

        let split = ShowSplit::new(shows, now);

        assert_eq!(split.past_count(), 2);
        assert_eq!(split.upcoming_count(), 2);
        assert!(split.past.iter().all(|s| s.start_time < now));
        // A show starting exactly now counts as upcoming
        assert!(split.upcoming.iter().any(|s| s.start_time == now));
    }

    #[test]
    fn test_split_empty() {
        let split: ShowSplit<VenueShow> = ShowSplit::new(Vec::new(), chrono::Local::now().naive_local());
        assert_eq!(split.past_count(), 0);
        assert_eq!(split.upcoming_count(), 0);
    }
}
