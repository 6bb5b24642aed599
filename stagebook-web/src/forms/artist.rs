//! Artist create/edit form

use stagebook_common::db::ArtistProfile;

use super::fields::{self, LINK_MAX, NAME_MAX};
use super::{FieldErrors, FormData};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub website: String,
    pub facebook_link: String,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn from_form(data: &FormData) -> Self {
        Self {
            name: data.text("name"),
            city: data.text("city"),
            state: data.text("state"),
            phone: data.text("phone"),
            image_link: data.text("image_link"),
            website: data.text("website"),
            facebook_link: data.text("facebook_link"),
            genres: data.values("genres"),
            seeking_venue: fields::checkbox(data.value("seeking_venue")),
            seeking_description: data.text("seeking_description"),
        }
    }

    pub fn from_profile(artist: &ArtistProfile) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            website: artist.website.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            genres: artist.genres.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }

    /// Validate every field; the description is only kept while seeking a venue
    pub fn validate(&self) -> Result<ArtistProfile, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = errors.check("name", fields::required(&self.name, NAME_MAX));
        let city = errors.check("city", fields::required(&self.city, NAME_MAX));
        let state = errors.check("state", fields::state(&self.state));
        let phone = errors.check("phone", fields::phone(&self.phone));
        let image_link = errors.check("image_link", fields::link(&self.image_link, LINK_MAX));
        let website = errors.check("website", fields::link(&self.website, LINK_MAX));
        // Artist facebook links share the short column width
        let facebook_link =
            errors.check("facebook_link", fields::link(&self.facebook_link, NAME_MAX));
        let genres = errors.check("genres", fields::genres(&self.genres));
        let seeking_description = if self.seeking_venue {
            errors.check(
                "seeking_description",
                fields::optional(&self.seeking_description, NAME_MAX),
            )
        } else {
            Some(None)
        };

        match (
            name,
            city,
            state,
            phone,
            image_link,
            website,
            facebook_link,
            genres,
            seeking_description,
        ) {
            (
                Some(name),
                Some(city),
                Some(state),
                Some(phone),
                Some(image_link),
                Some(website),
                Some(facebook_link),
                Some(genres),
                Some(seeking_description),
            ) if errors.is_empty() => Ok(ArtistProfile {
                name,
                city,
                state,
                phone,
                image_link,
                website,
                facebook_link,
                seeking_venue: self.seeking_venue,
                seeking_description,
                genres,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wild_sax_band() -> ArtistForm {
        ArtistForm {
            name: "The Wild Sax Band".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "432-325-5432".to_string(),
            image_link: "https://images.example.com/sax.jpg".to_string(),
            genres: vec!["Jazz".to_string(), "Classical".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form() {
        let artist = wild_sax_band().validate().expect("valid");
        assert_eq!(artist.genres, vec!["Jazz", "Classical"]);
        assert!(!artist.seeking_venue);
        assert_eq!(artist.seeking_description, None);
        assert_eq!(ArtistForm::from_profile(&artist), wild_sax_band());
    }

    #[test]
    fn test_missing_genres_rejected() {
        let mut form = wild_sax_band();
        form.genres.clear();
        let errors = form.validate().expect_err("genres required");
        assert_eq!(errors.len(), 1);
        assert!(errors.get("genres").is_some());
    }

    #[test]
    fn test_long_facebook_link_rejected() {
        let mut form = wild_sax_band();
        form.facebook_link = format!("https://www.facebook.com/{}", "x".repeat(120));
        let errors = form.validate().expect_err("too long");
        assert!(errors.get("facebook_link").is_some());
    }

    #[test]
    fn test_seeking_venue_keeps_description() {
        let data = FormData::new(vec![
            ("name".to_string(), "Guns N Petals".to_string()),
            ("city".to_string(), "San Francisco".to_string()),
            ("state".to_string(), "CA".to_string()),
            ("genres".to_string(), "Rock n Roll".to_string()),
            ("seeking_venue".to_string(), "y".to_string()),
            ("seeking_description".to_string(), "Looking for shows".to_string()),
        ]);

        let artist = ArtistForm::from_form(&data).validate().expect("valid");
        assert!(artist.seeking_venue);
        assert_eq!(artist.seeking_description.as_deref(), Some("Looking for shows"));
    }
}
