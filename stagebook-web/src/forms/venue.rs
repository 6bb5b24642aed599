//! Venue create/edit form

use stagebook_common::db::VenueProfile;

use super::fields::{self, LINK_MAX, NAME_MAX};
use super::{FieldErrors, FormData};

/// Raw venue form values, as submitted or as pre-filled for editing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub website: String,
    pub facebook_link: String,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueForm {
    pub fn from_form(data: &FormData) -> Self {
        Self {
            name: data.text("name"),
            city: data.text("city"),
            state: data.text("state"),
            address: data.text("address"),
            phone: data.text("phone"),
            image_link: data.text("image_link"),
            website: data.text("website"),
            facebook_link: data.text("facebook_link"),
            genres: data.values("genres"),
            seeking_talent: fields::checkbox(data.value("seeking_talent")),
            seeking_description: data.text("seeking_description"),
        }
    }

    pub fn from_profile(venue: &VenueProfile) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            website: venue.website.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            genres: venue.genres.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }

    /// Validate every field; the description is only kept while seeking talent
    pub fn validate(&self) -> Result<VenueProfile, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = errors.check("name", fields::required(&self.name, NAME_MAX));
        let city = errors.check("city", fields::required(&self.city, NAME_MAX));
        let state = errors.check("state", fields::state(&self.state));
        let address = errors.check("address", fields::required(&self.address, NAME_MAX));
        let phone = errors.check("phone", fields::phone(&self.phone));
        let image_link = errors.check("image_link", fields::link(&self.image_link, LINK_MAX));
        let website = errors.check("website", fields::link(&self.website, LINK_MAX));
        let facebook_link =
            errors.check("facebook_link", fields::link(&self.facebook_link, LINK_MAX));
        let genres = errors.check("genres", fields::genres(&self.genres));
        let seeking_description = if self.seeking_talent {
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
            address,
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
                Some(address),
                Some(phone),
                Some(image_link),
                Some(website),
                Some(facebook_link),
                Some(genres),
                Some(seeking_description),
            ) if errors.is_empty() => Ok(VenueProfile {
                name,
                city,
                state,
                address,
                phone,
                image_link,
                website,
                facebook_link,
                seeking_talent: self.seeking_talent,
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

    fn musical_hop() -> VenueForm {
        VenueForm {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: "123-123-1234".to_string(),
            website: "https://www.themusicalhop.com".to_string(),
            genres: vec!["Jazz".to_string(), "Reggae".to_string()],
            seeking_talent: true,
            seeking_description: "We are on the lookout for a local artist".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form() {
        let venue = musical_hop().validate().expect("valid");
        assert_eq!(venue.name, "The Musical Hop");
        assert_eq!(venue.image_link, None);
        assert_eq!(venue.website.as_deref(), Some("https://www.themusicalhop.com"));
        assert!(venue.seeking_talent);
        assert_eq!(
            venue.seeking_description.as_deref(),
            Some("We are on the lookout for a local artist")
        );
    }

    #[test]
    fn test_description_dropped_when_not_seeking() {
        let mut form = musical_hop();
        form.seeking_talent = false;
        let venue = form.validate().expect("valid");
        assert!(!venue.seeking_talent);
        assert_eq!(venue.seeking_description, None);
    }

    #[test]
    fn test_reports_every_bad_field() {
        let form = VenueForm {
            state: "ZZ".to_string(),
            phone: "twelve".to_string(),
            facebook_link: "facebook".to_string(),
            ..Default::default()
        };

        let errors = form.validate().expect_err("invalid");
        for field in [
            "name",
            "city",
            "state",
            "address",
            "phone",
            "facebook_link",
            "genres",
        ] {
            assert!(errors.get(field).is_some(), "expected error on {field}");
        }
        assert!(errors.get("website").is_none());
    }

    #[test]
    fn test_profile_round_trip() {
        let venue = musical_hop().validate().unwrap();
        assert_eq!(VenueForm::from_profile(&venue), musical_hop());
    }

    #[test]
    fn test_from_form_reads_multi_select_and_checkbox() {
        let data = FormData::new(vec![
            ("name".to_string(), "The Bar".to_string()),
            ("genres".to_string(), "Jazz".to_string()),
            ("genres".to_string(), "Blues".to_string()),
            ("seeking_talent".to_string(), "y".to_string()),
        ]);

        let form = VenueForm::from_form(&data);
        assert_eq!(form.genres, vec!["Jazz", "Blues"]);
        assert!(form.seeking_talent);
    }
}
