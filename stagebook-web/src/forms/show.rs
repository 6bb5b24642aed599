//! Show create form

use chrono::NaiveDateTime;
use stagebook_common::datetime::to_input_value;
use stagebook_common::db::NewShow;

use super::fields;
use super::{FieldErrors, FormData};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    /// Empty form whose start time defaults to `now`
    pub fn starting_at(now: NaiveDateTime) -> Self {
        Self {
            start_time: to_input_value(&now),
            ..Default::default()
        }
    }

    pub fn from_form(data: &FormData) -> Self {
        Self {
            artist_id: data.text("artist_id"),
            venue_id: data.text("venue_id"),
            start_time: data.text("start_time"),
        }
    }

    /// Validate field shapes; whether the ids exist is checked against the database
    pub fn validate(&self) -> Result<NewShow, FieldErrors> {
        let mut errors = FieldErrors::new();

        let artist_id = errors.check("artist_id", fields::record_id(&self.artist_id));
        let venue_id = errors.check("venue_id", fields::record_id(&self.venue_id));
        let start_time = errors.check("start_time", fields::date_time(&self.start_time));

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) => Ok(NewShow {
                artist_id,
                venue_id,
                start_time,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_valid_show() {
        let form = ShowForm {
            artist_id: "4".to_string(),
            venue_id: "1".to_string(),
            start_time: "2035-04-01 20:00:00".to_string(),
        };

        let show = form.validate().expect("valid");
        assert_eq!(show.artist_id, 4);
        assert_eq!(show.venue_id, 1);
        assert_eq!(
            show.start_time,
            NaiveDate::from_ymd_opt(2035, 4, 1).unwrap().and_hms_opt(20, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_invalid_show_lists_each_field() {
        let form = ShowForm {
            artist_id: "".to_string(),
            venue_id: "abc".to_string(),
            start_time: "tomorrow-ish".to_string(),
        };

        let errors = form.validate().expect_err("invalid");
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_default_start_time_is_input_formatted() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(3, 4, 5).unwrap();
        assert_eq!(ShowForm::starting_at(now).start_time, "2024-01-02T03:04");
    }
}
