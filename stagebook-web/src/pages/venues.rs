//! Venue pages

use stagebook_common::db::{Area, ShowSplit, Venue, VenueShow};
use stagebook_common::genres::GENRE_CHOICES;

use super::widgets::{checkbox, choice_options, input, multi_select, select};
use super::{escape, genre_tags, image, layout, show_card, show_section, summary_item, FormMode};
use crate::flash::Flash;
use crate::forms::fields::STATE_CHOICES;
use crate::forms::{FieldErrors, VenueForm};

/// Venues grouped by area
pub fn list_page(areas: &[Area], flashes: &[Flash]) -> String {
    let mut content = String::from("    <h1>Venues</h1>\n");

    if areas.is_empty() {
        content.push_str("    <p class=\"empty\">No venues listed yet.</p>\n");
    }

    for area in areas {
        let items: String = area
            .venues
            .iter()
            .map(|venue| summary_item("/venues", venue))
            .collect();
        content.push_str(&format!(
            "    <section class=\"area\">\n        <h3>{}, {}</h3>\n        <ul class=\"items\">\n{}        </ul>\n    </section>\n",
            escape(&area.city),
            escape(&area.state),
            items
        ));
    }

    content.push_str("    <p><a class=\"button\" href=\"/venues/create\">Post a venue</a></p>\n");
    layout("Venues", flashes, &content)
}

fn contact_line(label: &str, value: Option<&str>, link: bool) -> String {
    match value {
        Some(v) if link => format!(
            "        <p class=\"contact\"><span>{}</span> <a href=\"{}\">{}</a></p>\n",
            label,
            escape(v),
            escape(v)
        ),
        Some(v) => format!(
            "        <p class=\"contact\"><span>{}</span> {}</p>\n",
            label,
            escape(v)
        ),
        None => String::new(),
    }
}

/// Venue detail with its past and upcoming shows
pub fn detail_page(venue: &Venue, shows: &ShowSplit<VenueShow>, flashes: &[Flash]) -> String {
    let profile = &venue.profile;

    let seeking = if profile.seeking_talent {
        format!(
            "        <div class=\"seeking\"><p class=\"seeking-flag\">Currently seeking talent</p><p>{}</p></div>\n",
            escape(profile.seeking_description.as_deref().unwrap_or(""))
        )
    } else {
        "        <p class=\"not-seeking\">Not currently seeking talent</p>\n".to_string()
    };

    let cards = |list: &[VenueShow]| -> Vec<String> {
        list.iter()
            .map(|show| {
                show_card(
                    &format!("/artists/{}", show.artist_id),
                    &show.artist_name,
                    show.artist_image_link.as_deref(),
                    &show.start_time,
                )
            })
            .collect()
    };

    let content = format!(
        r#"    <article class="profile">
        <div class="profile-head">
            {image}
            <div>
                <h1>{name}</h1>
                <p class="subtitle">ID: {id}</p>
                <p class="genres">{genres}</p>
            </div>
        </div>
        <p class="contact"><span>Address</span> {address}, {city}, {state}</p>
{phone}{website}{facebook}{seeking}        <div class="actions">
            <a class="button" href="/venues/{id}/edit">Edit</a>
            <form method="post" action="/venues/{id}" onsubmit="return confirm('Delete this venue and all of its shows?');">
                <button type="submit" class="danger">Delete</button>
            </form>
        </div>
    </article>
{upcoming}{past}"#,
        image = image(profile.image_link.as_deref(), &profile.name),
        name = escape(&profile.name),
        id = venue.id,
        genres = genre_tags(&profile.genres),
        address = escape(&profile.address),
        city = escape(&profile.city),
        state = escape(&profile.state),
        phone = contact_line("Phone", profile.phone.as_deref(), false),
        website = contact_line("Website", profile.website.as_deref(), true),
        facebook = contact_line("Facebook", profile.facebook_link.as_deref(), true),
        seeking = seeking,
        upcoming = show_section("Upcoming Shows", shows.upcoming_count(), &cards(&shows.upcoming)),
        past = show_section("Past Shows", shows.past_count(), &cards(&shows.past)),
    );

    layout(&profile.name, flashes, &content)
}

/// New or edit venue form
pub fn form_page(
    mode: FormMode,
    form: &VenueForm,
    errors: &FieldErrors,
    flashes: &[Flash],
) -> String {
    let (title, action) = match mode {
        FormMode::Create => ("List a new venue".to_string(), "/venues/create".to_string()),
        FormMode::Edit(id) => (
            format!("Edit venue {}", form.name),
            format!("/venues/{}/edit", id),
        ),
    };

    let states = choice_options(STATE_CHOICES);
    let fields = [
        input("text", "name", "Name", &form.name, "", errors),
        input("text", "city", "City", &form.city, "", errors),
        select("state", "State", &states, &form.state, errors),
        input("text", "address", "Address", &form.address, "", errors),
        input("tel", "phone", "Phone", &form.phone, "xxx-xxx-xxxx", errors),
        multi_select("genres", "Genres", GENRE_CHOICES, &form.genres, errors),
        input("url", "image_link", "Image Link", &form.image_link, "https://", errors),
        input("url", "website", "Website", &form.website, "https://", errors),
        input("url", "facebook_link", "Facebook Link", &form.facebook_link, "https://", errors),
        checkbox("seeking_talent", "Seeking talent", form.seeking_talent),
        input(
            "text",
            "seeking_description",
            "Seeking Description",
            &form.seeking_description,
            "",
            errors,
        ),
    ]
    .concat();

    let content = format!(
        r#"    <h1>{title}</h1>
    <form class="record-form" method="post" action="{action}">
{fields}        <button type="submit">Save venue</button>
    </form>
"#,
        title = escape(&title),
        action = action,
        fields = fields,
    );

    layout(&title, flashes, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stagebook_common::db::{Summary, VenueProfile};

    fn fillmore() -> Venue {
        Venue {
            id: 7,
            profile: VenueProfile {
                name: "The Fillmore".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                address: "1805 Geary Blvd".to_string(),
                genres: vec!["Rock n Roll".to_string()],
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_detail_counts_and_links() {
        let when = NaiveDate::from_ymd_opt(2019, 5, 21).unwrap().and_hms_opt(21, 30, 0).unwrap();
        let shows = ShowSplit {
            past: vec![VenueShow {
                artist_id: 4,
                artist_name: "Guns N Petals".to_string(),
                artist_image_link: None,
                start_time: when,
            }],
            upcoming: vec![],
        };

        let html = detail_page(&fillmore(), &shows, &[]);
        assert!(html.contains("<h2>0 Upcoming Shows</h2>"));
        assert!(html.contains("<h2>1 Past Shows</h2>"));
        assert!(html.contains(r#"href="/artists/4""#));
        assert!(html.contains("Tuesday May, 21, 2019 at 9:30PM"));
        assert!(html.contains(r#"action="/venues/7""#));
    }

    #[test]
    fn test_list_groups_by_area() {
        let areas = vec![Area {
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            venues: vec![Summary {
                id: 1,
                name: "The Musical Hop".to_string(),
                num_upcoming_shows: 2,
            }],
        }];

        let html = list_page(&areas, &[]);
        assert!(html.contains("<h3>San Francisco, CA</h3>"));
        assert!(html.contains("2 upcoming shows"));
    }

    #[test]
    fn test_edit_form_posts_to_edit_route() {
        let form = VenueForm::from_profile(&fillmore().profile);
        let html = form_page(FormMode::Edit(7), &form, &FieldErrors::new(), &[]);
        assert!(html.contains(r#"action="/venues/7/edit""#));
        assert!(html.contains(r#"value="The Fillmore""#));
        assert!(html.contains(r#"<option value="CA" selected>CA</option>"#));
    }
}
