//! Artist pages

use stagebook_common::db::{Artist, ArtistShow, ShowSplit, Summary};
use stagebook_common::genres::GENRE_CHOICES;

use super::widgets::{checkbox, choice_options, input, multi_select, select};
use super::{escape, genre_tags, image, layout, show_card, show_section, summary_item, FormMode};
use crate::flash::Flash;
use crate::forms::fields::STATE_CHOICES;
use crate::forms::{ArtistForm, FieldErrors};

pub fn list_page(artists: &[Summary], flashes: &[Flash]) -> String {
    let items: String = artists
        .iter()
        .map(|artist| summary_item("/artists", artist))
        .collect();

    let body = if artists.is_empty() {
        "    <p class=\"empty\">No artists listed yet.</p>\n".to_string()
    } else {
        format!("    <ul class=\"items\">\n{}    </ul>\n", items)
    };

    let content = format!(
        "    <h1>Artists</h1>\n{}    <p><a class=\"button\" href=\"/artists/create\">Post an artist</a></p>\n",
        body
    );
    layout("Artists", flashes, &content)
}

pub fn detail_page(artist: &Artist, shows: &ShowSplit<ArtistShow>, flashes: &[Flash]) -> String {
    let profile = &artist.profile;

    let mut contact = String::new();
    if let Some(phone) = &profile.phone {
        contact.push_str(&format!(
            "        <p class=\"contact\"><span>Phone</span> {}</p>\n",
            escape(phone)
        ));
    }
    for (label, link) in [("Website", &profile.website), ("Facebook", &profile.facebook_link)] {
        if let Some(link) = link {
            contact.push_str(&format!(
                "        <p class=\"contact\"><span>{}</span> <a href=\"{}\">{}</a></p>\n",
                label,
                escape(link),
                escape(link)
            ));
        }
    }

    let seeking = if profile.seeking_venue {
        format!(
            "        <div class=\"seeking\"><p class=\"seeking-flag\">Currently seeking performance venues</p><p>{}</p></div>\n",
            escape(profile.seeking_description.as_deref().unwrap_or(""))
        )
    } else {
        "        <p class=\"not-seeking\">Not currently seeking performance venues</p>\n".to_string()
    };

    let cards = |list: &[ArtistShow]| -> Vec<String> {
        list.iter()
            .map(|show| {
                show_card(
                    &format!("/venues/{}", show.venue_id),
                    &show.venue_name,
                    show.venue_image_link.as_deref(),
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
        <p class="contact"><span>Home</span> {city}, {state}</p>
{contact}{seeking}        <div class="actions">
            <a class="button" href="/artists/{id}/edit">Edit</a>
            <form method="post" action="/artist/{id}" onsubmit="return confirm('Delete this artist and all of their shows?');">
                <button type="submit" class="danger">Delete</button>
            </form>
        </div>
    </article>
{upcoming}{past}"#,
        image = image(profile.image_link.as_deref(), &profile.name),
        name = escape(&profile.name),
        id = artist.id,
        genres = genre_tags(&profile.genres),
        city = escape(&profile.city),
        state = escape(&profile.state),
        contact = contact,
        seeking = seeking,
        upcoming = show_section("Upcoming Shows", shows.upcoming_count(), &cards(&shows.upcoming)),
        past = show_section("Past Shows", shows.past_count(), &cards(&shows.past)),
    );

    layout(&profile.name, flashes, &content)
}

pub fn form_page(
    mode: FormMode,
    form: &ArtistForm,
    errors: &FieldErrors,
    flashes: &[Flash],
) -> String {
    let (title, action) = match mode {
        FormMode::Create => ("List a new artist".to_string(), "/artists/create".to_string()),
        FormMode::Edit(id) => (
            format!("Edit artist {}", form.name),
            format!("/artists/{}/edit", id),
        ),
    };

    let states = choice_options(STATE_CHOICES);
    let fields = [
        input("text", "name", "Name", &form.name, "", errors),
        input("text", "city", "City", &form.city, "", errors),
        select("state", "State", &states, &form.state, errors),
        input("tel", "phone", "Phone", &form.phone, "xxx-xxx-xxxx", errors),
        multi_select("genres", "Genres", GENRE_CHOICES, &form.genres, errors),
        input("url", "image_link", "Image Link", &form.image_link, "https://", errors),
        input("url", "website", "Website", &form.website, "https://", errors),
        input("url", "facebook_link", "Facebook Link", &form.facebook_link, "https://", errors),
        checkbox("seeking_venue", "Seeking venue", form.seeking_venue),
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
{fields}        <button type="submit">Save artist</button>
    </form>
"#,
        title = escape(&title),
        action = action,
        fields = fields,
    );

    layout(&title, flashes, &content)
}
