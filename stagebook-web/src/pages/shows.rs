//! Show pages

use stagebook_common::datetime::render_datetime;
use stagebook_common::db::ShowListing;
use stagebook_common::DateFormat;

use super::widgets::{input, select};
use super::{escape, image, layout};
use crate::flash::Flash;
use crate::forms::{FieldErrors, ShowForm};

/// Every show, soonest first
pub fn list_page(shows: &[ShowListing], flashes: &[Flash]) -> String {
    let cards: String = shows
        .iter()
        .map(|show| {
            format!(
                r#"        <div class="show-card">
            {image}
            <time datetime="{iso}">{when}</time>
            <a href="/artists/{artist_id}">{artist}</a>
            <span>playing at</span>
            <a href="/venues/{venue_id}">{venue}</a>
        </div>
"#,
                image = image(show.artist_image_link.as_deref(), &show.artist_name),
                iso = show.start_time.format("%Y-%m-%dT%H:%M:%S"),
                when = escape(&render_datetime(&show.start_time, DateFormat::Medium)),
                artist_id = show.artist_id,
                artist = escape(&show.artist_name),
                venue_id = show.venue_id,
                venue = escape(&show.venue_name),
            )
        })
        .collect();

    let body = if shows.is_empty() {
        "    <p class=\"empty\">No shows scheduled yet.</p>\n".to_string()
    } else {
        format!("    <div class=\"show-grid\">\n{}    </div>\n", cards)
    };

    let content = format!(
        "    <h1>Shows</h1>\n{}    <p><a class=\"button\" href=\"/shows/create\">Post a show</a></p>\n",
        body
    );
    layout("Shows", flashes, &content)
}

/// New show form; pickers take (id, name) pairs
pub fn form_page(
    form: &ShowForm,
    artists: &[(String, String)],
    venues: &[(String, String)],
    errors: &FieldErrors,
    flashes: &[Flash],
) -> String {
    let fields = [
        select("artist_id", "Artist", artists, &form.artist_id, errors),
        select("venue_id", "Venue", venues, &form.venue_id, errors),
        input(
            "datetime-local",
            "start_time",
            "Start Time",
            &form.start_time,
            "YYYY-MM-DD HH:MM",
            errors,
        ),
    ]
    .concat();

    let content = format!(
        r#"    <h1>List a new show</h1>
    <form class="record-form" method="post" action="/shows/create">
{fields}        <button type="submit">Create show</button>
    </form>
"#,
        fields = fields,
    );

    layout("List a new show", flashes, &content)
}
