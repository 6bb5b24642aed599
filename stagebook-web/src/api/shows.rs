//! Show handlers

use axum::{
    extract::State,
    http::HeaderMap,
    response::Response,
    routing::get,
    Form, Router,
};
use stagebook_common::datetime::now_local;
use stagebook_common::db::{artists, shows, venues};
use sqlx::SqlitePool;
use tracing::{error, info, warn};

use super::invalid_form;
use crate::error::WebResult;
use crate::flash::{redirect, Flash, PendingFlashes};
use crate::forms::{FieldErrors, FormData, ShowForm};
use crate::pages::{self, HtmlPage};
use crate::AppState;

pub fn show_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", get(create_show_form).post(create_show))
}

/// Artist and venue picker options as (id, name) pairs
async fn picker_options(
    pool: &SqlitePool,
) -> WebResult<(Vec<(String, String)>, Vec<(String, String)>)> {
    let now = now_local();

    let artist_options = artists::list_artists(pool, now)
        .await?
        .into_iter()
        .map(|a| (a.id.to_string(), a.name))
        .collect();

    let mut venue_list: Vec<_> = venues::list_areas(pool, now)
        .await?
        .into_iter()
        .flat_map(|area| area.venues)
        .collect();
    venue_list.sort_by(|a, b| a.name.cmp(&b.name));
    let venue_options = venue_list
        .into_iter()
        .map(|v| (v.id.to_string(), v.name))
        .collect();

    Ok((artist_options, venue_options))
}

/// GET /shows
pub async fn list_shows(State(state): State<AppState>, headers: HeaderMap) -> WebResult<HtmlPage> {
    let pending = PendingFlashes::from_headers(&headers);
    let listing = shows::list_shows(&state.db).await?;
    Ok(HtmlPage::ok(pages::shows::list_page(&listing, pending.messages())).consuming(&pending))
}

/// GET /shows/create
pub async fn create_show_form(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> WebResult<HtmlPage> {
    let pending = PendingFlashes::from_headers(&headers);
    let (artist_options, venue_options) = picker_options(&state.db).await?;

    Ok(HtmlPage::ok(pages::shows::form_page(
        &ShowForm::starting_at(now_local()),
        &artist_options,
        &venue_options,
        &FieldErrors::new(),
        pending.messages(),
    ))
    .consuming(&pending))
}

/// POST /shows/create
pub async fn create_show(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(pairs): Form<Vec<(String, String)>>,
) -> WebResult<Response> {
    let pending = PendingFlashes::from_headers(&headers);
    let form = ShowForm::from_form(&FormData::new(pairs));

    let checked = match form.validate() {
        Ok(show) => {
            let mut errors = FieldErrors::new();
            if artists::get_artist(&state.db, show.artist_id).await?.is_none() {
                errors.add("artist_id", "No artist with that ID.");
            }
            if venues::get_venue(&state.db, show.venue_id).await?.is_none() {
                errors.add("venue_id", "No venue with that ID.");
            }
            if errors.is_empty() {
                Ok(show)
            } else {
                Err(errors)
            }
        }
        Err(errors) => Err(errors),
    };

    let show = match checked {
        Ok(show) => show,
        Err(errors) => {
            warn!("Show form rejected: {:?}", errors.fields().collect::<Vec<_>>());
            let (artist_options, venue_options) = picker_options(&state.db).await?;
            return Ok(invalid_form(&pending, |flashes| {
                pages::shows::form_page(&form, &artist_options, &venue_options, &errors, flashes)
            }));
        }
    };

    let flash = match shows::insert_show(&state.db, &show).await {
        Ok(id) => {
            info!(
                "Listed show {} (artist {} at venue {}, {})",
                id, show.artist_id, show.venue_id, show.start_time
            );
            Flash::message("Show successfully listed!")
        }
        Err(e) => {
            error!("Failed to list show: {}", e);
            Flash::error("An error occurred. Show could not be listed.")
        }
    };
    Ok(redirect("/", vec![flash]))
}
