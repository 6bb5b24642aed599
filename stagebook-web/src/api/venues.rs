//! Venue handlers
//!
//! Write actions never surface a persistence failure as an error page: the
//! failure is logged and the user is redirected with an error flash.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
    routing::{get, post},
    Form, Router,
};
use stagebook_common::datetime::now_local;
use stagebook_common::db::{venues, ShowSplit};
use tracing::{error, info, warn};

use super::{invalid_form, SearchForm};
use crate::error::{parse_id, WebError, WebResult};
use crate::flash::{redirect, Flash, PendingFlashes};
use crate::forms::{FieldErrors, FormData, VenueForm};
use crate::pages::{self, FormMode, HtmlPage};
use crate::AppState;

pub fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", get(create_venue_form).post(create_venue))
        .route("/venues/:id", get(show_venue).post(delete_venue))
        .route("/venues/:id/edit", get(edit_venue_form).post(edit_venue))
}

/// GET /venues
pub async fn list_venues(State(state): State<AppState>, headers: HeaderMap) -> WebResult<HtmlPage> {
    let pending = PendingFlashes::from_headers(&headers);
    let areas = venues::list_areas(&state.db, now_local()).await?;
    Ok(HtmlPage::ok(pages::venues::list_page(&areas, pending.messages())).consuming(&pending))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(search): Form<SearchForm>,
) -> WebResult<HtmlPage> {
    let pending = PendingFlashes::from_headers(&headers);
    let term = search.search_term.trim();
    let results = venues::search_venues(&state.db, term, now_local()).await?;

    Ok(HtmlPage::ok(pages::search_results_page(
        "Venue search",
        "/venues",
        term,
        &results,
        pending.messages(),
    ))
    .consuming(&pending))
}

/// GET /venues/:id
pub async fn show_venue(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(raw_id): Path<String>,
) -> WebResult<HtmlPage> {
    let pending = PendingFlashes::from_headers(&headers);
    let id = parse_id(&raw_id)?;
    let venue = venues::get_venue(&state.db, id)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("venue {}", id)))?;
    let shows = ShowSplit::new(venues::venue_shows(&state.db, id).await?, now_local());

    Ok(HtmlPage::ok(pages::venues::detail_page(&venue, &shows, pending.messages()))
        .consuming(&pending))
}

/// GET /venues/create
pub async fn create_venue_form(headers: HeaderMap) -> HtmlPage {
    let pending = PendingFlashes::from_headers(&headers);
    HtmlPage::ok(pages::venues::form_page(
        FormMode::Create,
        &VenueForm::default(),
        &FieldErrors::new(),
        pending.messages(),
    ))
    .consuming(&pending)
}

/// POST /venues/create
pub async fn create_venue(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let pending = PendingFlashes::from_headers(&headers);
    let form = VenueForm::from_form(&FormData::new(pairs));

    let profile = match form.validate() {
        Ok(profile) => profile,
        Err(errors) => {
            warn!("Venue form rejected: {:?}", errors.fields().collect::<Vec<_>>());
            return invalid_form(&pending, |flashes| {
                pages::venues::form_page(FormMode::Create, &form, &errors, flashes)
            });
        }
    };

    match venues::insert_venue(&state.db, &profile).await {
        Ok(id) => {
            info!("Listed venue {} ({})", id, profile.name);
            redirect(
                "/",
                vec![Flash::message(format!(
                    "Venue {} was successfully listed!",
                    profile.name
                ))],
            )
        }
        Err(e) => {
            error!("Failed to list venue {}: {}", profile.name, e);
            redirect(
                "/",
                vec![Flash::error(format!(
                    "An error occurred. Venue {} could not be listed.",
                    profile.name
                ))],
            )
        }
    }
}

/// GET /venues/:id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(raw_id): Path<String>,
) -> WebResult<HtmlPage> {
    let pending = PendingFlashes::from_headers(&headers);
    let id = parse_id(&raw_id)?;
    let venue = venues::get_venue(&state.db, id)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("venue {}", id)))?;

    Ok(HtmlPage::ok(pages::venues::form_page(
        FormMode::Edit(id),
        &VenueForm::from_profile(&venue.profile),
        &FieldErrors::new(),
        pending.messages(),
    ))
    .consuming(&pending))
}

/// POST /venues/:id/edit
pub async fn edit_venue(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(raw_id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> WebResult<Response> {
    let pending = PendingFlashes::from_headers(&headers);
    let id = parse_id(&raw_id)?;
    if venues::get_venue(&state.db, id).await?.is_none() {
        return Err(WebError::NotFound(format!("venue {}", id)));
    }

    let form = VenueForm::from_form(&FormData::new(pairs));
    let profile = match form.validate() {
        Ok(profile) => profile,
        Err(errors) => {
            warn!("Venue {} edit rejected: {:?}", id, errors.fields().collect::<Vec<_>>());
            return Ok(invalid_form(&pending, |flashes| {
                pages::venues::form_page(FormMode::Edit(id), &form, &errors, flashes)
            }));
        }
    };

    let target = format!("/venues/{}", id);
    let flash = match venues::update_venue(&state.db, id, &profile).await {
        Ok(()) => {
            info!("Updated venue {}", id);
            Flash::message(format!("Venue {} was successfully changed.", profile.name))
        }
        Err(e) => {
            error!("Failed to update venue {}: {}", id, e);
            Flash::error("An error occurred. Changes could not be saved.")
        }
    };
    Ok(redirect(&target, vec![flash]))
}

/// POST /venues/:id (delete)
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> WebResult<Response> {
    let id = parse_id(&raw_id)?;

    match venues::delete_venue(&state.db, id).await {
        Ok(removed) => {
            info!("Deleted venue {} with {} shows", id, removed);
            Ok(redirect(
                "/",
                vec![Flash::message("The venue and shows have been excluded.")],
            ))
        }
        Err(stagebook_common::Error::NotFound(what)) => Err(WebError::NotFound(what)),
        Err(e) => {
            error!("Failed to delete venue {}: {}", id, e);
            Ok(redirect(
                "/venues",
                vec![Flash::error("An error occurred. Venue could not be deleted.")],
            ))
        }
    }
}
