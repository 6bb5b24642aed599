//! Artist handlers

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
    routing::{get, post},
    Form, Router,
};
use stagebook_common::datetime::now_local;
use stagebook_common::db::{artists, ShowSplit};
use tracing::{error, info, warn};

use super::{invalid_form, SearchForm};
use crate::error::{parse_id, WebError, WebResult};
use crate::flash::{redirect, Flash, PendingFlashes};
use crate::forms::{ArtistForm, FieldErrors, FormData};
use crate::pages::{self, FormMode, HtmlPage};
use crate::AppState;

pub fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route("/artists/create", get(create_artist_form).post(create_artist))
        .route("/artists/:id", get(show_artist))
        .route("/artists/:id/edit", get(edit_artist_form).post(edit_artist))
        // Delete keeps the singular path
        .route("/artist/:id", post(delete_artist))
}

/// GET /artists
pub async fn list_artists(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> WebResult<HtmlPage> {
    let pending = PendingFlashes::from_headers(&headers);
    let artists = artists::list_artists(&state.db, now_local()).await?;
    Ok(HtmlPage::ok(pages::artists::list_page(&artists, pending.messages())).consuming(&pending))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(search): Form<SearchForm>,
) -> WebResult<HtmlPage> {
    let pending = PendingFlashes::from_headers(&headers);
    let term = search.search_term.trim();
    let results = artists::search_artists(&state.db, term, now_local()).await?;

    Ok(HtmlPage::ok(pages::search_results_page(
        "Artist search",
        "/artists",
        term,
        &results,
        pending.messages(),
    ))
    .consuming(&pending))
}

/// GET /artists/:id
pub async fn show_artist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(raw_id): Path<String>,
) -> WebResult<HtmlPage> {
    let pending = PendingFlashes::from_headers(&headers);
    let id = parse_id(&raw_id)?;
    let artist = artists::get_artist(&state.db, id)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("artist {}", id)))?;
    let shows = ShowSplit::new(artists::artist_shows(&state.db, id).await?, now_local());

    Ok(
        HtmlPage::ok(pages::artists::detail_page(&artist, &shows, pending.messages()))
            .consuming(&pending),
    )
}

/// GET /artists/create
pub async fn create_artist_form(headers: HeaderMap) -> HtmlPage {
    let pending = PendingFlashes::from_headers(&headers);
    HtmlPage::ok(pages::artists::form_page(
        FormMode::Create,
        &ArtistForm::default(),
        &FieldErrors::new(),
        pending.messages(),
    ))
    .consuming(&pending)
}

/// POST /artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let pending = PendingFlashes::from_headers(&headers);
    let form = ArtistForm::from_form(&FormData::new(pairs));

    let profile = match form.validate() {
        Ok(profile) => profile,
        Err(errors) => {
            warn!("Artist form rejected: {:?}", errors.fields().collect::<Vec<_>>());
            return invalid_form(&pending, |flashes| {
                pages::artists::form_page(FormMode::Create, &form, &errors, flashes)
            });
        }
    };

    let flash = match artists::insert_artist(&state.db, &profile).await {
        Ok(id) => {
            info!("Listed artist {} ({})", id, profile.name);
            Flash::message(format!("Artist {} was successfully listed!", profile.name))
        }
        Err(e) => {
            error!("Failed to list artist {}: {}", profile.name, e);
            Flash::error(format!(
                "An error occurred. Artist {} could not be listed.",
                profile.name
            ))
        }
    };
    redirect("/", vec![flash])
}

/// GET /artists/:id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(raw_id): Path<String>,
) -> WebResult<HtmlPage> {
    let pending = PendingFlashes::from_headers(&headers);
    let id = parse_id(&raw_id)?;
    let artist = artists::get_artist(&state.db, id)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("artist {}", id)))?;

    Ok(HtmlPage::ok(pages::artists::form_page(
        FormMode::Edit(id),
        &ArtistForm::from_profile(&artist.profile),
        &FieldErrors::new(),
        pending.messages(),
    ))
    .consuming(&pending))
}

/// POST /artists/:id/edit
pub async fn edit_artist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(raw_id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> WebResult<Response> {
    let pending = PendingFlashes::from_headers(&headers);
    let id = parse_id(&raw_id)?;
    if artists::get_artist(&state.db, id).await?.is_none() {
        return Err(WebError::NotFound(format!("artist {}", id)));
    }

    let form = ArtistForm::from_form(&FormData::new(pairs));
    let profile = match form.validate() {
        Ok(profile) => profile,
        Err(errors) => {
            warn!("Artist {} edit rejected: {:?}", id, errors.fields().collect::<Vec<_>>());
            return Ok(invalid_form(&pending, |flashes| {
                pages::artists::form_page(FormMode::Edit(id), &form, &errors, flashes)
            }));
        }
    };

    let flash = match artists::update_artist(&state.db, id, &profile).await {
        Ok(()) => {
            info!("Updated artist {}", id);
            Flash::message(format!("Artist {} was successfully changed.", profile.name))
        }
        Err(e) => {
            error!("Failed to update artist {}: {}", id, e);
            Flash::error("An error occurred. Changes could not be saved.")
        }
    };
    Ok(redirect(&format!("/artists/{}", id), vec![flash]))
}

/// POST /artist/:id (delete)
pub async fn delete_artist(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> WebResult<Response> {
    let id = parse_id(&raw_id)?;

    match artists::delete_artist(&state.db, id).await {
        Ok(removed) => {
            info!("Deleted artist {} with {} shows", id, removed);
            Ok(redirect(
                "/",
                vec![Flash::message("The artist and shows have been excluded.")],
            ))
        }
        Err(stagebook_common::Error::NotFound(what)) => Err(WebError::NotFound(what)),
        Err(e) => {
            error!("Failed to delete artist {}: {}", id, e);
            Ok(redirect(
                "/artists",
                vec![Flash::error("An error occurred. Artist could not be deleted.")],
            ))
        }
    }
}
