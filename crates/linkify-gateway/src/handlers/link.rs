use crate::error::{AppError, Result};
use crate::model::{LinkResponse, ShortenRequest};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use linkify_core::{LinkRecord, ShortCode, ShortenParams};
use percent_encoding::{utf8_percent_encode, CONTROLS};
use tracing::info;

use super::fallback::HOME_PAGE;

const DECODE_FAILED: &str = "Failed to decode JSON request body";
const URL_MISSING: &str = "URL not found in request body";

/// Whether `path` is `/shorten` followed by any number of slashes.
pub fn is_shorten_path(path: &str) -> bool {
    path.strip_prefix("/shorten")
        .is_some_and(|rest| rest.bytes().all(|b| b == b'/'))
}

/// `POST /shorten`: stores the `url` field as a public link and replies with
/// the bare short code. A POST to any other path gets the home page text.
pub async fn shorten_handler(
    uri: Uri,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response> {
    if !is_shorten_path(uri.path()) {
        return Ok(HOME_PAGE.into_response());
    }

    let url = ShortenRequest::decode(&body)
        .ok_or(AppError::InvalidRequest(DECODE_FAILED))?
        .into_url()
        .ok_or(AppError::InvalidRequest(URL_MISSING))?;

    let code = state.shortener().shorten(ShortenParams::public(url)).await;
    Ok(code.to_string().into_response())
}

/// `GET /{code}`: redirects to the stored URL with `302 Found`.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let code = ShortCode::new(short_code);
    let url = state.shortener().resolve(&code).await?;

    // Non-ASCII and control bytes are percent-escaped; the rest goes out as stored.
    let location = utf8_percent_encode(&url, CONTROLS).to_string();
    let location = HeaderValue::try_from(location).map_err(|e| {
        AppError::Internal(format!("stored URL for {code} is not a valid header: {e}"))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// `GET /`: every stored link.
pub async fn list_all_handler(State(state): State<AppState>) -> Json<Vec<LinkResponse>> {
    into_json(state.shortener().list_all().await)
}

/// `GET /public/{code}`: every public link. The code segment does not narrow
/// the listing.
pub async fn list_public_handler(
    Path(_short_code): Path<String>,
    State(state): State<AppState>,
) -> Json<Vec<LinkResponse>> {
    into_json(state.shortener().list_public().await)
}

/// `GET /private/{code}`: every private link. The code segment does not narrow
/// the listing.
pub async fn list_private_handler(
    Path(_short_code): Path<String>,
    State(state): State<AppState>,
) -> Json<Vec<LinkResponse>> {
    into_json(state.shortener().list_private().await)
}

/// `DELETE /{code}`: removes every link, not only the one named in the path.
pub async fn clear_all_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Json<String> {
    info!(path_code = %short_code, "clearing all links");
    Json(state.shortener().clear_all().await)
}

fn into_json(records: Vec<LinkRecord>) -> Json<Vec<LinkResponse>> {
    Json(records.into_iter().map(LinkResponse::from).collect())
}
