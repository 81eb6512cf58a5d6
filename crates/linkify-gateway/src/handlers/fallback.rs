use crate::handlers::{list_all_handler, shorten_handler};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};

pub const HOME_PAGE: &str = "Home Page";

/// Requests no route claims. A `GET` lists every link, a `POST` goes to
/// [`shorten_handler`] (which only accepts the shorten path), anything else
/// gets the home page text.
pub async fn fallback_handler(
    method: Method,
    uri: Uri,
    state: State<AppState>,
    body: Bytes,
) -> Response {
    if method == Method::GET {
        list_all_handler(state).await.into_response()
    } else if method == Method::POST {
        shorten_handler(uri, state, body).await.into_response()
    } else {
        HOME_PAGE.into_response()
    }
}
