use crate::app_state::AppState;
use crate::domain::{VisitorDetails, VisitorRecord};
use crate::error::{AppError, AppResult};
use crate::flash::Flash;
use crate::handlers::shared_types::ApiResponse;
use crate::session::CurrentAdmin;
use axum::{
    extract::{FromRequestParts, Path, State},
    http::request::Parts,
    response::Redirect,
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

const LIST_PATH: &str = "/ziyaretci-listesi";

/// Visitor ID taken from the `{id}` path segment.
///
/// A segment that is not an integer names no record and is answered with
/// `404 Not Found`, like an ID that does not exist.
pub struct VisitorId(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for VisitorId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, AppError> {
        // ---
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::MalformedId(e.body_text()))?;

        raw.parse().map(VisitorId).map_err(|_| AppError::MalformedId(raw))
    }
}

/// Data for the shared add/edit form.
#[derive(Debug, Serialize)]
pub struct VisitorFormView {
    // ---
    /// `true` when editing an existing record.
    pub editing: bool,
    pub visitor: Option<VisitorRecord>,
}

/// Handler for the visitor list (GET /ziyaretci-listesi).
///
/// Responds with every record, newest first, plus any flash message left by
/// the add/edit/delete redirect.
pub async fn list_visitors(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
    jar: CookieJar,
) -> AppResult<(CookieJar, ApiResponse<Vec<VisitorRecord>>)> {
    // ---
    let visitors = state.services().visitors.list_visitors().await?;
    let (jar, flash) = Flash::take(jar);

    Ok((jar, ApiResponse::new(visitors).with_flash(flash)))
}

/// Handler for the empty add form (GET /ziyaretci-ekle).
pub async fn add_visitor_form(_admin: CurrentAdmin) -> ApiResponse<VisitorFormView> {
    ApiResponse::new(VisitorFormView {
        editing: false,
        visitor: None,
    })
}

/// Handler for creating a visitor (POST /ziyaretci-ekle).
///
/// - On success, redirects to the list with a confirmation flash.
/// - Blank or oversized fields respond with `400 Bad Request`.
#[tracing::instrument(skip_all)]
pub async fn add_visitor(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
    jar: CookieJar,
    Form(details): Form<VisitorDetails>,
) -> AppResult<(CookieJar, Redirect)> {
    // ---
    state.services().visitors.add_visitor(&details).await?;

    Ok((Flash::VisitorAdded.set(jar), Redirect::to(LIST_PATH)))
}

/// Handler for the prefilled edit form (GET /ziyaretci-duzenle/{id}).
///
/// Responds with `404 Not Found` for an unknown ID.
pub async fn edit_visitor_form(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
    VisitorId(id): VisitorId,
) -> AppResult<ApiResponse<VisitorFormView>> {
    // ---
    let visitor = state.services().visitors.get_visitor(id).await?;

    Ok(ApiResponse::new(VisitorFormView {
        editing: true,
        visitor: Some(visitor),
    }))
}

/// Handler for updating a visitor (POST /ziyaretci-duzenle/{id}).
///
/// Only names and reason change; the visit time is kept.
#[tracing::instrument(skip(state, _admin, jar, details))]
pub async fn edit_visitor(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
    VisitorId(id): VisitorId,
    jar: CookieJar,
    Form(details): Form<VisitorDetails>,
) -> AppResult<(CookieJar, Redirect)> {
    // ---
    state.services().visitors.edit_visitor(id, &details).await?;

    Ok((Flash::VisitorUpdated.set(jar), Redirect::to(LIST_PATH)))
}

/// Handler for deleting a visitor (POST /ziyaretci-sil/{id}).
///
/// Returns:
/// - a redirect to the list if the record was deleted.
/// - `404 Not Found` if no record exists with the given ID.
#[tracing::instrument(skip(state, _admin, jar))]
pub async fn delete_visitor(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
    VisitorId(id): VisitorId,
    jar: CookieJar,
) -> AppResult<(CookieJar, Redirect)> {
    // ---
    state.services().visitors.delete_visitor(id).await?;

    Ok((Flash::VisitorDeleted.set(jar), Redirect::to(LIST_PATH)))
}
