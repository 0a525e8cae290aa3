//! Login and logout handlers.
//!
//! `POST /giris` checks the submitted credentials, stores the new session
//! token in the session cookie and redirects to the landing page. Any session
//! the client presented is ended first. A failed attempt re-renders the login
//! view with an error message.

use crate::app_state::AppState;
use crate::error::{AppResult, LOGIN_PATH};
use crate::flash::Flash;
use crate::handlers::shared_types::ApiResponse;
use crate::session::CurrentAdmin;
use axum::{
    extract::State,
    response::Redirect,
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

// ============================================================================
// Request/Response Types
// ============================================================================

/// Data for the login page.
#[derive(Debug, Serialize)]
pub struct LoginView {
    // ---
    /// Where the login form posts to.
    pub action: &'static str,
    pub fields: [&'static str; 2],
}

impl Default for LoginView {
    fn default() -> Self {
        Self {
            action: LOGIN_PATH,
            fields: ["username", "password"],
        }
    }
}

#[derive(Deserialize)]
pub struct LoginForm {
    // ---
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// `GET /giris`: the login view, with any pending flash message.
pub async fn login_page(jar: CookieJar) -> (CookieJar, ApiResponse<LoginView>) {
    // ---
    let (jar, flash) = Flash::take(jar);
    (jar, ApiResponse::new(LoginView::default()).with_flash(flash))
}

/// `POST /giris`: authenticate and open a session.
#[tracing::instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> AppResult<(CookieJar, Redirect)> {
    // ---
    let auth = &state.services().auth;
    let token = auth.login(&form.username, &form.password).await?;

    // A session already held by this client is replaced, not kept alongside.
    if let Some(previous) = jar.get(&state.cookies().name) {
        auth.logout(previous.value()).await?;
    }

    let jar = jar.add(state.cookies().session_cookie(token));
    Ok((jar, Redirect::to("/")))
}

/// `GET /cikis`: end the session and return to the login page.
pub async fn logout(
    State(state): State<AppState>,
    admin: CurrentAdmin,
    jar: CookieJar,
) -> AppResult<(CookieJar, Redirect)> {
    // ---
    state.services().auth.logout(&admin.token).await?;
    tracing::info!("User logged out: {}", admin.session.username);

    let jar = jar.remove(state.cookies().removal_cookie());
    Ok((jar, Redirect::to(LOGIN_PATH)))
}
