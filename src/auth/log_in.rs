//! This file defines the routes for displaying the log-in page and handling log-in requests.
//! The auth module handles the lower level cookie auth logic.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use maud::{Markup, html};
use rusqlite::Connection;
use serde::Deserialize;
use time::Duration;

use crate::{
    AppState, Error,
    auth::{get_user_by_email, set_auth_cookie},
    endpoints,
    html::{FORM_LABEL_STYLE, FORM_STYLE, FORM_TEXT_INPUT_STYLE, base},
};

const INVALID_CREDENTIALS_ERROR_MSG: &str = "Incorrect email or password.";

fn log_in_form(email: &str, error_message: Option<&str>) -> Markup {
    html! {
        form method="post" action=(endpoints::LOG_IN_VIEW) class=(FORM_STYLE)
        {
            div
            {
                label for="email" class=(FORM_LABEL_STYLE) { "Email" }

                input
                    type="email"
                    name="email"
                    id="email"
                    placeholder="you@example.com"
                    class=(FORM_TEXT_INPUT_STYLE)
                    required
                    autofocus
                    value=(email);
            }

            div
            {
                label for="password" class=(FORM_LABEL_STYLE) { "Password" }

                input
                    type="password"
                    name="password"
                    id="password"
                    placeholder="••••••••"
                    class=(FORM_TEXT_INPUT_STYLE)
                    required;

                @if let Some(error_message) = error_message
                {
                    p class="form-error" { (error_message) }
                }
            }

            button type="submit" class="button button-primary" { "Log in" }
        }
    }
}

fn log_in_page(email: &str, error_message: Option<&str>) -> Markup {
    let content = html! {
        div class="auth-card"
        {
            h1 { "Log in to Pennybook" }

            (log_in_form(email, error_message))
        }
    };

    base("Log In", &content)
}

/// Display the log-in page.
pub async fn get_log_in_page() -> Response {
    log_in_page("", None).into_response()
}

/// The state needed to perform a login.
#[derive(Debug, Clone)]
pub struct LoginState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// The duration for which cookies used for authentication are valid.
    pub cookie_duration: Duration,
    /// The database connection for looking up users.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for LoginState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            cookie_duration: state.cookie_duration,
            db_connection: state.db_connection.clone(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<LoginState> for Key {
    fn from_ref(state: &LoginState) -> Self {
        state.cookie_key.clone()
    }
}

/// The credentials submitted from the log-in form.
#[derive(Debug, Deserialize)]
pub struct LogInForm {
    /// The email the user registered with.
    pub email: String,
    /// The user's plaintext password.
    pub password: String,
}

/// Handler for log-in requests via the POST method.
///
/// On a successful log-in request, the auth cookie is set and the client is
/// redirected to the transactions page. Otherwise, the form is returned with
/// an error message explaining the problem.
pub async fn post_log_in(
    State(state): State<LoginState>,
    jar: PrivateCookieJar,
    Form(form): Form<LogInForm>,
) -> Response {
    let user = {
        let connection = match state.db_connection.lock() {
            Ok(connection) => connection,
            Err(error) => {
                tracing::error!("could not acquire database lock: {error}");
                return Error::DatabaseLockError.into_response();
            }
        };

        get_user_by_email(&form.email, &connection)
    };

    let credentials_check = user.and_then(|user| {
        user.password_hash.verify(&form.password)?;
        Ok(user)
    });

    let user = match credentials_check {
        Ok(user) => user,
        Err(Error::NotFound) | Err(Error::InvalidCredentials) => {
            return (
                StatusCode::UNAUTHORIZED,
                log_in_page(&form.email, Some(INVALID_CREDENTIALS_ERROR_MSG)),
            )
                .into_response();
        }
        Err(error) => return error.into_response(),
    };

    match set_auth_cookie(jar, user.id, state.cookie_duration) {
        Ok(jar) => (jar, Redirect::to(endpoints::TRANSACTIONS_VIEW)).into_response(),
        Err(error) => error.into_response(),
    }
}
