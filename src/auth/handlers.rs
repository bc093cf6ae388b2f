use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    routing::{get, post},
    Form, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginForm, RegisterForm},
        repo_types::NewUser,
    },
    error::AppError,
    state::AppState,
};

const LOGIN_PAGE: &str = include_str!("../../templates/login.html");
const REGISTER_PAGE: &str = include_str!("../../templates/register.html");

pub const REGISTERED: &str = "Registration Successful";
pub const LOGGED_IN: &str = "Login Successful";
pub const INVALID_CREDENTIALS: &str = "Invalid Credentials";

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/register", get(register_form).post(register))
        .route("/login", post(login))
}

/// The home page is the login form.
pub async fn home() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}

pub async fn register_form() -> Html<&'static str> {
    Html(REGISTER_PAGE)
}

/// No uniqueness or format checks; every submission becomes a row.
#[instrument(skip(state, form))]
pub async fn register(
    State(state): State<AppState>,
    form: Result<Form<RegisterForm>, FormRejection>,
) -> Result<&'static str, AppError> {
    let Form(form) = form?;
    let user = NewUser::from(form);
    state.users.insert(&user).await?;

    info!(username = %user.username, email = %user.email, "user registered");
    Ok(REGISTERED)
}

#[instrument(skip(state, form))]
pub async fn login(
    State(state): State<AppState>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<&'static str, AppError> {
    let Form(form) = form?;
    match state
        .users
        .find_by_credentials(&form.email, &form.password)
        .await?
    {
        Some(user) => {
            info!(username = %user.username, email = %user.email, "user logged in");
            Ok(LOGGED_IN)
        }
        None => {
            warn!(email = %form.email, "login invalid credentials");
            Ok(INVALID_CREDENTIALS)
        }
    }
}
