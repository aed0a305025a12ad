use axum::{
    extract::{Json, State},
};
use crate::errors::{AppError, AppResult};
use crate::models::{CredentialsForm, UserResponse};
use crate::state::AppState;
use super::json::AppJson;

pub async fn handle_register(
    State(state): State<AppState>,
    AppJson(form): AppJson<CredentialsForm>,
) -> AppResult<Json<UserResponse>> {
    tracing::info!("Registration attempt for user: {}", form.username);

    let username = state.users.register(&form.username, &form.password)?;
    tracing::debug!("Registered users: {}", state.users.len()?);
    Ok(Json(username.into()))
}

#[axum::debug_handler]
pub async fn handle_login(
    State(state): State<AppState>,
    AppJson(form): AppJson<CredentialsForm>,
) -> AppResult<Json<UserResponse>> {
    tracing::info!("Login attempt for user: {}", form.username);

    let username = state.users.login(&form.username, &form.password)?;

    // The store lock is already released here
    state.login_delay.wait().await;
    Ok(Json(username.into()))
}

pub async fn handle_current_user(
    State(state): State<AppState>,
) -> AppResult<Json<UserResponse>> {
    let user = state.users.current_user()?.ok_or(AppError::NoActiveSession)?;

    tracing::debug!("Current user: {}", user.username);
    Ok(Json(user.into()))
}

#[axum::debug_handler]
pub async fn handle_logout(
    State(state): State<AppState>,
) -> AppResult<Json<UserResponse>> {
    let user = state.users.logout()?.ok_or(AppError::NoActiveSession)?;
    Ok(Json(user.into()))
}
