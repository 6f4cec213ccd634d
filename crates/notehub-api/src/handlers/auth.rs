//! Account handlers — register, login, logout, current user.
//!
//! Login binds a user id onto the viewer session; logout drops the
//! whole session, which also discards any unlock state it carried.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use validator::Validate;

use notehub_core::error::AppError;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::resolve_viewer;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_service
        .register(&req.username, &req.email, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<UserResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state.user_service.login(&req.username, &req.password).await?;

    let (viewer, jar) = resolve_viewer(&state, jar);
    state.sessions.bind_user(viewer, user.id);

    Ok((jar, Json(ApiResponse::ok(UserResponse::from(user)))))
}

/// POST /api/auth/logout
///
/// Removing the session discards its unlock state along with the login
/// binding; protected shares require the password again afterwards.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    if let Some(cookie) = jar.get(&state.config.session.cookie_name) {
        if let Ok(session_id) = cookie.value().parse::<uuid::Uuid>() {
            state.sessions.remove(session_id);
        }
    }

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Logged out".to_string(),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user_id = jar
        .get(&state.config.session.cookie_name)
        .and_then(|cookie| cookie.value().parse::<uuid::Uuid>().ok())
        .and_then(|session_id| state.sessions.user_id(session_id))
        .ok_or_else(|| AppError::authentication("Not logged in"))?;

    let user = state.user_service.get_user(user_id).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}
