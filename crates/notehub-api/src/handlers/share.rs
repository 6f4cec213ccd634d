//! Share handlers (JSON API) — create, metadata, unlock.

use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::cookie::CookieJar;

use notehub_core::error::AppError;
use notehub_service::share::service::CreateShareRequest as ServiceCreateShare;

use crate::dto::request::{CreateShareRequest, UnlockShareRequest};
use crate::dto::response::{ApiResponse, ShareCreatedResponse, ShareMetaResponse, UnlockResponse};
use crate::error::ApiError;
use crate::extractors::resolve_viewer;
use crate::state::AppState;

/// POST /api/shares
pub async fn create_share(
    State(state): State<AppState>,
    Json(req): Json<CreateShareRequest>,
) -> Result<Json<ApiResponse<ShareCreatedResponse>>, ApiError> {
    let note_id = req
        .note_id
        .ok_or_else(|| AppError::validation("note_id is required"))?;

    let share = state
        .share_service
        .create_share(ServiceCreateShare {
            note_id,
            password: req.password,
            expires_in_hours: req.expires_in_hours,
        })
        .await?;

    let share_url = state
        .config
        .server
        .url_for(&format!("share/{}", share.share_code));

    Ok(Json(ApiResponse::ok(ShareCreatedResponse {
        id: share.id,
        share_code: share.share_code,
        share_url,
    })))
}

/// GET /api/shares/{code}
///
/// Metadata-only inspection: never increments the view counter.
pub async fn get_share_meta(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<ShareMetaResponse>>, ApiError> {
    let share = state.share_service.metadata(&code).await?;
    Ok(Json(ApiResponse::ok(ShareMetaResponse::from(share))))
}

/// POST /api/shares/{code}/unlock
pub async fn unlock_share(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(code): Path<String>,
    Json(req): Json<UnlockShareRequest>,
) -> Result<(CookieJar, Json<ApiResponse<UnlockResponse>>), ApiError> {
    let (viewer, jar) = resolve_viewer(&state, jar);

    state.access_service.unlock(viewer, &code, &req.password).await?;

    Ok((jar, Json(ApiResponse::ok(UnlockResponse { success: true }))))
}
