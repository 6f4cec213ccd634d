//! Note CRUD handlers (JSON API).

use axum::Json;
use axum::extract::{Path, State};

use notehub_service::note::service::CreateNoteRequest as ServiceCreateNote;

use crate::dto::request::{CreateNoteRequest, UpdateNoteRequest};
use crate::dto::response::{ApiResponse, NoteResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/notes
pub async fn create_note(
    State(state): State<AppState>,
    Json(req): Json<CreateNoteRequest>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    let note = state
        .note_service
        .create_note(ServiceCreateNote {
            user_id: None,
            title: req.title,
            content: req.content,
            metadata: req.metadata,
        })
        .await?;

    let url = state.config.server.url_for(&format!("note/{}", note.id));
    Ok(Json(ApiResponse::ok(NoteResponse::from_note(note, url))))
}

/// GET /api/notes
pub async fn list_notes(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<NoteResponse>>>, ApiError> {
    let notes = state.note_service.list_notes(100).await?;

    let notes = notes
        .into_iter()
        .map(|note| {
            let url = state.config.server.url_for(&format!("note/{}", note.id));
            NoteResponse::from_note(note, url)
        })
        .collect();

    Ok(Json(ApiResponse::ok(notes)))
}

/// GET /api/notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    let note = state.note_service.get_note(id).await?;
    let url = state.config.server.url_for(&format!("note/{}", note.id));
    Ok(Json(ApiResponse::ok(NoteResponse::from_note(note, url))))
}

/// PUT /api/notes/{id}
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    let note = state
        .note_service
        .update_note(
            id,
            notehub_entity::note::UpdateNote {
                title: req.title,
                content: req.content,
                metadata: req.metadata,
            },
        )
        .await?;

    let url = state.config.server.url_for(&format!("note/{}", note.id));
    Ok(Json(ApiResponse::ok(NoteResponse::from_note(note, url))))
}
