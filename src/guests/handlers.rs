use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::ApiError,
    guests::{
        dto::{CreatedGuest, DataResponse, GuestCard, GuestNameRequest, MessageResponse},
        repo::Guest,
        services,
    },
    state::AppState,
};

pub fn guest_routes() -> Router<AppState> {
    Router::new()
        .route("/guests", get(list_guests).post(create_guest))
        .route(
            "/guests/:unique_id",
            get(get_guest).put(update_guest).delete(delete_guest),
        )
}

fn require_name(body: GuestNameRequest) -> Result<String, ApiError> {
    match body.name.map(|n| n.trim().to_owned()) {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(ApiError::MissingName),
    }
}

#[instrument(skip(state, body))]
pub async fn create_guest(
    State(state): State<AppState>,
    Json(body): Json<GuestNameRequest>,
) -> Result<Json<DataResponse<CreatedGuest>>, ApiError> {
    let name = require_name(body)?;
    let created = services::create_guest(&state, &name).await?;
    info!(unique_id = %created.unique_id, "guest registered");
    Ok(Json(DataResponse::new(created)))
}

#[instrument(skip(state))]
pub async fn get_guest(
    State(state): State<AppState>,
    Path(unique_id): Path<String>,
) -> Result<Json<DataResponse<GuestCard>>, ApiError> {
    let guest = Guest::find_by_unique_id(&state.db, &unique_id)
        .await
        .map_err(|e| ApiError::db("Failed to fetch guest", e))?
        .ok_or(ApiError::GuestNotFound)?;
    Ok(Json(DataResponse::new(guest.into())))
}

#[instrument(skip(state))]
pub async fn list_guests(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<Guest>>>, ApiError> {
    let guests = Guest::list_all(&state.db)
        .await
        .map_err(|e| ApiError::db("Failed to fetch guests", e))?;
    Ok(Json(DataResponse::new(guests)))
}

#[instrument(skip(state, body))]
pub async fn update_guest(
    State(state): State<AppState>,
    Path(unique_id): Path<String>,
    Json(body): Json<GuestNameRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let name = require_name(body)?;
    let affected = Guest::update_name(&state.db, &unique_id, &name)
        .await
        .map_err(|e| ApiError::db("Failed to update guest", e))?;
    if affected == 0 {
        warn!(%unique_id, "rename of unknown guest");
        return Err(ApiError::GuestNotFound);
    }
    Ok(Json(MessageResponse::new("Guest updated successfully")))
}

#[instrument(skip(state))]
pub async fn delete_guest(
    State(state): State<AppState>,
    Path(unique_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = Guest::delete(&state.db, &unique_id)
        .await
        .map_err(|e| ApiError::db("Failed to delete guest", e))?;
    if affected == 0 {
        warn!(%unique_id, "delete of unknown guest");
        return Err(ApiError::GuestNotFound);
    }
    Ok(Json(MessageResponse::new("Guest deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn create(state: &AppState, name: &str) -> CreatedGuest {
        create_guest(
            State(state.clone()),
            Json(GuestNameRequest {
                name: Some(name.into()),
            }),
        )
        .await
        .expect("create")
        .0
        .data
    }

    #[tokio::test]
    async fn create_then_fetch_returns_same_guest() {
        let state = AppState::in_memory().await;
        let created = create(&state, "Alice").await;

        let card = get_guest(State(state.clone()), Path(created.unique_id.clone()))
            .await
            .expect("fetch")
            .0
            .data;
        assert_eq!(card.name, "Alice");
        assert_eq!(card.unique_id, created.unique_id);
        assert_eq!(card.qr_code, created.qr_code);
    }

    #[tokio::test]
    async fn create_rejects_missing_and_blank_names() {
        let state = AppState::in_memory().await;

        for name in [None, Some(String::new()), Some("   ".into())] {
            let err = create_guest(State(state.clone()), Json(GuestNameRequest { name }))
                .await
                .unwrap_err();
            assert!(matches!(err, ApiError::MissingName));
        }

        // Validation fails before any side effect; nothing was persisted.
        let all = list_guests(State(state)).await.expect("list").0.data;
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn fetch_unknown_guest_is_not_found() {
        let state = AppState::in_memory().await;
        let err = get_guest(State(state), Path("never-issued".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::GuestNotFound));
    }

    #[tokio::test]
    async fn rename_keeps_the_token() {
        let state = AppState::in_memory().await;
        let created = create(&state, "Alice").await;

        let ack = update_guest(
            State(state.clone()),
            Path(created.unique_id.clone()),
            Json(GuestNameRequest {
                name: Some("Alicia".into()),
            }),
        )
        .await
        .expect("update")
        .0;
        assert!(ack.success);
        assert_eq!(ack.message, "Guest updated successfully");

        let card = get_guest(State(state), Path(created.unique_id))
            .await
            .expect("fetch")
            .0
            .data;
        assert_eq!(card.name, "Alicia");
        assert_eq!(card.qr_code, created.qr_code);
    }

    #[tokio::test]
    async fn rename_validates_name_and_target() {
        let state = AppState::in_memory().await;

        let err = update_guest(
            State(state.clone()),
            Path("whatever".into()),
            Json(GuestNameRequest { name: None }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::MissingName));

        let err = update_guest(
            State(state),
            Path("never-issued".into()),
            Json(GuestNameRequest {
                name: Some("Alicia".into()),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::GuestNotFound));
    }

    #[tokio::test]
    async fn delete_is_idempotent_in_failure() {
        let state = AppState::in_memory().await;
        let created = create(&state, "Alice").await;

        let ack = delete_guest(State(state.clone()), Path(created.unique_id.clone()))
            .await
            .expect("delete")
            .0;
        assert_eq!(ack.message, "Guest deleted successfully");

        let err = delete_guest(State(state.clone()), Path(created.unique_id.clone()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::GuestNotFound));

        let err = get_guest(State(state), Path(created.unique_id))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::GuestNotFound));
    }

    #[tokio::test]
    async fn list_reflects_creates_and_deletes_newest_first() {
        let state = AppState::in_memory().await;
        let a = create(&state, "Alice").await;
        let b = create(&state, "Bob").await;
        let c = create(&state, "Carol").await;

        delete_guest(State(state.clone()), Path(b.unique_id))
            .await
            .expect("delete");

        let all = list_guests(State(state)).await.expect("list").0.data;
        let uids: Vec<&str> = all.iter().map(|g| g.unique_id.as_str()).collect();
        assert_eq!(uids, [c.unique_id.as_str(), a.unique_id.as_str()]);
    }
}
