use tracing::debug;
use uuid::Uuid;

use crate::error::ApiError;
use crate::guests::dto::CreatedGuest;
use crate::guests::repo::Guest;
use crate::qr;
use crate::state::AppState;

/// Mint a fresh guest identifier: a 128-bit random value, hex-encoded to
/// 32 characters. Collisions are left to the unique constraint on the table.
pub fn generate_unique_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// The whole creation flow: identifier, URLs, QR token, row. The token
/// encodes only the check-in URL, so it stays valid across later renames.
pub async fn create_guest(state: &AppState, name: &str) -> Result<CreatedGuest, ApiError> {
    let unique_id = generate_unique_id();
    let checkin_url = state.config.urls.checkin_url(&unique_id);
    let invitation_url = state.config.urls.invitation_url(&unique_id);

    let qr_code = qr::encode_data_uri(&checkin_url).map_err(ApiError::QrEncoding)?;

    let guest = Guest::insert(&state.db, &unique_id, name, &qr_code)
        .await
        .map_err(|e| ApiError::db("Failed to create guest", e))?;

    debug!(unique_id = %guest.unique_id, id = guest.id, "guest created");

    Ok(CreatedGuest {
        id: guest.id,
        unique_id: guest.unique_id,
        name: guest.name,
        qr_code: guest.qr_code,
        invitation_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identifiers_are_32_hex_chars() {
        let id = generate_unique_id();
        assert_eq!(id.len(), 32);
        assert!(id.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
    }

    #[test]
    fn identifiers_do_not_repeat() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_unique_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[tokio::test]
    async fn same_name_twice_creates_two_distinct_guests() {
        let state = AppState::in_memory().await;
        let a = create_guest(&state, "Alice").await.expect("first create");
        let b = create_guest(&state, "Alice").await.expect("second create");
        assert_ne!(a.unique_id, b.unique_id);
        assert_ne!(a.id, b.id);

        let all = Guest::list_all(&state.db).await.expect("list");
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn created_guest_carries_token_and_invitation_url() {
        let state = AppState::in_memory().await;
        let created = create_guest(&state, "Alice").await.expect("create");

        assert!(created.qr_code.starts_with("data:image/png;base64,"));
        assert_eq!(
            created.invitation_url,
            format!("https://invite.test/invitation/{}", created.unique_id)
        );

        // The persisted token is exactly the check-in URL, encoded.
        let expected =
            qr::encode_data_uri(&state.config.urls.checkin_url(&created.unique_id)).unwrap();
        assert_eq!(created.qr_code, expected);
    }

    #[tokio::test]
    async fn created_guest_is_immediately_fetchable() {
        let state = AppState::in_memory().await;
        let created = create_guest(&state, "Alice").await.expect("create");

        let fetched = Guest::find_by_unique_id(&state.db, &created.unique_id)
            .await
            .expect("query")
            .expect("row");
        assert_eq!(fetched.name, "Alice");
        assert_eq!(fetched.qr_code, created.qr_code);
    }
}
