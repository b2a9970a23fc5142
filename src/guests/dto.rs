use serde::{Deserialize, Serialize};

use crate::guests::repo::Guest;

/// Body for create and rename. `name` is optional so an absent field turns
/// into the validation error instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct GuestNameRequest {
    pub name: Option<String>,
}

/// Envelope for every payload-carrying success response.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Envelope for write acknowledgments.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

/// Creation payload returned to the admin client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedGuest {
    pub id: i64,
    pub unique_id: String,
    pub name: String,
    pub qr_code: String,
    pub invitation_url: String,
}

/// Guest view for the invitation page; numeric id and timestamp stay internal.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestCard {
    pub name: String,
    pub qr_code: String,
    pub unique_id: String,
}

impl From<Guest> for GuestCard {
    fn from(g: Guest) -> Self {
        Self {
            name: g.name,
            qr_code: g.qr_code,
            unique_id: g.unique_id,
        }
    }
}
