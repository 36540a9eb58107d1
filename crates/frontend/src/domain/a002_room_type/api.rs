use contracts::domain::a002_room_type::aggregate::{RoomType, RoomTypeId, RoomTypePayload};
use contracts::error::ApiError;

use crate::shared::http;

const RESOURCE: &str = "/tipos-habitacion";

pub async fn list(access_token: &str) -> Result<Vec<RoomType>, ApiError> {
    http::get_json(RESOURCE, access_token).await
}

pub async fn create(access_token: &str, payload: &RoomTypePayload) -> Result<RoomType, ApiError> {
    http::post_json(RESOURCE, access_token, payload).await
}

/// Rename an existing room type
pub async fn update(
    access_token: &str,
    id: RoomTypeId,
    payload: &RoomTypePayload,
) -> Result<RoomType, ApiError> {
    http::put_json(&format!("{RESOURCE}/{id}"), access_token, payload).await
}

pub async fn delete(access_token: &str, id: RoomTypeId) -> Result<(), ApiError> {
    http::delete(&format!("{RESOURCE}/{id}"), access_token).await
}
