use contracts::domain::a004_room_type_accommodation::aggregate::{
    RoomTypeAccommodation, RoomTypeAccommodationId, RoomTypeAccommodationPayload,
};
use contracts::error::ApiError;

use crate::shared::http;

const RESOURCE: &str = "/tipos-habitacion-acomodacion";

pub async fn list(access_token: &str) -> Result<Vec<RoomTypeAccommodation>, ApiError> {
    http::get_json(RESOURCE, access_token).await
}

pub async fn create(
    access_token: &str,
    payload: &RoomTypeAccommodationPayload,
) -> Result<RoomTypeAccommodation, ApiError> {
    http::post_json(RESOURCE, access_token, payload).await
}

/// Pairings are not edited in place; replacing one is delete + recreate.
pub async fn delete(access_token: &str, id: RoomTypeAccommodationId) -> Result<(), ApiError> {
    http::delete(&format!("{RESOURCE}/{id}"), access_token).await
}
