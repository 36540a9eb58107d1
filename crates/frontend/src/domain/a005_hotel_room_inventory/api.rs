use contracts::domain::a005_hotel_room_inventory::aggregate::{
    HotelRoomInventory, HotelRoomInventoryPayload,
};
use contracts::error::ApiError;

use crate::shared::http;

const RESOURCE: &str = "/habitaciones-hotel";

pub async fn list(access_token: &str) -> Result<Vec<HotelRoomInventory>, ApiError> {
    http::get_json(RESOURCE, access_token).await
}

/// The API exposes no edit or delete path for inventory rows; create is the
/// only mutation.
pub async fn create(
    access_token: &str,
    payload: &HotelRoomInventoryPayload,
) -> Result<HotelRoomInventory, ApiError> {
    http::post_json(RESOURCE, access_token, payload).await
}
