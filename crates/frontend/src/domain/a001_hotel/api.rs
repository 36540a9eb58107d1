use contracts::domain::a001_hotel::aggregate::{Hotel, HotelId, HotelPayload};
use contracts::error::ApiError;

use crate::shared::http;

const RESOURCE: &str = "/hoteles";

/// Fetch all hotels
pub async fn list(access_token: &str) -> Result<Vec<Hotel>, ApiError> {
    http::get_json(RESOURCE, access_token).await
}

/// Create a hotel, returning the record the server assigned an id to
pub async fn create(access_token: &str, payload: &HotelPayload) -> Result<Hotel, ApiError> {
    http::post_json(RESOURCE, access_token, payload).await
}

/// Delete a hotel
pub async fn delete(access_token: &str, id: HotelId) -> Result<(), ApiError> {
    http::delete(&format!("{RESOURCE}/{id}"), access_token).await
}
