use contracts::domain::a003_accommodation_type::aggregate::{
    AccommodationType, AccommodationTypeId, AccommodationTypePayload,
};
use contracts::error::ApiError;

use crate::shared::http;

const RESOURCE: &str = "/tipos-acomodacion";

pub async fn list(access_token: &str) -> Result<Vec<AccommodationType>, ApiError> {
    http::get_json(RESOURCE, access_token).await
}

pub async fn create(
    access_token: &str,
    payload: &AccommodationTypePayload,
) -> Result<AccommodationType, ApiError> {
    http::post_json(RESOURCE, access_token, payload).await
}

/// Rename an existing accommodation type
pub async fn update(
    access_token: &str,
    id: AccommodationTypeId,
    payload: &AccommodationTypePayload,
) -> Result<AccommodationType, ApiError> {
    http::put_json(&format!("{RESOURCE}/{id}"), access_token, payload).await
}

pub async fn delete(access_token: &str, id: AccommodationTypeId) -> Result<(), ApiError> {
    http::delete(&format!("{RESOURCE}/{id}"), access_token).await
}
