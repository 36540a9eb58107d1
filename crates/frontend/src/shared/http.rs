//! Shared request helpers for the entity repository clients.
//!
//! Every helper performs exactly one outbound request, attaches the caller's
//! credential, and classifies the outcome into [`ApiError`] kinds. No retries
//! and no cache writes happen here; callers re-list explicitly after a
//! successful mutation.

use contracts::error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;

fn bearer(access_token: &str) -> String {
    format!("Bearer {}", access_token)
}

fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.status() == 404 {
        return Err(ApiError::NotFound);
    }
    if !response.ok() {
        return Err(ApiError::Server { status: response.status() });
    }
    Ok(())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Network(format!("respuesta ilegible: {e}")))
}

pub async fn get_json<T: DeserializeOwned>(path: &str, access_token: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .header("Authorization", &bearer(access_token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check_status(&response)?;
    decode(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    access_token: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .header("Accept", "application/json")
        .header("Authorization", &bearer(access_token))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check_status(&response)?;
    decode(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    access_token: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::put(&api_url(path))
        .header("Accept", "application/json")
        .header("Authorization", &bearer(access_token))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check_status(&response)?;
    decode(response).await
}

pub async fn delete(path: &str, access_token: &str) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(path))
        .header("Accept", "application/json")
        .header("Authorization", &bearer(access_token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check_status(&response)?;
    Ok(())
}
