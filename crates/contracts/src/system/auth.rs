use serde::{Deserialize, Serialize};

/// Body for `POST /api/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login answer. The API returns more fields alongside the token;
/// only the token is of interest here and the rest is ignored on
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_response_fields_are_ignored() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"access_token":"abc123","token_type":"bearer","expires_in":3600}"#,
        )
        .unwrap();
        assert_eq!(response.access_token, "abc123");
    }
}
