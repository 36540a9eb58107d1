use thiserror::Error;

/// Outcome kinds shared by form validation and the repository clients.
///
/// `Validation` and `Busy` are produced locally and never reach the network;
/// the remaining kinds classify what came back from the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A local precondition failed before any request was issued.
    #[error("{0}")]
    Validation(String),

    /// The request never produced a usable response.
    #[error("error de red: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("el servidor respondió con el estado {status}")]
    Server { status: u16 },

    /// The targeted record no longer exists on the server.
    #[error("el registro ya no existe en el servidor")]
    NotFound,

    /// Another mutation from this page is still in flight.
    #[error("hay otra operación en curso, espera a que termine")]
    Busy,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Load failures become the page banner; everything else stays scoped to
    /// the operation that caused it.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_displays_its_message_verbatim() {
        let err = ApiError::validation("El campo «Nombre» es obligatorio");
        assert_eq!(err.to_string(), "El campo «Nombre» es obligatorio");
        assert!(err.is_validation());
    }

    #[test]
    fn server_error_carries_the_status() {
        let err = ApiError::Server { status: 422 };
        assert!(err.to_string().contains("422"));
        assert!(!err.is_validation());
    }
}
