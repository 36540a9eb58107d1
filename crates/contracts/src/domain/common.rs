use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::ApiError;

/// A parent entity the reference resolver can index: stable identity plus a
/// human-readable label.
pub trait Labeled {
    type Id: Copy + Eq + Hash;

    fn id(&self) -> Self::Id;
    fn label(&self) -> &str;
}

/// In-progress form values for one entity.
///
/// Every field is carried as text while the form is open; `validate` checks
/// presence (and numeric parse where it applies) and produces the typed
/// payload sent to the API. Anything deeper (uniqueness, referential
/// integrity) is the backend's to enforce.
pub trait DraftForm: Clone + Default + Send + Sync + 'static {
    type Id: Copy + Eq + Debug + Send + Sync + 'static;
    type Payload: Serialize;

    fn validate(&self) -> Result<Self::Payload, ApiError>;
}

/// A required text field. Surrounding whitespace does not count as content.
pub fn require_text(label: &str, value: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(format!(
            "El campo «{label}» es obligatorio"
        )));
    }
    Ok(trimmed.to_string())
}

/// A required non-negative count, carried as text until submission.
pub fn require_count(label: &str, value: &str) -> Result<u32, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(format!(
            "El campo «{label}» es obligatorio"
        )));
    }
    trimmed.parse::<u32>().map_err(|_| {
        ApiError::validation(format!("El campo «{label}» debe ser un número válido"))
    })
}

/// A required foreign-key selection, carried as the selected option's value.
pub fn require_reference<I>(label: &str, value: &str, make: fn(i64) -> I) -> Result<I, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(format!(
            "Selecciona un valor para «{label}»"
        )));
    }
    trimmed.parse::<i64>().map(make).map_err(|_| {
        ApiError::validation(format!("La selección de «{label}» no es válida"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_text_rejects_blank_and_whitespace() {
        assert!(require_text("Nombre", "").is_err());
        assert!(require_text("Nombre", "   ").is_err());
        assert_eq!(require_text("Nombre", " Doble ").unwrap(), "Doble");
    }

    #[test]
    fn require_count_rejects_non_numeric_and_negative() {
        assert!(require_count("Cantidad", "").is_err());
        assert!(require_count("Cantidad", "abc").is_err());
        assert!(require_count("Cantidad", "-3").is_err());
        assert_eq!(require_count("Cantidad", "12").unwrap(), 12);
        assert_eq!(require_count("Cantidad", "0").unwrap(), 0);
    }

    #[test]
    fn require_reference_parses_the_selected_id() {
        #[derive(Debug, PartialEq)]
        struct Id(i64);

        assert!(require_reference("Hotel", "", Id).is_err());
        assert!(require_reference("Hotel", "uno", Id).is_err());
        assert_eq!(require_reference("Hotel", "7", Id).unwrap(), Id(7));
    }

    #[test]
    fn validation_failures_are_validation_errors() {
        let err = require_text("Ciudad", "").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Ciudad"));
    }
}
