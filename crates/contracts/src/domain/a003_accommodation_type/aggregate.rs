use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::common::{require_text, DraftForm, Labeled};
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccommodationTypeId(pub i64);

impl fmt::Display for AccommodationTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An accommodation type ("Sencilla", "Doble", "Triple", ...). Renameable,
/// same shape and lifecycle as room types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccommodationType {
    pub id: AccommodationTypeId,
    #[serde(rename = "nombre")]
    pub name: String,
}

impl Labeled for AccommodationType {
    type Id = AccommodationTypeId;

    fn id(&self) -> AccommodationTypeId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccommodationTypeDraft {
    pub name: String,
}

impl From<&AccommodationType> for AccommodationTypeDraft {
    fn from(record: &AccommodationType) -> Self {
        Self { name: record.name.clone() }
    }
}

/// Body for `POST /tipos-acomodacion` and `PUT /tipos-acomodacion/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccommodationTypePayload {
    #[serde(rename = "nombre")]
    pub name: String,
}

impl DraftForm for AccommodationTypeDraft {
    type Id = AccommodationTypeId;
    type Payload = AccommodationTypePayload;

    fn validate(&self) -> Result<AccommodationTypePayload, ApiError> {
        Ok(AccommodationTypePayload {
            name: require_text("Nombre", &self.name)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_blank_name_never_reaches_the_network() {
        let err = AccommodationTypeDraft { name: "  ".into() }.validate().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn a_valid_draft_produces_the_rename_payload() {
        let payload = AccommodationTypeDraft { name: "Triple".into() }.validate().unwrap();
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            serde_json::json!({ "nombre": "Triple" })
        );
    }
}
