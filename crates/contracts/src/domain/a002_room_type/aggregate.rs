use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::common::{require_text, DraftForm, Labeled};
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomTypeId(pub i64);

impl fmt::Display for RoomTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A room type ("Doble", "Suite", ...). Supports rename, so the edit path of
/// the form session applies here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: RoomTypeId,
    #[serde(rename = "nombre")]
    pub name: String,
}

impl Labeled for RoomType {
    type Id = RoomTypeId;

    fn id(&self) -> RoomTypeId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomTypeDraft {
    pub name: String,
}

impl From<&RoomType> for RoomTypeDraft {
    fn from(record: &RoomType) -> Self {
        Self { name: record.name.clone() }
    }
}

/// Body for `POST /tipos-habitacion` and `PUT /tipos-habitacion/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomTypePayload {
    #[serde(rename = "nombre")]
    pub name: String,
}

impl DraftForm for RoomTypeDraft {
    type Id = RoomTypeId;
    type Payload = RoomTypePayload;

    fn validate(&self) -> Result<RoomTypePayload, ApiError> {
        Ok(RoomTypePayload {
            name: require_text("Nombre", &self.name)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_name_is_required() {
        assert!(RoomTypeDraft::default().validate().unwrap_err().is_validation());
        let payload = RoomTypeDraft { name: "Doble".into() }.validate().unwrap();
        assert_eq!(payload.name, "Doble");
    }

    #[test]
    fn editing_prefills_the_draft_from_the_record() {
        let record = RoomType { id: RoomTypeId(4), name: "Suite".into() };
        assert_eq!(RoomTypeDraft::from(&record).name, "Suite");
    }

    #[test]
    fn payload_serializes_with_the_api_field_name() {
        let json = serde_json::to_value(RoomTypePayload { name: "Doble".into() }).unwrap();
        assert_eq!(json, serde_json::json!({ "nombre": "Doble" }));
    }
}
