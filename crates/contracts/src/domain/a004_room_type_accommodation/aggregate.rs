use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::a002_room_type::aggregate::RoomTypeId;
use crate::domain::a003_accommodation_type::aggregate::AccommodationTypeId;
use crate::domain::common::{require_reference, DraftForm};
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomTypeAccommodationId(pub i64);

impl fmt::Display for RoomTypeAccommodationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An allowed room-type / accommodation-type pairing. Pairings are never
/// edited in place; changing one is delete + recreate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomTypeAccommodation {
    pub id: RoomTypeAccommodationId,
    #[serde(rename = "tipo_habitacion_id")]
    pub room_type_id: RoomTypeId,
    #[serde(rename = "tipo_acomodacion_id")]
    pub accommodation_type_id: AccommodationTypeId,
}

/// Both foreign keys arrive as `<select>` values, so they stay text until
/// submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomTypeAccommodationDraft {
    pub room_type_id: String,
    pub accommodation_type_id: String,
}

/// Create body for `POST /tipos-habitacion-acomodacion`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomTypeAccommodationPayload {
    #[serde(rename = "tipo_habitacion_id")]
    pub room_type_id: RoomTypeId,
    #[serde(rename = "tipo_acomodacion_id")]
    pub accommodation_type_id: AccommodationTypeId,
}

impl DraftForm for RoomTypeAccommodationDraft {
    type Id = RoomTypeAccommodationId;
    type Payload = RoomTypeAccommodationPayload;

    fn validate(&self) -> Result<RoomTypeAccommodationPayload, ApiError> {
        Ok(RoomTypeAccommodationPayload {
            room_type_id: require_reference("Tipo de habitación", &self.room_type_id, RoomTypeId)?,
            accommodation_type_id: require_reference(
                "Tipo de acomodación",
                &self.accommodation_type_id,
                AccommodationTypeId,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_selections_are_required() {
        let only_room_type = RoomTypeAccommodationDraft {
            room_type_id: "1".into(),
            accommodation_type_id: String::new(),
        };
        assert!(only_room_type.validate().unwrap_err().is_validation());
        assert!(RoomTypeAccommodationDraft::default()
            .validate()
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn selections_become_numeric_foreign_keys() {
        let draft = RoomTypeAccommodationDraft {
            room_type_id: "1".into(),
            accommodation_type_id: "2".into(),
        };
        let json = serde_json::to_value(draft.validate().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "tipo_habitacion_id": 1, "tipo_acomodacion_id": 2 })
        );
    }

    #[test]
    fn records_deserialize_from_the_api_shape() {
        let record: RoomTypeAccommodation = serde_json::from_str(
            r#"{"id":5,"tipo_habitacion_id":1,"tipo_acomodacion_id":1}"#,
        )
        .unwrap();
        assert_eq!(record.id, RoomTypeAccommodationId(5));
        assert_eq!(record.room_type_id, RoomTypeId(1));
        assert_eq!(record.accommodation_type_id, AccommodationTypeId(1));
    }
}
