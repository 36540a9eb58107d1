use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::common::{require_count, require_text, DraftForm, Labeled};
use crate::error::ApiError;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotelId(pub i64);

impl fmt::Display for HotelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Entity
// ============================================================================

/// A hotel as the API returns it. The client never mutates a hotel in place;
/// the only mutations exposed are create and delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: HotelId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "ciudad")]
    pub city: String,
    /// Tax identification number (NIT).
    pub nit: String,
    #[serde(rename = "numero_habitaciones_maximo")]
    pub max_rooms: u32,
}

impl Labeled for Hotel {
    type Id = HotelId;

    fn id(&self) -> HotelId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Form
// ============================================================================

/// In-progress values of the hotel creation form. `max_rooms` stays text
/// until submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotelDraft {
    pub name: String,
    pub address: String,
    pub city: String,
    pub nit: String,
    pub max_rooms: String,
}

/// Create body for `POST /hoteles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelPayload {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "ciudad")]
    pub city: String,
    pub nit: String,
    #[serde(rename = "numero_habitaciones_maximo")]
    pub max_rooms: u32,
}

impl DraftForm for HotelDraft {
    type Id = HotelId;
    type Payload = HotelPayload;

    fn validate(&self) -> Result<HotelPayload, ApiError> {
        Ok(HotelPayload {
            name: require_text("Nombre", &self.name)?,
            address: require_text("Dirección", &self.address)?,
            city: require_text("Ciudad", &self.city)?,
            nit: require_text("NIT", &self.nit)?,
            max_rooms: require_count("Número máximo de habitaciones", &self.max_rooms)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> HotelDraft {
        HotelDraft {
            name: "Hotel Decameron".into(),
            address: "Calle 10 # 5-51".into(),
            city: "Cartagena".into(),
            nit: "900123456-7".into(),
            max_rooms: "42".into(),
        }
    }

    #[test]
    fn a_complete_draft_produces_the_payload() {
        let payload = full_draft().validate().unwrap();
        assert_eq!(payload.name, "Hotel Decameron");
        assert_eq!(payload.max_rooms, 42);
    }

    #[test]
    fn every_field_is_required() {
        for blank in [
            HotelDraft { name: String::new(), ..full_draft() },
            HotelDraft { address: String::new(), ..full_draft() },
            HotelDraft { city: String::new(), ..full_draft() },
            HotelDraft { nit: String::new(), ..full_draft() },
            HotelDraft { max_rooms: String::new(), ..full_draft() },
        ] {
            assert!(blank.validate().unwrap_err().is_validation());
        }
    }

    #[test]
    fn a_non_numeric_room_count_is_rejected_locally() {
        let draft = HotelDraft { max_rooms: "muchas".into(), ..full_draft() };
        assert!(draft.validate().unwrap_err().is_validation());
    }

    #[test]
    fn the_payload_uses_the_api_field_names() {
        let json = serde_json::to_value(full_draft().validate().unwrap()).unwrap();
        assert_eq!(json["nombre"], "Hotel Decameron");
        assert_eq!(json["direccion"], "Calle 10 # 5-51");
        assert_eq!(json["ciudad"], "Cartagena");
        assert_eq!(json["nit"], "900123456-7");
        assert_eq!(json["numero_habitaciones_maximo"], 42);
    }

    #[test]
    fn a_hotel_record_deserializes_from_the_api_shape() {
        let hotel: Hotel = serde_json::from_str(
            r#"{"id":3,"nombre":"Almirante","direccion":"Av. San Martín","ciudad":"Cartagena","nit":"800.1","numero_habitaciones_maximo":120}"#,
        )
        .unwrap();
        assert_eq!(hotel.id, HotelId(3));
        assert_eq!(hotel.label(), "Almirante");
        assert_eq!(hotel.max_rooms, 120);
    }
}
