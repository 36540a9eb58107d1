use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::a001_hotel::aggregate::HotelId;
use crate::domain::a002_room_type::aggregate::RoomTypeId;
use crate::domain::a003_accommodation_type::aggregate::AccommodationTypeId;
use crate::domain::common::{require_count, require_reference, DraftForm};
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotelRoomInventoryId(pub i64);

impl fmt::Display for HotelRoomInventoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// "This hotel stocks N rooms of this room-type / accommodation-type
/// combination." Create-only: the API exposes no edit or delete path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelRoomInventory {
    pub id: HotelRoomInventoryId,
    pub hotel_id: HotelId,
    #[serde(rename = "tipo_habitacion_id")]
    pub room_type_id: RoomTypeId,
    #[serde(rename = "tipo_acomodacion_id")]
    pub accommodation_type_id: AccommodationTypeId,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotelRoomInventoryDraft {
    pub hotel_id: String,
    pub room_type_id: String,
    pub accommodation_type_id: String,
    pub quantity: String,
}

/// Create body for `POST /habitaciones-hotel`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelRoomInventoryPayload {
    pub hotel_id: HotelId,
    #[serde(rename = "tipo_habitacion_id")]
    pub room_type_id: RoomTypeId,
    #[serde(rename = "tipo_acomodacion_id")]
    pub accommodation_type_id: AccommodationTypeId,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

impl DraftForm for HotelRoomInventoryDraft {
    type Id = HotelRoomInventoryId;
    type Payload = HotelRoomInventoryPayload;

    fn validate(&self) -> Result<HotelRoomInventoryPayload, ApiError> {
        Ok(HotelRoomInventoryPayload {
            hotel_id: require_reference("Hotel", &self.hotel_id, HotelId)?,
            room_type_id: require_reference("Tipo de habitación", &self.room_type_id, RoomTypeId)?,
            accommodation_type_id: require_reference(
                "Tipo de acomodación",
                &self.accommodation_type_id,
                AccommodationTypeId,
            )?,
            quantity: require_count("Cantidad", &self.quantity)?,
        })
    }
}
