use crate::domain::a001_hotel::aggregate::HotelId;
use crate::domain::a002_room_type::aggregate::RoomTypeId;
use crate::domain::a003_accommodation_type::aggregate::AccommodationTypeId;
use crate::domain::a005_hotel_room_inventory::aggregate::{
    HotelRoomInventory, HotelRoomInventoryId,
};
use crate::views::label_index::LabelIndex;

/// A room-inventory row with all three foreign keys resolved to display
/// names.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelRoomInventoryView {
    pub id: HotelRoomInventoryId,
    pub hotel_id: HotelId,
    pub room_type_id: RoomTypeId,
    pub accommodation_type_id: AccommodationTypeId,
    pub quantity: u32,
    pub hotel_name: String,
    pub room_type_name: String,
    pub accommodation_type_name: String,
}

pub fn enrich(
    records: &[HotelRoomInventory],
    hotels: &LabelIndex<HotelId>,
    room_types: &LabelIndex<RoomTypeId>,
    accommodation_types: &LabelIndex<AccommodationTypeId>,
) -> Vec<HotelRoomInventoryView> {
    records
        .iter()
        .map(|record| HotelRoomInventoryView {
            id: record.id,
            hotel_id: record.hotel_id,
            room_type_id: record.room_type_id,
            accommodation_type_id: record.accommodation_type_id,
            quantity: record.quantity,
            hotel_name: hotels.label_for(record.hotel_id),
            room_type_name: room_types.label_for(record.room_type_id),
            accommodation_type_name: accommodation_types.label_for(record.accommodation_type_id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_hotel::aggregate::Hotel;
    use crate::domain::a002_room_type::aggregate::RoomType;
    use crate::domain::a003_accommodation_type::aggregate::AccommodationType;
    use crate::views::label_index::UNKNOWN_LABEL;

    fn record() -> HotelRoomInventory {
        HotelRoomInventory {
            id: HotelRoomInventoryId(9),
            hotel_id: HotelId(1),
            room_type_id: RoomTypeId(2),
            accommodation_type_id: AccommodationTypeId(3),
            quantity: 15,
        }
    }

    fn hotels() -> Vec<Hotel> {
        vec![Hotel {
            id: HotelId(1),
            name: "Almirante".into(),
            address: "Av. San Martín".into(),
            city: "Cartagena".into(),
            nit: "800.1".into(),
            max_rooms: 120,
        }]
    }

    #[test]
    fn resolves_all_three_labels() {
        let room_types = vec![RoomType { id: RoomTypeId(2), name: "Doble".into() }];
        let accommodation_types =
            vec![AccommodationType { id: AccommodationTypeId(3), name: "Triple".into() }];

        let views = enrich(
            &[record()],
            &LabelIndex::build(&hotels()),
            &LabelIndex::build(&room_types),
            &LabelIndex::build(&accommodation_types),
        );

        assert_eq!(views.len(), 1);
        let view = &views[0];
        assert_eq!(view.hotel_name, "Almirante");
        assert_eq!(view.room_type_name, "Doble");
        assert_eq!(view.accommodation_type_name, "Triple");
        assert_eq!(view.quantity, 15);
    }

    #[test]
    fn missing_parent_collections_degrade_to_sentinels_without_dropping_rows() {
        let views = enrich(
            &[record()],
            &LabelIndex::build(&hotels()),
            &LabelIndex::build(&[] as &[RoomType]),
            &LabelIndex::build(&[] as &[AccommodationType]),
        );

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].hotel_name, "Almirante");
        assert_eq!(views[0].room_type_name, UNKNOWN_LABEL);
        assert_eq!(views[0].accommodation_type_name, UNKNOWN_LABEL);
        // raw fields untouched
        assert_eq!(views[0].room_type_id, RoomTypeId(2));
    }
}
