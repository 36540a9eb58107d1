use crate::domain::a002_room_type::aggregate::RoomTypeId;
use crate::domain::a003_accommodation_type::aggregate::AccommodationTypeId;
use crate::domain::a004_room_type_accommodation::aggregate::{
    RoomTypeAccommodation, RoomTypeAccommodationId,
};
use crate::views::label_index::LabelIndex;

/// A pairing with both foreign keys resolved to display names.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomTypeAccommodationView {
    pub id: RoomTypeAccommodationId,
    pub room_type_id: RoomTypeId,
    pub accommodation_type_id: AccommodationTypeId,
    pub room_type_name: String,
    pub accommodation_type_name: String,
}

/// Pure single-pass join: one output record per input record, raw fields
/// copied unchanged, plus one resolved label per foreign key.
pub fn enrich(
    records: &[RoomTypeAccommodation],
    room_types: &LabelIndex<RoomTypeId>,
    accommodation_types: &LabelIndex<AccommodationTypeId>,
) -> Vec<RoomTypeAccommodationView> {
    records
        .iter()
        .map(|record| RoomTypeAccommodationView {
            id: record.id,
            room_type_id: record.room_type_id,
            accommodation_type_id: record.accommodation_type_id,
            room_type_name: room_types.label_for(record.room_type_id),
            accommodation_type_name: accommodation_types.label_for(record.accommodation_type_id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_room_type::aggregate::RoomType;
    use crate::domain::a003_accommodation_type::aggregate::AccommodationType;
    use crate::views::label_index::UNKNOWN_LABEL;

    fn room_types() -> Vec<RoomType> {
        vec![RoomType { id: RoomTypeId(1), name: "Doble".into() }]
    }

    fn accommodation_types() -> Vec<AccommodationType> {
        vec![AccommodationType { id: AccommodationTypeId(1), name: "Triple".into() }]
    }

    #[test]
    fn resolves_both_labels_and_keeps_the_raw_fields() {
        let records = vec![RoomTypeAccommodation {
            id: RoomTypeAccommodationId(5),
            room_type_id: RoomTypeId(1),
            accommodation_type_id: AccommodationTypeId(1),
        }];

        let views = enrich(
            &records,
            &LabelIndex::build(&room_types()),
            &LabelIndex::build(&accommodation_types()),
        );

        assert_eq!(
            views,
            vec![RoomTypeAccommodationView {
                id: RoomTypeAccommodationId(5),
                room_type_id: RoomTypeId(1),
                accommodation_type_id: AccommodationTypeId(1),
                room_type_name: "Doble".into(),
                accommodation_type_name: "Triple".into(),
            }]
        );
    }

    #[test]
    fn a_dangling_key_gets_the_sentinel_and_the_record_survives() {
        let records = vec![RoomTypeAccommodation {
            id: RoomTypeAccommodationId(5),
            room_type_id: RoomTypeId(1),
            accommodation_type_id: AccommodationTypeId(99),
        }];

        let views = enrich(
            &records,
            &LabelIndex::build(&room_types()),
            &LabelIndex::build(&accommodation_types()),
        );

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].room_type_name, "Doble");
        assert_eq!(views[0].accommodation_type_name, UNKNOWN_LABEL);
        assert_eq!(views[0].accommodation_type_id, AccommodationTypeId(99));
    }

    #[test]
    fn output_length_always_equals_input_length() {
        let records: Vec<RoomTypeAccommodation> = (0..25)
            .map(|n| RoomTypeAccommodation {
                id: RoomTypeAccommodationId(n),
                room_type_id: RoomTypeId(n % 3),
                accommodation_type_id: AccommodationTypeId(n % 4),
            })
            .collect();

        let views = enrich(
            &records,
            &LabelIndex::build(&room_types()),
            &LabelIndex::build(&accommodation_types()),
        );
        assert_eq!(views.len(), records.len());
    }

    #[test]
    fn resolution_is_order_independent() {
        let mut many_room_types = room_types();
        many_room_types.push(RoomType { id: RoomTypeId(2), name: "Suite".into() });
        let reversed: Vec<RoomType> = many_room_types.iter().rev().cloned().collect();

        let records = vec![RoomTypeAccommodation {
            id: RoomTypeAccommodationId(1),
            room_type_id: RoomTypeId(2),
            accommodation_type_id: AccommodationTypeId(1),
        }];

        let forward = enrich(
            &records,
            &LabelIndex::build(&many_room_types),
            &LabelIndex::build(&accommodation_types()),
        );
        let backward = enrich(
            &records,
            &LabelIndex::build(&reversed),
            &LabelIndex::build(&accommodation_types()),
        );
        assert_eq!(forward, backward);
    }
}
