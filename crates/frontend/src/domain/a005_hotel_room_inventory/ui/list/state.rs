use contracts::domain::a001_hotel::aggregate::Hotel;
use contracts::domain::a002_room_type::aggregate::RoomType;
use contracts::domain::a003_accommodation_type::aggregate::AccommodationType;
use contracts::views::hotel_room_inventory::{enrich, HotelRoomInventoryView};
use contracts::views::LabelIndex;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_hotel::api as hotel_api;
use crate::domain::a002_room_type::api as room_type_api;
use crate::domain::a003_accommodation_type::api as accommodation_type_api;
use crate::domain::a005_hotel_room_inventory::api;
use crate::shared::list_cache::ListCache;
use crate::shared::list_utils::SortState;
use crate::shared::mutation::MutationLock;

/// Controller for the room-inventory page. Three parent collections feed the
/// join and the create form; rows expose no actions.
#[derive(Clone, Copy)]
pub struct HotelRoomInventoryPageState {
    pub cache: ListCache<HotelRoomInventoryView>,
    pub hotels: RwSignal<Vec<Hotel>>,
    pub room_types: RwSignal<Vec<RoomType>>,
    pub accommodation_types: RwSignal<Vec<AccommodationType>>,
    pub mutation: MutationLock,
    pub sort: RwSignal<SortState>,
}

impl HotelRoomInventoryPageState {
    pub fn new() -> Self {
        Self {
            cache: ListCache::new(),
            hotels: RwSignal::new(Vec::new()),
            room_types: RwSignal::new(Vec::new()),
            accommodation_types: RwSignal::new(Vec::new()),
            mutation: MutationLock::new(),
            sort: RwSignal::new(SortState::new("hotel_name")),
        }
    }

    /// Full reload: the inventory rows plus all three parents in parallel,
    /// joined into one snapshot.
    pub fn load(self, access_token: String) {
        spawn_local(async move {
            self.cache
                .refresh(move || async move {
                    let (records, hotels, room_types, accommodation_types) = futures::join!(
                        api::list(&access_token),
                        hotel_api::list(&access_token),
                        room_type_api::list(&access_token),
                        accommodation_type_api::list(&access_token),
                    );
                    let records = records?;
                    let hotels = hotels?;
                    let room_types = room_types?;
                    let accommodation_types = accommodation_types?;

                    let views = enrich(
                        &records,
                        &LabelIndex::build(&hotels),
                        &LabelIndex::build(&room_types),
                        &LabelIndex::build(&accommodation_types),
                    );
                    self.hotels.set(hotels);
                    self.room_types.set(room_types);
                    self.accommodation_types.set(accommodation_types);
                    Ok(views)
                })
                .await;
        });
    }
}
