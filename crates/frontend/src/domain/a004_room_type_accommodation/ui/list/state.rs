use contracts::domain::a002_room_type::aggregate::RoomType;
use contracts::domain::a003_accommodation_type::aggregate::AccommodationType;
use contracts::domain::a004_room_type_accommodation::aggregate::RoomTypeAccommodationId;
use contracts::error::ApiError;
use contracts::views::room_type_accommodation::{enrich, RoomTypeAccommodationView};
use contracts::views::LabelIndex;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a002_room_type::api as room_type_api;
use crate::domain::a003_accommodation_type::api as accommodation_type_api;
use crate::domain::a004_room_type_accommodation::api;
use crate::shared::dialog::confirm;
use crate::shared::list_cache::ListCache;
use crate::shared::list_utils::SortState;
use crate::shared::mutation::MutationLock;

/// Controller for the pairing page. The parent collections are kept for the
/// create form's selects; the rendered rows carry resolved names.
#[derive(Clone, Copy)]
pub struct RoomTypeAccommodationPageState {
    pub cache: ListCache<RoomTypeAccommodationView>,
    pub room_types: RwSignal<Vec<RoomType>>,
    pub accommodation_types: RwSignal<Vec<AccommodationType>>,
    pub mutation: MutationLock,
    pub op_error: RwSignal<Option<ApiError>>,
    pub sort: RwSignal<SortState>,
}

impl RoomTypeAccommodationPageState {
    pub fn new() -> Self {
        Self {
            cache: ListCache::new(),
            room_types: RwSignal::new(Vec::new()),
            accommodation_types: RwSignal::new(Vec::new()),
            mutation: MutationLock::new(),
            op_error: RwSignal::new(None),
            sort: RwSignal::new(SortState::new("room_type_name")),
        }
    }

    /// Full reload: the child collection and both parents fetched in
    /// parallel, joined, and applied as one snapshot. Any failure keeps the
    /// previous snapshot.
    pub fn load(self, access_token: String) {
        spawn_local(async move {
            self.cache
                .refresh(move || async move {
                    let (records, room_types, accommodation_types) = futures::join!(
                        api::list(&access_token),
                        room_type_api::list(&access_token),
                        accommodation_type_api::list(&access_token),
                    );
                    let records = records?;
                    let room_types = room_types?;
                    let accommodation_types = accommodation_types?;

                    let views = enrich(
                        &records,
                        &LabelIndex::build(&room_types),
                        &LabelIndex::build(&accommodation_types),
                    );
                    self.room_types.set(room_types);
                    self.accommodation_types.set(accommodation_types);
                    Ok(views)
                })
                .await;
        });
    }

    pub fn delete(self, access_token: String, id: RoomTypeAccommodationId) {
        if !confirm("¿Seguro que deseas eliminar este registro?") {
            return;
        }
        if let Err(e) = self.mutation.try_acquire() {
            self.op_error.set(Some(e));
            return;
        }
        spawn_local(async move {
            let outcome = api::delete(&access_token, id).await;
            self.mutation.release();
            match outcome {
                Ok(()) => {
                    self.op_error.set(None);
                    self.load(access_token);
                }
                Err(e) => {
                    log::error!("delete pairing {id} failed: {e}");
                    self.op_error.set(Some(e));
                }
            }
        });
    }
}
