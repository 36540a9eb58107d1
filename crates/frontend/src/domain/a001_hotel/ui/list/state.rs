use contracts::domain::a001_hotel::aggregate::{Hotel, HotelId};
use contracts::error::ApiError;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_hotel::api;
use crate::shared::dialog::confirm;
use crate::shared::list_cache::ListCache;
use crate::shared::list_utils::SortState;
use crate::shared::mutation::MutationLock;

/// Controller for the hotel page: the snapshot cache, the per-page mutation
/// lock, and the row-action error (kept apart from the page banner).
#[derive(Clone, Copy)]
pub struct HotelPageState {
    pub cache: ListCache<Hotel>,
    pub mutation: MutationLock,
    pub op_error: RwSignal<Option<ApiError>>,
    pub sort: RwSignal<SortState>,
}

impl HotelPageState {
    pub fn new() -> Self {
        Self {
            cache: ListCache::new(),
            mutation: MutationLock::new(),
            op_error: RwSignal::new(None),
            sort: RwSignal::new(SortState::new("name")),
        }
    }

    /// Full reload; no parent collections on this page.
    pub fn load(self, access_token: String) {
        spawn_local(async move {
            self.cache.refresh(move || async move { api::list(&access_token).await }).await;
        });
    }

    /// Row action. The confirmation must be accepted before any request is
    /// issued; a failure leaves the row in the table.
    pub fn delete(self, access_token: String, id: HotelId) {
        if !confirm("¿Seguro que deseas eliminar este hotel?") {
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
                    log::error!("delete hotel {id} failed: {e}");
                    self.op_error.set(Some(e));
                }
            }
        });
    }
}
