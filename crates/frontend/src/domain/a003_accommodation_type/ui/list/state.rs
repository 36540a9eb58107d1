use contracts::domain::a003_accommodation_type::aggregate::{
    AccommodationType, AccommodationTypeId,
};
use contracts::error::ApiError;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a003_accommodation_type::api;
use crate::shared::dialog::confirm;
use crate::shared::list_cache::ListCache;
use crate::shared::list_utils::SortState;
use crate::shared::mutation::MutationLock;

#[derive(Clone, Copy)]
pub struct AccommodationTypePageState {
    pub cache: ListCache<AccommodationType>,
    pub mutation: MutationLock,
    pub op_error: RwSignal<Option<ApiError>>,
    pub sort: RwSignal<SortState>,
}

impl AccommodationTypePageState {
    pub fn new() -> Self {
        Self {
            cache: ListCache::new(),
            mutation: MutationLock::new(),
            op_error: RwSignal::new(None),
            sort: RwSignal::new(SortState::new("name")),
        }
    }

    pub fn load(self, access_token: String) {
        spawn_local(async move {
            self.cache.refresh(move || async move { api::list(&access_token).await }).await;
        });
    }

    pub fn delete(self, access_token: String, id: AccommodationTypeId) {
        if !confirm("¿Estás seguro de eliminar este registro?") {
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
                    log::error!("delete accommodation type {id} failed: {e}");
                    self.op_error.set(Some(e));
                }
            }
        });
    }
}
