//! Snapshot cache backing one list page.
//!
//! Holds the decorated rows the table renders, replaces them wholesale on
//! every reload, and keeps the previous snapshot when a reload fails. There
//! is no partial-update path: the backend owns the data and a full re-list is
//! the only way the snapshot changes.

use contracts::error::ApiError;
use leptos::prelude::*;
use std::future::Future;

pub struct ListCache<T: Send + Sync + 'static> {
    rows: RwSignal<Vec<T>>,
    error: RwSignal<Option<ApiError>>,
    loading: RwSignal<bool>,
}

impl<T: Send + Sync + 'static> Clone for ListCache<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListCache<T> {}

impl<T: Clone + Send + Sync + 'static> ListCache<T> {
    pub fn new() -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    /// Current snapshot (reactive read).
    pub fn rows(self) -> Vec<T> {
        self.rows.get()
    }

    /// Page-level load error, if the latest reload failed (reactive read).
    pub fn error(self) -> Option<ApiError> {
        self.error.get()
    }

    pub fn is_loading(self) -> bool {
        self.loading.get()
    }

    /// Replace the snapshot atomically. On failure the previous snapshot
    /// stays in place and only the error signal changes, so the table never
    /// empties out under the user.
    pub fn apply(self, outcome: Result<Vec<T>, ApiError>) {
        match outcome {
            Ok(snapshot) => {
                self.rows.set(snapshot);
                self.error.set(None);
            }
            Err(e) => {
                log::error!("list reload failed: {e}");
                self.error.set(Some(e));
            }
        }
    }

    /// Run one full reload. Completes only when the fetch (including any
    /// parallel parent-collection fan-out inside it) has completed.
    pub async fn refresh<F, Fut>(self, fetch: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, ApiError>>,
    {
        self.loading.set(true);
        self.apply(fetch().await);
        self.loading.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_room_type::aggregate::{RoomType, RoomTypeId};
    use contracts::domain::a003_accommodation_type::aggregate::{
        AccommodationType, AccommodationTypeId,
    };
    use contracts::domain::a004_room_type_accommodation::aggregate::{
        RoomTypeAccommodation, RoomTypeAccommodationDraft, RoomTypeAccommodationId,
    };
    use contracts::domain::common::DraftForm;
    use contracts::views::room_type_accommodation::enrich;
    use contracts::views::LabelIndex;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Store = Rc<RefCell<Vec<RoomTypeAccommodation>>>;

    fn parents() -> (Vec<RoomType>, Vec<AccommodationType>) {
        (
            vec![RoomType { id: RoomTypeId(1), name: "Doble".into() }],
            vec![AccommodationType { id: AccommodationTypeId(1), name: "Triple".into() }],
        )
    }

    /// A reload against an in-memory store, shaped like the real pages:
    /// list everything, build the label indexes, enrich, one snapshot.
    async fn load_from(
        store: Store,
    ) -> Result<Vec<contracts::views::room_type_accommodation::RoomTypeAccommodationView>, ApiError>
    {
        let (room_types, accommodation_types) = parents();
        let records = store.borrow().clone();
        Ok(enrich(
            &records,
            &LabelIndex::build(&room_types),
            &LabelIndex::build(&accommodation_types),
        ))
    }

    #[test]
    fn create_then_reload_lands_the_record_with_resolved_labels() {
        let owner = Owner::new();
        owner.set();

        let store: Store = Rc::new(RefCell::new(Vec::new()));
        let cache = ListCache::new();

        // submit-side half of the round trip
        let draft = RoomTypeAccommodationDraft {
            room_type_id: "1".into(),
            accommodation_type_id: "1".into(),
        };
        let payload = draft.validate().unwrap();
        store.borrow_mut().push(RoomTypeAccommodation {
            id: RoomTypeAccommodationId(5),
            room_type_id: payload.room_type_id,
            accommodation_type_id: payload.accommodation_type_id,
        });

        block_on(cache.refresh(|| load_from(store.clone())));

        let rows = cache.rows.get_untracked();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, RoomTypeAccommodationId(5));
        assert_eq!(rows[0].room_type_id, RoomTypeId(1));
        assert_eq!(rows[0].room_type_name, "Doble");
        assert_eq!(rows[0].accommodation_type_name, "Triple");
        assert!(cache.error.get_untracked().is_none());
    }

    #[test]
    fn reloading_twice_without_mutations_produces_identical_snapshots() {
        let owner = Owner::new();
        owner.set();

        let store: Store = Rc::new(RefCell::new(vec![RoomTypeAccommodation {
            id: RoomTypeAccommodationId(5),
            room_type_id: RoomTypeId(1),
            accommodation_type_id: AccommodationTypeId(1),
        }]));
        let cache = ListCache::new();

        block_on(cache.refresh(|| load_from(store.clone())));
        let first = cache.rows.get_untracked();
        block_on(cache.refresh(|| load_from(store.clone())));
        let second = cache.rows.get_untracked();

        assert_eq!(first, second);
    }

    #[test]
    fn a_failed_reload_keeps_the_previous_snapshot() {
        let owner = Owner::new();
        owner.set();

        let store: Store = Rc::new(RefCell::new(vec![RoomTypeAccommodation {
            id: RoomTypeAccommodationId(5),
            room_type_id: RoomTypeId(1),
            accommodation_type_id: AccommodationTypeId(1),
        }]));
        let cache = ListCache::new();
        block_on(cache.refresh(|| load_from(store.clone())));

        block_on(cache.refresh(|| async {
            Err(ApiError::Network("connection refused".into()))
        }));

        assert_eq!(cache.rows.get_untracked().len(), 1);
        assert!(matches!(
            cache.error.get_untracked(),
            Some(ApiError::Network(_))
        ));

        // recovery clears the banner again
        block_on(cache.refresh(|| load_from(store.clone())));
        assert!(cache.error.get_untracked().is_none());
    }

    #[test]
    fn a_failed_delete_leaves_the_snapshot_and_stays_operation_scoped() {
        let owner = Owner::new();
        owner.set();

        let store: Store = Rc::new(RefCell::new(vec![RoomTypeAccommodation {
            id: RoomTypeAccommodationId(5),
            room_type_id: RoomTypeId(1),
            accommodation_type_id: AccommodationTypeId(1),
        }]));
        let cache = ListCache::new();
        block_on(cache.refresh(|| load_from(store.clone())));

        // the server no longer has the id; only the operation error moves
        let op_error: RwSignal<Option<ApiError>> = RwSignal::new(None);
        let outcome: Result<(), ApiError> = Err(ApiError::NotFound);
        if let Err(e) = outcome {
            op_error.set(Some(e));
        }

        assert_eq!(op_error.get_untracked(), Some(ApiError::NotFound));
        assert!(cache.error.get_untracked().is_none());
        assert_eq!(cache.rows.get_untracked().len(), 1);
    }
}
