//! Create-or-edit form state machine shared by every details modal.
//!
//! A session is `Closed` until a row action opens it, carries exactly one
//! draft while open, and validates locally before anything touches the
//! network. A failed submit keeps the draft so the user can correct and
//! retry; a successful one closes the session and the owning page re-lists.

use contracts::domain::common::DraftForm;
use contracts::error::ApiError;
use leptos::prelude::*;
use std::future::Future;

#[derive(Clone, Debug, PartialEq)]
pub enum FormState<D: DraftForm> {
    Closed,
    CreatingNew { draft: D },
    EditingExisting { id: D::Id, draft: D },
}

pub struct FormSession<D: DraftForm + PartialEq> {
    state: RwSignal<FormState<D>>,
    error: RwSignal<Option<ApiError>>,
    submitting: RwSignal<bool>,
}

impl<D: DraftForm + PartialEq> Clone for FormSession<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: DraftForm + PartialEq> Copy for FormSession<D> {}

impl<D: DraftForm + PartialEq> FormSession<D> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(FormState::Closed),
            error: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

    pub fn open_for_create(self) {
        self.error.set(None);
        self.state.set(FormState::CreatingNew { draft: D::default() });
    }

    /// Open pre-populated from a record's raw (non-label) fields.
    pub fn open_for_edit(self, id: D::Id, draft: D) {
        self.error.set(None);
        self.state.set(FormState::EditingExisting { id, draft });
    }

    pub fn cancel(self) {
        self.error.set(None);
        self.state.set(FormState::Closed);
    }

    /// Whether the modal renders (reactive read).
    pub fn is_open(self) -> bool {
        !matches!(self.state.get(), FormState::Closed)
    }

    pub fn is_editing(self) -> bool {
        matches!(self.state.get(), FormState::EditingExisting { .. })
    }

    pub fn is_submitting(self) -> bool {
        self.submitting.get()
    }

    /// Current draft, if the session is open (reactive read).
    pub fn draft(self) -> Option<D> {
        match self.state.get() {
            FormState::Closed => None,
            FormState::CreatingNew { draft } | FormState::EditingExisting { draft, .. } => {
                Some(draft)
            }
        }
    }

    pub fn error(self) -> Option<ApiError> {
        self.error.get()
    }

    /// Surface an error produced outside the submit path (e.g. the page's
    /// mutation lock rejecting a concurrent submit).
    pub fn set_error(self, error: ApiError) {
        self.error.set(Some(error));
    }

    /// Apply one field edit to the open draft; no-op while closed.
    pub fn update_draft(self, patch: impl FnOnce(&mut D)) {
        self.state.update(|state| match state {
            FormState::Closed => {}
            FormState::CreatingNew { draft } | FormState::EditingExisting { draft, .. } => {
                patch(draft)
            }
        });
    }

    /// Validate and, only if the draft passes, hand the typed payload to
    /// `send` (`None` id = create, `Some` = update). Returns `true` when the
    /// session closed successfully, which is the owning page's cue to
    /// invalidate its cache. A validation failure reports without issuing any
    /// request and the state machine does not move.
    pub async fn submit<F, Fut>(self, send: F) -> bool
    where
        F: FnOnce(Option<D::Id>, D::Payload) -> Fut,
        Fut: Future<Output = Result<(), ApiError>>,
    {
        let (id, draft) = match self.state.get_untracked() {
            FormState::Closed => return false,
            FormState::CreatingNew { draft } => (None, draft),
            FormState::EditingExisting { id, draft } => (Some(id), draft),
        };

        let payload = match draft.validate() {
            Ok(payload) => payload,
            Err(e) => {
                self.error.set(Some(e));
                return false;
            }
        };

        self.submitting.set(true);
        let outcome = send(id, payload).await;
        self.submitting.set(false);

        match outcome {
            Ok(()) => {
                self.error.set(None);
                self.state.set(FormState::Closed);
                true
            }
            Err(e) => {
                log::error!("form submit failed: {e}");
                self.error.set(Some(e));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_room_type::aggregate::{RoomTypeDraft, RoomTypeId};
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn opening_and_cancelling_discards_the_draft() {
        let owner = Owner::new();
        owner.set();

        let session: FormSession<RoomTypeDraft> = FormSession::new();
        assert!(session.draft().is_none());

        session.open_for_create();
        session.update_draft(|d| d.name = "Doble".into());
        assert_eq!(session.draft().unwrap().name, "Doble");

        session.cancel();
        assert!(session.draft().is_none());

        session.open_for_create();
        assert_eq!(session.draft().unwrap().name, "");
    }

    #[test]
    fn a_blank_required_field_blocks_without_sending() {
        let owner = Owner::new();
        owner.set();

        let session: FormSession<RoomTypeDraft> = FormSession::new();
        session.open_for_create();

        let sent = Rc::new(Cell::new(false));
        let sent_probe = sent.clone();
        let closed = block_on(session.submit(move |_, _| {
            sent_probe.set(true);
            async { Ok(()) }
        }));

        assert!(!closed);
        assert!(!sent.get(), "validation failure must not reach the network");
        assert!(matches!(session.error(), Some(ApiError::Validation(_))));
        // still creating, draft intact
        assert!(session.is_open());
        assert!(!session.is_editing());
    }

    #[test]
    fn a_successful_create_closes_and_reports_invalidation() {
        let owner = Owner::new();
        owner.set();

        let session: FormSession<RoomTypeDraft> = FormSession::new();
        session.open_for_create();
        session.update_draft(|d| d.name = "Suite".into());

        let closed = block_on(session.submit(|id, payload| async move {
            assert!(id.is_none(), "create must not carry an id");
            assert_eq!(payload.name, "Suite");
            Ok(())
        }));

        assert!(closed);
        assert!(!session.is_open());
        assert!(session.error().is_none());
    }

    #[test]
    fn an_edit_submits_with_the_record_id() {
        let owner = Owner::new();
        owner.set();

        let session: FormSession<RoomTypeDraft> = FormSession::new();
        session.open_for_edit(RoomTypeId(7), RoomTypeDraft { name: "Doble".into() });
        session.update_draft(|d| d.name = "Doble Superior".into());

        let closed = block_on(session.submit(|id, payload| async move {
            assert_eq!(id, Some(RoomTypeId(7)));
            assert_eq!(payload.name, "Doble Superior");
            Ok(())
        }));
        assert!(closed);
    }

    #[test]
    fn a_server_failure_keeps_the_state_and_the_draft() {
        let owner = Owner::new();
        owner.set();

        let session: FormSession<RoomTypeDraft> = FormSession::new();
        session.open_for_edit(RoomTypeId(7), RoomTypeDraft { name: "Doble".into() });

        let closed = block_on(
            session.submit(|_, _| async { Err(ApiError::Server { status: 500 }) }),
        );

        assert!(!closed);
        assert!(session.is_editing());
        assert_eq!(session.draft().unwrap().name, "Doble");
        assert_eq!(session.error(), Some(ApiError::Server { status: 500 }));
    }

    #[test]
    fn submitting_a_closed_session_is_a_no_op() {
        let owner = Owner::new();
        owner.set();

        let session: FormSession<RoomTypeDraft> = FormSession::new();
        let sent = Rc::new(Cell::new(false));
        let sent_probe = sent.clone();
        let closed = block_on(session.submit(move |_, _| {
            sent_probe.set(true);
            async { Ok(()) }
        }));
        assert!(!closed);
        assert!(!sent.get());
    }
}
