use contracts::domain::a002_room_type::aggregate::RoomType;
use contracts::domain::a003_accommodation_type::aggregate::AccommodationType;
use contracts::domain::a004_room_type_accommodation::aggregate::RoomTypeAccommodationDraft;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a004_room_type_accommodation::api;
use crate::shared::form_session::FormSession;
use crate::shared::mutation::MutationLock;
use crate::system::auth::context::use_auth;

/// Creation modal for pairings. Both foreign keys come from selects over the
/// parent collections the page already holds.
#[component]
#[allow(non_snake_case)]
pub fn RoomTypeAccommodationDetails(
    session: FormSession<RoomTypeAccommodationDraft>,
    mutation: MutationLock,
    room_types: RwSignal<Vec<RoomType>>,
    accommodation_types: RwSignal<Vec<AccommodationType>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let (auth_state, _) = use_auth();

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let access_token = auth_state
            .get_untracked()
            .access_token()
            .map(|t| t.to_string())
            .unwrap_or_default();

        if let Err(e) = mutation.try_acquire() {
            session.set_error(e);
            return;
        }
        spawn_local(async move {
            let saved = session
                .submit(move |_, payload| async move {
                    api::create(&access_token, &payload).await.map(|_| ())
                })
                .await;
            mutation.release();
            if saved {
                on_saved.run(());
            }
        });
    };

    let room_type_value =
        move || session.draft().map(|d| d.room_type_id).unwrap_or_default();
    let accommodation_type_value =
        move || session.draft().map(|d| d.accommodation_type_id).unwrap_or_default();

    view! {
        <Show when=move || session.is_open()>
            <div class="modal-overlay">
                <div class="modal-content">
                    <h2>"Crear Registro"</h2>

                    {move || session.error().map(|e| view! { <p class="error-message">{e.to_string()}</p> })}

                    <form on:submit=handle_submit>
                        <div class="form-group">
                            <label>"Tipo Habitación"</label>
                            <select
                                prop:value=room_type_value
                                on:change=move |ev| session.update_draft(|d| d.room_type_id = event_target_value(&ev))
                            >
                                <option value="">"Seleccione un tipo"</option>
                                {move || room_types.get().into_iter().map(|room_type| view! {
                                    <option value=room_type.id.to_string()>{room_type.name}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"Tipo Acomodación"</label>
                            <select
                                prop:value=accommodation_type_value
                                on:change=move |ev| session.update_draft(|d| d.accommodation_type_id = event_target_value(&ev))
                            >
                                <option value="">"Seleccione un tipo"</option>
                                {move || accommodation_types.get().into_iter().map(|accommodation_type| view! {
                                    <option value=accommodation_type.id.to_string()>{accommodation_type.name}</option>
                                }).collect_view()}
                            </select>
                        </div>

                        <div class="modal-actions">
                            <button
                                type="button"
                                class="button button--secondary"
                                on:click=move |_| session.cancel()
                            >
                                "Cancelar"
                            </button>
                            <button
                                type="submit"
                                class="button button--primary"
                                disabled=move || session.is_submitting() || mutation.is_busy()
                            >
                                {move || if session.is_submitting() { "Guardando..." } else { "Guardar" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
