use contracts::domain::a001_hotel::aggregate::Hotel;
use contracts::domain::a002_room_type::aggregate::RoomType;
use contracts::domain::a003_accommodation_type::aggregate::AccommodationType;
use contracts::domain::a005_hotel_room_inventory::aggregate::HotelRoomInventoryDraft;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a005_hotel_room_inventory::api;
use crate::shared::form_session::FormSession;
use crate::shared::mutation::MutationLock;
use crate::system::auth::context::use_auth;

/// Creation modal for inventory rows: hotel, room type and accommodation
/// type selects plus the room count.
#[component]
#[allow(non_snake_case)]
pub fn HotelRoomInventoryDetails(
    session: FormSession<HotelRoomInventoryDraft>,
    mutation: MutationLock,
    hotels: RwSignal<Vec<Hotel>>,
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

    let hotel_value = move || session.draft().map(|d| d.hotel_id).unwrap_or_default();
    let room_type_value =
        move || session.draft().map(|d| d.room_type_id).unwrap_or_default();
    let accommodation_type_value =
        move || session.draft().map(|d| d.accommodation_type_id).unwrap_or_default();
    let quantity_value = move || session.draft().map(|d| d.quantity).unwrap_or_default();

    view! {
        <Show when=move || session.is_open()>
            <div class="modal-overlay">
                <div class="modal-content">
                    <h2>"Crear Habitación"</h2>

                    {move || session.error().map(|e| view! { <p class="error-message">{e.to_string()}</p> })}

                    <form on:submit=handle_submit>
                        <div class="form-group">
                            <label>"Hotel"</label>
                            <select
                                prop:value=hotel_value
                                on:change=move |ev| session.update_draft(|d| d.hotel_id = event_target_value(&ev))
                            >
                                <option value="">"Seleccione un hotel"</option>
                                {move || hotels.get().into_iter().map(|hotel| view! {
                                    <option value=hotel.id.to_string()>{hotel.name}</option>
                                }).collect_view()}
                            </select>
                        </div>
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
                        <div class="form-group">
                            <label>"Cantidad"</label>
                            <input
                                type="number"
                                min="0"
                                prop:value=quantity_value
                                on:input=move |ev| session.update_draft(|d| d.quantity = event_target_value(&ev))
                            />
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
