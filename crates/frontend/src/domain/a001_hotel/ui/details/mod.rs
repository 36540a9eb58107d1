use contracts::domain::a001_hotel::aggregate::HotelDraft;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_hotel::api;
use crate::shared::form_session::FormSession;
use crate::shared::mutation::MutationLock;
use crate::system::auth::context::use_auth;

/// Creation modal. Hotels expose no edit path, so the session here only ever
/// runs the create branch.
#[component]
#[allow(non_snake_case)]
pub fn HotelDetails(
    session: FormSession<HotelDraft>,
    mutation: MutationLock,
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

    let name = move || session.draft().map(|d| d.name).unwrap_or_default();
    let address = move || session.draft().map(|d| d.address).unwrap_or_default();
    let city = move || session.draft().map(|d| d.city).unwrap_or_default();
    let nit = move || session.draft().map(|d| d.nit).unwrap_or_default();
    let max_rooms = move || session.draft().map(|d| d.max_rooms).unwrap_or_default();

    view! {
        <Show when=move || session.is_open()>
            <div class="modal-overlay">
                <div class="modal-content">
                    <h2>"Crear Nuevo Hotel"</h2>

                    {move || session.error().map(|e| view! { <p class="error-message">{e.to_string()}</p> })}

                    <form on:submit=handle_submit>
                        <div class="form-group">
                            <label>"Nombre"</label>
                            <input
                                type="text"
                                placeholder="Nombre del hotel"
                                prop:value=name
                                on:input=move |ev| session.update_draft(|d| d.name = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Dirección"</label>
                            <input
                                type="text"
                                placeholder="Dirección"
                                prop:value=address
                                on:input=move |ev| session.update_draft(|d| d.address = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Ciudad"</label>
                            <input
                                type="text"
                                placeholder="Ciudad"
                                prop:value=city
                                on:input=move |ev| session.update_draft(|d| d.city = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"NIT"</label>
                            <input
                                type="text"
                                placeholder="NIT"
                                prop:value=nit
                                on:input=move |ev| session.update_draft(|d| d.nit = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Número máximo de habitaciones"</label>
                            <input
                                type="number"
                                min="0"
                                prop:value=max_rooms
                                on:input=move |ev| session.update_draft(|d| d.max_rooms = event_target_value(&ev))
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
                                {move || if session.is_submitting() { "Guardando..." } else { "Crear" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
