use contracts::domain::a003_accommodation_type::aggregate::AccommodationTypeDraft;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a003_accommodation_type::api;
use crate::shared::form_session::FormSession;
use crate::shared::mutation::MutationLock;
use crate::system::auth::context::use_auth;

/// Create-or-rename modal for accommodation types.
#[component]
#[allow(non_snake_case)]
pub fn AccommodationTypeDetails(
    session: FormSession<AccommodationTypeDraft>,
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
                .submit(move |id, payload| async move {
                    match id {
                        Some(id) => api::update(&access_token, id, &payload).await.map(|_| ()),
                        None => api::create(&access_token, &payload).await.map(|_| ()),
                    }
                })
                .await;
            mutation.release();
            if saved {
                on_saved.run(());
            }
        });
    };

    let name = move || session.draft().map(|d| d.name).unwrap_or_default();

    view! {
        <Show when=move || session.is_open()>
            <div class="modal-overlay">
                <div class="modal-content">
                    <h2>
                        {move || if session.is_editing() {
                            "Editar Tipo de Acomodación"
                        } else {
                            "Crear Tipo de Acomodación"
                        }}
                    </h2>

                    {move || session.error().map(|e| view! { <p class="error-message">{e.to_string()}</p> })}

                    <form on:submit=handle_submit>
                        <div class="form-group">
                            <label>"Nombre"</label>
                            <input
                                type="text"
                                placeholder="Nombre del tipo"
                                prop:value=name
                                on:input=move |ev| session.update_draft(|d| d.name = event_target_value(&ev))
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
