use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::storage;

#[component]
pub fn Header() -> impl IntoView {
    let (_, set_auth_state) = use_auth();

    let handle_logout = move |_| {
        storage::clear_token();
        set_auth_state.set(AuthState::Unauthenticated);
    };

    view! {
        <header class="header-bar">
            <h1 class="header-bar__title">"Gestión Hotelera"</h1>
            <button class="button button--danger" on:click=handle_logout>
                {icon("logout")}
                "Cerrar Sesión"
            </button>
        </header>
    }
}
