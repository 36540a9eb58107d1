pub mod state;

use self::state::HotelPageState;
use crate::domain::a001_hotel::ui::details::HotelDetails;
use crate::shared::form_session::FormSession;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, sort_list, Sortable};
use crate::system::auth::context::use_auth;
use contracts::domain::a001_hotel::aggregate::{Hotel, HotelDraft};
use leptos::prelude::*;
use std::cmp::Ordering;

impl Sortable for Hotel {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "city" => self.city.to_lowercase().cmp(&other.city.to_lowercase()),
            "nit" => self.nit.cmp(&other.nit),
            "max_rooms" => self.max_rooms.cmp(&other.max_rooms),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn HotelList() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let state = HotelPageState::new();
    let session: FormSession<HotelDraft> = FormSession::new();

    let access_token = move || {
        auth_state
            .get_untracked()
            .access_token()
            .map(|t| t.to_string())
            .unwrap_or_default()
    };

    state.load(access_token());

    let toggle_sort = move |field: &'static str| move |_| state.sort.update(|s| s.toggle(field));

    let sorted_rows = move || {
        let mut rows = state.cache.rows();
        let sort = state.sort.get();
        sort_list(&mut rows, &sort.field, sort.ascending);
        rows
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>"Gestión de Hoteles"</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| session.open_for_create()>
                        {icon("plus")}
                        "Crear Hotel"
                    </button>
                    <button class="button button--secondary" on:click=move |_| state.load(access_token())>
                        {icon("refresh")}
                        "Actualizar"
                    </button>
                </div>
            </div>

            {move || state.cache.error().map(|e| view! { <div class="error">{e.to_string()}</div> })}
            {move || state.op_error.get().map(|e| view! { <div class="error error--operation">{e.to_string()}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name")>
                                "Nombre"
                                {move || get_sort_indicator(&state.sort.get().field, "name", state.sort.get().ascending)}
                            </th>
                            <th class="table__header-cell">"Dirección"</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("city")>
                                "Ciudad"
                                {move || get_sort_indicator(&state.sort.get().field, "city", state.sort.get().ascending)}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("nit")>
                                "NIT"
                                {move || get_sort_indicator(&state.sort.get().field, "nit", state.sort.get().ascending)}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("max_rooms")>
                                "Habitaciones"
                                {move || get_sort_indicator(&state.sort.get().field, "max_rooms", state.sort.get().ascending)}
                            </th>
                            <th class="table__header-cell">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_rows().into_iter().map(|hotel| {
                            let id = hotel.id;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{hotel.name}</td>
                                    <td class="table__cell">{hotel.address}</td>
                                    <td class="table__cell">{hotel.city}</td>
                                    <td class="table__cell">{hotel.nit}</td>
                                    <td class="table__cell">{hotel.max_rooms}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--danger"
                                            disabled=move || state.mutation.is_busy()
                                            on:click=move |_| state.delete(access_token(), id)
                                        >
                                            {icon("trash")}
                                            "Eliminar"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                        {move || state.cache.rows().is_empty().then(|| view! {
                            <tr>
                                <td class="table__cell table__cell--empty" colspan="6">
                                    "No hay hoteles registrados."
                                </td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>

            <HotelDetails
                session=session
                mutation=state.mutation
                on_saved=Callback::new(move |_| state.load(access_token()))
            />
        </div>
    }
}
