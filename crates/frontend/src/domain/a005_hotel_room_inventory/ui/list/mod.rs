pub mod state;

use self::state::HotelRoomInventoryPageState;
use crate::domain::a005_hotel_room_inventory::ui::details::HotelRoomInventoryDetails;
use crate::shared::form_session::FormSession;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, sort_list, Sortable};
use crate::system::auth::context::use_auth;
use contracts::domain::a005_hotel_room_inventory::aggregate::HotelRoomInventoryDraft;
use contracts::views::hotel_room_inventory::HotelRoomInventoryView;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Sortable for HotelRoomInventoryView {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "hotel_name" => self
                .hotel_name
                .to_lowercase()
                .cmp(&other.hotel_name.to_lowercase()),
            "room_type_name" => self
                .room_type_name
                .to_lowercase()
                .cmp(&other.room_type_name.to_lowercase()),
            "accommodation_type_name" => self
                .accommodation_type_name
                .to_lowercase()
                .cmp(&other.accommodation_type_name.to_lowercase()),
            "quantity" => self.quantity.cmp(&other.quantity),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn HotelRoomInventoryList() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let state = HotelRoomInventoryPageState::new();
    let session: FormSession<HotelRoomInventoryDraft> = FormSession::new();

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
                <h2>"Habitaciones de Hotel"</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| session.open_for_create()>
                        {icon("plus")}
                        "Crear"
                    </button>
                    <button class="button button--secondary" on:click=move |_| state.load(access_token())>
                        {icon("refresh")}
                        "Actualizar"
                    </button>
                </div>
            </div>

            {move || state.cache.error().map(|e| view! { <div class="error">{e.to_string()}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("hotel_name")>
                                "Hotel"
                                {move || get_sort_indicator(&state.sort.get().field, "hotel_name", state.sort.get().ascending)}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("room_type_name")>
                                "Tipo Habitación"
                                {move || get_sort_indicator(&state.sort.get().field, "room_type_name", state.sort.get().ascending)}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("accommodation_type_name")>
                                "Tipo Acomodación"
                                {move || get_sort_indicator(&state.sort.get().field, "accommodation_type_name", state.sort.get().ascending)}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("quantity")>
                                "Cantidad"
                                {move || get_sort_indicator(&state.sort.get().field, "quantity", state.sort.get().ascending)}
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_rows().into_iter().map(|row| view! {
                            <tr class="table__row">
                                <td class="table__cell">{row.hotel_name}</td>
                                <td class="table__cell">{row.room_type_name}</td>
                                <td class="table__cell">{row.accommodation_type_name}</td>
                                <td class="table__cell">{row.quantity}</td>
                            </tr>
                        }).collect_view()}
                        {move || state.cache.rows().is_empty().then(|| view! {
                            <tr>
                                <td class="table__cell table__cell--empty" colspan="4">
                                    "No hay habitaciones registradas."
                                </td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>

            <HotelRoomInventoryDetails
                session=session
                mutation=state.mutation
                hotels=state.hotels
                room_types=state.room_types
                accommodation_types=state.accommodation_types
                on_saved=Callback::new(move |_| state.load(access_token()))
            />
        </div>
    }
}
