pub mod state;

use self::state::RoomTypePageState;
use crate::domain::a002_room_type::ui::details::RoomTypeDetails;
use crate::shared::form_session::FormSession;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, sort_list, Sortable};
use crate::system::auth::context::use_auth;
use contracts::domain::a002_room_type::aggregate::{RoomType, RoomTypeDraft};
use leptos::prelude::*;
use std::cmp::Ordering;

impl Sortable for RoomType {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn RoomTypeList() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let state = RoomTypePageState::new();
    let session: FormSession<RoomTypeDraft> = FormSession::new();

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
                <h2>"Tipos de Habitación"</h2>
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
            {move || state.op_error.get().map(|e| view! { <div class="error error--operation">{e.to_string()}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name")>
                                "Nombre"
                                {move || get_sort_indicator(&state.sort.get().field, "name", state.sort.get().ascending)}
                            </th>
                            <th class="table__header-cell">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_rows().into_iter().map(|room_type| {
                            let id = room_type.id;
                            let draft = RoomTypeDraft::from(&room_type);
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{room_type.name}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--warning"
                                            on:click=move |_| session.open_for_edit(id, draft.clone())
                                        >
                                            {icon("edit")}
                                            "Editar"
                                        </button>
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
                                <td class="table__cell table__cell--empty" colspan="2">
                                    "No hay tipos de habitación registrados."
                                </td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>

            <RoomTypeDetails
                session=session
                mutation=state.mutation
                on_saved=Callback::new(move |_| state.load(access_token()))
            />
        </div>
    }
}
