use leptos::prelude::*;

use crate::domain::a001_hotel::ui::list::HotelList;
use crate::domain::a002_room_type::ui::list::RoomTypeList;
use crate::domain::a003_accommodation_type::ui::list::AccommodationTypeList;
use crate::domain::a004_room_type_accommodation::ui::list::RoomTypeAccommodationList;
use crate::domain::a005_hotel_room_inventory::ui::list::HotelRoomInventoryList;
use crate::layout::{ActiveView, Header, Sidebar};
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

#[component]
fn MainLayout() -> impl IntoView {
    let active = RwSignal::new(ActiveView::default());

    view! {
        <div class="app-shell">
            <Sidebar active=active />
            <div class="app-shell__main">
                <Header />
                <main class="app-shell__content">
                    {move || match active.get() {
                        ActiveView::Hotels => view! { <HotelList /> }.into_any(),
                        ActiveView::RoomInventory => view! { <HotelRoomInventoryList /> }.into_any(),
                        ActiveView::RoomTypes => view! { <RoomTypeList /> }.into_any(),
                        ActiveView::AccommodationTypes => {
                            view! { <AccommodationTypeList /> }.into_any()
                        }
                        ActiveView::RoomTypeAccommodations => {
                            view! { <RoomTypeAccommodationList /> }.into_any()
                        }
                    }}
                </main>
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
