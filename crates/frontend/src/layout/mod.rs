pub mod header;
pub mod sidebar;

pub use header::Header;
pub use sidebar::Sidebar;

/// The named views of the shell. Hotels is the landing view after login.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    Hotels,
    RoomInventory,
    RoomTypes,
    AccommodationTypes,
    RoomTypeAccommodations,
}

impl ActiveView {
    pub const ALL: [ActiveView; 5] = [
        ActiveView::Hotels,
        ActiveView::RoomInventory,
        ActiveView::RoomTypes,
        ActiveView::AccommodationTypes,
        ActiveView::RoomTypeAccommodations,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ActiveView::Hotels => "Hoteles",
            ActiveView::RoomInventory => "Habitaciones",
            ActiveView::RoomTypes => "Tipos de Habitación",
            ActiveView::AccommodationTypes => "Tipos de Acomodación",
            ActiveView::RoomTypeAccommodations => "Habitación - Acomodación",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            ActiveView::Hotels => "building",
            ActiveView::RoomInventory => "grid",
            ActiveView::RoomTypes => "bed",
            ActiveView::AccommodationTypes => "sofa",
            ActiveView::RoomTypeAccommodations => "link",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_landing_view_is_the_hotel_list() {
        assert_eq!(ActiveView::default(), ActiveView::Hotels);
    }

    #[test]
    fn every_view_has_a_title_and_an_icon() {
        for view in ActiveView::ALL {
            assert!(!view.title().is_empty());
            assert!(!view.icon_name().is_empty());
        }
    }
}
