pub mod a001_hotel;
pub mod a002_room_type;
pub mod a003_accommodation_type;
pub mod a004_room_type_accommodation;
pub mod a005_hotel_room_inventory;
pub mod common;
