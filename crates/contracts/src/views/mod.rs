//! Read-only, denormalized projections of the child collections.
//!
//! Built from the authoritative collections on every load and discarded on
//! the next one; view records are never sent back to the API.

pub mod hotel_room_inventory;
pub mod label_index;
pub mod room_type_accommodation;

pub use label_index::{LabelIndex, UNKNOWN_LABEL};
