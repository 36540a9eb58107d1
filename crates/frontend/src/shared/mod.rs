pub mod api_utils;
pub mod dialog;
pub mod form_session;
pub mod http;
pub mod icons;
pub mod list_cache;
pub mod list_utils;
pub mod mutation;
