pub mod api;
pub mod toast;
