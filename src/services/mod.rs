pub mod api;
pub mod timeout;
