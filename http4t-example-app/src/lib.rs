pub mod app;
pub mod api;
pub mod environment;
pub mod not_found_handler;
pub mod ok_handler;
pub mod router;
