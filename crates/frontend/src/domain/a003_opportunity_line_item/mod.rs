pub mod api;
pub mod ports;
pub mod ui;
