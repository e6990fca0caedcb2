pub mod app_state;
pub mod db;
pub mod handlers;
pub mod monzo;
pub mod settings;
pub mod sweep;
