//! Bilingual MGNREGA district performance dashboard.

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod i18n;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use app::App;
