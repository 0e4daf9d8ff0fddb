pub mod auth;
pub mod cover;
pub mod export;
pub mod lecture;
pub mod settings;
pub mod uploads;
