pub mod lecture;
pub mod site_setting;
pub mod slide;
pub mod summary;
pub mod transcript;
