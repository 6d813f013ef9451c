pub mod admin;
pub mod dashboard;
pub mod date_format;
pub mod error;
pub mod project;
pub mod risk;
pub mod settings;
pub mod status;
pub mod timeline;
pub mod types;
