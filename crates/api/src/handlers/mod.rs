pub mod accomplishment;
pub mod auth;
pub mod dashboard;
pub mod project;
pub mod risk;
pub mod settings;
pub mod team_member;
