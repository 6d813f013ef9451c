//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod accomplishment_repo;
pub mod dashboard_setting_repo;
pub mod project_repo;
pub mod risk_repo;
pub mod team_member_repo;

pub use accomplishment_repo::AccomplishmentRepo;
pub use dashboard_setting_repo::DashboardSettingRepo;
pub use project_repo::ProjectRepo;
pub use risk_repo::RiskRepo;
pub use team_member_repo::TeamMemberRepo;
