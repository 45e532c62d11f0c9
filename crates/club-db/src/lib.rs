//! # club-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Repository implementations for every `club-core` port

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{
    PgAchievementRepository, PgActivityRepository, PgCalendarRepository, PgLudotecaRepository,
    PgRoleRepository, PgStatusRepository, PgUserRepository,
};
