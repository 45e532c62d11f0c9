//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    Achievement, Activity, CalendarEvent, LudotecaEntry, Participant, ProfilePatch,
    ScheduledEvent, StatusPatch, User, UserStatus,
};
use crate::error::DomainError;
use crate::value_objects::{Role, SlotRange};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Fields for creating an activity or ludoteca entry
#[derive(Debug, Clone)]
pub struct NewBoardItem {
    pub title: String,
    pub kind: String,
    pub description: String,
    pub participants: Option<i32>,
    pub duration: Option<i32>,
    pub image_url: Option<String>,
    pub created_by: i64,
}

/// An activity with everything its listing needs: creator name,
/// participant list, and whether the viewing user has joined
#[derive(Debug, Clone)]
pub struct ActivityDetail {
    pub activity: Activity,
    pub creator_name: Option<String>,
    pub is_joined: bool,
    pub participants: Vec<Participant>,
}

/// A ludoteca entry with its listing aggregates
#[derive(Debug, Clone)]
pub struct LudotecaDetail {
    pub entry: LudotecaEntry,
    pub creator_name: Option<String>,
    pub is_joined: bool,
    pub participants: Vec<Participant>,
}

/// A member row for administration listings
#[derive(Debug, Clone)]
pub struct MemberOverview {
    pub user: User,
    pub role: Role,
    pub achievements: Vec<Achievement>,
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by unique name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<User>>;

    /// Check whether a name, email, or DNI is already taken
    async fn identity_exists(
        &self,
        name: &str,
        email: &str,
        dni: Option<&str>,
    ) -> RepoResult<bool>;

    /// Create a new user row, returning it with its generated id
    async fn create(
        &self,
        name: &str,
        email: &str,
        phone: Option<&str>,
        dni: Option<&str>,
        password_hash: &str,
    ) -> RepoResult<User>;

    /// Apply a partial profile update and return the refreshed row
    async fn update_profile(&self, id: i64, patch: &ProfilePatch) -> RepoResult<User>;

    /// Store the avatar path for a user
    async fn set_avatar(&self, id: i64, avatar_url: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;

    /// List all members with their derived role and achievements
    async fn list_members(&self) -> RepoResult<Vec<MemberOverview>>;

    /// Delete a user and every join row referencing it
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Role Repository
// ============================================================================

#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// All role assignments for a user (possibly empty)
    async fn roles_for_user(&self, user_id: i64) -> RepoResult<Vec<Role>>;

    /// Add an assignment, ignoring duplicates
    async fn assign(&self, user_id: i64, role: Role) -> RepoResult<()>;

    /// Replace every assignment with the single given role
    async fn replace(&self, user_id: i64, role: Role) -> RepoResult<()>;
}

// ============================================================================
// Status Repository
// ============================================================================

#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Participation flags for a user
    async fn find(&self, user_id: i64) -> RepoResult<Option<UserStatus>>;

    /// Create the all-zero status row that accompanies a new account
    async fn create_default(&self, user_id: i64) -> RepoResult<()>;

    /// Apply a partial update, returning the refreshed flags
    async fn update(&self, user_id: i64, patch: &StatusPatch) -> RepoResult<UserStatus>;
}

// ============================================================================
// Achievement Repository
// ============================================================================

#[async_trait]
pub trait AchievementRepository: Send + Sync {
    /// List all achievement definitions
    async fn list(&self) -> RepoResult<Vec<Achievement>>;

    /// Achievements awarded to a user
    async fn for_user(&self, user_id: i64) -> RepoResult<Vec<Achievement>>;

    /// Create a new achievement definition
    async fn create(
        &self,
        name: &str,
        description: &str,
        avatar_url: Option<&str>,
    ) -> RepoResult<Achievement>;

    /// Delete an achievement definition and its assignments
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Award an achievement to a user, ignoring duplicates
    async fn grant(&self, user_id: i64, achievement_id: i64) -> RepoResult<()>;

    /// Remove an awarded achievement from a user
    async fn revoke(&self, user_id: i64, achievement_id: i64) -> RepoResult<()>;
}

// ============================================================================
// Activity Repository
// ============================================================================

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// All activities with aggregates, newest first, scoped to the viewer
    async fn list(&self, viewer_id: i64) -> RepoResult<Vec<ActivityDetail>>;

    /// One activity with aggregates, scoped to the viewer
    async fn find_detail(&self, id: i64, viewer_id: i64) -> RepoResult<Option<ActivityDetail>>;

    /// Create a new activity
    async fn create(&self, item: &NewBoardItem) -> RepoResult<Activity>;

    /// Creator reference of an activity; errors when the activity is missing
    async fn creator(&self, id: i64) -> RepoResult<Option<i64>>;

    /// Add the user to the participant list, ignoring duplicates
    async fn join(&self, id: i64, user_id: i64) -> RepoResult<()>;

    /// Remove the user from the participant list
    async fn leave(&self, id: i64, user_id: i64) -> RepoResult<()>;

    /// Store the image path for an activity
    async fn set_image(&self, id: i64, image_url: &str) -> RepoResult<()>;

    /// Delete an activity and its participant rows
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Ludoteca Repository
// ============================================================================

#[async_trait]
pub trait LudotecaRepository: Send + Sync {
    /// All entries with aggregates, newest first, scoped to the viewer
    async fn list(&self, viewer_id: i64) -> RepoResult<Vec<LudotecaDetail>>;

    /// One entry with aggregates, scoped to the viewer
    async fn find_detail(&self, id: i64, viewer_id: i64) -> RepoResult<Option<LudotecaDetail>>;

    /// Create a new ludoteca entry
    async fn create(&self, item: &NewBoardItem) -> RepoResult<LudotecaEntry>;

    /// Creator reference of an entry; errors when the entry is missing
    async fn creator(&self, id: i64) -> RepoResult<Option<i64>>;

    /// Mark the user's interest, ignoring duplicates
    async fn join(&self, id: i64, user_id: i64) -> RepoResult<()>;

    /// Withdraw the user's interest
    async fn leave(&self, id: i64, user_id: i64) -> RepoResult<()>;

    /// Store the image path for an entry
    async fn set_image(&self, id: i64, image_url: &str) -> RepoResult<()>;

    /// Delete an entry and its participant rows
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Calendar Repository
// ============================================================================

#[async_trait]
pub trait CalendarRepository: Send + Sync {
    /// All events with their activity summary, ordered by (day, zone, start)
    async fn list(&self) -> RepoResult<Vec<ScheduledEvent>>;

    /// Insert a booking; the storage constraint rejects overlaps
    async fn create(
        &self,
        activity_id: i64,
        day: i32,
        zone: i32,
        range: &SlotRange,
        created_by: i64,
    ) -> RepoResult<CalendarEvent>;

    /// Delete a booking
    async fn delete(&self, id: i64) -> RepoResult<()>;
}
