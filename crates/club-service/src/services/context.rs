//! Service context - dependency container for services
//!
//! Holds the repositories, the JWT service, and the media store. Every
//! dependency is injected explicitly; services never reach for globals.

use std::sync::Arc;

use club_common::auth::JwtService;
use club_core::traits::{
    AchievementRepository, ActivityRepository, CalendarRepository, LudotecaRepository,
    RoleRepository, StatusRepository, UserRepository,
};

use super::error::ServiceError;
use super::media::MediaStore;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    role_repo: Arc<dyn RoleRepository>,
    status_repo: Arc<dyn StatusRepository>,
    achievement_repo: Arc<dyn AchievementRepository>,
    activity_repo: Arc<dyn ActivityRepository>,
    ludoteca_repo: Arc<dyn LudotecaRepository>,
    calendar_repo: Arc<dyn CalendarRepository>,

    jwt_service: Arc<JwtService>,
    media_store: Arc<MediaStore>,
}

impl ServiceContext {
    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the role repository
    pub fn role_repo(&self) -> &dyn RoleRepository {
        self.role_repo.as_ref()
    }

    /// Get the status repository
    pub fn status_repo(&self) -> &dyn StatusRepository {
        self.status_repo.as_ref()
    }

    /// Get the achievement repository
    pub fn achievement_repo(&self) -> &dyn AchievementRepository {
        self.achievement_repo.as_ref()
    }

    /// Get the activity repository
    pub fn activity_repo(&self) -> &dyn ActivityRepository {
        self.activity_repo.as_ref()
    }

    /// Get the ludoteca repository
    pub fn ludoteca_repo(&self) -> &dyn LudotecaRepository {
        self.ludoteca_repo.as_ref()
    }

    /// Get the calendar repository
    pub fn calendar_repo(&self) -> &dyn CalendarRepository {
        self.calendar_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the media store
    pub fn media_store(&self) -> &MediaStore {
        self.media_store.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish_non_exhaustive()
    }
}

/// Builder for creating a ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    role_repo: Option<Arc<dyn RoleRepository>>,
    status_repo: Option<Arc<dyn StatusRepository>>,
    achievement_repo: Option<Arc<dyn AchievementRepository>>,
    activity_repo: Option<Arc<dyn ActivityRepository>>,
    ludoteca_repo: Option<Arc<dyn LudotecaRepository>>,
    calendar_repo: Option<Arc<dyn CalendarRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    media_store: Option<Arc<MediaStore>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn role_repo(mut self, repo: Arc<dyn RoleRepository>) -> Self {
        self.role_repo = Some(repo);
        self
    }

    pub fn status_repo(mut self, repo: Arc<dyn StatusRepository>) -> Self {
        self.status_repo = Some(repo);
        self
    }

    pub fn achievement_repo(mut self, repo: Arc<dyn AchievementRepository>) -> Self {
        self.achievement_repo = Some(repo);
        self
    }

    pub fn activity_repo(mut self, repo: Arc<dyn ActivityRepository>) -> Self {
        self.activity_repo = Some(repo);
        self
    }

    pub fn ludoteca_repo(mut self, repo: Arc<dyn LudotecaRepository>) -> Self {
        self.ludoteca_repo = Some(repo);
        self
    }

    pub fn calendar_repo(mut self, repo: Arc<dyn CalendarRepository>) -> Self {
        self.calendar_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn media_store(mut self, store: Arc<MediaStore>) -> Self {
        self.media_store = Some(store);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns a validation error if any required dependency is missing
    pub fn build(self) -> Result<ServiceContext, ServiceError> {
        Ok(ServiceContext {
            user_repo: require(self.user_repo, "user_repo")?,
            role_repo: require(self.role_repo, "role_repo")?,
            status_repo: require(self.status_repo, "status_repo")?,
            achievement_repo: require(self.achievement_repo, "achievement_repo")?,
            activity_repo: require(self.activity_repo, "activity_repo")?,
            ludoteca_repo: require(self.ludoteca_repo, "ludoteca_repo")?,
            calendar_repo: require(self.calendar_repo, "calendar_repo")?,
            jwt_service: require(self.jwt_service, "jwt_service")?,
            media_store: require(self.media_store, "media_store")?,
        })
    }
}

fn require<T>(value: Option<T>, name: &str) -> Result<T, ServiceError> {
    value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
}
