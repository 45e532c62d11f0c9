//! Repository ports implemented by the database layer

mod repositories;

pub use repositories::{
    AchievementRepository, ActivityDetail, ActivityRepository, CalendarRepository, LudotecaDetail,
    LudotecaRepository, MemberOverview, NewBoardItem, RepoResult, RoleRepository, StatusRepository,
    UserRepository,
};
