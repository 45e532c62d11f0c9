//! Request and response DTOs

mod mappers;
mod requests;
mod responses;

pub use requests::{
    CreateAchievementRequest, CreateBoardItemRequest, CreateCalendarEventRequest,
    GrantAchievementRequest, LoginRequest, RegisterRequest, SetRoleRequest, UpdateProfileRequest,
    UpdateStatusRequest,
};
pub use responses::{
    AchievementResponse, ActivitySummaryResponse, AuthResponse, AvatarResponse, BoardItemResponse,
    CalendarEventResponse, MemberResponse, ParticipantResponse, ProfileResponse,
    ScheduledEventResponse, StatusBody, StatusResponse, SuccessResponse, UserEnvelope,
    UserResponse,
};
