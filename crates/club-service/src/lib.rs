//! # club-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export the service surface used by the API crate
pub use dto::{
    AchievementResponse, AuthResponse, AvatarResponse, BoardItemResponse, CalendarEventResponse,
    CreateAchievementRequest, CreateBoardItemRequest, CreateCalendarEventRequest,
    GrantAchievementRequest, LoginRequest, MemberResponse, ParticipantResponse, ProfileResponse,
    RegisterRequest, ScheduledEventResponse, SetRoleRequest, StatusResponse, SuccessResponse,
    UpdateProfileRequest, UpdateStatusRequest, UserEnvelope, UserResponse,
};
pub use services::{
    AchievementService, Actor, ActivityService, AuthService, CalendarService, LudotecaService,
    MediaStore, MemberService, ProfileService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
