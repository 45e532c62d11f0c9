//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the migrations applied
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, clear_slot, count_rows, fixtures::*, promote,
    TestServer,
};
use reqwest::StatusCode;

/// Register a fresh USER and return (register request, auth response)
async fn register_user(server: &TestServer) -> (RegisterRequest, AuthResponse) {
    let request = RegisterRequest::unique();
    let response = server.post("/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

/// Register a fresh user and promote it to the given role in storage
///
/// The existing token stays valid; the resolver recomputes the role from
/// storage on every request, so no re-login is needed.
async fn register_with_role(server: &TestServer, role: &str) -> (RegisterRequest, AuthResponse) {
    let (request, auth) = register_user(server).await;
    promote(&request.name, role).await.unwrap();
    (request, auth)
}

/// Create an activity as the given organizer/admin token
async fn create_activity(server: &TestServer, token: &str) -> BoardItemResponse {
    let request = CreateBoardItemRequest::unique();
    let response = server.post_auth("/activities", token, &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_ping() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/ping").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "pong");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.name, request.name);
    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.score, 0);
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/auth/register", &request).await.unwrap();

    let response = server.post("/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_rejects_invalid_payload() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let mut request = RegisterRequest::unique();
    request.password = "abc".to_string();
    let response = server.post("/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let mut request = RegisterRequest::unique();
    request.phone = Some("not-a-phone".to_string());
    let response = server.post("/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_roundtrip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, registered) = register_user(&server).await;

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.id, registered.user.id);
    assert_eq!(auth.user.name, register_req.name);
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_user(&server).await;

    let login_req = LoginRequest {
        name: register_req.name.clone(),
        password: "wrong".to_string(),
    };
    let response = server.post("/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_get_me() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = register_user(&server).await;

    let response = server.get_auth("/me", &auth.token).await.unwrap();
    let envelope: UserEnvelope<ProfileResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    let me = envelope.user;
    assert_eq!(me.id, auth.user.id);
    assert_eq!(me.name, register_req.name);
    assert_eq!(me.role, "USER");
    assert_eq!(me.attendance, 0);
    assert_eq!(me.payment, 0);
    assert_eq!(me.transport, 0);
    assert_eq!(me.food, 0);
    assert!(me.achievements.is_empty());
}

#[tokio::test]
async fn test_me_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get_auth("/me", "not.a.token").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_role_change_visible_without_relogin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = register_user(&server).await;

    // Promote after the token was issued; the old token must see the new role
    promote(&register_req.name, "ORGANIZER").await.unwrap();

    let response = server.get_auth("/me", &auth.token).await.unwrap();
    let envelope: UserEnvelope<ProfileResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(envelope.user.role, "ORGANIZER");
}

#[tokio::test]
async fn test_update_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let update = UpdateProfileRequest {
        phone: Some("612345678".to_string()),
        dni: Some(format!("{}Z", unique_suffix() % 100_000_000)),
        ..Default::default()
    };
    let response = server.put_auth("/me", &auth.token, &update).await.unwrap();
    let envelope: UserEnvelope<UserResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(envelope.user.phone.as_deref(), Some("612345678"));
    assert_eq!(envelope.user.dni, update.dni);

    // An update that touches nothing is a validation error
    let response = server
        .put_auth("/me", &auth.token, &UpdateProfileRequest::default())
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_password_change_applies_on_next_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = register_user(&server).await;

    let update = UpdateProfileRequest {
        password: Some("newsecret456".to_string()),
        ..Default::default()
    };
    let response = server.put_auth("/me", &auth.token, &update).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let old_login = LoginRequest::from_register(&register_req);
    let response = server.post("/auth/login", &old_login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let new_login = LoginRequest {
        name: register_req.name.clone(),
        password: "newsecret456".to_string(),
    };
    let response = server.post("/auth/login", &new_login).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_update_status() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let update = UpdateStatusRequest {
        attendance: Some(1),
        transport: Some(2),
        ..Default::default()
    };
    let response = server
        .put_auth("/me/status", &auth.token, &update)
        .await
        .unwrap();
    let envelope: StatusEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(envelope.status.attendance, 1);
    assert_eq!(envelope.status.transport, 2);
    // Untouched flags keep their stored value
    assert_eq!(envelope.status.payment, 0);
    assert_eq!(envelope.status.food, 0);

    // Out-of-range flags are rejected
    let update = UpdateStatusRequest {
        food: Some(3),
        ..Default::default()
    };
    let response = server
        .put_auth("/me/status", &auth.token, &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Activity Tests
// ============================================================================

#[tokio::test]
async fn test_user_cannot_create_activity() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let request = CreateBoardItemRequest::unique();
    let response = server
        .post_auth("/activities", &auth.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_organizer_creates_activity() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, organizer) = register_with_role(&server, "ORGANIZER").await;

    let request = CreateBoardItemRequest::unique();
    let response = server
        .post_auth("/activities", &organizer.token, &request)
        .await
        .unwrap();
    let activity: BoardItemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(activity.title, request.title);
    assert_eq!(activity.kind, request.kind);
    assert_eq!(activity.created_by, Some(organizer.user.id));
    assert!(!activity.is_joined);
    assert!(activity.participants_list.is_empty());
}

#[tokio::test]
async fn test_join_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, organizer) = register_with_role(&server, "ORGANIZER").await;
    let activity = create_activity(&server, &organizer.token).await;

    let (_, member) = register_user(&server).await;
    let path = format!("/activities/{}/join", activity.id);

    let response = server.post_auth_empty(&path, &member.token).await.unwrap();
    let joined: BoardItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(joined.is_joined);

    // Joining again must not add a second participant row
    let response = server.post_auth_empty(&path, &member.token).await.unwrap();
    let joined: BoardItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(joined.is_joined);
    assert_eq!(
        joined
            .participants_list
            .iter()
            .filter(|p| p.id == member.user.id)
            .count(),
        1
    );

    let rows = count_rows("activity_participants", "user_id", member.user.id)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn test_leave_activity() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, organizer) = register_with_role(&server, "ORGANIZER").await;
    let activity = create_activity(&server, &organizer.token).await;

    let (_, member) = register_user(&server).await;
    let path = format!("/activities/{}/join", activity.id);

    server.post_auth_empty(&path, &member.token).await.unwrap();

    let response = server.delete_auth(&path, &member.token).await.unwrap();
    let left: BoardItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!left.is_joined);
    assert!(left.participants_list.iter().all(|p| p.id != member.user.id));
}

#[tokio::test]
async fn test_listing_is_scoped_to_the_viewer() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, organizer) = register_with_role(&server, "ORGANIZER").await;
    let activity = create_activity(&server, &organizer.token).await;

    let (_, joiner) = register_user(&server).await;
    let (_, bystander) = register_user(&server).await;

    server
        .post_auth_empty(&format!("/activities/{}/join", activity.id), &joiner.token)
        .await
        .unwrap();

    let response = server.get_auth("/activities", &joiner.token).await.unwrap();
    let listed: Vec<BoardItemResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let item = listed.iter().find(|a| a.id == activity.id).unwrap();
    assert!(item.is_joined);

    let response = server.get_auth("/activities", &bystander.token).await.unwrap();
    let listed: Vec<BoardItemResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let item = listed.iter().find(|a| a.id == activity.id).unwrap();
    assert!(!item.is_joined);
    assert!(item.participants_list.iter().any(|p| p.id == joiner.user.id));
}

#[tokio::test]
async fn test_only_owner_or_privileged_deletes_activity() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, organizer) = register_with_role(&server, "ORGANIZER").await;
    let activity = create_activity(&server, &organizer.token).await;

    let (_, member) = register_user(&server).await;
    let path = format!("/activities/{}", activity.id);

    let response = server.delete_auth(&path, &member.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &organizer.token).await.unwrap();
    let body: SuccessResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);

    let response = server.get_auth(&path, &organizer.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Ludoteca Tests
// ============================================================================

#[tokio::test]
async fn test_ludoteca_board() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, organizer) = register_with_role(&server, "ORGANIZER").await;

    let request = CreateBoardItemRequest::unique();
    let response = server
        .post_auth("/ludoteca", &organizer.token, &request)
        .await
        .unwrap();
    let entry: BoardItemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(entry.title, request.title);

    let (_, member) = register_user(&server).await;
    let response = server
        .post_auth_empty(&format!("/ludoteca/{}/join", entry.id), &member.token)
        .await
        .unwrap();
    let joined: BoardItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(joined.is_joined);
}

#[tokio::test]
async fn test_ludoteca_delete_needs_creator_or_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, creator) = register_with_role(&server, "ORGANIZER").await;

    let request = CreateBoardItemRequest::unique();
    let response = server
        .post_auth("/ludoteca", &creator.token, &request)
        .await
        .unwrap();
    let entry: BoardItemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/ludoteca/{}", entry.id);

    // Another organizer is not enough for someone else's entry
    let (_, other_organizer) = register_with_role(&server, "ORGANIZER").await;
    let response = server.delete_auth(&path, &other_organizer.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &creator.token).await.unwrap();
    let body: SuccessResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);
}

// ============================================================================
// Calendar Tests
// ============================================================================

#[tokio::test]
async fn test_user_cannot_book_slot() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, organizer) = register_with_role(&server, "ORGANIZER").await;
    let activity = create_activity(&server, &organizer.token).await;

    let (_, member) = register_user(&server).await;
    let request = CreateCalendarEventRequest {
        activity_id: activity.id,
        day: 0,
        zone: 1,
        start_hour: 17,
        end_hour: 19,
    };
    let response = server
        .post_auth("/calendar", &member.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_overlapping_booking_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, organizer) = register_with_role(&server, "ORGANIZER").await;
    let activity = create_activity(&server, &organizer.token).await;

    clear_slot(2, 1).await.unwrap();

    let first = CreateCalendarEventRequest {
        activity_id: activity.id,
        day: 2,
        zone: 1,
        start_hour: 17,
        end_hour: 19,
    };
    let response = server
        .post_auth("/calendar", &organizer.token, &first)
        .await
        .unwrap();
    let booked: CalendarEventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(booked.day, 2);
    assert_eq!(booked.start_hour, 17);

    // Overlapping range in the same column is rejected
    let overlapping = CreateCalendarEventRequest {
        start_hour: 18,
        end_hour: 20,
        ..first
    };
    let response = server
        .post_auth("/calendar", &organizer.token, &overlapping)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Touching ranges do not overlap
    let adjacent = CreateCalendarEventRequest {
        start_hour: 19,
        end_hour: 21,
        ..first
    };
    let response = server
        .post_auth("/calendar", &organizer.token, &adjacent)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // The other zone of the same day is a separate track
    let other_zone = CreateCalendarEventRequest { zone: 2, ..first };
    clear_slot(2, 2).await.unwrap();
    let response = server
        .post_auth("/calendar", &organizer.token, &other_zone)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_overlap_detection_wraps_midnight() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, organizer) = register_with_role(&server, "ORGANIZER").await;
    let activity = create_activity(&server, &organizer.token).await;

    clear_slot(4, 1).await.unwrap();

    let late = CreateCalendarEventRequest {
        activity_id: activity.id,
        day: 4,
        zone: 1,
        start_hour: 23,
        end_hour: 2,
    };
    let response = server
        .post_auth("/calendar", &organizer.token, &late)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Past midnight still collides with the 23:00-02:00 booking
    let after_midnight = CreateCalendarEventRequest {
        start_hour: 0,
        end_hour: 1,
        ..late
    };
    let response = server
        .post_auth("/calendar", &organizer.token, &after_midnight)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_booking_rejects_invalid_hours() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, organizer) = register_with_role(&server, "ORGANIZER").await;
    let activity = create_activity(&server, &organizer.token).await;

    // 8am is not part of the noon-to-4am cycle
    let morning = CreateCalendarEventRequest {
        activity_id: activity.id,
        day: 1,
        zone: 1,
        start_hour: 8,
        end_hour: 10,
    };
    let response = server
        .post_auth("/calendar", &organizer.token, &morning)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Empty range
    let empty = CreateCalendarEventRequest {
        start_hour: 17,
        end_hour: 17,
        ..morning
    };
    let response = server
        .post_auth("/calendar", &organizer.token, &empty)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // 2am precedes 11pm in cycle order
    let inverted = CreateCalendarEventRequest {
        start_hour: 2,
        end_hour: 23,
        ..morning
    };
    let response = server
        .post_auth("/calendar", &organizer.token, &inverted)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Day outside the week
    let bad_day = CreateCalendarEventRequest {
        day: 7,
        start_hour: 17,
        end_hour: 19,
        ..morning
    };
    let response = server
        .post_auth("/calendar", &organizer.token, &bad_day)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_calendar_listing_and_delete() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, organizer) = register_with_role(&server, "ORGANIZER").await;
    let activity = create_activity(&server, &organizer.token).await;

    clear_slot(5, 2).await.unwrap();

    let request = CreateCalendarEventRequest {
        activity_id: activity.id,
        day: 5,
        zone: 2,
        start_hour: 20,
        end_hour: 22,
    };
    let response = server
        .post_auth("/calendar", &organizer.token, &request)
        .await
        .unwrap();
    let booked: CalendarEventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/calendar", &organizer.token).await.unwrap();
    let events: Vec<ScheduledEventResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let listed = events.iter().find(|e| e.id == booked.id).unwrap();
    assert_eq!(listed.activity.id, activity.id);
    assert_eq!(listed.activity.title, activity.title);

    let path = format!("/calendar/{}", booked.id);
    let response = server.delete_auth(&path, &organizer.token).await.unwrap();
    let body: SuccessResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);

    // Deleting again is a 404
    let response = server.delete_auth(&path, &organizer.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Achievement Tests
// ============================================================================

#[tokio::test]
async fn test_achievement_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin) = register_with_role(&server, "ADMIN").await;
    let (_, member) = register_user(&server).await;

    // Plain members may not define achievements
    let request = CreateAchievementRequest::unique();
    let response = server
        .post_auth("/achievements", &member.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth("/achievements", &admin.token, &request)
        .await
        .unwrap();
    let created: AchievementResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.name, request.name);

    // Deletion is ADMIN-only
    let path = format!("/achievements/{}", created.id);
    let response = server.delete_auth(&path, &member.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &admin.token).await.unwrap();
    let body: SuccessResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);

    let response = server.get_auth("/achievements", &admin.token).await.unwrap();
    let listed: Vec<AchievementResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.iter().all(|a| a.id != created.id));
}

#[tokio::test]
async fn test_grant_and_revoke_achievement() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin) = register_with_role(&server, "ADMIN").await;
    let (_, organizer) = register_with_role(&server, "ORGANIZER").await;
    let (_, member) = register_user(&server).await;

    let request = CreateAchievementRequest::unique();
    let response = server
        .post_auth("/achievements", &admin.token, &request)
        .await
        .unwrap();
    let achievement: AchievementResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    // ORGANIZER may award
    let grant = GrantAchievementRequest {
        achievement_id: achievement.id,
    };
    let path = format!("/members/{}/achievements", member.user.id);
    let response = server.post_auth(&path, &organizer.token, &grant).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/me", &member.token).await.unwrap();
    let envelope: UserEnvelope<ProfileResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(envelope.user.achievements.iter().any(|a| a.id == achievement.id));

    // Revoking needs ADMIN, not ORGANIZER
    let revoke_path = format!("/members/{}/achievements/{}", member.user.id, achievement.id);
    let response = server.delete_auth(&revoke_path, &organizer.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&revoke_path, &admin.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/me", &member.token).await.unwrap();
    let envelope: UserEnvelope<ProfileResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(envelope.user.achievements.iter().all(|a| a.id != achievement.id));
}

// ============================================================================
// Member Administration Tests
// ============================================================================

#[tokio::test]
async fn test_member_admin_is_role_gated() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, member) = register_user(&server).await;
    let (_, other) = register_user(&server).await;
    let (_, organizer) = register_with_role(&server, "ORGANIZER").await;

    let role_path = format!("/members/{}/role", other.user.id);
    let set_role = SetRoleRequest {
        role: "ORGANIZER".to_string(),
    };

    // Role reassignment and member deletion are ADMIN-only; even an
    // ORGANIZER is turned away
    let response = server.patch_auth(&role_path, &member.token, &set_role).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .patch_auth(&role_path, &organizer.token, &set_role)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let member_path = format!("/members/{}", other.user.id);
    let response = server.delete_auth(&member_path, &member.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&member_path, &organizer.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_admin_reassigns_role() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin) = register_with_role(&server, "ADMIN").await;
    let (_, member) = register_user(&server).await;

    let set_role = SetRoleRequest {
        role: "ORGANIZER".to_string(),
    };
    let response = server
        .patch_auth(
            &format!("/members/{}/role", member.user.id),
            &admin.token,
            &set_role,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // The member's existing token reflects the change immediately
    let response = server.get_auth("/me", &member.token).await.unwrap();
    let envelope: UserEnvelope<ProfileResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(envelope.user.role, "ORGANIZER");

    let response = server.get_auth("/members", &admin.token).await.unwrap();
    let members: Vec<MemberResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let listed = members.iter().find(|m| m.id == member.user.id).unwrap();
    assert_eq!(listed.role, "ORGANIZER");
}

#[tokio::test]
async fn test_delete_member_cascades() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin) = register_with_role(&server, "ADMIN").await;
    let activity = create_activity(&server, &admin.token).await;

    let (_, member) = register_user(&server).await;
    server
        .post_auth_empty(&format!("/activities/{}/join", activity.id), &member.token)
        .await
        .unwrap();

    let achievement_req = CreateAchievementRequest::unique();
    let response = server
        .post_auth("/achievements", &admin.token, &achievement_req)
        .await
        .unwrap();
    let achievement: AchievementResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    let grant = GrantAchievementRequest {
        achievement_id: achievement.id,
    };
    server
        .post_auth(
            &format!("/members/{}/achievements", member.user.id),
            &admin.token,
            &grant,
        )
        .await
        .unwrap();

    let response = server
        .delete_auth(&format!("/members/{}", member.user.id), &admin.token)
        .await
        .unwrap();
    let body: SuccessResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);

    // No orphaned join rows survive the account
    for table in [
        "user_roles",
        "user_achievements",
        "activity_participants",
        "ludoteca_participants",
        "user_status",
    ] {
        let rows = count_rows(table, "user_id", member.user.id).await.unwrap();
        assert_eq!(rows, 0, "{table} still references the deleted user");
    }

    // The deleted member's token no longer resolves
    let response = server.get_auth("/me", &member.token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_admin_cannot_delete_self() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin) = register_with_role(&server, "ADMIN").await;

    let response = server
        .delete_auth(&format!("/members/{}", admin.user.id), &admin.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_remove_participant_requires_role() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, organizer) = register_with_role(&server, "ORGANIZER").await;
    let activity = create_activity(&server, &organizer.token).await;

    let (_, joiner) = register_user(&server).await;
    let (_, bystander) = register_user(&server).await;
    server
        .post_auth_empty(&format!("/activities/{}/join", activity.id), &joiner.token)
        .await
        .unwrap();

    let path = format!("/activities/{}/participants/{}", activity.id, joiner.user.id);

    let response = server.delete_auth(&path, &bystander.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &organizer.token).await.unwrap();
    let detail: BoardItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(detail.participants_list.iter().all(|p| p.id != joiner.user.id));
}
