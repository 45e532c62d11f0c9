//! Route definitions
//!
//! All API routes organized by domain, mounted at the root (no version
//! prefix on this API).

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{
    achievements, activities, auth, calendar, health, ludoteca, members, profile,
};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/ping", get(health::ping))
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(activity_routes())
        .merge(ludoteca_routes())
        .merge(calendar_routes())
        .merge(achievement_routes())
        .merge(member_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// Own-profile routes
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(profile::get_me))
        .route("/me", put(profile::update_me))
        .route("/me/status", put(profile::update_status))
        .route("/me/avatar", post(profile::upload_avatar))
}

/// Activity board routes
fn activity_routes() -> Router<AppState> {
    Router::new()
        .route("/activities", get(activities::list))
        .route("/activities", post(activities::create))
        .route("/activities/:id", get(activities::get))
        .route("/activities/:id", delete(activities::delete))
        .route("/activities/:id/join", post(activities::join))
        .route("/activities/:id/join", delete(activities::leave))
        .route("/activities/:id/image", patch(activities::replace_image))
        .route(
            "/activities/:id/participants/:user_id",
            delete(activities::remove_participant),
        )
}

/// Ludoteca board routes
fn ludoteca_routes() -> Router<AppState> {
    Router::new()
        .route("/ludoteca", get(ludoteca::list))
        .route("/ludoteca", post(ludoteca::create))
        .route("/ludoteca/:id", get(ludoteca::get))
        .route("/ludoteca/:id", delete(ludoteca::delete))
        .route("/ludoteca/:id/join", post(ludoteca::join))
        .route("/ludoteca/:id/join", delete(ludoteca::leave))
        .route("/ludoteca/:id/image", patch(ludoteca::replace_image))
        .route(
            "/ludoteca/:id/participants/:user_id",
            delete(ludoteca::remove_participant),
        )
}

/// Weekly calendar routes
fn calendar_routes() -> Router<AppState> {
    Router::new()
        .route("/calendar", get(calendar::list))
        .route("/calendar", post(calendar::create))
        .route("/calendar/:id", delete(calendar::delete))
}

/// Achievement routes
fn achievement_routes() -> Router<AppState> {
    Router::new()
        .route("/achievements", get(achievements::list))
        .route("/achievements", post(achievements::create))
        .route("/achievements/:id", delete(achievements::delete))
}

/// Member administration routes
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(members::list))
        .route("/members/:id", delete(members::delete))
        .route("/members/:id/role", patch(members::set_role))
        .route("/members/:id/achievements", post(members::grant_achievement))
        .route(
            "/members/:id/achievements/:achievement_id",
            delete(members::revoke_achievement),
        )
}
