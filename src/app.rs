use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(handlers::health))
        .route("/api/auth/signup", post(handlers::signup))
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/logout", post(handlers::logout))
        .route("/api/auth/session", get(handlers::auth_session))
        .route("/api/breathing/patterns", get(handlers::breathing_patterns))
        .route("/api/breathing/start", post(handlers::breathing_start))
        .route("/api/breathing/pattern", post(handlers::breathing_change_pattern))
        .route(
            "/api/session",
            get(handlers::session_state).delete(handlers::session_clear),
        )
        .route("/api/session/pause", post(handlers::session_pause))
        .route("/api/session/resume", post(handlers::session_resume))
        .route("/api/session/reset", post(handlers::session_reset))
        .route("/api/stretching/guided/start", post(handlers::guided_stretch_start))
        .route("/api/routines", get(handlers::list_routines))
        .route(
            "/api/routines/:routine/exercises/:exercise/toggle",
            post(handlers::toggle_routine_exercise),
        )
        .route(
            "/api/routines/:routine/exercises/:exercise/start",
            post(handlers::start_routine_exercise),
        )
        .route("/api/mood", get(handlers::get_mood).post(handlers::log_mood))
        .route("/api/water", get(handlers::get_water))
        .route("/api/water/add", post(handlers::add_water))
        .route("/api/water/reset", post(handlers::reset_water))
        .route("/api/sleep", get(handlers::list_sleep).post(handlers::add_sleep))
        .route("/api/sleep/:id", delete(handlers::delete_sleep))
        .route("/api/meals", get(handlers::list_meals).post(handlers::add_meal))
        .route("/api/meals/:id", delete(handlers::delete_meal))
        .route("/api/weight", get(handlers::list_weight).post(handlers::add_weight))
        .route("/api/weight/:id", delete(handlers::delete_weight))
        .route(
            "/api/stretching",
            get(handlers::list_stretching).post(handlers::add_stretching),
        )
        .route("/api/stretching/:id", delete(handlers::delete_stretching))
        .route(
            "/api/workouts",
            get(handlers::list_workouts).post(handlers::add_workout),
        )
        .route("/api/workouts/:id", delete(handlers::delete_workout))
        .route(
            "/api/journal",
            get(handlers::list_journal).post(handlers::add_journal),
        )
        .route("/api/journal/:id", delete(handlers::delete_journal))
        .route("/api/stats", get(handlers::get_stats))
        .with_state(state)
}
