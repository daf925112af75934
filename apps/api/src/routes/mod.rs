pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::answers::handlers as answers;
use crate::interview::handlers as interviews;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Interview API
        .route(
            "/api/v1/interviews",
            post(interviews::handle_create_interview).get(interviews::handle_list_interviews),
        )
        .route(
            "/api/v1/interviews/:id",
            get(interviews::handle_get_interview).put(interviews::handle_update_interview),
        )
        .route("/api/v1/focus-areas", post(interviews::handle_focus_areas))
        // Answer API
        .route(
            "/api/v1/interviews/:id/answers",
            post(answers::handle_record_answer),
        )
        .route(
            "/api/v1/interviews/:id/feedback",
            get(answers::handle_feedback),
        )
        .route(
            "/api/v1/confidence/score",
            post(answers::handle_score_confidence),
        )
        .with_state(state)
}
