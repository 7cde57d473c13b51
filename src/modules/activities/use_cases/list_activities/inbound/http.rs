use axum::{extract::State, response::IntoResponse};

use crate::modules::activities::adapters::inbound::http_error::internal_error;
use crate::modules::activities::use_cases::list_activities::view::ActivitiesView;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_activities().await {
        Ok(activities) => axum::Json(ActivitiesView(activities)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "listing activities failed");
            internal_error()
        }
    }
}

#[cfg(test)]
mod list_activities_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
    use crate::shell::state::AppState;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/activities", get(handle))
            .with_state(state)
    }

    async fn get_activities(state: AppState) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_seeded_activities() {
        let (status, json) = get_activities(AppState::seeded()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json.is_object());
        assert!(json.get("Tennis Club").is_some());
        assert!(json.get("Basketball Team").is_some());
        assert!(json.get("Drama Club").is_some());
    }

    #[rstest]
    #[case("Chess Club")]
    #[case("Tennis Club")]
    #[case("Debate Team")]
    #[tokio::test]
    async fn it_should_return_the_required_fields_for_each_activity(#[case] name: &str) {
        let (_, json) = get_activities(AppState::seeded()).await;
        let activity = &json[name];
        for field in ["description", "schedule", "max_participants", "participants"] {
            assert!(activity.get(field).is_some(), "{name} is missing {field}");
        }
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_store_is_offline() {
        let mut store = InMemoryActivityStore::seeded();
        store.toggle_offline();
        let (status, json) = get_activities(AppState::in_memory(Arc::new(store))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["detail"], "Internal server error");
    }
}
