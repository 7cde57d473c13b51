use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::shell::config::Config;
use crate::shell::http::app;
use crate::shell::state::AppState;

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
}

async fn chess_club_participants(router: &Router) -> Vec<String> {
    let (status, json) = send(
        router,
        Request::get("/activities").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_value(json["Chess Club"]["participants"].clone()).unwrap()
}

#[tokio::test]
async fn signs_up_and_unregisters_through_the_full_router() {
    let router = app(AppState::seeded(), &Config::default());
    let email = "flow@mergington.edu";

    let initial = chess_club_participants(&router).await;
    assert!(!initial.iter().any(|p| p == email));

    let (status, _) = send(
        &router,
        Request::post(format!("/activities/Chess%20Club/signup?email={email}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(chess_club_participants(&router).await.iter().any(|p| p == email));

    let (status, _) = send(
        &router,
        Request::post(format!("/activities/Chess%20Club/unregister?email={email}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let last = chess_club_participants(&router).await;
    assert!(!last.iter().any(|p| p == email));
    assert_eq!(last, initial);
}

#[tokio::test]
async fn keeps_memberships_of_activities_independent() {
    let router = app(AppState::seeded(), &Config::default());
    let email = "michael@mergington.edu";

    let (status, _) = send(
        &router,
        Request::post(format!("/activities/Drama%20Club/signup?email={email}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &router,
        Request::post(format!("/activities/Chess%20Club/unregister?email={email}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = send(
        &router,
        Request::get("/activities").body(Body::empty()).unwrap(),
    )
    .await;
    let drama: Vec<String> =
        serde_json::from_value(json["Drama Club"]["participants"].clone()).unwrap();
    assert!(drama.iter().any(|p| p == email));
}

#[tokio::test]
async fn rejects_unknown_activities_with_404() {
    let router = app(AppState::seeded(), &Config::default());
    let (status, json) = send(
        &router,
        Request::post("/activities/Nonexistent%20Activity/signup?email=test@mergington.edu")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Activity not found");
}

#[tokio::test]
async fn serves_graphql_on_the_same_registry() {
    let router = app(AppState::seeded(), &Config::default());
    let body = serde_json::json!({
        "query": r#"mutation { signUpForActivity(activity: "Math Club", email: "gql@mergington.edu") }"#
    });
    let (status, json) = send(
        &router,
        Request::post("/graphql")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["data"]["signUpForActivity"],
        "Signed up gql@mergington.edu for Math Club"
    );

    let (_, json) = send(
        &router,
        Request::get("/activities").body(Body::empty()).unwrap(),
    )
    .await;
    let math: Vec<String> =
        serde_json::from_value(json["Math Club"]["participants"].clone()).unwrap();
    assert!(math.iter().any(|p| p == "gql@mergington.edu"));
}
