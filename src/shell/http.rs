use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::http as sign_up_http;
use crate::modules::activities::use_cases::unregister_from_activity::inbound::http as unregister_http;
use crate::shell::config::Config;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/activities", get(list_http::handle))
        .route("/activities/{activity}/signup", post(sign_up_http::handle))
        .route(
            "/activities/{activity}/unregister",
            post(unregister_http::handle),
        )
        .route("/graphql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state)
}

/// Router plus the layers the binary serves with.
pub fn app(state: AppState, config: &Config) -> Router {
    let app = router(state).layer(TraceLayer::new_for_http());
    if config.cors_permissive {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
