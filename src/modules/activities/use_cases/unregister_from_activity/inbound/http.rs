use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::activities::adapters::inbound::http_error::{error_response, message_response};
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UnregisterParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity): Path<String>,
    Query(params): Query<UnregisterParams>,
) -> impl IntoResponse {
    let command = UnregisterFromActivity {
        activity,
        email: params.email,
    };

    match state.unregister_handler.handle(command).await {
        Ok(message) => message_response(message),
        Err(e) => error_response(e),
    }
}
