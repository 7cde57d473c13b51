// Pure decision for signing up. No input or output here.

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::DecideError;
use crate::modules::activities::core::events::{ActivityEvent, v1::ParticipantSignedUpV1};
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

pub fn decide_sign_up(
    state: Option<&Activity>,
    command: &SignUpForActivity,
) -> Result<Vec<ActivityEvent>, DecideError> {
    let activity = state.ok_or(DecideError::NotFound)?;
    if activity.has_participant(&command.email) {
        return Err(DecideError::AlreadyRegistered);
    }
    Ok(vec![ActivityEvent::ParticipantSignedUpV1(
        ParticipantSignedUpV1 {
            activity: activity.name.clone(),
            email: command.email.clone(),
        },
    )])
}
