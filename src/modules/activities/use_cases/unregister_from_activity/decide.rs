// Pure decision for unregistering. No input or output here.

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::DecideError;
use crate::modules::activities::core::events::{ActivityEvent, v1::ParticipantUnregisteredV1};
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

pub fn decide_unregister(
    state: Option<&Activity>,
    command: &UnregisterFromActivity,
) -> Result<Vec<ActivityEvent>, DecideError> {
    let activity = state.ok_or(DecideError::NotFound)?;
    if !activity.has_participant(&command.email) {
        return Err(DecideError::NotRegistered);
    }
    Ok(vec![ActivityEvent::ParticipantUnregisteredV1(
        ParticipantUnregisteredV1 {
            activity: activity.name.clone(),
            email: command.email.clone(),
        },
    )])
}
