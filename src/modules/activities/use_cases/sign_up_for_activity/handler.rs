use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::decision::signed_up_message;
use crate::modules::activities::core::ports::ActivityStore;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decide::decide_sign_up;
use std::sync::Arc;

pub struct SignUpForActivityHandler<TStore>
where
    TStore: ActivityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SignUpForActivityHandler<TStore>
where
    TStore: ActivityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Returns the confirmation message on success.
    pub async fn handle(&self, command: SignUpForActivity) -> Result<String, ApplicationError> {
        let result = self
            .store
            .update(&command.activity, &|state| decide_sign_up(state, &command))
            .await
            .map_err(ApplicationError::from)
            .and_then(|outcome| outcome.map_err(ApplicationError::from));

        match result {
            Ok(()) => {
                tracing::info!(
                    activity = %command.activity,
                    email = %command.email,
                    "participant signed up"
                );
                Ok(signed_up_message(&command.email, &command.activity))
            }
            Err(e) => {
                tracing::warn!(
                    activity = %command.activity,
                    email = %command.email,
                    error = %e,
                    "sign up rejected"
                );
                Err(e)
            }
        }
    }
}
