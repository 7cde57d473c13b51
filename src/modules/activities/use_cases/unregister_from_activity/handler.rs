use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::decision::removed_message;
use crate::modules::activities::core::ports::ActivityStore;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::decide::decide_unregister;
use std::sync::Arc;

pub struct UnregisterFromActivityHandler<TStore>
where
    TStore: ActivityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UnregisterFromActivityHandler<TStore>
where
    TStore: ActivityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: UnregisterFromActivity,
    ) -> Result<String, ApplicationError> {
        let result = self
            .store
            .update(&command.activity, &|state| decide_unregister(state, &command))
            .await
            .map_err(ApplicationError::from)
            .and_then(|outcome| outcome.map_err(ApplicationError::from));

        match result {
            Ok(()) => {
                tracing::info!(
                    activity = %command.activity,
                    email = %command.email,
                    "participant unregistered"
                );
                Ok(removed_message(&command.email, &command.activity))
            }
            Err(e) => {
                tracing::warn!(
                    activity = %command.activity,
                    email = %command.email,
                    error = %e,
                    "unregister rejected"
                );
                Err(e)
            }
        }
    }
}
