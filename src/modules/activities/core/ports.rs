// Ports the activities core needs from the outside world.
//
// - ActivityStore: load one activity, or run a decision against it and apply
//   the resulting events as one critical section.
// - Adapters implement these traits; see adapters::outbound.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::DecideError;
use crate::modules::activities::core::events::ActivityEvent;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActivityStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedActivity {
    pub activity: Activity,
    pub version: i64,
}

/// Decides on the current state of one activity; `None` when it does not exist.
pub type Decide<'a> =
    dyn Fn(Option<&Activity>) -> Result<Vec<ActivityEvent>, DecideError> + Send + Sync + 'a;

#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Returns `None` when no activity with that name exists.
    async fn load(&self, name: &str) -> Result<Option<LoadedActivity>, ActivityStoreError>;

    /// Runs `decide` and applies its events while no other update of the same
    /// activity can interleave. The inner result carries the decider's rejection.
    async fn update(
        &self,
        name: &str,
        decide: &Decide<'_>,
    ) -> Result<Result<(), DecideError>, ActivityStoreError>;
}
