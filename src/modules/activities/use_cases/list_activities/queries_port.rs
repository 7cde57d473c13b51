use crate::modules::activities::core::activity::Activity;
use async_trait::async_trait;

#[async_trait]
pub trait ActivityQueries {
    /// All activities in the order they were registered at startup.
    async fn list_activities(&self) -> anyhow::Result<Vec<Activity>>;
}
