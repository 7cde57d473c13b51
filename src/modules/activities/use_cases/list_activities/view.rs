use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::modules::activities::core::activity::Activity;

/// Serializes as a JSON object keyed by activity name, keeping list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitiesView(pub Vec<Activity>);

impl Serialize for ActivitiesView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(&activity.name, activity)?;
        }
        map.end()
    }
}
