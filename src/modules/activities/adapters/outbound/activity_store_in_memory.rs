// In memory registry of activities.
//
// Locking: one RwLock per activity. The set of activities is fixed when the
// store is built, so the slot vector and the name index are never mutated.
// An update holds the activity's write lock from decision to last applied event.

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::DecideError;
use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::core::ports::{
    ActivityStore, ActivityStoreError, Decide, LoadedActivity,
};
use crate::modules::activities::core::seed::seed_activities;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

struct Slot {
    activity: Activity,
    version: i64,
}

pub struct InMemoryActivityStore {
    slots: Vec<RwLock<Slot>>,
    index: HashMap<String, usize>,
    is_offline: bool,
    delay_update_ms: AtomicU64,
}

impl InMemoryActivityStore {
    pub fn new(activities: Vec<Activity>) -> Self {
        let mut index = HashMap::with_capacity(activities.len());
        let mut slots = Vec::with_capacity(activities.len());
        for activity in activities {
            if index.contains_key(&activity.name) {
                tracing::warn!(activity = %activity.name, "duplicate activity name ignored");
                continue;
            }
            index.insert(activity.name.clone(), slots.len());
            slots.push(RwLock::new(Slot {
                activity,
                version: 0,
            }));
        }
        Self {
            slots,
            index,
            is_offline: false,
            delay_update_ms: AtomicU64::new(0),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleeps inside `update` while the activity's write lock is held.
    pub fn set_delay_update_ms(&self, ms: u64) {
        self.delay_update_ms.store(ms, Ordering::Relaxed);
    }

    fn slot(&self, name: &str) -> Option<&RwLock<Slot>> {
        self.index.get(name).map(|&i| &self.slots[i])
    }

    fn ensure_online(&self) -> Result<(), ActivityStoreError> {
        if self.is_offline {
            return Err(ActivityStoreError::Backend("Activity store offline".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryActivityStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait::async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn load(&self, name: &str) -> Result<Option<LoadedActivity>, ActivityStoreError> {
        self.ensure_online()?;
        let Some(slot) = self.slot(name) else {
            return Ok(None);
        };
        let guard = slot.read().await;
        Ok(Some(LoadedActivity {
            activity: guard.activity.clone(),
            version: guard.version,
        }))
    }

    async fn update(
        &self,
        name: &str,
        decide: &Decide<'_>,
    ) -> Result<Result<(), DecideError>, ActivityStoreError> {
        self.ensure_online()?;
        let Some(slot) = self.slot(name) else {
            return match decide(None) {
                Err(reason) => Ok(Err(reason)),
                Ok(_) => Err(ActivityStoreError::Backend(format!(
                    "unknown activity: {name}"
                ))),
            };
        };

        let mut guard = slot.write().await;

        let delay = self.delay_update_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let events = match decide(Some(&guard.activity)) {
            Ok(events) => events,
            Err(reason) => return Ok(Err(reason)),
        };
        for event in events {
            let current = std::mem::take(&mut guard.activity);
            guard.activity = evolve(current, event);
            guard.version += 1;
        }
        Ok(Ok(()))
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryActivityStore {
    async fn list_activities(&self) -> anyhow::Result<Vec<Activity>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Activity store offline"));
        }
        let mut activities = Vec::with_capacity(self.slots.len());
        for slot in &self.slots {
            activities.push(slot.read().await.activity.clone());
        }
        Ok(activities)
    }
}
