//! Keeps the store and key-value storage in sync.
//!
//! At startup the saved collection is read and loaded into the store. From
//! then on every change the store makes is written back in full under the
//! same key. A saved value that can't be read, or isn't a JSON array, is
//! logged and treated as "nothing saved"; it never stops startup. Inside a
//! readable array, records that don't decode are skipped one at a time so
//! the rest of the timeline survives.

use log::{debug, error, info, warn};
use serde_json::Value;

use crate::model::Activity;
use crate::storage::{KeyValueStore, Result};
use crate::store::{StateObserver, Store, TimelineState};

/// The fixed key the timeline is stored under.
pub const STORAGE_KEY: &str = "timeline-activities";

/// Writes the store's collection to storage whenever it changes.
pub struct PersistenceBridge<K> {
    storage: K,
}

impl<K: KeyValueStore + 'static> PersistenceBridge<K> {
    /// Restores saved activities into `store`, writes the resulting
    /// collection back, and subscribes so every later change is saved.
    ///
    /// Must run before anything is appended to the store.
    pub fn attach(store: &mut Store, storage: K) {
        let mut bridge = Self { storage };
        if let Some(activities) = bridge.restore() {
            info!("restored {} saved activities", activities.len());
            store.load(activities);
        }
        bridge.save(store.state());
        store.subscribe(bridge);
    }
}

impl<K: KeyValueStore> PersistenceBridge<K> {
    /// Reads the saved collection. `None` means nothing usable was saved.
    fn restore(&self) -> Option<Vec<Activity>> {
        let raw = match self.storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no saved activities under {STORAGE_KEY}");
                return None;
            }
            Err(e) => {
                error!("failed to read saved activities: {e}");
                return None;
            }
        };
        match decode(&raw) {
            Ok(activities) => Some(activities),
            Err(e) => {
                error!("failed to load saved activities, starting empty: {e}");
                None
            }
        }
    }

    fn save(&mut self, state: &TimelineState) {
        let result =
            encode(&state.activities).and_then(|json| self.storage.set_item(STORAGE_KEY, &json));
        match result {
            Ok(()) => debug!("saved {} activities", state.activities.len()),
            Err(e) => error!("failed to save activities: {e}"),
        }
    }
}

impl<K: KeyValueStore> StateObserver for PersistenceBridge<K> {
    fn state_changed(&mut self, state: &TimelineState) {
        self.save(state);
    }
}

/// Serializes a collection into its stored form: a JSON array.
pub fn encode(activities: &[Activity]) -> Result<String> {
    Ok(serde_json::to_string(activities)?)
}

/// Parses a stored JSON array back into a collection, preserving order.
///
/// Fails only when `raw` is not a JSON array. Elements that don't decode as
/// an activity are dropped with a warning.
pub fn decode(raw: &str) -> Result<Vec<Activity>> {
    let records: Vec<Value> = serde_json::from_str(raw)?;
    let activities = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let id = record.get("id").map(ToString::to_string);
            match serde_json::from_value::<Activity>(record) {
                Ok(activity) => Some(activity),
                Err(e) => {
                    let id = id.as_deref().unwrap_or("<none>");
                    warn!("skipping saved activity {index} (id {id}): {e}");
                    None
                }
            }
        })
        .collect();
    Ok(activities)
}
