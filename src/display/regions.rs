//! In-memory display regions.
//!
//! # Responsibilities
//! - Hold the current content of every region
//! - Count how many times each region has been written
//! - Hand out consistent snapshots for the dashboard

use dashmap::DashMap;
use serde::Serialize;

use crate::display::DisplaySurface;

#[derive(Debug, Default)]
struct Region {
    content: String,
    updates: u64,
    /// Position in registration order, for stable listing.
    order: usize,
}

/// Point-in-time view of one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionSnapshot {
    pub id: String,
    pub content: String,
    pub updates: u64,
}

/// Concurrent region map shared by poll loops and the dashboard.
#[derive(Debug, Default)]
pub struct RegionStore {
    regions: DashMap<String, Region>,
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region with its initial content.
    ///
    /// Re-registering an existing region leaves it untouched.
    pub fn register(&self, id: &str, initial: &str) {
        let order = self.regions.len();
        self.regions.entry(id.to_string()).or_insert_with(|| Region {
            content: initial.to_string(),
            updates: 0,
            order,
        });
    }

    pub fn content(&self, id: &str) -> Option<String> {
        self.regions.get(id).map(|r| r.content.clone())
    }

    pub fn get(&self, id: &str) -> Option<RegionSnapshot> {
        self.regions.get(id).map(|r| RegionSnapshot {
            id: id.to_string(),
            content: r.content.clone(),
            updates: r.updates,
        })
    }

    /// All regions in registration order.
    pub fn snapshot(&self) -> Vec<RegionSnapshot> {
        let mut regions: Vec<(usize, RegionSnapshot)> = self
            .regions
            .iter()
            .map(|entry| {
                (
                    entry.order,
                    RegionSnapshot {
                        id: entry.key().clone(),
                        content: entry.content.clone(),
                        updates: entry.updates,
                    },
                )
            })
            .collect();
        regions.sort_by_key(|(order, _)| *order);
        regions.into_iter().map(|(_, snapshot)| snapshot).collect()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl DisplaySurface for RegionStore {
    fn set_content(&self, region: &str, content: &str) {
        let order = self.regions.len();
        let mut entry = self.regions.entry(region.to_string()).or_insert_with(|| {
            tracing::debug!(region = %region, "Writing to unregistered region");
            Region {
                order,
                ..Region::default()
            }
        });
        entry.content.clear();
        entry.content.push_str(content);
        entry.updates += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_sets_initial_content() {
        let store = RegionStore::new();
        store.register("summary", "<i>loading</i>");

        let region = store.get("summary").unwrap();
        assert_eq!(region.content, "<i>loading</i>");
        assert_eq!(region.updates, 0);
    }

    #[test]
    fn test_register_twice_keeps_content() {
        let store = RegionStore::new();
        store.register("summary", "first");
        store.set_content("summary", "polled");
        store.register("summary", "second");

        assert_eq!(store.content("summary").as_deref(), Some("polled"));
    }

    #[test]
    fn test_set_content_replaces_verbatim() {
        let store = RegionStore::new();
        store.register("panel", "");
        store.set_content("panel", "<script>alert(1)</script> & <b>raw</b>");
        store.set_content("panel", "<b>OK</b>");

        let region = store.get("panel").unwrap();
        assert_eq!(region.content, "<b>OK</b>");
        assert_eq!(region.updates, 2);
    }

    #[test]
    fn test_snapshot_keeps_registration_order() {
        let store = RegionStore::new();
        store.register("c", "");
        store.register("a", "");
        store.register("b", "");
        store.set_content("z", "late");

        let ids: Vec<_> = store.snapshot().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["c", "a", "b", "z"]);
    }

    #[test]
    fn test_unknown_region() {
        let store = RegionStore::new();
        assert!(store.get("missing").is_none());
        assert!(store.is_empty());
    }
}
