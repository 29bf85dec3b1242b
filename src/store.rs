//! Profile store: the single owner of the profile collection.
//!
//! Holds the canonical collection, the displayed collection derived from
//! the last search or filter, the current selection and the admin display
//! flag. Every mutation goes through the methods below; views and HTTP
//! handlers never touch the collections directly.
//!
//! After each effective mutation the store notifies its registered
//! observers in registration order. No-op updates and deletes do not
//! notify.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{FilterCriteria, Profile};

// ═══════════════════════════════════════════════════════════
// Error type
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Profile not found: {0}")]
    NotFound(String),
}

// ═══════════════════════════════════════════════════════════
// Events and observers
// ═══════════════════════════════════════════════════════════

/// Change notification delivered to observers after a mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    ProfileCreated { id: String },
    ProfileUpdated { id: String },
    ProfileDeleted { id: String },
    /// The displayed collection was recomputed.
    DisplayChanged { count: usize },
    SelectionChanged { id: Option<String> },
    AdminModeChanged { enabled: bool },
}

/// Receives store change notifications. Called synchronously inside the
/// mutating operation, so implementations must not block.
pub trait StoreObserver: Send + Sync {
    fn on_change(&self, event: &StoreEvent);
}

impl<F> StoreObserver for F
where
    F: Fn(&StoreEvent) + Send + Sync,
{
    fn on_change(&self, event: &StoreEvent) {
        self(event)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

// ═══════════════════════════════════════════════════════════
// Query state
// ═══════════════════════════════════════════════════════════

/// The query that produced the displayed collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActiveQuery {
    /// Displayed collection mirrors the canonical one.
    #[default]
    None,
    Search { query: String },
    Filter { criteria: FilterCriteria },
}

// ═══════════════════════════════════════════════════════════
// ProfileStore
// ═══════════════════════════════════════════════════════════

pub struct ProfileStore {
    profiles: Vec<Profile>,
    /// Snapshot from the last non-trivial search/filter. `None` mirrors
    /// `profiles`. Never mutated in place.
    displayed: Option<Vec<Profile>>,
    active_query: ActiveQuery,
    selected: Option<Profile>,
    is_admin: bool,
    observers: Vec<(SubscriptionId, Arc<dyn StoreObserver>)>,
    next_subscription: u64,
}

impl ProfileStore {
    /// Create a store seeded with `profiles`. Seed entries are normalized
    /// and keep their ids.
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: profiles.into_iter().map(Profile::normalized).collect(),
            displayed: None,
            active_query: ActiveQuery::None,
            selected: None,
            is_admin: false,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Store seeded with the built-in dataset.
    pub fn seeded() -> Self {
        Self::new(crate::seed::seed_profiles())
    }

    // ── Reads ───────────────────────────────────────────────

    /// The canonical collection.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// The collection views render.
    pub fn displayed(&self) -> &[Profile] {
        self.displayed.as_deref().unwrap_or(&self.profiles)
    }

    pub fn get(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn selected(&self) -> Option<&Profile> {
        self.selected.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn active_query(&self) -> &ActiveQuery {
        &self.active_query
    }

    /// Distinct skills across the canonical collection, first-seen order.
    pub fn skill_catalog(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.profiles
            .iter()
            .flat_map(|p| p.skills())
            .filter(|s| seen.insert(s.as_str()))
            .cloned()
            .collect()
    }

    // ── CRUD ────────────────────────────────────────────────

    /// Append a profile under a fresh id. Any caller-supplied id is
    /// replaced. Returns the stored entry.
    ///
    /// An active search or filter is not re-applied; call `refresh`.
    pub fn create(&mut self, profile: Profile) -> Profile {
        let stored = Profile {
            id: self.fresh_id(),
            ..profile
        }
        .normalized();

        tracing::debug!(id = %stored.id, name = %stored.name, "Profile created");
        self.profiles.push(stored.clone());
        self.notify(StoreEvent::ProfileCreated {
            id: stored.id.clone(),
        });
        stored
    }

    /// Replace the entry with the same id, keeping its position.
    ///
    /// An unknown id leaves the collection untouched and returns
    /// `StoreError::NotFound`. A matching selection and a matching entry in
    /// the displayed snapshot are refreshed to the new contents; the active
    /// query is not re-run.
    pub fn update(&mut self, profile: Profile) -> Result<(), StoreError> {
        let Some(index) = self.profiles.iter().position(|p| p.id == profile.id) else {
            tracing::warn!(id = %profile.id, "Update ignored: profile not found");
            return Err(StoreError::NotFound(profile.id));
        };

        let updated = profile.normalized();
        if self.selected.as_ref().is_some_and(|s| s.id == updated.id) {
            self.selected = Some(updated.clone());
        }
        if let Some(slot) = self
            .displayed
            .as_mut()
            .and_then(|shown| shown.iter_mut().find(|p| p.id == updated.id))
        {
            *slot = updated.clone();
        }
        let id = updated.id.clone();
        self.profiles[index] = updated;

        tracing::debug!(id = %id, "Profile updated");
        self.notify(StoreEvent::ProfileUpdated { id });
        Ok(())
    }

    /// Remove the entry with `id` from the canonical collection and the
    /// displayed snapshot. Returns `false` (and logs) when absent.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.profiles.len();
        self.profiles.retain(|p| p.id != id);
        if self.profiles.len() == before {
            tracing::debug!(id, "Delete ignored: profile not found");
            return false;
        }
        if let Some(shown) = self.displayed.as_mut() {
            shown.retain(|p| p.id != id);
        }

        tracing::debug!(id, "Profile deleted");
        self.notify(StoreEvent::ProfileDeleted { id: id.to_string() });
        true
    }

    // ── Queries ─────────────────────────────────────────────

    /// Recompute the displayed collection from a free-text query.
    ///
    /// Empty query shows the full canonical collection. Otherwise an entry
    /// matches when its name, description or any skill contains the query,
    /// ignoring case. Always computed from the canonical collection.
    pub fn search(&mut self, query: &str) -> &[Profile] {
        if query.is_empty() {
            self.reset_display();
        } else {
            let matched = search_matches(&self.profiles, query);
            self.set_display(
                ActiveQuery::Search {
                    query: query.to_string(),
                },
                matched,
            );
        }
        self.displayed()
    }

    /// Recompute the displayed collection from attribute criteria.
    ///
    /// Only supplied predicates apply, combined with AND. Empty criteria
    /// show the full canonical collection.
    pub fn filter(&mut self, criteria: &FilterCriteria) -> &[Profile] {
        if criteria.is_empty() {
            self.reset_display();
        } else {
            let matched = filter_matches(&self.profiles, criteria);
            self.set_display(
                ActiveQuery::Filter {
                    criteria: criteria.clone(),
                },
                matched,
            );
        }
        self.displayed()
    }

    /// Re-apply the last search or filter to the current canonical
    /// collection.
    pub fn refresh(&mut self) -> &[Profile] {
        match self.active_query.clone() {
            ActiveQuery::None => self.reset_display(),
            ActiveQuery::Search { query } => {
                self.search(&query);
            }
            ActiveQuery::Filter { criteria } => {
                self.filter(&criteria);
            }
        }
        self.displayed()
    }

    // ── Selection and admin flag ────────────────────────────

    /// Set or clear the selection. The profile is not checked against the
    /// canonical collection; renderers must tolerate a stale selection.
    pub fn select(&mut self, profile: Option<Profile>) {
        let id = profile.as_ref().map(|p| p.id.clone());
        self.selected = profile;
        self.notify(StoreEvent::SelectionChanged { id });
    }

    /// Select the canonical entry with `id`. Unknown ids leave the
    /// selection unchanged and return `false`.
    pub fn select_by_id(&mut self, id: &str) -> bool {
        match self.get(id).cloned() {
            Some(profile) => {
                self.select(Some(profile));
                true
            }
            None => {
                tracing::debug!(id, "Selection ignored: profile not found");
                false
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.select(None);
    }

    /// Toggle the admin display flag. Not an authorization gate: no store
    /// operation consults it.
    pub fn set_admin_mode(&mut self, enabled: bool) {
        self.is_admin = enabled;
        tracing::info!(enabled, "Admin mode changed");
        self.notify(StoreEvent::AdminModeChanged { enabled });
    }

    // ── Observers ───────────────────────────────────────────

    pub fn subscribe(&mut self, observer: Arc<dyn StoreObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    #[cfg(test)]
    pub(crate) fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // ── Internals ───────────────────────────────────────────

    fn notify(&self, event: StoreEvent) {
        for (_, observer) in &self.observers {
            observer.on_change(&event);
        }
    }

    fn reset_display(&mut self) {
        self.active_query = ActiveQuery::None;
        self.displayed = None;
        self.notify(StoreEvent::DisplayChanged {
            count: self.profiles.len(),
        });
    }

    fn set_display(&mut self, query: ActiveQuery, matched: Vec<Profile>) {
        let count = matched.len();
        self.active_query = query;
        self.displayed = Some(matched);
        self.notify(StoreEvent::DisplayChanged { count });
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::seeded()
    }
}

// ═══════════════════════════════════════════════════════════
// Matching
// ═══════════════════════════════════════════════════════════

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn search_matches(profiles: &[Profile], query: &str) -> Vec<Profile> {
    let needle = query.to_lowercase();
    profiles
        .iter()
        .filter(|p| {
            contains_ignore_case(&p.name, &needle)
                || contains_ignore_case(&p.description, &needle)
                || p.skills().iter().any(|s| contains_ignore_case(s, &needle))
        })
        .cloned()
        .collect()
}

fn filter_matches(profiles: &[Profile], criteria: &FilterCriteria) -> Vec<Profile> {
    let location = criteria.location().map(str::to_lowercase);
    let experience = criteria.experience().map(str::to_lowercase);

    profiles
        .iter()
        .filter(|p| match criteria.skills() {
            Some(wanted) => p.skills().iter().any(|s| wanted.contains(s)),
            None => true,
        })
        .filter(|p| match &location {
            Some(loc) => contains_ignore_case(&p.address, loc),
            None => true,
        })
        .filter(|p| match &experience {
            Some(exp) => p.experience().is_some_and(|e| contains_ignore_case(e, exp)),
            None => true,
        })
        .cloned()
        .collect()
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::models::{AdditionalDetails, SocialLinks};

    fn names(profiles: &[Profile]) -> Vec<&str> {
        profiles.iter().map(|p| p.name.as_str()).collect()
    }

    fn new_profile(name: &str) -> Profile {
        Profile {
            id: "caller-id".into(),
            name: name.into(),
            photo: "https://example.com/p.jpg".into(),
            description: "Data Scientist".into(),
            address: "Austin, TX".into(),
            lat: 30.27,
            lng: -97.74,
            additional_details: AdditionalDetails {
                email: Some("x@example.com".into()),
                experience: Some("3 years in analytics".into()),
                ..Default::default()
            },
        }
    }

    fn recording_observer() -> (Arc<Mutex<Vec<StoreEvent>>>, Arc<dyn StoreObserver>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let observer: Arc<dyn StoreObserver> = Arc::new(move |event: &StoreEvent| {
            sink.lock().unwrap().push(event.clone());
        });
        (log, observer)
    }

    // --- create ---

    #[test]
    fn create_assigns_fresh_unique_id() {
        let mut store = ProfileStore::seeded();
        let a = store.create(new_profile("A"));
        let b = store.create(new_profile("B"));

        assert!(!a.id.is_empty());
        assert_ne!(a.id, "caller-id");
        assert_ne!(a.id, b.id);

        let ids: HashSet<&str> = store.profiles().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), store.profiles().len());
    }

    #[test]
    fn create_roundtrip_preserves_fields_and_defaults_containers() {
        let mut store = ProfileStore::seeded();
        let input = new_profile("Round Trip");
        let stored = store.create(input.clone());

        let read_back = store.get(&stored.id).unwrap().clone();
        let expected = Profile {
            id: stored.id.clone(),
            additional_details: AdditionalDetails {
                skills: Some(vec![]),
                languages: Some(vec![]),
                social_links: Some(SocialLinks::default()),
                ..input.additional_details.clone()
            },
            ..input
        };
        assert_eq!(read_back, expected);
    }

    #[test]
    fn create_appends_at_end() {
        let mut store = ProfileStore::seeded();
        store.create(new_profile("Last"));
        assert_eq!(names(store.profiles()), vec!["John Doe", "Jane Smith", "Last"]);
    }

    #[test]
    fn create_does_not_refresh_active_search() {
        let mut store = ProfileStore::seeded();
        store.search("designer");
        store.create(new_profile("Another Designer"));
        assert_eq!(names(store.displayed()), vec!["Jane Smith"]);

        store.refresh();
        assert_eq!(names(store.displayed()), vec!["Jane Smith", "Another Designer"]);
    }

    #[test]
    fn create_shows_immediately_without_active_query() {
        let mut store = ProfileStore::seeded();
        store.create(new_profile("Visible"));
        assert_eq!(store.displayed().len(), 3);
    }

    // --- update ---

    #[test]
    fn update_replaces_in_place() {
        let mut store = ProfileStore::seeded();
        let mut jane = store.get("2").unwrap().clone();
        jane.description = "Design Lead".into();
        jane.additional_details.languages = None;

        store.update(jane).unwrap();

        assert_eq!(names(store.profiles()), vec!["John Doe", "Jane Smith"]);
        let stored = store.get("2").unwrap();
        assert_eq!(stored.description, "Design Lead");
        assert_eq!(stored.additional_details.languages, Some(vec![]));
    }

    #[test]
    fn update_unknown_id_leaves_collection_unchanged() {
        let mut store = ProfileStore::seeded();
        let before = store.profiles().to_vec();

        let mut ghost = new_profile("Ghost");
        ghost.id = "missing".into();
        let err = store.update(ghost).unwrap_err();

        assert_eq!(err, StoreError::NotFound("missing".into()));
        assert_eq!(store.profiles(), before.as_slice());
    }

    #[test]
    fn update_refreshes_matching_selection() {
        let mut store = ProfileStore::seeded();
        store.select_by_id("1");
        let mut john = store.get("1").unwrap().clone();
        john.address = "Seattle, WA".into();
        store.update(john).unwrap();
        assert_eq!(store.selected().unwrap().address, "Seattle, WA");
    }

    #[test]
    fn update_refreshes_entry_in_active_search() {
        let mut store = ProfileStore::seeded();
        store.search("jane");
        let mut jane = store.get("2").unwrap().clone();
        jane.description = "Design Lead".into();

        store.update(jane).unwrap();

        assert_eq!(names(store.displayed()), vec!["Jane Smith"]);
        assert_eq!(store.displayed()[0].description, "Design Lead");
        assert_eq!(
            store.active_query(),
            &ActiveQuery::Search {
                query: "jane".into()
            }
        );
    }

    #[test]
    fn update_does_not_rerun_active_query() {
        let mut store = ProfileStore::seeded();
        store.search("jane");
        let mut john = store.get("1").unwrap().clone();
        john.name = "Jane-Marie Doe".into();

        store.update(john).unwrap();

        assert_eq!(names(store.displayed()), vec!["Jane Smith"]);
    }

    // --- delete ---

    #[test]
    fn delete_is_idempotent() {
        let mut store = ProfileStore::seeded();
        assert!(store.delete("1"));
        let after_first = store.profiles().to_vec();

        assert!(!store.delete("1"));
        assert_eq!(store.profiles(), after_first.as_slice());
        assert_eq!(names(store.profiles()), vec!["Jane Smith"]);
    }

    #[test]
    fn delete_keeps_stale_selection() {
        let mut store = ProfileStore::seeded();
        store.select_by_id("2");
        store.delete("2");
        assert_eq!(store.selected().unwrap().name, "Jane Smith");
        assert!(!store.contains("2"));
    }

    #[test]
    fn delete_removes_entry_from_active_filter() {
        let mut store = ProfileStore::seeded();
        store.filter(&FilterCriteria {
            location: Some("new york".into()),
            ..Default::default()
        });
        assert_eq!(names(store.displayed()), vec!["Jane Smith"]);

        assert!(store.delete("2"));

        assert!(store.displayed().is_empty());
        assert_eq!(names(store.profiles()), vec!["John Doe"]);
        assert!(matches!(store.active_query(), ActiveQuery::Filter { .. }));
    }

    // --- search ---

    #[test]
    fn empty_search_returns_full_collection() {
        let mut store = ProfileStore::seeded();
        store.search("john");
        store.filter(&FilterCriteria {
            location: Some("york".into()),
            ..Default::default()
        });
        assert_eq!(store.search("").len(), 2);
        assert_eq!(store.search("").len(), 2);
        assert_eq!(store.active_query(), &ActiveQuery::None);
    }

    #[test]
    fn search_design_matches_description() {
        let mut store = ProfileStore::seeded();
        assert_eq!(names(store.search("design")), vec!["Jane Smith"]);
    }

    #[test]
    fn search_matches_skills_case_insensitively() {
        let mut store = ProfileStore::seeded();
        assert_eq!(names(store.search("typescript")), vec!["John Doe"]);
        assert_eq!(names(store.search("FIGMA")), vec!["Jane Smith"]);
    }

    #[test]
    fn search_is_not_cumulative() {
        let mut store = ProfileStore::seeded();
        store.search("jane");
        assert_eq!(names(store.search("john")), vec!["John Doe"]);
    }

    #[test]
    fn search_results_are_subset_and_match() {
        let mut store = ProfileStore::seeded();
        store.create(new_profile("Grace"));
        for query in ["a", "e", "er", "node", "ux", "zzz", "Data"] {
            let canonical = store.profiles().to_vec();
            let needle = query.to_lowercase();
            for p in store.search(query) {
                assert!(canonical.contains(p));
                let hit = p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.skills().iter().any(|s| s.to_lowercase().contains(&needle));
                assert!(hit, "{} should not match {query}", p.name);
            }
        }
    }

    #[test]
    fn search_sees_created_profiles() {
        let mut store = ProfileStore::seeded();
        store.create(new_profile("Grace Hopper"));
        assert_eq!(names(store.search("grace")), vec!["Grace Hopper"]);
    }

    // --- filter ---

    #[test]
    fn empty_filter_returns_full_collection() {
        let mut store = ProfileStore::seeded();
        store.search("jane");
        assert_eq!(store.filter(&FilterCriteria::default()).len(), 2);
    }

    #[test]
    fn filter_by_react_returns_john() {
        let mut store = ProfileStore::seeded();
        let criteria = FilterCriteria {
            skills: Some(vec!["React".into()]),
            ..Default::default()
        };
        assert_eq!(names(store.filter(&criteria)), vec!["John Doe"]);
    }

    #[test]
    fn filter_skills_are_or_matched_and_exact() {
        let mut store = ProfileStore::seeded();
        let both = FilterCriteria {
            skills: Some(vec!["AWS".into(), "Figma".into()]),
            ..Default::default()
        };
        assert_eq!(store.filter(&both).len(), 2);

        let wrong_case = FilterCriteria {
            skills: Some(vec!["react".into()]),
            ..Default::default()
        };
        assert!(store.filter(&wrong_case).is_empty());
    }

    #[test]
    fn filter_by_location_is_case_insensitive() {
        let mut store = ProfileStore::seeded();
        let criteria = FilterCriteria {
            location: Some("new york".into()),
            ..Default::default()
        };
        assert_eq!(names(store.filter(&criteria)), vec!["Jane Smith"]);
    }

    #[test]
    fn filter_combines_predicates_with_and() {
        let mut store = ProfileStore::seeded();
        let criteria = FilterCriteria {
            skills: Some(vec!["React".into()]),
            location: Some("new york".into()),
            experience: None,
        };
        assert!(store.filter(&criteria).is_empty());

        let criteria = FilterCriteria {
            skills: None,
            location: Some("CA".into()),
            experience: Some("SOFTWARE".into()),
        };
        assert_eq!(names(store.filter(&criteria)), vec!["John Doe"]);
    }

    #[test]
    fn filter_experience_excludes_profiles_without_experience() {
        let mut store = ProfileStore::new(vec![]);
        let mut p = new_profile("No Experience");
        p.additional_details.experience = None;
        store.create(p);
        let criteria = FilterCriteria {
            experience: Some("years".into()),
            ..Default::default()
        };
        assert!(store.filter(&criteria).is_empty());
    }

    #[test]
    fn filter_ignores_previous_search() {
        let mut store = ProfileStore::seeded();
        store.search("john");
        let criteria = FilterCriteria {
            location: Some("ny".into()),
            ..Default::default()
        };
        assert_eq!(names(store.filter(&criteria)), vec!["Jane Smith"]);
    }

    // --- selection / admin ---

    #[test]
    fn select_and_clear() {
        let mut store = ProfileStore::seeded();
        let jane = store.get("2").cloned();
        store.select(jane);
        assert_eq!(store.selected().unwrap().id, "2");
        store.clear_selection();
        assert!(store.selected().is_none());
    }

    #[test]
    fn select_by_unknown_id_keeps_selection() {
        let mut store = ProfileStore::seeded();
        store.select_by_id("1");
        assert!(!store.select_by_id("nope"));
        assert_eq!(store.selected().unwrap().id, "1");
    }

    #[test]
    fn admin_flag_does_not_gate_mutations() {
        let mut store = ProfileStore::seeded();
        assert!(!store.is_admin());
        store.create(new_profile("Allowed"));
        assert!(store.delete("1"));
        store.set_admin_mode(true);
        assert!(store.is_admin());
    }

    #[test]
    fn skill_catalog_is_distinct_in_first_seen_order() {
        let mut store = ProfileStore::seeded();
        let mut p = new_profile("Dup");
        p.additional_details.skills = Some(vec!["AWS".into(), "Rust".into(), "Rust".into()]);
        store.create(p);
        let catalog = store.skill_catalog();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.first().map(String::as_str), Some("React"));
        assert_eq!(catalog.last().map(String::as_str), Some("Rust"));
    }

    // --- observers ---

    #[test]
    fn observers_receive_events_in_order() {
        let mut store = ProfileStore::seeded();
        let (log, observer) = recording_observer();
        store.subscribe(observer);

        let created = store.create(new_profile("Eve"));
        store.search("eve");
        store.select_by_id(&created.id);
        store.set_admin_mode(true);
        store.delete(&created.id);

        let events = log.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                StoreEvent::ProfileCreated { id: created.id.clone() },
                StoreEvent::DisplayChanged { count: 1 },
                StoreEvent::SelectionChanged { id: Some(created.id.clone()) },
                StoreEvent::AdminModeChanged { enabled: true },
                StoreEvent::ProfileDeleted { id: created.id },
            ]
        );
    }

    #[test]
    fn noop_mutations_do_not_notify() {
        let mut store = ProfileStore::seeded();
        let (log, observer) = recording_observer();
        store.subscribe(observer);

        let mut ghost = new_profile("Ghost");
        ghost.id = "missing".into();
        let _ = store.update(ghost);
        store.delete("missing");

        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = ProfileStore::seeded();
        let (log, observer) = recording_observer();
        let sub = store.subscribe(observer);
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));

        store.set_admin_mode(true);
        assert!(log.lock().unwrap().is_empty());
        assert_eq!(store.observer_count(), 0);
    }

    #[test]
    fn event_serializes_with_type_tag() {
        let json = serde_json::to_value(StoreEvent::DisplayChanged { count: 2 }).unwrap();
        assert_eq!(json["type"], "display_changed");
        assert_eq!(json["count"], 2);
    }
}
