//! The activity store: single owner of the timeline state.
//!
//! All mutations go through [`Command`] and the pure [`reduce`] function.
//! [`Store`] wraps the state, applies commands, and notifies observers
//! synchronously after every change.

use std::cmp::Reverse;

use crate::model::Activity;

/// The ordered sequence of activities, most recent date first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineState {
    pub activities: Vec<Activity>,
}

/// A state transition.
#[derive(Debug, Clone)]
pub enum Command {
    /// Insert one validated activity and re-sort by date descending.
    AddActivity(Activity),

    /// Replace the whole collection verbatim. Used to restore saved data,
    /// which is already in order, so no re-sort is applied.
    LoadActivities(Vec<Activity>),
}

/// Applies a command to a state, producing the next state.
///
/// The sort on add is stable: activities sharing a date keep the order in
/// which they were inserted.
pub fn reduce(state: TimelineState, command: Command) -> TimelineState {
    match command {
        Command::AddActivity(activity) => {
            let mut activities = state.activities;
            activities.push(activity);
            activities.sort_by_key(|a| Reverse(a.date));
            TimelineState { activities }
        }
        Command::LoadActivities(activities) => TimelineState { activities },
    }
}

/// Something that wants to hear about every state change.
pub trait StateObserver {
    fn state_changed(&mut self, state: &TimelineState);
}

/// Owns the timeline state and the observers watching it.
#[derive(Default)]
pub struct Store {
    state: TimelineState,
    observers: Vec<Box<dyn StateObserver>>,
}

impl Store {
    /// Creates a store with an empty timeline and no observers.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TimelineState {
        &self.state
    }

    /// Registers an observer. It is not called for the current state, only
    /// for changes dispatched after this point.
    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Applies a command and notifies every observer, in subscription order.
    pub fn dispatch(&mut self, command: Command) -> &TimelineState {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, command);
        for observer in &mut self.observers {
            observer.state_changed(&self.state);
        }
        &self.state
    }

    /// Adds a validated activity. Cannot fail.
    pub fn append(&mut self, activity: Activity) -> &TimelineState {
        self.dispatch(Command::AddActivity(activity))
    }

    /// Replaces the collection with previously saved data.
    pub fn load(&mut self, activities: Vec<Activity>) -> &TimelineState {
        self.dispatch(Command::LoadActivities(activities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    use jiff::civil::{Date, date};
    use proptest::prelude::*;

    use crate::model::ActivityId;

    fn activity(title: &str, date: Date) -> Activity {
        Activity {
            id: ActivityId::generate(),
            title: title.into(),
            date,
            link: None,
        }
    }

    fn titles(state: &TimelineState) -> Vec<&str> {
        state.activities.iter().map(|a| a.title.as_str()).collect()
    }

    fn is_sorted_descending(state: &TimelineState) -> bool {
        state.activities.windows(2).all(|w| w[0].date >= w[1].date)
    }

    /// Records the titles seen on each notification.
    struct Recorder(Rc<RefCell<Vec<Vec<String>>>>);

    impl StateObserver for Recorder {
        fn state_changed(&mut self, state: &TimelineState) {
            let titles = state.activities.iter().map(|a| a.title.clone()).collect();
            self.0.borrow_mut().push(titles);
        }
    }

    #[test]
    fn newer_activity_goes_first() {
        let mut store = Store::new();
        store.append(activity("Gym", date(2024, 1, 10)));
        store.append(activity("Launch", date(2024, 3, 1)));

        assert_eq!(titles(store.state()), ["Launch", "Gym"]);
    }

    #[test]
    fn older_activity_goes_last() {
        let mut store = Store::new();
        store.append(activity("Launch", date(2024, 3, 1)));
        store.append(activity("Gym", date(2024, 1, 10)));
        store.append(activity("Talk", date(2024, 2, 14)));

        assert_eq!(titles(store.state()), ["Launch", "Talk", "Gym"]);
    }

    #[test]
    fn equal_dates_keep_insertion_order() {
        let mut store = Store::new();
        store.append(activity("First", date(2024, 5, 5)));
        store.append(activity("Second", date(2024, 5, 5)));
        store.append(activity("Older", date(2024, 1, 1)));
        store.append(activity("Third", date(2024, 5, 5)));

        assert_eq!(titles(store.state()), ["First", "Second", "Third", "Older"]);
    }

    #[test]
    fn load_replaces_without_sorting() {
        let mut store = Store::new();
        store.append(activity("Dropped", date(2025, 1, 1)));

        let saved = vec![
            activity("A", date(2023, 1, 1)),
            activity("B", date(2024, 1, 1)),
            activity("C", date(2022, 1, 1)),
        ];
        store.load(saved.clone());

        assert_eq!(store.state().activities, saved);
    }

    #[test]
    fn reduce_is_pure() {
        let before = TimelineState {
            activities: vec![activity("Gym", date(2024, 1, 10))],
        };
        let after = reduce(
            before.clone(),
            Command::AddActivity(activity("Launch", date(2024, 3, 1))),
        );

        assert_eq!(before.activities.len(), 1);
        assert_eq!(titles(&after), ["Launch", "Gym"]);
    }

    #[test]
    fn observers_see_every_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::new();
        store.subscribe(Recorder(Rc::clone(&seen)));

        store.load(vec![activity("Saved", date(2024, 1, 1))]);
        store.append(activity("New", date(2024, 6, 1)));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], ["Saved"]);
        assert_eq!(seen[1], ["New", "Saved"]);
    }

    #[test]
    fn subscribing_does_not_notify() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::new();
        store.append(activity("Gym", date(2024, 1, 10)));
        store.subscribe(Recorder(Rc::clone(&seen)));

        assert!(seen.borrow().is_empty());
    }

    fn date_strategy() -> impl Strategy<Value = Date> {
        (2000i16..2030, 1i8..=12, 1i8..=28).prop_map(|(y, m, d)| date(y, m, d))
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

        #[test]
        fn appends_keep_descending_order(dates in prop::collection::vec(date_strategy(), 0..40)) {
            let mut store = Store::new();
            for (i, d) in dates.into_iter().enumerate() {
                store.append(activity(&format!("a{i}"), d));
                prop_assert!(is_sorted_descending(store.state()));
            }
        }

        #[test]
        fn append_only_adds(dates in prop::collection::vec(date_strategy(), 1..30)) {
            let mut store = Store::new();
            for (i, d) in dates.into_iter().enumerate() {
                let before = store.state().activities.clone();
                let added = activity(&format!("a{i}"), d);
                let after = store.append(added.clone()).activities.clone();

                prop_assert_eq!(after.len(), before.len() + 1);
                prop_assert!(after.contains(&added));
                for old in &before {
                    prop_assert!(after.contains(old));
                }
            }
        }
    }
}
