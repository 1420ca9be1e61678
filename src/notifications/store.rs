// SPDX-License-Identifier: MPL-2.0
//! Ordered, keyed storage for notification records.
//!
//! The store keeps records in insertion order (oldest first) and holds at
//! most one record per [`NotificationId`]. It knows nothing about timers or
//! transitions; the provider layers those on top.

use super::id::{self, NotificationId};
use super::record::{Notification, Options};

/// The notification stack.
#[derive(Debug, Clone)]
pub struct Store<C> {
    records: Vec<Notification<C>>,
}

impl<C> Default for Store<C> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<C> Store<C> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification and returns its ID.
    ///
    /// The ID comes from `options.id` or is generated when that is absent or
    /// empty. Returns `None` and leaves the stack untouched if a record with
    /// that ID already exists.
    pub fn add(&mut self, content: C, options: Options) -> Option<NotificationId> {
        let id = options
            .id
            .clone()
            .filter(|id| !id.as_str().is_empty())
            .unwrap_or_else(id::generate);

        if self.has(&id) {
            return None;
        }

        self.records
            .push(Notification::new(id.clone(), content, options));
        Some(id)
    }

    /// Removes the notification with the given ID.
    ///
    /// Returns the removed record, or `None` if it was absent.
    pub fn remove(&mut self, id: &NotificationId) -> Option<Notification<C>> {
        let pos = self.records.iter().position(|n| n.id() == id)?;
        Some(self.records.remove(pos))
    }

    /// Removes every notification, returning their IDs oldest first.
    pub fn remove_all(&mut self) -> Vec<NotificationId> {
        self.records
            .drain(..)
            .map(|n| n.id().clone())
            .collect()
    }

    /// Returns whether a notification with this ID is present.
    #[must_use]
    pub fn has(&self, id: &NotificationId) -> bool {
        self.records.iter().any(|n| n.id() == id)
    }

    /// Returns the notification with this ID.
    #[must_use]
    pub fn get(&self, id: &NotificationId) -> Option<&Notification<C>> {
        self.records.iter().find(|n| n.id() == id)
    }

    /// Returns the records in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Notification<C>] {
        &self.records
    }

    /// Returns an iterator over the records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification<C>> {
        self.records.iter()
    }

    /// Returns the IDs in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &NotificationId> {
        self.records.iter().map(Notification::id)
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store: Store<&str> = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut store = Store::new();
        let a = store.add("a", Options::new()).expect("a");
        let b = store.add("b", Options::new().id("b")).expect("b");
        let c = store.add("c", Options::new()).expect("c");

        let ids: Vec<_> = store.ids().cloned().collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn add_prefers_caller_id() {
        let mut store = Store::new();
        let id = store.add("saved", Options::new().id("save-ok"));
        assert_eq!(id, Some(NotificationId::from("save-ok")));
    }

    #[test]
    fn empty_caller_id_falls_back_to_generated() {
        let mut store = Store::new();
        let first = store.add("a", Options::new().id("")).expect("first");
        let second = store.add("b", Options::new().id("")).expect("second");

        assert_eq!(first.as_str().len(), 6);
        assert_eq!(second.as_str().len(), 6);
        assert_eq!(store.len(), 2);
        assert!(!store.has(&NotificationId::from("")));
    }

    #[test]
    fn duplicate_id_is_rejected_without_overwrite() {
        let mut store = Store::new();
        store.add("first", Options::new().id("x"));

        assert_eq!(store.add("second", Options::new().id("x")), None);
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(&NotificationId::from("x")).map(|n| *n.content()),
            Some("first")
        );
    }

    #[test]
    fn remove_takes_exactly_one_record() {
        let mut store = Store::new();
        store.add("a", Options::new().id("a"));
        store.add("b", Options::new().id("b"));
        store.add("c", Options::new().id("c"));

        let removed = store.remove(&NotificationId::from("b"));
        assert_eq!(removed.map(|n| *n.content()), Some("b"));

        let ids: Vec<_> = store.ids().map(NotificationId::as_str).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut store = Store::new();
        store.add("a", Options::new().id("a"));

        assert!(store.remove(&NotificationId::from("zzz")).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_all_empties_and_is_idempotent() {
        let mut store = Store::new();
        for i in 0..5 {
            store.add(i, Options::new());
        }

        assert_eq!(store.remove_all().len(), 5);
        assert!(store.is_empty());
        assert!(store.remove_all().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn removed_id_can_be_added_again() {
        let mut store = Store::new();
        let id = NotificationId::from("again");
        store.add(1, Options::new().id(id.clone()));
        store.remove(&id);

        assert_eq!(store.add(2, Options::new().id(id.clone())), Some(id));
    }
}
