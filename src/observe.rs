//! Observable settings state: single values and ordered lists.

use parking_lot::{Mutex, RwLock};

use crate::store::SettingsError;

type Subscriber<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Hook invoked after every external mutation of an [`ObservableList`].
///
/// Receives a snapshot of the new contents. Errors propagate to the mutating
/// caller unchanged.
pub type OnMutate = Box<dyn Fn(&[String]) -> Result<(), SettingsError> + Send + Sync>;

/// A single mutable setting value with synchronous change notification.
///
/// Subscribers run inline on the thread performing the [`set`]. The value
/// carries no identity beyond its current contents, and no validation
/// happens here; that is the caller's job.
///
/// [`set`]: ObservableSetting::set
pub struct ObservableSetting<T> {
    value: RwLock<T>,
    subscribers: Mutex<Vec<Subscriber<T>>>,
}

impl<T: Clone> ObservableSetting<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Replace the value and notify all subscribers.
    pub fn set(&self, value: T) {
        *self.value.write() = value.clone();
        for subscriber in self.subscribers.lock().iter() {
            subscriber(&value);
        }
    }

    /// Replace the value without notifying anyone.
    ///
    /// The reload path uses this so a bulk reload does not echo through
    /// subscribers.
    pub fn load(&self, value: T) {
        *self.value.write() = value;
    }

    /// Register a subscriber; it runs synchronously on every [`set`].
    ///
    /// [`set`]: ObservableSetting::set
    pub fn subscribe(&self, subscriber: impl Fn(&T) + Send + Sync + 'static) {
        self.subscribers.lock().push(Box::new(subscriber));
    }
}

/// An ordered list setting whose external mutations report through an
/// explicit hook.
///
/// The owning synchronizer registers the hook, making "mutate implies
/// persist" visible at the wiring site. Every [`push`], [`insert`],
/// [`remove`], and [`clear`] invokes the hook inline on the mutating thread
/// with a snapshot of the new contents; rapid successive mutations mean one
/// hook invocation each, with no batching or coalescing.
///
/// [`replace_all`] swaps the whole backing vector in one assignment and never
/// touches the hook, so bulk reloads cannot feed back into persistence.
///
/// [`push`]: ObservableList::push
/// [`insert`]: ObservableList::insert
/// [`remove`]: ObservableList::remove
/// [`clear`]: ObservableList::clear
/// [`replace_all`]: ObservableList::replace_all
#[derive(Default)]
pub struct ObservableList {
    items: RwLock<Vec<String>>,
    on_mutate: Mutex<Option<OnMutate>>,
}

impl ObservableList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current contents.
    pub fn items(&self) -> Vec<String> {
        self.items.read().clone()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.read().iter().any(|i| i == item)
    }

    /// Append an item and run the mutation hook.
    pub fn push(&self, item: impl Into<String>) -> Result<(), SettingsError> {
        let snapshot = {
            let mut items = self.items.write();
            items.push(item.into());
            items.clone()
        };
        self.notify(&snapshot)
    }

    /// Insert an item at `index` and run the mutation hook.
    ///
    /// Indices past the end append.
    pub fn insert(&self, index: usize, item: impl Into<String>) -> Result<(), SettingsError> {
        let snapshot = {
            let mut items = self.items.write();
            let index = index.min(items.len());
            items.insert(index, item.into());
            items.clone()
        };
        self.notify(&snapshot)
    }

    /// Remove the item at `index` and run the mutation hook.
    ///
    /// Returns the removed item, or `None` when `index` is out of bounds (in
    /// which case no hook runs).
    pub fn remove(&self, index: usize) -> Result<Option<String>, SettingsError> {
        let (removed, snapshot) = {
            let mut items = self.items.write();
            if index >= items.len() {
                return Ok(None);
            }
            let removed = items.remove(index);
            (removed, items.clone())
        };
        self.notify(&snapshot)?;
        Ok(Some(removed))
    }

    /// Clear the list and run the mutation hook.
    pub fn clear(&self) -> Result<(), SettingsError> {
        let snapshot = {
            let mut items = self.items.write();
            items.clear();
            items.clone()
        };
        self.notify(&snapshot)
    }

    /// Replace the entire contents in one swap, bypassing the hook.
    ///
    /// Used during reload: the new sequence is built off to the side and
    /// assigned whole, so no per-item mutation path runs.
    pub fn replace_all(&self, items: Vec<String>) {
        *self.items.write() = items;
    }

    /// Register the mutation hook. A second registration replaces the first.
    pub fn set_on_mutate(&self, hook: OnMutate) {
        *self.on_mutate.lock() = Some(hook);
    }

    fn notify(&self, snapshot: &[String]) -> Result<(), SettingsError> {
        match self.on_mutate.lock().as_ref() {
            Some(hook) => hook(snapshot),
            None => Ok(()),
        }
    }
}
