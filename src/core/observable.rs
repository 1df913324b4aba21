//! Observable value with synchronous change notification
//!
//! Replaces a lifecycle-bound observer: a subject holds its current value and
//! calls every subscriber, on the thread that called [`Observable::set`], each
//! time the value changes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// Trait for subscriber callbacks
pub trait Observer<T>: Send + Sync {
    /// Called with the new value after every `set`
    fn on_changed(&self, value: &T);
}

/// Implement Observer for closures
impl<T, F> Observer<T> for F
where
    F: Fn(&T) + Send + Sync,
{
    fn on_changed(&self, value: &T) {
        (self)(value)
    }
}

/// Handle returned by [`Observable::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type ArcObserver<T> = Arc<dyn Observer<T>>;

/// A value plus the set of callbacks interested in it
pub struct Observable<T> {
    value: RwLock<Option<T>>,
    observers: Mutex<Vec<(SubscriptionId, ArcObserver<T>)>>,
    next_id: AtomicU64,
}

impl<T: Clone> Observable<T> {
    /// Create an observable with no value yet
    pub fn new() -> Self {
        Self {
            value: RwLock::new(None),
            observers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create an observable that already holds a value
    pub fn with_value(value: T) -> Self {
        let observable = Self::new();
        *observable.value.write().unwrap_or_else(|e| e.into_inner()) = Some(value);
        observable
    }

    /// Current value, `None` until the first `set`
    pub fn value(&self) -> Option<T> {
        self.value
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Whether a value has ever been set
    pub fn is_initialized(&self) -> bool {
        self.value
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Replace the value and notify every subscriber
    pub fn set(&self, value: T) {
        *self.value.write().unwrap_or_else(|e| e.into_inner()) = Some(value.clone());

        // Snapshot so callbacks may subscribe/unsubscribe without deadlocking
        let observers: Vec<ArcObserver<T>> = self
            .observers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(_, o)| o.clone())
            .collect();

        tracing::trace!("[Observable] notifying {} observers", observers.len());
        for observer in observers {
            observer.on_changed(&value);
        }
    }

    /// Register a callback; it is not invoked for the current value
    pub fn subscribe<O: Observer<T> + 'static>(&self, observer: O) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((id, Arc::new(observer)));
        id
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.lock().unwrap_or_else(|e| e.into_inner());
        let before = observers.len();
        observers.retain(|(sid, _)| *sid != id);
        observers.len() != before
    }

    /// Number of registered callbacks
    pub fn observer_count(&self) -> usize {
        self.observers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

impl<T: Clone> Default for Observable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let observers = self
            .observers
            .lock()
            .map(|o| o.len())
            .unwrap_or_default();
        f.debug_struct("Observable")
            .field("value", &self.value.read().ok())
            .field("observers", &observers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_value_and_initialized() {
        let obs: Observable<u32> = Observable::new();
        assert!(!obs.is_initialized());
        assert_eq!(obs.value(), None);

        obs.set(7);
        assert!(obs.is_initialized());
        assert_eq!(obs.value(), Some(7));
    }

    #[test]
    fn test_subscribers_notified_on_set() {
        let obs: Observable<String> = Observable::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        obs.subscribe(move |v: &String| sink.lock().unwrap().push(v.clone()));

        obs.set("a".into());
        obs.set("b".into());

        assert_eq!(*seen.lock().unwrap(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_subscribe_does_not_replay_current_value() {
        let obs = Observable::with_value(1u8);
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        obs.subscribe(move |_: &u8| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        obs.set(2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let obs: Observable<u8> = Observable::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        let id = obs.subscribe(move |_: &u8| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(obs.observer_count(), 1);

        assert!(obs.unsubscribe(id));
        assert!(!obs.unsubscribe(id));
        obs.set(1);

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(obs.observer_count(), 0);
    }
}
