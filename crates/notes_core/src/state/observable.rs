//! Publish-on-change value container.

use std::sync::Arc;
use tokio::sync::watch;

/// A shared value whose changes are pushed to subscribers.
///
/// Clones share the same value. Setting an equal value notifies nobody.
#[derive(Debug)]
pub struct Observable<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T: Clone + PartialEq> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replaces the value. Returns whether subscribers were notified.
    pub fn set(&self, value: T) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }

    /// Derives the next value from the current one under the channel lock
    /// and notifies if it changed.
    pub fn update(&self, f: impl FnOnce(&T) -> T) -> bool {
        self.tx.send_if_modified(|current| {
            let next = f(current);
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        })
    }

    /// Subscribes to future changes; the receiver starts at the current value.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::Observable;

    #[test]
    fn set_notifies_only_on_change() {
        let value = Observable::new(1);
        let rx = value.subscribe();
        assert!(!value.set(1));
        assert!(!rx.has_changed().unwrap());
        assert!(value.set(2));
        assert!(rx.has_changed().unwrap());
        assert_eq!(value.get(), 2);
    }

    #[test]
    fn clones_share_one_value() {
        let value = Observable::new(String::from("a"));
        let other = value.clone();
        other.set("b".to_string());
        assert_eq!(value.get(), "b");
    }

    #[test]
    fn concurrent_updates_are_not_lost() {
        let value = Observable::new(0u32);
        let workers: Vec<_> = (0..8)
            .map(|_| {
                let value = value.clone();
                std::thread::spawn(move || {
                    for _ in 0..1_000 {
                        value.update(|current| current + 1);
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }
        assert_eq!(value.get(), 8_000);
    }

    #[test]
    fn update_derives_from_current() {
        let value = Observable::new(10);
        value.update(|current| current + 5);
        assert_eq!(value.get(), 15);
    }
}
