use super::{FanoutService, NotificationListener};
use crate::dto::NotificationRecord;
use std::{
    collections::HashMap,
    panic::{catch_unwind, AssertUnwindSafe},
    sync::Mutex,
};

pub struct FanoutServiceImpl {
    listeners: Mutex<HashMap<String, NotificationListener>>,
}

impl FanoutServiceImpl {
    pub fn new() -> Self {
        let listeners = HashMap::new();
        let listeners = Mutex::new(listeners);

        Self { listeners }
    }

    fn lock_listeners(&self) -> std::sync::MutexGuard<'_, HashMap<String, NotificationListener>> {
        self.listeners
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for FanoutServiceImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl FanoutService for FanoutServiceImpl {
    fn register(&self, key: &str, listener: NotificationListener) {
        let previous = self.lock_listeners().insert(key.to_string(), listener);

        match previous.is_some() {
            true => tracing::debug!(key, "replaced notification listener"),
            false => tracing::debug!(key, "registered notification listener"),
        }
    }

    fn unregister(&self, key: &str) {
        let removed = self.lock_listeners().remove(key);

        if removed.is_some() {
            tracing::debug!(key, "unregistered notification listener");
        }
    }

    fn dispatch(&self, record: &NotificationRecord) {
        // Snapshot before iterating: listeners may register/unregister
        // from inside a callback
        let listeners = {
            let lock = self.lock_listeners();
            lock.iter()
                .map(|(key, listener)| (key.clone(), listener.clone()))
                .collect::<Vec<_>>()
        };

        tracing::debug!(
            id = %record.id,
            listeners = listeners.len(),
            "dispatching notification"
        );

        for (key, listener) in listeners {
            let result = catch_unwind(AssertUnwindSafe(|| listener(record)));
            if result.is_err() {
                tracing::error!(key, "notification listener panicked");
            }
        }
    }

    fn clear(&self) {
        self.lock_listeners().clear();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dto::{NotificationPayload, NotificationType};
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };
    use time::OffsetDateTime;

    #[test]
    fn register_same_key_twice_fires_once() {
        let service = FanoutServiceImpl::new();
        let counter = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let counter = counter.clone();
            service.register(
                "orders-list",
                Arc::new(move |_| {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
            );
        }

        service.dispatch(&create_record());

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn register_replaces_with_latest_listener() {
        let service = FanoutServiceImpl::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let count = first.clone();
        service.register(
            "bell",
            Arc::new(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            }),
        );
        let count = second.clone();
        service.register(
            "bell",
            Arc::new(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            }),
        );

        service.dispatch(&create_record());

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unregister_stops_delivery() {
        let service = FanoutServiceImpl::new();
        let counter = Arc::new(AtomicUsize::new(0));

        let count = counter.clone();
        service.register(
            "bell",
            Arc::new(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            }),
        );
        service.unregister("bell");

        service.dispatch(&create_record());

        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn panicking_listener_does_not_block_others() {
        let service = FanoutServiceImpl::new();
        let counter = Arc::new(AtomicUsize::new(0));

        service.register("broken", Arc::new(|_| panic!("listener bug")));
        let count = counter.clone();
        service.register(
            "healthy",
            Arc::new(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            }),
        );

        service.dispatch(&create_record());

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn listener_may_register_during_dispatch() {
        let service = Arc::new(FanoutServiceImpl::new());

        let registry = service.clone();
        service.register(
            "re-render",
            Arc::new(move |_| {
                // a UI re-render triggered by the event registers again
                registry.register("late", Arc::new(|_| ()));
            }),
        );

        service.dispatch(&create_record());

        assert_eq!(service.lock_listeners().len(), 2);
    }

    #[test]
    fn clear_drops_all_listeners() {
        let service = FanoutServiceImpl::new();
        service.register("a", Arc::new(|_| ()));
        service.register("b", Arc::new(|_| ()));

        service.clear();

        assert!(service.lock_listeners().is_empty());
    }

    fn create_record() -> NotificationRecord {
        NotificationRecord {
            id: "n-1".to_string(),
            kind: NotificationType::NewOrder,
            payload: NotificationPayload::default(),
            timestamp: OffsetDateTime::now_utc(),
            read: false,
        }
    }
}
