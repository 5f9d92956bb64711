use std::sync::{Arc, Mutex, Weak};

use mint_types::ClickTarget;

use crate::lock;

pub type ClickListener = Arc<dyn Fn(&ClickTarget) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, ClickListener)>,
}

/// Document-level click listeners
#[derive(Clone, Default)]
pub struct Document {
    listeners: Arc<Mutex<Listeners>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener, it stays attached until the guard is dropped
    pub fn add_click_listener<F>(&self, listener: F) -> ListenerGuard
    where
        F: Fn(&ClickTarget) + Send + Sync + 'static,
    {
        let mut listeners = lock(&self.listeners);
        listeners.next_id += 1;
        let id = listeners.next_id;
        listeners.entries.push((id, Arc::new(listener)));

        ListenerGuard {
            listeners: Arc::downgrade(&self.listeners),
            id,
        }
    }

    /// Run every listener attached at the time of the click
    ///
    /// Listeners may add or remove listeners while running; those changes
    /// apply from the next click on.
    pub fn dispatch_click(&self, target: &ClickTarget) {
        let snapshot: Vec<ClickListener> = lock(&self.listeners)
            .entries
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in snapshot {
            listener(target);
        }
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).entries.len()
    }
}

pub struct ListenerGuard {
    listeners: Weak<Mutex<Listeners>>,
    id: u64,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            lock(&listeners).entries.retain(|(id, _)| *id != self.id);
        }
    }
}
