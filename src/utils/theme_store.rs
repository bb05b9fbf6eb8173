use std::fmt::{ Debug, Formatter };
use std::sync::atomic::{ AtomicU64, Ordering };
use super::theme_state::{ ThemeMode, ThemeState };

// Shared by every store so a handle never matches another store's observer.
static NEXT_SUBSCRIPTION: AtomicU64 = AtomicU64::new(0);

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

struct Observer {
    id: Subscription,
    callback: Box<dyn FnMut(bool)>,
}

/// Single source of truth for the dark-mode flag.
///
/// The flag is only ever changed by [`ThemeStore::toggle_dark_mode`]. Observers
/// registered with [`ThemeStore::subscribe`] are called synchronously, in
/// registration order, with the new value before the toggle returns.
pub struct ThemeStore {
    state: ThemeState,
    observers: Vec<Observer>,
}

impl Debug for ThemeStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeStore {
    pub fn new() -> Self {
        Self {
            state: ThemeState::default(),
            observers: Vec::new(),
        }
    }

    pub fn is_dark_mode(&self) -> bool {
        self.state.is_dark_mode()
    }

    pub fn mode(&self) -> ThemeMode {
        self.state.mode()
    }

    pub fn snapshot(&self) -> ThemeState {
        self.state
    }

    pub fn toggle_dark_mode(&mut self) {
        let previous = self.state.mode();
        self.state.toggle();
        let is_dark = self.state.is_dark_mode();
        log::debug!("Theme toggled: {} -> {}", previous.label(), self.state.mode().label());

        for observer in self.observers.iter_mut() {
            (observer.callback)(is_dark);
        }
    }

    pub fn subscribe<F>(&mut self, callback: F) -> Subscription where F: FnMut(bool) + 'static {
        let id = Subscription(NEXT_SUBSCRIPTION.fetch_add(1, Ordering::Relaxed));
        self.observers.push(Observer {
            id,
            callback: Box::new(callback),
        });
        log::debug!("Theme observer {:?} registered ({} total)", id, self.observers.len());
        id
    }

    /// Returns `false` when the subscription was already removed or belongs to
    /// another store.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|observer| observer.id != subscription);
        let removed = self.observers.len() != before;
        if removed {
            log::debug!("Theme observer {:?} removed", subscription);
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }
}
