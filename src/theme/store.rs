use crate::theme::persistence::{SystemTheme, ThemePersistence};
use crate::theme::Theme;
use std::sync::{Mutex, PoisonError};
use tracing::info;

type Listener = Box<dyn FnMut(Theme) + Send>;

/// Reactive cell holding the session's theme preference.
///
/// Initialization order: previously persisted value, else the ambient
/// system signal, else [`Theme::Light`]. Every change is persisted
/// before listeners run; listeners are notified synchronously in
/// registration order, and each listener also receives the current
/// value immediately on subscription.
///
/// The value lock is released before listeners run, so a listener may
/// read [`ThemeStore::current`]. Listeners must not toggle or
/// subscribe from within a notification.
pub struct ThemeStore {
    persistence: Box<dyn ThemePersistence>,
    current: Mutex<Theme>,
    listeners: Mutex<Vec<Listener>>,
}

impl ThemeStore {
    #[must_use]
    pub fn new(persistence: Box<dyn ThemePersistence>, system: &dyn SystemTheme) -> Self {
        let current = persistence.load().unwrap_or_else(|| {
            if system.prefers_dark() == Some(true) {
                Theme::Dark
            } else {
                Theme::Light
            }
        });
        Self {
            persistence,
            current: Mutex::new(current),
            listeners: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        *lock(&self.current)
    }

    /// Registers `listener` and invokes it immediately with the current
    /// value, so consumers apply their side effect for the startup
    /// value too.
    pub fn subscribe(&self, listener: impl FnMut(Theme) + Send + 'static) {
        let current = self.current();
        let mut listeners = lock(&self.listeners);
        let mut listener: Listener = Box::new(listener);
        listener(current);
        listeners.push(listener);
    }

    /// Flips the theme, persists the new value, then notifies all
    /// listeners in registration order. Concurrent toggles resolve in
    /// lock order.
    pub fn toggle(&self) -> Theme {
        let next = {
            let mut current = lock(&self.current);
            let next = current.flipped();
            *current = next;
            self.persistence.store(next);
            next
        };
        for listener in lock(&self.listeners).iter_mut() {
            listener(next);
        }
        info!(theme = next.as_str(), "theme toggled");
        next
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU8, Ordering};
    use std::sync::Arc;

    struct NoPersistence;
    impl ThemePersistence for NoPersistence {
        fn load(&self) -> Option<Theme> {
            None
        }
        fn store(&self, _theme: Theme) {}
    }

    struct FixedSystem(Option<bool>);
    impl SystemTheme for FixedSystem {
        fn prefers_dark(&self) -> Option<bool> {
            self.0
        }
    }

    #[test]
    fn falls_back_to_system_signal_then_light() {
        let store = ThemeStore::new(Box::new(NoPersistence), &FixedSystem(Some(true)));
        assert_eq!(store.current(), Theme::Dark);
        let store = ThemeStore::new(Box::new(NoPersistence), &FixedSystem(None));
        assert_eq!(store.current(), Theme::Light);
    }

    #[test]
    fn subscriber_receives_startup_value_immediately() {
        let store = ThemeStore::new(Box::new(NoPersistence), &FixedSystem(Some(true)));
        let seen = Arc::new(AtomicU8::new(0));
        let seen_by_listener = Arc::clone(&seen);
        store.subscribe(move |theme| {
            seen_by_listener.store(
                match theme {
                    Theme::Light => 1,
                    Theme::Dark => 2,
                },
                Ordering::SeqCst,
            );
        });
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }
}
