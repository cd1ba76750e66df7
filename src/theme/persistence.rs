use crate::theme::Theme;

/// Key-value persistence for the theme preference. Writes are
/// best-effort; a backend that cannot persist simply drops the value
/// and the next session falls back to the ambient signal.
pub trait ThemePersistence: Send + Sync {
    fn load(&self) -> Option<Theme>;
    fn store(&self, theme: Theme);
}

/// Ambient, read-only system preference signal (e.g. OS dark mode).
pub trait SystemTheme {
    /// `None` when the platform exposes no such signal.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Stand-in for platforms without an ambient preference signal.
pub struct NoAmbientTheme;

impl SystemTheme for NoAmbientTheme {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }
}
