/// Marker class placed on the root element while dark mode is active.
pub const DARK_MODE_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn from_is_dark(is_dark: bool) -> Self {
        if is_dark { ThemeMode::Dark } else { ThemeMode::Light }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Class to put on the root presentation element, if any.
    pub fn root_class(self) -> Option<&'static str> {
        match self {
            ThemeMode::Dark => Some(DARK_MODE_CLASS),
            ThemeMode::Light => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
        }
    }
}

/// Snapshot of the theme flag. Starts in dark mode and only changes through
/// [`crate::utils::ThemeStore::toggle_dark_mode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeState {
    is_dark_mode: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self { is_dark_mode: true }
    }
}

impl ThemeState {
    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode
    }

    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_is_dark(self.is_dark_mode)
    }

    pub(crate) fn toggle(&mut self) {
        self.is_dark_mode = !self.is_dark_mode;
    }
}
