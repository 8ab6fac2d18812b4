//! Theme preference use case

use crate::domain::Theme;
use crate::error::Result;
use crate::infrastructure::KeyValueStore;
use std::str::FromStr;

/// Storage key holding "light" or "dark"
pub const THEME_KEY: &str = "serene_diary_theme";

/// Reads and writes the chosen theme, falling back to the platform preference
pub struct ThemeService<S: KeyValueStore> {
    storage: S,
    system_theme: Theme,
}

impl<S: KeyValueStore> ThemeService<S> {
    pub fn new(storage: S, system_theme: Theme) -> Self {
        ThemeService {
            storage,
            system_theme,
        }
    }

    /// Stored theme if it is exactly "light" or "dark", otherwise the platform preference
    pub fn current(&self) -> Result<Theme> {
        let stored = self.storage.get(THEME_KEY)?;
        let theme = match stored.as_deref() {
            Some(value @ ("light" | "dark")) => Theme::from_str(value).unwrap_or(self.system_theme),
            Some(other) => {
                log::warn!("Ignoring stored theme {:?}", other);
                self.system_theme
            }
            None => self.system_theme,
        };
        Ok(theme)
    }

    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.storage.set(THEME_KEY, theme.as_str())?;
        log::info!("Theme set to {}", theme);
        Ok(())
    }

    /// Switch to the other theme and return it
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.current()?.toggled();
        self.set(next)?;
        Ok(next)
    }
}
