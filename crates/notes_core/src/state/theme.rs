//! Process-wide theme preference.

use crate::state::observable::Observable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    Viu,
}

impl ThemeMode {
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Viu,
            Self::Viu => Self::Light,
        }
    }
}

/// Shared theme selection; clones observe the same value.
#[derive(Debug, Clone)]
pub struct ThemePreference {
    mode: Observable<ThemeMode>,
}

impl ThemePreference {
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            mode: Observable::new(initial),
        }
    }

    pub fn get(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn set(&self, mode: ThemeMode) {
        self.mode.set(mode);
    }

    /// Cycles light, dark, viu and back.
    pub fn toggle(&self) -> ThemeMode {
        let mut next = ThemeMode::default();
        self.mode.update(|current| {
            next = current.next();
            next
        });
        next
    }

    pub fn observe(&self) -> &Observable<ThemeMode> {
        &self.mode
    }
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{ThemeMode, ThemePreference};

    #[test]
    fn toggle_cycles_through_all_modes() {
        let theme = ThemePreference::default();
        assert_eq!(theme.toggle(), ThemeMode::Dark);
        assert_eq!(theme.toggle(), ThemeMode::Viu);
        assert_eq!(theme.toggle(), ThemeMode::Light);
    }

    #[test]
    fn concurrent_toggles_each_advance_once() {
        let theme = ThemePreference::default();
        let workers: Vec<_> = (0..3)
            .map(|_| {
                let theme = theme.clone();
                std::thread::spawn(move || theme.toggle())
            })
            .collect();
        let mut seen: Vec<_> = workers
            .into_iter()
            .map(|worker| worker.join().unwrap())
            .collect();
        seen.sort_by_key(|mode| *mode as u8);
        assert_eq!(seen, vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::Viu]);
        assert_eq!(theme.get(), ThemeMode::Light);
    }

    #[test]
    fn clones_share_selection() {
        let theme = ThemePreference::default();
        let other = theme.clone();
        other.set(ThemeMode::Viu);
        assert_eq!(theme.get(), ThemeMode::Viu);
    }
}
