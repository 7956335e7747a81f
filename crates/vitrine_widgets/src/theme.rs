//! Light/dark theme toggle
//!
//! The colour scheme is the page's only persisted preference. It is read once
//! at construction and written back on every toggle.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vitrine_core::events::{event_types, EventType};
use vitrine_core::fsm::{Machine, StateTransitions};

/// Store key holding the colour scheme
pub const THEME_KEY: &str = "theme";

/// Page colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Value of the root `data-theme` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ColorScheme::Light),
            "dark" => Some(ColorScheme::Dark),
            _ => None,
        }
    }

    /// Icon shown on the toggle: the scheme you would switch to
    pub fn icon_class(&self) -> &'static str {
        match self {
            ColorScheme::Light => "fas fa-moon",
            ColorScheme::Dark => "fas fa-sun",
        }
    }
}

impl StateTransitions for ColorScheme {
    fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            (ColorScheme::Light, event_types::CLICK) => Some(ColorScheme::Dark),
            (ColorScheme::Dark, event_types::CLICK) => Some(ColorScheme::Light),
            _ => None,
        }
    }
}

/// Preference storage errors
#[derive(Error, Debug)]
pub enum PreferenceError {
    /// Reading or writing the backing storage failed
    #[error("preference store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be decoded
    #[error("preference store is malformed: {0}")]
    Malformed(String),
}

/// Key/value storage for user preferences (the page's `localStorage`)
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Process-local preference store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Theme toggle bound to a preference store
pub struct ThemeToggle<S: PreferenceStore> {
    store: S,
    scheme: Machine<ColorScheme>,
}

impl<S: PreferenceStore> ThemeToggle<S> {
    /// Restore the saved scheme, defaulting to light
    pub fn new(store: S) -> Self {
        let saved = match store.get(THEME_KEY) {
            Ok(value) => value.as_deref().and_then(ColorScheme::parse),
            Err(err) => {
                tracing::warn!(%err, "failed to read theme preference");
                None
            }
        };
        Self {
            store,
            scheme: Machine::new(saved.unwrap_or_default()).with_history_limit(0),
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme.current()
    }

    /// Icon class for the toggle button
    pub fn icon(&self) -> &'static str {
        self.scheme().icon_class()
    }

    /// Value for the root `data-theme` attribute
    pub fn data_theme(&self) -> &'static str {
        self.scheme().as_str()
    }

    /// Flip the scheme and persist it
    pub fn toggle(&mut self) -> ColorScheme {
        if let Some(scheme) = self.scheme.send(event_types::CLICK) {
            tracing::debug!(?scheme, "theme toggled");
            self.persist(scheme);
        }
        self.scheme()
    }

    fn persist(&mut self, scheme: ColorScheme) {
        if let Err(err) = self.store.set(THEME_KEY, scheme.as_str()) {
            tracing::warn!(%err, "failed to persist theme preference");
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
