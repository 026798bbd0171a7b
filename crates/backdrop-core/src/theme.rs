//! Light/dark theme state.
//!
//! The [`ThemeStore`] owns the preference: it reconciles the persisted choice
//! with the OS preference at mount, applies the result to the document and
//! publishes it on a [`ThemeSignal`]. Animators never look the theme up on
//! their own; they hold a [`ThemeReader`] and sample it at frame start.
//!
//! Precedence is stored value, then OS preference, then light.

use crate::Color;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Visual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light mode
    #[default]
    Light,
    /// Dark mode
    Dark,
}

impl ThemeMode {
    /// Mode for a boolean dark flag.
    #[must_use]
    pub const fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Whether this is dark mode.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The literal persisted for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a persisted value.
    ///
    /// An empty value counts as absent. Any non-empty value other than
    /// `"dark"` is an explicit light choice.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "" => None,
            "dark" => Some(Self::Dark),
            _ => Some(Self::Light),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Write side of the shared theme flag. Held by the [`ThemeStore`].
#[derive(Debug, Default)]
pub struct ThemeSignal {
    mode: Rc<Cell<ThemeMode>>,
}

impl ThemeSignal {
    /// Create a signal holding `mode`.
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode: Rc::new(Cell::new(mode)),
        }
    }

    /// Publish a new mode to every reader.
    pub fn publish(&self, mode: ThemeMode) {
        self.mode.set(mode);
    }

    /// Current mode.
    #[must_use]
    pub fn get(&self) -> ThemeMode {
        self.mode.get()
    }

    /// A read-only handle on this signal.
    #[must_use]
    pub fn reader(&self) -> ThemeReader {
        ThemeReader {
            mode: Rc::clone(&self.mode),
        }
    }
}

/// Read side of the shared theme flag.
#[derive(Debug, Clone)]
pub struct ThemeReader {
    mode: Rc<Cell<ThemeMode>>,
}

impl ThemeReader {
    /// A reader not attached to any store, fixed at `mode`.
    #[must_use]
    pub fn fixed(mode: ThemeMode) -> Self {
        Self {
            mode: Rc::new(Cell::new(mode)),
        }
    }

    /// Sample the current mode.
    #[must_use]
    pub fn get(&self) -> ThemeMode {
        self.mode.get()
    }
}

/// Key-value persistence for the preference.
pub trait PreferenceStorage {
    /// Error returned by a failed write.
    type Error: std::error::Error;

    /// Read a value. Any read failure is reported as `None`.
    fn load(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn save(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// The host document and OS preference.
pub trait ThemeEnvironment {
    /// Whether the OS reports a dark color-scheme preference.
    fn prefers_dark(&self) -> bool;

    /// Reflect `mode` in the document so styling follows it.
    fn apply(&self, mode: ThemeMode);
}

/// Theme preference store.
#[derive(Debug)]
pub struct ThemeStore<S, E> {
    storage: S,
    environment: E,
    key: String,
    signal: ThemeSignal,
}

impl<S: PreferenceStorage, E: ThemeEnvironment> ThemeStore<S, E> {
    /// Create a store persisting under `key`. Nothing is read until
    /// [`initialize`](Self::initialize).
    pub fn new(storage: S, environment: E, key: impl Into<String>) -> Self {
        Self {
            storage,
            environment,
            key: key.into(),
            signal: ThemeSignal::default(),
        }
    }

    /// Effective mode from stored value and OS preference, without side
    /// effects.
    pub fn resolve(&self) -> ThemeMode {
        match self.storage.load(&self.key).as_deref().and_then(ThemeMode::from_stored) {
            Some(mode) => mode,
            None => ThemeMode::from_dark(self.environment.prefers_dark()),
        }
    }

    /// Resolve the effective mode, apply it to the document and publish it.
    /// Returns whether dark mode is active.
    pub fn initialize(&mut self) -> bool {
        let mode = self.resolve();
        tracing::debug!(key = %self.key, %mode, "theme resolved");
        self.environment.apply(mode);
        self.signal.publish(mode);
        mode.is_dark()
    }

    /// Flip `current`, apply and publish the result, then persist it.
    ///
    /// Persistence is best-effort; a failed write leaves the new mode active
    /// for this session only.
    pub fn toggle(&mut self, current: bool) -> bool {
        let mode = ThemeMode::from_dark(current).toggled();
        self.environment.apply(mode);
        self.signal.publish(mode);
        if let Err(err) = self.storage.save(&self.key, mode.as_str()) {
            tracing::warn!(key = %self.key, %mode, error = %err, "theme preference not persisted");
        }
        mode.is_dark()
    }

    /// Current mode.
    pub fn mode(&self) -> ThemeMode {
        self.signal.get()
    }

    /// Whether dark mode is active.
    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    /// A reader for animators.
    pub fn reader(&self) -> ThemeReader {
        self.signal.reader()
    }

    /// Storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Underlying environment.
    pub fn environment(&self) -> &E {
        &self.environment
    }
}

/// Particle field colors for one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticlePalette {
    /// Gradient outer color (drawn transparent)
    pub base: Color,
    /// Gradient center and link color
    pub accent: Color,
}

impl ParticlePalette {
    /// Palette for `mode`.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                base: Color::rgba8(30, 58, 138, 1.0),
                accent: Color::rgba8(37, 99, 235, 1.0),
            },
            ThemeMode::Dark => Self {
                base: Color::rgba8(30, 64, 175, 1.0),
                accent: Color::rgba8(59, 130, 246, 1.0),
            },
        }
    }
}

/// Grid colors for one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPalette {
    /// Grid lines
    pub line: Color,
    /// Pulse bars
    pub pulse: Color,
}

impl GridPalette {
    /// Palette for `mode`.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                line: Color::rgba8(30, 58, 138, 0.08),
                pulse: Color::rgba8(37, 99, 235, 0.12),
            },
            ThemeMode::Dark => Self {
                line: Color::rgba8(30, 64, 175, 0.1),
                pulse: Color::rgba8(59, 130, 246, 0.15),
            },
        }
    }
}
