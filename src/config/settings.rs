//! Read-only settings snapshot with change subscriptions.
//!
//! The screen never mutates settings. It reads the current snapshot on every
//! render, and observers are told when an update actually changed something.

use crate::config::ResolvedConfig;
use crate::i18n::Language;
use crate::theme::ThemeName;
use std::fmt;

/// Settings the read receipt screen consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Moment-style time pattern.
    pub time_format: String,
    pub base_url: String,
    pub user_id: Option<String>,
    pub auth_token: Option<String>,
    pub theme: ThemeName,
    pub language: Language,
}

impl Settings {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            time_format: config.time_format.clone(),
            base_url: config.server_url.clone().unwrap_or_default(),
            user_id: config.user_id.clone(),
            auth_token: config.auth_token.clone(),
            theme: config.theme,
            language: config.language,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&ResolvedConfig::default())
    }
}

/// Handle returned by [`SettingsStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&Settings)>;

/// Owner of the current [`Settings`] snapshot.
pub struct SettingsStore {
    current: Settings,
    revision: u64,
    next_subscription: u64,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl SettingsStore {
    pub fn new(initial: Settings) -> Self {
        Self {
            current: initial,
            revision: 0,
            next_subscription: 0,
            observers: Vec::new(),
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &Settings {
        &self.current
    }

    /// Number of effective updates applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Register an observer called after every effective update.
    pub fn subscribe(&mut self, observer: impl FnMut(&Settings) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Apply a change. Observers run only if the snapshot differs afterwards.
    ///
    /// Returns whether anything changed.
    pub fn update(&mut self, change: impl FnOnce(&mut Settings)) -> bool {
        let mut next = self.current.clone();
        change(&mut next);
        if next == self.current {
            return false;
        }

        self.current = next;
        self.revision += 1;
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.current);
        }
        true
    }
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsStore")
            .field("current", &self.current)
            .field("revision", &self.revision)
            .field("observers", &self.observers.len())
            .finish()
    }
}
