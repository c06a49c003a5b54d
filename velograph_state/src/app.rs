// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use velograph_catalog::GeometryId;
use velograph_compare::ComparisonSet;

use crate::comparison::{ComparisonItem, decode_items};
use crate::prefs::{Language, SearchForm, Theme};
use crate::store::KeyValueStore;

/// Storage key of the comparison list.
pub const COMPARISON_KEY: &str = "comparison";
/// Storage key of the search form.
pub const SEARCH_FORM_KEY: &str = "search_form";
/// Storage key of the language.
pub const LANGUAGE_KEY: &str = "language";
/// Storage key of the theme.
pub const THEME_KEY: &str = "theme";

/// Client state backed by a [`KeyValueStore`].
///
/// Every mutation that changes something is written through to the store
/// immediately. The store is a cache: read and write failures are logged and
/// otherwise ignored, so the in-memory state is always usable.
#[derive(Debug)]
pub struct AppState<S> {
    store: S,
    comparison: ComparisonSet<ComparisonItem>,
    search_form: SearchForm,
    theme: Theme,
    language: Language,
}

impl<S: KeyValueStore> AppState<S> {
    /// Loads the state persisted in `store`.
    ///
    /// Missing or malformed values fall back to defaults; malformed entries
    /// of the comparison list are dropped individually.
    pub fn load(store: S) -> Self {
        let comparison = read_raw(&store, COMPARISON_KEY)
            .map(|raw| decode_items(&raw))
            .map(ComparisonSet::from_items)
            .unwrap_or_default();
        let search_form = read_json(&store, SEARCH_FORM_KEY).unwrap_or_default();
        let theme = read_json(&store, THEME_KEY).unwrap_or_default();
        let language = read_json(&store, LANGUAGE_KEY).unwrap_or_default();
        debug!(
            comparison = comparison.len(),
            %theme,
            %language,
            "loaded client state"
        );
        Self {
            store,
            comparison,
            search_form,
            theme,
            language,
        }
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the state, returning the backing store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// The comparison list.
    #[must_use]
    pub fn comparison(&self) -> &ComparisonSet<ComparisonItem> {
        &self.comparison
    }

    /// Adds `item` unless its geometry is already listed.
    ///
    /// Returns `true` if the list changed.
    pub fn add_to_comparison(&mut self, item: ComparisonItem) -> bool {
        let changed = self.comparison.add(item);
        if changed {
            self.persist_comparison();
        }
        changed
    }

    /// Removes the geometry `id` from the list.
    pub fn remove_from_comparison(&mut self, id: GeometryId) -> Option<ComparisonItem> {
        let removed = self.comparison.remove(&id);
        if removed.is_some() {
            self.persist_comparison();
        }
        removed
    }

    /// Adds `item` if absent, removes it otherwise.
    ///
    /// Returns `true` if the geometry is listed afterwards.
    pub fn toggle_comparison(&mut self, item: ComparisonItem) -> bool {
        let listed = self.comparison.toggle(item);
        self.persist_comparison();
        listed
    }

    /// Empties the list. Returns `true` if anything was removed.
    pub fn clear_comparison(&mut self) -> bool {
        let changed = self.comparison.clear();
        if changed {
            self.persist_comparison();
        }
        changed
    }

    /// The last search form.
    #[must_use]
    pub fn search_form(&self) -> &SearchForm {
        &self.search_form
    }

    /// Replaces the search form.
    pub fn set_search_form(&mut self, form: SearchForm) {
        if form != self.search_form {
            self.search_form = form;
            persist(&mut self.store, SEARCH_FORM_KEY, &self.search_form);
        }
    }

    /// Blanks the search form and forgets it.
    pub fn reset_search_form(&mut self) {
        if self.search_form != SearchForm::default() {
            self.search_form = SearchForm::default();
            remove(&mut self.store, SEARCH_FORM_KEY);
        }
    }

    /// Current theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Sets the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        if theme != self.theme {
            self.theme = theme;
            persist(&mut self.store, THEME_KEY, &theme);
        }
    }

    /// Switches between light and dark, returning the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    /// Current language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Sets the language.
    pub fn set_language(&mut self, language: Language) {
        if language != self.language {
            self.language = language;
            persist(&mut self.store, LANGUAGE_KEY, &language);
        }
    }

    fn persist_comparison(&mut self) {
        persist(&mut self.store, COMPARISON_KEY, self.comparison.items());
    }
}

fn read_raw<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            warn!(key, error = %err, "failed to read persisted state");
            None
        }
    }
}

fn read_json<S: KeyValueStore, T: DeserializeOwned>(store: &S, key: &str) -> Option<T> {
    let raw = read_raw(store, key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(key, error = %err, "discarding malformed persisted value");
            None
        }
    }
}

fn persist<S: KeyValueStore, T: Serialize + ?Sized>(store: &mut S, key: &str, value: &T) {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(err) => {
            warn!(key, error = %err, "failed to encode state");
            return;
        }
    };
    if let Err(err) = store.set(key, &json) {
        warn!(key, error = %err, "failed to persist state");
    }
}

fn remove<S: KeyValueStore>(store: &mut S, key: &str) {
    if let Err(err) = store.remove(key) {
        warn!(key, error = %err, "failed to remove persisted state");
    }
}
