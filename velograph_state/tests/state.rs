// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `velograph_state` crate.

use std::io;

use velograph_catalog::GeometrySpec;
use velograph_state::{
    AppState, COMPARISON_KEY, ComparisonItem, FileStore, KeyValueStore, Language, MemoryStore,
    SearchForm, StorageError, THEME_KEY, Theme,
};

fn spec(id: u64, size: &str) -> GeometrySpec {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "size_label": size,
        "stack_mm": 570.0,
        "reach_mm": 380.0,
        "head_tube_angle": 71.5,
        "seat_tube_angle": 73.5,
        "chainstay_length_mm": 425.0,
        "wheelbase_mm": 1030.0,
        "bb_drop_mm": 70.0,
    }))
    .unwrap()
}

#[test]
fn comparison_writes_through_and_reloads_in_order() {
    let mut state = AppState::load(MemoryStore::new());
    assert!(state.add_to_comparison(ComparisonItem::new(spec(2, "M"))));
    assert!(state.add_to_comparison(ComparisonItem::new(spec(1, "S"))));
    assert!(!state.add_to_comparison(ComparisonItem::new(spec(2, "M"))));

    let state = AppState::load(state.into_store());
    let ids: Vec<_> = state.comparison().keys().collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(state.comparison().items()[0].title, "#2 (M)");
    assert_eq!(state.comparison().revision(), 0);
}

#[test]
fn remove_and_clear_persist() {
    let mut state = AppState::load(MemoryStore::new());
    state.add_to_comparison(ComparisonItem::new(spec(1, "S")));
    state.add_to_comparison(ComparisonItem::new(spec(2, "M")));
    assert!(state.remove_from_comparison(1).is_some());
    assert!(state.remove_from_comparison(1).is_none());

    let mut state = AppState::load(state.into_store());
    assert_eq!(state.comparison().keys().collect::<Vec<_>>(), vec![2]);
    assert!(state.clear_comparison());
    assert!(!state.clear_comparison());

    let state = AppState::load(state.into_store());
    assert!(state.comparison().is_empty());
}

#[test]
fn malformed_comparison_entries_are_dropped() {
    let mut store = MemoryStore::new();
    let good = serde_json::to_value(ComparisonItem::new(spec(5, "L"))).unwrap();
    let raw = serde_json::json!([
        {"title": "no geometry"},
        good,
        {"title": "missing stack", "geometry": {"id": 9, "size_label": "XL"}},
        42,
    ]);
    store.set(COMPARISON_KEY, &raw.to_string()).unwrap();

    let state = AppState::load(store);
    assert_eq!(state.comparison().keys().collect::<Vec<_>>(), vec![5]);
}

#[test]
fn garbage_values_fall_back_to_defaults() {
    let mut store = MemoryStore::new();
    store.set(COMPARISON_KEY, "{not json").unwrap();
    store.set(THEME_KEY, "\"sepia\"").unwrap();
    let state = AppState::load(store);
    assert!(state.comparison().is_empty());
    assert_eq!(state.theme(), Theme::Light);
    assert_eq!(state.language(), Language::En);
}

#[test]
fn preferences_and_form_survive_a_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut state = AppState::load(FileStore::open(dir.path()).unwrap());
        assert_eq!(state.toggle_theme(), Theme::Dark);
        state.set_language(Language::Pl);
        state.set_search_form(SearchForm {
            stack: "580".into(),
            reach: "38".into(),
            ..SearchForm::default()
        });
        state.add_to_comparison(ComparisonItem::new(spec(3, "54")));
    }
    assert!(dir.path().join("theme.json").exists());
    assert!(dir.path().join("comparison.json").exists());

    let mut state = AppState::load(FileStore::open(dir.path()).unwrap());
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(state.language(), Language::Pl);
    assert_eq!(state.search_form().reach, "38");
    assert!(state.comparison().contains(&3));

    state.reset_search_form();
    assert!(!dir.path().join("search_form.json").exists());
}

#[test]
fn file_store_rejects_path_like_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();
    assert!(matches!(
        store.set("../escape", "1"),
        Err(StorageError::InvalidKey(_))
    ));
    assert_eq!(store.get("never_set").unwrap(), None);
    store.remove("never_set").unwrap();
}

/// A memory store that counts writes and removals.
#[derive(Debug, Default)]
struct CountingStore {
    inner: MemoryStore,
    writes: usize,
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes += 1;
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.writes += 1;
        self.inner.remove(key)
    }
}

#[test]
fn unchanged_search_form_is_not_written() {
    let mut state = AppState::load(CountingStore::default());
    state.reset_search_form();
    state.set_search_form(SearchForm::default());
    assert_eq!(state.store().writes, 0);

    let form = SearchForm {
        q: String::from("esker"),
        ..SearchForm::default()
    };
    state.set_search_form(form.clone());
    state.set_search_form(form);
    assert_eq!(state.store().writes, 1);

    state.reset_search_form();
    state.reset_search_form();
    assert_eq!(state.store().writes, 2);
    assert_eq!(state.store().inner.get("search_form").unwrap(), None);
}

/// A store whose medium is gone.
#[derive(Debug, Default)]
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(io::Error::other("unplugged").into())
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(io::Error::other("unplugged").into())
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(io::Error::other("unplugged").into())
    }
}

#[test]
fn storage_failures_never_break_the_state() {
    let mut state = AppState::load(BrokenStore);
    assert!(state.add_to_comparison(ComparisonItem::new(spec(1, "S"))));
    state.set_theme(Theme::Dark);
    state.reset_search_form();
    assert_eq!(state.comparison().len(), 1);
    assert_eq!(state.theme(), Theme::Dark);
}
