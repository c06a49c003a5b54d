// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! VeloGraph State: what the client remembers between runs.
//!
//! [`AppState`] owns:
//! - The comparison list ([`ComparisonItem`]s in a
//!   [`ComparisonSet`](velograph_compare::ComparisonSet)).
//! - The last [`SearchForm`], as raw text.
//! - The [`Theme`] and [`Language`] preferences.
//!
//! Storage is injected through the [`KeyValueStore`] port. [`MemoryStore`]
//! keeps everything in a hash map; [`FileStore`] writes one JSON file per key
//! into a directory. Each piece of state lives under its own key
//! ([`COMPARISON_KEY`], [`SEARCH_FORM_KEY`], [`THEME_KEY`], [`LANGUAGE_KEY`])
//! and is rewritten whenever it changes.
//!
//! ```
//! use velograph_state::{AppState, MemoryStore, Theme};
//!
//! let mut state = AppState::load(MemoryStore::new());
//! state.set_theme(Theme::Dark);
//!
//! let reloaded = AppState::load(state.into_store());
//! assert_eq!(reloaded.theme(), Theme::Dark);
//! ```

mod app;
mod comparison;
mod prefs;
mod store;

pub use app::{AppState, COMPARISON_KEY, LANGUAGE_KEY, SEARCH_FORM_KEY, THEME_KEY};
pub use comparison::ComparisonItem;
pub use prefs::{Language, SearchForm, Theme, UnknownPreference, parse_number};
pub use store::{FileStore, KeyValueStore, MemoryStore, StorageError, validate_key};
