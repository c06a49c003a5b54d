// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! VeloGraph Client: typed access to the catalog REST API.
//!
//! [`CatalogClient`] wraps a blocking `ureq` agent and decodes responses into
//! the [`velograph_catalog`] model:
//!
//! | Call | Route |
//! |------|-------|
//! | [`CatalogClient::list`] | `GET /api/bikes/` |
//! | [`CatalogClient::search`] | `GET /api/bikes/search` |
//! | [`CatalogClient::search_geometry`] | `GET /api/bikes/search/geometry` |
//! | [`CatalogClient::search_keyword`] | `GET /api/bikes/search/keyword` |
//! | [`CatalogClient::get_bike`] | `GET /api/bikes/{id}` |
//! | [`CatalogClient::get_definition`] | `GET /api/bikes/definitions/{id}` |
//! | [`CatalogClient::get_spec`] | `GET /api/bikes/specs/{id}` |
//! | [`CatalogClient::create`] | `POST /api/bikes/` |
//! | [`CatalogClient::update`] | `PUT /api/bikes/{id}` |
//! | [`CatalogClient::delete_bike`] | `DELETE /api/bikes/{id}` |
//! | [`CatalogClient::delete_spec`] | `DELETE /api/bikes/specs/{id}` |
//! | [`CatalogClient::health`] | `GET /health` |
//!
//! Search parameters are built with [`SearchQuery`]. Any transport failure
//! or non-2xx status surfaces as a [`ClientError`].
//!
//! When searches can overlap (a user typing faster than the backend
//! answers), route results through a [`SearchSession`]: each request gets a
//! [`RequestToken`] and only the newest request's response is applied.
//!
//! ```no_run
//! use velograph_client::{CatalogClient, SearchQuery, SearchSession};
//!
//! let client = CatalogClient::from_env();
//! let mut session = SearchSession::new();
//! let token = session.begin();
//! session.complete(token, client.search_geometry(&SearchQuery::target(580.0, 380.0)));
//! for spec in &session.results().items {
//!     println!("{} {:.0}/{:.0}", spec.title(), spec.stack_mm, spec.reach_mm);
//! }
//! ```

mod client;
mod config;
mod error;
mod query;
mod session;

pub use client::CatalogClient;
pub use config::{API_PREFIX, BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL};
pub use error::ClientError;
pub use query::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, SearchQuery};
pub use session::{RequestToken, SearchSequencer, SearchSession};
