// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use ureq::Agent;
use ureq::http::Response;
use velograph_catalog::{
    DefinitionId, FrameDefinition, GeometryId, GeometrySpec, NewFrameDefinition, SearchPage,
};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::query::SearchQuery;

/// Blocking client for the catalog API.
///
/// Calls are independent: no retries, no caching and no timeouts beyond the
/// HTTP agent's defaults.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    config: ClientConfig,
    agent: Agent,
}

impl CatalogClient {
    /// Creates a client for the backend described by `config`.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            agent: Agent::new_with_defaults(),
        }
    }

    /// Creates a client configured from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// The client's configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET /health`. Succeeds if the backend answers with any 2xx status.
    pub fn health(&self) -> Result<(), ClientError> {
        let url = self.config.health_url();
        debug!(%url, "health probe");
        self.agent.get(&url).call().map_err(|e| log_failure(&url, e))?;
        Ok(())
    }

    /// `GET /api/bikes/`: the first `limit` frame definitions.
    pub fn list(&self, limit: u32) -> Result<Vec<FrameDefinition>, ClientError> {
        self.get_json("/", &[("limit", limit.to_string())])
    }

    /// `GET /api/bikes/search`: combined keyword and filter search.
    pub fn search(&self, query: &SearchQuery) -> Result<SearchPage<FrameDefinition>, ClientError> {
        query.validate()?;
        self.get_json("/search", &query.to_pairs())
    }

    /// `GET /api/bikes/search/geometry`: sizes ordered by distance to the
    /// target stack and reach, which must both be set.
    pub fn search_geometry(
        &self,
        query: &SearchQuery,
    ) -> Result<SearchPage<GeometrySpec>, ClientError> {
        if query.stack.is_none() || query.reach.is_none() {
            return Err(ClientError::InvalidQuery(
                "geometry search needs both stack and reach",
            ));
        }
        query.validate()?;
        self.get_json("/search/geometry", &query.to_pairs())
    }

    /// `GET /api/bikes/search/keyword`: definitions matching brand or model.
    pub fn search_keyword(
        &self,
        query: &SearchQuery,
    ) -> Result<SearchPage<FrameDefinition>, ClientError> {
        query.validate()?;
        self.get_json("/search/keyword", &query.to_pairs())
    }

    /// `GET /api/bikes/{id}`.
    pub fn get_bike(&self, id: DefinitionId) -> Result<FrameDefinition, ClientError> {
        self.get_json(&format!("/{id}"), &[])
    }

    /// `GET /api/bikes/definitions/{id}`, including every size.
    pub fn get_definition(&self, id: DefinitionId) -> Result<FrameDefinition, ClientError> {
        self.get_json(&format!("/definitions/{id}"), &[])
    }

    /// `GET /api/bikes/specs/{id}`, including the definition summary.
    pub fn get_spec(&self, id: GeometryId) -> Result<GeometrySpec, ClientError> {
        self.get_json(&format!("/specs/{id}"), &[])
    }

    /// `POST /api/bikes/`.
    pub fn create(&self, body: &NewFrameDefinition) -> Result<FrameDefinition, ClientError> {
        let url = self.config.api_url("/");
        let json = encode(body)?;
        debug!(%url, "POST");
        let response = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .send(json.as_str())
            .map_err(|e| log_failure(&url, e))?;
        read_json(response)
    }

    /// `PUT /api/bikes/{id}`.
    pub fn update(
        &self,
        id: DefinitionId,
        body: &NewFrameDefinition,
    ) -> Result<FrameDefinition, ClientError> {
        let url = self.config.api_url(&format!("/{id}"));
        let json = encode(body)?;
        debug!(%url, "PUT");
        let response = self
            .agent
            .put(&url)
            .header("Content-Type", "application/json")
            .send(json.as_str())
            .map_err(|e| log_failure(&url, e))?;
        read_json(response)
    }

    /// `DELETE /api/bikes/{id}`.
    pub fn delete_bike(&self, id: DefinitionId) -> Result<(), ClientError> {
        self.delete(&format!("/{id}"))
    }

    /// `DELETE /api/bikes/specs/{id}`.
    pub fn delete_spec(&self, id: GeometryId) -> Result<(), ClientError> {
        self.delete(&format!("/specs/{id}"))
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = self.config.api_url(path);
        debug!(%url, params = pairs.len(), "GET");
        let mut request = self.agent.get(&url);
        for (key, value) in pairs {
            request = request.query(*key, value);
        }
        let response = request.call().map_err(|e| log_failure(&url, e))?;
        read_json(response)
    }

    fn delete(&self, path: &str) -> Result<(), ClientError> {
        let url = self.config.api_url(path);
        debug!(%url, "DELETE");
        self.agent
            .delete(&url)
            .call()
            .map_err(|e| log_failure(&url, e))?;
        Ok(())
    }
}

fn encode<T: Serialize>(body: &T) -> Result<String, ClientError> {
    Ok(serde_json::to_string(body)?)
}

fn read_json<T: DeserializeOwned>(mut response: Response<ureq::Body>) -> Result<T, ClientError> {
    let text = response.body_mut().read_to_string()?;
    serde_json::from_str(&text).map_err(|e| {
        warn!(error = %e, "unexpected response body");
        ClientError::from(e)
    })
}

fn log_failure(url: &str, err: ureq::Error) -> ClientError {
    let err = ClientError::from(err);
    warn!(%url, error = %err, "catalog request failed");
    err
}
