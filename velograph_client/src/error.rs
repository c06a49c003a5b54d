// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors from [`CatalogClient`](crate::CatalogClient) calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never got a response (DNS, connect, TLS, I/O).
    #[error("network error: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("http {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
    /// The response body was not the expected JSON.
    #[error("json error: {0}")]
    Decode(String),
    /// The query was rejected before sending.
    #[error("invalid query: {0}")]
    InvalidQuery(&'static str),
}

impl ClientError {
    /// Returns `true` for a 404 answer.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404 })
    }
}

impl From<ureq::Error> for ClientError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(status) => Self::Status { status },
            other => Self::Transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
