//! Domain service calls. Each issues exactly one request and folds the
//! status code into an [`Outcome`] through a fixed [`StatusTable`].

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::network::ApiResponse;

pub mod payment;
pub mod products;
mod search;
pub mod store_branches;

pub use search::SearchParams;

pub const DEFAULT_PAGE_SIZE: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Success,
    ServerError,
    RequestError,
    UnknownError,
}

/// Normalized result of a service call. Only `Success` and `RequestError`
/// carry the response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    ServerError,
    RequestError(Option<Value>),
    UnknownError,
}

impl<T> Outcome<T> {
    pub fn kind(&self) -> ResultKind {
        match self {
            Outcome::Success(_) => ResultKind::Success,
            Outcome::ServerError => ResultKind::ServerError,
            Outcome::RequestError(_) => ResultKind::RequestError,
            Outcome::UnknownError => ResultKind::UnknownError,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(t) => Some(t),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StatusTable {
    pub success: &'static [u16],
    pub request_error: &'static [u16],
    pub server_error: &'static [u16],
}

pub const SEARCH_STATUS: StatusTable = StatusTable {
    success: &[200],
    request_error: &[400],
    server_error: &[500],
};

pub const CREATE_STATUS: StatusTable = StatusTable {
    success: &[201],
    request_error: &[400],
    server_error: &[500],
};

pub const PAYMENT_STATUS: StatusTable = StatusTable {
    success: &[200, 201],
    request_error: &[400],
    server_error: &[500],
};

impl StatusTable {
    pub fn classify(&self, status_code: u16) -> ResultKind {
        if self.success.contains(&status_code) {
            ResultKind::Success
        } else if self.request_error.contains(&status_code) {
            ResultKind::RequestError
        } else if self.server_error.contains(&status_code) {
            ResultKind::ServerError
        } else {
            ResultKind::UnknownError
        }
    }

    /// Folds a response into an outcome, decoding the success body as `T`.
    /// A success body that does not decode is an error, not an outcome.
    pub fn outcome<T: DeserializeOwned>(&self, resp: ApiResponse) -> Result<Outcome<T>> {
        Ok(match self.classify(resp.status_code) {
            ResultKind::Success => {
                let data = resp.data.unwrap_or(Value::Null);
                Outcome::Success(
                    serde_json::from_value(data).context("Malformed success payload")?,
                )
            }
            ResultKind::RequestError => Outcome::RequestError(resp.data),
            ResultKind::ServerError => Outcome::ServerError,
            ResultKind::UnknownError => Outcome::UnknownError,
        })
    }

    /// Like [`StatusTable::outcome`], but the status code alone decides the
    /// kind. A success body that is missing or does not decode becomes
    /// `Success(None)`.
    pub fn outcome_lenient<T: DeserializeOwned>(&self, resp: ApiResponse) -> Outcome<Option<T>> {
        match self.classify(resp.status_code) {
            ResultKind::Success => Outcome::Success(resp.data.and_then(|data| {
                serde_json::from_value(data)
                    .map_err(|e| warn!("Ignoring undecodable success payload: {}", e))
                    .ok()
            })),
            ResultKind::RequestError => Outcome::RequestError(resp.data),
            ResultKind::ServerError => Outcome::ServerError,
            ResultKind::UnknownError => Outcome::UnknownError,
        }
    }
}
